#[path = "common/mod.rs"]
mod common;

use std::sync::Arc;

use totpgate::clock::FixedClock;
use totpgate::otp::verify_with;
use totpgate::otp::MAX_WINDOW;
use totpgate::{hotp, totp, verify, verify_hotp, Algorithm, OtpEngine, OtpError, TotpParams};

// One second into a step, so +-30s is one step away and +-61s is two.
const T: u64 = 1_111_111_111;

#[test]
fn accepts_codes_from_adjacent_steps() {
    let secret = common::rfc_secret();
    for time in [T - 30, T, T + 30] {
        let code = totp(&secret, time, 30, 6).unwrap();
        assert!(verify(&secret, &code, T, 1, 30, 6), "code for {time}");
    }
}

#[test]
fn rejects_codes_two_steps_away() {
    let secret = common::rfc_secret();
    for time in [T - 61, T + 61] {
        let code = totp(&secret, time, 30, 6).unwrap();
        assert!(!verify(&secret, &code, T, 1, 30, 6), "code for {time}");
    }
}

#[test]
fn zero_window_only_accepts_current_step() {
    let secret = common::rfc_secret();
    let now = totp(&secret, T, 30, 6).unwrap();
    let prev = totp(&secret, T - 30, 30, 6).unwrap();
    assert!(verify(&secret, &now, T, 0, 30, 6));
    assert!(!verify(&secret, &prev, T, 0, 30, 6));
}

#[test]
fn malformed_candidates_are_false() {
    let secret = common::rfc_secret();
    let code = totp(&secret, T, 30, 6).unwrap();

    assert!(!verify(&secret, "", T, 1, 30, 6));
    assert!(!verify(&secret, "12a456", T, 1, 30, 6));
    assert!(!verify(&secret, &code[..5], T, 1, 30, 6));
    assert!(!verify(&secret, &format!("{code}0"), T, 1, 30, 6));
    assert!(!verify(&secret, &format!(" {code}"), T, 1, 30, 6));
    assert!(!verify(&secret, "１２３４５６", T, 1, 30, 6));
}

#[test]
fn bad_parameters_are_false_not_errors() {
    let secret = common::rfc_secret();
    let code = totp(&secret, T, 30, 6).unwrap();
    assert!(!verify(&secret, &code, T, 1, 0, 6));
    assert!(!verify(&secret, &code, T, 1, 30, 0));
    assert!(!verify(&secret, "12345678901", T, 1, 30, 11));
}

#[test]
fn window_near_epoch_does_not_underflow() {
    let secret = common::rfc_secret();
    // Step 0 and step 1 codes, verified at time 0 with a large window.
    assert!(verify(&secret, "755224", 0, 5, 30, 6));
    assert!(verify(&secret, "287082", 0, 1, 30, 6));
    assert!(!verify(&secret, "359152", 0, 1, 30, 6));
}

#[test]
fn verify_respects_algorithm() {
    let secret = common::rfc_secret();
    let params = TotpParams {
        algorithm: Algorithm::Sha256,
        ..TotpParams::default()
    };
    let sha1_code = totp(&secret, T, 30, 6).unwrap();
    let sha256_code = totpgate::otp::totp_with(&secret, T, &params).unwrap();
    assert!(verify_with(&secret, &sha256_code, T, 0, &params));
    assert!(!verify_with(&secret, &sha1_code, T, 0, &params));
}

#[test]
fn hotp_verification_looks_ahead_only() {
    let secret = common::rfc_secret();
    let c5 = hotp(&secret, 5, 6).unwrap();
    assert!(verify_hotp(&secret, &c5, 3, 2, 6));
    assert!(!verify_hotp(&secret, &c5, 3, 1, 6));
    // Counters behind the expected one are never accepted.
    assert!(!verify_hotp(&secret, &c5, 6, 10, 6));
    assert!(!verify_hotp(&secret, "abcdef", 0, 10, 6));
}

#[test]
fn engine_reads_time_from_its_clock() {
    let secret = common::rfc_secret();
    let engine = OtpEngine::new(TotpParams::default(), 1, Arc::new(FixedClock(T))).unwrap();
    assert_eq!(engine.params(), &TotpParams::default());
    assert_eq!(engine.window(), 1);

    let current = engine.current(&secret).unwrap();
    assert_eq!(current, totp(&secret, T, 30, 6).unwrap());
    assert!(engine.verify_current(&secret, &current));
    assert!(engine.verify_current(&secret, &totp(&secret, T + 30, 30, 6).unwrap()));
    assert!(!engine.verify_current(&secret, &totp(&secret, T + 61, 30, 6).unwrap()));
}

#[test]
fn engine_rejects_invalid_params() {
    let params = TotpParams {
        step: 0,
        ..TotpParams::default()
    };
    assert!(OtpEngine::new(params, 1, Arc::new(FixedClock(0))).is_err());
}

#[test]
fn window_above_cap_is_refused() {
    let secret = common::rfc_secret();
    let code = totp(&secret, T, 30, 6).unwrap();
    assert!(verify(&secret, &code, T, MAX_WINDOW, 30, 6));
    assert!(!verify(&secret, &code, T, MAX_WINDOW + 1, 30, 6));
    assert!(!verify(&secret, &code, T, u32::MAX, 30, 6));

    let c0 = hotp(&secret, 0, 6).unwrap();
    assert!(verify_hotp(&secret, &c0, 0, MAX_WINDOW, 6));
    assert!(!verify_hotp(&secret, &c0, 0, MAX_WINDOW + 1, 6));
}

#[test]
fn engine_rejects_window_above_cap() {
    let clock = Arc::new(FixedClock(T));
    assert!(OtpEngine::new(TotpParams::default(), MAX_WINDOW, clock.clone()).is_ok());
    assert_eq!(
        OtpEngine::new(TotpParams::default(), MAX_WINDOW + 1, clock).unwrap_err(),
        OtpError::InvalidWindow {
            got: MAX_WINDOW + 1,
            max: MAX_WINDOW
        }
    );
}
