// otp.rs
// HOTP (RFC 4226) and TOTP (RFC 6238) computation and verification.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use subtle::{Choice, ConstantTimeEq};

use crate::clock::Clock;
use crate::error::{OtpError, Result};
use crate::secret::Secret;

pub const MIN_DIGITS: u32 = 1;
pub const MAX_DIGITS: u32 = 10;
pub const DEFAULT_DIGITS: u32 = 6;
pub const DEFAULT_STEP: u64 = 30;
pub const DEFAULT_WINDOW: u32 = 1;
/// Largest accepted window; each step either side costs one HMAC per check.
pub const MAX_WINDOW: u32 = 10;

/// HMAC hash used to derive codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    Sha1,
    Sha256,
    Sha512,
}

impl Algorithm {
    /// Name as written in the otpauth `algorithm` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Sha1 => "SHA1",
            Algorithm::Sha256 => "SHA256",
            Algorithm::Sha512 => "SHA512",
        }
    }

    fn digest(self, key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
        match self {
            Algorithm::Sha1 => mac::<Hmac<Sha1>>(key, message),
            Algorithm::Sha256 => mac::<Hmac<Sha256>>(key, message),
            Algorithm::Sha512 => mac::<Hmac<Sha512>>(key, message),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "").as_str() {
            "SHA1" => Ok(Algorithm::Sha1),
            "SHA256" => Ok(Algorithm::Sha256),
            "SHA512" => Ok(Algorithm::Sha512),
            other => Err(format!("unsupported algorithm {other:?}")),
        }
    }
}

fn mac<M: Mac + KeyInit>(key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    let mut m = <M as Mac>::new_from_slice(key).map_err(|_| OtpError::InvalidSecret)?;
    m.update(message);
    Ok(m.finalize().into_bytes().to_vec())
}

/// Code shape shared by generator and verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotpParams {
    pub digits: u32,
    /// Step duration in seconds.
    pub step: u64,
    /// Unix time at which step 0 begins.
    pub t0: u64,
    pub algorithm: Algorithm,
}

impl Default for TotpParams {
    fn default() -> Self {
        TotpParams {
            digits: DEFAULT_DIGITS,
            step: DEFAULT_STEP,
            t0: 0,
            algorithm: Algorithm::Sha1,
        }
    }
}

impl TotpParams {
    pub fn validate(&self) -> Result<()> {
        check_digits(self.digits)?;
        if self.step == 0 {
            return Err(OtpError::InvalidStep);
        }
        Ok(())
    }

    /// Time step containing `time_seconds`. Times before `t0` fall in step 0.
    pub fn counter_at(&self, time_seconds: u64) -> Result<u64> {
        if self.step == 0 {
            return Err(OtpError::InvalidStep);
        }
        Ok(time_seconds.saturating_sub(self.t0) / self.step)
    }
}

fn check_window(window: u32) -> Result<()> {
    if window <= MAX_WINDOW {
        Ok(())
    } else {
        Err(OtpError::InvalidWindow {
            got: window,
            max: MAX_WINDOW,
        })
    }
}

fn check_digits(digits: u32) -> Result<()> {
    if (MIN_DIGITS..=MAX_DIGITS).contains(&digits) {
        Ok(())
    } else {
        Err(OtpError::InvalidDigits {
            got: digits,
            min: MIN_DIGITS,
            max: MAX_DIGITS,
        })
    }
}

/// HOTP with an explicit hash algorithm.
pub fn hotp_with(
    secret: &Secret,
    counter: u64,
    digits: u32,
    algorithm: Algorithm,
) -> Result<String> {
    check_digits(digits)?;
    if secret.is_empty() {
        return Err(OtpError::InvalidSecret);
    }

    let hash = algorithm.digest(secret.as_bytes(), &counter.to_be_bytes())?;

    // Dynamic truncation: the low nibble of the last byte picks the offset.
    let offset = (hash[hash.len() - 1] & 0x0f) as usize;
    let binary = u32::from_be_bytes([
        hash[offset],
        hash[offset + 1],
        hash[offset + 2],
        hash[offset + 3],
    ]) & 0x7fff_ffff;

    let code = u64::from(binary) % 10u64.pow(digits);
    Ok(format!("{:0width$}", code, width = digits as usize))
}

/// RFC 4226 HOTP over HMAC-SHA1.
pub fn hotp(secret: &Secret, counter: u64, digits: u32) -> Result<String> {
    hotp_with(secret, counter, digits, Algorithm::Sha1)
}

pub fn totp_with(secret: &Secret, time_seconds: u64, params: &TotpParams) -> Result<String> {
    check_digits(params.digits)?;
    let counter = params.counter_at(time_seconds)?;
    hotp_with(secret, counter, params.digits, params.algorithm)
}

/// RFC 6238 TOTP over HMAC-SHA1 with `t0 = 0`.
pub fn totp(
    secret: &Secret,
    time_seconds: u64,
    step_duration: u64,
    digits: u32,
) -> Result<String> {
    totp_with(
        secret,
        time_seconds,
        &TotpParams {
            digits,
            step: step_duration,
            ..TotpParams::default()
        },
    )
}

// Public shape check only: length and digit-ness are not secret.
fn well_formed(candidate: &str, digits: u32) -> bool {
    candidate.len() == digits as usize && candidate.bytes().all(|b| b.is_ascii_digit())
}

// Compares against every counter in the range without stopping early, so the
// work done does not depend on which counter (if any) matched.
fn matches_any<I>(
    secret: &Secret,
    candidate: &str,
    counters: I,
    digits: u32,
    algorithm: Algorithm,
) -> bool
where
    I: IntoIterator<Item = u64>,
{
    let mut matched = Choice::from(0u8);
    for counter in counters {
        match hotp_with(secret, counter, digits, algorithm) {
            Ok(expected) => matched |= expected.as_bytes().ct_eq(candidate.as_bytes()),
            Err(_) => return false,
        }
    }
    matched.into()
}

/// Check `candidate` against the steps `current - window ..= current + window`.
///
/// Never fails: malformed candidates, invalid parameters and a window above
/// [`MAX_WINDOW`] all yield `false`.
pub fn verify_with(
    secret: &Secret,
    candidate: &str,
    time_seconds: u64,
    window: u32,
    params: &TotpParams,
) -> bool {
    if params.validate().is_err()
        || check_window(window).is_err()
        || !well_formed(candidate, params.digits)
    {
        return false;
    }
    let Ok(current) = params.counter_at(time_seconds) else {
        return false;
    };
    let window = u64::from(window);
    let first = current.saturating_sub(window);
    let last = current.saturating_add(window);
    matches_any(secret, candidate, first..=last, params.digits, params.algorithm)
}

pub fn verify(
    secret: &Secret,
    candidate: &str,
    time_seconds: u64,
    window: u32,
    step_duration: u64,
    digits: u32,
) -> bool {
    verify_with(
        secret,
        candidate,
        time_seconds,
        window,
        &TotpParams {
            digits,
            step: step_duration,
            ..TotpParams::default()
        },
    )
}

/// Counter-based check over `counter ..= counter + look_ahead`.
///
/// HOTP tokens only ever move forward, so the window does not look back.
pub fn verify_hotp(
    secret: &Secret,
    candidate: &str,
    counter: u64,
    look_ahead: u32,
    digits: u32,
) -> bool {
    if check_digits(digits).is_err()
        || check_window(look_ahead).is_err()
        || !well_formed(candidate, digits)
    {
        return false;
    }
    let last = counter.saturating_add(u64::from(look_ahead));
    matches_any(secret, candidate, counter..=last, digits, Algorithm::Sha1)
}

/// TOTP generator/verifier bound to fixed parameters and a clock.
///
/// Secrets are passed on every call and never retained.
#[derive(Clone)]
pub struct OtpEngine {
    params: TotpParams,
    window: u32,
    clock: Arc<dyn Clock>,
}

impl OtpEngine {
    pub fn new(params: TotpParams, window: u32, clock: Arc<dyn Clock>) -> Result<Self> {
        params.validate()?;
        check_window(window)?;
        Ok(OtpEngine {
            params,
            window,
            clock,
        })
    }

    pub fn params(&self) -> &TotpParams {
        &self.params
    }

    pub fn window(&self) -> u32 {
        self.window
    }

    pub fn now(&self) -> u64 {
        self.clock.now_unix()
    }

    /// Code for the clock's current step.
    pub fn current(&self, secret: &Secret) -> Result<String> {
        totp_with(secret, self.now(), &self.params)
    }

    pub fn verify_current(&self, secret: &Secret, candidate: &str) -> bool {
        verify_with(secret, candidate, self.now(), self.window, &self.params)
    }
}

impl fmt::Debug for OtpEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OtpEngine")
            .field("params", &self.params)
            .field("window", &self.window)
            .finish_non_exhaustive()
    }
}
