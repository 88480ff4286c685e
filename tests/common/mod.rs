#![allow(dead_code)]

use std::sync::Arc;

use totpgate::{
    clock::FixedClock,
    config::Config,
    state::{init_state_with_clock, AppState},
    Secret,
};

/// RFC 4226 / RFC 6238 SHA-1 test seed.
pub const RFC_SEED: &[u8] = b"12345678901234567890";
pub const RFC_SEED_SHA256: &[u8] = b"12345678901234567890123456789012";
pub const RFC_SEED_SHA512: &[u8] =
    b"1234567890123456789012345678901234567890123456789012345678901234";

pub fn rfc_secret() -> Secret {
    Secret::from(RFC_SEED)
}

/// App state with default configuration and a clock frozen at `now`.
pub fn state_at(now: u64) -> Arc<AppState> {
    Arc::new(
        init_state_with_clock(Config::default(), Arc::new(FixedClock(now)))
            .expect("default config is valid"),
    )
}
