//! TOTP/HOTP secret provisioning and verification (RFC 4226, RFC 6238),
//! with a thin axum front end in the `totpgate` binary.

pub mod app;
pub mod base32;
pub mod clock;
pub mod config;
pub mod entropy;
pub mod error;
pub mod otp;
pub mod provision;
pub mod qr;
pub mod routes;
pub mod secret;
pub mod state;

pub use error::{OtpError, Result};
pub use otp::{hotp, totp, verify, verify_hotp, Algorithm, OtpEngine, TotpParams};
pub use provision::build_provisioning_uri;
pub use secret::{from_base32, to_base32, Provisioned, Secret, SecretProvisioner};
