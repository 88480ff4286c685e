// error.rs
// Error taxonomy shared by the provisioning and verification code.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    /// The secure random source failed or produced nothing.
    #[error("secure random source unavailable: {0}")]
    InsufficientEntropy(String),

    #[error("invalid base32 encoding: {0}")]
    InvalidEncoding(String),

    /// Issuer or account label cannot be placed in an otpauth label.
    #[error("invalid label: {0}")]
    InvalidLabel(String),

    #[error("digits must be between {min} and {max}, got {got}")]
    InvalidDigits { got: u32, min: u32, max: u32 },

    #[error("window must be at most {max} steps, got {got}")]
    InvalidWindow { got: u32, max: u32 },

    #[error("step duration must be greater than zero")]
    InvalidStep,

    #[error("shared secret must not be empty")]
    InvalidSecret,
}

pub type Result<T> = std::result::Result<T, OtpError>;
