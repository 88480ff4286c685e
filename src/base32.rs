// base32.rs
// RFC 4648 base32 codec for shared secrets (uppercase, no padding).

use data_encoding::BASE32_NOPAD;

use crate::error::{OtpError, Result};

/// Encode raw bytes as unpadded uppercase base32.
pub fn encode(bytes: &[u8]) -> String {
    BASE32_NOPAD.encode(bytes)
}

/// Decode a base32 string.
///
/// Authenticator apps and humans hand secrets back in many shapes, so ASCII
/// whitespace and trailing `=` padding are dropped and lowercase is accepted
/// before the strict decode.
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let normalized: String = input
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect::<String>()
        .trim_end_matches('=')
        .to_ascii_uppercase();

    if let Some(bad) = normalized
        .chars()
        .find(|c| !matches!(c, 'A'..='Z' | '2'..='7'))
    {
        return Err(OtpError::InvalidEncoding(format!(
            "character {bad:?} is outside the base32 alphabet"
        )));
    }

    BASE32_NOPAD
        .decode(normalized.as_bytes())
        .map_err(|e| OtpError::InvalidEncoding(e.to_string()))
}
