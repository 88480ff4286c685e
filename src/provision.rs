// provision.rs
// otpauth:// provisioning URIs for authenticator apps (Key Uri Format).

use urlencoding::encode;

use crate::error::{OtpError, Result};
use crate::otp::TotpParams;
use crate::secret::Secret;

// Issuer and account label are joined with ':' in the URI path, and control
// characters have no meaning to any authenticator, so both are refused rather
// than encoded. Everything else is percent-encoded.
fn check_label_part(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(OtpError::InvalidLabel(format!("{field} must not be empty")));
    }
    if value.contains(':') {
        return Err(OtpError::InvalidLabel(format!(
            "{field} must not contain ':'"
        )));
    }
    if value.chars().any(char::is_control) {
        return Err(OtpError::InvalidLabel(format!(
            "{field} must not contain control characters"
        )));
    }
    Ok(())
}

/// URI advertising the given parameters.
pub fn build_provisioning_uri_with(
    secret: &Secret,
    issuer: &str,
    account_label: &str,
    params: &TotpParams,
) -> Result<String> {
    check_label_part("issuer", issuer)?;
    check_label_part("account label", account_label)?;
    params.validate()?;

    let issuer = encode(issuer);
    Ok(format!(
        "otpauth://totp/{issuer}:{label}?secret={secret}&issuer={issuer}&algorithm={algorithm}&digits={digits}&period={period}",
        label = encode(account_label),
        secret = secret.to_base32(),
        algorithm = params.algorithm,
        digits = params.digits,
        period = params.step,
    ))
}

/// URI for the default parameters (SHA1, 6 digits, 30 second period).
pub fn build_provisioning_uri(
    secret: &Secret,
    issuer: &str,
    account_label: &str,
) -> Result<String> {
    build_provisioning_uri_with(secret, issuer, account_label, &TotpParams::default())
}
