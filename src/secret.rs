// secret.rs
// Shared secret type and the provisioner that issues new ones.

use std::fmt;

use crate::base32;
use crate::entropy::{EntropySource, OsEntropy};
use crate::error::{OtpError, Result};
use crate::otp::TotpParams;
use crate::provision::build_provisioning_uri_with;

pub const MIN_SECRET_BYTES: usize = 16; // 128 bits, RFC 4226 minimum
pub const DEFAULT_SECRET_BYTES: usize = 20; // 160 bits, recommended

/// HMAC key shared between this service's caller and an authenticator app.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Vec<u8>);

impl Secret {
    pub fn new(bytes: Vec<u8>) -> Self {
        Secret(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_base32(&self) -> String {
        base32::encode(&self.0)
    }

    pub fn from_base32(s: &str) -> Result<Self> {
        base32::decode(s).map(Secret)
    }
}

impl From<Vec<u8>> for Secret {
    fn from(bytes: Vec<u8>) -> Self {
        Secret(bytes)
    }
}

impl From<&[u8]> for Secret {
    fn from(bytes: &[u8]) -> Self {
        Secret(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Secret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// Never print key material.
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({} bytes)", self.0.len())
    }
}

/// Free-function form of [`Secret::to_base32`].
pub fn to_base32(secret: &Secret) -> String {
    secret.to_base32()
}

/// Free-function form of [`Secret::from_base32`].
pub fn from_base32(s: &str) -> Result<Secret> {
    Secret::from_base32(s)
}

/// Everything a client needs to enroll an authenticator app.
#[derive(Debug, Clone)]
pub struct Provisioned {
    pub secret: Secret,
    pub base32: String,
    pub otpauth_url: String,
}

/// Issues secrets from an injected random source.
#[derive(Debug, Clone, Default)]
pub struct SecretProvisioner<E = OsEntropy> {
    entropy: E,
    params: TotpParams,
}

impl SecretProvisioner<OsEntropy> {
    pub fn os() -> Self {
        SecretProvisioner::new(OsEntropy)
    }
}

impl<E: EntropySource> SecretProvisioner<E> {
    pub fn new(entropy: E) -> Self {
        SecretProvisioner {
            entropy,
            params: TotpParams::default(),
        }
    }

    /// Parameters advertised in provisioning URIs built by [`Self::provision`].
    pub fn with_params(mut self, params: TotpParams) -> Self {
        self.params = params;
        self
    }

    pub fn generate_secret(&mut self, byte_length: usize) -> Result<Secret> {
        if byte_length == 0 {
            return Err(OtpError::InsufficientEntropy(
                "requested zero bytes of key material".to_string(),
            ));
        }
        let mut buf = vec![0u8; byte_length];
        self.entropy.fill(&mut buf)?;
        Ok(Secret(buf))
    }

    /// Generate a secret of `byte_length` bytes and its otpauth URI.
    pub fn provision(
        &mut self,
        issuer: &str,
        account_label: &str,
        byte_length: usize,
    ) -> Result<Provisioned> {
        let secret = self.generate_secret(byte_length)?;
        let otpauth_url =
            build_provisioning_uri_with(&secret, issuer, account_label, &self.params)?;
        Ok(Provisioned {
            base32: secret.to_base32(),
            secret,
            otpauth_url,
        })
    }
}
