// entropy.rs
// Secure random sources for secret generation.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore, TryRngCore};

use crate::error::{OtpError, Result};

/// Fills buffers with key material. Implementations must be cryptographically
/// secure and must report failure instead of degrading to a weaker source.
pub trait EntropySource {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()>;
}

/// The operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| OtpError::InsufficientEntropy(e.to_string()))
    }
}

/// Adapter for any `rand` generator marked `CryptoRng`, e.g. a seeded
/// `StdRng` when deterministic secrets are needed.
#[derive(Debug, Clone)]
pub struct RngEntropy<R>(pub R);

impl<R: RngCore + CryptoRng> EntropySource for RngEntropy<R> {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        self.0.fill_bytes(dest);
        Ok(())
    }
}
