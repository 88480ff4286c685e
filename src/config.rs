// config.rs
// Server configuration read from the environment (after dotenvy loads .env).

use anyhow::{Context, Result};
use std::{env, net::SocketAddr, str::FromStr};

use crate::otp::{
    Algorithm, TotpParams, DEFAULT_DIGITS, DEFAULT_STEP, DEFAULT_WINDOW, MAX_WINDOW,
};
use crate::secret::{DEFAULT_SECRET_BYTES, MIN_SECRET_BYTES};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_ISSUER: &str = "MyApp";
pub const DEFAULT_LABEL: &str = "User";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Issuer used when a setup request does not name one.
    pub default_issuer: String,
    pub params: TotpParams,
    pub window: u32,
    pub secret_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            default_issuer: DEFAULT_ISSUER.to_string(),
            params: TotpParams::default(),
            window: DEFAULT_WINDOW,
            secret_bytes: DEFAULT_SECRET_BYTES,
        }
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("invalid value for {name}: {raw:?}")),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bind_addr = parse_var("BIND_ADDR", SocketAddr::from_str(DEFAULT_BIND_ADDR)?)?;
        let default_issuer =
            env::var("TOTP_ISSUER").unwrap_or_else(|_| DEFAULT_ISSUER.to_string());
        // otpauth URIs cannot carry t0, so enrolled apps always count from 0.
        let t0: u64 = parse_var("TOTP_T0", 0)?;
        if t0 != 0 {
            anyhow::bail!("TOTP_T0 must be 0: authenticator apps cannot be told another t0");
        }
        let params = TotpParams {
            digits: parse_var("TOTP_DIGITS", DEFAULT_DIGITS)?,
            step: parse_var("TOTP_STEP", DEFAULT_STEP)?,
            t0,
            algorithm: parse_var("TOTP_ALGORITHM", Algorithm::Sha1)?,
        };
        params.validate().context("invalid TOTP parameters")?;

        let window = parse_var("TOTP_WINDOW", DEFAULT_WINDOW)?;
        if window > MAX_WINDOW {
            anyhow::bail!("TOTP_WINDOW too large: {window} steps, max {MAX_WINDOW}");
        }

        let secret_bytes = parse_var("SECRET_BYTES", DEFAULT_SECRET_BYTES)?;
        if secret_bytes < MIN_SECRET_BYTES {
            anyhow::bail!(
                "SECRET_BYTES too small: {} bytes, need >= {} ({} bits)",
                secret_bytes,
                MIN_SECRET_BYTES,
                MIN_SECRET_BYTES * 8
            );
        }

        Ok(Config {
            bind_addr,
            default_issuer,
            params,
            window,
            secret_bytes,
        })
    }
}
