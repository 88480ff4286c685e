// state.rs
// Shared application state: configuration and the verification engine.

use anyhow::Result;
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::otp::OtpEngine;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub engine: OtpEngine,
}

pub fn init_state(config: Config) -> Result<AppState> {
    init_state_with_clock(config, Arc::new(SystemClock))
}

/// Same as [`init_state`] but reads time from `clock`.
pub fn init_state_with_clock(config: Config, clock: Arc<dyn Clock>) -> Result<AppState> {
    let engine = OtpEngine::new(config.params, config.window, clock)?;
    Ok(AppState { config, engine })
}
