//! Healthcheck - tsuru plugin for healthcheck service instances
//!
//! Adds and removes URL checkers and watchers by sending requests through the
//! tsuru API's service proxy endpoint.

pub mod commands;
pub mod config;
pub mod error;
pub mod io;
pub mod proxy;

pub use commands::{usage, Command, COMMAND_NAMES};
pub use config::Config;
pub use error::{HealthcheckError, Result};

use crate::io::ReqwestHttpClient;

/// Run `command` against the configured tsuru target, returning the confirmation message
pub async fn run(command: &Command, config: &Config) -> Result<String> {
    let http = ReqwestHttpClient::new(config.timeout)?;
    command.execute(config, &http).await
}
