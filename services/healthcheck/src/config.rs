//! Target configuration read from the tsuru client environment

use std::time::Duration;

/// Environment variable holding the tsuru API host or URL
pub const TARGET_ENV: &str = "TSURU_TARGET";

/// Environment variable holding the bearer token
pub const TOKEN_ENV: &str = "TSURU_TOKEN";

/// Timeout applied to every proxied request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Target API and credentials for proxied requests
#[derive(Clone)]
pub struct Config {
    pub target: String,
    pub token: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("target", &self.target)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Load the configuration from the process environment
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration using `lookup` to resolve variable names.
    ///
    /// `TSURU_TARGET` is checked before `TSURU_TOKEN`; an empty value counts as missing.
    pub fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let target = required(&lookup, TARGET_ENV)?;
        let token = required(&lookup, TOKEN_ENV)?;

        tracing::debug!("Loaded configuration for target {}", target);

        Ok(Self {
            target,
            token,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Target with trailing slashes removed and a scheme guaranteed.
    ///
    /// `example.com/` becomes `http://example.com`; `https://` targets keep their scheme.
    pub fn base_url(&self) -> String {
        let target = self.target.trim_end_matches('/');
        if target.starts_with("http://") || target.starts_with("https://") {
            target.to_string()
        } else {
            format!("http://{}", target)
        }
    }
}

fn required<F>(lookup: &F, name: &str) -> crate::Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(crate::HealthcheckError::MissingEnv(name.to_string())),
    }
}
