//! The plugin commands and their proxy calls

use clap::Subcommand;
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;

use crate::config::Config;
use crate::io::HttpClient;
use crate::proxy::{self, ProxyRequest};

/// Names of every command, in the order they are listed in the usage text
pub const COMMAND_NAMES: [&str; 4] = ["add-url", "remove-url", "add-watcher", "remove-watcher"];

/// Body of an `add-url` request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrlCheck {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_string: Option<String>,
}

/// Body of an `add-watcher` request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatcherCheck {
    pub name: String,
    pub watcher: String,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Create a new url checker
    #[command(
        long_about = "Create a new url checker.\n\n\
            expected_string is optional: the string the healthcheck should expect to find in \
            the body of the response.\n\n\
            Example:\n\n    tsuru healthcheck add-url mysite http://mysite.com/hc WORKING"
    )]
    AddUrl {
        /// Service instance name
        #[arg(allow_hyphen_values = true)]
        name: String,
        /// URL to check
        #[arg(allow_hyphen_values = true)]
        url: String,
        /// String expected in the response body
        #[arg(allow_hyphen_values = true)]
        expected_string: Option<String>,
    },

    /// Remove a url checker
    #[command(
        long_about = "Remove the specified url checker.\n\n\
            Example:\n\n    tsuru healthcheck remove-url mysite http://mysite.com/hc"
    )]
    RemoveUrl {
        /// Service instance name
        #[arg(allow_hyphen_values = true)]
        name: String,
        /// URL of the checker to remove
        #[arg(allow_hyphen_values = true)]
        url: String,
    },

    /// Create a new watcher
    AddWatcher {
        /// Service instance name
        #[arg(allow_hyphen_values = true)]
        name: String,
        /// Watcher to add
        #[arg(allow_hyphen_values = true)]
        watcher: String,
    },

    /// Remove a watcher
    RemoveWatcher {
        /// Service instance name
        #[arg(allow_hyphen_values = true)]
        name: String,
        /// Watcher to remove
        #[arg(allow_hyphen_values = true)]
        watcher: String,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddUrl { .. } => COMMAND_NAMES[0],
            Command::RemoveUrl { .. } => COMMAND_NAMES[1],
            Command::AddWatcher { .. } => COMMAND_NAMES[2],
            Command::RemoveWatcher { .. } => COMMAND_NAMES[3],
        }
    }

    /// Proxy request this command issues
    pub fn request(&self) -> crate::Result<ProxyRequest> {
        let request = match self {
            Command::AddUrl {
                name,
                url,
                expected_string,
            } => {
                let body = UrlCheck {
                    name: name.clone(),
                    url: url.clone(),
                    expected_string: expected_string.clone().filter(|s| !s.is_empty()),
                };
                with_body_headers(ProxyRequest::new(name, Method::POST, "/url"))
                    .with_json_body(&body)?
            }
            Command::RemoveUrl { name, url } => {
                ProxyRequest::new(name, Method::DELETE, &format!("/{}/url/{}", name, url))
            }
            Command::AddWatcher { name, watcher } => {
                let body = WatcherCheck {
                    name: name.clone(),
                    watcher: watcher.clone(),
                };
                with_body_headers(ProxyRequest::new(name, Method::POST, "/watcher"))
                    .with_json_body(&body)?
            }
            Command::RemoveWatcher { name, watcher } => ProxyRequest::new(
                name,
                Method::DELETE,
                &format!("/{}/watcher/{}", name, watcher),
            ),
        };
        Ok(request)
    }

    /// Confirmation printed once the proxy accepted `request`
    pub fn success_message(&self, request: &ProxyRequest) -> String {
        match self {
            Command::AddUrl { url, .. } => format!("url {} successfully added!", url),
            Command::RemoveUrl { .. } => format!("url {} successfully removed!", request.path),
            Command::AddWatcher { watcher, .. } => {
                format!("watcher {} successfully added!", watcher)
            }
            Command::RemoveWatcher { .. } => {
                format!("watcher {} successfully removed!", request.path)
            }
        }
    }

    /// Issue the command through the proxy and return the confirmation message
    pub async fn execute(&self, config: &Config, http: &dyn HttpClient) -> crate::Result<String> {
        let request = self.request()?;
        let message = self.success_message(&request);

        tracing::info!(
            "Running {} for instance {} ({} {})",
            self.name(),
            request.instance,
            request.method,
            request.path
        );
        proxy::send(config, http, request).await?;

        Ok(message)
    }
}

fn with_body_headers(request: ProxyRequest) -> ProxyRequest {
    request
        .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .with_header(ACCEPT, HeaderValue::from_static("text/plain"))
}

/// Text printed for an unknown or missing command
pub fn usage() -> String {
    let mut text = String::from("Usage: tsuru <plugin> command [args]\n\nAvailable commands:\n");
    for name in COMMAND_NAMES {
        text.push_str(&format!("  {}\n", name));
    }
    text.push_str("Use tsuru <plugin> help <commandname> to get more information.\n");
    text
}
