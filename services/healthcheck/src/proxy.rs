//! Requests to the tsuru service proxy endpoint
//!
//! Every command talks to `{target}/services/proxy/{instance}?callback={path}`, which tsuru
//! forwards to the healthcheck service backing the instance.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::Method;
use serde::Serialize;

use crate::config::Config;
use crate::io::{HttpClient, HttpRequest, HttpResponse};

/// A request scoped to one service instance
#[derive(Debug, Clone)]
pub struct ProxyRequest {
    pub instance: String,
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
    pub headers: HeaderMap,
}

impl ProxyRequest {
    pub fn new(instance: &str, method: Method, path: &str) -> Self {
        Self {
            instance: instance.to_string(),
            method,
            path: path.to_string(),
            body: None,
            headers: HeaderMap::new(),
        }
    }

    /// Attach `body` serialized as JSON text
    pub fn with_json_body<T: Serialize>(mut self, body: &T) -> crate::Result<Self> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }

    /// Set `name`, replacing any earlier value
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Proxy URL for `base_url`; the path goes into `callback` unescaped
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/services/proxy/{}?callback={}",
            base_url, self.instance, self.path
        )
    }
}

/// Build the outgoing HTTP request for `request`.
///
/// The bearer token is set first so caller headers of the same name replace it.
pub fn build_request(config: &Config, request: ProxyRequest) -> crate::Result<HttpRequest> {
    let url = request.url(&config.base_url());

    let mut headers = HeaderMap::new();
    let authorization = HeaderValue::from_str(&format!("bearer {}", config.token))
        .map_err(|e| crate::HealthcheckError::InvalidHeader(format!("{}: {}", AUTHORIZATION, e)))?;
    headers.insert(AUTHORIZATION, authorization);
    for (name, value) in request.headers.iter() {
        headers.insert(name.clone(), value.clone());
    }

    Ok(HttpRequest {
        method: request.method,
        url,
        headers,
        body: request.body,
    })
}

/// Send `request` through the proxy. Any non-2xx reply is an error.
pub async fn send(
    config: &Config,
    http: &dyn HttpClient,
    request: ProxyRequest,
) -> crate::Result<HttpResponse> {
    let request = build_request(config, request)?;
    let response = http.send(&request).await?;

    if !response.is_success() {
        tracing::debug!(
            "Proxy rejected {} {}: status={}",
            request.method,
            request.url,
            response.status
        );
        return Err(crate::HealthcheckError::Status {
            status: response.status,
            body: response.body.trim().to_string(),
        });
    }

    Ok(response)
}
