//! Request construction tests for the healthcheck commands

use healthcheck::proxy::build_request;
use healthcheck::{Command, Config};
use reqwest::Method;

fn test_config(target: &str) -> Config {
    Config::from_lookup(|name| match name {
        "TSURU_TARGET" => Some(target.to_string()),
        "TSURU_TOKEN" => Some("abc123".to_string()),
        _ => None,
    })
    .unwrap()
}

#[test]
fn add_url_request() {
    let command = Command::AddUrl {
        name: "myapp".to_string(),
        url: "http://x/hc".to_string(),
        expected_string: Some("WORKING".to_string()),
    };
    let request = build_request(&test_config("example.com"), command.request().unwrap()).unwrap();

    assert_eq!(request.method, Method::POST);
    assert_eq!(
        request.url,
        "http://example.com/services/proxy/myapp?callback=/url"
    );
    assert_eq!(request.headers["authorization"], "bearer abc123");
    assert_eq!(request.headers["content-type"], "application/json");
    assert_eq!(request.headers["accept"], "text/plain");

    let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"name": "myapp", "url": "http://x/hc", "expected_string": "WORKING"})
    );
}

#[test]
fn remove_watcher_request() {
    let command = Command::RemoveWatcher {
        name: "myapp".to_string(),
        watcher: "w1".to_string(),
    };
    let proxy_request = command.request().unwrap();
    let message = command.success_message(&proxy_request);
    let request = build_request(&test_config("https://example.com/"), proxy_request).unwrap();

    assert_eq!(request.method, Method::DELETE);
    assert_eq!(
        request.url,
        "https://example.com/services/proxy/myapp?callback=/myapp/watcher/w1"
    );
    assert!(request.body.is_none());
    assert!(!request.url.contains("//services"));
    assert_eq!(message, "watcher /myapp/watcher/w1 successfully removed!");
}

#[test]
fn add_watcher_request() {
    let command = Command::AddWatcher {
        name: "myapp".to_string(),
        watcher: "w1".to_string(),
    };
    let request = build_request(&test_config("example.com"), command.request().unwrap()).unwrap();

    assert_eq!(request.method, Method::POST);
    assert_eq!(
        request.url,
        "http://example.com/services/proxy/myapp?callback=/watcher"
    );
    let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({"name": "myapp", "watcher": "w1"}));
}

#[test]
fn remove_url_request() {
    let command = Command::RemoveUrl {
        name: "myapp".to_string(),
        url: "http://x/hc".to_string(),
    };
    let proxy_request = command.request().unwrap();
    let message = command.success_message(&proxy_request);
    let request = build_request(&test_config("example.com"), proxy_request).unwrap();

    assert_eq!(request.method, Method::DELETE);
    assert_eq!(
        request.url,
        "http://example.com/services/proxy/myapp?callback=/myapp/url/http://x/hc"
    );
    assert_eq!(message, "url /myapp/url/http://x/hc successfully removed!");
}
