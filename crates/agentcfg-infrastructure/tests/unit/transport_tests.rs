//! HTTP transport tests against a local mock server

use agentcfg_domain::ports::CentralConfigTransport;
use agentcfg_domain::value_objects::AgentConfig;
use agentcfg_infrastructure::central::{CentralConfigFetcher, ConfigStore};
use agentcfg_infrastructure::config::HttpClientConfig;
use agentcfg_infrastructure::http::HttpConfigTransport;
use mockito::Matcher;
use std::sync::Arc;
use std::time::Duration;

fn agent(server_url: String) -> AgentConfig {
    AgentConfig {
        service_name: "checkout".to_string(),
        service_environment: Some("production".to_string()),
        server_url,
        secret_token: Some("s3cret".to_string()),
        ..AgentConfig::default()
    }
}

fn service_query() -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("service.name".into(), "checkout".into()),
        Matcher::UrlEncoded("service.environment".into(), "production".into()),
    ])
}

#[tokio::test]
async fn test_fetch_sends_conditional_authorized_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/config/v1/agents")
        .match_query(service_query())
        .match_header("if-none-match", "\"v1\"")
        .match_header("authorization", "Bearer s3cret")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("etag", "\"v2\"")
        .with_header("cache-control", "must-revalidate, max-age=30")
        .with_body(r#"{"recording": "false"}"#)
        .create_async()
        .await;

    let transport =
        HttpConfigTransport::new(&agent(server.url()), &HttpClientConfig::default()).unwrap();
    let response = transport.fetch(Some("\"v1\"")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status, 200);
    assert_eq!(response.etag.as_deref(), Some("\"v2\""));
    assert_eq!(
        response.cache_control.as_deref(),
        Some("must-revalidate, max-age=30")
    );
    assert_eq!(response.body, r#"{"recording": "false"}"#);
}

#[tokio::test]
async fn test_api_key_takes_precedence() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/config/v1/agents")
        .match_query(Matcher::Any)
        .match_header("authorization", "ApiKey k3y")
        .match_header("if-none-match", Matcher::Missing)
        .with_status(304)
        .create_async()
        .await;

    let mut config = agent(server.url());
    config.api_key = Some("k3y".to_string());
    let transport = HttpConfigTransport::new(&config, &HttpClientConfig::default()).unwrap();
    let response = transport.fetch(None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status, 304);
    assert!(response.etag.is_none());
}

#[tokio::test]
async fn test_connection_refused_is_an_error() {
    let config = agent("http://127.0.0.1:1".to_string());
    let http = HttpClientConfig {
        connect_timeout_secs: 1,
        timeout_secs: 2,
        ..HttpClientConfig::default()
    };
    let transport = HttpConfigTransport::new(&config, &http).unwrap();

    assert!(transport.fetch(None).await.is_err());
}

#[tokio::test]
async fn test_fetcher_round_trip_over_http() {
    let mut server = mockito::Server::new_async().await;
    let first = server
        .mock("GET", "/config/v1/agents")
        .match_query(Matcher::Any)
        .match_header("if-none-match", Matcher::Missing)
        .with_status(200)
        .with_header("etag", "\"rev-1\"")
        .with_header("cache-control", "max-age=3")
        .with_body(r#"{"transaction_max_spans": "42", "unknown_key": "x"}"#)
        .expect(1)
        .create_async()
        .await;
    let second = server
        .mock("GET", "/config/v1/agents")
        .match_query(Matcher::Any)
        .match_header("if-none-match", "\"rev-1\"")
        .with_status(304)
        .with_header("cache-control", "max-age=120")
        .expect(1)
        .create_async()
        .await;

    let config = agent(server.url());
    let transport =
        Arc::new(HttpConfigTransport::new(&config, &HttpClientConfig::default()).unwrap());
    let store = Arc::new(ConfigStore::new(config));
    let fetcher = CentralConfigFetcher::new(Arc::clone(&store), transport);

    let wait = fetcher.poll_once().await;
    assert_eq!(wait.interval, Duration::from_secs(5));
    assert_eq!(*store.current().transaction_max_spans(), 42);

    let wait = fetcher.poll_once().await;
    assert_eq!(wait.interval, Duration::from_secs(120));
    assert_eq!(store.etag().as_deref(), Some("\"rev-1\""));

    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_binary_failure_body_keeps_status_and_max_age() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/config/v1/agents")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_header("cache-control", "max-age=60")
        .with_body([0xff_u8, 0xfe, 0x00])
        .expect(2)
        .create_async()
        .await;

    let config = agent(server.url());
    let transport =
        Arc::new(HttpConfigTransport::new(&config, &HttpClientConfig::default()).unwrap());
    let response = transport.fetch(None).await.unwrap();
    assert_eq!(response.status, 404);
    assert_eq!(response.cache_control.as_deref(), Some("max-age=60"));

    let store = Arc::new(ConfigStore::new(config));
    let fetcher = CentralConfigFetcher::new(Arc::clone(&store), transport);
    let wait = fetcher.poll_once().await;
    assert_eq!(wait.interval, Duration::from_secs(60));
    assert!(store.current().delta().is_none());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_binary_success_body_is_rejected() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/config/v1/agents")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("etag", "\"bin\"")
        .with_header("cache-control", "max-age=30")
        .with_body([0xff_u8, 0xfe, 0x00])
        .create_async()
        .await;

    let config = agent(server.url());
    let transport =
        Arc::new(HttpConfigTransport::new(&config, &HttpClientConfig::default()).unwrap());
    let store = Arc::new(ConfigStore::new(config));
    let fetcher = CentralConfigFetcher::new(Arc::clone(&store), transport);

    let wait = fetcher.poll_once().await;
    assert_eq!(wait.interval, Duration::from_secs(30));
    assert!(store.current().delta().is_none());
    assert_eq!(store.etag(), None);
}
