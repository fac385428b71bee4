use super::*;
use crate::validator::validate;
use serde_json::json;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener as TokioTcpListener;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(endpoint: String) -> LookupClient {
    let config = Config {
        endpoint,
        timeout: Duration::from_secs(5),
        ..Default::default()
    };
    LookupClient::new(&config).expect("Failed to create client")
}

fn target() -> TargetNumber {
    validate("9876543210").expect("valid test number")
}

#[tokio::test]
async fn test_fetch_success_returns_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lookup"))
        .and(query_param("mobile", "9876543210"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "X",
            "circle": "Y",
            "extra_flag": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(format!("{}/lookup", mock_server.uri()));
    let result = client.fetch(&target()).await;

    match result {
        LookupResult::Success(payload) => {
            assert_eq!(payload.get("name"), Some(&json!("X")));
            assert_eq!(payload.get("circle"), Some(&json!("Y")));
            assert_eq!(payload.get("extra_flag"), Some(&json!(true)));
        }
        LookupResult::Failure(reason) => panic!("expected success, got failure: {reason}"),
    }
}

#[tokio::test]
async fn test_fetch_sends_static_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("accept", "application/json"))
        .and(header("user-agent", "WASP/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "X"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(format!("{}/lookup", mock_server.uri()));
    assert!(client.fetch(&target()).await.is_success());
}

#[tokio::test]
async fn test_fetch_uses_configured_query_param() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("msisdn", "9876543210"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"circle": "Y"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = Config {
        endpoint: format!("{}/lookup", mock_server.uri()),
        query_param: "msisdn".to_string(),
        ..Default::default()
    };
    let client = LookupClient::new(&config).unwrap();
    assert!(client.fetch(&target()).await.is_success());
}

#[tokio::test]
async fn test_fetch_http_500_is_api_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(format!("{}/lookup", mock_server.uri()));
    assert_eq!(
        client.fetch(&target()).await,
        LookupResult::Failure("API RESPONSE: HTTP 500".to_string())
    );
}

#[tokio::test]
async fn test_fetch_non_200_success_codes_are_failures() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(format!("{}/lookup", mock_server.uri()));
    assert_eq!(
        client.fetch(&target()).await,
        LookupResult::Failure("API RESPONSE: HTTP 204".to_string())
    );
}

#[tokio::test]
async fn test_fetch_invalid_json_is_invalid_format() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(format!("{}/lookup", mock_server.uri()));
    assert_eq!(
        client.fetch(&target()).await,
        LookupResult::failure(INVALID_RESPONSE)
    );
}

#[tokio::test]
async fn test_fetch_in_band_error_is_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "RATE LIMITED"})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(format!("{}/lookup", mock_server.uri()));
    assert_eq!(
        client.fetch(&target()).await,
        LookupResult::Failure("RATE LIMITED".to_string())
    );
}

#[tokio::test]
async fn test_fetch_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(2))
                .set_body_json(json!({"name": "late"})),
        )
        .mount(&mock_server)
        .await;

    let config = Config {
        endpoint: format!("{}/lookup", mock_server.uri()),
        timeout: Duration::from_millis(200),
        ..Default::default()
    };
    let client = LookupClient::new(&config).unwrap();

    assert_eq!(
        client.fetch(&target()).await,
        LookupResult::failure(TIMEOUT_FAILURE)
    );
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    // Grab a free port, then release it so nothing is listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = client_for(format!("http://127.0.0.1:{port}/lookup"));
    assert_eq!(
        client.fetch(&target()).await,
        LookupResult::failure(CONNECTION_FAILURE)
    );
}

#[tokio::test]
async fn test_fetch_garbage_response_is_network_error() {
    let listener = TokioTcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let _ = socket.write_all(b"definitely not http\r\n\r\n").await;
            let _ = socket.shutdown().await;
        }
    });

    let client = client_for(format!("http://{addr}/lookup"));
    match client.fetch(&target()).await {
        LookupResult::Failure(reason) => {
            assert!(
                reason.starts_with("network error: "),
                "unexpected reason: {reason}"
            );
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn test_new_rejects_bad_endpoint() {
    let config = Config {
        endpoint: "::not-a-url".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        LookupClient::new(&config),
        Err(Error::Config { .. })
    ));
}

#[test]
fn test_parse_payload_non_object_is_invalid() {
    assert_eq!(
        parse_payload(br#"["a", "b"]"#),
        LookupResult::failure(INVALID_RESPONSE)
    );
    assert_eq!(
        parse_payload(b"\"text\""),
        LookupResult::failure(INVALID_RESPONSE)
    );
}

#[test]
fn test_parse_payload_empty_object_is_success() {
    assert_eq!(
        parse_payload(b"{}"),
        LookupResult::Success(Payload::default())
    );
}

#[tokio::test]
async fn test_lookup_service_delegates_to_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"alt": "9000000000"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(format!("{}/lookup", mock_server.uri()));
    let service: &dyn LookupService = &client;
    assert!(service.lookup(&target()).await.is_success());
}
