//! HTTP client tests against a local mock analysis backend
//!
//! The mock speaks just enough HTTP/1.1 to answer one request per
//! connection with a canned status and body, and records every request
//! line it sees.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use pinsights_client::{AnalysisBackend, ClientOptions, Endpoint, EndpointSource, HttpAnalysisClient};
use pinsights_core::AnalysisError;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const GOOD_BODY: &str = r#"{"trackers":3,"cookies":12,"thirdPartyRequests":7,"fingerprinting":true,"virusTotal":{"score":"Clean"}}"#;

struct MockBackend {
    base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockBackend {
    /// Serve `status`/`body` to every connection
    async fn start(status: u16, reason: &'static str, body: &'static str) -> Self {
        Self::start_with_delay(status, reason, body, Duration::ZERO).await
    }

    async fn start_with_delay(
        status: u16,
        reason: &'static str,
        body: &'static str,
        delay: Duration,
    ) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let recorded = recorded.clone();
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                    }
                    let head = String::from_utf8_lossy(&buf);
                    if let Some(line) = head.lines().next() {
                        recorded.lock().unwrap().push(line.to_string());
                    }

                    tokio::time::sleep(delay).await;

                    let response = format!(
                        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        reason,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self {
            base: format!("http://{}/analyze", addr),
            requests,
        }
    }

    fn client(&self, options: ClientOptions) -> HttpAnalysisClient {
        let endpoint = Endpoint::parse(&self.base, EndpointSource::CommandLine).unwrap();
        HttpAnalysisClient::new(endpoint, options).unwrap()
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[tokio::test]
async fn test_success_response_decodes_all_metrics() {
    let backend = MockBackend::start(200, "OK", GOOD_BODY).await;
    let client = backend.client(ClientOptions::default());

    let result = client.analyze("https://example.com").await.unwrap();

    assert_eq!(result.trackers, 3);
    assert_eq!(result.cookies, 12);
    assert_eq!(result.third_party_requests, 7);
    assert!(result.fingerprinting);
    assert_eq!(result.virus_total.score, "Clean");
    assert_eq!(result.virus_total.details, None);
}

#[tokio::test]
async fn test_single_get_with_encoded_target() {
    let backend = MockBackend::start(200, "OK", GOOD_BODY).await;
    let client = backend.client(ClientOptions::default());

    client.analyze("https://example.com/a?b=c").await.unwrap();

    assert_eq!(
        backend.requests(),
        vec!["GET /analyze?url=https%3A%2F%2Fexample.com%2Fa%3Fb%3Dc HTTP/1.1"]
    );
}

#[tokio::test]
async fn test_repeated_analysis_issues_one_request_each() {
    let backend = MockBackend::start(200, "OK", GOOD_BODY).await;
    let client = backend.client(ClientOptions::default());

    let first = client.analyze("https://example.com").await.unwrap();
    let second = client.analyze("https://example.com").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(backend.requests().len(), 2);
}

#[tokio::test]
async fn test_error_detail_becomes_backend_error() {
    let backend = MockBackend::start(400, "Bad Request", r#"{"detail":"Could not resolve host"}"#).await;
    let client = backend.client(ClientOptions::default());

    let err = client.analyze("https://nope.invalid").await.unwrap_err();

    assert_eq!(err, AnalysisError::backend(400, "Could not resolve host"));
    assert_eq!(err.to_string(), "Could not resolve host");
}

#[tokio::test]
async fn test_unparsable_error_body_mentions_status() {
    let backend = MockBackend::start(503, "Service Unavailable", "maintenance").await;
    let client = backend.client(ClientOptions::default());

    let err = client.analyze("https://example.com").await.unwrap_err();

    assert_eq!(err.kind(), "backend");
    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_malformed_success_body_is_deserialization_error() {
    let backend = MockBackend::start(200, "OK", r#"{"trackers":3}"#).await;
    let client = backend.client(ClientOptions::default());

    let err = client.analyze("https://example.com").await.unwrap_err();

    assert_eq!(err.kind(), "deserialization");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop to get a port nothing is listening on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let endpoint =
        Endpoint::parse(&format!("http://{}/analyze", addr), EndpointSource::Default).unwrap();
    let client = HttpAnalysisClient::new(endpoint, ClientOptions::default()).unwrap();

    let err = client.analyze("https://example.com").await.unwrap_err();

    assert_eq!(err.kind(), "transport");
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let backend =
        MockBackend::start_with_delay(200, "OK", GOOD_BODY, Duration::from_secs(3)).await;
    let client = backend.client(ClientOptions {
        timeout: Some(Duration::from_secs(1)),
    });

    let err = client.analyze("https://example.com").await.unwrap_err();

    assert_eq!(err.kind(), "transport");
    assert_eq!(err.to_string(), "Request timed out after 1 seconds");
}
