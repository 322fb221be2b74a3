//! HTTP archive client
//!
//! POSTs `{"query": ...}` to the archive's learning endpoint and reads the
//! `response` field of the reply.

use super::{ArchiveClient, ArchiveError, FALLBACK_RESPONSE, LEARN_PATH};
use crate::types::{AppConfig, Message};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
struct LearnRequest<'a> {
    query: &'a str,
}

/// Archive client backed by `reqwest`. No timeout and no retries.
#[derive(Debug, Clone)]
pub struct HttpArchiveClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpArchiveClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), LEARN_PATH),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.archive_url)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Pull the reply text out of a response body, tolerating any shape.
fn extract_reply(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| json.get("response")?.as_str().map(str::to_string))
        .unwrap_or_else(|| {
            tracing::debug!("Archive reply had no response field, using fallback");
            FALLBACK_RESPONSE.to_string()
        })
}

#[async_trait]
impl ArchiveClient for HttpArchiveClient {
    async fn ask(&self, query: &str) -> Result<Message, ArchiveError> {
        tracing::info!(endpoint = %self.endpoint, query_len = query.len(), "Querying archive");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&LearnRequest { query })
            .send()
            .await
            .map_err(ArchiveError::transport)?;

        let status = response.status();
        if !status.is_success() {
            // The status is the error; a body that fails to read only loses detail
            let detail = response.text().await.unwrap_or_default();
            return Err(ArchiveError::RequestFailed {
                status: Some(status.as_u16()),
                detail,
            });
        }

        let body = response.text().await.map_err(ArchiveError::transport)?;
        Ok(Message::assistant(extract_reply(&body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;
    use mockito::{Matcher, Server};

    #[test]
    fn test_endpoint_joins_base_url() {
        assert_eq!(
            HttpArchiveClient::new("http://localhost:3000/").endpoint(),
            "http://localhost:3000/api/learn"
        );
    }

    #[test]
    fn test_extract_reply_shapes() {
        assert_eq!(extract_reply(r#"{"response": "X"}"#), "X");
        assert_eq!(extract_reply(r#"{"answer": "X"}"#), FALLBACK_RESPONSE);
        assert_eq!(extract_reply(r#"{"response": 42}"#), FALLBACK_RESPONSE);
        assert_eq!(extract_reply("not json"), FALLBACK_RESPONSE);
    }

    #[tokio::test]
    async fn test_ask_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/learn")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({"query": "What is a gopher?"})))
            .with_status(200)
            .with_body(r#"{"response": "A burrowing rodent."}"#)
            .create_async()
            .await;

        let client = HttpArchiveClient::new(&server.url());
        let reply = client.ask("What is a gopher?").await.unwrap();

        mock.assert_async().await;
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, "A burrowing rodent.");
    }

    #[tokio::test]
    async fn test_ask_missing_response_field_falls_back() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/learn")
            .with_status(200)
            .with_body(r#"{"status": "ok"}"#)
            .create_async()
            .await;

        let client = HttpArchiveClient::new(&server.url());
        let reply = client.ask("anything").await.unwrap();
        assert_eq!(reply.content, FALLBACK_RESPONSE);
    }

    #[tokio::test]
    async fn test_ask_server_error_is_request_failed() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/learn")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = HttpArchiveClient::new(&server.url());
        let err = client.ask("anything").await.unwrap_err();
        match err {
            ArchiveError::RequestFailed { status, detail } => {
                assert_eq!(status, Some(500));
                assert_eq!(detail, "boom");
            }
        }
    }

    #[tokio::test]
    async fn test_ask_truncated_error_body_keeps_status() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.ends_with(b"}") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            // Promise more body than is sent, then hang up
            socket
                .write_all(b"HTTP/1.1 503 Service Unavailable\r\nContent-Length: 100\r\n\r\npartial")
                .await
                .unwrap();
            socket.shutdown().await.unwrap();
        });

        let client = HttpArchiveClient::new(&format!("http://{addr}"));
        let err = client.ask("anything").await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, ArchiveError::RequestFailed { status: Some(503), .. }));
    }

    #[tokio::test]
    async fn test_ask_unreachable_is_request_failed() {
        // Port 9 (discard) on loopback is not expected to be listening.
        let client = HttpArchiveClient::new("http://127.0.0.1:9");
        let err = client.ask("anything").await.unwrap_err();
        assert!(matches!(err, ArchiveError::RequestFailed { status: None, .. }));
    }
}
