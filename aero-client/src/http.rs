use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Config;
use crate::ClientError;

/// `{ success, message, data }` envelope the flights API wraps every
/// response in.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

/// Shared HTTP client for the flights API. Applies the base URL and, once a
/// session token is set, the `x-access-token` header on every request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            token: config.api.session_token.clone(),
        })
    }

    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.header("x-access-token", token);
        }
        builder
    }

    /// Send a request and unwrap the API envelope, mapping non-success
    /// statuses and `success: false` bodies to [`ClientError::Api`].
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(response).await,
            });
        }

        // Decode untyped first: a rejected request can arrive as a 200 with
        // `success: false` and a null payload, which must keep the server's
        // message instead of failing typed deserialization.
        let envelope: ApiEnvelope<serde_json::Value> = response.json().await?;
        decode_envelope(status.as_u16(), envelope)
    }
}

/// Unwrap an already-decoded envelope into its typed payload.
fn decode_envelope<T: DeserializeOwned>(
    status: u16,
    envelope: ApiEnvelope<serde_json::Value>,
) -> Result<T, ClientError> {
    if !envelope.success {
        return Err(ClientError::Api {
            status,
            message: envelope
                .message
                .unwrap_or_else(|| "Unknown error".to_string()),
        });
    }
    Ok(serde_json::from_value(envelope.data)?)
}

/// Best-effort extraction of the server's error message. Falls back to
/// "Unknown error" when the body is not an envelope.
async fn error_message(response: reqwest::Response) -> String {
    response
        .json::<ApiEnvelope<serde_json::Value>>()
        .await
        .ok()
        .and_then(|envelope| envelope.message)
        .unwrap_or_else(|| "Unknown error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_token_payload() {
        let json = r#"{ "success": true, "data": "jwt-token-string" }"#;
        let envelope: ApiEnvelope<String> = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data, "jwt-token-string");
        assert!(envelope.message.is_none());
    }

    #[test]
    fn test_envelope_with_failure_message() {
        let json = r#"{ "success": false, "message": "Invalid credentials", "data": null }"#;
        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_decode_envelope_success_payload() {
        let json = r#"{ "success": true, "data": "jwt-token-string" }"#;
        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        let token: String = decode_envelope(200, envelope).unwrap();
        assert_eq!(token, "jwt-token-string");
    }

    #[test]
    fn test_rejected_200_keeps_server_message() {
        // A rejection can come back as HTTP 200 with a null payload; the
        // server's message must survive instead of a decode failure.
        let json = r#"{ "success": false, "message": "Seats sold out", "data": null }"#;
        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        let result: Result<String, ClientError> = decode_envelope(200, envelope);
        match result {
            Err(ClientError::Api { status, message }) => {
                assert_eq!(status, 200);
                assert_eq!(message, "Seats sold out");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejected_200_without_message_falls_back() {
        let json = r#"{ "success": false, "data": null }"#;
        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        let result: Result<String, ClientError> = decode_envelope(200, envelope);
        match result {
            Err(ClientError::Api { message, .. }) => assert_eq!(message, "Unknown error"),
            other => panic!("expected Api error, got {:?}", other),
        }
    }
}
