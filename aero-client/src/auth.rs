use reqwest::Method;
use serde::Serialize;
use tracing::info;

use crate::http::ApiClient;
use crate::ClientError;

#[derive(Debug, Serialize)]
struct Credentials {
    email: String,
    password: String,
}

pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Sign in and return the session token. The caller is responsible for
    /// storing it on the [`ApiClient`] for subsequent requests.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<String, ClientError> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let token: String = self
            .api
            .send_json(
                self.api
                    .request(Method::POST, "/user/signin")
                    .json(&credentials),
            )
            .await?;
        info!("Signed in as {}", email);
        Ok(token)
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> Result<(), ClientError> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let _: serde_json::Value = self
            .api
            .send_json(
                self.api
                    .request(Method::POST, "/user/signup")
                    .json(&credentials),
            )
            .await?;
        info!("Account created for {}", email);
        Ok(())
    }
}
