pub mod auth;
pub mod bookings;
pub mod config;
pub mod flights;
pub mod http;
pub mod notify;

pub use crate::config::Config;
pub use crate::flights::{HttpFlightService, SearchFlights};
pub use crate::http::ApiClient;
pub use crate::notify::{ConsoleNotifier, Notifier};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error("Not authenticated: {0}")]
    Unauthenticated(String),
}
