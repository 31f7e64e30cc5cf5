//! Twitch Helix lookup client.
//!
//! Provides app-token authentication (client credentials grant),
//! batched lookups for users, streams, games and tags, and a
//! persistent tag cache.

pub mod api;
pub mod auth;
pub mod config;
pub mod tag_cache;

pub use api::{ApiSession, Lookup, Record, TwitchApiClient};
pub use auth::{AppCredentials, Token};
pub use config::ClientConfig;
pub use tag_cache::TagCache;

/// Maximum number of filter parameters Helix accepts per request.
pub const MAX_IDS_PER_REQUEST: usize = 100;

/// Unified error type for the twitch-client crate.
#[derive(Debug, thiserror::Error)]
pub enum TwitchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Tag cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Authentication required: no session token")]
    AuthRequired,

    #[error("Authentication failed (status {status}): {message}")]
    Authentication { status: u16, message: String },

    #[error("\n{error}: {status}\n{message}")]
    Status {
        status: u16,
        error: String,
        message: String,
    },
}
