//! Twitch Helix REST API client.
//!
//! Batched lookups over the Helix endpoints with automatic Bearer
//! token + Client-ID header injection and a single re-authenticated
//! retry on 401 Unauthorized.

mod games;
mod request;
mod session;
mod streams;
mod tags;
mod users;

pub mod models;

pub use models::{HelixErrorResponse, HelixResponse, Lookup, Record};
pub use session::ApiSession;

use reqwest::header::HeaderMap;

use crate::auth::{AppCredentials, Token};
use crate::config::ClientConfig;
use crate::tag_cache::TagCache;
use crate::{MAX_IDS_PER_REQUEST, TwitchError};

/// Twitch Helix API client authenticated with an app access token.
///
/// Lookups need a token: call [`TwitchApiClient::enter_session`] (or
/// [`TwitchApiClient::authenticate`]) first.
pub struct TwitchApiClient {
    pub(super) http: reqwest::Client,
    pub(super) credentials: AppCredentials,
    pub(super) config: ClientConfig,
    pub(super) token: Option<Token>,
    pub(super) headers: Option<HeaderMap>,
    pub(super) tag_cache: TagCache,
}

impl TwitchApiClient {
    /// Create a client against the public Twitch endpoints.
    ///
    /// Loads `./tags.json`, creating it if missing. No network call is made.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, TwitchError> {
        Self::with_config(
            AppCredentials::new(client_id, client_secret),
            ClientConfig::default(),
        )
    }

    pub fn with_config(
        credentials: AppCredentials,
        config: ClientConfig,
    ) -> Result<Self, TwitchError> {
        let tag_cache = TagCache::load_or_create(config.tag_cache_path.clone())?;
        Ok(Self {
            http: reqwest::Client::new(),
            credentials,
            config,
            token: None,
            headers: None,
            tag_cache,
        })
    }

    /// Current app access token, if one has been acquired.
    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn tag_cache(&self) -> &TagCache {
        &self.tag_cache
    }
}

/// Split identifiers into request-sized groups.
///
/// An empty list still yields one (empty) group so the endpoint is queried once.
pub(super) fn chunk_ids(ids: &[String]) -> Vec<&[String]> {
    if ids.is_empty() {
        return vec![ids];
    }
    ids.chunks(MAX_IDS_PER_REQUEST).collect()
}
