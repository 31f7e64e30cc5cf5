use std::ops::{Deref, DerefMut};

use super::*;

/// An authenticated client scope.
///
/// Created by [`TwitchApiClient::enter_session`]. Dropping the session
/// (normally, by `?`, or by panic unwinding) discards the token and
/// releases the HTTP connection pool.
pub struct ApiSession {
    client: TwitchApiClient,
}

impl TwitchApiClient {
    /// Acquire an app access token and open a session.
    ///
    /// On failure the client, and with it the connection pool, is dropped.
    pub async fn enter_session(mut self) -> Result<ApiSession, TwitchError> {
        self.authenticate().await?;
        tracing::info!(client_id = %self.credentials.client_id, "Twitch session started");
        Ok(ApiSession { client: self })
    }
}

impl ApiSession {
    /// End the session explicitly.
    pub fn close(self) {}
}

impl Deref for ApiSession {
    type Target = TwitchApiClient;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl DerefMut for ApiSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.client
    }
}

impl Drop for ApiSession {
    fn drop(&mut self) {
        self.client.token = None;
        self.client.headers = None;
        tracing::info!("Twitch session closed");
    }
}
