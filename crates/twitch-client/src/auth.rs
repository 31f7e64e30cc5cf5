//! App access token acquisition for Twitch.
//!
//! Uses the OAuth client credentials grant: no user interaction and
//! no refresh token. A rejected token is replaced by requesting a new one.

use chrono::Utc;
use serde::Deserialize;

use crate::TwitchError;

/// Application credential pair, fixed for the lifetime of a client.
#[derive(Clone)]
pub struct AppCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl AppCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl std::fmt::Debug for AppCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Bearer token currently used for Helix requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    /// Unix timestamp. Zero when the grant did not report a lifetime.
    pub expires_at: i64,
}

/// Token endpoint success body.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

/// Token endpoint failure body.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

/// Request an app access token with the client credentials grant.
pub async fn request_app_token(
    http: &reqwest::Client,
    token_url: &str,
    credentials: &AppCredentials,
) -> Result<Token, TwitchError> {
    let params = [
        ("client_id", credentials.client_id.as_str()),
        ("client_secret", credentials.client_secret.as_str()),
        ("grant_type", "client_credentials"),
    ];

    let resp = http.post(token_url).form(&params).send().await?;
    parse_token_response(resp).await
}

async fn parse_token_response(resp: reqwest::Response) -> Result<Token, TwitchError> {
    let status = resp.status();
    let body = resp.text().await?;

    if status != reqwest::StatusCode::OK {
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or(body);
        return Err(TwitchError::Authentication {
            status: status.as_u16(),
            message,
        });
    }

    let token_resp: TokenResponse = serde_json::from_str(&body)?;
    let expires_at = token_resp
        .expires_in
        .map(|secs| Utc::now().timestamp() + secs)
        .unwrap_or(0);

    Ok(Token {
        access_token: token_resp.access_token,
        expires_at,
    })
}
