use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use url::Url;

use super::*;
use crate::auth;

/// Build auth headers from the given token.
pub(super) fn auth_headers(client_id: &str, token: &Token) -> Result<HeaderMap, TwitchError> {
    let mut headers = HeaderMap::new();
    let bearer = format!("Bearer {}", token.access_token);
    headers.insert(AUTHORIZATION, HeaderValue::from_str(&bearer)?);
    headers.insert("Client-ID", HeaderValue::from_str(client_id)?);
    Ok(headers)
}

impl TwitchApiClient {
    /// Request a new app access token and replace the current one.
    pub async fn authenticate(&mut self) -> Result<(), TwitchError> {
        let token =
            auth::request_app_token(&self.http, &self.config.token_url, &self.credentials).await?;
        let headers = auth_headers(&self.credentials.client_id, &token)?;

        tracing::info!(expires_at = token.expires_at, "Acquired app access token");
        self.headers = Some(headers);
        self.token = Some(token);
        Ok(())
    }

    /// Execute a GET request with auth headers.
    ///
    /// On 401 the token is renewed and the request is sent once more;
    /// the retried response is not retried again.
    pub(super) async fn authenticated_get(&mut self, url: &str) -> Result<String, TwitchError> {
        let headers = self.headers.clone().ok_or(TwitchError::AuthRequired)?;
        let resp = self.http.get(url).headers(headers).send().await?;

        let status = resp.status();
        if status == StatusCode::OK {
            return Ok(resp.text().await?);
        }

        if status != StatusCode::UNAUTHORIZED {
            return Err(status_error(resp).await);
        }

        tracing::warn!(url, "Got 401, refreshing app token and retrying once");
        self.authenticate().await?;

        let headers = self.headers.clone().ok_or(TwitchError::AuthRequired)?;
        let retry = self.http.get(url).headers(headers).send().await?;
        if retry.status() != StatusCode::OK {
            return Err(status_error(retry).await);
        }
        Ok(retry.text().await?)
    }

    /// GET a Helix resource and return the `data` array of the envelope.
    pub(super) async fn get_data(&mut self, url: &str) -> Result<Vec<Record>, TwitchError> {
        let body = self.authenticated_get(url).await?;
        let resp: HelixResponse<Record> = serde_json::from_str(&body)?;
        Ok(resp.data)
    }

    /// Resource URL with one `param=<id>` pair per identifier, in order.
    pub(super) fn query_url(
        &self,
        resource: &str,
        param: &str,
        ids: &[String],
    ) -> Result<String, TwitchError> {
        let mut url = Url::parse(&self.config.endpoint(resource))?;
        if !ids.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for id in ids {
                pairs.append_pair(param, id);
            }
        }
        Ok(url.into())
    }

    /// Look up identifiers in groups of at most 100, one request per group,
    /// concatenating the `data` arrays in request order.
    pub(super) async fn fetch_batched(
        &mut self,
        resource: &str,
        param: &str,
        ids: &[String],
    ) -> Result<Vec<Record>, TwitchError> {
        let mut records = Vec::new();
        for chunk in chunk_ids(ids) {
            let url = self.query_url(resource, param, chunk)?;
            tracing::debug!(resource, size = chunk.len(), "Helix batch request");
            records.extend(self.get_data(&url).await?);
        }
        Ok(records)
    }
}

/// Convert a non-200 response into [`TwitchError::Status`].
async fn status_error(resp: reqwest::Response) -> TwitchError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let envelope = serde_json::from_str::<HelixErrorResponse>(&body).ok();

    let (env_status, error, message) = match envelope {
        Some(e) => (e.status, e.error, e.message),
        None => (None, None, None),
    };

    TwitchError::Status {
        status: env_status.unwrap_or(status.as_u16()),
        error: error
            .or_else(|| status.canonical_reason().map(str::to_owned))
            .unwrap_or_default(),
        message: message.unwrap_or(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_headers_carry_bearer_and_client_id() {
        let token = Token {
            access_token: "abc".into(),
            expires_at: 0,
        };
        let headers = auth_headers("my-client", &token).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc");
        assert_eq!(headers.get("Client-ID").unwrap(), "my-client");
    }

    #[test]
    fn auth_headers_reject_control_characters() {
        let token = Token {
            access_token: "bad\ntoken".into(),
            expires_at: 0,
        };
        assert!(matches!(
            auth_headers("id", &token),
            Err(TwitchError::InvalidHeader(_))
        ));
    }

    #[test]
    fn chunk_ids_splits_at_100() {
        let ids = (0..250).map(|i| format!("u{i}")).collect::<Vec<_>>();
        let chunks = chunk_ids(&ids);
        assert_eq!(chunks.iter().map(|c| c.len()).collect::<Vec<_>>(), [100, 100, 50]);
        assert_eq!(chunks[2][0], "u200");

        let exact = (0..200).map(|i| format!("u{i}")).collect::<Vec<_>>();
        assert_eq!(chunk_ids(&exact).len(), 2);
    }

    #[test]
    fn chunk_ids_keeps_one_group_for_empty_input() {
        let chunks = chunk_ids(&[]);
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].is_empty());
    }
}
