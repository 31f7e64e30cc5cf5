use super::*;

impl TwitchApiClient {
    /// Look up users by login name.
    pub async fn users(&mut self, logins: impl Into<Lookup>) -> Result<Vec<Record>, TwitchError> {
        let logins = logins.into();
        self.fetch_batched("users", "login", logins.as_slice()).await
    }
}
