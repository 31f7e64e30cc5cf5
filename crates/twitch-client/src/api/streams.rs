use super::*;

impl TwitchApiClient {
    /// Look up live streams by broadcaster login. Offline channels are absent
    /// from the result.
    pub async fn streams(
        &mut self,
        user_logins: impl Into<Lookup>,
    ) -> Result<Vec<Record>, TwitchError> {
        let user_logins = user_logins.into();
        self.fetch_batched("streams", "user_login", user_logins.as_slice())
            .await
    }
}
