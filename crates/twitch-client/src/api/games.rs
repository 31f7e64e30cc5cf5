use super::*;

impl TwitchApiClient {
    /// Look up games by exact name.
    pub async fn games(&mut self, names: impl Into<Lookup>) -> Result<Vec<Record>, TwitchError> {
        let names = names.into();
        self.fetch_batched("games", "name", names.as_slice()).await
    }

    /// Games currently ranked by viewer count.
    pub async fn top_games(&mut self) -> Result<Vec<Record>, TwitchError> {
        let url = self.config.endpoint("games/top");
        self.get_data(&url).await
    }
}
