use serde_json::Value;

use super::*;

impl TwitchApiClient {
    /// Look up stream tags by tag ID.
    ///
    /// Cached tags are returned first, in input order, followed by newly
    /// fetched tags in response order. Fetched tags are cached under the
    /// `tag_id` of the returned record and the cache file is rewritten.
    pub async fn tags(&mut self, tag_ids: impl Into<Lookup>) -> Result<Vec<Record>, TwitchError> {
        let tag_ids = tag_ids.into();

        let mut tags = Vec::with_capacity(tag_ids.len());
        let mut unknown = Vec::new();
        for id in tag_ids.as_slice() {
            match self.tag_cache.get(id) {
                Some(tag) => tags.push(tag.clone()),
                None => unknown.push(id.clone()),
            }
        }
        tracing::debug!(hits = tags.len(), misses = unknown.len(), "Tag cache lookup");

        if !unknown.is_empty() {
            for chunk in chunk_ids(&unknown) {
                let url = self.query_url("tags/streams", "tag_id", chunk)?;
                tracing::debug!(size = chunk.len(), "Helix tag request");
                for tag in self.get_data(&url).await? {
                    if let Some(id) = tag.get("tag_id").and_then(Value::as_str) {
                        self.tag_cache.insert(id.to_owned(), tag.clone());
                    }
                    tags.push(tag);
                }
            }
        }

        self.tag_cache.persist().await?;
        Ok(tags)
    }
}
