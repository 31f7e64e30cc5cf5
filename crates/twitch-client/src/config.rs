//! Client configuration: defaults with environment overrides.

use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "https://api.twitch.tv/helix";
pub const DEFAULT_TOKEN_URL: &str = "https://id.twitch.tv/oauth2/token";
pub const DEFAULT_TAG_CACHE: &str = "./tags.json";

/// Endpoints and storage location used by [`crate::TwitchApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Helix base URL without trailing slash.
    pub api_base: String,
    pub token_url: String,
    pub tag_cache_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            token_url: DEFAULT_TOKEN_URL.into(),
            tag_cache_path: PathBuf::from(DEFAULT_TAG_CACHE),
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by `TWITCH_API_BASE`, `TWITCH_TOKEN_URL`
    /// and `TWITCH_TAG_CACHE` when set and non-empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(v) = non_empty("TWITCH_API_BASE") {
            config.api_base = v;
        }
        if let Some(v) = non_empty("TWITCH_TOKEN_URL") {
            config.token_url = v;
        }
        if let Some(v) = non_empty("TWITCH_TAG_CACHE") {
            config.tag_cache_path = PathBuf::from(v);
        }
        config
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    pub fn with_tag_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tag_cache_path = path.into();
        self
    }

    /// Full URL for a Helix resource path such as `users` or `games/top`.
    pub(crate) fn endpoint(&self, resource: &str) -> String {
        format!("{}/{resource}", self.api_base.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_point_at_twitch() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base, "https://api.twitch.tv/helix");
        assert_eq!(config.token_url, "https://id.twitch.tv/oauth2/token");
        assert_eq!(config.tag_cache_path, PathBuf::from("./tags.json"));
    }

    #[test]
    fn env_overrides_ignore_empty_values() {
        let vars: HashMap<&str, &str> = [
            ("TWITCH_API_BASE", "http://127.0.0.1:9000/helix"),
            ("TWITCH_TOKEN_URL", "  "),
            ("TWITCH_TAG_CACHE", "/tmp/tags.json"),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.api_base, "http://127.0.0.1:9000/helix");
        assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
        assert_eq!(config.tag_cache_path, PathBuf::from("/tmp/tags.json"));
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ClientConfig::default().with_api_base("http://localhost/helix/");
        assert_eq!(config.endpoint("games/top"), "http://localhost/helix/games/top");
    }
}
