use serde::Deserialize;

/// A user, stream, game or tag record, passed through as returned by Helix.
pub type Record = serde_json::Value;

/// Wrapper for Twitch Helix responses.
#[derive(Debug, Deserialize)]
pub struct HelixResponse<T> {
    pub data: Vec<T>,
}

/// Error envelope returned with non-200 Helix responses.
#[derive(Debug, Deserialize)]
pub struct HelixErrorResponse {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One or many lookup identifiers.
///
/// Lets every lookup accept either a single name or a sequence of names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lookup(Vec<String>);

impl Lookup {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for Lookup {
    fn from(id: &str) -> Self {
        Self(vec![id.to_owned()])
    }
}

impl From<String> for Lookup {
    fn from(id: String) -> Self {
        Self(vec![id])
    }
}

impl From<&String> for Lookup {
    fn from(id: &String) -> Self {
        Self(vec![id.clone()])
    }
}

impl<T: Into<String>> From<Vec<T>> for Lookup {
    fn from(ids: Vec<T>) -> Self {
        Self(ids.into_iter().map(Into::into).collect())
    }
}

impl<T: AsRef<str>> From<&[T]> for Lookup {
    fn from(ids: &[T]) -> Self {
        Self(ids.iter().map(|id| id.as_ref().to_owned()).collect())
    }
}

impl<T: AsRef<str>> From<&Vec<T>> for Lookup {
    fn from(ids: &Vec<T>) -> Self {
        Self::from(ids.as_slice())
    }
}

impl<T: Into<String>, const N: usize> From<[T; N]> for Lookup {
    fn from(ids: [T; N]) -> Self {
        Self(ids.into_iter().map(Into::into).collect())
    }
}

impl FromIterator<String> for Lookup {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_and_many_identifiers_normalize_to_a_list() {
        assert_eq!(Lookup::from("ninja").as_slice(), ["ninja".to_string()]);
        assert_eq!(Lookup::from(String::from("a")).len(), 1);

        let many = Lookup::from(vec!["a", "b", "c"]);
        assert_eq!(many.into_inner(), vec!["a", "b", "c"]);

        let names = vec!["x".to_string(), "y".to_string()];
        assert_eq!(Lookup::from(&names).len(), 2);
        assert_eq!(Lookup::from(["p", "q"]).len(), 2);
        assert!(Lookup::from(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn error_envelope_deserializes_partial_body() {
        let parsed: HelixErrorResponse =
            serde_json::from_str(r#"{"error": "Forbidden", "status": 403}"#).unwrap();
        assert_eq!(parsed.status, Some(403));
        assert_eq!(parsed.error.as_deref(), Some("Forbidden"));
        assert!(parsed.message.is_none());
    }

    #[test]
    fn response_envelope_passes_records_through() {
        let body = r#"{"data": [{"id": "1", "extra": {"nested": true}}], "pagination": {}}"#;
        let parsed: HelixResponse<Record> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.len(), 1);
        assert_eq!(parsed.data[0]["extra"]["nested"], serde_json::json!(true));
    }
}
