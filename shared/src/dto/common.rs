use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Error body returned by the backend on non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    #[serde(alias = "error")]
    pub message: String,
}

/// Filters for `GET /projects/search`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectSearchFilters {
    pub category: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
    /// Additional backend-specific parameters, emitted after the named ones
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl ProjectSearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.tag.is_none() && self.search.is_none() && self.extra.is_empty()
    }

    /// Encodes the set filters as `key=value` pairs joined by `&`.
    /// Returns an empty string when no filter is set.
    pub fn to_query_string(&self) -> String {
        let named = [
            ("category", self.category.as_deref()),
            ("tag", self.tag.as_deref()),
            ("search", self.search.as_deref()),
        ];

        named
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .chain(self.extra.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}
