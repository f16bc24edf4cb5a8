//! Ordered query-string builder
//!
//! Keys keep insertion order so the outbound URL mirrors the form order.
//! Absent and empty values are never stored.

use std::fmt::Display;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value; empty strings are skipped
    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        self.pairs.push((key.to_string(), value));
    }

    /// Append only when the value is present
    pub fn push_opt<T: Display>(&mut self, key: &str, value: Option<T>) {
        if let Some(v) = value {
            self.push(key, v.to_string());
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Percent-encoded `k=v&k=v` without a leading `?`
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order() {
        let mut q = QueryParams::new();
        q.push("q", "milk");
        q.push("limit", "5");
        assert_eq!(q.to_query_string(), "q=milk&limit=5");
    }

    #[test]
    fn test_empty_and_absent_values_are_skipped() {
        let mut q = QueryParams::new();
        q.push("q", "");
        q.push_opt::<u32>("limit", None);
        q.push_opt("offset", Some(10));
        assert_eq!(q.len(), 1);
        assert_eq!(q.to_query_string(), "offset=10");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let mut q = QueryParams::new();
        q.push("q", "full cream & lite");
        // Spaces go out as %20, not the form-encoded `+`; the backend decodes both
        assert_eq!(q.to_query_string(), "q=full%20cream%20%26%20lite");
    }

    #[test]
    fn test_get() {
        let mut q = QueryParams::new();
        q.push("brand", "OzGroceries");
        assert_eq!(q.get("brand"), Some("OzGroceries"));
        assert_eq!(q.get("q"), None);
    }
}
