//! Query-string assembly for API requests.

use std::fmt::Display;

/// Incremental query-string builder.
///
/// Optional parameters with empty or whitespace-only values are dropped
/// entirely, so a request URL never carries a dangling `param=`. Names and
/// values are percent-encoded.
#[derive(Debug, Default)]
pub struct QueryBuilder {
    parts: Vec<String>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required parameter.
    pub fn add(mut self, name: &str, value: impl Display) -> Self {
        let value = value.to_string();
        self.parts.push(format!(
            "{}={}",
            urlencoding::encode(name),
            urlencoding::encode(&value)
        ));
        self
    }

    /// Append an optional parameter, skipping `None` and blank values.
    pub fn add_if_not_empty(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => self.add(name, v),
            _ => self,
        }
    }

    /// Render as `""` when no parameters were kept, `"?a=b&c=d"` otherwise.
    pub fn build(self) -> String {
        if self.parts.is_empty() {
            String::new()
        } else {
            format!("?{}", self.parts.join("&"))
        }
    }
}
