//! Shared helpers used across all domain modules.

pub mod query;
pub mod time;

pub use query::QueryBuilder;

use serde::{Deserialize, Serialize};

// ─── Paged ───────────────────────────────────────────────────────────────────

/// One page of a paginated listing.
///
/// `items` holds at most the requested page size; `total` is the size of the
/// whole result set as reported by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub total: i64,
    pub items: Vec<T>,
}

impl<T> Paged<T> {
    /// Whether this page came back shorter than the requested size.
    pub fn is_short(&self, page_size: u32) -> bool {
        (self.items.len() as u64) < u64::from(page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_deserialize() {
        let json = r#"{"total": 12, "items": ["a", "b"]}"#;
        let page: Paged<String> = serde_json::from_str(json).unwrap();
        assert_eq!(page.total, 12);
        assert_eq!(page.items, vec!["a", "b"]);
    }

    #[test]
    fn test_paged_ignores_extra_fields() {
        let json = r#"{"total": 1, "items": [], "pageIndex": 0, "pageSize": 10}"#;
        let page: Paged<String> = serde_json::from_str(json).unwrap();
        assert_eq!(page.total, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_is_short() {
        let page = Paged {
            total: 7,
            items: vec![1, 2],
        };
        assert!(page.is_short(5));
        assert!(!page.is_short(2));
    }
}
