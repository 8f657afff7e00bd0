//! Wire types for query-history responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The report a consumed query ran under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryReport {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
}

/// The catalog item the query consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryTarget {
    pub code: String,
    #[serde(default)]
    pub name: String,
    /// Item type, e.g. `"Classifier"`.
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// A single consumption record from the query history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryItem {
    #[serde(default)]
    pub report: Option<QueryReport>,
    #[serde(default)]
    pub item: Option<QueryTarget>,
    /// Consumption category, e.g. `"Classification"`, `"Tracking"`,
    /// `"Scraping"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: i64,
    pub date: DateTime<Utc>,
}

/// Aggregated consumption for one category, derived server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryStat {
    pub name: String,
    pub count: i64,
    pub ratio: f64,
    pub percentage: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_item_deserialize() {
        let json = r#"{
            "report": {"code": "rpt-1", "name": "Reviews", "title": "Hotel Reviews"},
            "item": {"code": "itm-1", "name": "Classifier", "type": "Classifier"},
            "type": "Classification",
            "amount": 3,
            "date": "2024-03-01T10:30:00Z"
        }"#;
        let item: QueryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, "Classification");
        assert_eq!(item.amount, 3);
        assert_eq!(item.report.unwrap().code, "rpt-1");
        assert_eq!(item.item.unwrap().kind, "Classifier");
        assert_eq!(item.date.to_rfc3339(), "2024-03-01T10:30:00+00:00");
    }

    #[test]
    fn test_query_item_report_and_item_may_be_absent() {
        let json = r#"{"type": "Scraping", "amount": 1, "date": "2024-03-01T00:00:00Z"}"#;
        let item: QueryItem = serde_json::from_str(json).unwrap();
        assert!(item.report.is_none());
        assert!(item.item.is_none());
    }

    #[test]
    fn test_query_stat_deserialize() {
        let json = r#"{"name": "Classification", "count": 42, "ratio": 0.84, "percentage": 84}"#;
        let stat: QueryStat = serde_json::from_str(json).unwrap();
        assert_eq!(stat.count, 42);
        assert_eq!(stat.percentage, 84);
    }
}
