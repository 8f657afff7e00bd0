//! UTC timestamp rendering for date-range query parameters.

use chrono::{DateTime, TimeZone, Utc};

/// Wire format for date parameters: second precision, literal `Z` suffix.
const UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Renders a timestamp as `yyyy-MM-ddTHH:mm:ssZ`, converting to UTC first.
pub fn format_utc<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    dt.with_timezone(&Utc).format(UTC_FORMAT).to_string()
}
