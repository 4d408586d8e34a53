use chrono::{DateTime, Utc};

/// Calendar date in German notation, e.g. `14.11.2023`.
#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%d.%m.%Y").to_string()
}
