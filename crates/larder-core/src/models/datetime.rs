//! Wire format for meal dates.
//!
//! Dates travel as `YYYY-MM-DD HH:MM` text, both in the JSON wire
//! representation and in the `meals.date` column. The format is
//! zero-padded, so text comparison orders chronologically.

use jiff::civil::{datetime, DateTime};
use jiff::Zoned;

use crate::error::{Result, StorageError};

/// Fixed textual format shared by the wire and the database column.
pub const WIRE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Current wall-clock time truncated to the minute, the default for a
/// meal created without an explicit date.
pub fn now_minute() -> DateTime {
    let now = Zoned::now().datetime();
    datetime(
        now.year(),
        now.month(),
        now.day(),
        now.hour(),
        now.minute(),
        0,
        0,
    )
}

/// Formats `date` in the wire format.
pub fn format(date: &DateTime) -> String {
    date.strftime(WIRE_FORMAT).to_string()
}

/// Parses wire-format text back into a date-time.
pub fn parse(text: &str) -> Result<DateTime> {
    DateTime::strptime(WIRE_FORMAT, text)
        .map_err(|e| StorageError::invalid_input("date", e.to_string()))
}

/// Serde adapter applying the wire format to a date field.
pub mod wire {
    use jiff::civil::DateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::WIRE_FORMAT;

    pub fn serialize<S: Serializer>(date: &DateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format(date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        DateTime::strptime(WIRE_FORMAT, &text).map_err(de::Error::custom)
    }
}
