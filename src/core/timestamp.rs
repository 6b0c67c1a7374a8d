//! Timestamp rendering
//!
//! Records carry UTC epoch milliseconds. The pretty line shows the wall-clock
//! time of the machine rendering it: the instant is shifted by the UTC offset
//! and printed as ISO 8601 without the trailing `Z`, since the shifted value
//! is no longer UTC.

use super::error::{FormatterError, Result};
use chrono::{DateTime, FixedOffset, Local, Utc};

/// Layout of the rendered timestamp: `2025-01-08T10:30:45.123`
pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Which UTC offset is applied before printing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZoneShift {
    /// Offset of the local time zone at render time
    #[default]
    Local,
    /// No shift, print UTC
    Utc,
    /// A fixed offset, mostly useful for reproducible output
    Fixed(FixedOffset),
}

impl ZoneShift {
    /// Offset in seconds east of UTC
    pub fn offset_seconds(&self) -> i32 {
        match self {
            ZoneShift::Local => Local::now().offset().local_minus_utc(),
            ZoneShift::Utc => 0,
            ZoneShift::Fixed(offset) => offset.local_minus_utc(),
        }
    }

    /// Render epoch milliseconds as local wall-clock ISO 8601 without zone marker
    ///
    /// # Examples
    ///
    /// ```
    /// use nest_pretty_formatter::core::ZoneShift;
    ///
    /// let rendered = ZoneShift::Utc.format_millis(1_736_332_245_123).unwrap();
    /// assert_eq!(rendered, "2025-01-08T10:30:45.123");
    /// ```
    pub fn format_millis(&self, millis: i64) -> Result<String> {
        let shifted = millis
            .checked_add(i64::from(self.offset_seconds()) * 1000)
            .ok_or_else(|| FormatterError::invalid_timestamp(millis))?;

        let datetime: DateTime<Utc> = DateTime::from_timestamp_millis(shifted)
            .ok_or_else(|| FormatterError::invalid_timestamp(millis))?;

        Ok(datetime.format(TIMESTAMP_LAYOUT).to_string())
    }
}
