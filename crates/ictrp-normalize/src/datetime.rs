//! Source date normalization.
//!
//! Each feed field carries one fixed textual date format, so the caller
//! declares the expected format instead of auto-detecting it from content.
//! Output is always ISO `YYYY-MM-DD`. A format/content mismatch is a typed
//! error for the row level to surface as a diagnostic.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{NormalizeError, Result};

/// ISO output pattern shared by every normalized date field.
pub const ISO_DATE: &str = "%Y-%m-%d";

/// The textual date formats observed in the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// Compact numeric registration date: `20200619`.
    CompactYmd,
    /// Last-refresh date: `19 June 2020`.
    DayMonthYear,
    /// Long-form date: `June 19, 2020`.
    MonthDayYear,
    /// Feed export stamp, 12-hour clock: `6/19/2020 3:46:17 PM`.
    ExportStamp,
}

impl DateFormat {
    fn pattern(self) -> &'static str {
        match self {
            DateFormat::CompactYmd => "%Y%m%d",
            DateFormat::DayMonthYear => "%d %B %Y",
            DateFormat::MonthDayYear => "%B %d, %Y",
            DateFormat::ExportStamp => "%m/%d/%Y %I:%M:%S %p",
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateFormat::CompactYmd => "YYYYMMDD",
            DateFormat::DayMonthYear => "DD Month YYYY",
            DateFormat::MonthDayYear => "Month DD, YYYY",
            DateFormat::ExportStamp => "MM/DD/YYYY HH:MM:SS AM/PM",
        };
        f.write_str(name)
    }
}

/// Convert a source date string to ISO `YYYY-MM-DD`.
pub fn format_date(value: &str, format: DateFormat) -> Result<String> {
    let trimmed = value.trim();
    let date = match format {
        DateFormat::ExportStamp => {
            NaiveDateTime::parse_from_str(trimmed, format.pattern()).map(|stamp| stamp.date())
        }
        _ => NaiveDate::parse_from_str(trimmed, format.pattern()),
    }
    .map_err(|_| NormalizeError::Date {
        value: trimmed.to_string(),
        format,
    })?;
    Ok(date.format(ISO_DATE).to_string())
}
