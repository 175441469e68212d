// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time formatting hooks for label-length inference.
//!
//! Label lengths for temporal fields without a time unit are measured by
//! formatting a reference instant through the configured `timeFormat`. Rendering
//! backends may format with their own locale tables, so the formatter is a
//! pluggable trait; [`UtcTimeFormatter`] is the default.

use core::fmt::Write;

use chrono::{DateTime, Utc};

use crate::{Error, Result};

/// `2014-09-17T00:00:00Z`: a Wednesday in September, the longest weekday and month
/// names in English.
pub const LONGEST_NAMES_TIMESTAMP: i64 = 1_410_912_000;

/// A minimal time formatting interface.
pub trait TimeFormatter {
    /// Formats `timestamp` (seconds since the Unix epoch, UTC) with a strftime-style
    /// `pattern`.
    fn format_utc(&self, timestamp: i64, pattern: &str) -> Result<String>;
}

/// Formats with `chrono`'s strftime implementation and English names, in UTC.
#[derive(Clone, Copy, Debug, Default)]
pub struct UtcTimeFormatter;

impl TimeFormatter for UtcTimeFormatter {
    fn format_utc(&self, timestamp: i64, pattern: &str) -> Result<String> {
        let instant =
            DateTime::<Utc>::from_timestamp(timestamp, 0).ok_or(Error::Timestamp(timestamp))?;
        let mut out = String::new();
        write!(out, "{}", instant.format(pattern))
            .map_err(|_| Error::TimeFormat(pattern.into()))?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_instant_has_longest_names() {
        let f = UtcTimeFormatter;
        assert_eq!(
            f.format_utc(LONGEST_NAMES_TIMESTAMP, "%A %B %d %Y").unwrap(),
            "Wednesday September 17 2014"
        );
        assert_eq!(
            f.format_utc(LONGEST_NAMES_TIMESTAMP, "%Y-%m-%d").unwrap(),
            "2014-09-17"
        );
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let err = UtcTimeFormatter
            .format_utc(LONGEST_NAMES_TIMESTAMP, "%Y-%")
            .unwrap_err();
        assert!(matches!(err, Error::TimeFormat(p) if p == "%Y-%"));
    }

    #[test]
    fn out_of_range_timestamp_is_an_error() {
        let err = UtcTimeFormatter.format_utc(i64::MAX, "%Y").unwrap_err();
        assert!(matches!(err, Error::Timestamp(i64::MAX)));
    }
}
