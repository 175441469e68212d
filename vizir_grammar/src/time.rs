// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time unit semantics.
//!
//! A time unit buckets a temporal field before it is encoded. Everything a renderer
//! needs to know about such a field (how many buckets, whether they are ordered
//! categories, which scale and domain to use, how wide its labels get) follows from
//! the unit alone, except `year` cardinality which needs statistics (see
//! [`crate::cardinality`]).
//!
//! Functions here take `Option<TimeUnit>`; `None` is a temporal field with no
//! bucketing.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::config::GrammarConfig;
use crate::encoding::{AxisConfig, ScaleType};
use crate::format::{LONGEST_NAMES_TIMESTAMP, TimeFormatter};
use crate::types::Channel;

/// Temporal bucketing granularity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Second of the minute.
    Seconds,
    /// Minute of the hour.
    Minutes,
    /// Hour of the day.
    Hours,
    /// Day of the week.
    Day,
    /// Day of the month.
    Date,
    /// Month of the year.
    Month,
    /// Calendar year.
    Year,
}

impl TimeUnit {
    /// Every time unit, finest first.
    pub const ALL: [Self; 7] = [
        Self::Seconds,
        Self::Minutes,
        Self::Hours,
        Self::Day,
        Self::Date,
        Self::Month,
        Self::Year,
    ];

    /// The spec value for this unit.
    pub fn name(self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Day => "day",
            Self::Date => "date",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Fixed number of buckets; `None` for `year`, which is open-ended.
    pub fn cardinality(self) -> Option<u64> {
        match self {
            Self::Seconds | Self::Minutes => Some(60),
            Self::Hours => Some(24),
            Self::Day => Some(7),
            Self::Date => Some(31),
            Self::Month => Some(12),
            Self::Year => None,
        }
    }

    /// Returns `true` if buckets form a small closed cycle (everything but `year`).
    pub fn is_ordinal(self) -> bool {
        !matches!(self, Self::Year)
    }

    /// Inclusive range of bucket values; `None` for `year`.
    pub fn bounds(self) -> Option<(u32, u32)> {
        match self {
            Self::Seconds | Self::Minutes => Some((0, 59)),
            Self::Hours => Some((0, 23)),
            Self::Day => Some((0, 6)),
            Self::Date => Some((1, 31)),
            Self::Month => Some((0, 11)),
            Self::Year => None,
        }
    }

    /// Key of this unit's bucketed statistics for `field`, e.g. `year_date`.
    pub fn stats_key(self, field: &str) -> String {
        format!("{}_{field}", self.name())
    }
}

/// Named label template an axis renderer should use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelTemplate {
    /// Weekday names.
    Weekday,
    /// Month names.
    Month,
}

impl LabelTemplate {
    /// The template name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Weekday => "weekday",
            Self::Month => "month",
        }
    }
}

/// Fixed bucket count for `unit`; `None` for `year` and for no unit.
pub fn cardinality(unit: Option<TimeUnit>) -> Option<u64> {
    unit.and_then(TimeUnit::cardinality)
}

/// Returns `true` for every unit but `year`; `false` with no unit.
pub fn is_ordinal(unit: Option<TimeUnit>) -> bool {
    unit.is_some_and(TimeUnit::is_ordinal)
}

/// Upper bound on the length of a label for `unit`.
///
/// With no unit, the reference instant [`LONGEST_NAMES_TIMESTAMP`] is formatted
/// through `config.time_format` and the result's length is returned.
pub fn max_label_length(
    unit: Option<TimeUnit>,
    axis: &AxisConfig,
    config: &GrammarConfig,
    formatter: &dyn TimeFormatter,
) -> Result<usize> {
    let len = match unit {
        Some(TimeUnit::Seconds | TimeUnit::Minutes | TimeUnit::Hours | TimeUnit::Date) => 2,
        // "September", "Wednesday"
        Some(TimeUnit::Month | TimeUnit::Day) => {
            if axis.short_time_names {
                3
            } else {
                9
            }
        }
        Some(TimeUnit::Year) => 4,
        None => formatter
            .format_utc(LONGEST_NAMES_TIMESTAMP, &config.time_format)?
            .chars()
            .count(),
    };
    Ok(len)
}

/// Scale type for a temporal field bucketed by `unit` on `channel`.
///
/// Color is always linear so that ordered buckets interpolate.
pub fn scale_type(unit: Option<TimeUnit>, channel: Channel) -> ScaleType {
    if channel == Channel::Color {
        return ScaleType::Linear;
    }
    if is_ordinal(unit) || channel.is_facet() {
        ScaleType::Ordinal
    } else {
        ScaleType::Linear
    }
}

/// Scale domain for `unit` on `channel`.
///
/// Color gets the `[min, max]` bound pair; other channels get every bucket value.
/// `None` when the domain is unbounded (`year`, no unit).
pub fn scale_domain(unit: Option<TimeUnit>, channel: Channel) -> Option<Vec<u32>> {
    let (min, max) = unit?.bounds()?;
    Some(if channel == Channel::Color {
        vec![min, max]
    } else {
        (min..=max).collect()
    })
}

/// Configured label sequence for `day` or `month`, truncated to
/// `config.time_scale_label_length` characters when that is set and non-zero.
pub fn custom_label_range(unit: Option<TimeUnit>, config: &GrammarConfig) -> Option<Vec<String>> {
    let labels = match unit? {
        TimeUnit::Day => config.day_scale_label.as_ref(),
        TimeUnit::Month => config.month_scale_label.as_ref(),
        _ => None,
    }?;
    let range = match config.time_scale_label_length {
        Some(len) if len > 0 => labels.iter().map(|s| s.chars().take(len).collect()).collect(),
        _ => labels.clone(),
    };
    Some(range)
}

/// Label template for `unit`; `None` means the generic temporal formatter.
pub fn label_template(unit: Option<TimeUnit>) -> Option<LabelTemplate> {
    match unit? {
        TimeUnit::Day => Some(LabelTemplate::Weekday),
        TimeUnit::Month => Some(LabelTemplate::Month),
        _ => None,
    }
}

/// Expression extracting `unit` from the field referenced by `field_ref`.
pub fn formula(unit: TimeUnit, field_ref: &str) -> String {
    format!("utc{}({field_ref})", unit.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::UtcTimeFormatter;

    const FIXED: [(TimeUnit, u64); 6] = [
        (TimeUnit::Seconds, 60),
        (TimeUnit::Minutes, 60),
        (TimeUnit::Hours, 24),
        (TimeUnit::Day, 7),
        (TimeUnit::Date, 31),
        (TimeUnit::Month, 12),
    ];

    fn weekdays() -> Vec<String> {
        [
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ]
        .map(String::from)
        .to_vec()
    }

    #[test]
    fn fixed_units_have_constant_cardinality() {
        for (unit, expected) in FIXED {
            assert_eq!(cardinality(Some(unit)), Some(expected), "{unit:?}");
        }
        assert_eq!(cardinality(Some(TimeUnit::Year)), None);
        assert_eq!(cardinality(None), None);
    }

    #[test]
    fn ordinality() {
        for (unit, _) in FIXED {
            assert!(is_ordinal(Some(unit)), "{unit:?}");
        }
        assert!(!is_ordinal(Some(TimeUnit::Year)));
        assert!(!is_ordinal(None));
    }

    #[test]
    fn label_lengths() {
        let axis = AxisConfig::default();
        let short = AxisConfig {
            short_time_names: true,
            ..AxisConfig::default()
        };
        let config = GrammarConfig::default();
        let f = UtcTimeFormatter;
        let len = |unit, axis: &AxisConfig| max_label_length(unit, axis, &config, &f).unwrap();

        for unit in [
            TimeUnit::Seconds,
            TimeUnit::Minutes,
            TimeUnit::Hours,
            TimeUnit::Date,
        ] {
            assert_eq!(len(Some(unit), &axis), 2);
        }
        assert_eq!(len(Some(TimeUnit::Year), &axis), 4);
        assert_eq!(len(Some(TimeUnit::Month), &axis), 9);
        assert_eq!(len(Some(TimeUnit::Day), &axis), 9);
        assert_eq!(len(Some(TimeUnit::Month), &short), 3);
        assert_eq!(len(Some(TimeUnit::Day), &short), 3);
        // "2014-09-17"
        assert_eq!(len(None, &axis), 10);
    }

    #[test]
    fn label_length_without_unit_follows_time_format() {
        let config = GrammarConfig::default().with_time_format("%A, %B %d");
        let len = max_label_length(None, &AxisConfig::default(), &config, &UtcTimeFormatter);
        assert_eq!(len.unwrap(), "Wednesday, September 17".len());

        let config = GrammarConfig::default().with_time_format("%");
        assert!(
            max_label_length(None, &AxisConfig::default(), &config, &UtcTimeFormatter).is_err()
        );
        // The format is only consulted when there is no unit.
        assert_eq!(
            max_label_length(
                Some(TimeUnit::Year),
                &AxisConfig::default(),
                &config,
                &UtcTimeFormatter
            )
            .unwrap(),
            4
        );
    }

    #[test]
    fn scale_types() {
        for unit in TimeUnit::ALL.map(Some).into_iter().chain([None]) {
            assert_eq!(scale_type(unit, Channel::Color), ScaleType::Linear);
            assert_eq!(scale_type(unit, Channel::Row), ScaleType::Ordinal);
            assert_eq!(scale_type(unit, Channel::Column), ScaleType::Ordinal);
        }
        assert_eq!(scale_type(Some(TimeUnit::Day), Channel::X), ScaleType::Ordinal);
        assert_eq!(scale_type(Some(TimeUnit::Year), Channel::X), ScaleType::Linear);
        assert_eq!(scale_type(None, Channel::X), ScaleType::Linear);
    }

    #[test]
    fn scale_domains() {
        assert_eq!(scale_domain(Some(TimeUnit::Date), Channel::Color), Some(vec![1, 31]));
        let dates = scale_domain(Some(TimeUnit::Date), Channel::X).unwrap();
        assert_eq!(dates.len(), 31);
        assert_eq!(dates.first(), Some(&1));
        assert_eq!(dates.last(), Some(&31));

        assert_eq!(scale_domain(Some(TimeUnit::Seconds), Channel::Color), Some(vec![0, 59]));
        assert_eq!(scale_domain(Some(TimeUnit::Minutes), Channel::Color), Some(vec![0, 59]));
        assert_eq!(scale_domain(Some(TimeUnit::Hours), Channel::Color), Some(vec![0, 23]));
        assert_eq!(scale_domain(Some(TimeUnit::Day), Channel::Color), Some(vec![0, 6]));
        assert_eq!(scale_domain(Some(TimeUnit::Month), Channel::Color), Some(vec![0, 11]));
        assert_eq!(
            scale_domain(Some(TimeUnit::Day), Channel::Y),
            Some(vec![0, 1, 2, 3, 4, 5, 6])
        );
        assert_eq!(scale_domain(Some(TimeUnit::Hours), Channel::Row).map(|d| d.len()), Some(24));
        assert_eq!(scale_domain(Some(TimeUnit::Year), Channel::X), None);
        assert_eq!(scale_domain(None, Channel::Color), None);
    }

    #[test]
    fn custom_labels_are_truncated() {
        let config = GrammarConfig::default().with_day_scale_label(weekdays());
        let range = custom_label_range(Some(TimeUnit::Day), &config).unwrap();
        assert_eq!(range, ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);

        let whole = config.clone().with_time_scale_label_length(None);
        assert_eq!(custom_label_range(Some(TimeUnit::Day), &whole), Some(weekdays()));
        let zero = config.clone().with_time_scale_label_length(Some(0));
        assert_eq!(custom_label_range(Some(TimeUnit::Day), &zero), Some(weekdays()));

        assert_eq!(custom_label_range(Some(TimeUnit::Month), &config), None);
        assert_eq!(custom_label_range(Some(TimeUnit::Hours), &config), None);
        assert_eq!(custom_label_range(None, &config), None);
    }

    #[test]
    fn month_labels_use_month_config() {
        let months = ["January", "February"].map(String::from).to_vec();
        let config = GrammarConfig::default()
            .with_month_scale_label(months)
            .with_time_scale_label_length(Some(1));
        assert_eq!(
            custom_label_range(Some(TimeUnit::Month), &config),
            Some(vec!["J".to_owned(), "F".to_owned()])
        );
    }

    #[test]
    fn label_templates() {
        assert_eq!(label_template(Some(TimeUnit::Day)), Some(LabelTemplate::Weekday));
        assert_eq!(label_template(Some(TimeUnit::Month)), Some(LabelTemplate::Month));
        assert_eq!(label_template(Some(TimeUnit::Year)), None);
        assert_eq!(label_template(None), None);
        assert_eq!(LabelTemplate::Weekday.name(), "weekday");
    }

    #[test]
    fn formula_wraps_field_ref() {
        assert_eq!(formula(TimeUnit::Month, "d.data.date"), "utcmonth(d.data.date)");
        assert_eq!(TimeUnit::Year.stats_key("date"), "year_date");
    }
}
