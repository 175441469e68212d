// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-supplied field statistics and null filtering policy.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::time::TimeUnit;
use crate::types::FieldType;

/// Summary statistics of one field, as produced by a data-profiling step.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldStats {
    /// Number of distinct values, including a missing-value bucket if any.
    pub distinct: u64,
    /// Number of missing (`null`) values.
    pub missing: u64,
    /// Smallest value; a number for quantitative fields.
    pub min: Value,
    /// Largest value; a number for quantitative fields.
    pub max: Value,
}

impl FieldStats {
    /// Stats with only a distinct count.
    pub fn distinct(distinct: u64) -> Self {
        Self {
            distinct,
            ..Self::default()
        }
    }

    /// Sets the missing count.
    pub fn with_missing(mut self, missing: u64) -> Self {
        self.missing = missing;
        self
    }

    /// Sets a numeric extent.
    pub fn with_extent(mut self, min: f64, max: f64) -> Self {
        self.min = Value::from(min);
        self.max = Value::from(max);
        self
    }

    /// The extent as numbers, if both ends are numeric.
    pub fn numeric_extent(&self) -> Option<(f64, f64)> {
        Some((self.min.as_f64()?, self.max.as_f64()?))
    }
}

/// Statistics for every field of a dataset.
///
/// Keyed by field name; time-bucketed variants are keyed `"<timeUnit>_<field>"`
/// (see [`TimeUnit::stats_key`]). Read-only for the duration of a compile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldStatistics {
    fields: BTreeMap<String, FieldStats>,
}

impl FieldStatistics {
    /// Creates an empty set of statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) stats for `key`.
    pub fn with(mut self, key: impl Into<String>, stats: FieldStats) -> Self {
        self.fields.insert(key.into(), stats);
        self
    }

    /// Stats for a field.
    pub fn get(&self, field: &str) -> Option<&FieldStats> {
        self.fields.get(field)
    }

    /// Stats for `field` after bucketing by `unit`.
    pub fn bucketed(&self, unit: TimeUnit, field: &str) -> Option<&FieldStats> {
        self.fields.get(&unit.stats_key(field))
    }
}

impl<K: Into<String>> FromIterator<(K, FieldStats)> for FieldStatistics {
    fn from_iter<I: IntoIterator<Item = (K, FieldStats)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Which field types have `null` values filtered out before encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NullFilter {
    /// Quantitative fields.
    #[serde(rename = "Q")]
    pub quantitative: bool,
    /// Ordinal fields.
    #[serde(rename = "O")]
    pub ordinal: bool,
    /// Nominal fields.
    #[serde(rename = "N")]
    pub nominal: bool,
    /// Temporal fields.
    #[serde(rename = "T")]
    pub temporal: bool,
}

impl Default for NullFilter {
    fn default() -> Self {
        Self {
            quantitative: true,
            ordinal: false,
            nominal: false,
            temporal: true,
        }
    }
}

impl NullFilter {
    /// A policy that keeps nulls for every type.
    pub const KEEP_ALL: Self = Self {
        quantitative: false,
        ordinal: false,
        nominal: false,
        temporal: false,
    };

    /// Returns `true` if nulls are filtered out for `field_type`.
    pub fn filters(&self, field_type: FieldType) -> bool {
        match field_type {
            FieldType::Quantitative => self.quantitative,
            FieldType::Ordinal => self.ordinal,
            FieldType::Nominal => self.nominal,
            FieldType::Temporal => self.temporal,
        }
    }

    /// Returns a copy with filtering for `field_type` set to `filter`.
    pub fn with(mut self, field_type: FieldType, filter: bool) -> Self {
        match field_type {
            FieldType::Quantitative => self.quantitative = filter,
            FieldType::Ordinal => self.ordinal = filter,
            FieldType::Nominal => self.nominal = filter,
            FieldType::Temporal => self.temporal = filter,
        }
        self
    }
}
