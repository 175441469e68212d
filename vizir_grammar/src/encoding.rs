// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Encoding definitions: one data field mapped to one channel.

use serde::{Deserialize, Serialize};

use crate::time::TimeUnit;
use crate::types::FieldType;

/// Bin count used when binning is enabled without an explicit `maxbins`.
pub const DEFAULT_MAX_BINS: u32 = 15;

/// One declared mapping of a data field to a visual channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodingDef {
    /// Field name; absent for constant or aggregate-only encodings.
    #[serde(default, alias = "field", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Declared measurement type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Binning configuration.
    #[serde(default)]
    pub bin: Bin,
    /// Temporal bucketing applied before encoding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_unit: Option<TimeUnit>,
    /// Scale overrides.
    #[serde(default)]
    pub scale: ScaleConfig,
    /// Axis options.
    #[serde(default)]
    pub axis: AxisConfig,
}

impl EncodingDef {
    /// Creates a definition for `name` with no bin, time unit, or overrides.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: Some(name.into()),
            field_type,
            bin: Bin::default(),
            time_unit: None,
            scale: ScaleConfig::default(),
            axis: AxisConfig::default(),
        }
    }

    /// Sets the time unit.
    pub fn with_time_unit(mut self, time_unit: TimeUnit) -> Self {
        self.time_unit = Some(time_unit);
        self
    }

    /// Sets the binning configuration.
    pub fn with_bin(mut self, bin: Bin) -> Self {
        self.bin = bin;
        self
    }

    /// Sets the axis options.
    pub fn with_axis(mut self, axis: AxisConfig) -> Self {
        self.axis = axis;
        self
    }

    /// Returns `true` if the declared type is `field_type`.
    pub fn is_type(&self, field_type: FieldType) -> bool {
        self.field_type == field_type
    }

    /// Returns `true` if the declared type is any of `types`.
    pub fn is_types(&self, types: &[FieldType]) -> bool {
        self.field_type.is_any_of(types)
    }

    /// Returns `true` if this field is drawn with a discrete (ordinal) scale.
    ///
    /// Nominal and ordinal fields always are; temporal fields are when their time
    /// unit forms a small closed cycle.
    pub fn is_ordinal_scale(&self) -> bool {
        self.is_types(&[FieldType::Nominal, FieldType::Ordinal])
            || (self.is_type(FieldType::Temporal)
                && self.time_unit.is_some_and(TimeUnit::is_ordinal))
    }
}

/// Binning configuration: a flag, or explicit parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bin {
    /// `true` bins with [`DEFAULT_MAX_BINS`]; `false` disables binning.
    Enabled(bool),
    /// Binning with explicit parameters.
    Params(BinParams),
}

impl Default for Bin {
    fn default() -> Self {
        Self::Enabled(false)
    }
}

impl Bin {
    /// Returns the maximum number of bins, or `None` if binning is off.
    pub fn max_bins(&self) -> Option<u32> {
        match self {
            Self::Enabled(false) => None,
            Self::Enabled(true) => Some(DEFAULT_MAX_BINS),
            Self::Params(p) => Some(p.maxbins.unwrap_or(DEFAULT_MAX_BINS)),
        }
    }
}

/// Explicit binning parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinParams {
    /// Upper bound on the number of bins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxbins: Option<u32>,
}

/// Axis options consumed by label-length inference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisConfig {
    /// Use abbreviated month and weekday names.
    pub short_time_names: bool,
    /// Caps the inferred maximum label length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_label_length: Option<usize>,
}

/// Scale overrides on an encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    /// Scale type for quantitative fields.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scale_type: Option<ScaleType>,
    /// Whether a quantitative domain includes zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero: Option<bool>,
}

/// The kind of scale a renderer should build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    /// Continuous linear interpolation.
    Linear,
    /// Continuous logarithmic.
    Log,
    /// Continuous power.
    Pow,
    /// Continuous square root.
    Sqrt,
    /// Quantile buckets.
    Quantile,
    /// Discrete categories.
    Ordinal,
    /// Continuous time.
    Time,
}

impl ScaleType {
    /// Scale types a quantitative field may select.
    pub const QUANTITATIVE: [Self; 5] = [
        Self::Linear,
        Self::Log,
        Self::Pow,
        Self::Sqrt,
        Self::Quantile,
    ];

    /// The spec value for this scale type.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Log => "log",
            Self::Pow => "pow",
            Self::Sqrt => "sqrt",
            Self::Quantile => "quantile",
            Self::Ordinal => "ordinal",
            Self::Time => "time",
        }
    }
}
