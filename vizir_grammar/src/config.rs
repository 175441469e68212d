// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer-wide configuration carried in a spec's `config` mapping.

use serde::{Deserialize, Serialize};

use crate::stats::NullFilter;

/// Renderer-wide options consumed by metadata inference.
///
/// Read from the resolved spec's `config` subtree. The serde defaults match the
/// defaults declared by [`crate::spec_schema`], so a partially specified config
/// deserializes the same way before and after schema resolution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GrammarConfig {
    /// Width of a single plot cell, in pixels.
    pub width: u32,
    /// Height of a single plot cell, in pixels.
    pub height: u32,
    /// Default strftime-style format for temporal labels.
    pub time_format: String,
    /// Default format for numeric labels.
    pub number_format: String,
    /// Truncation length for custom time-scale labels; `None` or `0` keeps them whole.
    pub time_scale_label_length: Option<usize>,
    /// Custom weekday labels, Sunday first.
    pub day_scale_label: Option<Vec<String>>,
    /// Custom month labels, January first.
    pub month_scale_label: Option<Vec<String>>,
    /// Null filtering per field type.
    pub filter_null: NullFilter,
}

impl GrammarConfig {
    /// Default cell width.
    pub const DEFAULT_WIDTH: u32 = 200;
    /// Default cell height.
    pub const DEFAULT_HEIGHT: u32 = 200;
    /// Default temporal label format.
    pub const DEFAULT_TIME_FORMAT: &'static str = "%Y-%m-%d";
    /// Default numeric label format.
    pub const DEFAULT_NUMBER_FORMAT: &'static str = "s";
    /// Default truncation length for custom time-scale labels.
    pub const DEFAULT_TIME_SCALE_LABEL_LENGTH: usize = 3;

    /// Sets the temporal label format.
    pub fn with_time_format(mut self, time_format: impl Into<String>) -> Self {
        self.time_format = time_format.into();
        self
    }

    /// Sets custom weekday labels.
    pub fn with_day_scale_label(mut self, labels: Vec<String>) -> Self {
        self.day_scale_label = Some(labels);
        self
    }

    /// Sets custom month labels.
    pub fn with_month_scale_label(mut self, labels: Vec<String>) -> Self {
        self.month_scale_label = Some(labels);
        self
    }

    /// Sets the custom label truncation length.
    pub fn with_time_scale_label_length(mut self, len: Option<usize>) -> Self {
        self.time_scale_label_length = len;
        self
    }
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            time_format: Self::DEFAULT_TIME_FORMAT.into(),
            number_format: Self::DEFAULT_NUMBER_FORMAT.into(),
            time_scale_label_length: Some(Self::DEFAULT_TIME_SCALE_LABEL_LENGTH),
            day_scale_label: None,
            month_scale_label: None,
            filter_null: NullFilter::default(),
        }
    }
}
