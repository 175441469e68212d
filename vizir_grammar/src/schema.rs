// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canonical spec schema.
//!
//! One JSON-Schema (draft-04) document serves both as the source of defaults for
//! [`vizir_schema::instantiate`] and as the contract checked by the validator.
//! Enumerations are generated from the Rust enums so the two cannot drift.

use serde_json::{Map, Value, json};

use crate::config::GrammarConfig;
use crate::encoding::{DEFAULT_MAX_BINS, ScaleType};
use crate::stats::NullFilter;
use crate::time::TimeUnit;
use crate::types::{Channel, FieldType, MarkType};

/// Builds the canonical spec schema.
pub fn spec_schema() -> Value {
    let encodings: Map<String, Value> = Channel::ALL
        .into_iter()
        .map(|c| (c.name().to_owned(), channel_schema(c)))
        .collect();

    json!({
        "$schema": "http://json-schema.org/draft-04/schema#",
        "type": "object",
        "required": ["marktype", "encodings"],
        "additionalProperties": false,
        "properties": {
            "marktype": {
                "type": "string",
                "enum": MarkType::ALL.map(MarkType::name),
            },
            "encodings": {
                "type": "object",
                "additionalProperties": false,
                "properties": encodings,
            },
            "config": config_schema(),
        }
    })
}

fn channel_schema(channel: Channel) -> Value {
    let types: Vec<&str> = channel
        .supported_types()
        .iter()
        .map(|t| t.code())
        .collect();

    let mut properties = json!({
        "name": {"type": "string"},
        "type": {"type": "string", "enum": types},
        "timeUnit": {
            "type": "string",
            "enum": TimeUnit::ALL.map(TimeUnit::name),
        },
        "bin": {
            "type": ["boolean", "object"],
            "default": false,
            "properties": {
                "maxbins": {"type": "integer", "minimum": 2, "default": DEFAULT_MAX_BINS}
            }
        },
    });
    if channel.has_quantitative_scale() {
        properties["scale"] = json!({
            "type": "object",
            "properties": {
                "type": {
                    "type": "string",
                    "enum": ScaleType::QUANTITATIVE.map(ScaleType::name),
                    "default": ScaleType::Linear.name(),
                },
                "zero": {"type": "boolean", "default": true},
            }
        });
    }
    if channel.has_axis() {
        properties["axis"] = json!({
            "type": "object",
            "properties": {
                "shortTimeNames": {"type": "boolean", "default": false},
                "maxLabelLength": {"type": "integer", "minimum": 0},
                "grid": {"type": "boolean", "default": !channel.is_facet()},
                "title": {"type": "string"},
            }
        });
    }

    json!({
        "type": "object",
        "additionalProperties": false,
        "properties": properties,
    })
}

fn config_schema() -> Value {
    let defaults = GrammarConfig::default();
    let filter = NullFilter::default();
    let filter_null: Map<String, Value> = FieldType::ALL
        .into_iter()
        .map(|t| {
            let schema = json!({"type": "boolean", "default": filter.filters(t)});
            (t.code().to_owned(), schema)
        })
        .collect();
    let labels = |len: usize| {
        json!({
            "type": "array",
            "minItems": len,
            "items": {"type": "string"},
        })
    };

    json!({
        "type": "object",
        "properties": {
            "width": {"type": "integer", "minimum": 0, "default": defaults.width},
            "height": {"type": "integer", "minimum": 0, "default": defaults.height},
            "timeFormat": {"type": "string", "default": defaults.time_format},
            "numberFormat": {"type": "string", "default": defaults.number_format},
            "timeScaleLabelLength": {
                "type": ["integer", "null"],
                "minimum": 0,
                "default": defaults.time_scale_label_length,
            },
            "dayScaleLabel": labels(7),
            "monthScaleLabel": labels(12),
            "filterNull": {
                "type": "object",
                "properties": filter_null,
            },
        }
    })
}
