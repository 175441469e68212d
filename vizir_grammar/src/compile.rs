// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spec compilation: validation, default resolution, and per-encoding metadata.
//!
//! Flow:
//! 1. the raw spec is validated against [`spec_schema`] (violations are collected),
//! 2. it is resolved as `merge(instantiate(schema), spec)`,
//! 3. every encoded channel of the resolved spec gets an [`EncodingMetadata`].
//!
//! Channel derivations are independent of each other and read only their own
//! definition plus the shared statistics and config.

use core::fmt;
use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use vizir_schema::{Draft4Validator, SpecValidator, ValidationError, instantiate, merge, subtract};

use crate::cardinality::field_cardinality;
use crate::config::GrammarConfig;
use crate::encoding::{EncodingDef, ScaleType};
use crate::format::{TimeFormatter, UtcTimeFormatter};
use crate::schema::spec_schema;
use crate::stats::FieldStatistics;
use crate::time::{self, LabelTemplate};
use crate::types::{Channel, FieldType, MarkType};
use crate::Result;

/// Rendering metadata derived for one encoded channel.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodingMetadata {
    /// The channel.
    pub channel: Channel,
    /// The declared field type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Distinct values after binning/bucketing; `None` when unknown or unbounded.
    pub cardinality: Option<u64>,
    /// Whether the field is drawn with a discrete scale.
    pub ordinal: bool,
    /// Scale type to build.
    pub scale_type: ScaleType,
    /// Explicit scale domain for bucketed temporal fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_domain: Option<Vec<u32>>,
    /// Upper bound on temporal label length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_label_length: Option<usize>,
    /// Custom labels for weekday/month buckets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_range: Option<Vec<String>>,
    /// Named axis label template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_template: Option<LabelTemplate>,
}

impl EncodingMetadata {
    /// Derives metadata for `def` encoded on `channel`.
    ///
    /// Fails only if the label-length fallback cannot format with
    /// `config.time_format`.
    pub fn derive(
        channel: Channel,
        def: &EncodingDef,
        stats: &FieldStatistics,
        config: &GrammarConfig,
        formatter: &dyn TimeFormatter,
    ) -> Result<Self> {
        let temporal = def.is_type(FieldType::Temporal);
        let unit = def.time_unit;

        let max_label_length = if temporal {
            let len = time::max_label_length(unit, &def.axis, config, formatter)?;
            Some(def.axis.max_label_length.map_or(len, |cap| len.min(cap)))
        } else {
            None
        };

        Ok(Self {
            channel,
            field_type: def.field_type,
            cardinality: field_cardinality(def, stats, &config.filter_null),
            ordinal: def.is_ordinal_scale(),
            scale_type: infer_scale_type(channel, def),
            scale_domain: temporal.then(|| time::scale_domain(unit, channel)).flatten(),
            max_label_length,
            label_range: temporal
                .then(|| time::custom_label_range(unit, config))
                .flatten(),
            label_template: temporal.then(|| time::label_template(unit)).flatten(),
        })
    }
}

/// Scale type for `def` on `channel`.
///
/// Nominal and ordinal fields are ordinal. Temporal fields follow
/// [`time::scale_type`] when bucketed and use a time scale otherwise. Binned
/// quantitative fields are ordinal on categorical channels and linear elsewhere;
/// other quantitative fields use their configured `scale.type` (linear if unset).
pub fn infer_scale_type(channel: Channel, def: &EncodingDef) -> ScaleType {
    match def.field_type {
        FieldType::Nominal | FieldType::Ordinal => ScaleType::Ordinal,
        FieldType::Temporal if def.time_unit.is_some() => time::scale_type(def.time_unit, channel),
        FieldType::Temporal => ScaleType::Time,
        FieldType::Quantitative if def.bin.max_bins().is_some() => {
            if channel.is_facet() || channel == Channel::Shape {
                ScaleType::Ordinal
            } else {
                ScaleType::Linear
            }
        }
        FieldType::Quantitative => def.scale.scale_type.unwrap_or(ScaleType::Linear),
    }
}

/// The result of compiling a spec.
#[derive(Clone, Debug, PartialEq)]
pub struct Compiled {
    /// The spec with every schema default filled in.
    pub spec: Value,
    /// The resolved mark type, if valid.
    pub mark: Option<MarkType>,
    /// The resolved renderer config.
    pub config: GrammarConfig,
    /// Schema violations of the input spec; empty when valid.
    pub errors: Vec<ValidationError>,
    /// Metadata for every encoded channel.
    pub encodings: BTreeMap<Channel, EncodingMetadata>,
}

impl Compiled {
    /// Returns `true` if the input spec passed validation.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Compiles partial specs against the canonical schema.
///
/// The schema and its instantiated defaults are built once per compiler.
pub struct Compiler {
    schema: Value,
    defaults: Value,
    validator: Box<dyn SpecValidator + Send + Sync>,
    formatter: Box<dyn TimeFormatter + Send + Sync>,
}

impl fmt::Debug for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compiler")
            .field("schema", &self.schema)
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    /// Creates a compiler using [`Draft4Validator`] and [`UtcTimeFormatter`].
    pub fn new() -> Self {
        let schema = spec_schema();
        let defaults = instantiate(&schema);
        Self {
            schema,
            defaults,
            validator: Box::new(Draft4Validator),
            formatter: Box::new(UtcTimeFormatter),
        }
    }

    /// Replaces the validator.
    pub fn with_validator(mut self, validator: impl SpecValidator + Send + Sync + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    /// Replaces the time formatter used for label-length inference.
    pub fn with_time_formatter(
        mut self,
        formatter: impl TimeFormatter + Send + Sync + 'static,
    ) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// The schema specs are validated and resolved against.
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// The schema's instantiated defaults.
    pub fn defaults(&self) -> &Value {
        &self.defaults
    }

    /// Validates `spec` against the schema.
    pub fn validate(&self, spec: &Value) -> Vec<ValidationError> {
        self.validator.validate(spec, &self.schema)
    }

    /// Overlays `spec` on the schema defaults.
    pub fn resolve(&self, spec: &Value) -> Value {
        merge(&self.defaults, spec)
    }

    /// Strips schema defaults from a resolved spec, recovering the authored overrides.
    pub fn minimize(&self, resolved: &Value) -> Value {
        subtract(resolved, &self.defaults)
    }

    /// Validates, resolves, and derives metadata for every encoded channel.
    ///
    /// Validation failures do not stop compilation. Channels whose resolved
    /// definition has no `type` carry only defaults and are skipped, as are
    /// unknown channel names and definitions that cannot be read. A `config`
    /// that cannot be read is replaced by [`GrammarConfig::default`]. In each
    /// case the cause is already listed in [`Compiled::errors`].
    ///
    /// Only a time format that cannot be applied to a temporal channel fails.
    pub fn compile(&self, spec: &Value, stats: &FieldStatistics) -> Result<Compiled> {
        let errors = self.validate(spec);
        for error in &errors {
            tracing::warn!(%error, "spec does not match schema");
        }

        let resolved = self.resolve(spec);
        let mark = resolved
            .get("marktype")
            .and_then(|m| serde_json::from_value(m.clone()).ok());
        let config = match resolved.get("config") {
            Some(config) => serde_json::from_value(config.clone()).unwrap_or_else(|error| {
                tracing::warn!(%error, "malformed config, using defaults");
                GrammarConfig::default()
            }),
            None => GrammarConfig::default(),
        };

        let mut encodings = BTreeMap::new();
        let channels = resolved.get("encodings").and_then(Value::as_object);
        for (key, raw) in channels.into_iter().flatten() {
            let Some(channel) = Channel::from_name(key) else {
                tracing::warn!(channel = %key, "ignoring unknown channel");
                continue;
            };
            if raw.get("type").is_none() {
                tracing::trace!(%channel, "channel not encoded");
                continue;
            }
            let def: EncodingDef = match serde_json::from_value(raw.clone()) {
                Ok(def) => def,
                Err(error) => {
                    tracing::warn!(%channel, %error, "skipping malformed encoding");
                    continue;
                }
            };
            let metadata =
                EncodingMetadata::derive(channel, &def, stats, &config, &*self.formatter)?;
            tracing::debug!(
                %channel,
                cardinality = ?metadata.cardinality,
                scale = metadata.scale_type.name(),
                "derived encoding metadata"
            );
            encodings.insert(channel, metadata);
        }

        Ok(Compiled {
            spec: resolved,
            mark,
            config,
            errors,
            encodings,
        })
    }
}

/// Compiles `spec` with a default [`Compiler`].
pub fn compile(spec: &Value, stats: &FieldStatistics) -> Result<Compiled> {
    Compiler::new().compile(spec, stats)
}
