// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spec validation against a JSON-Schema document.
//!
//! Validation never mutates the spec and never aborts: every violation is
//! collected as a [`ValidationError`] so callers can display them all and decide
//! whether to keep compiling.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use serde_json::Value;
use thiserror::Error;

/// A validator checking a spec against the same schema document used by
/// [`crate::instantiate`].
///
/// An empty result means the spec is valid.
pub trait SpecValidator {
    /// Returns every violation of `schema` found in `spec`.
    fn validate(&self, spec: &Value, schema: &Value) -> Vec<ValidationError>;
}

/// One schema violation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("at `{instance_path}`: {message}")]
pub struct ValidationError {
    /// JSON pointer to the offending value in the spec (`""` is the root).
    pub instance_path: String,
    /// JSON pointer to the violated keyword in the schema.
    pub schema_path: String,
    /// The violated keyword, e.g. `required` or `enum`.
    ///
    /// `$schema` when the schema document itself could not be compiled.
    pub keyword: String,
    /// Human readable description of the violation.
    pub message: String,
}

impl ValidationError {
    fn from_jsonschema(error: &jsonschema::ValidationError<'_>) -> Self {
        let schema_path = error.schema_path.as_str();
        let keyword = schema_path.rsplit('/').next().unwrap_or_default();
        Self {
            instance_path: error.instance_path.as_str().into(),
            schema_path: schema_path.into(),
            keyword: keyword.into(),
            message: error.to_string(),
        }
    }
}

/// Draft-04 validator backed by the `jsonschema` crate.
///
/// Only local references are resolved; the schema is expected to be
/// self-contained.
#[derive(Clone, Copy, Debug, Default)]
pub struct Draft4Validator;

impl SpecValidator for Draft4Validator {
    fn validate(&self, spec: &Value, schema: &Value) -> Vec<ValidationError> {
        let validator = match jsonschema::draft4::new(schema) {
            Ok(validator) => validator,
            Err(error) => {
                tracing::warn!(%error, "schema document is not valid draft-04");
                return vec![ValidationError {
                    instance_path: String::new(),
                    schema_path: error.schema_path.as_str().into(),
                    keyword: "$schema".into(),
                    message: error.to_string(),
                }];
            }
        };
        let errors: Vec<_> = validator
            .iter_errors(spec)
            .map(|error| ValidationError::from_jsonschema(&error))
            .collect();
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "spec failed schema validation");
        }
        errors
    }
}
