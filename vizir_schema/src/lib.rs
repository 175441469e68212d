// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Schema-driven defaulting and diffing of configuration trees.
//!
//! A configuration tree is a [`serde_json::Value`]: scalars, ordered sequences, and
//! string-keyed mappings nested arbitrarily. This crate provides the three tree
//! operations a Vega-Lite-like frontend needs to move between partial and fully
//! resolved specs:
//! - [`instantiate`] builds the minimal object holding every default a JSON-Schema
//!   (draft-04 shaped) declares,
//! - [`merge`] overlays one tree onto another (right-biased, deep), and
//! - [`subtract`] keeps only the parts of a tree that differ from a baseline.
//!
//! These compose: `merge(&instantiate(schema), spec)` resolves a spec, and
//! `subtract(&resolved, &instantiate(schema))` recovers the authored overrides.
//!
//! Validation sits at the boundary behind [`SpecValidator`]; [`Draft4Validator`]
//! delegates to the `jsonschema` crate with draft 04 selected.
//!
//! None of these operations mutate their inputs.

#![no_std]

extern crate alloc;

mod instantiate;
mod merge;
mod subtract;
mod validate;

pub use instantiate::instantiate;
pub use merge::merge;
pub use subtract::subtract;
pub use validate::{Draft4Validator, SpecValidator, ValidationError};
