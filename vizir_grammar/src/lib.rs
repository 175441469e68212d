// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalization and inference for a Vega-Lite-like visualization grammar.
//!
//! Users author intentionally partial specs: a mark, an `encodings` mapping from
//! channels to fields, and renderer `config`. This crate:
//! - **resolves** a spec against the canonical schema ([`spec_schema`]), filling in
//!   every declared default, and can **minimize** it back to the authored overrides;
//! - estimates each encoded field's **cardinality** from caller-supplied
//!   [`FieldStatistics`] (see [`cardinality`]);
//! - infers **temporal** scale and label metadata from a field's [`TimeUnit`]
//!   (see [`time`]).
//!
//! [`Compiler::compile`] ties these together and produces one [`EncodingMetadata`]
//! per encoded channel for a renderer to consume. Data loading and rendering are out
//! of scope.
//!
//! ```
//! use serde_json::json;
//! use vizir_grammar::{Channel, FieldStatistics, FieldStats, ScaleType, compile};
//!
//! let spec = json!({
//!     "marktype": "bar",
//!     "encodings": {
//!         "x": {"name": "date", "type": "T", "timeUnit": "month"},
//!         "y": {"name": "price", "type": "Q"}
//!     }
//! });
//! let stats = FieldStatistics::new()
//!     .with("date", FieldStats::distinct(365))
//!     .with("price", FieldStats::distinct(90));
//!
//! let compiled = compile(&spec, &stats).unwrap();
//! assert!(compiled.is_valid());
//! let x = &compiled.encodings[&Channel::X];
//! assert_eq!(x.cardinality, Some(12));
//! assert_eq!(x.scale_type, ScaleType::Ordinal);
//! assert_eq!(compiled.encodings[&Channel::Y].cardinality, Some(90));
//! ```

mod binning;
pub mod cardinality;
mod compile;
mod config;
mod encoding;
mod error;
mod format;
mod schema;
mod stats;
pub mod time;
mod types;

pub use binning::{Bins, bins};
pub use compile::{Compiled, Compiler, EncodingMetadata, compile, infer_scale_type};
pub use config::GrammarConfig;
pub use encoding::{
    AxisConfig, Bin, BinParams, DEFAULT_MAX_BINS, EncodingDef, ScaleConfig, ScaleType,
};
pub use error::{Error, Result};
pub use format::{LONGEST_NAMES_TIMESTAMP, TimeFormatter, UtcTimeFormatter};
pub use schema::spec_schema;
pub use stats::{FieldStatistics, FieldStats, NullFilter};
pub use time::{LabelTemplate, TimeUnit};
pub use types::{Channel, FieldType, MarkType};
pub use vizir_schema::ValidationError;
