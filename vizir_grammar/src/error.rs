// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Canonical result for this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while deriving metadata from a resolved spec.
///
/// Schema violations are not errors; they are collected in
/// [`Compiled::errors`](crate::Compiled::errors).
#[derive(Debug, Error)]
pub enum Error {
    /// A time format pattern could not be applied.
    #[error("invalid time format pattern `{0}`")]
    TimeFormat(String),

    /// A timestamp is outside the representable range.
    #[error("timestamp {0} is out of range")]
    Timestamp(i64),
}
