// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Right-biased deep merge.

use serde_json::Value;

/// Deep-merges `b` over `a`, returning a new tree.
///
/// Nested mappings are merged key by key. Any other value in `b` (scalars, `null`,
/// and arrays) replaces the corresponding value in `a` entirely; arrays are never
/// concatenated or merged by index.
pub fn merge(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Object(a), Value::Object(b)) => {
            let mut out = a.clone();
            for (key, bv) in b {
                let merged = match out.get(key) {
                    Some(av) => merge(av, bv),
                    None => bv.clone(),
                };
                out.insert(key.clone(), merged);
            }
            Value::Object(out)
        }
        (_, b) => b.clone(),
    }
}
