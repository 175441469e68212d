// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural diff of a tree against a baseline.

use alloc::string::String;

use serde_json::{Map, Value};

/// Returns the parts of `a` that differ from `b`.
///
/// For each key of `a`:
/// - values deep-equal to `b`'s are dropped,
/// - values absent from `b` are kept verbatim,
/// - two mappings are diffed recursively (a diff that comes out empty is dropped),
/// - any other mismatch (e.g. an array against a scalar) keeps `a`'s value verbatim.
///
/// When `a` and `b` are not both mappings, `a` is returned as is.
pub fn subtract(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Object(a), Value::Object(b)) => Value::Object(subtract_maps(a, b)),
        (a, _) => a.clone(),
    }
}

fn subtract_maps(a: &Map<String, Value>, b: &Map<String, Value>) -> Map<String, Value> {
    let mut changes = Map::new();
    for (key, av) in a {
        match (av, b.get(key)) {
            (_, Some(bv)) if av == bv => {}
            (Value::Object(ao), Some(Value::Object(bo))) => {
                let diff = subtract_maps(ao, bo);
                if !diff.is_empty() {
                    changes.insert(key.clone(), Value::Object(diff));
                }
            }
            _ => {
                changes.insert(key.clone(), av.clone());
            }
        }
    }
    changes
}
