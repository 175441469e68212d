// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building default instances from a schema.

use alloc::string::String;

use serde_json::{Map, Value};

/// Produces the minimal object populated with every default `schema` declares.
///
/// A node with a `default` yields that value (a deep copy). Otherwise, a node with
/// `properties` yields a mapping of the instantiated properties; properties with no
/// default and no instantiable substructure are omitted, even when `required`.
///
/// The root always yields a mapping when it declares `properties`, possibly empty.
/// Any other root without a default yields [`Value::Null`].
pub fn instantiate(schema: &Value) -> Value {
    if schema.get("default").is_none()
        && let Some(properties) = schema.get("properties").and_then(Value::as_object)
    {
        return Value::Object(instantiate_properties(properties));
    }
    instantiate_node(schema).unwrap_or(Value::Null)
}

fn instantiate_node(schema: &Value) -> Option<Value> {
    if let Some(default) = schema.get("default") {
        return Some(default.clone());
    }
    let properties = schema.get("properties").and_then(Value::as_object)?;
    let instance = instantiate_properties(properties);
    // Nested objects without any defaults are left out entirely.
    (!instance.is_empty()).then_some(Value::Object(instance))
}

fn instantiate_properties(properties: &Map<String, Value>) -> Map<String, Value> {
    properties
        .iter()
        .filter_map(|(name, sub)| instantiate_node(sub).map(|v| (name.clone(), v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn required_property_without_default_is_omitted() {
        let schema = json!({
            "type": "object",
            "required": ["fooBaz"],
            "properties": {
                "fooBar": {"type": "string", "default": "baz"},
                "fooBaz": {"type": "string", "enum": ["a", "b"]}
            }
        });
        assert_eq!(instantiate(&schema), json!({"fooBar": "baz"}));
    }

    #[test]
    fn nested_defaults_are_collected() {
        let schema = json!({
            "type": "object",
            "properties": {
                "config": {
                    "type": "object",
                    "properties": {
                        "width": {"type": "integer", "default": 200},
                        "filterNull": {
                            "type": "object",
                            "properties": {
                                "Q": {"type": "boolean", "default": true},
                                "O": {"type": "boolean", "default": false}
                            }
                        },
                        "label": {"type": "string"}
                    }
                },
                "empty": {
                    "type": "object",
                    "properties": {"x": {"type": "number"}}
                },
                "tags": {"type": "array", "items": {"type": "string"}}
            }
        });
        assert_eq!(
            instantiate(&schema),
            json!({"config": {"width": 200, "filterNull": {"Q": true, "O": false}}})
        );
    }

    #[test]
    fn default_takes_precedence_over_properties() {
        let schema = json!({
            "type": ["boolean", "object"],
            "default": false,
            "properties": {"maxbins": {"type": "integer", "default": 15}}
        });
        assert_eq!(instantiate(&schema), json!(false));
        let root = json!({"properties": {"bin": schema}});
        assert_eq!(instantiate(&root), json!({"bin": false}));
    }

    #[test]
    fn object_and_array_defaults_are_copied_verbatim() {
        let schema = json!({
            "properties": {
                "range": {"type": "array", "default": [1, 2, 3]},
                "padding": {"type": "object", "default": {"top": 5}}
            }
        });
        assert_eq!(
            instantiate(&schema),
            json!({"range": [1, 2, 3], "padding": {"top": 5}})
        );
    }

    #[test]
    fn root_without_defaults_is_an_empty_mapping() {
        let schema = json!({"type": "object", "properties": {"a": {"type": "string"}}});
        assert_eq!(instantiate(&schema), json!({}));
        assert_eq!(instantiate(&json!({"type": "string"})), Value::Null);
    }
}
