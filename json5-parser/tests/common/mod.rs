// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code)]

use json5_parser::{Map, Value};

/// Converts a `serde_json` tree into a [`Value`]; every number becomes `f64`.
pub fn from_json(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => Value::Array(items.iter().map(from_json).collect()),
        serde_json::Value::Object(members) => Value::Object(
            members
                .iter()
                .map(|(key, value)| (key.clone(), from_json(value)))
                .collect::<Map>(),
        ),
    }
}

/// Converts a [`Value`] into `serde_json`, or `None` if it holds a
/// non-finite number, which JSON cannot represent.
pub fn to_json(value: &Value) -> Option<serde_json::Value> {
    Some(match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => serde_json::Value::Number(serde_json::Number::from_f64(*n)?),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(to_json).collect::<Option<_>>()?)
        }
        Value::Object(members) => serde_json::Value::Object(
            members
                .iter()
                .map(|(key, value)| Some((key.clone(), to_json(value)?)))
                .collect::<Option<_>>()?,
        ),
    })
}

/// Parses with this crate and panics with the error message on failure.
pub fn parse_ok(input: &str) -> Value {
    match json5_parser::parse(input) {
        Ok(value) => value,
        Err(e) => panic!("{input:?} failed to parse: {e}"),
    }
}
