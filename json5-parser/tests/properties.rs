// SPDX-License-Identifier: Apache-2.0

//! Property tests: strict JSON is JSON5, and decoding is stable.

mod common;

use std::collections::BTreeMap;

use common::{from_json, to_json};
use proptest::prelude::*;

fn json_object(members: BTreeMap<String, serde_json::Value>) -> serde_json::Value {
    serde_json::Value::Object(members.into_iter().collect())
}

fn json_strategy() -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::Bool),
        any::<i64>().prop_map(serde_json::Value::from),
        any::<f64>()
            .prop_filter("JSON numbers are finite", |n| n.is_finite())
            .prop_map(serde_json::Value::from),
        any::<String>().prop_map(serde_json::Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(serde_json::Value::Array),
            prop::collection::btree_map(any::<String>(), inner, 0..6).prop_map(json_object),
        ]
    })
}

proptest! {
    #[test]
    fn test_compact_json_decodes_to_same_tree(json in json_strategy()) {
        let text = serde_json::to_string(&json).unwrap();
        let value = json5_parser::parse(&text).unwrap();
        prop_assert_eq!(value, from_json(&json));
    }

    #[test]
    fn test_pretty_json_decodes_to_same_tree(json in json_strategy()) {
        let text = serde_json::to_string_pretty(&json).unwrap();
        let value = json5_parser::parse(&text).unwrap();
        prop_assert_eq!(value, from_json(&json));
    }

    #[test]
    fn test_decode_encode_decode_is_stable(json in json_strategy()) {
        let first = json5_parser::parse(&serde_json::to_string(&json).unwrap()).unwrap();
        let canonical = serde_json::to_string(&to_json(&first).unwrap()).unwrap();
        let second = json5_parser::parse(&canonical).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_arbitrary_input_never_panics(input in any::<String>()) {
        let _ = json5_parser::parse(&input);
    }

    #[test]
    fn test_tokens_cover_input_in_order(input in "[\\[\\]{}:, a-z0-9'\"./*+-]{0,40}") {
        if let Ok(tokens) = json5_parser::tokenize_with_comments(&input) {
            let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
            let increasing = positions.windows(2).all(|w| w[0] < w[1]);
            prop_assert!(increasing);
            prop_assert_eq!(tokens.last().map(|t| t.position), Some(input.len()));
        }
    }
}
