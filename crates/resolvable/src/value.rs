// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql_value::{ConstValue, Name};
use indexmap::IndexMap;

/// A value produced by (or passed to) a field resolver.
///
/// Exposes the handful of structural queries needed to decide whether a resolver must run: which
/// fields an object carries, whether the value is a list, and how to take an object apart and put
/// it back together. Implemented per concrete value type, so no reflection is involved.
pub trait FieldValue: Clone + Send + Sync + 'static {
    /// The value of the field `name`, if this is an object that has it.
    fn get_field(&self, name: &str) -> Option<&Self>;

    /// The elements, if this is a list.
    fn as_list(&self) -> Option<&[Self]>;

    /// The names of the fields of an object, in their stored order. Scalars, lists and null expose
    /// no fields.
    fn field_names(&self) -> Vec<&str>;

    /// The fields of an object. `None` for anything else.
    fn into_fields(self) -> Option<IndexMap<String, Self>>;

    /// Build an object out of its fields.
    fn from_fields(fields: IndexMap<String, Self>) -> Self;

    fn is_null(&self) -> bool;
}

impl FieldValue for serde_json::Value {
    fn get_field(&self, name: &str) -> Option<&Self> {
        match self {
            serde_json::Value::Object(map) => map.get(name),
            _ => None,
        }
    }

    fn as_list(&self) -> Option<&[Self]> {
        match self {
            serde_json::Value::Array(elements) => Some(elements),
            _ => None,
        }
    }

    fn field_names(&self) -> Vec<&str> {
        match self {
            serde_json::Value::Object(map) => map.keys().map(|key| key.as_str()).collect(),
            _ => vec![],
        }
    }

    fn into_fields(self) -> Option<IndexMap<String, Self>> {
        match self {
            serde_json::Value::Object(map) => Some(map.into_iter().collect()),
            _ => None,
        }
    }

    fn from_fields(fields: IndexMap<String, Self>) -> Self {
        serde_json::Value::Object(fields.into_iter().collect())
    }

    fn is_null(&self) -> bool {
        matches!(self, serde_json::Value::Null)
    }
}

impl FieldValue for ConstValue {
    fn get_field(&self, name: &str) -> Option<&Self> {
        match self {
            ConstValue::Object(map) => map.get(name),
            _ => None,
        }
    }

    fn as_list(&self) -> Option<&[Self]> {
        match self {
            ConstValue::List(elements) => Some(elements),
            _ => None,
        }
    }

    fn field_names(&self) -> Vec<&str> {
        match self {
            ConstValue::Object(map) => map.keys().map(|key| key.as_str()).collect(),
            _ => vec![],
        }
    }

    fn into_fields(self) -> Option<IndexMap<String, Self>> {
        match self {
            ConstValue::Object(map) => Some(
                map.into_iter()
                    .map(|(key, value)| (key.to_string(), value))
                    .collect(),
            ),
            _ => None,
        }
    }

    fn from_fields(fields: IndexMap<String, Self>) -> Self {
        ConstValue::Object(
            fields
                .into_iter()
                .map(|(key, value)| (Name::new(key), value))
                .collect(),
        )
    }

    fn is_null(&self) -> bool {
        matches!(self, ConstValue::Null)
    }
}
