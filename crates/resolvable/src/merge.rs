// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use indexmap::IndexMap;

use crate::value::FieldValue;

/// Shallow-merge the fields of `layers` into a new object. A field present in several layers keeps
/// the position of its first occurrence and the value of its last. Layers that aren't objects
/// contribute nothing.
pub fn merge_fields<V: FieldValue>(layers: impl IntoIterator<Item = V>) -> V {
    let mut merged = IndexMap::new();

    for fields in layers.into_iter().filter_map(V::into_fields) {
        merged.extend(fields);
    }

    V::from_fields(merged)
}

/// The result served when the resolver is skipped.
///
/// A list is passed through as is. Anything else becomes an object made of the arguments (if
/// `return_args`) overlaid with the parent's fields.
pub fn fallback_result<V: FieldValue>(parent_value: Option<&V>, args: &V, return_args: bool) -> V {
    match parent_value {
        Some(value) if value.as_list().is_some() => value.clone(),
        _ => {
            let args = return_args.then(|| args.clone());
            merge_fields(args.into_iter().chain(parent_value.cloned()))
        }
    }
}

/// The result served after the resolver ran: a list as is, otherwise the fallback overlaid with
/// the resolved fields.
pub fn delegated_result<V: FieldValue>(fallback: V, resolved: V) -> V {
    if resolved.as_list().is_some() {
        resolved
    } else {
        merge_fields([fallback, resolved])
    }
}
