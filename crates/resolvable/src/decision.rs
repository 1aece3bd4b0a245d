// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use indexmap::IndexSet;

use crate::{info::ResolverInfo, options::Whitelist, value::FieldValue};

/// Fields that can be served without invoking the resolver: those already present on the parent's
/// value for the field, followed by the whitelisted ones. Each name appears once, at its first
/// occurrence.
#[derive(Debug, Default, PartialEq)]
pub struct AvailableFieldSet<'a>(IndexSet<&'a str>);

impl<'a> AvailableFieldSet<'a> {
    /// For a list, the fields of its first element are taken to be representative of all elements.
    pub fn collect<V: FieldValue>(parent_value: Option<&'a V>, whitelist: &'a Whitelist) -> Self {
        let parent_fields = parent_value
            .map(|value| match value.as_list() {
                Some(elements) => elements
                    .first()
                    .map(|first| first.field_names())
                    .unwrap_or_default(),
                None => value.field_names(),
            })
            .unwrap_or_default();

        AvailableFieldSet(parent_fields.into_iter().chain(whitelist.iter()).collect())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.0.iter().copied()
    }
}

/// Names of the subfields a query selects for a field.
#[derive(Debug, PartialEq)]
pub struct QueriedFieldSet<'a>(Vec<&'a str>);

impl<'a> QueriedFieldSet<'a> {
    pub fn from_info(info: &'a ResolverInfo) -> Self {
        QueriedFieldSet(info.queried_fields().collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.0.iter().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Every queried field is available; the resolver need not run.
    ShortCircuit,
    /// At least one queried field is missing; the resolver must run.
    Delegate,
}

impl Decision {
    pub fn decide(available: &AvailableFieldSet, queried: &QueriedFieldSet) -> Self {
        if queried.iter().all(|field| available.contains(field)) {
            Decision::ShortCircuit
        } else {
            Decision::Delegate
        }
    }
}
