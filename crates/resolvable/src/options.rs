// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::Deserialize;
use thiserror::Error;

/// Options for [`crate::resolvable`].
///
/// Deserializes from `{ "whitelist": ..., "returnArgs": ... }`, where both keys are optional and
/// the whitelist may be a single field name or a list of them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolvableOptions {
    /// Fields considered available even when the parent value lacks them.
    pub whitelist: Whitelist,
    /// Merge the field arguments into a (non-list) result, underneath the parent's fields.
    pub return_args: bool,
}

#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Invalid resolvable options: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl ResolvableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(options: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(options)?)
    }

    pub fn with_whitelist(mut self, whitelist: impl Into<Whitelist>) -> Self {
        self.whitelist = whitelist.into();
        self
    }

    pub fn with_return_args(mut self, return_args: bool) -> Self {
        self.return_args = return_args;
        self
    }
}

/// Field names treated as already satisfied, in the order given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "WhitelistRepr")]
pub struct Whitelist(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum WhitelistRepr {
    Single(String),
    Multiple(Vec<String>),
}

impl From<WhitelistRepr> for Whitelist {
    fn from(repr: WhitelistRepr) -> Self {
        match repr {
            WhitelistRepr::Single(field) => Whitelist(vec![field]),
            WhitelistRepr::Multiple(fields) => Whitelist(fields),
        }
    }
}

impl Whitelist {
    /// Parse a comma-separated list of field names (for example, from an env variable). Blank
    /// entries are skipped.
    pub fn from_comma_separated(fields: &str) -> Self {
        fields
            .split(',')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Whitelist {
    fn from(field: &str) -> Self {
        Whitelist(vec![field.to_string()])
    }
}

impl From<String> for Whitelist {
    fn from(field: String) -> Self {
        Whitelist(vec![field])
    }
}

impl From<Vec<String>> for Whitelist {
    fn from(fields: Vec<String>) -> Self {
        Whitelist(fields)
    }
}

impl<const N: usize> From<[&str; N]> for Whitelist {
    fn from(fields: [&str; N]) -> Self {
        fields.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Whitelist {
    fn from_iter<T: IntoIterator<Item = S>>(fields: T) -> Self {
        Whitelist(fields.into_iter().map(Into::into).collect())
    }
}
