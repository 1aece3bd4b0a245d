// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Skip field resolvers whose work the parent object has already done.
//!
//! A GraphQL parent resolver often returns more than its own scalar fields. For example, a `post`
//! resolver may already include the post's `author { id name }`. [`resolvable`] wraps the
//! `author` resolver so that it only runs when the query selects something the parent didn't
//! provide.

pub mod decision;
pub mod info;
pub mod merge;
pub mod options;
pub mod value;

mod output;
mod resolvable;
mod resolver;

pub use decision::Decision;
pub use info::{ResolverInfo, SelectionCollector, SelectionError, field_arguments};
pub use options::{OptionsError, ResolvableOptions, Whitelist};
pub use output::ResolverOutput;
pub use resolvable::{Resolvable, resolvable};
pub use resolver::{FieldResolver, ResolverFn, resolver_fn};
pub use value::FieldValue;
