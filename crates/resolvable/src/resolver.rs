// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::marker::PhantomData;

use crate::{info::ResolverInfo, output::ResolverOutput, value::FieldValue};

/// Resolves a single field, given:
/// - `parent`: the value of the enclosing object, if any
/// - `args`: the field's arguments, as an object
/// - `context`: whatever the executor threads through resolution
/// - `info`: the field's name and selection
pub trait FieldResolver<C, V = serde_json::Value>: Send + Sync
where
    V: FieldValue,
{
    type Error: Send + 'static;

    fn resolve<'a>(
        &'a self,
        parent: Option<&'a V>,
        args: &'a V,
        context: &'a C,
        info: &'a ResolverInfo,
    ) -> ResolverOutput<'a, V, Self::Error>;
}

/// A [`FieldResolver`] backed by a closure. See [`resolver_fn`].
pub struct ResolverFn<F, C> {
    f: F,
    _context: PhantomData<fn(&C)>,
}

/// Turn a closure into a [`FieldResolver`].
///
/// The closure receives the same arguments as [`FieldResolver::resolve`]. A pending output must
/// own whatever it needs from them.
pub fn resolver_fn<F, C, V, E>(f: F) -> ResolverFn<F, C>
where
    F: Fn(Option<&V>, &V, &C, &ResolverInfo) -> ResolverOutput<'static, V, E> + Send + Sync,
    V: FieldValue,
{
    ResolverFn {
        f,
        _context: PhantomData,
    }
}

impl<F, C, V, E> FieldResolver<C, V> for ResolverFn<F, C>
where
    F: Fn(Option<&V>, &V, &C, &ResolverInfo) -> ResolverOutput<'static, V, E> + Send + Sync,
    V: FieldValue,
    E: Send + 'static,
{
    type Error = E;

    fn resolve<'a>(
        &'a self,
        parent: Option<&'a V>,
        args: &'a V,
        context: &'a C,
        info: &'a ResolverInfo,
    ) -> ResolverOutput<'a, V, E> {
        (self.f)(parent, args, context, info)
    }
}

impl<F, C> std::fmt::Debug for ResolverFn<F, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverFn").finish_non_exhaustive()
    }
}
