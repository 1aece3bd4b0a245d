// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use tracing::{debug, trace};

use crate::{
    decision::{AvailableFieldSet, Decision, QueriedFieldSet},
    info::ResolverInfo,
    merge::{delegated_result, fallback_result},
    options::ResolvableOptions,
    output::ResolverOutput,
    resolver::FieldResolver,
    value::FieldValue,
};

/// Wrap `resolver` so that it runs only when the parent can't already serve the query.
///
/// The returned resolver skips `resolver` when every subfield selected for the field is present
/// on the parent's value for the field (`parent[info.field_name]`) or listed in the whitelist. It
/// then serves that value directly: a list unchanged, an object as a copy (underneath the
/// arguments when `return_args` is set). Otherwise it invokes `resolver` and overlays its result
/// on that same copy, unless the resolver returned a list.
///
/// Errors from `resolver` are passed through untouched.
pub fn resolvable<R>(resolver: R, options: ResolvableOptions) -> Resolvable<R> {
    Resolvable { resolver, options }
}

#[derive(Debug)]
pub struct Resolvable<R> {
    resolver: R,
    options: ResolvableOptions,
}

impl<R> Resolvable<R> {
    pub fn options(&self) -> &ResolvableOptions {
        &self.options
    }

    pub fn into_inner(self) -> R {
        self.resolver
    }

    /// Whether a call with this parent and selection would invoke the wrapped resolver.
    pub fn decide<V: FieldValue>(&self, parent: Option<&V>, info: &ResolverInfo) -> Decision {
        self.decide_for_value(parent_value(parent, info), info)
    }

    fn decide_for_value<V: FieldValue>(
        &self,
        parent_value: Option<&V>,
        info: &ResolverInfo,
    ) -> Decision {
        let available = AvailableFieldSet::collect(parent_value, &self.options.whitelist);

        Decision::decide(&available, &QueriedFieldSet::from_info(info))
    }
}

fn parent_value<'a, V: FieldValue>(parent: Option<&'a V>, info: &ResolverInfo) -> Option<&'a V> {
    parent.and_then(|parent| parent.get_field(&info.field_name))
}

impl<C, V, R> FieldResolver<C, V> for Resolvable<R>
where
    R: FieldResolver<C, V>,
    V: FieldValue,
{
    type Error = R::Error;

    fn resolve<'a>(
        &'a self,
        parent: Option<&'a V>,
        args: &'a V,
        context: &'a C,
        info: &'a ResolverInfo,
    ) -> ResolverOutput<'a, V, R::Error> {
        let parent_value = parent_value(parent, info);
        let fallback = fallback_result(parent_value, args, self.options.return_args);

        match self.decide_for_value(parent_value, info) {
            Decision::ShortCircuit => {
                trace!(field = %info.field_name, "Serving field from parent value");
                ResolverOutput::Immediate(Ok(fallback))
            }
            Decision::Delegate => {
                debug!(
                    field = %info.field_name,
                    queried = ?QueriedFieldSet::from_info(info),
                    "Invoking resolver for field"
                );
                self.resolver
                    .resolve(parent, args, context, info)
                    .map(move |resolved| delegated_result(fallback, resolved))
            }
        }
    }
}
