// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::future::{Future, IntoFuture};

use futures::{
    FutureExt,
    future::{BoxFuture, Either, Ready, ready},
};

/// The outcome of invoking a field resolver.
///
/// A resolver may have its value at hand (`Immediate`) or may need to wait for it (`Pending`).
/// Either way, the output can be `.await`ed, so callers need not care which one they got.
pub enum ResolverOutput<'a, V, E> {
    Immediate(Result<V, E>),
    Pending(BoxFuture<'a, Result<V, E>>),
}

impl<'a, V, E> ResolverOutput<'a, V, E> {
    pub fn pending(future: impl Future<Output = Result<V, E>> + Send + 'a) -> Self {
        ResolverOutput::Pending(future.boxed())
    }

    pub fn is_immediate(&self) -> bool {
        matches!(self, ResolverOutput::Immediate(_))
    }

    /// Transform the eventual successful value, keeping an immediate output immediate.
    pub fn map<U>(self, f: impl FnOnce(V) -> U + Send + 'a) -> ResolverOutput<'a, U, E>
    where
        V: 'a,
        E: 'a,
        U: 'a,
    {
        match self {
            ResolverOutput::Immediate(result) => ResolverOutput::Immediate(result.map(f)),
            ResolverOutput::Pending(future) => {
                ResolverOutput::Pending(future.map(|result| result.map(f)).boxed())
            }
        }
    }
}

impl<V, E> From<Result<V, E>> for ResolverOutput<'_, V, E> {
    fn from(result: Result<V, E>) -> Self {
        ResolverOutput::Immediate(result)
    }
}

impl<'a, V, E> IntoFuture for ResolverOutput<'a, V, E> {
    type Output = Result<V, E>;
    type IntoFuture = Either<Ready<Result<V, E>>, BoxFuture<'a, Result<V, E>>>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            ResolverOutput::Immediate(result) => Either::Left(ready(result)),
            ResolverOutput::Pending(future) => Either::Right(future),
        }
    }
}

impl<V, E> std::fmt::Debug for ResolverOutput<'_, V, E>
where
    V: std::fmt::Debug,
    E: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolverOutput::Immediate(result) => f.debug_tuple("Immediate").field(result).finish(),
            ResolverOutput::Pending(_) => f.write_str("Pending"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn immediate_output_awaits_to_its_value() {
        let output: ResolverOutput<'_, i32, String> = Ok(42).into();

        assert!(output.is_immediate());
        assert_eq!(output.await, Ok(42));
    }

    #[tokio::test]
    async fn pending_output_awaits_to_its_value() {
        let output: ResolverOutput<'_, i32, String> = ResolverOutput::pending(async {
            tokio::task::yield_now().await;
            Err("unavailable".to_string())
        });

        assert!(!output.is_immediate());
        assert_eq!(output.await, Err("unavailable".to_string()));
    }

    #[tokio::test]
    async fn map_keeps_the_branch() {
        let immediate: ResolverOutput<'_, i32, String> = Ok(20).into();
        let mapped = immediate.map(|value| value + 1);
        assert!(mapped.is_immediate());
        assert_eq!(mapped.await, Ok(21));

        let pending: ResolverOutput<'_, i32, String> = ResolverOutput::pending(async { Ok(40) });
        let mapped = pending.map(|value| value + 2);
        assert!(!mapped.is_immediate());
        assert_eq!(mapped.await, Ok(42));
    }
}
