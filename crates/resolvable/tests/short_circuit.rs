// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_graphql_parser::{parse_query, types::DocumentOperations};
use resolvable::{
    FieldResolver, ResolvableOptions, ResolverInfo, ResolverOutput, SelectionCollector,
    field_arguments, resolvable, resolver_fn,
};
use serde_json::{Value, json};
use test_log::test;

/// Resolver context shared by the resolvers of a request: a stand-in for a user store.
struct Users {
    emails: HashMap<i64, String>,
    lookups: AtomicUsize,
}

impl Users {
    fn new() -> Self {
        Self {
            emails: HashMap::from([(1, "ann@example.com".to_string())]),
            lookups: AtomicUsize::new(0),
        }
    }
}

/// Parse `query` and return the [`ResolverInfo`] of its only top-level field.
fn root_field_info(query: &str) -> ResolverInfo {
    let document = parse_query(query).unwrap();
    let DocumentOperations::Single(operation) = &document.operations else {
        panic!("Expected a single operation");
    };

    SelectionCollector::new(&document.fragments)
        .operation_fields(operation)
        .unwrap()
        .remove(0)
}

fn user_resolver() -> impl FieldResolver<Users, Error = String> {
    resolver_fn(
        |parent: Option<&Value>, _args: &Value, users: &Users, info: &ResolverInfo| {
            users.lookups.fetch_add(1, Ordering::SeqCst);

            let email = parent
                .and_then(|parent| parent.get(info.field_name.as_str()))
                .and_then(|user| user.get("id"))
                .and_then(Value::as_i64)
                .and_then(|id| users.emails.get(&id).cloned());

            ResolverOutput::pending(async move {
                match email {
                    Some(email) => Ok(json!({ "email": email })),
                    None => Err("unknown user".to_string()),
                }
            })
        },
    )
}

#[test(tokio::test)]
async fn serves_user_from_parent() {
    let wrapped = resolvable(user_resolver(), ResolvableOptions::default());
    let users = Users::new();

    let parent = json!({"user": {"id": 1, "name": "Ann"}});
    let info = root_field_info("{ user { id name } }");

    let output = wrapped.resolve(Some(&parent), &json!({}), &users, &info).await;

    assert_eq!(output, Ok(json!({"id": 1, "name": "Ann"})));
    assert_eq!(users.lookups.load(Ordering::SeqCst), 0);
}

#[test(tokio::test)]
async fn resolves_missing_email() {
    let wrapped = resolvable(user_resolver(), ResolvableOptions::default());
    let users = Users::new();

    let parent = json!({"user": {"id": 1, "name": "Ann"}});
    let info = root_field_info(
        r#"
        query {
            user { ...userFields }
        }

        fragment userFields on User {
            id
            email
        }
        "#,
    );

    let output = wrapped.resolve(Some(&parent), &json!({}), &users, &info).await;

    assert_eq!(
        output,
        Ok(json!({"id": 1, "name": "Ann", "email": "ann@example.com"}))
    );
    assert_eq!(users.lookups.load(Ordering::SeqCst), 1);
}

#[test(tokio::test)]
async fn resolver_failure_surfaces() {
    let wrapped = resolvable(user_resolver(), ResolvableOptions::default());
    let users = Users::new();

    let parent = json!({"user": {"id": 2}});
    let info = root_field_info("{ user { email } }");

    let output = wrapped.resolve(Some(&parent), &json!({}), &users, &info).await;

    assert_eq!(output, Err("unknown user".to_string()));
}

#[test(tokio::test)]
async fn passes_lists_through() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let resolver = resolver_fn(
        move |_parent: Option<&Value>, _args: &Value, _context: &(), _info: &ResolverInfo| {
            counter.fetch_add(1, Ordering::SeqCst);
            ResolverOutput::Immediate(Ok::<_, String>(json!([])))
        },
    );
    let wrapped = resolvable(resolver, ResolvableOptions::new().with_return_args(true));

    let parent = json!({"users": [{"id": 1}, {"id": 2}]});
    let info = root_field_info("{ users(first: 2) { id } }");

    let output = wrapped
        .resolve(Some(&parent), &json!({"first": 2}), &(), &info)
        .await;

    assert_eq!(output, Ok(json!([{"id": 1}, {"id": 2}])));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test(tokio::test)]
async fn returns_arguments_from_query() {
    let resolver = resolver_fn(
        |_parent: Option<&Value>, _args: &Value, _context: &(), _info: &ResolverInfo| {
            ResolverOutput::Immediate(Ok::<_, String>(json!({"total": 0})))
        },
    );
    let options = ResolvableOptions::from_json(r#"{"whitelist": "query", "returnArgs": true}"#)
        .unwrap();
    let wrapped = resolvable(resolver, options);

    let document = parse_query(r#"query($term: String) { search(query: $term) { query } }"#)
        .unwrap();
    let DocumentOperations::Single(operation) = &document.operations else {
        panic!("Expected a single operation");
    };
    let async_graphql_parser::types::Selection::Field(field) =
        &operation.node.selection_set.node.items[0].node
    else {
        panic!("Expected a field");
    };

    let variables = HashMap::from([(
        async_graphql_value::Name::new("term"),
        async_graphql_value::ConstValue::String("rust".to_string()),
    )]);
    let args = field_arguments(field, &variables)
        .unwrap()
        .into_json()
        .unwrap();
    let info = SelectionCollector::new(&document.fragments)
        .field_info(field)
        .unwrap();

    let output = wrapped.resolve(Some(&json!({})), &args, &(), &info).await;

    assert_eq!(output, Ok(json!({"query": "rust"})));
}
