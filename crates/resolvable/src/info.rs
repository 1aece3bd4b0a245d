// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;

use async_graphql_parser::{
    Pos, Positioned,
    types::{Field, FragmentDefinition, OperationDefinition, Selection, SelectionSet},
};
use async_graphql_value::{ConstValue, Name, indexmap::IndexMap};
use serde::Serialize;
use thiserror::Error;

/// What the query executor knows about the field being resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolverInfo {
    pub alias: Option<Name>,
    /// The name of the field (also the key under which the parent may already hold its value).
    pub field_name: Name,
    /// The subfields being selected in this field. Empty for a field without a selection set.
    pub subfields: Vec<ResolverInfo>,
}

impl ResolverInfo {
    pub fn new(field_name: impl AsRef<str>) -> Self {
        Self {
            alias: None,
            field_name: Name::new(field_name),
            subfields: vec![],
        }
    }

    pub fn with_alias(mut self, alias: impl AsRef<str>) -> Self {
        self.alias = Some(Name::new(alias));
        self
    }

    pub fn with_subfields(mut self, subfields: Vec<ResolverInfo>) -> Self {
        self.subfields = subfields;
        self
    }

    /// Select leaf subfields by name.
    pub fn with_subfield_names<S: AsRef<str>>(
        self,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        self.with_subfields(names.into_iter().map(ResolverInfo::new).collect())
    }

    /// Names of the selected subfields (aliases are ignored), in selection order.
    pub fn queried_fields(&self) -> impl Iterator<Item = &str> {
        self.subfields.iter().map(|field| field.field_name.as_str())
    }

    pub fn output_name(&self) -> String {
        self.alias.as_ref().unwrap_or(&self.field_name).to_string()
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum SelectionError {
    #[error("Fragment definition '{0}' not found")]
    FragmentDefinitionNotFound(String, Pos),

    #[error("Fragment '{0}' spreads itself")]
    FragmentCycle(String, Pos),

    #[error("Variable '{0}' not found")]
    VariableNotFound(String, Pos),
}

impl SelectionError {
    pub fn position(&self) -> Pos {
        match self {
            SelectionError::FragmentDefinitionNotFound(_, pos)
            | SelectionError::FragmentCycle(_, pos)
            | SelectionError::VariableNotFound(_, pos) => *pos,
        }
    }
}

/// Builds [`ResolverInfo`]s out of a parsed query.
///
/// Fragments (named or inline) are resolved and inlined, so the subfields of a [`ResolverInfo`]
/// list every field the query asks for at that level.
#[derive(Debug)]
pub struct SelectionCollector<'a> {
    fragment_definitions: &'a HashMap<Name, Positioned<FragmentDefinition>>,
}

impl<'a> SelectionCollector<'a> {
    #[must_use]
    pub fn new(fragment_definitions: &'a HashMap<Name, Positioned<FragmentDefinition>>) -> Self {
        Self {
            fragment_definitions,
        }
    }

    /// The top-level fields of an operation.
    pub fn operation_fields(
        &self,
        operation: &Positioned<OperationDefinition>,
    ) -> Result<Vec<ResolverInfo>, SelectionError> {
        self.selection_set_fields(&operation.node.selection_set, &mut vec![])
    }

    pub fn field_info(&self, field: &Positioned<Field>) -> Result<ResolverInfo, SelectionError> {
        self.field_info_within(field, &mut vec![])
    }

    fn field_info_within(
        &self,
        field: &Positioned<Field>,
        spread_fragments: &mut Vec<Name>,
    ) -> Result<ResolverInfo, SelectionError> {
        let subfields = self.selection_set_fields(&field.node.selection_set, spread_fragments)?;

        Ok(ResolverInfo {
            alias: field.node.alias.as_ref().map(|alias| alias.node.clone()),
            field_name: field.node.name.node.clone(),
            subfields,
        })
    }

    // `spread_fragments` holds the fragments being expanded on the current path, to catch a
    // fragment that (directly or indirectly) spreads itself.
    fn selection_set_fields(
        &self,
        selection_set: &Positioned<SelectionSet>,
        spread_fragments: &mut Vec<Name>,
    ) -> Result<Vec<ResolverInfo>, SelectionError> {
        let mut fields = vec![];

        for selection in &selection_set.node.items {
            match &selection.node {
                Selection::Field(field) => {
                    fields.push(self.field_info_within(field, spread_fragments)?)
                }
                Selection::FragmentSpread(fragment_spread) => {
                    let fragment_name = &fragment_spread.node.fragment_name.node;

                    if spread_fragments.contains(fragment_name) {
                        return Err(SelectionError::FragmentCycle(
                            fragment_name.to_string(),
                            fragment_spread.pos,
                        ));
                    }

                    let fragment_definition = self
                        .fragment_definitions
                        .get(fragment_name)
                        .ok_or_else(|| {
                            SelectionError::FragmentDefinitionNotFound(
                                fragment_name.to_string(),
                                fragment_spread.pos,
                            )
                        })?;

                    spread_fragments.push(fragment_name.clone());
                    let fragment_fields = self.selection_set_fields(
                        &fragment_definition.node.selection_set,
                        spread_fragments,
                    )?;
                    spread_fragments.pop();

                    fields.extend(fragment_fields);
                }
                Selection::InlineFragment(inline_fragment) => fields.extend(
                    self.selection_set_fields(
                        &inline_fragment.node.selection_set,
                        spread_fragments,
                    )?,
                ),
            }
        }

        Ok(fields)
    }
}

/// Evaluate the arguments of a field into an object, substituting variables.
pub fn field_arguments(
    field: &Positioned<Field>,
    variables: &HashMap<Name, ConstValue>,
) -> Result<ConstValue, SelectionError> {
    field
        .node
        .arguments
        .iter()
        .map(|(name, value)| {
            let pos = value.pos;
            value
                .node
                .clone()
                .into_const_with(|variable| {
                    variables.get(&variable).cloned().ok_or_else(|| {
                        SelectionError::VariableNotFound(variable.to_string(), pos)
                    })
                })
                .map(|value| (name.node.clone(), value))
        })
        .collect::<Result<IndexMap<_, _>, _>>()
        .map(ConstValue::Object)
}
