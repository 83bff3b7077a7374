use indexmap::IndexSet;
use oag_core::ir::{IrProperty, ModelDescriptor, SchemaKind};
use serde::Serialize;

use crate::default_value::default_literal;
use crate::imports::{collect_symbols, resolve_imports};
use crate::naming::{model_filenames, to_model_name, to_var_name};
use crate::type_mapper::STD_STRING;
use crate::type_resolver::TypeResolver;

#[derive(Debug, Clone, Serialize)]
pub struct PropertyContext {
    pub name: String,
    pub base_name: String,
    pub data_type: String,
    pub default_value: String,
    pub required: bool,
    pub is_container: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropertyContext {
    pub fn new(property: &IrProperty, resolver: &TypeResolver<'_>) -> Self {
        Self {
            name: to_var_name(&property.original_name, resolver.settings()),
            base_name: property.original_name.clone(),
            data_type: resolver.declaration(&property.schema),
            default_value: default_literal(&property.schema, resolver),
            required: property.required,
            is_container: matches!(
                property.schema.kind,
                SchemaKind::Array(_) | SchemaKind::Set(_) | SchemaKind::Map(_)
            ),
            description: property.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelContext {
    pub classname: String,
    pub header_file: String,
    pub source_file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub imports: IndexSet<String>,
    pub vars: Vec<PropertyContext>,
    pub is_enum: bool,
    pub enum_values: Vec<String>,
    #[serde(rename = "x-is-string-enum-container")]
    pub is_string_enum_container: bool,
}

impl ModelContext {
    pub fn new(model: &ModelDescriptor, resolver: &TypeResolver<'_>) -> Self {
        let classname = to_model_name(&model.name.original, resolver.settings());
        let (header_file, source_file) = model_filenames(&classname, resolver.settings());
        Self {
            header_file,
            source_file,
            description: model.description.clone(),
            imports: model_imports(model, resolver),
            vars: model
                .properties
                .iter()
                .map(|property| PropertyContext::new(property, resolver))
                .collect(),
            is_enum: model.is_enum,
            enum_values: model.enum_values.clone(),
            is_string_enum_container: is_string_enum_container(model, resolver),
            classname,
        }
    }
}

/// Host imports plus every symbol the property declarations need, resolved to
/// include directives.
pub fn model_imports(model: &ModelDescriptor, resolver: &TypeResolver<'_>) -> IndexSet<String> {
    let settings = resolver.settings();
    let mut symbols: IndexSet<String> = model
        .imports
        .iter()
        .map(|name| to_model_name(name, settings))
        .collect();
    for property in &model.properties {
        collect_symbols(&resolver.resolve(&property.schema), settings, &mut symbols);
    }
    resolve_imports(symbols.iter().map(String::as_str), settings)
}

/// An anyOf of a plain string and an enum model, rendered as a string-backed enum.
pub fn is_string_enum_container(model: &ModelDescriptor, resolver: &TypeResolver<'_>) -> bool {
    !model.is_enum
        && model.any_of.len() > 1
        && model
            .any_of
            .iter()
            .any(|branch| resolver.declaration(branch) == STD_STRING)
        && !model
            .any_of
            .iter()
            .any(|branch| branch.kind == SchemaKind::Any)
        && model.interfaces.len() == 1
}
