use oag_core::ir::{SchemaKind, SchemaNode};

use crate::config::PistacheSettings;
use crate::naming::to_model_name;
use crate::type_expr::TypeExpr;
use crate::type_mapper::openapi_type_name;

/// Turns schema nodes into target type expressions.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    settings: &'a PistacheSettings,
}

impl<'a> TypeResolver<'a> {
    pub fn new(settings: &'a PistacheSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &'a PistacheSettings {
        self.settings
    }

    pub fn resolve(&self, node: &SchemaNode) -> TypeExpr {
        match &node.kind {
            SchemaKind::Array(element) | SchemaKind::Set(element) => TypeExpr::Container {
                name: self.settings.mapped(openapi_type_name(&node.kind)).to_string(),
                args: vec![self.resolve(element)],
            },
            SchemaKind::Map(value) => TypeExpr::Container {
                name: self.settings.mapped("map").to_string(),
                args: vec![
                    TypeExpr::scalar(self.settings.mapped("string")),
                    self.resolve(value),
                ],
            },
            SchemaKind::Ref(name) => self.model_type(name),
            kind => self.model_type(self.settings.mapped(openapi_type_name(kind))),
        }
    }

    /// Type for a named model or mapped token. Known tokens and namespace-exempt types
    /// stay unqualified; everything else lives in the model namespace.
    pub fn model_type(&self, name: &str) -> TypeExpr {
        let name = to_model_name(name, self.settings);
        if self.settings.is_known_token(&name) {
            TypeExpr::Scalar(name)
        } else {
            TypeExpr::Model {
                namespace: self.settings.model_namespace().map(str::to_string),
                name,
            }
        }
    }

    /// Rendered declaration, e.g. `std::vector<org::openapitools::server::model::Pet>`.
    pub fn declaration(&self, node: &SchemaNode) -> String {
        self.resolve(node).to_string()
    }

    /// The outer type token without template arguments: `std::vector`, `int32_t`, `Pet`.
    pub fn schema_type(&self, node: &SchemaNode) -> String {
        match self.resolve(node) {
            TypeExpr::Container { name, .. } => name,
            other => other.base_type(),
        }
    }
}
