use oag_core::ir::{SchemaKind, SchemaNode};

use crate::type_expr::TypeExpr;
use crate::type_mapper::{NULLPTR, STD_MAKE_SHARED};
use crate::type_resolver::TypeResolver;

/// Initializer literal for a member of the given schema. Never empty.
pub fn default_literal(node: &SchemaNode, resolver: &TypeResolver<'_>) -> String {
    let default = node.default_text();
    match &node.kind {
        SchemaKind::String
        | SchemaKind::Date
        | SchemaKind::DateTime
        | SchemaKind::ByteArray
        | SchemaKind::Binary
        | SchemaKind::Uuid
        | SchemaKind::Uri
        | SchemaKind::Enum(_) => match default {
            Some(text) => quote(&text),
            None => "\"\"".to_string(),
        },
        SchemaKind::Boolean => default.map_or_else(|| "false".to_string(), |t| t.to_lowercase()),
        SchemaKind::Float => match default {
            Some(text) if text.contains('.') => format!("{text}f"),
            Some(text) => format!("{text}.0f"),
            None => "0.0f".to_string(),
        },
        SchemaKind::Double => default.unwrap_or_else(|| "0.0".to_string()),
        SchemaKind::Long => format!("{}L", default.as_deref().unwrap_or("0")),
        SchemaKind::Integer => default.unwrap_or_else(|| "0".to_string()),
        SchemaKind::Map(_) => format!("{}()", resolver.resolve(node).unqualified()),
        SchemaKind::Array(element) | SchemaKind::Set(element) => {
            let element = resolver.resolve(element).unqualified();
            let element = if element.is_scalar() {
                element
            } else {
                TypeExpr::shared(element)
            };
            let container = TypeExpr::Container {
                name: resolver.schema_type(node),
                args: vec![element],
            };
            format!("{container}()")
        }
        SchemaKind::Ref(_) => match resolver.resolve(node) {
            TypeExpr::Model { name, .. } => format!("{STD_MAKE_SHARED}<{name}>()"),
            _ => NULLPTR.to_string(),
        },
        SchemaKind::Union(_) | SchemaKind::Any => NULLPTR.to_string(),
    }
}

fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        if matches!(ch, '"' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}
