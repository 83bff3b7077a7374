use crate::ir::{SchemaKind, SchemaNode};
use crate::parse::ref_name;
use crate::parse::schema::{AdditionalProperties, Schema, SchemaOrRef, SchemaType};

/// Classify a parsed `SchemaOrRef` into a `SchemaNode`. References are kept by name.
pub fn schema_or_ref_to_node(schema_or_ref: &SchemaOrRef) -> SchemaNode {
    match schema_or_ref {
        SchemaOrRef::Ref { ref_path } => SchemaNode::reference(ref_name(ref_path)),
        SchemaOrRef::Schema(schema) => schema_to_node(schema),
    }
}

/// Classify a parsed `Schema` into a `SchemaNode`, carrying its `default` unchanged.
pub fn schema_to_node(schema: &Schema) -> SchemaNode {
    SchemaNode {
        kind: classify(schema),
        default: schema.default_value.clone(),
    }
}

fn classify(schema: &Schema) -> SchemaKind {
    let branches = if schema.one_of.is_empty() {
        &schema.any_of
    } else {
        &schema.one_of
    };
    if !branches.is_empty() {
        return SchemaKind::Union(branches.iter().map(schema_or_ref_to_node).collect());
    }

    match schema.all_of.as_slice() {
        [] => {}
        [single] => return schema_or_ref_to_node(single).kind,
        _ => return SchemaKind::Any,
    }

    match schema.schema_type.as_ref().and_then(|t| t.primary()) {
        Some(SchemaType::String) => classify_string(schema),
        Some(SchemaType::Integer) => match schema.format.as_deref() {
            Some("int64") => SchemaKind::Long,
            _ => SchemaKind::Integer,
        },
        Some(SchemaType::Number) => match schema.format.as_deref() {
            Some("float") => SchemaKind::Float,
            _ => SchemaKind::Double,
        },
        Some(SchemaType::Boolean) => SchemaKind::Boolean,
        Some(SchemaType::Array) => classify_array(schema),
        Some(SchemaType::Object) => classify_object(schema),
        Some(SchemaType::Null) => SchemaKind::Any,
        None if schema.items.is_some() => classify_array(schema),
        None => classify_object(schema),
    }
}

fn classify_string(schema: &Schema) -> SchemaKind {
    let values: Vec<String> = schema
        .enum_values
        .iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect();
    if !values.is_empty() {
        return SchemaKind::Enum(values);
    }

    match schema.format.as_deref() {
        Some("date") => SchemaKind::Date,
        Some("date-time") => SchemaKind::DateTime,
        Some("byte") => SchemaKind::ByteArray,
        Some("binary") => SchemaKind::Binary,
        Some("uuid") => SchemaKind::Uuid,
        Some("uri") => SchemaKind::Uri,
        _ => SchemaKind::String,
    }
}

fn classify_array(schema: &Schema) -> SchemaKind {
    let element = match &schema.items {
        Some(items) => schema_or_ref_to_node(items),
        None => SchemaNode::new(SchemaKind::Any),
    };
    if schema.unique_items == Some(true) {
        SchemaKind::Set(Box::new(element))
    } else {
        SchemaKind::Array(Box::new(element))
    }
}

/// Only pure maps survive as containers; objects with properties are free-form here.
fn classify_object(schema: &Schema) -> SchemaKind {
    if !schema.properties.is_empty() {
        return SchemaKind::Any;
    }
    match &schema.additional_properties {
        Some(AdditionalProperties::Schema(inner)) => {
            SchemaKind::Map(Box::new(schema_or_ref_to_node(inner)))
        }
        Some(AdditionalProperties::Bool(true)) => {
            SchemaKind::Map(Box::new(SchemaNode::new(SchemaKind::Any)))
        }
        Some(AdditionalProperties::Bool(false)) | None => SchemaKind::Any,
    }
}
