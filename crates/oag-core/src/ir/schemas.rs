use indexmap::IndexSet;

use super::types::NormalizedName;

/// The kind of a resolved schema node.
///
/// Container kinds carry their element node; `Ref` carries the raw name of the
/// referenced component schema.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    Boolean,
    /// 32-bit integer (`integer`, any format other than `int64`).
    Integer,
    /// 64-bit integer (`integer` + `int64`).
    Long,
    /// `number` + `float`.
    Float,
    /// `number` with any other format, or none.
    Double,
    String,
    Date,
    DateTime,
    ByteArray,
    Binary,
    Uuid,
    Uri,
    /// Inline string enum.
    Enum(Vec<String>),
    Array(Box<SchemaNode>),
    /// Array with `uniqueItems: true`.
    Set(Box<SchemaNode>),
    /// `additionalProperties` map; keys are always strings.
    Map(Box<SchemaNode>),
    Ref(String),
    /// Inline oneOf / anyOf.
    Union(Vec<SchemaNode>),
    /// Free-form object, untyped schema, or anything without a closer match.
    Any,
}

/// A resolved schema: its kind plus the literal `default` from the document.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    pub kind: SchemaKind,
    pub default: Option<serde_json::Value>,
}

impl SchemaNode {
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            default: None,
        }
    }

    pub fn with_default(mut self, value: serde_json::Value) -> Self {
        self.default = Some(value);
        self
    }

    pub fn array_of(element: SchemaNode) -> Self {
        Self::new(SchemaKind::Array(Box::new(element)))
    }

    pub fn map_of(value: SchemaNode) -> Self {
        Self::new(SchemaKind::Map(Box::new(value)))
    }

    pub fn reference(name: &str) -> Self {
        Self::new(SchemaKind::Ref(name.to_string()))
    }

    /// The default as literal source text: strings unquoted, everything else as JSON.
    ///
    /// No validation happens here; a non-numeric default on a numeric schema comes
    /// back unchanged.
    pub fn default_text(&self) -> Option<String> {
        self.default.as_ref().and_then(|value| match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        })
    }

    /// Collect the names of every component schema referenced from this node.
    pub fn collect_refs(&self, out: &mut IndexSet<String>) {
        match &self.kind {
            SchemaKind::Ref(name) => {
                out.insert(name.clone());
            }
            SchemaKind::Array(inner) | SchemaKind::Set(inner) | SchemaKind::Map(inner) => {
                inner.collect_refs(out)
            }
            SchemaKind::Union(branches) => {
                for branch in branches {
                    branch.collect_refs(out);
                }
            }
            _ => {}
        }
    }
}

/// A named component schema, ready for type-declaration generation.
#[derive(Debug, Clone)]
pub struct ModelDescriptor {
    pub name: NormalizedName,
    pub description: Option<String>,
    pub properties: Vec<IrProperty>,
    /// Raw import symbols collected while resolving the model (model names).
    pub imports: IndexSet<String>,
    /// Names of the schemas this model composes (allOf / anyOf / oneOf `$ref`s).
    pub interfaces: Vec<String>,
    pub is_enum: bool,
    pub enum_values: Vec<String>,
    /// anyOf / oneOf branches.
    pub any_of: Vec<SchemaNode>,
}

/// A property on a model.
#[derive(Debug, Clone)]
pub struct IrProperty {
    pub name: NormalizedName,
    pub original_name: String,
    pub schema: SchemaNode,
    pub required: bool,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_text() {
        let node = SchemaNode::new(SchemaKind::Float).with_default(json!(374));
        assert_eq!(node.default_text().as_deref(), Some("374"));

        let node = SchemaNode::new(SchemaKind::String).with_default(json!("available"));
        assert_eq!(node.default_text().as_deref(), Some("available"));

        let node = SchemaNode::new(SchemaKind::Boolean).with_default(json!(null));
        assert_eq!(node.default_text(), None);
    }

    #[test]
    fn test_collect_refs_nested() {
        let node = SchemaNode::map_of(SchemaNode::array_of(SchemaNode::reference("Pet")));
        let mut refs = IndexSet::new();
        node.collect_refs(&mut refs);
        node.collect_refs(&mut refs);
        assert_eq!(refs.into_iter().collect::<Vec<_>>(), vec!["Pet".to_string()]);
    }
}
