use indexmap::IndexMap;

use crate::ir::{SchemaKind, SchemaNode};
use crate::parse::ref_name;
use crate::parse::schema::SchemaOrRef;
use crate::parse::spec::Components;

use super::schema_classifier::schema_to_node;

/// Component schemas that only name another type (primitives, arrays, sets and
/// maps). References to them are replaced by their target and no model is built.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    targets: IndexMap<String, SchemaNode>,
}

impl AliasTable {
    pub fn from_components(components: &Components) -> Self {
        let mut targets: IndexMap<String, SchemaNode> = components
            .schemas
            .iter()
            .filter_map(|(name, schema_or_ref)| match schema_or_ref {
                SchemaOrRef::Schema(schema) if schema.enum_values.is_empty() => {
                    let node = schema_to_node(schema);
                    is_alias_target(&node.kind).then(|| (name.clone(), node))
                }
                _ => None,
            })
            .collect();

        // `A: {$ref: B}` where B is itself an alias
        for (name, schema_or_ref) in &components.schemas {
            if let SchemaOrRef::Ref { ref_path } = schema_or_ref {
                let target = ref_name(ref_path);
                if targets.contains_key(target) {
                    targets.insert(name.clone(), SchemaNode::reference(target));
                }
            }
        }

        Self { targets }
    }

    pub fn is_alias(&self, name: &str) -> bool {
        self.targets.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Replace every alias reference inside `node` with its target, recursively.
    /// A default on the referencing node wins over the alias's own.
    pub fn inline(&self, node: &mut SchemaNode) {
        self.inline_guarded(node, &mut Vec::new());
    }

    fn inline_guarded(&self, node: &mut SchemaNode, stack: &mut Vec<String>) {
        if let SchemaKind::Ref(name) = &node.kind {
            // Self-referencing aliases keep the reference
            if stack.contains(name) {
                return;
            }
            let Some(target) = self.targets.get(name) else {
                return;
            };
            stack.push(name.clone());
            let default = node.default.take();
            *node = target.clone();
            if default.is_some() {
                node.default = default;
            }
            self.inline_guarded(node, stack);
            stack.pop();
            return;
        }

        match &mut node.kind {
            SchemaKind::Array(inner) | SchemaKind::Set(inner) | SchemaKind::Map(inner) => {
                self.inline_guarded(inner, stack)
            }
            SchemaKind::Union(branches) => {
                for branch in branches {
                    self.inline_guarded(branch, stack);
                }
            }
            _ => {}
        }
    }
}

fn is_alias_target(kind: &SchemaKind) -> bool {
    !matches!(
        kind,
        SchemaKind::Any | SchemaKind::Union(_) | SchemaKind::Enum(_) | SchemaKind::Ref(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(yaml: &str) -> AliasTable {
        let components: Components = serde_yaml_ng::from_str(yaml).unwrap();
        AliasTable::from_components(&components)
    }

    const COMPONENTS: &str = r#"
schemas:
  PetIds: {type: array, items: {type: integer, format: int64}}
  Labels: {type: object, additionalProperties: {type: string}}
  Name: {type: string, default: rex}
  Names: {type: array, items: {$ref: '#/components/schemas/Name'}}
  Nick: {$ref: '#/components/schemas/Name'}
  Status: {type: string, enum: [sit, stay]}
  Pet: {type: object, properties: {id: {type: integer}}}
  Parent: {$ref: '#/components/schemas/Pet'}
  Loop: {type: array, items: {$ref: '#/components/schemas/Loop'}}
"#;

    #[test]
    fn test_alias_classification() {
        let aliases = table(COMPONENTS);
        for name in ["PetIds", "Labels", "Name", "Names", "Nick", "Loop"] {
            assert!(aliases.is_alias(name), "{name} should be an alias");
        }
        for name in ["Status", "Pet", "Parent"] {
            assert!(!aliases.is_alias(name), "{name} should stay a model");
        }
        assert_eq!(aliases.len(), 6);
    }

    #[test]
    fn test_inline_nested_aliases() {
        let aliases = table(COMPONENTS);

        let mut node = SchemaNode::reference("PetIds");
        aliases.inline(&mut node);
        assert_eq!(node, SchemaNode::array_of(SchemaNode::new(SchemaKind::Long)));

        let mut node = SchemaNode::map_of(SchemaNode::reference("Names"));
        aliases.inline(&mut node);
        let name = SchemaNode::new(SchemaKind::String).with_default(serde_json::json!("rex"));
        assert_eq!(node, SchemaNode::map_of(SchemaNode::array_of(name.clone())));

        let mut node = SchemaNode::reference("Nick");
        aliases.inline(&mut node);
        assert_eq!(node, name);

        let mut node = SchemaNode::reference("Pet");
        aliases.inline(&mut node);
        assert_eq!(node, SchemaNode::reference("Pet"));
    }

    #[test]
    fn test_referencing_default_wins() {
        let aliases = table(COMPONENTS);
        let mut node = SchemaNode::reference("Name").with_default(serde_json::json!("max"));
        aliases.inline(&mut node);
        assert_eq!(node.default_text().as_deref(), Some("max"));
    }

    #[test]
    fn test_self_referencing_alias_terminates() {
        let aliases = table(COMPONENTS);
        let mut node = SchemaNode::reference("Loop");
        aliases.inline(&mut node);
        assert_eq!(node, SchemaNode::array_of(SchemaNode::reference("Loop")));
    }
}
