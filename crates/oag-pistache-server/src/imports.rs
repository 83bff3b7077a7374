use indexmap::IndexSet;

use crate::config::PistacheSettings;
use crate::type_expr::TypeExpr;

const INCLUDE_MARKER: &str = "#include";

/// Include directive for one collected symbol.
///
/// Returns `None` for symbols that are already directives, primitives, or empty.
pub fn to_model_import(symbol: &str, settings: &PistacheSettings) -> Option<String> {
    let symbol = symbol.trim();
    if symbol.is_empty() || symbol.starts_with(INCLUDE_MARKER) || settings.is_primitive(symbol) {
        return None;
    }
    Some(
        settings
            .import_mapping
            .get(symbol)
            .cloned()
            .unwrap_or_else(|| format!("{INCLUDE_MARKER} \"{symbol}.h\"")),
    )
}

/// Resolve and deduplicate a symbol list in order of first appearance.
///
/// Entries that are already directives are kept as they are, so resolving a resolved
/// list gives the same list back.
pub fn resolve_imports<'s>(
    symbols: impl IntoIterator<Item = &'s str>,
    settings: &PistacheSettings,
) -> IndexSet<String> {
    symbols
        .into_iter()
        .filter_map(|symbol| {
            if symbol.starts_with(INCLUDE_MARKER) {
                Some(symbol.to_string())
            } else {
                to_model_import(symbol, settings)
            }
        })
        .collect()
}

/// Collect every symbol a declaration needs: container tokens, non-primitive
/// scalar tokens and model class names.
pub fn collect_symbols(expr: &TypeExpr, settings: &PistacheSettings, out: &mut IndexSet<String>) {
    match expr {
        TypeExpr::Scalar(token) => {
            if !settings.is_primitive(token) {
                out.insert(token.clone());
            }
        }
        TypeExpr::Container { name, args } => {
            out.insert(name.clone());
            for arg in args {
                collect_symbols(arg, settings, out);
            }
        }
        TypeExpr::Model { name, .. } => {
            out.insert(name.clone());
        }
        TypeExpr::Optional(inner) | TypeExpr::Shared(inner) => {
            collect_symbols(inner, settings, out)
        }
    }
}

/// True when any symbol needs a generated model header rather than a library include.
pub fn requires_model_import<'s>(
    symbols: impl IntoIterator<Item = &'s String>,
    settings: &PistacheSettings,
) -> bool {
    symbols
        .into_iter()
        .any(|symbol| !settings.import_mapping.contains_key(symbol) && !settings.is_primitive(symbol))
}

#[cfg(test)]
mod tests {
    use oag_core::ir::{SchemaKind, SchemaNode};

    use super::*;
    use crate::type_resolver::TypeResolver;

    #[test]
    fn test_library_and_model_imports() {
        let settings = PistacheSettings::default();
        assert_eq!(
            to_model_import("std::vector", &settings).as_deref(),
            Some("#include <vector>")
        );
        assert_eq!(
            to_model_import("nlohmann::json", &settings).as_deref(),
            Some("#include <nlohmann/json.hpp>")
        );
        assert_eq!(
            to_model_import("Category", &settings).as_deref(),
            Some("#include \"Category.h\"")
        );
        assert_eq!(to_model_import("int32_t", &settings), None);
        assert_eq!(to_model_import("", &settings), None);
    }

    #[test]
    fn test_resolved_directive_is_not_rewritten() {
        let settings = PistacheSettings::default();
        assert_eq!(to_model_import("#include <map>", &settings), None);
    }

    #[test]
    fn test_resolve_is_idempotent_and_deduplicated() {
        let settings = PistacheSettings::default();
        let once = resolve_imports(
            ["Pet", "std::string", "Pet", "bool", "std::string"],
            &settings,
        );
        assert_eq!(
            once.iter().map(String::as_str).collect::<Vec<_>>(),
            ["#include \"Pet.h\"", "#include <string>"]
        );
        let twice = resolve_imports(once.iter().map(String::as_str), &settings);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_collect_symbols_walks_the_tree() {
        let settings = PistacheSettings::default();
        let resolver = TypeResolver::new(&settings);
        let node = SchemaNode::map_of(SchemaNode::array_of(SchemaNode::reference("Tag")));
        let mut symbols = IndexSet::new();
        collect_symbols(&resolver.resolve(&node), &settings, &mut symbols);
        collect_symbols(
            &resolver.resolve(&SchemaNode::new(SchemaKind::Integer)),
            &settings,
            &mut symbols,
        );
        assert_eq!(
            symbols.iter().map(String::as_str).collect::<Vec<_>>(),
            ["std::map", "std::string", "std::vector", "Tag"]
        );
        assert!(requires_model_import(&symbols, &settings));
        symbols.shift_remove("Tag");
        assert!(!requires_model_import(&symbols, &settings));
    }
}
