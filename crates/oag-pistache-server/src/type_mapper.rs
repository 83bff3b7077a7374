use indexmap::{IndexMap, IndexSet};
use oag_core::ir::SchemaKind;

/// `int32_t` (for integer)
pub const INT32_T: &str = "int32_t";
/// `int64_t` (for long)
pub const INT64_T: &str = "int64_t";
/// `nlohmann::json` (for object, AnyType)
pub const NLOHMANN_JSON: &str = "nlohmann::json";
/// `std::string` (for date, DateTime, string, file, binary, UUID, URI, ByteArray)
pub const STD_STRING: &str = "std::string";
pub const STD_MAP: &str = "std::map";
pub const STD_SET: &str = "std::set";
pub const STD_VECTOR: &str = "std::vector";
pub const STD_OPTIONAL: &str = "std::optional";
pub const STD_SHARED_PTR: &str = "std::shared_ptr";
pub const STD_MAKE_SHARED: &str = "std::make_shared";
pub const NULLPTR: &str = "nullptr";
/// Raw header value handed out by the Pistache request.
pub const PISTACHE_RAW_HEADER: &str = "Pistache::Http::Header::Raw";

/// OpenAPI type name → target type token.
pub fn builtin_type_mapping() -> IndexMap<String, String> {
    [
        ("date", STD_STRING),
        ("DateTime", STD_STRING),
        ("string", STD_STRING),
        ("integer", INT32_T),
        ("long", INT64_T),
        ("boolean", "bool"),
        ("number", "double"),
        ("double", "double"),
        ("float", "float"),
        ("array", STD_VECTOR),
        ("map", STD_MAP),
        ("set", STD_SET),
        ("file", STD_STRING),
        ("object", NLOHMANN_JSON),
        ("binary", STD_STRING),
        ("UUID", STD_STRING),
        ("URI", STD_STRING),
        ("ByteArray", STD_STRING),
        ("AnyType", NLOHMANN_JSON),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Target type token → include directive.
pub fn builtin_import_mapping() -> IndexMap<String, String> {
    [
        (STD_VECTOR, "#include <vector>"),
        (STD_MAP, "#include <map>"),
        (STD_SET, "#include <set>"),
        (STD_STRING, "#include <string>"),
        (NLOHMANN_JSON, "#include <nlohmann/json.hpp>"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Built-in scalars that need neither an include nor a namespace.
pub fn language_primitives() -> IndexSet<String> {
    [
        "int", "char", "bool", "long", "float", "double", INT32_T, INT64_T,
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

/// Types that must never be qualified with the model namespace.
pub fn types_without_model_namespace() -> IndexSet<String> {
    IndexSet::from([NLOHMANN_JSON.to_string()])
}

/// The type-mapping key for a schema kind. `Ref` kinds map to their own name.
pub fn openapi_type_name(kind: &SchemaKind) -> &str {
    match kind {
        SchemaKind::Boolean => "boolean",
        SchemaKind::Integer => "integer",
        SchemaKind::Long => "long",
        SchemaKind::Float => "float",
        SchemaKind::Double => "number",
        SchemaKind::String | SchemaKind::Enum(_) => "string",
        SchemaKind::Date => "date",
        SchemaKind::DateTime => "DateTime",
        SchemaKind::ByteArray => "ByteArray",
        SchemaKind::Binary => "binary",
        SchemaKind::Uuid => "UUID",
        SchemaKind::Uri => "URI",
        SchemaKind::Array(_) => "array",
        SchemaKind::Set(_) => "set",
        SchemaKind::Map(_) => "map",
        SchemaKind::Ref(name) => name,
        SchemaKind::Union(_) => "AnyType",
        SchemaKind::Any => "object",
    }
}
