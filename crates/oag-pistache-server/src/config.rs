use std::fs;
use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use oag_core::config::NamingConfig;
use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;
use crate::type_mapper::{
    builtin_import_mapping, builtin_type_mapping, language_primitives,
    types_without_model_namespace,
};

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".oag-pistache.yaml";

/// User-facing options for the Pistache server generator.
///
/// Every field is optional in the YAML file; missing ones take the defaults below.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PistacheConfig {
    /// Let the generated build fetch and compile the external libraries it needs.
    pub add_external_libs: bool,
    /// Struct-based model templates instead of get/set accessors.
    pub use_struct_model: bool,
    pub reserved_word_prefix: String,
    pub helpers_package: String,
    pub api_package: String,
    pub model_package: String,
    pub model_name_prefix: String,
    pub variable_name_first_character_uppercase: bool,
    /// Prefix for every generated path; empty keeps paths relative.
    pub output_folder: String,
    /// Extra OpenAPI type → target token entries, overriding the built-in table.
    pub type_mappings: IndexMap<String, String>,
    /// Extra target token → include directive entries.
    pub import_mappings: IndexMap<String, String>,
    pub naming: NamingConfig,
}

impl Default for PistacheConfig {
    fn default() -> Self {
        Self {
            add_external_libs: true,
            use_struct_model: false,
            reserved_word_prefix: "r_".to_string(),
            helpers_package: "org.openapitools.server.helpers".to_string(),
            api_package: "org.openapitools.server.api".to_string(),
            model_package: "org.openapitools.server.model".to_string(),
            model_name_prefix: String::new(),
            variable_name_first_character_uppercase: true,
            output_folder: String::new(),
            type_mappings: IndexMap::new(),
            import_mappings: IndexMap::new(),
            naming: NamingConfig::default(),
        }
    }
}

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<PistacheConfig>, GeneratorError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| GeneratorError::ConfigRead {
        path: path.display().to_string(),
        source,
    })?;
    let config = serde_yaml_ng::from_str(&content).map_err(|source| {
        GeneratorError::ConfigParse {
            path: path.display().to_string(),
            source,
        }
    })?;
    Ok(Some(config))
}

/// Which model templates to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelStyle {
    /// Classes with getters and setters.
    Accessor,
    /// Plain structs with public members.
    Struct,
}

/// A C++ namespace derived from a dotted package name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Namespace {
    /// `org::openapitools::server::model`
    pub name: String,
    /// `["org", "openapitools", "server", "model"]`, for nested `namespace` blocks.
    pub declarations: Vec<String>,
}

impl Namespace {
    pub fn from_package(package: &str) -> Self {
        let declarations: Vec<String> = package
            .split('.')
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            name: declarations.join("::"),
            declarations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Namespaces {
    pub model: Namespace,
    pub api: Namespace,
    pub helpers: Namespace,
}

/// Immutable per-run settings derived once from a `PistacheConfig`.
#[derive(Debug, Clone)]
pub struct PistacheSettings {
    pub type_mapping: IndexMap<String, String>,
    pub import_mapping: IndexMap<String, String>,
    pub primitives: IndexSet<String>,
    pub namespace_exempt: IndexSet<String>,
    pub namespaces: Namespaces,
    pub model_name_prefix: String,
    pub reserved_word_prefix: String,
    pub variable_name_first_character_uppercase: bool,
    pub add_external_libs: bool,
    pub model_style: ModelStyle,
    pub output_folder: String,
}

impl PistacheSettings {
    pub fn from_config(config: &PistacheConfig) -> Self {
        let mut type_mapping = builtin_type_mapping();
        type_mapping.extend(config.type_mappings.clone());

        let mut import_mapping = builtin_import_mapping();
        import_mapping.extend(config.import_mappings.clone());

        let model_style = if config.use_struct_model {
            log::info!("Using struct-based model template");
            ModelStyle::Struct
        } else {
            log::info!("Using get/set-based model template");
            ModelStyle::Accessor
        };

        Self {
            type_mapping,
            import_mapping,
            primitives: language_primitives(),
            namespace_exempt: types_without_model_namespace(),
            namespaces: Namespaces {
                model: Namespace::from_package(&config.model_package),
                api: Namespace::from_package(&config.api_package),
                helpers: Namespace::from_package(&config.helpers_package),
            },
            model_name_prefix: config.model_name_prefix.clone(),
            reserved_word_prefix: config.reserved_word_prefix.clone(),
            variable_name_first_character_uppercase: config
                .variable_name_first_character_uppercase,
            add_external_libs: config.add_external_libs,
            model_style,
            output_folder: config.output_folder.trim_end_matches('/').to_string(),
        }
    }

    /// Target token for an OpenAPI type name; unmapped names come back unchanged.
    pub fn mapped<'a>(&'a self, openapi_type: &'a str) -> &'a str {
        self.type_mapping
            .get(openapi_type)
            .map_or(openapi_type, String::as_str)
    }

    pub fn is_primitive(&self, token: &str) -> bool {
        self.primitives.contains(token)
    }

    /// Whether `token` is already a target type rather than a model name.
    pub fn is_known_token(&self, token: &str) -> bool {
        self.is_primitive(token)
            || self.namespace_exempt.contains(token)
            || self.type_mapping.values().any(|v| v == token)
            || self.import_mapping.contains_key(token)
    }

    /// The model namespace, or `None` when the model package is empty.
    pub fn model_namespace(&self) -> Option<&str> {
        let ns = &self.namespaces.model;
        (!ns.is_empty()).then_some(ns.name.as_str())
    }
}

impl Default for PistacheSettings {
    fn default() -> Self {
        Self::from_config(&PistacheConfig::default())
    }
}
