use heck::ToSnakeCase;
use oag_core::ir::{IrModule, IrSpec};
use oag_core::transform::{TransformOptions, transform_with_options};
use oag_core::{CodeGenerator, parse};
use serde::Serialize;

use crate::config::{ModelStyle, Namespaces, PistacheConfig, PistacheSettings};
use crate::error::GeneratorError;
use crate::model::ModelContext;
use crate::naming::{ApiTemplate, SupportingFile, api_filename, supporting_files, to_api_name};
use crate::operation::OperationContext;
use crate::type_resolver::TypeResolver;

/// Everything the Pistache templates need for one run.
#[derive(Debug, Clone, Serialize)]
pub struct PistacheContext {
    pub app_name: String,
    pub app_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_description: Option<String>,
    pub namespaces: Namespaces,
    pub add_external_libs: bool,
    pub reserved_word_prefix: String,
    pub model_style: ModelStyle,
    pub model_templates: ModelTemplates,
    pub models: Vec<ModelContext>,
    pub apis: Vec<ApiContext>,
    pub supporting_files: Vec<SupportingFile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelTemplates {
    pub header: &'static str,
    pub source: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiFiles {
    pub header: String,
    pub source: String,
    pub impl_header: String,
    pub impl_source: String,
}

/// One operation group, rendered as an API class plus its implementation pair.
#[derive(Debug, Clone, Serialize)]
pub struct ApiContext {
    pub classname: String,
    #[serde(rename = "classnameSnakeUpperCase")]
    pub classname_snake_upper_case: String,
    #[serde(rename = "classnameSnakeLowerCase")]
    pub classname_snake_lower_case: String,
    pub files: ApiFiles,
    pub has_model_import: bool,
    pub operations: Vec<OperationContext>,
}

impl ApiContext {
    fn new(group: &IrModule, ir: &IrSpec, resolver: &TypeResolver<'_>) -> Self {
        let settings = resolver.settings();
        let classname = to_api_name(&group.name.original);
        let snake = classname.to_snake_case();
        let operations: Vec<OperationContext> = group
            .operations
            .iter()
            .filter_map(|&index| ir.operations.get(index))
            .map(|op| OperationContext::new(op, resolver))
            .collect();
        Self {
            files: ApiFiles {
                header: api_filename(&classname, ApiTemplate::Header, settings),
                source: api_filename(&classname, ApiTemplate::Source, settings),
                impl_header: api_filename(&classname, ApiTemplate::ImplHeader, settings),
                impl_source: api_filename(&classname, ApiTemplate::ImplSource, settings),
            },
            classname_snake_upper_case: snake.to_uppercase(),
            classname_snake_lower_case: snake,
            has_model_import: operations.iter().any(|op| op.requires_model_import),
            operations,
            classname,
        }
    }
}

/// C++ Pistache server generator.
pub struct PistacheServerGenerator;

impl PistacheServerGenerator {
    /// Parse, transform and build the context in one go, honouring the configured
    /// naming strategy.
    pub fn generate_from_yaml(
        &self,
        document: &str,
        config: &PistacheConfig,
    ) -> Result<PistacheContext, GeneratorError> {
        let spec = parse::from_yaml(document)?;
        let options = TransformOptions {
            naming_strategy: config.naming.strategy,
            aliases: config.naming.aliases.clone(),
        };
        let ir = transform_with_options(&spec, &options)?;
        self.generate(&ir, config)
    }
}

impl CodeGenerator for PistacheServerGenerator {
    type Config = PistacheConfig;
    type Output = PistacheContext;
    type Error = GeneratorError;

    fn generate(
        &self,
        ir: &IrSpec,
        config: &PistacheConfig,
    ) -> Result<PistacheContext, GeneratorError> {
        let settings = PistacheSettings::from_config(config);
        let resolver = TypeResolver::new(&settings);
        let (header, source) = settings.model_style.templates();

        let models: Vec<ModelContext> = ir
            .models
            .iter()
            .map(|model| ModelContext::new(model, &resolver))
            .collect();
        let apis: Vec<ApiContext> = ir
            .groups
            .iter()
            .map(|group| ApiContext::new(group, ir, &resolver))
            .collect();
        log::debug!(
            "built context: {} models, {} api classes",
            models.len(),
            apis.len()
        );

        Ok(PistacheContext {
            app_name: ir.info.title.clone(),
            app_version: ir.info.version.clone(),
            app_description: ir.info.description.clone(),
            namespaces: settings.namespaces.clone(),
            add_external_libs: settings.add_external_libs,
            reserved_word_prefix: settings.reserved_word_prefix.clone(),
            model_style: settings.model_style,
            model_templates: ModelTemplates { header, source },
            models,
            apis,
            supporting_files: supporting_files(&settings),
        })
    }
}
