use indexmap::IndexSet;
use oag_core::ir::{HttpMethod, IrParameter, OperationDescriptor, ParameterLocation, SchemaKind};
use serde::Serialize;

use crate::imports::{collect_symbols, requires_model_import, resolve_imports};
use crate::naming::{to_model_name, to_var_name};
use crate::type_expr::TypeExpr;
use crate::type_mapper::PISTACHE_RAW_HEADER;
use crate::type_resolver::TypeResolver;

/// Response model name that marks a raw HTTP body.
pub const HTTP_CONTENT: &str = "HttpContent";
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Rewrite `{name}` placeholders to the Pistache router's `:name` syntax.
pub fn pistache_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut rest = path;
    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|i| open + i) else {
            break;
        };
        out.push_str(&rest[..open]);
        out.push(':');
        out.push_str(&rest[open + 1..close]);
        rest = &rest[close + 1..];
    }
    out.push_str(rest);
    out
}

/// `GET` → `Get`
pub fn capitalize_method(method: HttpMethod) -> String {
    let upper = method.as_str();
    let mut out = upper[..1].to_string();
    out.push_str(&upper[1..].to_ascii_lowercase());
    out
}

/// Exact, case-sensitive match; parameterized media types do not count.
pub fn consumes_json(consumes: &[String]) -> bool {
    consumes.iter().any(|c| c == JSON_MEDIA_TYPE)
}

/// Form, file and cookie parameters need hand-written extraction.
pub fn is_parsing_supported(parameters: &[IrParameter]) -> bool {
    !parameters.iter().any(|p| {
        matches!(
            p.location,
            ParameterLocation::Form | ParameterLocation::File | ParameterLocation::Cookie
        )
    })
}

/// Derived per-operation facts, serialized under their vendor-extension keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationExtensions {
    #[serde(rename = "x-codegen-pistache-path")]
    pub path: String,
    #[serde(rename = "x-codegen-pistache-consumes-json")]
    pub consumes_json: bool,
    #[serde(rename = "x-codegen-response", skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(rename = "x-codegen-response-ishttpcontent")]
    pub response_is_http_content: bool,
    #[serde(rename = "x-codegen-pistache-is-parsing-supported")]
    pub is_parsing_supported: bool,
}

impl OperationExtensions {
    pub fn new(op: &OperationDescriptor, resolver: &TypeResolver<'_>) -> Self {
        let response = op.response.as_ref().map(|node| resolver.resolve(node));
        let http_content = to_model_name(HTTP_CONTENT, resolver.settings());
        let response_is_http_content = matches!(
            &response,
            Some(TypeExpr::Model { name, .. }) if *name == http_content
        );
        Self {
            path: pistache_path(&op.path),
            consumes_json: consumes_json(&op.consumes),
            response: response.map(|expr| expr.to_string()),
            response_is_http_content,
            is_parsing_supported: is_parsing_supported(&op.parameters),
        }
    }
}

/// How a parameter's resolved type changes for its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterAdaptation {
    /// Original type dropped in favour of the raw header value, for both the
    /// declared and the base type.
    Header { raw_type: String },
    /// Wrapped in `std::optional`; always optional.
    Query {
        data_type: String,
        base_type: Option<String>,
    },
    Body { is_string_or_date: bool },
    Unchanged,
}

pub fn adapt_parameter(param: &IrParameter, resolver: &TypeResolver<'_>) -> ParameterAdaptation {
    match param.location {
        ParameterLocation::Header => {
            let raw_type =
                TypeExpr::optional(TypeExpr::scalar(PISTACHE_RAW_HEADER)).to_string();
            log::debug!(
                "header parameter {}: {} replaced by {raw_type}",
                param.original_name,
                resolver.declaration(&param.schema)
            );
            ParameterAdaptation::Header { raw_type }
        }
        ParameterLocation::Query => {
            let expr = resolver.resolve(&param.schema);
            let namespace = resolver.settings().model_namespace();
            if expr.is_scalar() {
                ParameterAdaptation::Query {
                    data_type: TypeExpr::optional(expr).to_string(),
                    base_type: None,
                }
            } else {
                let base = TypeExpr::scalar(expr.base_type());
                ParameterAdaptation::Query {
                    data_type: TypeExpr::optional(expr.qualified(namespace)).to_string(),
                    base_type: Some(TypeExpr::optional(base).to_string()),
                }
            }
        }
        ParameterLocation::Body => ParameterAdaptation::Body {
            is_string_or_date: matches!(
                param.schema.kind,
                SchemaKind::String
                    | SchemaKind::Enum(_)
                    | SchemaKind::Uuid
                    | SchemaKind::Uri
                    | SchemaKind::Date
            ),
        },
        _ => ParameterAdaptation::Unchanged,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ParameterContext {
    pub param_name: String,
    pub base_name: String,
    pub location: &'static str,
    pub data_type: String,
    pub base_type: String,
    pub is_optional: bool,
    pub is_primitive_type: bool,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "x-codegen-pistache-is-string-or-date",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_string_or_date: Option<bool>,
}

impl ParameterContext {
    pub fn new(param: &IrParameter, resolver: &TypeResolver<'_>) -> Self {
        let expr = resolver.resolve(&param.schema);
        let mut ctx = Self {
            param_name: to_var_name(&param.original_name, resolver.settings()),
            base_name: param.original_name.clone(),
            location: param.location.as_str(),
            data_type: expr.to_string(),
            base_type: expr.base_type(),
            is_optional: !param.required,
            is_primitive_type: expr.is_scalar(),
            required: param.required,
            description: param.description.clone(),
            is_string_or_date: None,
        };
        ctx.apply(adapt_parameter(param, resolver));
        ctx
    }

    pub fn apply(&mut self, adaptation: ParameterAdaptation) {
        match adaptation {
            ParameterAdaptation::Header { raw_type } => {
                self.base_type = raw_type.clone();
                self.data_type = raw_type;
            }
            ParameterAdaptation::Query {
                data_type,
                base_type,
            } => {
                self.data_type = data_type;
                if let Some(base_type) = base_type {
                    self.base_type = base_type;
                }
                self.is_optional = true;
            }
            ParameterAdaptation::Body { is_string_or_date } => {
                self.is_string_or_date = Some(is_string_or_date)
            }
            ParameterAdaptation::Unchanged => {}
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OperationContext {
    pub nickname: String,
    pub operation_id_snake_case: String,
    pub http_method: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub params: Vec<ParameterContext>,
    pub imports: IndexSet<String>,
    pub requires_model_import: bool,
    #[serde(flatten)]
    pub extensions: OperationExtensions,
}

impl OperationContext {
    pub fn new(op: &OperationDescriptor, resolver: &TypeResolver<'_>) -> Self {
        let settings = resolver.settings();

        let mut symbols: IndexSet<String> = op
            .imports
            .iter()
            .map(|name| to_model_name(name, settings))
            .collect();
        for param in &op.parameters {
            collect_symbols(&resolver.resolve(&param.schema), settings, &mut symbols);
        }
        if let Some(response) = &op.response {
            collect_symbols(&resolver.resolve(response), settings, &mut symbols);
        }

        Self {
            nickname: op.name.camel_case.clone(),
            operation_id_snake_case: op.name.snake_case.clone(),
            http_method: capitalize_method(op.method),
            path: op.path.clone(),
            summary: op.summary.clone(),
            params: op
                .parameters
                .iter()
                .map(|param| ParameterContext::new(param, resolver))
                .collect(),
            requires_model_import: requires_model_import(&symbols, settings),
            imports: resolve_imports(symbols.iter().map(String::as_str), settings),
            extensions: OperationExtensions::new(op, resolver),
        }
    }
}
