use std::collections::BTreeMap;

use indexmap::{IndexMap, IndexSet};

use crate::config::NamingStrategy;
use crate::error::{ResolveError, TransformError};
use crate::ir::*;
use crate::parse::operation::{Operation, PathItem};
use crate::parse::parameter::{self, Parameter, ParameterOrRef};
use crate::parse::ref_name;
use crate::parse::request_body::{RequestBody, RequestBodyOrRef};
use crate::parse::response::Response;
use crate::parse::schema::{Schema, SchemaOrRef};
use crate::parse::spec::{Components, OpenApiSpec};

use super::aliases::AliasTable;
use super::name_normalizer::{normalize_name, route_to_name};
use super::schema_classifier::schema_or_ref_to_node;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
const MULTIPART_FORM: &str = "multipart/form-data";

/// Options controlling how the transform phase resolves operation names.
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    pub naming_strategy: NamingStrategy,
    pub aliases: IndexMap<String, String>,
}

/// Transform a parsed OpenAPI document into resolved descriptors.
pub fn transform(spec: &OpenApiSpec) -> Result<IrSpec, TransformError> {
    transform_with_options(spec, &TransformOptions::default())
}

/// Transform with explicit naming options.
pub fn transform_with_options(
    spec: &OpenApiSpec,
    options: &TransformOptions,
) -> Result<IrSpec, TransformError> {
    let empty = Components::default();
    let components = spec.components.as_ref().unwrap_or(&empty);

    // Phase 1: one model per component schema that is not an alias
    let aliases = AliasTable::from_components(components);
    let models = resolve_models(components, &aliases);
    log::debug!(
        "resolved {} models, inlined {} aliases",
        models.len(),
        aliases.len()
    );

    // Phase 2: one operation per path + method
    let mut operations = Vec::new();
    for (path, item) in &spec.paths {
        collect_operations(path, item, components, &aliases, options, &mut operations)?;
    }
    log::debug!("resolved {} operations", operations.len());

    // Phase 3: every schema reference must name a component
    validate_refs(components, &models, &operations)?;

    let groups = group_into_modules(&operations);

    Ok(IrSpec {
        info: IrInfo {
            title: spec.info.title.clone(),
            description: spec.info.description.clone(),
            version: spec.info.version.clone(),
        },
        models,
        operations,
        groups,
    })
}

fn resolve_models(components: &Components, aliases: &AliasTable) -> Vec<ModelDescriptor> {
    components
        .schemas
        .iter()
        .filter(|(name, _)| !aliases.is_alias(name))
        .map(|(name, schema_or_ref)| match schema_or_ref {
            SchemaOrRef::Ref { ref_path } => ModelDescriptor {
                name: normalize_name(name),
                description: None,
                properties: Vec::new(),
                imports: IndexSet::from([ref_name(ref_path).to_string()]),
                interfaces: vec![ref_name(ref_path).to_string()],
                is_enum: false,
                enum_values: Vec::new(),
                any_of: Vec::new(),
            },
            SchemaOrRef::Schema(schema) => build_model(name, schema, aliases),
        })
        .collect()
}

fn build_model(name: &str, schema: &Schema, aliases: &AliasTable) -> ModelDescriptor {
    let enum_values: Vec<String> = schema
        .enum_values
        .iter()
        .map(|v| match v {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();

    let branches = if schema.one_of.is_empty() {
        &schema.any_of
    } else {
        &schema.one_of
    };
    let mut any_of: Vec<SchemaNode> = branches.iter().map(schema_or_ref_to_node).collect();

    let interfaces: Vec<String> = schema
        .all_of
        .iter()
        .chain(branches)
        .filter_map(|s| match s {
            SchemaOrRef::Ref { ref_path } => Some(ref_name(ref_path).to_string()),
            SchemaOrRef::Schema(_) => None,
        })
        .collect();

    // Inline allOf parts contribute their properties, then the schema's own
    let mut properties = Vec::new();
    for part in &schema.all_of {
        if let SchemaOrRef::Schema(inline) = part {
            properties.extend(build_properties(inline));
        }
    }
    properties.extend(build_properties(schema));

    for prop in &mut properties {
        aliases.inline(&mut prop.schema);
    }
    for branch in &mut any_of {
        aliases.inline(branch);
    }

    let mut imports = IndexSet::new();
    for prop in &properties {
        prop.schema.collect_refs(&mut imports);
    }
    for branch in &any_of {
        branch.collect_refs(&mut imports);
    }
    imports.extend(interfaces.iter().cloned());

    ModelDescriptor {
        name: normalize_name(name),
        description: schema.description.clone(),
        properties,
        imports,
        interfaces,
        is_enum: !enum_values.is_empty(),
        enum_values,
        any_of,
    }
}

fn build_properties(schema: &Schema) -> Vec<IrProperty> {
    schema
        .properties
        .iter()
        .map(|(name, prop)| IrProperty {
            name: normalize_name(name),
            original_name: name.clone(),
            schema: schema_or_ref_to_node(prop),
            required: schema.required.contains(name),
            description: match prop {
                SchemaOrRef::Schema(s) => s.description.clone(),
                SchemaOrRef::Ref { .. } => None,
            },
        })
        .collect()
}

fn collect_operations(
    path: &str,
    item: &PathItem,
    components: &Components,
    aliases: &AliasTable,
    options: &TransformOptions,
    out: &mut Vec<OperationDescriptor>,
) -> Result<(), TransformError> {
    let methods = [
        (HttpMethod::Get, &item.get),
        (HttpMethod::Put, &item.put),
        (HttpMethod::Post, &item.post),
        (HttpMethod::Delete, &item.delete),
        (HttpMethod::Options, &item.options),
        (HttpMethod::Head, &item.head),
        (HttpMethod::Patch, &item.patch),
        (HttpMethod::Trace, &item.trace),
    ];

    for (method, op) in methods {
        if let Some(op) = op {
            out.push(build_operation(
                method, path, item, op, components, aliases, options,
            )?);
        }
    }
    Ok(())
}

fn build_operation(
    method: HttpMethod,
    path: &str,
    item: &PathItem,
    op: &Operation,
    components: &Components,
    aliases: &AliasTable,
    options: &TransformOptions,
) -> Result<OperationDescriptor, TransformError> {
    let raw_name = match options.naming_strategy {
        NamingStrategy::UseOperationId => op
            .operation_id
            .clone()
            .unwrap_or_else(|| route_to_name(method.as_str(), path)),
        NamingStrategy::UseRouteBased => route_to_name(method.as_str(), path),
    };
    let name = options.aliases.get(&raw_name).unwrap_or(&raw_name);

    // Operation-level parameters override path-level ones with the same name and location
    let mut merged: IndexMap<(&str, parameter::ParameterLocation), &Parameter> = IndexMap::new();
    for p in item.parameters.iter().chain(&op.parameters) {
        let p = resolve_parameter(p, components)?;
        merged.insert((p.name.as_str(), p.location), p);
    }
    let mut parameters: Vec<IrParameter> = merged.into_values().map(to_ir_parameter).collect();

    let mut consumes = Vec::new();
    if let Some(body) = &op.request_body {
        let body = resolve_request_body(body, components)?;
        consumes.extend(body.content.keys().cloned());
        parameters.extend(body_parameters(body, components)?);
    }

    let mut response = success_response(&op.responses)
        .and_then(|resp| resp.content.values().next())
        .and_then(|media| media.schema.as_ref())
        .map(schema_or_ref_to_node);

    for param in &mut parameters {
        aliases.inline(&mut param.schema);
    }
    if let Some(node) = &mut response {
        aliases.inline(node);
    }

    let mut imports = IndexSet::new();
    for param in &parameters {
        param.schema.collect_refs(&mut imports);
    }
    if let Some(node) = &response {
        node.collect_refs(&mut imports);
    }

    Ok(OperationDescriptor {
        name: normalize_name(name),
        operation_id: op.operation_id.clone(),
        method,
        path: path.to_string(),
        summary: op.summary.clone(),
        tags: op.tags.clone(),
        parameters,
        response,
        consumes,
        imports,
    })
}

fn resolve_parameter<'a>(
    param: &'a ParameterOrRef,
    components: &'a Components,
) -> Result<&'a Parameter, ResolveError> {
    match param {
        ParameterOrRef::Parameter(p) => Ok(p),
        ParameterOrRef::Ref { ref_path } => {
            let target = component_name(ref_path, "#/components/parameters/")?;
            match components.parameters.get(target) {
                Some(ParameterOrRef::Parameter(p)) => Ok(p),
                _ => Err(ResolveError::RefTargetNotFound(ref_path.clone())),
            }
        }
    }
}

fn resolve_request_body<'a>(
    body: &'a RequestBodyOrRef,
    components: &'a Components,
) -> Result<&'a RequestBody, ResolveError> {
    match body {
        RequestBodyOrRef::RequestBody(b) => Ok(b),
        RequestBodyOrRef::Ref { ref_path } => {
            let target = component_name(ref_path, "#/components/requestBodies/")?;
            match components.request_bodies.get(target) {
                Some(RequestBodyOrRef::RequestBody(b)) => Ok(b),
                _ => Err(ResolveError::RefTargetNotFound(ref_path.clone())),
            }
        }
    }
}

fn component_name<'a>(ref_path: &'a str, prefix: &str) -> Result<&'a str, ResolveError> {
    ref_path
        .strip_prefix(prefix)
        .ok_or_else(|| ResolveError::InvalidRefFormat(ref_path.to_string()))
}

fn to_ir_parameter(param: &Parameter) -> IrParameter {
    let location = match param.location {
        parameter::ParameterLocation::Path => ParameterLocation::Path,
        parameter::ParameterLocation::Query => ParameterLocation::Query,
        parameter::ParameterLocation::Header => ParameterLocation::Header,
        parameter::ParameterLocation::Cookie => ParameterLocation::Cookie,
    };
    IrParameter {
        name: normalize_name(&param.name),
        original_name: param.name.clone(),
        location,
        schema: param
            .schema
            .as_ref()
            .map(schema_or_ref_to_node)
            .unwrap_or_else(|| SchemaNode::new(SchemaKind::Any)),
        // Path parameters are always required
        required: param.required || location == ParameterLocation::Path,
        description: param.description.clone(),
    }
}

/// Form bodies become one parameter per property; anything else is a single body parameter.
fn body_parameters(
    body: &RequestBody,
    components: &Components,
) -> Result<Vec<IrParameter>, ResolveError> {
    let Some((content_type, media)) = body.content.first() else {
        return Ok(Vec::new());
    };
    let Some(schema_or_ref) = media.schema.as_ref() else {
        return Ok(Vec::new());
    };

    if content_type != FORM_URLENCODED && content_type != MULTIPART_FORM {
        let original_name = match schema_or_ref {
            SchemaOrRef::Ref { ref_path } => normalize_name(ref_name(ref_path)).camel_case,
            SchemaOrRef::Schema(_) => "body".to_string(),
        };
        return Ok(vec![IrParameter {
            name: normalize_name(&original_name),
            original_name,
            location: ParameterLocation::Body,
            schema: schema_or_ref_to_node(schema_or_ref),
            required: body.required,
            description: body.description.clone(),
        }]);
    }

    let schema = match schema_or_ref {
        SchemaOrRef::Schema(s) => s.as_ref(),
        SchemaOrRef::Ref { ref_path } => match components.schemas.get(ref_name(ref_path)) {
            Some(SchemaOrRef::Schema(s)) => s.as_ref(),
            _ => return Err(ResolveError::RefTargetNotFound(ref_path.clone())),
        },
    };

    Ok(schema
        .properties
        .iter()
        .map(|(name, prop)| {
            let node = schema_or_ref_to_node(prop);
            let location = if node.kind == SchemaKind::Binary {
                ParameterLocation::File
            } else {
                ParameterLocation::Form
            };
            IrParameter {
                name: normalize_name(name),
                original_name: name.clone(),
                location,
                schema: node,
                required: schema.required.contains(name),
                description: None,
            }
        })
        .collect())
}

/// The lowest 2xx response, falling back to `default`.
fn success_response(responses: &IndexMap<String, Response>) -> Option<&Response> {
    responses
        .iter()
        .filter(|(code, _)| code.starts_with('2'))
        .min_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, resp)| resp)
        .or_else(|| responses.get("default"))
}

fn validate_refs(
    components: &Components,
    models: &[ModelDescriptor],
    operations: &[OperationDescriptor],
) -> Result<(), ResolveError> {
    let referenced = models
        .iter()
        .flat_map(|m| m.imports.iter())
        .chain(operations.iter().flat_map(|op| op.imports.iter()));

    for name in referenced {
        if !components.schemas.contains_key(name) {
            return Err(ResolveError::RefTargetNotFound(format!(
                "#/components/schemas/{name}"
            )));
        }
    }
    Ok(())
}

fn group_into_modules(operations: &[OperationDescriptor]) -> Vec<IrModule> {
    let mut tag_groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();

    for (i, op) in operations.iter().enumerate() {
        let tag = op.tags.first().map_or("default", String::as_str);
        tag_groups.entry(tag.to_string()).or_default().push(i);
    }

    tag_groups
        .into_iter()
        .map(|(name, ops)| IrModule {
            name: normalize_name(&name),
            operations: ops,
        })
        .collect()
}
