use indexmap::IndexSet;

use super::schemas::SchemaNode;
use super::types::NormalizedName;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Trace,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Trace => "TRACE",
        }
    }
}

/// One API endpoint.
#[derive(Debug, Clone)]
pub struct OperationDescriptor {
    pub name: NormalizedName,
    pub operation_id: Option<String>,
    pub method: HttpMethod,
    /// URL template with `{param}` placeholders.
    pub path: String,
    pub summary: Option<String>,
    pub tags: Vec<String>,
    pub parameters: Vec<IrParameter>,
    /// Schema of the success response, if it declares one.
    pub response: Option<SchemaNode>,
    /// Request content types, in document order.
    pub consumes: Vec<String>,
    /// Raw import symbols (model names) collected for this operation.
    pub imports: IndexSet<String>,
}

/// A resolved parameter.
#[derive(Debug, Clone)]
pub struct IrParameter {
    pub name: NormalizedName,
    pub original_name: String,
    pub location: ParameterLocation,
    pub schema: SchemaNode,
    pub required: bool,
    pub description: Option<String>,
}

/// Parameter location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
    Body,
    Form,
    /// Binary part of a multipart form.
    File,
}

impl ParameterLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
            ParameterLocation::Body => "body",
            ParameterLocation::Form => "form",
            ParameterLocation::File => "file",
        }
    }
}
