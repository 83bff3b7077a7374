use std::fmt;

use super::operations::OperationDescriptor;
use super::schemas::ModelDescriptor;

/// The resolved descriptors of one OpenAPI document, ready for a target generator.
#[derive(Debug, Clone)]
pub struct IrSpec {
    pub info: IrInfo,
    pub models: Vec<ModelDescriptor>,
    pub operations: Vec<OperationDescriptor>,
    pub groups: Vec<IrModule>,
}

/// API metadata.
#[derive(Debug, Clone)]
pub struct IrInfo {
    pub title: String,
    pub description: Option<String>,
    pub version: String,
}

/// An operation group (one tag), emitted as one API class.
#[derive(Debug, Clone)]
pub struct IrModule {
    pub name: NormalizedName,
    pub operations: Vec<usize>, // indices into IrSpec.operations
}

/// A name with multiple casing variants pre-computed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedName {
    pub original: String,
    pub pascal_case: String,
    pub camel_case: String,
    pub snake_case: String,
    pub screaming_snake: String,
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}
