use thiserror::Error;

/// Failure to read an OpenAPI document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid OpenAPI YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("invalid OpenAPI JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported OpenAPI version {0}, expected 3.x")]
    UnsupportedVersion(String),
}

/// A `$ref` that cannot be followed. Generation stops on the first one.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("malformed $ref `{0}`")]
    InvalidRefFormat(String),

    #[error("$ref `{0}` does not name a component")]
    RefTargetNotFound(String),
}

#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
