pub mod config;
pub mod default_value;
pub mod error;
pub mod generator;
pub mod imports;
pub mod model;
pub mod naming;
pub mod operation;
pub mod type_expr;
pub mod type_mapper;
pub mod type_resolver;

pub use config::{PistacheConfig, PistacheSettings, load_config};
pub use error::GeneratorError;
pub use generator::{PistacheContext, PistacheServerGenerator};
pub use type_resolver::TypeResolver;
