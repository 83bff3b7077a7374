pub mod config;
pub mod error;
pub mod ir;
pub mod parse;
pub mod transform;

/// Trait for target generators that turn the resolved IR into a generation context.
///
/// The context is handed to template rendering, which lives outside this workspace.
pub trait CodeGenerator {
    type Config;
    type Output;
    type Error: std::error::Error;
    fn generate(&self, ir: &ir::IrSpec, config: &Self::Config)
    -> Result<Self::Output, Self::Error>;
}
