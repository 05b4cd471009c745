//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod stub;

use crate::model::FunctionDescriptor;
use anyhow::{anyhow, Result};

/// Trait for rendering the registered functions into a specific output format.
///
/// Implementations always emit the bootstrap entry ahead of `functions`.
pub trait Renderer {
    fn render(&self, functions: &[FunctionDescriptor]) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "pyi" | "stub" => Ok(Box::new(stub::StubRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use pyi or json", format)),
    }
}
