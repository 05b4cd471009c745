//! JSON renderer — structured output for tooling integration.
//!
//! One object per function, bootstrap entry first. The docstring is the
//! plain (not re-indented) text, for doc sites and editor plugins that do
//! their own layout.

use crate::docstring::{build_docstring, reference_url};
use crate::model::FunctionDescriptor;
use crate::registry::with_bootstrap;
use crate::render::Renderer;
use anyhow::{Context, Result};
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct FunctionEntry<'a> {
    name: &'a str,
    return_type: Option<String>,
    annotation: String,
    reference_url: Option<String>,
    docstring: String,
}

impl<'a> FunctionEntry<'a> {
    fn new(func: &'a FunctionDescriptor) -> Self {
        let return_type = func.return_type.as_ref();
        Self {
            name: &func.name,
            return_type: return_type.map(|t| t.qualified_name()),
            annotation: return_type.map_or_else(|| "Any".to_string(), |t| t.annotation()),
            reference_url: func
                .doc
                .as_ref()
                .map(|doc| reference_url(doc.reference_id(&func.name))),
            docstring: build_docstring(&func.name, func.doc.as_ref(), return_type),
        }
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, functions: &[FunctionDescriptor]) -> Result<String> {
        let entries: Vec<FunctionEntry> = with_bootstrap(functions).map(FunctionEntry::new).collect();
        let mut out =
            serde_json::to_string_pretty(&entries).context("failed to serialize functions")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
