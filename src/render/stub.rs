//! Python type-stub renderer.
//!
//! Emits a `.pyi` module declaring one `GenericFunction` subclass and one
//! module attribute per function, so that editors and type checkers see the
//! dynamically registered SQL functions.

use crate::docstring::build_docstring;
use crate::indent::reindent;
use crate::model::FunctionDescriptor;
use crate::registry::with_bootstrap;
use crate::render::Renderer;
use anyhow::Result;

pub struct StubRenderer;

/// Indentation of a class body.
pub const INDENT: &str = "    ";

/// Fixed preamble: imports and the placeholder base declarations.
pub const HEADER: &str = r#"# this file is automatically generated
from typing import Any
from typing import List

from sqlalchemy.sql import functions
from sqlalchemy.sql.elements import ColumnElement

import geoalchemy2.types

class GenericFunction(functions.GenericFunction): ...

class TableRowElement(ColumnElement):
    inherit_cache: bool = ...
    """The cache is disabled for this class."""

    def __init__(self, selectable: bool) -> None: ...
    @property
    def _from_objects(self) -> List[bool]: ...  # type: ignore[override]
"#;

impl Renderer for StubRenderer {
    fn render(&self, functions: &[FunctionDescriptor]) -> Result<String> {
        Ok(generate_stub_document(functions))
    }

    fn file_extension(&self) -> &str {
        "pyi"
    }
}

/// Render the full stub module: header, then the bootstrap entry and every
/// function in `functions`, separated by blank lines.
pub fn generate_stub_document(functions: &[FunctionDescriptor]) -> String {
    let mut parts = vec![HEADER.to_string()];
    parts.extend(with_bootstrap(functions).map(render_declaration));
    parts.join("\n")
}

/// Render the class and module attribute declaring one function.
pub fn render_declaration(func: &FunctionDescriptor) -> String {
    let doc = reindent(
        &build_docstring(&func.name, func.doc.as_ref(), func.return_type.as_ref()),
        INDENT,
    );
    let annotation = func
        .return_type
        .as_ref()
        .map_or_else(|| "Any".to_string(), |t| t.annotation());

    format!(
        r#"class _{name}(functions.GenericFunction):
    """
    {doc}
    """

    def __call__(self, *args: Any, **kwargs: Any) -> {annotation}: ...

{name}: _{name}
"#,
        name = func.name,
        doc = doc,
        annotation = annotation,
    )
}
