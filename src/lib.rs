//! geostubs — docstrings and Python type stubs for dynamically registered
//! spatial SQL functions.
//!
//! The pipeline is a single pass over a list of [`model::FunctionDescriptor`]s:
//! [`docstring::build_docstring`] formats each description,
//! [`indent::reindent`] nests it inside a class body, and
//! [`render::stub::generate_stub_document`] assembles the `.pyi` module.

pub mod docstring;
pub mod indent;
pub mod model;
pub mod registry;
pub mod render;
pub mod wrap;

pub use docstring::build_docstring;
pub use indent::reindent;
pub use model::{Doc, FunctionDescriptor, TypeRef};
pub use registry::Registry;
pub use render::stub::generate_stub_document;
