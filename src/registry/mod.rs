//! Function registry — the ordered list of descriptors to generate stubs for.
//!
//! The registry starts either empty or from the built-in table and can be
//! extended with JSON registry files. The bootstrap entry is never part of the
//! registry itself; renderers prepend it (see [`with_bootstrap`]).

pub mod builtin;

use crate::model::FunctionDescriptor;
use anyhow::{bail, Context, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, warn};

static RE_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Ordered, name-unique collection of function descriptors.
#[derive(Debug, Default)]
pub struct Registry {
    functions: Vec<FunctionDescriptor>,
}

impl Registry {
    /// Registry pre-populated with [`builtin::FUNCTIONS`].
    pub fn builtin() -> Self {
        Self {
            functions: builtin::FUNCTIONS.to_vec(),
        }
    }

    /// Append descriptors in order.
    ///
    /// A descriptor whose name is already registered replaces the earlier one
    /// in place. Descriptors named like the bootstrap entry are skipped.
    pub fn extend<I>(&mut self, descriptors: I, origin: &str)
    where
        I: IntoIterator<Item = FunctionDescriptor>,
    {
        for descriptor in descriptors {
            if descriptor.name == builtin::BOOTSTRAP.name {
                warn!(
                    name = %descriptor.name,
                    origin,
                    "skipping entry: this function is always emitted from its hand-written definition"
                );
                continue;
            }
            match self.functions.iter_mut().find(|f| f.name == descriptor.name) {
                Some(existing) => {
                    debug!(name = %descriptor.name, origin, "overriding registered function");
                    *existing = descriptor;
                }
                None => self.functions.push(descriptor),
            }
        }
    }

    pub fn functions(&self) -> &[FunctionDescriptor] {
        &self.functions
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// The bootstrap descriptor followed by `functions`, in order.
pub fn with_bootstrap(
    functions: &[FunctionDescriptor],
) -> impl Iterator<Item = &FunctionDescriptor> {
    std::iter::once(&builtin::BOOTSTRAP).chain(functions)
}

/// Parse a JSON registry: an array of descriptors.
pub fn parse(content: &str) -> Result<Vec<FunctionDescriptor>> {
    let descriptors: Vec<FunctionDescriptor> =
        serde_json::from_str(content).context("invalid registry JSON")?;
    for (i, descriptor) in descriptors.iter().enumerate() {
        if !RE_IDENTIFIER.is_match(&descriptor.name) {
            bail!(
                "entry {}: function name {:?} is not a valid identifier",
                i,
                descriptor.name
            );
        }
    }
    Ok(descriptors)
}

/// Read and parse a JSON registry file.
pub fn load_file(path: &Path) -> Result<Vec<FunctionDescriptor>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let descriptors =
        parse(&content).with_context(|| format!("failed to load registry {}", path.display()))?;
    debug!(path = %path.display(), count = descriptors.len(), "loaded registry");
    Ok(descriptors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Doc, TypeRef};

    #[test]
    fn empty_by_default() {
        assert!(Registry::default().is_empty());
    }

    #[test]
    fn builtin_matches_table() {
        assert_eq!(Registry::builtin().len(), builtin::FUNCTIONS.len());
    }

    #[test]
    fn extend_appends_in_order() {
        let mut registry = Registry::default();
        registry.extend(
            vec![
                FunctionDescriptor::new("ST_B", None, None),
                FunctionDescriptor::new("ST_A", None, None),
            ],
            "test",
        );
        let names: Vec<&str> = registry.functions().iter().map(|f| &*f.name).collect();
        assert_eq!(names, vec!["ST_B", "ST_A"]);
    }

    #[test]
    fn extend_overrides_in_place() {
        let mut registry = Registry::default();
        registry.extend(
            vec![
                FunctionDescriptor::new("ST_A", None, None),
                FunctionDescriptor::new("ST_B", None, None),
                FunctionDescriptor::new("ST_A", Some(TypeRef::builtin("int")), None),
            ],
            "test",
        );
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.functions()[0].name, "ST_A");
        assert_eq!(
            registry.functions()[0].return_type,
            Some(TypeRef::builtin("int"))
        );
    }

    #[test]
    fn extend_skips_bootstrap_name() {
        let mut registry = Registry::default();
        registry.extend(
            vec![FunctionDescriptor::new("ST_AsGeoJSON", None, None)],
            "test",
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn bootstrap_comes_first() {
        let functions = vec![FunctionDescriptor::new("ST_A", None, None)];
        let names: Vec<&str> = with_bootstrap(&functions).map(|f| &*f.name).collect();
        assert_eq!(names, vec!["ST_AsGeoJSON", "ST_A"]);
    }

    #[test]
    fn parse_mixed_layouts() {
        let descriptors = parse(
            r#"[
                ["ST_Area", "float", "Returns the area."],
                {"name": "ST_Band", "type": "geoalchemy2.types.Raster", "doc": ["Bands.", "RT_ST_Band"]}
            ]"#,
        )
        .unwrap();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].doc, Some(Doc::text("Returns the area.")));
        assert_eq!(
            descriptors[1].return_type,
            Some(TypeRef::new("geoalchemy2.types", "Raster"))
        );
    }

    #[test]
    fn parse_rejects_bad_identifier() {
        let err = parse(r#"[["ST Area", null, null]]"#).unwrap_err();
        assert!(err.to_string().contains("not a valid identifier"));
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(parse("{").is_err());
        assert!(parse(r#"{"name": "ST_Area"}"#).is_err());
    }
}
