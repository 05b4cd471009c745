//! Data model for function descriptors — format-agnostic.
//!
//! Descriptors are either compiled into the crate (see `registry::builtin`,
//! which borrows `'static` text) or deserialized from a JSON registry file
//! (which owns its text). `Cow<'static, str>` covers both.

use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Module that holds the language built-ins (`str`, `float`, ...).
pub const BUILTINS_MODULE: &str = "builtins";

/// A fully-qualified reference to the return type of a function.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct TypeRef {
    pub module: Cow<'static, str>,
    pub name: Cow<'static, str>,
}

impl TypeRef {
    pub const fn new(module: &'static str, name: &'static str) -> Self {
        Self {
            module: Cow::Borrowed(module),
            name: Cow::Borrowed(name),
        }
    }

    pub const fn builtin(name: &'static str) -> Self {
        Self::new(BUILTINS_MODULE, name)
    }

    /// `"<module>.<name>"`, as used in the docstring's return type line.
    pub fn qualified_name(&self) -> String {
        self.to_string()
    }

    pub fn is_builtin(&self) -> bool {
        self.module == BUILTINS_MODULE
    }

    /// The annotation used in a stub signature: built-ins are written bare,
    /// everything else fully qualified.
    pub fn annotation(&self) -> String {
        if self.is_builtin() {
            self.name.to_string()
        } else {
            self.qualified_name()
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.module, self.name)
    }
}

/// Parse `"geoalchemy2.types.Geometry"` (split at the last dot) or a bare
/// built-in name such as `"float"`.
impl FromStr for TypeRef {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (module, name) = s.rsplit_once('.').unwrap_or((BUILTINS_MODULE, s));
        if module.is_empty() || name.is_empty() {
            return Err(anyhow!("invalid type reference: {:?}", s));
        }
        Ok(Self {
            module: Cow::Owned(module.to_string()),
            name: Cow::Owned(name.to_string()),
        })
    }
}

impl TryFrom<String> for TypeRef {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Documentation attached to a function.
///
/// In JSON, a plain string is `Text`; a two-element array is `Reference`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Doc {
    /// Summary whose reference page is named after the function itself.
    Text(Cow<'static, str>),
    /// Summary plus an explicit reference page id (e.g. `RT_ST_Band`).
    Reference(Cow<'static, str>, Cow<'static, str>),
}

impl Doc {
    pub const fn text(summary: &'static str) -> Self {
        Doc::Text(Cow::Borrowed(summary))
    }

    pub const fn reference(summary: &'static str, reference_id: &'static str) -> Self {
        Doc::Reference(Cow::Borrowed(summary), Cow::Borrowed(reference_id))
    }

    pub fn summary(&self) -> &str {
        match self {
            Doc::Text(summary) | Doc::Reference(summary, _) => summary,
        }
    }

    /// Page id on the reference site; falls back to the function name.
    pub fn reference_id<'a>(&'a self, name: &'a str) -> &'a str {
        match self {
            Doc::Text(_) => name,
            Doc::Reference(_, id) => id,
        }
    }
}

/// Metadata for one dynamically exposed database function.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawDescriptor")]
pub struct FunctionDescriptor {
    pub name: Cow<'static, str>,
    pub return_type: Option<TypeRef>,
    pub doc: Option<Doc>,
}

impl FunctionDescriptor {
    pub const fn new(name: &'static str, return_type: Option<TypeRef>, doc: Option<Doc>) -> Self {
        Self {
            name: Cow::Borrowed(name),
            return_type,
            doc,
        }
    }
}

/// Accepted JSON layouts for a descriptor: the registry tuple
/// `[name, type, doc]` or a record with named fields.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDescriptor {
    Tuple(String, Option<TypeRef>, Option<Doc>),
    Record {
        name: String,
        #[serde(default, rename = "type")]
        return_type: Option<TypeRef>,
        #[serde(default)]
        doc: Option<Doc>,
    },
}

impl From<RawDescriptor> for FunctionDescriptor {
    fn from(raw: RawDescriptor) -> Self {
        let (name, return_type, doc) = match raw {
            RawDescriptor::Tuple(name, return_type, doc) => (name, return_type, doc),
            RawDescriptor::Record {
                name,
                return_type,
                doc,
            } => (name, return_type, doc),
        };
        Self {
            name: Cow::Owned(name),
            return_type,
            doc,
        }
    }
}
