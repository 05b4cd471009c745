//! Docstring assembly for a single function descriptor.
//!
//! A docstring is made of up to three paragraphs, always in this order:
//! the wrapped summary, a `see <url>` link to the reference page, and the
//! return type. The link only accompanies a summary.

use crate::model::{Doc, TypeRef};
use crate::wrap::{wrap, WRAP_WIDTH};

/// Base of the reference documentation site.
pub const DOCS_BASE_URL: &str = "https://postgis.net/docs";

/// URL of the reference page with the given id.
pub fn reference_url(reference_id: &str) -> String {
    format!("{}/{}.html", DOCS_BASE_URL, reference_id)
}

/// Build the docstring for `name`.
///
/// Returns an empty string when there is neither documentation nor a return
/// type.
pub fn build_docstring(name: &str, doc: Option<&Doc>, return_type: Option<&TypeRef>) -> String {
    let mut paragraphs: Vec<String> = Vec::new();

    if let Some(doc) = doc {
        paragraphs.push(wrap(doc.summary(), WRAP_WIDTH).join("\n"));
        paragraphs.push(format!("see {}", reference_url(doc.reference_id(name))));
    }

    if let Some(return_type) = return_type {
        paragraphs.push(format!(
            "Return type: :class:`{}`.",
            return_type.qualified_name()
        ));
    }

    paragraphs.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_document() {
        assert_eq!(build_docstring("ST_Foo", None, None), "");
    }

    #[test]
    fn plain_text_links_to_function_page() {
        let doc = Doc::text("Returns the area of a polygonal geometry.");
        assert_eq!(
            build_docstring("ST_Area", Some(&doc), None),
            "Returns the area of a polygonal geometry.\n\n\
             see https://postgis.net/docs/ST_Area.html"
        );
    }

    #[test]
    fn reference_pair_links_to_reference_page() {
        let doc = Doc::reference("Returns the width of the raster in pixels.", "RT_ST_Width");
        let docstring = build_docstring("ST_Width", Some(&doc), None);
        assert!(docstring.contains("see https://postgis.net/docs/RT_ST_Width.html"));
        assert!(!docstring.contains("docs/ST_Width.html"));
    }

    #[test]
    fn return_type_is_last_paragraph() {
        let doc = Doc::text("Returns the X coordinate of a Point.");
        let float = TypeRef::builtin("float");
        let docstring = build_docstring("ST_X", Some(&doc), Some(&float));
        assert_eq!(
            docstring,
            "Returns the X coordinate of a Point.\n\n\
             see https://postgis.net/docs/ST_X.html\n\n\
             Return type: :class:`builtins.float`."
        );
    }

    #[test]
    fn return_type_without_doc() {
        let geometry = TypeRef::new("geoalchemy2.types", "Geometry");
        assert_eq!(
            build_docstring("ST_Foo", None, Some(&geometry)),
            "Return type: :class:`geoalchemy2.types.Geometry`."
        );
    }

    #[test]
    fn long_summary_is_wrapped() {
        let summary = "word ".repeat(60);
        let doc = Doc::Text(summary.into());
        let docstring = build_docstring("ST_Long", Some(&doc), None);
        let (text, link) = docstring.split_once("\n\n").unwrap();
        assert!(text.lines().count() > 1);
        assert!(text.lines().all(|l| l.chars().count() <= WRAP_WIDTH));
        assert_eq!(link, "see https://postgis.net/docs/ST_Long.html");
    }
}
