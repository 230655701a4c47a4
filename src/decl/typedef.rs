//! Type declarations (`<type>` elements).

use crate::error::{RegistryError, Result};
use crate::xml::{XmlNode, render_markup};

/// Calling-convention placeholder inside function-pointer typedefs.
const APIENTRY_MARKER: &str = "apientry";
const NAME_MARKER: &str = "name";

/// A parsed type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedefDecl {
    /// Name given by an inner `<name>` marker, if any.
    pub name: Option<String>,
    /// Full declaration text, declared name included.
    pub raw_declaration: String,
}

/// Parse the content of a `<type>` element.
///
/// Unlike parameter declarations, the declared name stays part of the raw
/// text: the typedef is emitted verbatim.
pub fn parse_typedef(nodes: &[XmlNode]) -> Result<TypedefDecl> {
    let mut name = None;
    let mut raw = String::new();

    for node in nodes {
        match node {
            XmlNode::Text(text) => raw.push_str(text),
            XmlNode::Element(marker) => match marker.name.as_str() {
                NAME_MARKER => {
                    if let Some(nested) = marker.elements().next() {
                        return Err(RegistryError::unknown_marker(
                            &nested.name,
                            render_markup(nodes),
                        ));
                    }
                    let text = marker.text();
                    raw.push_str(&text);
                    name = Some(text);
                }
                APIENTRY_MARKER => raw.push_str("APIENTRY"),
                other => return Err(RegistryError::unknown_marker(other, render_markup(nodes))),
            },
        }
    }

    Ok(TypedefDecl {
        name,
        raw_declaration: raw,
    })
}
