//! Parameter and return-value declarations.

use crate::error::{RegistryError, Result};
use crate::xml::{XmlElement, XmlNode, parse_fragment, render_markup};

use super::types::SemanticType;

/// Marker wrapping the base type.
const TYPE_MARKER: &str = "ptype";
/// Marker wrapping the declared name.
const NAME_MARKER: &str = "name";

/// Deepest pointer run the registry format produces.
pub const MAX_POINTER_DEPTH: usize = 2;

/// Parse one declaration fragment into its declared name and semantic type.
///
/// The name is empty when the fragment has no `<name>` marker, as in the
/// replacement types of override documents.
///
/// # Errors
///
/// [`RegistryError::MalformedDeclaration`] for any marker other than
/// `<ptype>` and `<name>`, a second array dimension, or more than
/// [`MAX_POINTER_DEPTH`] levels of indirection.
pub fn parse_signature(nodes: &[XmlNode]) -> Result<(String, SemanticType)> {
    let mut name = String::new();
    let mut raw = String::new();
    let mut base_name: Option<String> = None;
    let mut pointer_depth = 0usize;
    let mut is_const = false;

    for node in nodes {
        match node {
            XmlNode::Text(text) => {
                raw.push_str(text);
                pointer_depth += text.matches('*').count();
                for word in words(text) {
                    match word {
                        "void" => base_name = Some("void".to_string()),
                        "const" => is_const = true,
                        _ => {}
                    }
                }
            }
            XmlNode::Element(marker) => match marker.name.as_str() {
                TYPE_MARKER => {
                    let text = marker_text(marker, nodes)?;
                    base_name = Some(text.trim().to_string());
                    raw.push_str(&text);
                }
                NAME_MARKER => {
                    name = marker_text(marker, nodes)?.trim().to_string();
                }
                other => return Err(RegistryError::unknown_marker(other, render_markup(nodes))),
            },
        }
    }

    // The array suffix is plain text that usually follows the name marker.
    if let Some(open) = raw.find('[') {
        let close = raw[open..]
            .find(']')
            .map(|offset| open + offset)
            .ok_or_else(|| {
                RegistryError::malformed("unterminated array dimension", render_markup(nodes))
            })?;
        raw.replace_range(open..=close, "*");
        pointer_depth += 1;
        if raw.contains('[') {
            return Err(RegistryError::malformed(
                "more than one array dimension",
                render_markup(nodes),
            ));
        }
    }

    if pointer_depth > MAX_POINTER_DEPTH {
        return Err(RegistryError::malformed(
            format!("pointer depth {pointer_depth} exceeds {MAX_POINTER_DEPTH}"),
            render_markup(nodes),
        ));
    }

    let base_name = base_name.unwrap_or_else(|| derive_base_name(&raw));
    let ty = SemanticType {
        base_name,
        pointer_depth: pointer_depth as u8,
        is_const,
        raw_declaration: raw,
        cast_hint: None,
    };
    Ok((name, ty))
}

/// Parse a declaration given as markup text, e.g. an override's `signature`.
pub fn parse_signature_markup(markup: &str) -> Result<(String, SemanticType)> {
    parse_signature(&parse_fragment(markup)?)
}

/// Text content of a marker; markers never nest.
fn marker_text(marker: &XmlElement, fragment: &[XmlNode]) -> Result<String> {
    if let Some(nested) = marker.elements().next() {
        return Err(RegistryError::unknown_marker(&nested.name, render_markup(fragment)));
    }
    Ok(marker.text())
}

/// Identifier-like words of a text run.
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
}

/// Base type of an unmarked declaration: the text without `const` and `*`.
fn derive_base_name(raw: &str) -> String {
    raw.split(|c: char| c.is_whitespace() || c == '*')
        .filter(|token| !token.is_empty() && *token != "const")
        .collect::<Vec<_>>()
        .join(" ")
}
