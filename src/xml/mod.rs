//! Minimal XML element tree.
//!
//! Registry and override documents are small enough to hold in memory, and
//! declaration fragments need their mixed text/markup content kept in order,
//! so the reader turns quick-xml events into a plain tree:
//!
//! ```text
//! <param><ptype>GLuint</ptype> <name>ids</name>[2]</param>
//!
//! XmlElement "param"
//! ├── Element "ptype" ── Text "GLuint"
//! ├── Text " "
//! ├── Element "name" ── Text "ids"
//! └── Text "[2]"
//! ```

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{RegistryError, Result};

/// A node of mixed element content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An element with its attributes and ordered children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Value of an attribute, if present.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Value of an attribute, treating an empty value as absent.
    pub fn attr_non_empty(&self, key: &str) -> Option<&str> {
        self.attr(key).filter(|v| !v.is_empty())
    }

    /// Child elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(e) => Some(e),
            XmlNode::Text(_) => None,
        })
    }

    /// Child elements with the given tag name.
    pub fn elements_named<'s>(
        &'s self,
        name: &str,
    ) -> impl Iterator<Item = &'s XmlElement> + use<'s> {
        let name = name.to_string();
        self.elements().filter(move |e| e.name == name)
    }

    /// First child element with the given tag name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.elements().find(|e| e.name == name)
    }

    /// Concatenated text of all descendants.
    pub fn text(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Content re-rendered as markup, for diagnostics.
    pub fn inner_markup(&self) -> String {
        render_markup(&self.children)
    }
}

fn collect_text(nodes: &[XmlNode], out: &mut String) {
    for node in nodes {
        match node {
            XmlNode::Text(t) => out.push_str(t),
            XmlNode::Element(e) => collect_text(&e.children, out),
        }
    }
}

/// Render nodes back into (unescaped) markup.
pub fn render_markup(nodes: &[XmlNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            XmlNode::Text(t) => out.push_str(t),
            XmlNode::Element(e) if e.children.is_empty() => {
                out.push_str(&format!("<{}/>", e.name));
            }
            XmlNode::Element(e) => {
                out.push_str(&format!("<{}>{}</{}>", e.name, e.inner_markup(), e.name));
            }
        }
    }
    out
}

// ============================================================================
// READER
// ============================================================================

/// Parse a whole document and return its root element.
pub fn parse_document(input: &[u8]) -> Result<XmlElement> {
    let mut reader = Reader::from_reader(input);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if root.is_some() {
                    return Err(RegistryError::xml("content after the root element"));
                }
                stack.push(start_element(e)?);
            }
            Ok(Event::Empty(ref e)) => {
                let element = start_element(e)?;
                close_element(element, &mut stack, &mut root)?;
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| RegistryError::xml("unbalanced end tag"))?;
                close_element(element, &mut stack, &mut root)?;
            }
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|e| RegistryError::xml(format!("Text error: {e}")))?;
                push_text(&mut stack, &text);
            }
            Ok(Event::CData(ref e)) => {
                let text = std::str::from_utf8(e)
                    .map_err(|e| RegistryError::xml(format!("Invalid UTF-8 in CDATA: {e}")))?;
                push_text(&mut stack, text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(RegistryError::xml(format!(
                    "XML parse error at position {}: {e}",
                    reader.error_position()
                )));
            }
            // Declarations, comments, processing instructions, doctypes
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(RegistryError::xml(format!("unclosed element <{}>", open.name)));
    }
    root.ok_or_else(|| RegistryError::xml("document has no root element"))
}

/// Parse a markup fragment such as `const <ptype>GLuint</ptype> *`.
pub fn parse_fragment(markup: &str) -> Result<Vec<XmlNode>> {
    let wrapped = format!("<fragment>{markup}</fragment>");
    Ok(parse_document(wrapped.as_bytes())?.children)
}

fn start_element(e: &BytesStart<'_>) -> Result<XmlElement> {
    let name = std::str::from_utf8(e.name().as_ref())
        .map_err(|e| RegistryError::xml(format!("Invalid tag name: {e}")))?
        .to_string();

    let mut attributes = Vec::new();
    for attr_result in e.attributes() {
        let attr =
            attr_result.map_err(|e| RegistryError::xml(format!("Attribute error: {e}")))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| RegistryError::xml(format!("Attribute key error: {e}")))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| RegistryError::xml(format!("Attribute value error: {e}")))?
            .to_string();
        attributes.push((key, value));
    }

    Ok(XmlElement {
        name,
        attributes,
        children: Vec::new(),
    })
}

fn close_element(
    element: XmlElement,
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(XmlNode::Element(element)),
        None if root.is_none() => *root = Some(element),
        None => return Err(RegistryError::xml("multiple root elements")),
    }
    Ok(())
}

fn push_text(stack: &mut [XmlElement], text: &str) {
    // Whitespace between the prolog and the root has no parent.
    let Some(parent) = stack.last_mut() else {
        return;
    };
    if let Some(XmlNode::Text(last)) = parent.children.last_mut() {
        last.push_str(text);
    } else {
        parent.children.push(XmlNode::Text(text.to_string()));
    }
}
