//! Override document decoding.

use std::path::Path;
use std::str::FromStr;

use tracing::warn;

use crate::error::{RegistryError, Result};
use crate::xml::{self, XmlElement};

const ROOT_TAG: &str = "overloads";

/// One change to the parameter at `index`: its name, its type, or both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterChange {
    pub index: usize,
    pub name: Option<String>,
    /// Replacement declaration fragment, without a name marker.
    pub signature: Option<String>,
}

/// One requested overload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverloadSpec {
    pub target_name: String,
    pub overload_name: String,
    pub changes: Vec<ParameterChange>,
}

/// A decoded override document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverloadDocument {
    pub overloads: Vec<OverloadSpec>,
}

impl OverloadDocument {
    pub fn from_bytes(input: &[u8]) -> Result<Self> {
        let root = xml::parse_document(input)?;
        if root.name != ROOT_TAG {
            return Err(RegistryError::invalid_overloads(format!(
                "expected <{ROOT_TAG}> root, found <{}>",
                root.name
            )));
        }
        let overloads = root
            .elements_named("overload")
            .map(decode_overload)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { overloads })
    }

    /// Read an override document; a missing file is an empty document.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("No override document at {}; continuing without overloads", path.display());
            return Ok(Self::default());
        }
        Self::from_bytes(&std::fs::read(path)?)
    }

    pub fn is_empty(&self) -> bool {
        self.overloads.is_empty()
    }
}

impl FromStr for OverloadDocument {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bytes(s.as_bytes())
    }
}

fn required_attr<'a>(element: &'a XmlElement, key: &str) -> Result<&'a str> {
    element.attr_non_empty(key).ok_or_else(|| {
        RegistryError::invalid_overloads(format!("<{}> without '{key}' attribute", element.name))
    })
}

fn decode_overload(element: &XmlElement) -> Result<OverloadSpec> {
    let target_name = required_attr(element, "name")?.to_string();
    let overload_name = required_attr(element, "overloadName")?.to_string();

    let changes = element
        .elements_named("parameterChanges")
        .flat_map(|changes| changes.elements_named("change"))
        .map(decode_change)
        .collect::<Result<Vec<_>>>()?;

    Ok(OverloadSpec {
        target_name,
        overload_name,
        changes,
    })
}

fn decode_change(element: &XmlElement) -> Result<ParameterChange> {
    let index_text = required_attr(element, "index")?;
    let index = index_text.trim().parse::<usize>().map_err(|_| {
        RegistryError::invalid_overloads(format!(
            "parameter index '{index_text}' is not a non-negative integer"
        ))
    })?;

    let name = element
        .child("name")
        .map(|n| required_attr(n, "value").map(str::to_string))
        .transpose()?;
    let signature = element
        .child("type")
        .map(|t| required_attr(t, "signature").map(str::to_string))
        .transpose()?;

    Ok(ParameterChange {
        index,
        name,
        signature,
    })
}
