//! Registry model.
//!
//! A [`Registry`] is the typed view of one registry document: type
//! declarations, enumerated constants, functions, versioned features and
//! extensions.
//!
//! ```text
//! <registry>
//! ├── <types>      → Keyed<Typedef>      (declaration order kept as ordinal)
//! ├── <enums>*     → Keyed<EnumConstant>
//! ├── <commands>   → Keyed<Function>
//! ├── <feature>*   → Vec<Feature>        (document order)
//! └── <extensions> → Vec<Extension>      (document order)
//! ```
//!
//! The model is immutable once built, apart from the one-time overload phase
//! (see [`crate::overload`]); it is `Sync` and can be shared by parallel
//! resolutions.

mod builder;
pub mod model;

use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::base::{Keyed, Version};
use crate::error::{RegistryError, Result};
use crate::xml;

pub use model::{AddRemoveSet, EnumConstant, Extension, Feature, Function, Overload, Typedef};

/// Typed collections decoded from one registry document.
#[derive(Debug, Clone)]
pub struct Registry {
    pub(crate) functions: Keyed<Function>,
    pub(crate) constants: Keyed<EnumConstant>,
    pub(crate) typedefs: Keyed<Typedef>,
    pub(crate) features: Vec<Feature>,
    pub(crate) extensions: Vec<Extension>,
}

impl Registry {
    /// Decode a registry document.
    pub fn from_bytes(input: &[u8]) -> Result<Self> {
        let root = xml::parse_document(input)?;
        builder::build_registry(&root)
    }

    /// Read and decode a registry document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        debug!("Read registry {} ({} bytes)", path.display(), bytes.len());
        Self::from_bytes(&bytes)
    }

    pub fn functions(&self) -> &Keyed<Function> {
        &self.functions
    }

    pub fn constants(&self) -> &Keyed<EnumConstant> {
        &self.constants
    }

    pub fn typedefs(&self) -> &Keyed<Typedef> {
        &self.typedefs
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    /// Function `name` as declared for `api`, falling back to the agnostic declaration.
    pub fn function(&self, name: &str, api: &str) -> Option<&Function> {
        self.functions.lookup(name, api)
    }

    /// Constant `name` as declared for `api`, falling back to the agnostic declaration.
    pub fn constant(&self, name: &str, api: &str) -> Option<&EnumConstant> {
        self.constants.lookup(name, api)
    }

    /// Typedef `name` as declared for `api`, falling back to the agnostic declaration.
    pub fn typedef(&self, name: &str, api: &str) -> Option<&Typedef> {
        self.typedefs.lookup(name, api)
    }

    /// Whether some feature of `api` is at exactly `version`.
    ///
    /// The wildcard version matches any feature of the API.
    pub fn has_package(&self, api: &str, version: &Version) -> bool {
        self.features
            .iter()
            .any(|f| f.api == api && version.compare(&f.version).is_eq())
    }

    /// Distinct API names declared by features, in document order.
    pub fn apis(&self) -> Vec<&str> {
        let mut apis: Vec<&str> = Vec::new();
        for feature in &self.features {
            if !apis.contains(&feature.api.as_str()) {
                apis.push(&feature.api);
            }
        }
        apis
    }
}

impl FromStr for Registry {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bytes(s.as_bytes())
    }
}
