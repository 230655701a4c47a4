//! The resolved package and its post-processing.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;

use crate::base::Version;
use crate::registry::{EnumConstant, Function, Typedef};

/// A function of a resolved package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFunction {
    pub function: Function,
    pub required: bool,
    /// Extensions that contribute this function, in registry order.
    pub extensions: Vec<String>,
}

/// Functions, constants and typedefs to emit for one `(api, version, profile)`.
///
/// Functions and constants are keyed by name, so iteration is alphabetical
/// and two resolutions of the same request compare equal. Typedefs keep
/// registry declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPackage {
    pub api: String,
    pub version: Version,
    pub profile: String,
    pub functions: BTreeMap<String, PackageFunction>,
    pub constants: BTreeMap<String, EnumConstant>,
    pub typedefs: Vec<Typedef>,
}

impl ResolvedPackage {
    /// True when at least one function must bind to a native symbol.
    pub fn has_required_functions(&self) -> bool {
        self.functions.values().any(|f| f.required)
    }

    /// True when some function accepts a debug-message callback.
    pub fn has_debug_callback(&self) -> bool {
        self.functions.values().any(|f| f.function.takes_debug_callback())
    }

    /// Keep only whitelisted entries. An empty name set leaves that kind untouched.
    pub fn filter(&mut self, whitelist: &Whitelist) {
        if !whitelist.constants.is_empty() {
            self.constants.retain(|name, _| whitelist.constants.contains(name));
        }
        if !whitelist.functions.is_empty() {
            self.functions.retain(|name, _| whitelist.functions.contains(name));
        }
    }
}

/// Allowed constant and function names for [`ResolvedPackage::filter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Deserialize))]
pub struct Whitelist {
    #[cfg_attr(feature = "json", serde(default, alias = "Enums"))]
    pub constants: FxHashSet<String>,
    #[cfg_attr(feature = "json", serde(default, alias = "Functions"))]
    pub functions: FxHashSet<String>,
}

impl Whitelist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_constants<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constants.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_functions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.functions.extend(names.into_iter().map(Into::into));
        self
    }

    /// Decode a restriction document of the form
    /// `{ "Enums": [...], "Functions": [...] }`.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::error::RegistryError::Json(e.to_string()))
    }
}
