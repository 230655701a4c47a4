//! Registry entities.
//!
//! Everything here is built once per registry document and read-only
//! afterwards, except [`Function::overloads`], which the overload phase fills
//! in before any resolution runs.

use indexmap::IndexSet;
use regex::Regex;

use crate::base::Version;
use crate::decl::{Parameter, SemanticType};

// ============================================================================
// DECLARATIONS
// ============================================================================

/// A function (registry `<command>`).
///
/// Several APIs may declare the same name with different signatures; each
/// `(name, api)` pair is a distinct entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    /// `None` for API-agnostic declarations.
    pub api: Option<String>,
    pub parameters: Vec<Parameter>,
    pub return_type: SemanticType,
    /// Alternate call signatures produced from override documents.
    pub overloads: Vec<Overload>,
}

impl Function {
    /// True when any parameter has a callback type.
    pub fn takes_callback(&self) -> bool {
        self.parameters.iter().any(|p| p.ty.is_callback())
    }

    /// True when any parameter is a debug-message callback.
    pub fn takes_debug_callback(&self) -> bool {
        self.parameters.iter().any(|p| p.ty.is_debug_callback())
    }
}

/// An alternate call signature of an existing function.
///
/// Parameters and return type are value copies of the base function, changed
/// only at the overridden indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overload {
    /// Name of the function this overload calls.
    pub target_name: String,
    pub overload_name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: SemanticType,
}

/// An enumerated constant. `value` keeps the registry's numeric text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConstant {
    pub name: String,
    pub value: String,
    pub api: Option<String>,
}

/// A type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typedef {
    pub name: String,
    pub raw_declaration: String,
    /// Name of another typedef this one depends on.
    pub requires: Option<String>,
    pub api: Option<String>,
    /// Position among the document's type declarations.
    pub ordinal: usize,
}

// ============================================================================
// FEATURES AND EXTENSIONS
// ============================================================================

/// Names added and removed by one profile/API partition of a feature or extension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddRemoveSet {
    /// `None` matches every requested profile.
    pub profile: Option<String>,
    /// `None` matches every requested API.
    pub api: Option<String>,
    pub added_functions: IndexSet<String>,
    pub added_constants: IndexSet<String>,
    pub removed_functions: IndexSet<String>,
    pub removed_constants: IndexSet<String>,
}

impl AddRemoveSet {
    /// Whether this set takes part in a package for `api` and `profile`.
    pub fn applies_to(&self, api: &str, profile: &str) -> bool {
        let profile_ok = self.profile.as_deref().is_none_or(|p| p == profile);
        let api_ok = self.api.as_deref().is_none_or(|a| a == api);
        profile_ok && api_ok
    }

    pub fn has_removals(&self) -> bool {
        !self.removed_functions.is_empty() || !self.removed_constants.is_empty()
    }
}

/// One version milestone of one API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    /// Declared feature name, e.g. `GL_VERSION_3_2`.
    pub name: String,
    pub api: String,
    pub version: Version,
    pub sets: Vec<AddRemoveSet>,
}

/// An optional bundle of additions scoped to the APIs its pattern accepts.
#[derive(Debug, Clone)]
pub struct Extension {
    pub name: String,
    /// The `supported` attribute as written in the registry.
    pub supported: String,
    /// `supported`, compiled to match a whole API token.
    pub applicable_api: Regex,
    pub sets: Vec<AddRemoveSet>,
}

impl Extension {
    pub fn supports(&self, api_token: &str) -> bool {
        self.applicable_api.is_match(api_token)
    }
}
