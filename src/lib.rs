//! # apispec
//!
//! Reads machine-readable API registries and resolves them into the exact
//! functions, constants and type declarations one `(api, version, profile)`
//! package must declare.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! resolve   → Feature/extension replay, typedef closure, package assembly
//!   ↓
//! overload  → Override documents, alternate call signatures
//!   ↓
//! registry  → Immutable registry model built from a document
//!   ↓
//! decl      → Declaration micro-parser, type classification
//!   ↓
//! xml       → Element tree over quick-xml events
//!   ↓
//! base      → Primitives (Version, SpecRef, Keyed)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use apispec::{OverloadDocument, PackageRequest, Registry};
//!
//! # fn main() -> apispec::Result<()> {
//! let mut registry = Registry::from_path("xml/gl.xml")?;
//! registry.apply_overloads(&OverloadDocument::from_path("xml/overload/gl.xml")?)?;
//!
//! let request = PackageRequest::parse("gl", "3.2")?.with_profile("core");
//! let package = registry.resolve(&request)?;
//! for (name, function) in &package.functions {
//!     println!("{name} required={}", function.required);
//! }
//! # Ok(())
//! # }
//! ```

// ============================================================================
// MODULES (dependency order: base → xml → decl → registry → overload → resolve)
// ============================================================================

/// Foundation types: Version, composite keys
pub mod base;

/// Error type shared by every phase
pub mod error;

/// Event-driven XML reading into a small element tree
pub mod xml;

/// Declaration signature parser and type classifier
pub mod decl;

/// Registry model builder
pub mod registry;

/// Override documents and overload application
pub mod overload;

/// Package resolution
pub mod resolve;

pub use base::{Keyed, SpecRef, Version};
pub use decl::{Parameter, ScalarKind, SemanticType, TypeClass};
pub use error::{RegistryError, Result};
pub use overload::OverloadDocument;
pub use registry::{EnumConstant, Extension, Feature, Function, Overload, Registry, Typedef};
#[cfg(feature = "json")]
pub use resolve::RequestSpec;
pub use resolve::{
    ExtensionPolicy, PackageFunction, PackageRequest, ResolvedPackage, Whitelist, resolve_package,
    resolve_packages, select_registry,
};
