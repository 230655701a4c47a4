//! Package resolution.
//!
//! ```text
//! PackageRequest ──► select ──────────► Selection (functions, constants)
//!                                            │
//!                    close_typedefs ◄────────┘
//!                          │
//!                          ▼
//!                    ResolvedPackage ──► filter(Whitelist)
//! ```
//!
//! Resolution reads the [`Registry`] and never mutates it, so any number of
//! requests can be resolved against one registry concurrently
//! ([`resolve_packages`]).

mod features;
mod package;
mod request;
mod typedefs;

use rayon::prelude::*;
use tracing::debug;

use crate::error::{RegistryError, Result};
use crate::registry::Registry;

pub use features::{Selection, SelectedFunction, select};
pub use package::{PackageFunction, ResolvedPackage, Whitelist};
pub use request::{CORE_PROFILE, ExtensionPolicy, PackageRequest};
#[cfg(feature = "json")]
pub use request::RequestSpec;
pub use typedefs::close_typedefs;

/// Resolve one package.
///
/// # Errors
///
/// [`RegistryError::UnresolvedReference`] when the registry names a function,
/// constant or typedef it does not declare for the requested API.
pub fn resolve_package(registry: &Registry, request: &PackageRequest) -> Result<ResolvedPackage> {
    let selection = select(registry, request)?;
    let typedefs = close_typedefs(
        registry.typedefs(),
        selection.functions.values().map(|s| s.function),
        &request.api,
    )?;

    let functions = selection
        .functions
        .into_iter()
        .map(|(name, selected)| {
            let function = PackageFunction {
                function: selected.function.clone(),
                required: selected.required,
                extensions: selected.extensions,
            };
            (name, function)
        })
        .collect();
    let constants = selection
        .constants
        .into_iter()
        .map(|(name, constant)| (name, constant.clone()))
        .collect();

    let package = ResolvedPackage {
        api: request.api.clone(),
        version: request.version,
        profile: request.profile.clone(),
        functions,
        constants,
        typedefs,
    };
    debug!(
        "Resolved {} {} '{}': {} functions, {} constants, {} typedefs",
        package.api,
        package.version,
        package.profile,
        package.functions.len(),
        package.constants.len(),
        package.typedefs.len()
    );
    Ok(package)
}

/// Resolve several packages in parallel. Results keep the order of `requests`.
pub fn resolve_packages(
    registry: &Registry,
    requests: &[PackageRequest],
) -> Vec<Result<ResolvedPackage>> {
    requests
        .par_iter()
        .map(|request| resolve_package(registry, request))
        .collect()
}

/// First registry that declares the requested package.
///
/// # Errors
///
/// [`RegistryError::UnknownPackage`] when none does.
pub fn select_registry<'r>(
    registries: &'r [Registry],
    request: &PackageRequest,
) -> Result<&'r Registry> {
    registries
        .iter()
        .find(|r| r.has_package(&request.api, &request.version))
        .ok_or_else(|| RegistryError::UnknownPackage {
            api: request.api.clone(),
            version: request.version.to_string(),
        })
}

impl Registry {
    /// Resolve `request` against this registry. See [`resolve_package`].
    pub fn resolve(&self, request: &PackageRequest) -> Result<ResolvedPackage> {
        resolve_package(self, request)
    }
}
