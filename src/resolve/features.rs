//! Feature and extension resolution.
//!
//! Replays the add/remove sets of every feature at or below the requested
//! version, in registry declaration order, then layers the applicable
//! extensions on top.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::error::{RegistryError, Result};
use crate::registry::{AddRemoveSet, EnumConstant, Extension, Function, Registry};

use super::request::PackageRequest;

/// A function chosen for a package, borrowed from the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFunction<'r> {
    pub function: &'r Function,
    /// Whether the binder must find a native symbol for it.
    pub required: bool,
    /// Extensions that add this function, in registry order.
    pub extensions: Vec<String>,
}

/// The active functions and constants of one package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection<'r> {
    pub functions: BTreeMap<String, SelectedFunction<'r>>,
    pub constants: BTreeMap<String, &'r EnumConstant>,
}

/// Compute the active functions and constants for `request`.
///
/// # Errors
///
/// [`RegistryError::UnresolvedReference`] when an applied add set names a
/// function or constant the registry does not declare for the requested API.
pub fn select<'r>(registry: &'r Registry, request: &PackageRequest) -> Result<Selection<'r>> {
    let mut selection = Selection::default();
    let api = request.api.as_str();
    let suppress_removals = request.version.is_all();

    for feature in registry.features() {
        if feature.api != api || !request.version.includes(&feature.version) {
            continue;
        }
        trace!("Applying feature {} ({} {})", feature.name, feature.api, feature.version);

        for set in applicable_sets(&feature.sets, request) {
            for name in &set.added_functions {
                let function = find_function(registry, name, api)?;
                selection.functions.insert(
                    name.clone(),
                    SelectedFunction {
                        function,
                        required: !request.lenient_binding,
                        extensions: Vec::new(),
                    },
                );
            }
            for name in &set.added_constants {
                let constant = find_constant(registry, name, api)?;
                selection.constants.insert(name.clone(), constant);
            }

            if suppress_removals {
                continue;
            }
            for name in &set.removed_functions {
                if selection.functions.remove(name).is_none() {
                    trace!("Feature {} removes absent function {name}", feature.name);
                }
            }
            for name in &set.removed_constants {
                if selection.constants.remove(name).is_none() {
                    trace!("Feature {} removes absent constant {name}", feature.name);
                }
            }
        }
    }

    let api_token = request.effective_api();
    for extension in registry.extensions() {
        if !extension_applies(extension, request, &api_token) {
            continue;
        }
        debug!("Including extension {} in {api_token}", extension.name);

        for set in applicable_sets(&extension.sets, request) {
            for name in &set.added_functions {
                match selection.functions.get_mut(name) {
                    Some(selected) => {
                        if !selected.extensions.contains(&extension.name) {
                            selected.extensions.push(extension.name.clone());
                        }
                    }
                    None => {
                        let function = find_function(registry, name, api)?;
                        selection.functions.insert(
                            name.clone(),
                            SelectedFunction {
                                function,
                                required: false,
                                extensions: vec![extension.name.clone()],
                            },
                        );
                    }
                }
            }
            for name in &set.added_constants {
                if !selection.constants.contains_key(name) {
                    let constant = find_constant(registry, name, api)?;
                    selection.constants.insert(name.clone(), constant);
                }
            }
        }
    }

    Ok(selection)
}

/// Force patterns first, then the extension's own API pattern.
fn extension_applies(extension: &Extension, request: &PackageRequest, api_token: &str) -> bool {
    match request.extensions.force(&extension.name) {
        Some(forced) => {
            trace!("Extension {} forced {}", extension.name, if forced { "in" } else { "out" });
            forced
        }
        None => extension.supports(api_token),
    }
}

fn applicable_sets<'a>(
    sets: &'a [AddRemoveSet],
    request: &'a PackageRequest,
) -> impl Iterator<Item = &'a AddRemoveSet> + 'a {
    sets.iter().filter(move |set| {
        let applies = set.applies_to(&request.api, &request.profile);
        if !applies {
            trace!(
                "Skipping set for profile {:?} api {:?}",
                set.profile.as_deref().unwrap_or_default(),
                set.api.as_deref().unwrap_or_default()
            );
        }
        applies
    })
}

fn find_function<'r>(registry: &'r Registry, name: &str, api: &str) -> Result<&'r Function> {
    registry
        .function(name, api)
        .ok_or_else(|| RegistryError::unresolved("function", name, api))
}

fn find_constant<'r>(registry: &'r Registry, name: &str, api: &str) -> Result<&'r EnumConstant> {
    registry
        .constant(name, api)
        .ok_or_else(|| RegistryError::unresolved("constant", name, api))
}
