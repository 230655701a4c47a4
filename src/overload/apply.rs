//! Overload application.

use tracing::debug;

use crate::decl::parse_signature_markup;
use crate::error::{RegistryError, Result};
use crate::registry::{Function, Overload, Registry};

use super::document::{OverloadDocument, OverloadSpec};

/// Produce the overload `spec` describes for `function`.
///
/// The base function is not touched: the overload's parameters and return
/// type are fresh copies, rewritten only at the changed indices. A type change
/// records the parameter's original declaration text as the cast hint.
pub fn apply_overload(function: &Function, spec: &OverloadSpec) -> Result<Overload> {
    let mut parameters = function.parameters.clone();

    for change in &spec.changes {
        let invalid_index = || RegistryError::InvalidOverloadIndex {
            function: function.name.clone(),
            index: change.index,
            len: function.parameters.len(),
        };
        let original = function.parameters.get(change.index).ok_or_else(invalid_index)?;
        let parameter = parameters.get_mut(change.index).ok_or_else(invalid_index)?;

        if let Some(signature) = &change.signature {
            let (_, mut ty) = parse_signature_markup(signature)?;
            ty.cast_hint = Some(original.ty.raw_declaration.clone());
            parameter.ty = ty;
        }
        if let Some(name) = &change.name {
            parameter.name = name.clone();
        }
    }

    Ok(Overload {
        target_name: function.name.clone(),
        overload_name: spec.overload_name.clone(),
        parameters,
        return_type: function.return_type.clone(),
    })
}

impl Registry {
    /// Attach the document's overloads to every API variant of their target.
    ///
    /// All overloads are computed before any is attached, so on error the
    /// registry is unchanged. Returns the number of overloads attached.
    pub fn apply_overloads(&mut self, document: &OverloadDocument) -> Result<usize> {
        let mut produced = Vec::new();
        for spec in &document.overloads {
            let mut found = false;
            for (key, function) in self.functions.variants(&spec.target_name) {
                found = true;
                produced.push((key.clone(), apply_overload(function, spec)?));
            }
            if !found {
                return Err(RegistryError::UnknownOverloadTarget(spec.target_name.clone()));
            }
        }

        let count = produced.len();
        for (key, overload) in produced {
            if let Some(function) = self.functions.get_mut(&key) {
                function.overloads.push(overload);
            }
        }
        debug!("Applied {count} overloads from {} overload entries", document.overloads.len());
        Ok(count)
    }
}
