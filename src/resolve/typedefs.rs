//! Transitive typedef closure.

use std::collections::BTreeMap;

use crate::base::Keyed;
use crate::error::{RegistryError, Result};
use crate::registry::{Function, Typedef};

/// Typedefs needed to declare `functions`, in document order.
///
/// Every parameter and return type of every function (overloads included)
/// pulls in its typedef and, transitively, the typedefs it `requires`. Types
/// without a typedef, such as built-in scalars, contribute nothing. Output
/// follows declaration order because typedef text may name an earlier
/// typedef without a `requires` link.
///
/// # Errors
///
/// [`RegistryError::UnresolvedReference`] when a `requires` chain names a
/// typedef the registry does not declare.
pub fn close_typedefs<'r, I>(
    typedefs: &'r Keyed<Typedef>,
    functions: I,
    api: &str,
) -> Result<Vec<Typedef>>
where
    I: IntoIterator<Item = &'r Function>,
{
    let mut marked: BTreeMap<usize, &'r Typedef> = BTreeMap::new();

    for function in functions {
        mark(typedefs, &function.return_type.base_name, api, &mut marked)?;
        for parameter in &function.parameters {
            mark(typedefs, &parameter.ty.base_name, api, &mut marked)?;
        }
        for overload in &function.overloads {
            for parameter in &overload.parameters {
                mark(typedefs, &parameter.ty.base_name, api, &mut marked)?;
            }
        }
    }

    Ok(marked.into_values().cloned().collect())
}

fn mark<'r>(
    typedefs: &'r Keyed<Typedef>,
    type_name: &str,
    api: &str,
    marked: &mut BTreeMap<usize, &'r Typedef>,
) -> Result<()> {
    let Some(mut current) = typedefs.lookup(type_name, api) else {
        return Ok(());
    };
    // Stops at the first typedef already marked, so cycles terminate.
    while marked.insert(current.ordinal, current).is_none() {
        let Some(required) = current.requires.as_deref() else {
            break;
        };
        current = typedefs
            .lookup(required, api)
            .ok_or_else(|| RegistryError::unresolved("typedef", required, api))?;
    }
    Ok(())
}
