//! `(name, api)` keyed storage.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// Composite key of a registry entity: its name and the API it is scoped to.
///
/// An empty `api` marks an API-agnostic declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpecRef {
    pub name: String,
    pub api: String,
}

impl SpecRef {
    pub fn new(name: impl Into<String>, api: Option<&str>) -> Self {
        Self {
            name: name.into(),
            api: api.unwrap_or_default().to_string(),
        }
    }

    /// Key of the API-agnostic declaration of `name`.
    pub fn agnostic(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            api: String::new(),
        }
    }
}

/// Entities keyed by [`SpecRef`], in document order.
///
/// Lookups are explicit about the API fallback: [`Keyed::get_exact`] never
/// falls back, [`Keyed::lookup`] tries `(name, api)` and then `(name, "")`.
#[derive(Debug, Clone)]
pub struct Keyed<T> {
    entries: IndexMap<SpecRef, T, FxBuildHasher>,
}

impl<T> Default for Keyed<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::default(),
        }
    }
}

impl<T> Keyed<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entity, returning the one it replaced.
    pub fn insert(&mut self, key: SpecRef, value: T) -> Option<T> {
        self.entries.insert(key, value)
    }

    pub fn get_exact(&self, name: &str, api: &str) -> Option<&T> {
        // IndexMap<SpecRef, _> can't be queried by a borrowed pair, so build the key.
        self.entries.get(&SpecRef {
            name: name.to_string(),
            api: api.to_string(),
        })
    }

    pub fn get_mut(&mut self, key: &SpecRef) -> Option<&mut T> {
        self.entries.get_mut(key)
    }

    /// Two-step lookup: the `api`-specific entry, else the API-agnostic one.
    pub fn lookup(&self, name: &str, api: &str) -> Option<&T> {
        if !api.is_empty() {
            if let Some(found) = self.get_exact(name, api) {
                return Some(found);
            }
        }
        self.get_exact(name, "")
    }

    /// All variants declared under `name`, across APIs.
    pub fn variants<'s>(
        &'s self,
        name: &str,
    ) -> impl Iterator<Item = (&'s SpecRef, &'s T)> + use<'s, T> {
        let name = name.to_string();
        self.entries.iter().filter(move |(key, _)| key.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SpecRef, &T)> {
        self.entries.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
