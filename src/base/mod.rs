//! Foundation types for registry resolution.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Version`] - `major.minor` API versions plus the "all versions" wildcard
//! - [`SpecRef`], [`Keyed`] - `(name, api)` composite keys and the map that
//!   resolves them with an explicit fallback to the API-agnostic entry
//!
//! This module has NO dependencies on other crate modules except `error`.

mod key;
mod version;

pub use key::{Keyed, SpecRef};
pub use version::Version;
