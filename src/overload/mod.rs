//! Alternate call signatures for registry functions.
//!
//! An override document names a function, an alternate name, and per-index
//! parameter changes:
//!
//! ```xml
//! <overloads>
//!   <overload name="glVertexAttribPointer" overloadName="VertexAttribPointerWithOffset">
//!     <parameterChanges>
//!       <change index="5"><type signature="uintptr_t"/></change>
//!     </parameterChanges>
//!   </overload>
//! </overloads>
//! ```
//!
//! Overloads are applied once, right after the registry is built and before
//! any package is resolved.

mod apply;
mod document;

pub use apply::apply_overload;
pub use document::{OverloadDocument, OverloadSpec, ParameterChange};
