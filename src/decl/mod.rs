//! Embedded C-like declarations.
//!
//! Registry documents describe parameter, return and type declarations as
//! C text interleaved with marker elements:
//!
//! - `<ptype>` wraps the base type of a parameter or return value
//! - `<name>` wraps the declared name
//! - `<apientry/>` stands for the calling-convention macro in typedefs
//!
//! Only the restricted subset the registry format uses is understood: a base
//! type, `const`, pointer runs of at most two levels and one bracketed array
//! dimension (which decays to one more pointer level).

mod classify;
mod signature;
mod typedef;
mod types;

pub use classify::{ScalarKind, TypeClass};
pub use signature::{MAX_POINTER_DEPTH, parse_signature, parse_signature_markup};
pub use typedef::{TypedefDecl, parse_typedef};
pub use types::{Parameter, SemanticType};
