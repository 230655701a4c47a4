//! Error types for registry parsing and package resolution.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = RegistryError> = std::result::Result<T, E>;

/// Errors that can occur while reading a registry or resolving a package.
///
/// None of these are transient. A resolution either produces a complete
/// package or fails with one of these.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Document is not well-formed XML.
    #[error("XML error: {0}")]
    Xml(String),

    /// IO error while reading a document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Well-formed XML that violates the registry or override format.
    #[error("Invalid {kind}: {message}")]
    InvalidDocument { kind: &'static str, message: String },

    /// A declaration fragment uses a marker element this parser does not know,
    /// or steps outside the restricted declaration grammar.
    #[error("Malformed declaration '{declaration}': {reason}")]
    MalformedDeclaration { reason: String, declaration: String },

    /// An override names a function absent from the registry.
    #[error("Unknown overload target: {0}")]
    UnknownOverloadTarget(String),

    /// An override changes a parameter index the base function does not have.
    #[error("Invalid overload index {index} for {function} ({len} parameters)")]
    InvalidOverloadIndex {
        function: String,
        index: usize,
        len: usize,
    },

    /// An add set or typedef `requires` chain names an entity absent from the registry.
    #[error("Unresolved {kind} reference: {name} (api '{api}')")]
    UnresolvedReference {
        kind: &'static str,
        name: String,
        api: String,
    },

    /// Version string is neither `major.minor` nor `all`.
    #[error("Invalid version string: '{0}'")]
    InvalidVersionString(String),

    /// Extension pattern failed to compile.
    #[error("Invalid extension pattern '{pattern}': {source}")]
    InvalidExtensionPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// JSON configuration document could not be decoded.
    #[error("JSON error: {0}")]
    Json(String),

    /// None of the given registries declares the requested package.
    #[error("No registry declares package {api} {version}")]
    UnknownPackage { api: String, version: String },
}

impl RegistryError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create an invalid registry document error.
    pub fn invalid_registry(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            kind: "registry",
            message: message.into(),
        }
    }

    /// Create an invalid override document error.
    pub fn invalid_overloads(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            kind: "overload document",
            message: message.into(),
        }
    }

    /// Create a malformed declaration error.
    pub fn malformed(reason: impl Into<String>, declaration: impl Into<String>) -> Self {
        Self::MalformedDeclaration {
            reason: reason.into(),
            declaration: declaration.into(),
        }
    }

    /// Create a malformed declaration error for an unrecognized marker element.
    pub fn unknown_marker(marker: &str, declaration: impl Into<String>) -> Self {
        Self::malformed(format!("unexpected <{marker}> marker"), declaration)
    }

    /// Create an unresolved reference error.
    pub fn unresolved(kind: &'static str, name: impl Into<String>, api: impl Into<String>) -> Self {
        Self::UnresolvedReference {
            kind,
            name: name.into(),
            api: api.into(),
        }
    }

    /// Create an invalid extension pattern error.
    pub fn pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidExtensionPattern {
            pattern: pattern.into(),
            source,
        }
    }
}
