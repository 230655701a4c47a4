//! Parsed declaration types.

/// The semantic type of a parameter or return value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SemanticType {
    /// Type name without qualifiers or indirection (`GLuint`, `void`).
    pub base_name: String,
    /// Declared indirection, array dimensions included. At most 2.
    pub pointer_depth: u8,
    pub is_const: bool,
    /// The declaration text with the declared name removed.
    pub raw_declaration: String,
    /// The declaration text this type replaced, when an override rewrote it.
    pub cast_hint: Option<String>,
}

impl SemanticType {
    /// A plain named type with no qualifiers, e.g. for synthesized declarations.
    pub fn named(base_name: impl Into<String>) -> Self {
        let base_name = base_name.into();
        Self {
            raw_declaration: base_name.clone(),
            base_name,
            ..Self::default()
        }
    }

    /// The C type text to cast through at the native-call boundary.
    pub fn cast_type(&self) -> &str {
        self.cast_hint.as_deref().unwrap_or(&self.raw_declaration)
    }
}

/// A named function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub name: String,
    pub ty: SemanticType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: SemanticType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}
