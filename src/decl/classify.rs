//! Semantic queries over resolved declaration types.
//!
//! Consumers map these classes to their native types; the names they emit
//! are their own concern.

use super::types::SemanticType;

/// Vendor tags that may trail a callback type name (`GLDEBUGPROCARB`).
const VENDOR_SUFFIXES: &[&str] = &["ARB", "KHR", "AMD", "EXT", "NV", "OES"];

/// Type names that spell the void pseudo-type.
const VOID_NAMES: &[&str] = &["void", "GLvoid"];

const DEBUG_PROC: &str = "DEBUGPROC";

/// Language-neutral scalar kinds behind the registry's scalar typedefs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float32,
    Float64,
    /// 16-bit float, carried as its bit pattern.
    Half,
    Boolean,
    /// Character data; strings are pointers to it.
    Char,
    /// Enumerant value (32 bits).
    Enum,
    /// Bit mask (32 bits).
    Bitfield,
    /// Pointer-difference or size integer as wide as the platform pointer.
    PointerSized,
    /// Handle that fits in a pointer-width integer.
    Handle,
}

impl ScalarKind {
    /// Scalar kind of a base type name, if it names one.
    pub fn from_base_name(name: &str) -> Option<Self> {
        let kind = match name {
            "GLbyte" | "int8_t" | "khronos_int8_t" => Self::Int8,
            "GLubyte" | "uint8_t" | "khronos_uint8_t" => Self::Uint8,
            "GLshort" | "int16_t" | "khronos_int16_t" => Self::Int16,
            "GLushort" | "uint16_t" | "khronos_uint16_t" => Self::Uint16,
            "GLint" | "GLsizei" | "GLfixed" | "GLclampx" | "EGLint" | "int" | "int32_t"
            | "khronos_int32_t" => Self::Int32,
            "GLuint" | "uint32_t" | "khronos_uint32_t" => Self::Uint32,
            "GLint64" | "GLint64EXT" | "EGLTime" | "int64_t" | "khronos_int64_t" => Self::Int64,
            "GLuint64" | "GLuint64EXT" | "EGLuint64KHR" | "uint64_t" | "khronos_uint64_t"
            | "khronos_utime_nanoseconds_t" => Self::Uint64,
            "GLfloat" | "GLclampf" | "float" | "khronos_float_t" => Self::Float32,
            "GLdouble" | "GLclampd" | "double" => Self::Float64,
            "GLhalf" | "GLhalfNV" | "GLhalfARB" => Self::Half,
            "GLboolean" | "EGLBoolean" => Self::Boolean,
            "GLchar" | "GLcharARB" | "char" => Self::Char,
            "GLenum" | "EGLenum" => Self::Enum,
            "GLbitfield" => Self::Bitfield,
            "GLintptr" | "GLintptrARB" | "GLsizeiptr" | "GLsizeiptrARB" | "GLvdpauSurfaceNV"
            | "EGLAttrib" | "EGLNativeDisplayType" | "intptr_t" | "uintptr_t" | "size_t"
            | "ptrdiff_t" | "khronos_intptr_t" | "khronos_ssize_t" => Self::PointerSized,
            "GLhandleARB" | "GLeglImageOES" | "GLeglClientBufferEXT" => Self::Handle,
            _ => return None,
        };
        Some(kind)
    }
}

/// Coarse classification of a declaration type.
///
/// Indirection is orthogonal: a `Scalar` with `pointer_depth == 1` is a
/// pointer to that scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClass {
    /// The void pseudo-type with no indirection (no value).
    Void,
    /// `void *` or `void **`: untyped memory.
    Untyped,
    /// A function-pointer callback type.
    Callback,
    Scalar(ScalarKind),
    /// Any other named type (sync objects, opaque structs, platform types).
    Opaque,
}

impl SemanticType {
    /// True for the void pseudo-type without indirection.
    pub fn is_void(&self) -> bool {
        VOID_NAMES.contains(&self.base_name.as_str()) && self.pointer_depth == 0
    }

    pub fn is_pointer(&self) -> bool {
        self.pointer_depth > 0
    }

    /// True for function-pointer callback types such as `GLDEBUGPROC`.
    pub fn is_callback(&self) -> bool {
        let mut name = self.base_name.as_str();
        for suffix in VENDOR_SUFFIXES {
            if let Some(stripped) = name.strip_suffix(suffix) {
                name = stripped;
                break;
            }
        }
        name.ends_with("PROC")
    }

    /// True for debug-message callbacks (`GLDEBUGPROC` and its vendor variants).
    pub fn is_debug_callback(&self) -> bool {
        self.is_callback() && self.base_name.contains(DEBUG_PROC)
    }

    pub fn classify(&self) -> TypeClass {
        if self.is_void() {
            TypeClass::Void
        } else if VOID_NAMES.contains(&self.base_name.as_str()) {
            TypeClass::Untyped
        } else if self.is_callback() {
            TypeClass::Callback
        } else if let Some(kind) = ScalarKind::from_base_name(&self.base_name) {
            TypeClass::Scalar(kind)
        } else {
            TypeClass::Opaque
        }
    }
}
