#![allow(clippy::unwrap_used, clippy::expect_used)]

use apispec::{ExtensionPolicy, PackageRequest, ResolvedPackage, Whitelist, resolve_packages};
use rstest::rstest;

use crate::helpers::fixtures::GL;
use crate::helpers::package_assertions::{
    assert_functions, assert_typedefs_in_document_order, constant_names, typedef_names,
};

fn resolve(api: &str, version: &str, profile: &str) -> ResolvedPackage {
    let request = PackageRequest::parse(api, version).unwrap().with_profile(profile);
    GL.resolve(&request).unwrap()
}

#[rstest]
#[case::core_3_2("3.2", "core", &[
    "glDebugMessageCallback", "glEnable", "glFenceSync", "glGenBuffers",
    "glGetString", "glShaderSource", "glVertexAttribPointer",
])]
#[case::compat_3_2("3.2", "compatibility", &[
    "glBegin", "glDebugMessageCallback", "glEnable", "glFenceSync", "glGenBuffers",
    "glGetString", "glShaderSource", "glTangent3fNV", "glVertexAttribPointer",
])]
#[case::all_core("all", "core", &[
    "glBegin", "glDebugMessageCallback", "glEnable", "glFenceSync", "glGenBuffers",
    "glGetString", "glShaderSource", "glVertexAttribPointer",
])]
#[case::legacy_1_0("1.0", "", &[
    "glBegin", "glDebugMessageCallback", "glEnable", "glFenceSync", "glGetString",
    "glTangent3fNV",
])]
fn test_gl_function_sets(#[case] version: &str, #[case] profile: &str, #[case] expected: &[&str]) {
    let package = resolve("gl", version, profile);
    assert_functions(&package, expected);
    assert_typedefs_in_document_order(&package);
}

#[test]
fn test_core_profile_removes_compatibility_constants() {
    let package = resolve("gl", "3.2", "core");
    assert_eq!(
        constant_names(&package),
        vec!["GL_ARRAY_BUFFER", "GL_DEBUG_OUTPUT", "GL_SYNC_FENCE", "GL_TRUE"]
    );
    assert_eq!(package.constants["GL_ARRAY_BUFFER"].value, "0x8892");
}

#[test]
fn test_core_typedef_closure() {
    let package = resolve("gl", "3.2", "core");
    assert_eq!(
        typedef_names(&package),
        vec!["GLenum", "GLboolean", "GLint", "GLuint", "GLsizei", "GLchar", "GLDEBUGPROC", "GLsync"]
    );
}

#[test]
fn test_compatibility_closure_follows_requires() {
    let package = resolve("gl", "3.2", "compatibility");
    let names = typedef_names(&package);
    assert_eq!(&names[..2], &["khrplatform", "GLbyte"]);
    assert!(names.contains(&"GLfloat"));
    assert!(!package.typedefs.iter().any(|t| t.api.is_some()));
}

#[test]
fn test_required_flags_and_attribution() {
    let package = resolve("gl", "3.2", "core");

    let fence = &package.functions["glFenceSync"];
    assert!(fence.required);
    assert_eq!(fence.extensions, vec!["GL_ARB_sync"]);

    let debug = &package.functions["glDebugMessageCallback"];
    assert!(!debug.required);
    assert_eq!(debug.extensions, vec!["GL_KHR_debug"]);

    let package = resolve("gl", "4.3", "core");
    let debug = &package.functions["glDebugMessageCallback"];
    assert!(debug.required);
    assert_eq!(debug.extensions, vec!["GL_KHR_debug"]);
    assert!(package.has_debug_callback());
    assert!(package.has_required_functions());
}

#[test]
fn test_gles2_uses_api_specific_declarations() {
    let package = resolve("gles2", "2.0", "");
    assert_functions(
        &package,
        &["glDebugMessageCallback", "glEnable", "glGenBuffers", "glVertexAttribPointer"],
    );
    assert_eq!(package.functions["glEnable"].function.api.as_deref(), Some("gles2"));
    assert_eq!(package.functions["glGenBuffers"].function.api, None);
    assert_eq!(
        typedef_names(&package),
        vec!["GLboolean", "GLint", "GLuint", "GLsizei", "GLDEBUGPROC", "GLenum"]
    );
    assert_eq!(package.typedefs.last().unwrap().api.as_deref(), Some("gles2"));
}

#[test]
fn test_overload_is_attached_without_touching_base() {
    let package = resolve("gl", "2.0", "");
    let function = &package.functions["glVertexAttribPointer"].function;

    assert_eq!(function.parameters[5].name, "pointer");
    assert_eq!(function.parameters[5].ty.cast_hint, None);

    assert_eq!(function.overloads.len(), 1);
    let overload = &function.overloads[0];
    assert_eq!(overload.target_name, "glVertexAttribPointer");
    assert_eq!(overload.overload_name, "glVertexAttribPointerWithOffset");
    assert_eq!(overload.parameters.len(), function.parameters.len());
    assert_eq!(overload.parameters[5].name, "offset");
    assert_eq!(overload.parameters[5].ty.base_name, "uintptr_t");
    assert_eq!(overload.parameters[5].ty.pointer_depth, 0);
    assert_eq!(overload.parameters[5].ty.cast_hint.as_deref(), Some("const void *"));
    assert_eq!(overload.parameters[..5], function.parameters[..5]);
}

#[test]
fn test_extension_policy_overrides() {
    let policy = ExtensionPolicy::from_patterns(Some("_NV_"), Some("^GL_KHR_")).unwrap();
    let request = PackageRequest::parse("gl", "3.2")
        .unwrap()
        .with_profile("core")
        .with_extensions(policy);
    let package = GL.resolve(&request).unwrap();

    assert!(package.functions.contains_key("glTangent3fNV"));
    assert!(!package.functions.contains_key("glDebugMessageCallback"));
    assert!(!package.constants.contains_key("GL_DEBUG_OUTPUT"));
}

#[test]
fn test_lenient_binding() {
    let request = PackageRequest::parse("gl", "3.2")
        .unwrap()
        .with_profile("core")
        .with_lenient_binding(true);
    let package = GL.resolve(&request).unwrap();
    assert!(!package.has_required_functions());
    assert!(package.functions.values().all(|f| !f.required));
}

#[test]
fn test_whitelist_filter() {
    let mut package = resolve("gl", "3.2", "core");
    package.filter(&Whitelist::new().with_functions(["glEnable", "glGenBuffers"]));
    assert_functions(&package, &["glEnable", "glGenBuffers"]);
    // Typedefs are not re-closed after filtering.
    assert_eq!(package.typedefs.len(), 8);
    assert_eq!(package.constants.len(), 4);
}

#[test]
fn test_batch_resolution_matches_individual_resolution() {
    let requests: Vec<PackageRequest> = [
        ("gl", "1.0", ""),
        ("gl", "3.2", "core"),
        ("gles2", "2.0", ""),
        ("gl", "all", "core"),
    ]
    .into_iter()
    .map(|(api, version, profile)| {
        PackageRequest::parse(api, version)
            .unwrap()
            .with_profile(profile)
    })
    .collect();

    let packages = resolve_packages(&GL, &requests);
    for (package, request) in packages.into_iter().zip(&requests) {
        let package = package.unwrap();
        assert_eq!(package.profile, request.profile);
        assert_eq!(package, GL.resolve(request).unwrap());
    }
}
