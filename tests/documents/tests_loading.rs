#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use apispec::{OverloadDocument, PackageRequest, Registry, RegistryError, Whitelist};
use tempfile::TempDir;

use crate::helpers::fixtures::{GL, GL_OVERLOADS, GL_REGISTRY};

fn write_fixtures() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("overload")).unwrap();
    fs::write(dir.path().join("gl.xml"), GL_REGISTRY).unwrap();
    fs::write(dir.path().join("overload").join("gl.xml"), GL_OVERLOADS).unwrap();
    dir
}

#[test]
fn test_registry_from_path_matches_shared_fixture() {
    let dir = write_fixtures();
    let mut registry = Registry::from_path(dir.path().join("gl.xml")).unwrap();
    let overloads =
        OverloadDocument::from_path(dir.path().join("overload").join("gl.xml")).unwrap();
    assert_eq!(overloads.overloads.len(), 1);
    assert_eq!(registry.apply_overloads(&overloads).unwrap(), 1);

    let request = PackageRequest::parse("gl", "3.2").unwrap().with_profile("core");
    assert_eq!(registry.resolve(&request).unwrap(), GL.resolve(&request).unwrap());
}

#[test]
fn test_missing_override_document_is_empty() {
    let dir = write_fixtures();
    let mut registry = Registry::from_path(dir.path().join("gl.xml")).unwrap();
    let overloads =
        OverloadDocument::from_path(dir.path().join("overload").join("gles2.xml")).unwrap();
    assert!(overloads.is_empty());
    assert_eq!(registry.apply_overloads(&overloads).unwrap(), 0);
    assert!(registry.functions().values().all(|f| f.overloads.is_empty()));
}

#[test]
fn test_missing_registry_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = Registry::from_path(dir.path().join("gl.xml")).unwrap_err();
    assert!(matches!(err, RegistryError::Io(_)));
}

#[test]
fn test_truncated_registry_is_xml_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gl.xml");
    fs::write(&path, &GL_REGISTRY[..GL_REGISTRY.len() / 2]).unwrap();
    assert!(matches!(Registry::from_path(&path), Err(RegistryError::Xml(_))));
}

#[test]
fn test_override_for_unknown_function_is_rejected() {
    let mut registry: Registry = GL_REGISTRY.parse().unwrap();
    let overloads: OverloadDocument = r#"<overloads>
        <overload name="glNotDeclared" overloadName="glAlias">
            <parameterChanges/>
        </overload>
    </overloads>"#
        .parse()
        .unwrap();
    let err = registry.apply_overloads(&overloads).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::UnknownOverloadTarget(ref name) if name == "glNotDeclared"
    ));
}

#[cfg(feature = "json")]
mod json {
    use super::*;
    use apispec::RequestSpec;

    #[test]
    fn test_request_and_whitelist_from_files() {
        let dir = write_fixtures();
        let request_path = dir.path().join("request.json");
        let whitelist_path = dir.path().join("restrict.json");
        fs::write(
            &request_path,
            r#"{ "api": "gl", "version": "3.2", "profile": "core", "removeExtensions": "GL_KHR_" }"#,
        )
        .unwrap();
        fs::write(
            &whitelist_path,
            r#"{ "Enums": ["GL_TRUE"], "Functions": ["glEnable", "glFenceSync"] }"#,
        )
        .unwrap();

        let request = RequestSpec::from_json(&fs::read_to_string(&request_path).unwrap())
            .unwrap()
            .into_request()
            .unwrap();
        let whitelist =
            Whitelist::from_json(&fs::read_to_string(&whitelist_path).unwrap()).unwrap();

        let mut package = GL.resolve(&request).unwrap();
        assert!(!package.functions.contains_key("glDebugMessageCallback"));
        package.filter(&whitelist);
        assert_eq!(package.functions.keys().collect::<Vec<_>>(), vec!["glEnable", "glFenceSync"]);
        assert_eq!(package.constants.keys().collect::<Vec<_>>(), vec!["GL_TRUE"]);
    }

    #[test]
    fn test_request_with_bad_pattern() {
        let spec =
            RequestSpec::from_json(r#"{ "api": "gl", "version": "3.2", "addExtensions": "GL_(" }"#)
                .unwrap();
        assert!(matches!(
            spec.into_request(),
            Err(RegistryError::InvalidExtensionPattern { .. })
        ));
    }
}
