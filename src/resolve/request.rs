//! Resolution requests.
//!
//! Everything a resolution depends on travels in the [`PackageRequest`]; the
//! resolver keeps no state of its own between calls.

use regex::Regex;

use crate::base::Version;
use crate::error::{RegistryError, Result};

/// Profile whose packages match extensions against `"<api>core"`.
pub const CORE_PROFILE: &str = "core";

/// Caller overrides for which extensions contribute to a package.
///
/// Both patterns are searched for anywhere in the extension name. Inclusion
/// takes precedence over exclusion, and both take precedence over the
/// extension's own API pattern.
#[derive(Debug, Clone, Default)]
pub struct ExtensionPolicy {
    include: Option<Regex>,
    exclude: Option<Regex>,
}

impl ExtensionPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile optional include/exclude patterns; empty patterns are ignored.
    pub fn from_patterns(include: Option<&str>, exclude: Option<&str>) -> Result<Self> {
        Ok(Self {
            include: compile(include)?,
            exclude: compile(exclude)?,
        })
    }

    /// Force-include extensions whose name matches `pattern`.
    pub fn with_include(mut self, pattern: &str) -> Result<Self> {
        self.include = compile(Some(pattern))?;
        Ok(self)
    }

    /// Force-exclude extensions whose name matches `pattern`.
    pub fn with_exclude(mut self, pattern: &str) -> Result<Self> {
        self.exclude = compile(Some(pattern))?;
        Ok(self)
    }

    /// `Some(true)` if forced in, `Some(false)` if forced out, `None` to defer
    /// to the extension's API pattern.
    pub fn force(&self, extension_name: &str) -> Option<bool> {
        if self.include.as_ref().is_some_and(|re| re.is_match(extension_name)) {
            Some(true)
        } else if self.exclude.as_ref().is_some_and(|re| re.is_match(extension_name)) {
            Some(false)
        } else {
            None
        }
    }
}

fn compile(pattern: Option<&str>) -> Result<Option<Regex>> {
    match pattern {
        None | Some("") => Ok(None),
        Some(p) => Regex::new(p)
            .map(Some)
            .map_err(|e| RegistryError::pattern(p, e)),
    }
}

/// One requested package.
#[derive(Debug, Clone)]
pub struct PackageRequest {
    pub api: String,
    pub version: Version,
    /// Empty for the default profile.
    pub profile: String,
    pub extensions: ExtensionPolicy,
    /// When set, feature functions are marked not required, so a runtime
    /// binder may tolerate their symbols being missing.
    pub lenient_binding: bool,
}

impl PackageRequest {
    pub fn new(api: impl Into<String>, version: Version) -> Self {
        Self {
            api: api.into(),
            version,
            profile: String::new(),
            extensions: ExtensionPolicy::default(),
            lenient_binding: false,
        }
    }

    /// Request from a textual `"major.minor"` or `"all"` version.
    pub fn parse(api: impl Into<String>, version: &str) -> Result<Self> {
        Ok(Self::new(api, Version::parse(version)?))
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    pub fn with_extensions(mut self, policy: ExtensionPolicy) -> Self {
        self.extensions = policy;
        self
    }

    pub fn with_lenient_binding(mut self, lenient: bool) -> Self {
        self.lenient_binding = lenient;
        self
    }

    /// API token extension patterns are matched against.
    pub fn effective_api(&self) -> String {
        if self.profile == CORE_PROFILE {
            format!("{}{CORE_PROFILE}", self.api)
        } else {
            self.api.clone()
        }
    }
}

#[cfg(feature = "json")]
pub use spec::RequestSpec;

#[cfg(feature = "json")]
mod spec {
    use serde::Deserialize;

    use super::{ExtensionPolicy, PackageRequest};
    use crate::base::Version;
    use crate::error::{RegistryError, Result};

    /// String-typed request as found in configuration files.
    ///
    /// ```json
    /// { "api": "gl", "version": "4.1", "profile": "core",
    ///   "addExtensions": "GL_ARB_.*", "lenientBinding": true }
    /// ```
    #[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestSpec {
        pub api: String,
        pub version: String,
        #[serde(default)]
        pub profile: String,
        #[serde(default)]
        pub add_extensions: Option<String>,
        #[serde(default)]
        pub remove_extensions: Option<String>,
        #[serde(default)]
        pub lenient_binding: bool,
    }

    impl RequestSpec {
        pub fn from_json(json: &str) -> Result<Self> {
            serde_json::from_str(json).map_err(|e| RegistryError::Json(e.to_string()))
        }

        /// Validate versions and compile patterns.
        pub fn into_request(self) -> Result<PackageRequest> {
            let policy = ExtensionPolicy::from_patterns(
                self.add_extensions.as_deref(),
                self.remove_extensions.as_deref(),
            )?;
            Ok(PackageRequest::new(self.api, Version::parse(&self.version)?)
                .with_profile(self.profile)
                .with_extensions(policy)
                .with_lenient_binding(self.lenient_binding))
        }
    }
}
