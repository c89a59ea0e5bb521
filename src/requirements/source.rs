//! Sources of installed-package information.
//!
//! A [`PackageSource`] answers two questions about the runtime the demo
//! will run on: which version it is, and which of a set of modules it can
//! resolve. The answer is gathered once, up front, and package checks are
//! then plain lookups in the returned set.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{RagCheckError, Result};

/// A queryable registry of installed modules.
pub trait PackageSource {
    /// Identifying version string of the runtime, if it can be determined.
    fn runtime_version(&self) -> Option<String>;

    /// Return the subset of `modules` that the runtime can resolve.
    fn available(&self, modules: &[&str]) -> Result<HashSet<String>>;

    /// Where the runtime lives, for display.
    fn location(&self) -> Option<&Path> {
        None
    }
}

/// In-memory package source with a fixed set of installed modules.
///
/// # Example
///
/// ```
/// use ragcheck::requirements::{PackageSource, StaticPackageSource};
///
/// let source = StaticPackageSource::new("3.11.4", ["streamlit", "dotenv"]);
/// let found = source.available(&["streamlit", "faiss"]).unwrap();
/// assert!(found.contains("streamlit"));
/// assert!(!found.contains("faiss"));
/// assert_eq!(source.runtime_version().as_deref(), Some("3.11.4"));
/// ```
#[derive(Debug, Clone)]
pub struct StaticPackageSource {
    version: Option<String>,
    installed: HashSet<String>,
}

impl StaticPackageSource {
    /// Create a source reporting `version` with the given modules installed.
    pub fn new<I, S>(version: &str, installed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            version: Some(version.to_string()),
            installed: installed.into_iter().map(Into::into).collect(),
        }
    }
}

impl PackageSource for StaticPackageSource {
    fn runtime_version(&self) -> Option<String> {
        self.version.clone()
    }

    fn available(&self, modules: &[&str]) -> Result<HashSet<String>> {
        Ok(modules
            .iter()
            .filter(|m| self.installed.contains(**m))
            .map(|m| m.to_string())
            .collect())
    }
}

/// Stand-in used when no interpreter could be found.
///
/// Every query fails with the discovery error, so each package is still
/// reported (as missing) and the reason reaches the user.
#[derive(Debug, Clone)]
pub struct UnavailableSource {
    reason: String,
}

impl UnavailableSource {
    /// Create a source that fails with `reason`.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl PackageSource for UnavailableSource {
    fn runtime_version(&self) -> Option<String> {
        None
    }

    fn available(&self, _modules: &[&str]) -> Result<HashSet<String>> {
        Err(RagCheckError::Other(anyhow::anyhow!(self.reason.clone())))
    }
}
