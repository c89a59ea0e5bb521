//! Package status types.
//!
//! Each package check produces a [`PackageResult`] describing whether the
//! interpreter can resolve the module.

use serde::Serialize;

/// The result of checking a single package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PackageStatus {
    /// The module resolves under the interpreter.
    Installed,

    /// The module does not resolve.
    Missing {
        /// Distribution to install (e.g., `faiss-cpu`).
        distribution: String,
    },
}

impl PackageStatus {
    /// Whether the package is usable.
    pub fn is_installed(&self) -> bool {
        matches!(self, PackageStatus::Installed)
    }
}

/// The outcome for one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageResult {
    /// Module name that was checked.
    pub package: String,
    /// The status of the package.
    #[serde(flatten)]
    pub status: PackageStatus,
}

/// Build the `pip install` hint for a set of results, if anything is missing.
///
/// # Example
///
/// ```
/// use ragcheck::requirements::{install_hint, PackageResult, PackageStatus};
///
/// let results = vec![
///     PackageResult { package: "streamlit".into(), status: PackageStatus::Installed },
///     PackageResult {
///         package: "faiss".into(),
///         status: PackageStatus::Missing { distribution: "faiss-cpu".into() },
///     },
/// ];
/// assert_eq!(install_hint(&results).as_deref(), Some("pip install faiss-cpu"));
/// ```
pub fn install_hint(results: &[PackageResult]) -> Option<String> {
    let missing: Vec<&str> = results
        .iter()
        .filter_map(|r| match &r.status {
            PackageStatus::Missing { distribution } => Some(distribution.as_str()),
            PackageStatus::Installed => None,
        })
        .collect();

    if missing.is_empty() {
        None
    } else {
        Some(format!("pip install {}", missing.join(" ")))
    }
}
