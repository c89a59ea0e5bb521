//! Package availability checking.
//!
//! This module answers "can the demo import what it needs?" without
//! trial imports: the interpreter is asked once which modules it can
//! resolve, and each registry entry is checked against that answer.
//!
//! # Modules
//!
//! - [`registry`] - The packages the demo needs
//! - [`source`] - The [`PackageSource`] trait and in-memory sources
//! - [`interpreter`] - Python interpreter discovery and queries
//! - [`checker`] - Walks the registry against a source
//! - [`status`] - Per-package result types

pub mod checker;
pub mod interpreter;
pub mod registry;
pub mod source;
pub mod status;

pub use checker::PackageChecker;
pub use interpreter::PythonInterpreter;
pub use registry::{PackageRegistry, PackageRequirement, RAG_DEMO_PACKAGES};
pub use source::{PackageSource, StaticPackageSource, UnavailableSource};
pub use status::{install_hint, PackageResult, PackageStatus};

use std::path::Path;

/// Build the package source for a project.
///
/// Falls back to an [`UnavailableSource`] carrying the discovery error
/// when no interpreter is found, so the check still runs to completion.
pub fn discover_source(project_root: &Path, explicit: Option<&Path>) -> Box<dyn PackageSource> {
    match PythonInterpreter::discover(explicit) {
        Ok(python) => Box::new(python.in_dir(project_root)),
        Err(e) => {
            tracing::warn!("{}", e);
            Box::new(UnavailableSource::new(e.to_string()))
        }
    }
}
