//! Package checker.
//!
//! The `PackageChecker` walks the registry against a [`PackageSource`].
//! The source is queried once for the whole list and every package gets a
//! result; a missing package never stops the walk.

use std::collections::HashSet;

use crate::error::Result;
use crate::requirements::registry::{PackageRegistry, PackageRequirement};
use crate::requirements::source::PackageSource;
use crate::requirements::status::{PackageResult, PackageStatus};

/// Checks every registry package against a source.
pub struct PackageChecker<'a> {
    registry: &'a PackageRegistry,
    source: &'a dyn PackageSource,
}

impl<'a> PackageChecker<'a> {
    /// Create a new package checker.
    pub fn new(registry: &'a PackageRegistry, source: &'a dyn PackageSource) -> Self {
        Self { registry, source }
    }

    /// Query the source and return one result per package, in registry order.
    pub fn check_all(&self) -> Result<Vec<PackageResult>> {
        let modules = self.registry.module_names();
        let available = self.source.available(&modules)?;
        Ok(self.results_from(&available))
    }

    /// Results with every package marked missing.
    ///
    /// Used when the source itself could not be queried.
    pub fn all_missing(&self) -> Vec<PackageResult> {
        self.results_from(&HashSet::new())
    }

    fn results_from(&self, available: &HashSet<String>) -> Vec<PackageResult> {
        self.registry
            .packages()
            .iter()
            .map(|package| Self::evaluate(package, available))
            .collect()
    }

    fn evaluate(package: &PackageRequirement, available: &HashSet<String>) -> PackageResult {
        let status = if available.contains(package.module) {
            PackageStatus::Installed
        } else {
            PackageStatus::Missing {
                distribution: package.distribution.to_string(),
            }
        };
        PackageResult {
            package: package.module.to_string(),
            status,
        }
    }
}
