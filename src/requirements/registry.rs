//! The package registry: which modules the RAG demo needs.

use serde::Serialize;

/// A package the demo imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PackageRequirement {
    /// Module name as imported by the demo (e.g., `llama_index`).
    pub module: &'static str,
    /// Distribution that provides the module on PyPI (e.g., `llama-index`).
    pub distribution: &'static str,
}

/// Packages required by the LlamaIndex agentic RAG demo, in check order.
pub const RAG_DEMO_PACKAGES: &[PackageRequirement] = &[
    PackageRequirement {
        module: "llama_index",
        distribution: "llama-index",
    },
    PackageRequirement {
        module: "streamlit",
        distribution: "streamlit",
    },
    PackageRequirement {
        module: "faiss",
        distribution: "faiss-cpu",
    },
    PackageRequirement {
        module: "dotenv",
        distribution: "python-dotenv",
    },
];

/// Ordered, immutable list of packages to check.
///
/// # Example
///
/// ```
/// use ragcheck::requirements::PackageRegistry;
///
/// let registry = PackageRegistry::new();
/// assert_eq!(registry.module_names(), vec!["llama_index", "streamlit", "faiss", "dotenv"]);
/// assert_eq!(registry.packages()[2].distribution, "faiss-cpu");
/// ```
#[derive(Debug, Clone)]
pub struct PackageRegistry {
    packages: Vec<PackageRequirement>,
}

impl PackageRegistry {
    /// Registry of the demo's packages.
    pub fn new() -> Self {
        Self::with_packages(RAG_DEMO_PACKAGES.to_vec())
    }

    /// Registry with an explicit package list.
    pub fn with_packages(packages: Vec<PackageRequirement>) -> Self {
        Self { packages }
    }

    /// Packages in check order.
    pub fn packages(&self) -> &[PackageRequirement] {
        &self.packages
    }

    /// Module names in check order.
    pub fn module_names(&self) -> Vec<&'static str> {
        self.packages.iter().map(|p| p.module).collect()
    }
}

impl Default for PackageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distribution_of(registry: &PackageRegistry, module: &str) -> Option<&'static str> {
        registry
            .packages()
            .iter()
            .find(|p| p.module == module)
            .map(|p| p.distribution)
    }

    #[test]
    fn builtin_registry_has_four_packages_in_order() {
        let registry = PackageRegistry::new();
        assert_eq!(registry.packages().len(), 4);
        assert_eq!(
            registry.module_names(),
            vec!["llama_index", "streamlit", "faiss", "dotenv"]
        );
    }

    #[test]
    fn distributions_differ_from_modules_where_needed() {
        let registry = PackageRegistry::new();
        assert_eq!(distribution_of(&registry, "llama_index"), Some("llama-index"));
        assert_eq!(distribution_of(&registry, "dotenv"), Some("python-dotenv"));
        assert_eq!(distribution_of(&registry, "numpy"), None);
    }

    #[test]
    fn custom_registry() {
        let registry = PackageRegistry::with_packages(vec![PackageRequirement {
            module: "numpy",
            distribution: "numpy",
        }]);
        assert_eq!(registry.module_names(), vec!["numpy"]);
        assert!(PackageRegistry::with_packages(vec![]).packages().is_empty());
    }
}
