//! The outcome of one environment check.

use std::path::PathBuf;

use serde::Serialize;

use crate::requirements::PackageResult;
use crate::secrets::SecretState;

/// Exit code when every check passed.
pub const EXIT_OK: u8 = 0;
/// Exit code when issues were found.
pub const EXIT_ISSUES: u8 = 1;
/// Exit code when the `.env` file is missing.
pub const EXIT_NO_ENV_FILE: u8 = 2;

/// What the checker found about the API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiKeyReport {
    /// Classification of the value.
    pub state: SecretState,
    /// Where the value came from (`.env` or `environment`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Redacted form of the value, only when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

/// Everything one run of the checker found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Interpreter version, if it could be read.
    pub runtime_version: Option<String>,
    /// Path of the interpreter that was queried.
    pub interpreter: Option<PathBuf>,
    /// Path the `.env` file was looked for at.
    pub env_file: PathBuf,
    /// Whether the `.env` file exists.
    pub env_file_found: bool,
    /// API key findings; absent when the `.env` file is missing.
    pub api_key: Option<ApiKeyReport>,
    /// Per-package results; empty when the `.env` file is missing.
    pub packages: Vec<PackageResult>,
    /// Whether every package is installed (false if none were checked).
    pub packages_ok: bool,
    /// Whether the environment is ready to run the demo.
    pub passed: bool,
}

impl CheckReport {
    /// Report for a project without a `.env` file.
    pub fn missing_env_file(
        runtime_version: Option<String>,
        interpreter: Option<PathBuf>,
        env_file: PathBuf,
    ) -> Self {
        Self {
            runtime_version,
            interpreter,
            env_file,
            env_file_found: false,
            api_key: None,
            packages: Vec::new(),
            packages_ok: false,
            passed: false,
        }
    }

    /// Report for a project whose `.env` file was found.
    pub fn completed(
        runtime_version: Option<String>,
        interpreter: Option<PathBuf>,
        env_file: PathBuf,
        api_key: ApiKeyReport,
        packages: Vec<PackageResult>,
    ) -> Self {
        let packages_ok = packages.iter().all(|p| p.status.is_installed());
        let passed = packages_ok && api_key.state.is_set();
        Self {
            runtime_version,
            interpreter,
            env_file,
            env_file_found: true,
            api_key: Some(api_key),
            packages,
            packages_ok,
            passed,
        }
    }

    /// Whether the API key is set to a non-placeholder value.
    pub fn key_ok(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| k.state.is_set())
    }

    /// Module names of the packages that are missing.
    pub fn missing_packages(&self) -> Vec<&str> {
        self.packages
            .iter()
            .filter(|p| !p.status.is_installed())
            .map(|p| p.package.as_str())
            .collect()
    }

    /// Process exit code for this report.
    pub fn exit_code(&self) -> u8 {
        if !self.env_file_found {
            EXIT_NO_ENV_FILE
        } else if self.passed {
            EXIT_OK
        } else {
            EXIT_ISSUES
        }
    }
}
