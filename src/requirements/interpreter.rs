//! Python interpreter discovery and queries.
//!
//! Interpreters are looked up without spawning a shell: an explicit path
//! wins, then an activated virtualenv (`VIRTUAL_ENV`), then `python3` and
//! `python` on `PATH`. Only executable files count.
//!
//! Package availability is asked of the interpreter in one call using
//! `importlib.util.find_spec`, which resolves a module without executing
//! it, so a slow-to-import package like `llama_index` costs no more than
//! a small one.
//!
//! # Example
//!
//! ```no_run
//! use ragcheck::requirements::{PackageSource, PythonInterpreter};
//!
//! let python = PythonInterpreter::discover(None).unwrap();
//! println!("{}", python.path().display());
//! let found = python.available(&["streamlit", "faiss"]).unwrap();
//! println!("streamlit installed: {}", found.contains("streamlit"));
//! ```

use std::collections::HashSet;
use std::env::VarError;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{RagCheckError, Result};

use super::source::PackageSource;

/// Regex for the `python --version` banner.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Python\s+(\d+\.\d+(?:\.\d+)?[A-Za-z0-9+.]*)").expect("VERSION_REGEX must compile")
});

/// Prints `name=1` or `name=0` for every module named in argv.
const FIND_SPEC_SCRIPT: &str = r#"
import importlib.util, sys
for name in sys.argv[1:]:
    try:
        found = importlib.util.find_spec(name) is not None
    except (ImportError, ValueError):
        found = False
    print("%s=%d" % (name, found))
"#;

#[cfg(windows)]
const VENV_INTERPRETER: &str = "Scripts/python.exe";
#[cfg(not(windows))]
const VENV_INTERPRETER: &str = "bin/python";

#[cfg(windows)]
const PATH_CANDIDATES: &[&str] = &["python.exe", "python3.exe"];
#[cfg(not(windows))]
const PATH_CANDIDATES: &[&str] = &["python3", "python"];

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    path_entries
        .iter()
        .map(|dir| dir.join(tool))
        .find(|candidate| candidate.is_file() && is_executable(candidate))
}

/// Extract the version number from `python --version` output.
pub fn parse_version(output: &str) -> Option<String> {
    VERSION_REGEX
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Parse the `name=0|1` lines printed by the module query.
pub fn parse_module_report(output: &str) -> HashSet<String> {
    output
        .lines()
        .filter_map(|line| line.trim().split_once('='))
        .filter(|(_, found)| *found == "1")
        .map(|(name, _)| name.to_string())
        .collect()
}

/// A Python interpreter on this machine.
#[derive(Debug, Clone)]
pub struct PythonInterpreter {
    path: PathBuf,
    working_dir: Option<PathBuf>,
}

impl PythonInterpreter {
    /// Wrap a known interpreter path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            working_dir: None,
        }
    }

    /// Run queries from `dir`, so modules in the project directory resolve
    /// the same way they do for the demo.
    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Locate an interpreter using the real environment.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        Self::discover_with_env(explicit, |key: &str| std::env::var(key))
    }

    /// Locate an interpreter with a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn discover_with_env<F>(explicit: Option<&Path>, env_fn: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let path_entries: Vec<PathBuf> = env_fn("PATH")
            .map(|value| std::env::split_paths(&value).collect())
            .unwrap_or_default();

        // 1. Explicit interpreter: a path, or a bare name looked up on PATH
        if let Some(explicit) = explicit {
            let found = if explicit.components().count() > 1 {
                explicit.is_file().then(|| explicit.to_path_buf())
            } else {
                resolve_tool_path(&explicit.to_string_lossy(), &path_entries)
            };
            debug!("Explicit interpreter {} resolved to {:?}", explicit.display(), found);
            return found
                .map(Self::new)
                .ok_or_else(|| RagCheckError::InterpreterNotFound {
                    tried: explicit.display().to_string(),
                });
        }

        // 2. Activated virtualenv
        if let Ok(venv) = env_fn("VIRTUAL_ENV") {
            let candidate = PathBuf::from(venv).join(VENV_INTERPRETER);
            if candidate.is_file() && is_executable(&candidate) {
                debug!("Using virtualenv interpreter {}", candidate.display());
                return Ok(Self::new(candidate));
            }
            debug!("VIRTUAL_ENV set but {} is not usable", candidate.display());
        }

        // 3. PATH lookup
        for name in PATH_CANDIDATES {
            if let Some(found) = resolve_tool_path(name, &path_entries) {
                debug!("Using interpreter {} from PATH", found.display());
                return Ok(Self::new(found));
            }
        }

        Err(RagCheckError::InterpreterNotFound {
            tried: PATH_CANDIDATES.join(", "),
        })
    }

    /// Path of the interpreter binary.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the interpreter version (e.g., `3.11.4`).
    pub fn version(&self) -> Result<String> {
        let output = self.run(&["--version"])?;
        // Python 2 prints the banner on stderr
        let text = format!(
            "{}{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        parse_version(&text).ok_or_else(|| RagCheckError::InterpreterFailed {
            interpreter: self.path.clone(),
            message: format!("unrecognized version output: {}", text.trim()),
        })
    }

    /// Ask the interpreter which of `modules` it can resolve.
    pub fn installed_modules(&self, modules: &[&str]) -> Result<HashSet<String>> {
        if modules.is_empty() {
            return Ok(HashSet::new());
        }

        let mut args = vec!["-c", FIND_SPEC_SCRIPT];
        args.extend_from_slice(modules);
        let output = self.run(&args)?;

        if !output.status.success() {
            return Err(RagCheckError::InterpreterFailed {
                interpreter: self.path.clone(),
                message: format!(
                    "module query exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        let found = parse_module_report(&String::from_utf8_lossy(&output.stdout));
        debug!("Interpreter resolved {} of {} modules", found.len(), modules.len());
        Ok(found)
    }

    fn run(&self, args: &[&str]) -> Result<Output> {
        let mut cmd = Command::new(&self.path);
        cmd.args(args).stdin(Stdio::null());
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd.output().map_err(|e| RagCheckError::InterpreterFailed {
            interpreter: self.path.clone(),
            message: e.to_string(),
        })
    }
}

impl PackageSource for PythonInterpreter {
    fn runtime_version(&self) -> Option<String> {
        match self.version() {
            Ok(version) => Some(version),
            Err(e) => {
                debug!("Could not read interpreter version: {}", e);
                None
            }
        }
    }

    fn available(&self, modules: &[&str]) -> Result<HashSet<String>> {
        self.installed_modules(modules)
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
