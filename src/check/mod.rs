//! The environment check.
//!
//! [`EnvironmentChecker`] runs the checks in a fixed order and prints one
//! line per finding:
//!
//! 1. interpreter version (informational, never fails)
//! 2. `.env` presence; a missing file ends the check here
//! 3. `OPENAI_API_KEY` set and not the template placeholder
//! 4. every required package, without stopping at the first missing one
//! 5. the verdict
//!
//! # Example
//!
//! ```
//! use ragcheck::check::EnvironmentChecker;
//! use ragcheck::config::EnvLayer;
//! use ragcheck::requirements::{PackageRegistry, StaticPackageSource};
//! use ragcheck::ui::MockUI;
//! use tempfile::TempDir;
//!
//! let project = TempDir::new().unwrap();
//! std::fs::write(project.path().join(".env"), "OPENAI_API_KEY=sk-real123\n").unwrap();
//!
//! let registry = PackageRegistry::new();
//! let source = StaticPackageSource::new("3.11.4", ["llama_index", "streamlit", "faiss", "dotenv"]);
//! let checker = EnvironmentChecker::new(project.path(), &registry, &source)
//!     .with_process_env(EnvLayer::new("environment"));
//!
//! let mut ui = MockUI::new();
//! let report = checker.run(&mut ui);
//! assert!(report.passed);
//! ```

pub mod report;

pub use report::{ApiKeyReport, CheckReport, EXIT_ISSUES, EXIT_NO_ENV_FILE, EXIT_OK};

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::{
    EnvFileParser, EnvLayer, EnvLayerStack, API_KEY_VAR, ENV_EXAMPLE_FILE, ENV_FILE,
    PROCESS_SOURCE,
};
use crate::requirements::{
    discover_source, install_hint, PackageChecker, PackageRegistry, PackageResult, PackageSource,
};
use crate::secrets::{redact, SecretState};
use crate::ui::{create_ui, should_use_colors, OutputMode, UserInterface};

/// Commands suggested once everything is in place.
pub const FOLLOW_UP_COMMANDS: [&str; 2] =
    ["python agentic_rag_demo.py", "streamlit run streamlit_app.py"];

/// Runs the environment check for one project directory.
pub struct EnvironmentChecker<'a> {
    project_root: PathBuf,
    registry: &'a PackageRegistry,
    source: &'a dyn PackageSource,
    process_env: EnvLayer,
}

impl<'a> EnvironmentChecker<'a> {
    /// Create a checker reading the real process environment.
    pub fn new(
        project_root: &Path,
        registry: &'a PackageRegistry,
        source: &'a dyn PackageSource,
    ) -> Self {
        let process_env =
            EnvLayer::capture(PROCESS_SOURCE, &[API_KEY_VAR], &|key: &str| std::env::var(key));
        Self {
            project_root: project_root.to_path_buf(),
            registry,
            source,
            process_env,
        }
    }

    /// Replace the captured process environment.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn with_process_env(mut self, layer: EnvLayer) -> Self {
        self.process_env = layer;
        self
    }

    /// Path the `.env` file is expected at.
    pub fn env_file(&self) -> PathBuf {
        self.project_root.join(ENV_FILE)
    }

    /// Run every check, reporting through `ui`.
    pub fn run(&self, ui: &mut dyn UserInterface) -> CheckReport {
        ui.show_header("Checking LlamaIndex agentic RAG setup...");

        let runtime_version = self.report_runtime(ui);
        let interpreter = self.source.location().map(Path::to_path_buf);
        let env_file = self.env_file();

        if !env_file.is_file() {
            debug!("No env file at {}", env_file.display());
            ui.error(".env file not found");
            ui.hint(&self.missing_env_file_hint());
            return CheckReport::missing_env_file(runtime_version, interpreter, env_file);
        }

        ui.success(".env file found");
        let env = self.load_env(&env_file, ui);
        let api_key = self.check_api_key(&env, ui);

        let packages = self.check_packages(ui);

        let report =
            CheckReport::completed(runtime_version, interpreter, env_file, api_key, packages);
        self.report_verdict(&report, ui);
        report
    }

    fn report_runtime(&self, ui: &mut dyn UserInterface) -> Option<String> {
        let version = self.source.runtime_version();
        match &version {
            Some(v) => ui.success(&format!("Python version: {}", v)),
            None => ui.warning("Python version: unknown (no working interpreter found)"),
        }
        if let Some(path) = self.source.location() {
            ui.detail(&format!("Interpreter: {}", path.display()));
        }
        version
    }

    fn missing_env_file_hint(&self) -> String {
        if self.project_root.join(ENV_EXAMPLE_FILE).is_file() {
            format!(
                "Please copy {} to {} and add your API key",
                ENV_EXAMPLE_FILE, ENV_FILE
            )
        } else {
            format!(
                "Please create {} containing {}=<your key>",
                ENV_FILE, API_KEY_VAR
            )
        }
    }

    /// Stack the file's values under the captured process environment.
    fn load_env(&self, env_file: &Path, ui: &mut dyn UserInterface) -> EnvLayerStack {
        let vars = EnvFileParser::load(env_file).unwrap_or_else(|e| {
            warn!("{}", e);
            ui.warning(&format!("Could not read {}: {}", ENV_FILE, e));
            HashMap::new()
        });
        debug!("Loaded {} variables from {}", vars.len(), env_file.display());

        let mut stack = EnvLayerStack::new();
        stack.push(EnvLayer::from_vars(ENV_FILE, vars));
        stack.push(self.process_env.clone());
        stack
    }

    fn check_api_key(&self, env: &EnvLayerStack, ui: &mut dyn UserInterface) -> ApiKeyReport {
        let value = env.get(API_KEY_VAR);
        let state = SecretState::classify(value);
        let source = env.source_of(API_KEY_VAR).map(str::to_string);
        debug!("{} is {:?} (source: {:?})", API_KEY_VAR, state, source);

        let preview = match (state, value) {
            (SecretState::Set, Some(v)) => Some(redact(v)),
            _ => None,
        };

        if state.is_set() {
            ui.success("OpenAI API key is set");
            if let (Some(preview), Some(source)) = (&preview, &source) {
                ui.detail(&format!("{} = {} (from {})", API_KEY_VAR, preview, source));
            }
        } else {
            ui.error(&format!(
                "OpenAI API key not set properly ({})",
                state.describe()
            ));
            ui.hint(&format!(
                "Please edit {} and add your actual API key",
                ENV_FILE
            ));
        }

        ApiKeyReport {
            state,
            source,
            preview,
        }
    }

    fn check_packages(&self, ui: &mut dyn UserInterface) -> Vec<PackageResult> {
        ui.message("");
        ui.message("Checking packages:");

        let checker = PackageChecker::new(self.registry, self.source);
        let mut spinner = ui.start_spinner("Querying installed packages...");
        let queried = checker.check_all();
        spinner.finish();

        let results = queried.unwrap_or_else(|e| {
            warn!("Package query failed: {}", e);
            ui.warning(&format!("Could not query installed packages: {}", e));
            checker.all_missing()
        });

        for result in &results {
            if result.status.is_installed() {
                ui.success(&format!("{} is installed", result.package));
            } else {
                ui.error(&format!("{} is NOT installed", result.package));
            }
        }

        if let Some(hint) = install_hint(&results) {
            ui.hint(&format!("Install missing packages with: {}", hint));
        }

        results
    }

    fn report_verdict(&self, report: &CheckReport, ui: &mut dyn UserInterface) {
        ui.message("");
        if report.passed {
            ui.celebrate("Everything looks good! You can now run:");
            for command in FOLLOW_UP_COMMANDS {
                ui.hint(command);
            }
        } else {
            ui.warning("Please fix the issues above before running the demo");
        }
    }
}

/// Variable naming the interpreter to query, as `--python` does.
pub const PYTHON_ENV_VAR: &str = "RAGCHECK_PYTHON";

/// Check the current directory with the discovered interpreter, printing
/// to the terminal. Returns whether the environment is ready.
pub fn run_check() -> bool {
    run_check_in(&std::env::current_dir().unwrap_or_default())
}

/// Check `project_root`, printing to the terminal.
///
/// The interpreter named by `RAGCHECK_PYTHON` is used when set.
pub fn run_check_in(project_root: &Path) -> bool {
    let explicit = std::env::var_os(PYTHON_ENV_VAR).map(PathBuf::from);
    let registry = PackageRegistry::new();
    let source = discover_source(project_root, explicit.as_deref());
    let mut ui = create_ui(OutputMode::Normal, should_use_colors());

    EnvironmentChecker::new(project_root, &registry, source.as_ref())
        .run(ui.as_mut())
        .passed
}
