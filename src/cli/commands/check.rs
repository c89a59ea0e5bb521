//! Check command implementation.
//!
//! Runs the environment check and maps the report to an exit code. With
//! `--json` the status lines are suppressed and the report is printed as
//! a single JSON document instead.

use std::path::{Path, PathBuf};

use crate::check::EnvironmentChecker;
use crate::error::{RagCheckError, Result};
use crate::requirements::{discover_source, PackageRegistry, PackageSource};
use crate::ui::{create_ui, OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    python: Option<PathBuf>,
    json: bool,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, python: Option<PathBuf>, json: bool) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            python,
            json,
        }
    }

    /// Run the check against an already-built package source.
    pub fn execute_with(
        &self,
        source: &dyn PackageSource,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let registry = PackageRegistry::new();
        let checker = EnvironmentChecker::new(&self.project_root, &registry, source);

        let report = if self.json {
            let mut silent = create_ui(OutputMode::Silent, false);
            let report = checker.run(silent.as_mut());
            ui.message(&serde_json::to_string_pretty(&report)?);
            report
        } else {
            checker.run(ui)
        };

        Ok(CommandResult::from_exit_code(report.exit_code()))
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // A missing directory would also make every interpreter spawn fail
        if !self.project_root.is_dir() {
            return Err(RagCheckError::ProjectNotFound {
                path: self.project_root.clone(),
            });
        }

        let source = discover_source(&self.project_root, self.python.as_deref());
        self.execute_with(source.as_ref(), ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::StaticPackageSource;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn ready_source() -> StaticPackageSource {
        StaticPackageSource::new("3.11.4", ["llama_index", "streamlit", "faiss", "dotenv"])
    }

    #[test]
    fn missing_project_dir_is_an_error() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(&temp.path().join("typo"), None, false);
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();

        assert!(matches!(err, RagCheckError::ProjectNotFound { .. }));
        assert!(err.to_string().contains("typo"));
        assert!(ui.transcript().is_empty());
    }

    #[test]
    fn missing_env_file_exits_2() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(temp.path(), None, false);
        let mut ui = MockUI::new();

        let result = cmd.execute_with(&ready_source(), &mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn ready_project_succeeds() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".env"), "OPENAI_API_KEY=sk-abcdef123\n").unwrap();
        let cmd = CheckCommand::new(temp.path(), None, false);
        let mut ui = MockUI::new();

        let result = cmd.execute_with(&ready_source(), &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.celebrations().len(), 1);
    }

    #[test]
    fn missing_package_exits_1() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".env"), "OPENAI_API_KEY=sk-abcdef123\n").unwrap();
        let cmd = CheckCommand::new(temp.path(), None, false);
        let mut ui = MockUI::new();

        let source = StaticPackageSource::new("3.11.4", ["streamlit"]);
        let result = cmd.execute_with(&source, &mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn json_mode_prints_only_the_report() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(temp.path(), None, true);
        let mut ui = MockUI::new();

        let result = cmd.execute_with(&ready_source(), &mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert_eq!(ui.messages().len(), 1);
        assert!(ui.errors().is_empty());

        let json: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(json["env_file_found"], false);
        assert_eq!(json["runtime_version"], "3.11.4");
    }
}
