//! Integration tests for the ragcheck binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const REAL_KEY: &str = "OPENAI_API_KEY=sk-real123\n";
const PLACEHOLDER_KEY: &str = "OPENAI_API_KEY=your_openai_api_key_here\n";

fn setup_project(env: Option<&str>) -> TempDir {
    let temp = TempDir::new().unwrap();
    if let Some(content) = env {
        fs::write(temp.path().join(".env"), content).unwrap();
    }
    temp
}

/// Command isolated from the caller's key, virtualenv and interpreter.
fn ragcheck(project: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("ragcheck"));
    cmd.current_dir(project)
        .env_remove("OPENAI_API_KEY")
        .env_remove("VIRTUAL_ENV")
        .env_remove("RAGCHECK_PYTHON")
        .env("NO_COLOR", "1");
    cmd
}

/// Write a shell script that answers like an interpreter with `installed`.
#[cfg(unix)]
fn fake_python(dir: &Path, installed: &[&str]) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let cases: String = installed
        .iter()
        .map(|m| format!("    {}) echo \"$m=1\" ;;\n", m))
        .collect();
    let script = format!(
        "#!/bin/sh\n\
         if [ \"$1\" = \"--version\" ]; then echo \"Python 3.11.4\"; exit 0; fi\n\
         shift 2\n\
         for m in \"$@\"; do\n  case \"$m\" in\n{}    *) echo \"$m=0\" ;;\n  esac\ndone\n",
        cases
    );

    let path = dir.join("fake-python");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("ragcheck"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("agentic RAG demo"))
        .stdout(predicate::str::contains("--python"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("ragcheck"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_invalid_argument_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("ragcheck"));
    cmd.arg("--nonexistent-flag");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn cli_missing_env_file_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    ragcheck(temp.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains(".env file not found"))
        .stdout(predicate::str::contains("is installed").not())
        .stdout(predicate::str::contains("NOT installed").not());
    Ok(())
}

#[test]
fn cli_missing_env_file_suggests_example() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    fs::write(temp.path().join(".env.example"), PLACEHOLDER_KEY)?;
    ragcheck(temp.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("copy .env.example to .env"));
    Ok(())
}

#[test]
fn cli_project_flag_overrides_current_dir() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    let elsewhere = TempDir::new()?;
    ragcheck(elsewhere.path())
        .arg("--project")
        .arg(temp.path())
        .assert()
        .code(2);
    Ok(())
}

#[test]
fn cli_missing_project_dir_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    ragcheck(temp.path())
        .arg("--project")
        .arg(temp.path().join("typo"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Project directory not found"))
        .stdout(predicate::str::contains("Python version").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_ready_project_passes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(REAL_KEY));
    let python = fake_python(
        temp.path(),
        &["llama_index", "streamlit", "faiss", "dotenv"],
    );
    ragcheck(temp.path())
        .arg("--python")
        .arg(&python)
        .assert()
        .success()
        .stdout(predicate::str::contains("Python version: 3.11.4"))
        .stdout(predicate::str::contains("OpenAI API key is set"))
        .stdout(predicate::str::contains("faiss is installed"))
        .stdout(predicate::str::contains("Everything looks good"))
        .stdout(predicate::str::contains("streamlit run streamlit_app.py"))
        .stdout(predicate::str::contains("sk-real123").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_python_from_env_var() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(REAL_KEY));
    let python = fake_python(
        temp.path(),
        &["llama_index", "streamlit", "faiss", "dotenv"],
    );
    ragcheck(temp.path())
        .env("RAGCHECK_PYTHON", &python)
        .assert()
        .success();
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_placeholder_key_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(PLACEHOLDER_KEY));
    let python = fake_python(
        temp.path(),
        &["llama_index", "streamlit", "faiss", "dotenv"],
    );
    ragcheck(temp.path())
        .arg("--python")
        .arg(&python)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not set properly"))
        .stdout(predicate::str::contains("dotenv is installed"))
        .stdout(predicate::str::contains("Everything looks good").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_key_from_environment_is_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(PLACEHOLDER_KEY));
    let python = fake_python(
        temp.path(),
        &["llama_index", "streamlit", "faiss", "dotenv"],
    );
    ragcheck(temp.path())
        .env("OPENAI_API_KEY", "sk-from-shell")
        .arg("--python")
        .arg(&python)
        .assert()
        .success();
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_reports_every_missing_package() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(REAL_KEY));
    let python = fake_python(temp.path(), &["streamlit"]);
    ragcheck(temp.path())
        .arg("--python")
        .arg(&python)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("llama_index is NOT installed"))
        .stdout(predicate::str::contains("streamlit is installed"))
        .stdout(predicate::str::contains("faiss is NOT installed"))
        .stdout(predicate::str::contains("dotenv is NOT installed"))
        .stdout(predicate::str::contains(
            "pip install llama-index faiss-cpu python-dotenv",
        ));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_json_report() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(REAL_KEY));
    let python = fake_python(temp.path(), &["streamlit", "dotenv"]);
    let output = ragcheck(temp.path())
        .arg("--python")
        .arg(&python)
        .arg("--json")
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["runtime_version"], "3.11.4");
    assert_eq!(report["env_file_found"], true);
    assert_eq!(report["api_key"]["state"], "set");
    assert_eq!(report["api_key"]["preview"], "sk-…");
    assert_eq!(report["packages_ok"], false);
    assert_eq!(report["passed"], false);
    assert_eq!(report["packages"].as_array().map(Vec::len), Some(4));
    assert_eq!(report["packages"][2]["package"], "faiss");
    assert_eq!(report["packages"][2]["status"], "missing");
    assert_eq!(report["packages"][2]["distribution"], "faiss-cpu");
    Ok(())
}

#[test]
fn cli_missing_interpreter_marks_packages_missing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(REAL_KEY));
    ragcheck(temp.path())
        .arg("--python")
        .arg(temp.path().join("no-such-python"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Python version: unknown"))
        .stdout(predicate::str::contains("llama_index is NOT installed"))
        .stdout(predicate::str::contains("dotenv is NOT installed"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_quiet_hides_passing_lines() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(REAL_KEY));
    let python = fake_python(temp.path(), &["llama_index", "streamlit", "dotenv"]);
    ragcheck(temp.path())
        .arg("--python")
        .arg(&python)
        .arg("--quiet")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("faiss is NOT installed"))
        .stdout(predicate::str::contains("streamlit is installed").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_verbose_shows_redacted_key() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(REAL_KEY));
    let python = fake_python(
        temp.path(),
        &["llama_index", "streamlit", "faiss", "dotenv"],
    );
    ragcheck(temp.path())
        .arg("--python")
        .arg(&python)
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("sk-…"))
        .stdout(predicate::str::contains("fake-python"))
        .stdout(predicate::str::contains("sk-real123").not());
    Ok(())
}

#[test]
fn cli_debug_logs_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    ragcheck(temp.path())
        .arg("--debug")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("DEBUG"));
    Ok(())
}
