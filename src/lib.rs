//! ragcheck - Preflight check for a LlamaIndex agentic RAG demo.
//!
//! ragcheck verifies that a project directory is ready to run the demo:
//! the Python version is reported, a `.env` file must exist and define a
//! real `OPENAI_API_KEY`, and every required Python package must be
//! importable by the interpreter the demo will use.
//!
//! # Modules
//!
//! - [`check`] - The ordered environment check and its report
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.env` parsing and layered variable lookup
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Required packages and interpreter queries
//! - [`secrets`] - API key classification and redaction
//! - [`ui`] - Styled terminal output and spinners
//!
//! # Example
//!
//! ```
//! use ragcheck::config::EnvFileParser;
//! use ragcheck::secrets::SecretState;
//!
//! let vars = EnvFileParser::parse("OPENAI_API_KEY=your_openai_api_key_here\n");
//! let state = SecretState::classify(vars.get("OPENAI_API_KEY").map(String::as_str));
//! assert_eq!(state, SecretState::Placeholder);
//! ```
//!
//! For end-to-end runs, see the integration tests.

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod secrets;
pub mod ui;

pub use check::{run_check, run_check_in};
pub use error::{RagCheckError, Result};
