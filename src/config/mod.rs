//! Project configuration: the demo's `.env` file.
//!
//! - [`env_file`] parses `KEY=value` files
//! - [`env_layer`] stacks the parsed file under the process environment
//!
//! # Example
//!
//! ```
//! use ragcheck::config::{EnvFileParser, EnvLayer, EnvLayerStack};
//!
//! let vars = EnvFileParser::parse("OPENAI_API_KEY=sk-test\n");
//! let mut stack = EnvLayerStack::new();
//! stack.push(EnvLayer::from_vars(".env", vars));
//!
//! assert_eq!(stack.get("OPENAI_API_KEY"), Some("sk-test"));
//! ```

pub mod env_file;
pub mod env_layer;

pub use env_file::EnvFileParser;
pub use env_layer::{EnvLayer, EnvLayerStack, PROCESS_SOURCE};

/// File name of the project configuration.
pub const ENV_FILE: &str = ".env";

/// File name of the template shipped with the demo.
pub const ENV_EXAMPLE_FILE: &str = ".env.example";

/// Variable holding the OpenAI API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
