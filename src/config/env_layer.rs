//! Environment variable layering.
//!
//! Values from the project's `.env` are kept in a local stack instead of
//! being written into the process environment. The process layer sits on
//! top, so a variable already exported in the shell wins over the file,
//! matching how dotenv loaders behave without `override`.

use std::collections::HashMap;
use std::env::VarError;

/// Source name used for the process environment layer.
pub const PROCESS_SOURCE: &str = "environment";

/// Represents a layer of environment variables.
///
/// # Example
///
/// ```
/// use ragcheck::config::EnvLayer;
///
/// let mut layer = EnvLayer::new(".env");
/// layer.set("OPENAI_API_KEY", "sk-abc");
///
/// assert_eq!(layer.vars.get("OPENAI_API_KEY").map(String::as_str), Some("sk-abc"));
/// assert_eq!(layer.source, ".env");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvLayer {
    /// Variables in this layer.
    pub vars: HashMap<String, String>,
    /// Source of this layer (for reporting).
    pub source: String,
}

impl EnvLayer {
    /// Create a new layer with the given source name.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            vars: HashMap::new(),
            source: source.into(),
        }
    }

    /// Create a layer from an already-parsed map.
    pub fn from_vars(source: impl Into<String>, vars: HashMap<String, String>) -> Self {
        Self {
            vars,
            source: source.into(),
        }
    }

    /// Capture the given keys through an env lookup function.
    ///
    /// Keys the lookup reports as absent (or non-unicode) are left out.
    pub fn capture<F>(source: impl Into<String>, keys: &[&str], env_fn: &F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let mut layer = Self::new(source);
        for key in keys {
            if let Ok(value) = env_fn(key) {
                layer.set(*key, value);
            }
        }
        layer
    }

    /// Add a variable to this layer.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Check if this layer has a variable.
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }
}

/// Manages layered environment variables.
///
/// Variables from higher layers override variables from lower layers.
/// The first layer pushed has lowest priority, the last has highest.
///
/// # Example
///
/// ```
/// use ragcheck::config::{EnvLayer, EnvLayerStack};
///
/// let mut stack = EnvLayerStack::new();
///
/// let mut file = EnvLayer::new(".env");
/// file.set("OPENAI_API_KEY", "from_file");
/// file.set("LLM_MODEL", "gpt-4o-mini");
/// stack.push(file);
///
/// let mut process = EnvLayer::new("environment");
/// process.set("OPENAI_API_KEY", "from_shell");
/// stack.push(process);
///
/// assert_eq!(stack.get("OPENAI_API_KEY"), Some("from_shell"));
/// assert_eq!(stack.get("LLM_MODEL"), Some("gpt-4o-mini"));
/// assert_eq!(stack.source_of("OPENAI_API_KEY"), Some("environment"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvLayerStack {
    /// Layers from lowest to highest priority.
    layers: Vec<EnvLayer>,
}

impl EnvLayerStack {
    /// Create a new empty stack.
    pub fn new() -> Self {
        Self { layers: vec![] }
    }

    /// Add a layer with the given priority.
    ///
    /// Later layers have higher priority.
    pub fn push(&mut self, layer: EnvLayer) {
        self.layers.push(layer);
    }

    /// Get the resolved value for a variable.
    ///
    /// Returns the value from the highest priority layer that contains the key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.layers
            .iter()
            .rev()
            .find_map(|layer| layer.vars.get(key))
            .map(String::as_str)
    }

    /// Get the source of a variable's value.
    pub fn source_of(&self, key: &str) -> Option<&str> {
        self.layers
            .iter()
            .rev()
            .find(|layer| layer.contains(key))
            .map(|layer| layer.source.as_str())
    }
}
