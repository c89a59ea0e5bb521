//! API key classification and redaction.
//!
//! - [`SecretState`] - Whether a looked-up key is usable
//! - [`redact`] - Display form of a secret that never reveals it
//!
//! # Example
//!
//! ```
//! use ragcheck::secrets::{redact, SecretState, OPENAI_KEY_PLACEHOLDER};
//!
//! assert_eq!(SecretState::classify(Some(OPENAI_KEY_PLACEHOLDER)), SecretState::Placeholder);
//! assert!(SecretState::classify(Some("sk-real123")).is_set());
//! assert_eq!(redact("sk-real123"), "sk-…");
//! ```

pub mod mask;
pub mod state;

pub use mask::redact;
pub use state::{SecretState, OPENAI_KEY_PLACEHOLDER};
