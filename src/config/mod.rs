//! Configuration module for semsearch
//!
//! Handles loading settings from YAML files and environment variables.
//! Settings are passed explicitly to the components that need them; there
//! is no global instance.

mod settings;

pub use settings::*;
