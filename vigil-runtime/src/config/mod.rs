//! Configuration loading
//!
//! Loads the display configuration from a TOML file, falling back to the
//! defaults embedded in the binary.

pub mod loader;

pub use loader::{from_toml_str, load_or_default, EMBEDDED_CONFIG};
