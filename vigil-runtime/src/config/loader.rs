//! Configuration persistence
//!
//! Reads `DisplayConfig` from TOML. Missing keys take their default values;
//! the result is always validated before it is returned.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, info, warn};
use vigil_core::DisplayConfig;

use crate::error::RuntimeError;

/// Embedded default configuration (compiled into the binary)
pub const EMBEDDED_CONFIG: &str = include_str!("../../display.toml");

/// Parse and validate a TOML configuration
pub fn from_toml_str(source: &str) -> Result<DisplayConfig, RuntimeError> {
    let config: DisplayConfig = toml::from_str(source)?;
    config.validate()?;
    log_config_summary(&config);
    Ok(config)
}

/// Load configuration from `path`
///
/// A missing file falls back to [`EMBEDDED_CONFIG`]. A file that exists but
/// does not parse or validate is an error.
pub fn load_or_default(path: &Path) -> Result<DisplayConfig, RuntimeError> {
    info!("Loading configuration from {}", path.display());

    match fs::read_to_string(path) {
        Ok(source) => from_toml_str(&source),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("{} not found, using embedded defaults", path.display());
            from_toml_str(EMBEDDED_CONFIG)
        }
        Err(e) => Err(e.into()),
    }
}

/// Log a summary of the loaded configuration
fn log_config_summary(config: &DisplayConfig) {
    info!("Configuration loaded successfully");
    debug!(
        "  brightness {} -> {}, peek {} ms",
        config.dim_brightness, config.full_brightness, config.peek_ms
    );
    debug!(
        "  motion threshold {} m/s^2, debounce {} ms",
        config.motion_threshold, config.motion_debounce_ms
    );
    debug!(
        "  inversion every {} ms ({:?}), offset every {} ms within +/-{}",
        config.inversion_interval_ms,
        config.inversion_start,
        config.offset_interval_ms,
        config.offset_range
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use vigil_core::{ConfigError, InversionStart, Rgb};

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = from_toml_str(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config, DisplayConfig::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = from_toml_str(
            r#"
            peek_ms = 5000
            inversion_start = "delayed"

            [palette]
            mode_a = [200, 20, 20]
            mode_b = [20, 180, 40]
            "#,
        )
        .unwrap();

        assert_eq!(config.peek_ms, 5_000);
        assert_eq!(config.inversion_start, InversionStart::Delayed);
        assert_eq!(config.palette.mode_a, Rgb::new(200, 20, 20));
        assert_eq!(config.offset_range, DisplayConfig::default().offset_range);
    }

    #[test]
    fn test_invalid_values_fail_fast() {
        let err = from_toml_str("inversion_interval_ms = 0").unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::Config(ConfigError::ZeroDuration("inversion_interval_ms"))
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let err = from_toml_str("peek_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, RuntimeError::Toml(_)));
    }

    #[test]
    fn test_missing_file_uses_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, DisplayConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "offset_range = 4").unwrap();
        let config = load_or_default(file.path()).unwrap();
        assert_eq!(config.offset_range, 4);
    }
}
