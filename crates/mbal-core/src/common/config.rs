//! Engine tunables that were historically hard-coded: the analytical RSD,
//! the replicate degrees of freedom and the t-table lookup policy.

use crate::domain::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ANALYTICAL_RSD: f64 = 0.025;
/// Triplicate replicate analysis (n = 3).
pub const DEFAULT_DEGREES_OF_FREEDOM: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TCriticalPolicy {
    /// Degrees of freedom between tabulated keys use the nearest lower key.
    #[default]
    TabulatedFloor,
    /// Linear interpolation between the bracketing tabulated keys.
    LinearInterpolation,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub analytical_rsd: f64,
    pub degrees_of_freedom: u32,
    pub t_critical_policy: TCriticalPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            analytical_rsd: DEFAULT_ANALYTICAL_RSD,
            degrees_of_freedom: DEFAULT_DEGREES_OF_FREEDOM,
            t_critical_policy: TCriticalPolicy::TabulatedFloor,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> EngineResult<()> {
        if !self.analytical_rsd.is_finite() || self.analytical_rsd < 0.0 {
            return Err(EngineError::configuration(
                "CONFIG.ANALYTICAL_RSD",
                format!(
                    "analytical_rsd must be a finite non-negative fraction, got {}",
                    self.analytical_rsd
                ),
            ));
        }
        if self.degrees_of_freedom == 0 {
            return Err(EngineError::configuration(
                "CONFIG.DEGREES_OF_FREEDOM",
                "degrees_of_freedom must be >= 1, got 0",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineConfigError {
    #[error("failed to read engine config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse engine config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid engine config '{}': {source}", path.display())]
    Invalid { path: PathBuf, source: EngineError },
}

impl EngineConfigError {
    pub fn into_engine_error(self) -> EngineError {
        match self {
            Self::Invalid { source, .. } => source,
            Self::Read { .. } => EngineError::io_system("IO.CONFIG_READ", self.to_string()),
            Self::Parse { .. } => EngineError::configuration("CONFIG.PARSE", self.to_string()),
        }
    }
}

pub fn load_engine_config(
    config_path: impl AsRef<Path>,
) -> Result<EngineConfig, EngineConfigError> {
    let config_path = config_path.as_ref();
    let source = fs::read_to_string(config_path).map_err(|source| EngineConfigError::Read {
        path: config_path.to_path_buf(),
        source,
    })?;
    let config: EngineConfig =
        serde_json::from_str(&source).map_err(|source| EngineConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })?;
    config.validate().map_err(|source| EngineConfigError::Invalid {
        path: config_path.to_path_buf(),
        source,
    })?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{EngineConfig, EngineConfigError, TCriticalPolicy, load_engine_config};
    use crate::domain::EngineErrorCategory;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_triplicate_assumptions() {
        let config = EngineConfig::default();
        assert_eq!(config.analytical_rsd, 0.025);
        assert_eq!(config.degrees_of_freedom, 2);
        assert_eq!(config.t_critical_policy, TCriticalPolicy::TabulatedFloor);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_config_file_keeps_remaining_defaults() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("engine.json");
        fs::write(
            &path,
            r#"{ "degrees_of_freedom": 5, "t_critical_policy": "linear_interpolation" }"#,
        )
        .expect("config should be written");

        let config = load_engine_config(&path).expect("config should load");
        assert_eq!(config.analytical_rsd, 0.025);
        assert_eq!(config.degrees_of_freedom, 5);
        assert_eq!(config.t_critical_policy, TCriticalPolicy::LinearInterpolation);
    }

    #[test]
    fn invalid_values_are_configuration_errors() {
        let config = EngineConfig {
            degrees_of_freedom: 0,
            ..EngineConfig::default()
        };
        let error = config.validate().expect_err("zero df should fail");
        assert_eq!(error.category(), EngineErrorCategory::ConfigurationError);

        let config = EngineConfig {
            analytical_rsd: -0.1,
            ..EngineConfig::default()
        };
        assert_eq!(
            config.validate().expect_err("negative rsd should fail").code(),
            "CONFIG.ANALYTICAL_RSD"
        );
    }

    #[test]
    fn missing_and_malformed_files_are_reported() {
        let temp = TempDir::new().expect("tempdir should be created");
        let missing = load_engine_config(temp.path().join("absent.json"))
            .expect_err("missing file should fail");
        assert!(matches!(missing, EngineConfigError::Read { .. }));
        assert_eq!(
            missing.into_engine_error().category(),
            EngineErrorCategory::IoSystemError
        );

        let path = temp.path().join("broken.json");
        fs::write(&path, "{ not json").expect("config should be written");
        let malformed = load_engine_config(&path).expect_err("malformed file should fail");
        assert!(matches!(malformed, EngineConfigError::Parse { .. }));
    }
}
