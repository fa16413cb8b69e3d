use super::CliError;
use anyhow::Context;
use mbal_core::common::{EngineConfig, load_engine_config};
use mbal_core::domain::EngineError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub(super) enum InputFileError {
    #[error("failed to read input '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse input '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl From<InputFileError> for CliError {
    fn from(error: InputFileError) -> Self {
        let engine_error = match &error {
            InputFileError::Read { .. } => {
                EngineError::io_system("IO.INPUT_READ", error.to_string())
            }
            InputFileError::Parse { .. } => {
                EngineError::invalid_input("INPUT.PARSE", error.to_string())
            }
        };
        CliError::Compute(engine_error)
    }
}

pub(super) fn read_json_input<T: DeserializeOwned>(path: &Path) -> Result<T, InputFileError> {
    let source = fs::read_to_string(path).map_err(|source| InputFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&source).map_err(|source| InputFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn resolve_engine_config(config_path: Option<&Path>) -> Result<EngineConfig, CliError> {
    let Some(config_path) = config_path else {
        return Ok(EngineConfig::default());
    };
    let config = load_engine_config(config_path)
        .map_err(|error| CliError::Compute(error.into_engine_error()))?;
    tracing::debug!(
        path = %config_path.display(),
        analytical_rsd = config.analytical_rsd,
        degrees_of_freedom = config.degrees_of_freedom,
        "loaded engine config"
    );
    Ok(config)
}

pub(super) fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<i32, CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("failed to serialize JSON report")?;
    println!("{}", rendered);
    Ok(0)
}
