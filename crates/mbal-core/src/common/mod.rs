pub mod config;

pub use config::{
    DEFAULT_ANALYTICAL_RSD, DEFAULT_DEGREES_OF_FREEDOM, EngineConfig, EngineConfigError,
    TCriticalPolicy, load_engine_config,
};
