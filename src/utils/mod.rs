//! Configuration utilities

pub mod config;

pub use config::{
    load_config, AnalysisSettings, AppConfig, LoggingSettings, RemoteSettings,
};
