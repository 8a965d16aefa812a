//! Metrics config loader (strict parsing).
//!
//! Applications usually embed [`MetricsConfig`] in their own config file; these
//! helpers cover the standalone case.

pub mod schema;

use std::fs;

use statsbeam_core::error::{Result, StatsError};

pub use schema::MetricsConfig;

pub fn load_from_file(path: &str) -> Result<MetricsConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| StatsError::invalid_config(format!("read {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<MetricsConfig> {
    let cfg: MetricsConfig = serde_yaml::from_str(s)
        .map_err(|e| StatsError::invalid_config(format!("yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
