//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use latgrid_core::error::{LatGridError, Result};

pub use schema::{DatasetSection, GatewayConfig, GatewaySection};

/// Load config from `path`, falling back to defaults when the file is absent.
///
/// The service must be able to start with zero files on disk; a present but
/// invalid config is still an error.
pub fn load_or_default(path: &str) -> Result<GatewayConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(%path, "config file not found, using defaults");
            Ok(GatewayConfig::default())
        }
        Err(e) => Err(LatGridError::Internal(format!("read config failed: {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| LatGridError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
