use serde::Deserialize;

use latgrid_core::error::{LatGridError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub dataset: DatasetSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            dataset: DatasetSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(LatGridError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        self.dataset.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.trim().is_empty() {
            return Err(LatGridError::BadRequest(
                "gateway.listen must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetSection {
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

impl Default for DatasetSection {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

impl DatasetSection {
    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(LatGridError::BadRequest(
                "dataset.path must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_dataset_path() -> String {
    "q-vercel-latency.json".into()
}
