use crate::config::DEFAULT_MEASURE_CONFIG;
use crate::models::TextEncoding;
use crate::Error;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct MeasureConfig {
    /// Join the top-level hierarchies of each part of speech under a synthetic root.
    pub use_synthetic_root: bool,
    /// IC data file; required by IC-based measures.
    pub info_content_path: Option<PathBuf>,
    pub mapping_path: Option<PathBuf>,
    /// Character set of the IC and mapping files.
    pub encoding: TextEncoding,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        DEFAULT_MEASURE_CONFIG
    }
}

impl MeasureConfig {
    /// Builds a config from string options: `root`, `infocontent`, `mapping` and
    /// `encoding`. Locations may be plain paths or `file:` URLs. Unrecognized options are
    /// rejected.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, Error> {
        let mut config = MeasureConfig::default();

        for (name, value) in params {
            match name.as_str() {
                "root" => {
                    config.use_synthetic_root = value.trim().parse().map_err(|_| {
                        Error::ConfigError(format!("root must be true or false, got: {}", value))
                    })?;
                }
                "infocontent" => config.info_content_path = Some(Self::parse_location(value)),
                "mapping" => config.mapping_path = Some(Self::parse_location(value)),
                "encoding" => config.encoding = value.parse()?,
                other => {
                    return Err(Error::ConfigError(format!(
                        "Unrecognized measure option: {}",
                        other
                    )))
                }
            }
        }

        Ok(config)
    }

    fn parse_location(value: &str) -> PathBuf {
        let value = value.trim();
        let path = value
            .strip_prefix("file://")
            .or_else(|| value.strip_prefix("file:"))
            .unwrap_or(value);

        PathBuf::from(path)
    }
}
