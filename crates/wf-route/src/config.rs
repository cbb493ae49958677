//! JSON configuration loading.
//!
//! ```json
//! {
//!   "display": {
//!     "bounds": {"min_lat": 25.6670, "max_lat": 25.6715,
//!                "min_lon": -100.2510, "max_lon": -100.2450},
//!     "canvas": {"width": 800, "height": 1200}
//!   },
//!   "walking": {"kmh": 4.0}
//! }
//! ```
//!
//! Every section is optional; omitted sections take the defaults from
//! [`WayfindingConfig::default`].  The result is validated before it is
//! returned.

use std::path::Path;

use wf_core::{WayfindingConfig, WfError, WfResult};

/// Load and validate a configuration file.
pub fn load_config_json(path: &Path) -> WfResult<WayfindingConfig> {
    let text = std::fs::read_to_string(path)?;
    config_from_str(&text)
}

/// Parse and validate an in-memory configuration document.
pub fn config_from_str(json: &str) -> WfResult<WayfindingConfig> {
    let config: WayfindingConfig =
        serde_json::from_str(json).map_err(|e| WfError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
