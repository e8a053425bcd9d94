use serde::{Deserialize, Serialize};

use common::config::Validate;
use common::defaults;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub default_board_size: usize,
    pub cleanup_check_interval_secs: u64,
    pub inactivity_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            default_board_size: defaults::DEFAULT_BOARD_SIZE,
            cleanup_check_interval_secs: 300,
            inactivity_timeout_secs: 3600,
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bind_address.is_empty() {
            return Err("bind_address must not be empty".to_string());
        }
        if self.default_board_size == 0 {
            return Err("default_board_size must be positive".to_string());
        }
        if self.cleanup_check_interval_secs == 0 {
            return Err("cleanup_check_interval_secs must be positive".to_string());
        }
        if self.inactivity_timeout_secs == 0 {
            return Err("inactivity_timeout_secs must be positive".to_string());
        }
        Ok(())
    }
}
