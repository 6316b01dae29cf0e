use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tracing max level: error|warn|info|debug|trace
    pub log_level: String,
    /// The pool's own account name.
    pub contract: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            contract: "simpleswap".to_string(),
        }
    }
}
