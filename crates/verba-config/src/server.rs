use serde::{Deserialize, Serialize};

use crate::{Lookup, parse_or};

fn default_bind_addr() -> String {
    "127.0.0.1:8000".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP server listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Emit logs as JSON lines
    #[serde(default)]
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            log_json: false,
        }
    }
}

impl ServerConfig {
    pub(crate) fn from_lookup(lookup: &Lookup) -> Self {
        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(default_bind_addr),
            log_json: parse_or(lookup, "LOG_JSON", false),
        }
    }
}
