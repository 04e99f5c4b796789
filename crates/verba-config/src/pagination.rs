use serde::{Deserialize, Serialize};

use crate::{Lookup, parse_or};

fn default_limit() -> u64 {
    10
}

fn default_sorting() -> String {
    "asc".to_string()
}

/// Listing defaults applied when a request leaves them out
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// `asc` or `desc`
    #[serde(default = "default_sorting")]
    pub sorting: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
            sorting: default_sorting(),
        }
    }
}

impl PaginationConfig {
    pub(crate) fn from_lookup(lookup: &Lookup) -> Self {
        Self {
            skip: parse_or(lookup, "SKIP", 0),
            limit: parse_or(lookup, "LIMIT", default_limit()),
            sorting: lookup("SORTING").unwrap_or_else(default_sorting),
        }
    }
}
