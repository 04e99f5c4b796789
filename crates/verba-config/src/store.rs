use serde::{Deserialize, Serialize};

use crate::Lookup;

fn default_mongo_url() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_mongo_db() -> String {
    "verba".to_string()
}

fn default_collection() -> String {
    "translations".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local, lost on restart
    #[default]
    Memory,
    Mongo,
}

impl StoreBackend {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "memory" => Some(StoreBackend::Memory),
            "mongo" | "mongodb" => Some(StoreBackend::Mongo),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    #[serde(default = "default_mongo_url")]
    pub mongo_url: String,
    #[serde(default = "default_mongo_db")]
    pub mongo_db: String,
    #[serde(default = "default_collection")]
    pub collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            mongo_url: default_mongo_url(),
            mongo_db: default_mongo_db(),
            collection: default_collection(),
        }
    }
}

impl StoreConfig {
    pub(crate) fn from_lookup(lookup: &Lookup) -> Self {
        let backend = lookup("STORE_BACKEND")
            .and_then(|name| {
                let backend = StoreBackend::from_name(&name);
                if backend.is_none() {
                    tracing::warn!("Unknown STORE_BACKEND {name}, using memory");
                }
                backend
            })
            .unwrap_or_default();

        Self {
            backend,
            mongo_url: lookup("MONGO_URL").unwrap_or_else(default_mongo_url),
            mongo_db: lookup("MONGO_DB").unwrap_or_else(default_mongo_db),
            collection: lookup("MONGO_COLLECTION").unwrap_or_else(default_collection),
        }
    }
}
