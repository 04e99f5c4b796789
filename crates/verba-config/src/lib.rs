use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::pagination::PaginationConfig;
use self::server::ServerConfig;
use self::store::StoreConfig;
use self::translator::TranslatorConfig;

pub mod pagination;
pub mod server;
pub mod store;
pub mod translator;

pub use self::store::StoreBackend;

/// Variable source, `env::var` outside of tests
pub type Lookup = dyn Fn(&str) -> Option<String>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub pagination: PaginationConfig,
    pub translator: TranslatorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub title: String,
    pub version: String,
    pub description: String,
    pub debug: bool,
}

impl Config {
    /// Read configuration from the process environment
    pub fn new() -> Self {
        Self::from_lookup(&|key: &str| env::var(key).ok())
    }

    pub fn from_lookup(lookup: &Lookup) -> Self {
        let app = AppConfig {
            title: lookup("APP_TITLE").unwrap_or_else(|| "Verba".to_string()),
            version: lookup("APP_VERSION")
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
            description: lookup("APP_DESCRIPTION")
                .unwrap_or_else(|| "Word translation lookup service".to_string()),
            debug: parse_or(lookup, "DEBUG", false),
        };

        Config {
            app,
            server: ServerConfig::from_lookup(lookup),
            store: StoreConfig::from_lookup(lookup),
            pagination: PaginationConfig::from_lookup(lookup),
            translator: TranslatorConfig::from_lookup(lookup),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(&|_: &str| None)
    }
}

/// Load a dotenv file into the process environment.
///
/// Without an explicit path, `.env.<ENVIRONMENT>` is tried (`development`
/// unless `ENVIRONMENT` says otherwise). Variables already set win. Returns
/// the file that was loaded, if any.
pub fn load_dotenv(path: Option<&Path>) -> Option<PathBuf> {
    let result = match path {
        Some(path) => dotenvy::from_path(path).map(|_| path.to_path_buf()),
        None => {
            let environment =
                env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
            dotenvy::from_filename(format!(".env.{environment}"))
        }
    };

    match result {
        Ok(loaded) => Some(loaded),
        Err(e) if e.not_found() => None,
        Err(e) => {
            tracing::warn!("Failed to load env file: {e}");
            None
        }
    }
}

/// Parse a variable, falling back to `default` when missing or malformed
pub(crate) fn parse_or<T: FromStr>(lookup: &Lookup, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
