use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use verba_config::{Config, StoreBackend};
use verba_core::{InMemoryWordStore, ServiceOptions, SortDirection, TranslationService, WordStore};
use verba_mongo::MongoWordStore;
use verba_provider_google::GoogleTranslator;
use verba_translator::Translator;

pub struct AppState {
    pub config: Config,
    pub translations: TranslationService,
}

impl AppState {
    /// Wire the configured store and the Google provider
    pub async fn build(config: Config) -> anyhow::Result<Self> {
        let store: Arc<dyn WordStore> = match config.store.backend {
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory store, translations are lost on restart");
                Arc::new(InMemoryWordStore::new())
            }
            StoreBackend::Mongo => {
                let store = MongoWordStore::connect(
                    &config.store.mongo_url,
                    &config.store.mongo_db,
                    &config.store.collection,
                )
                .await
                .context("failed to create MongoDB client")?;

                match store.ping().await {
                    Ok(()) => {
                        if let Err(e) = store.ensure_indexes().await {
                            tracing::warn!("failed to create indexes: {e}");
                        }
                    }
                    Err(e) => tracing::warn!("MongoDB not reachable yet: {e}"),
                }

                tracing::info!(
                    "Using MongoDB store {}/{}",
                    config.store.mongo_db,
                    config.store.collection
                );
                Arc::new(store)
            }
        };

        let translator = Arc::new(GoogleTranslator::new(config.translator.api_url.clone()));
        tracing::info!("Translation provider: {}", translator.metadata().name);

        Ok(Self::with_parts(config, store, translator))
    }

    pub fn with_parts(
        config: Config,
        store: Arc<dyn WordStore>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        let options = service_options(&config);

        Self {
            translations: TranslationService::new(store, translator, options),
            config,
        }
    }
}

fn service_options(config: &Config) -> ServiceOptions {
    ServiceOptions {
        provider_timeout: Duration::from_millis(config.translator.timeout_ms),
        min_word_length: config.translator.min_word_length,
        default_skip: config.pagination.skip,
        default_limit: config.pagination.limit,
        default_sort: SortDirection::from_param(&config.pagination.sorting),
    }
}
