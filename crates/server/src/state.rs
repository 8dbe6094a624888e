use crate::auth::verify_publish_token;
use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use folio::{ArticleStore, StopwordSet};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Article directory (shared across requests)
    pub store: Arc<ArticleStore>,

    /// Stopwords, loaded once at startup
    pub stopwords: Arc<StopwordSet>,

    /// Prometheus recorder handle, when one is installed
    pub metrics: Option<PrometheusHandle>,

    publish_secret: Arc<str>,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let stopwords = match config.resolved_stopwords_path() {
            Some(path) => StopwordSet::load(&path).map_err(|err| {
                ServerError::Config(format!("cannot read stopwords {}: {err}", path.display()))
            })?,
            None => {
                tracing::info!("No stopword file configured, using built-in list");
                StopwordSet::builtin()
            }
        };

        let store = ArticleStore::open(&config.articles_dir, &config.article_extension)?;

        let publish_secret: Arc<str> = if config.publish_secret.is_empty() {
            tracing::warn!("No publish secret configured, using an ephemeral random secret");
            uuid::Uuid::new_v4().simple().to_string().into()
        } else {
            config.publish_secret.as_str().into()
        };

        Ok(Self {
            config: Arc::new(config),
            store: Arc::new(store),
            stopwords: Arc::new(stopwords),
            metrics: None,
            publish_secret,
        })
    }

    /// Attach an installed Prometheus recorder
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Check a publish token for article `name`
    pub fn is_valid_publish_token(&self, name: &str, token: &str) -> bool {
        verify_publish_token(&self.publish_secret, name, token)
    }
}
