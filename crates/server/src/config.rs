use folio::{ListingOptions, DEFAULT_KEYWORD_COUNT};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum publish body size in MB
    #[serde(default = "default_max_body_size_mb")]
    pub max_body_size_mb: usize,

    /// Directory holding article files
    #[serde(default = "default_articles_dir")]
    pub articles_dir: PathBuf,

    /// Article file extension, without the dot
    #[serde(default = "default_article_extension")]
    pub article_extension: String,

    /// Static site root served for every non-API path
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    /// Stopword list, one word per line
    #[serde(default)]
    pub stopwords_path: Option<PathBuf>,

    /// Shared secret publish tokens are derived from
    #[serde(default)]
    pub publish_secret: String,

    /// Keywords reported per article in listings
    #[serde(default = "default_keyword_count")]
    pub keyword_count: usize,

    /// Leave malformed articles out of listings instead of failing the request
    #[serde(default = "default_true")]
    pub skip_malformed: bool,

    /// Enable CORS
    #[serde(default)]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Metrics endpoint enabled
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_mb: default_max_body_size_mb(),
            articles_dir: default_articles_dir(),
            article_extension: default_article_extension(),
            public_dir: default_public_dir(),
            stopwords_path: None,
            publish_secret: String::new(),
            keyword_count: default_keyword_count(),
            skip_malformed: default_true(),
            enable_cors: false,
            log_level: default_log_level(),
            metrics_enabled: default_true(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from an optional `folio.*` file, overridden by
    /// `FOLIO__*` environment variables.
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("folio").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"));

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }

    /// Stopword file to load: the configured path, or `stopwords.txt` in the
    /// articles directory when present.
    pub fn resolved_stopwords_path(&self) -> Option<PathBuf> {
        match &self.stopwords_path {
            Some(path) => Some(path.clone()),
            None => {
                let candidate = self.articles_dir.join("stopwords.txt");
                candidate.is_file().then_some(candidate)
            }
        }
    }

    pub fn listing_options(&self) -> ListingOptions {
        ListingOptions {
            keyword_count: self.keyword_count,
            skip_malformed: self.skip_malformed,
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_size_mb() -> usize {
    2
}

fn default_articles_dir() -> PathBuf {
    PathBuf::from("articles")
}

fn default_article_extension() -> String {
    "rst".to_string()
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_keyword_count() -> usize {
    DEFAULT_KEYWORD_COUNT
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
