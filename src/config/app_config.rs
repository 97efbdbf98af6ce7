use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote catalog API endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

/// Cache sizing and persistence settings
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Serialized byte size the whole store may reach before eviction
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
    /// Fraction of entries removed per eviction pass
    #[serde(default = "default_evict_fraction")]
    pub evict_fraction: f64,
    /// Fixed storage key the serialized store is persisted under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

/// Durable storage backend settings
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory the file-backed store writes into
    #[serde(default = "default_storage_root")]
    pub root: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_max_bytes() -> usize {
    4_000_000
}

fn default_evict_fraction() -> f64 {
    0.4
}

fn default_storage_key() -> String {
    "app_data_cache".to_string()
}

fn default_storage_root() -> String {
    ".resourcebase".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.resourcebase.example".to_string(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_bytes: default_max_bytes(),
            evict_fraction: default_evict_fraction(),
            storage_key: default_storage_key(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_storage_root(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl CacheConfig {
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
