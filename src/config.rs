use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the course catalog CSV
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Redis connection URL for the user-profile document store
    #[serde(default = "default_redis_url")]
    pub redis_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of courses returned when the request omits `count`
    #[serde(default = "default_count")]
    pub default_count: usize,

    /// Largest `count` a request may ask for
    #[serde(default = "default_max_count")]
    pub max_count: usize,
}

fn default_catalog_path() -> String {
    "CourseraDataset-Clean.csv".to_string()
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_count() -> usize {
    5
}

fn default_max_count() -> usize {
    50
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
