use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, time::Duration};
use url::Url;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    pub server: ServerConfig,
    pub site: SiteConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub indexnow: IndexNowConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
        }
    }
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn default_environment() -> String {
    "development".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub name: String,
    /// Absolute url the site is reachable at, used for canonical links,
    /// the sitemap and IndexNow.
    pub public_url: String,
}

impl SiteConfig {
    /// `path` appended to the public url without doubling the slash.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.public_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    /// Email delivery endpoint the contact form posts to
    #[serde(default)]
    pub api_url: String,
    #[serde(default = "default_email_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            timeout_secs: default_email_timeout_secs(),
        }
    }
}

impl EmailConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_email_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct IndexNowConfig {
    /// Empty disables the IndexNow routes
    #[serde(default)]
    pub key: String,
    #[serde(default = "default_indexnow_engines")]
    pub engines: Vec<String>,
}

impl Default for IndexNowConfig {
    fn default() -> Self {
        Self {
            key: String::new(),
            engines: default_indexnow_engines(),
        }
    }
}

impl IndexNowConfig {
    pub fn is_enabled(&self) -> bool {
        !self.key.is_empty()
    }
}

fn default_indexnow_engines() -> Vec<String> {
    vec![
        "https://api.indexnow.org/indexnow".to_string(),
        "https://www.bing.com/indexnow".to_string(),
    ]
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// Empty disables the database
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
        }
    }
}

fn default_max_connections() -> u32 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (VIBEDOCTOR__EMAIL__API_URL, etc.)
    /// 2. Unprefixed deployment variables (EMAIL_API_URL, PORT, ...)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("site.name", "VibeDoctor")?
            .set_default("site.public_url", "http://localhost:8080")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        let legacy = [
            ("PORT", "server.port"),
            ("PUBLIC_URL", "site.public_url"),
            ("EMAIL_API_URL", "email.api_url"),
            ("DATABASE_URL", "database.url"),
            ("INDEXNOW_KEY", "indexnow.key"),
            ("ENVIRONMENT", "app.environment"),
        ];

        for (var, key) in legacy {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        // Prefixed variables win over the unprefixed ones
        let prefixed = Environment::with_prefix("VIBEDOCTOR")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("indexnow.engines");

        builder = builder.add_source(prefixed);

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.email.api_url.is_empty() {
            return Err("Email api url is required (EMAIL_API_URL)".to_string());
        }
        match Url::parse(&self.email.api_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => {
                return Err(format!(
                    "Email api url must be an http(s) url, got '{}'",
                    self.email.api_url
                ));
            }
        }
        if self.email.timeout_secs == 0 {
            return Err("Email timeout_secs must be greater than 0".to_string());
        }
        if Url::parse(&self.site.public_url).is_err() {
            return Err(format!(
                "Site public_url must be an absolute url, got '{}'",
                self.site.public_url
            ));
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !self.database.url.is_empty() && self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        Ok(())
    }
}
