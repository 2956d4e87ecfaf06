use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;
use tracing::Level;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    info_beamer: InfoBeamer,
    github: Github,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("BEAMER").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn info_beamer(&self) -> &InfoBeamer {
        &self.info_beamer
    }

    pub fn github(&self) -> &Github {
        &self.github
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    log_level: String,
    request_timeout_ms: u64,
}

impl Core {
    /// Falls back to `INFO` for an unknown level name.
    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[derive(Debug, Deserialize)]
pub struct InfoBeamer {
    url: String,
    api_key: String,
    #[serde(default)]
    dump_resources: bool,
}

impl InfoBeamer {
    pub fn url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn dump_resources(&self) -> bool {
        self.dump_resources
    }
}

#[derive(Debug, Deserialize)]
pub struct Github {
    url: String,
    username: Option<String>,
}

impl Github {
    pub fn url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core {
                    log_level: "debug".to_string(),
                    request_timeout_ms: 5_000,
                },
                info_beamer: InfoBeamer {
                    url: "https://info-beamer.com/api/v1".to_string(),
                    api_key: "key".to_string(),
                    dump_resources: false,
                },
                github: Github {
                    url: "https://api.github.com".to_string(),
                    username: None,
                },
            },
        }
    }

    pub fn info_beamer_url(mut self, url: String) -> Self {
        self.config.info_beamer.url = url;
        self
    }

    pub fn github_url(mut self, url: String) -> Self {
        self.config.github.url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
