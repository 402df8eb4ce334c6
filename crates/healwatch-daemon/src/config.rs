//! Configuration for healwatch-daemon

use healwatch_engine::IssueTracker;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Main daemon configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Healing suite configuration
    #[serde(default)]
    pub suite: SuiteConfig,

    /// Issue tracker used for failure links
    #[serde(default)]
    pub tracker: IssueTracker,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,

    /// Allow cross-origin requests from any origin
    #[serde(default = "default_true")]
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            enable_cors: true,
        }
    }
}

/// Healing suite configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// JSON file of test cases; the built-in suite is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8000))
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl DaemonConfig {
    /// Load configuration: defaults, then the optional file, then
    /// `HEALWATCHD_*` environment variables (`HEALWATCHD_SERVER__LISTEN_ADDR`)
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&DaemonConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("HEALWATCHD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = DaemonConfig::default();
        assert_eq!(config.server.listen_addr.port(), 8000);
        assert!(config.server.enable_cors);
        assert!(config.suite.path.is_none());
        assert_eq!(config.tracker.project, "TEST");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_without_file() {
        let config = DaemonConfig::load(None).unwrap();
        assert_eq!(config.server.listen_addr, default_listen_addr());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
listen_addr = "0.0.0.0:9100"
enable_cors = false

[suite]
path = "/etc/healwatch/suite.json"

[tracker]
base_url = "https://issues.example.org"
project = "UI"
"#
        )
        .unwrap();

        let config = DaemonConfig::load(file.path().to_str()).unwrap();
        assert_eq!(config.server.listen_addr.port(), 9100);
        assert!(!config.server.enable_cors);
        assert_eq!(
            config.suite.path,
            Some(PathBuf::from("/etc/healwatch/suite.json"))
        );
        assert_eq!(config.tracker.project, "UI");
        assert_eq!(config.logging.level, "info");
    }
}
