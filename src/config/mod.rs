//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `VERDICT_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::scoring::{ScoringPolicy, Weights};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `VERDICT_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8000`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// CSV file holding the labelled corpus. Default: `data/preprocessed_dataset.csv`.
    pub corpus_path: PathBuf,

    /// Directory with the sentence-embedding model (`config.json`,
    /// `model.safetensors`, `tokenizer.json`). Unset runs the stub embedder.
    pub model_path: Option<PathBuf>,

    /// LanguageTool server base URL. Unset runs the stub grammar checker.
    pub languagetool_url: Option<String>,

    /// Directory for request-scoped upload files. Default: the OS temp dir.
    pub upload_dir: PathBuf,

    /// Optional directory served at `/` for the browser frontend.
    pub static_dir: Option<PathBuf>,

    /// Upper bound on a single evaluation. Default: 120s.
    pub request_timeout: Duration,

    /// Request body limit in bytes. Default: 20 MiB.
    pub max_upload_bytes: usize,

    /// Composite weights and acceptance threshold.
    pub policy: ScoringPolicy,
}

/// Default corpus location used when `VERDICT_CORPUS_PATH` is not set.
pub const DEFAULT_CORPUS_PATH: &str = "data/preprocessed_dataset.csv";

/// Default evaluation timeout.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Default request body limit.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            corpus_path: PathBuf::from(DEFAULT_CORPUS_PATH),
            model_path: None,
            languagetool_url: None,
            upload_dir: env::temp_dir(),
            static_dir: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            policy: ScoringPolicy::default(),
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "VERDICT_PORT";
    const ENV_BIND_ADDR: &'static str = "VERDICT_BIND_ADDR";
    const ENV_CORPUS_PATH: &'static str = "VERDICT_CORPUS_PATH";
    const ENV_MODEL_PATH: &'static str = "VERDICT_MODEL_PATH";
    const ENV_LANGUAGETOOL_URL: &'static str = "VERDICT_LANGUAGETOOL_URL";
    const ENV_UPLOAD_DIR: &'static str = "VERDICT_UPLOAD_DIR";
    const ENV_STATIC_DIR: &'static str = "VERDICT_STATIC_DIR";
    const ENV_REQUEST_TIMEOUT_SECS: &'static str = "VERDICT_REQUEST_TIMEOUT_SECS";
    const ENV_MAX_UPLOAD_BYTES: &'static str = "VERDICT_MAX_UPLOAD_BYTES";
    const ENV_WEIGHT_NOVELTY: &'static str = "VERDICT_WEIGHT_NOVELTY";
    const ENV_WEIGHT_QUALITY: &'static str = "VERDICT_WEIGHT_QUALITY";
    const ENV_WEIGHT_RELEVANCE: &'static str = "VERDICT_WEIGHT_RELEVANCE";
    const ENV_WEIGHT_SENTIMENT: &'static str = "VERDICT_WEIGHT_SENTIMENT";
    const ENV_ACCEPT_THRESHOLD: &'static str = "VERDICT_ACCEPT_THRESHOLD";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let corpus_path = Self::parse_path_from_env(Self::ENV_CORPUS_PATH, defaults.corpus_path);
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let languagetool_url = Self::parse_optional_string_from_env(Self::ENV_LANGUAGETOOL_URL);
        let upload_dir = Self::parse_path_from_env(Self::ENV_UPLOAD_DIR, defaults.upload_dir);
        let static_dir = Self::parse_optional_path_from_env(Self::ENV_STATIC_DIR);
        let request_timeout = Duration::from_secs(Self::parse_u64_from_env(
            Self::ENV_REQUEST_TIMEOUT_SECS,
            defaults.request_timeout.as_secs(),
        ));
        let max_upload_bytes = Self::parse_u64_from_env(
            Self::ENV_MAX_UPLOAD_BYTES,
            defaults.max_upload_bytes as u64,
        ) as usize;

        let default_weights = defaults.policy.weights;
        let weights = Weights {
            novelty: Self::parse_f64_from_env(Self::ENV_WEIGHT_NOVELTY, default_weights.novelty)?,
            quality: Self::parse_f64_from_env(Self::ENV_WEIGHT_QUALITY, default_weights.quality)?,
            relevance: Self::parse_f64_from_env(
                Self::ENV_WEIGHT_RELEVANCE,
                default_weights.relevance,
            )?,
            sentiment: Self::parse_f64_from_env(
                Self::ENV_WEIGHT_SENTIMENT,
                default_weights.sentiment,
            )?,
        };
        let accept_threshold = Self::parse_f64_from_env(
            Self::ENV_ACCEPT_THRESHOLD,
            defaults.policy.accept_threshold,
        )?;

        Ok(Self {
            port,
            bind_addr,
            corpus_path,
            model_path,
            languagetool_url,
            upload_dir,
            static_dir,
            request_timeout,
            max_upload_bytes,
            policy: ScoringPolicy {
                weights,
                accept_threshold,
            },
        })
    }

    /// Validates paths and policy invariants (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.corpus_path.exists() {
            return Err(ConfigError::PathNotFound {
                path: self.corpus_path.clone(),
            });
        }
        if !self.corpus_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.corpus_path.clone(),
            });
        }

        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if self.upload_dir.exists() && !self.upload_dir.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.upload_dir.clone(),
            });
        }

        if let Some(ref path) = self.static_dir
            && !path.is_dir()
        {
            return Err(ConfigError::NotADirectory { path: path.clone() });
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidPolicy {
                reason: "request timeout must be greater than zero".to_string(),
            });
        }

        self.policy
            .validate()
            .map_err(|reason| ConfigError::InvalidPolicy { reason })
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        Self::parse_optional_string_from_env(var_name).map(PathBuf::from)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    // Unlike the other numeric settings, unparseable policy values are an error.
    fn parse_f64_from_env(var_name: &'static str, default: f64) -> Result<f64, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::FloatParseError {
                    name: var_name,
                    value,
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }
}
