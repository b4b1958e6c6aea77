use std::env;
use std::net::SocketAddr;

/// Runtime configuration, read from the environment.
#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// `Cache-Control: max-age` on zoning responses. The table only changes
    /// with a deploy, so clients revalidate hourly by default.
    pub cache_max_age_secs: u32,
    pub cors_any: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 9200)),
            cache_max_age_secs: 3600,
            cors_any: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidAddr { value: String, reason: String },
    InvalidNumber { key: &'static str, value: String },
    InvalidBool { key: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidAddr { value, reason } => {
                write!(f, "invalid ZONING_ADDR {value:?}: {reason}")
            }
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "invalid number for {key}: {value:?}")
            }
            ConfigError::InvalidBool { key, value } => {
                write!(f, "invalid boolean for {key}: {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let addr = match lookup("ZONING_ADDR") {
            Some(value) => value.parse::<SocketAddr>().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidAddr {
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => defaults.addr,
        };

        Ok(Self {
            addr,
            cache_max_age_secs: env_var_u32(
                &lookup,
                "ZONING_CACHE_MAX_AGE",
                defaults.cache_max_age_secs,
            )?,
            cors_any: env_var_bool(&lookup, "ZONING_CORS_ANY", defaults.cors_any)?,
        })
    }
}

fn env_var_u32(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: u32,
) -> Result<u32, ConfigError> {
    let Some(value) = lookup(key) else {
        return Ok(default);
    };
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ConfigError::InvalidNumber { key, value })
}

fn env_var_bool(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(value) = lookup(key) else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool { key, value }),
    }
}
