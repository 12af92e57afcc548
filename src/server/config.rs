//! Server configuration, layered from defaults, `classicrypt.toml` and
//! `CLASSICRYPT_*` environment variables.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Configuration file read from the working directory.
pub const CONFIG_FILE: &str = "classicrypt.toml";

/// Prefix of the environment variables overriding the configuration file.
pub const ENV_PREFIX: &str = "CLASSICRYPT_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Longest accepted message, in characters.
    #[serde(default = "default_max_message_chars")]
    pub max_message_chars: usize,
}

fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_port() -> u16 {
    5000
}
fn default_max_message_chars() -> usize {
    10_000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_message_chars: default_max_message_chars(),
        }
    }
}

impl Config {
    /// Layered sources: defaults, then [`CONFIG_FILE`], then `CLASSICRYPT_*`
    /// environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config: Config = Self::figment().extract()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        figment::Jail::expect_with(|_jail| {
            let config: Config = Config::figment().extract()?;
            assert_eq!(config, Config::default());
            assert_eq!(config.port, 5000);
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                host = "0.0.0.0"
                port = 8080
                "#,
            )?;
            let config: Config = Config::figment().extract()?;
            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.port, 8080);
            assert_eq!(config.max_message_chars, 10_000);

            jail.set_env("CLASSICRYPT_PORT", 9090);
            jail.set_env("CLASSICRYPT_MAX_MESSAGE_CHARS", 64);
            let config: Config = Config::figment().extract()?;
            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.port, 9090);
            assert_eq!(config.max_message_chars, 64);
            Ok(())
        });
    }
}
