use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const DEFAULT_CONFIG_PATH: &str = "~/.halrc.toml";
pub const DEFAULT_TRIGGER: &str = "hal";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Index alias to base endpoint, e.g. `ai = "http://localhost:8983/solr/ai"`.
    #[serde(default)]
    pub solr: BTreeMap<String, String>,
    #[serde(default)]
    pub bot: BotSettings,
    #[serde(default)]
    pub http: HttpSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotSettings {
    /// Word every search command starts with.
    pub trigger: String,
    /// Register the `echo <text>` binding.
    pub echo: bool,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self { trigger: DEFAULT_TRIGGER.to_string(), echo: false }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSettings {
    pub timeout_secs: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self { timeout_secs: DEFAULT_TIMEOUT_SECS }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.bot.trigger.is_empty() || self.bot.trigger.chars().any(char::is_whitespace) {
            return Err(Error::InvalidConfig(format!(
                "bot.trigger must be a single word, got {:?}",
                self.bot.trigger
            )));
        }
        if self.http.timeout_secs == 0 {
            return Err(Error::InvalidConfig("http.timeout_secs must be greater than zero".to_string()));
        }
        for (alias, endpoint) in &self.solr {
            let parsed = url::Url::parse(endpoint)
                .map_err(|e| Error::InvalidConfig(format!("solr.{alias}: {endpoint:?} is not a URL: {e}")))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(Error::InvalidConfig(format!(
                    "solr.{alias}: unsupported scheme {:?}",
                    parsed.scheme()
                )));
            }
        }
        Ok(())
    }
}

pub struct Config {
    settings: Settings,
}

impl Config {
    /// Load from `HALBOT_CONFIG` (or `~/.halrc.toml`), the `RUST_ENV` overlay
    /// next to it, and `HALBOT_*` environment variables.
    pub fn load() -> Result<Self> {
        let path = env::var("HALBOT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(expand_path(path))
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_for_env(path.as_ref(), &env_name)
    }

    pub fn load_for_env(path: &Path, env_name: &str) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default())).merge(Toml::file(path));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file(overlay_path(path, "dev"))),
            "prod" | "production" => figment = figment.merge(Toml::file(overlay_path(path, "prod"))),
            "test" | "testing" => figment = figment.merge(Toml::file(overlay_path(path, "test"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("HALBOT_").split("__"));
        Self::from_figment(figment)
    }

    pub fn from_toml_str(document: &str) -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(Settings::default())).merge(Toml::string(document));
        Self::from_figment(figment)
    }

    fn from_figment(figment: Figment) -> Result<Self> {
        let settings: Settings = figment
            .extract()
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

/// `~/.halrc.toml` + `dev` -> `~/.halrc.dev.toml`
fn overlay_path(path: &Path, env_name: &str) -> PathBuf {
    let stem = path.with_extension("");
    PathBuf::from(format!("{}.{}.toml", stem.display(), env_name))
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}
