use elemental_ai::{Difficulty, ParseDifficultyError};
use elemental_engine::game::TableConfig;
use elemental_engine::player::{DEFAULT_RAISE, STARTING_CHIPS};
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_chips: u32,
    pub default_raise: u32,
    pub seed: Option<u64>,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_chips: ValueSource,
    pub default_raise: ValueSource,
    pub seed: ValueSource,
    pub difficulty: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_chips: ValueSource::Default,
            default_raise: ValueSource::Default,
            seed: ValueSource::Default,
            difficulty: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_chips: STARTING_CHIPS,
            default_raise: DEFAULT_RAISE,
            seed: None,
            difficulty: Difficulty::Medium,
        }
    }
}

impl Config {
    /// Table settings for a new game; `seed` overrides the configured one.
    pub fn table_config(&self, seed: Option<u64>) -> TableConfig {
        TableConfig {
            starting_chips: self.starting_chips,
            default_raise: self.default_raise,
            seed: seed.or(self.seed),
            ..TableConfig::default()
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Difficulty(#[from] ParseDifficultyError),
    #[error("{0}")]
    Invalid(String),
}

pub const CONFIG_ENV: &str = "ELEMENTAL_CONFIG";
pub const SEED_ENV: &str = "ELEMENTAL_SEED";
pub const DIFFICULTY_ENV: &str = "ELEMENTAL_DIFFICULTY";
pub const STARTING_CHIPS_ENV: &str = "ELEMENTAL_STARTING_CHIPS";
pub const DEFAULT_RAISE_ENV: &str = "ELEMENTAL_DEFAULT_RAISE";

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Defaults, then the TOML file named by `ELEMENTAL_CONFIG`, then
/// individual environment variables. Later layers win.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_chips {
            cfg.starting_chips = v;
            sources.starting_chips = ValueSource::File;
        }
        if let Some(v) = f.default_raise {
            cfg.default_raise = v;
            sources.default_raise = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.difficulty {
            cfg.difficulty = v.parse()?;
            sources.difficulty = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed '{}'", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(difficulty) = std::env::var(DIFFICULTY_ENV)
        && !difficulty.is_empty()
    {
        cfg.difficulty = difficulty.parse()?;
        sources.difficulty = ValueSource::Env;
    }
    if let Ok(chips) = std::env::var(STARTING_CHIPS_ENV)
        && !chips.is_empty()
    {
        cfg.starting_chips = chips
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid starting chips '{}'", chips)))?;
        sources.starting_chips = ValueSource::Env;
    }
    if let Ok(raise) = std::env::var(DEFAULT_RAISE_ENV)
        && !raise.is_empty()
    {
        cfg.default_raise = raise
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid default raise '{}'", raise)))?;
        sources.default_raise = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_chips: Option<u32>,
    #[serde(default)]
    default_raise: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    difficulty: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_chips == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_chips must be >0".into(),
        ));
    }
    if cfg.default_raise == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: default_raise must be >0".into(),
        ));
    }
    Ok(())
}
