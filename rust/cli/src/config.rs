//! Layered configuration: defaults, then a TOML file named by
//! `HANDRANK_CONFIG`, then `HANDRANK_*` environment variables. Command-line
//! flags override the result in the command handlers.

use serde::{Deserialize, Serialize};
use std::fs;

use handrank_engine::deck::MAX_PLAYERS;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub players: u8,
    pub rounds: u64,
    pub unicode: bool,
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
    pub seed: ValueSource,
    pub players: ValueSource,
    pub rounds: ValueSource,
    pub unicode: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            players: ValueSource::Default,
            rounds: ValueSource::Default,
            unicode: ValueSource::Default,
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
            seed: None,
            players: 3,
            rounds: 1_000,
            unicode: true,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Layered values without range checks. Commands apply their flags to the
/// result and then check only the fields they use.
pub fn load_layered() -> Result<Config, ConfigError> {
    read_layers().map(|resolved| resolved.config)
}

/// Layered values with sources, checked as a whole.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let resolved = read_layers()?;
    validate(&resolved.config)?;
    Ok(resolved)
}

fn read_layers() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HANDRANK_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.rounds {
            cfg.rounds = v;
            sources.rounds = ValueSource::File;
        }
        if let Some(v) = f.unicode {
            cfg.unicode = v;
            sources.unicode = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("HANDRANK_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(players) = std::env::var("HANDRANK_PLAYERS")
        && !players.is_empty()
    {
        cfg.players = players
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid players".into()))?;
        sources.players = ValueSource::Env;
    }
    if let Ok(rounds) = std::env::var("HANDRANK_ROUNDS")
        && !rounds.is_empty()
    {
        cfg.rounds = rounds
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid rounds".into()))?;
        sources.rounds = ValueSource::Env;
    }
    if let Ok(unicode) = std::env::var("HANDRANK_UNICODE")
        && !unicode.is_empty()
    {
        cfg.unicode =
            parse_bool(&unicode).ok_or_else(|| ConfigError::Invalid("Invalid unicode".into()))?;
        sources.unicode = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    players: Option<u8>,
    #[serde(default)]
    rounds: Option<u64>,
    #[serde(default)]
    unicode: Option<bool>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    check_players(cfg.players)?;
    check_rounds(cfg.rounds)?;
    Ok(())
}

pub fn check_players(players: u8) -> Result<u8, ConfigError> {
    if players == 0 || players as usize > MAX_PLAYERS {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: players must be between 1 and {}",
            MAX_PLAYERS
        )));
    }
    Ok(players)
}

pub fn check_rounds(rounds: u64) -> Result<u64, ConfigError> {
    if rounds == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: rounds must be >0".into(),
        ));
    }
    Ok(rounds)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
