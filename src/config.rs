use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::agent::{Agent, AlphaBetaAgent, MinimaxAgent, RandomAgent};
use crate::error::ConfigError;
use crate::isolation::{Board, EvaluatorKind, MAX_SIDE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Minimax,
    #[default]
    AlphaBeta,
    Random,
}

/// Search parameters of one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub kind: AgentKind,
    /// plies searched by the fixed-depth minimax agent
    pub search_depth: u32,
    /// optional cap for iterative deepening
    pub max_depth: Option<u32>,
    pub evaluator: EvaluatorKind,
    /// milliseconds left on the clock at which the search gives up
    pub timeout: f64,
    /// seeds the random fallback move; entropy if absent
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            kind: AgentKind::AlphaBeta,
            search_depth: 3,
            max_depth: None,
            evaluator: EvaluatorKind::CenterWeighted,
            timeout: 50.0,
            seed: None,
        }
    }
}

impl AgentConfig {
    pub fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::Validation(format!("{name}.search_depth must be >= 1")));
        }
        if self.max_depth == Some(0) {
            return Err(ConfigError::Validation(format!("{name}.max_depth must be >= 1")));
        }
        if !self.timeout.is_finite() || self.timeout <= 0.0 {
            return Err(ConfigError::Validation(format!("{name}.timeout must be > 0")));
        }

        Ok(())
    }

    /// `seed_offset` is added to the configured seed so agents built for different games don't share a sequence.
    pub fn build(&self, seed_offset: u64) -> Box<dyn Agent<Board> + Send> {
        let evaluator = self.evaluator.valuation_fn();
        let seed = self.seed.map(|seed| seed.wrapping_add(seed_offset));

        match self.kind {
            AgentKind::Minimax => Box::new(MinimaxAgent::new(self.search_depth, evaluator, self.timeout)),
            AgentKind::AlphaBeta => {
                Box::new(AlphaBetaAgent::new(evaluator, self.timeout, seed).with_max_depth(self.max_depth))
            }
            AgentKind::Random => Box::new(RandomAgent::new(seed)),
        }
    }
}

/*====================================================================================================================*/

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub width: u8,
    pub height: u8,
    pub games: usize,
    /// wall-clock budget per move in milliseconds
    pub time_limit_ms: f64,
    /// random plies played before the agents take over
    pub opening_moves: u32,
    pub workers: usize,
    pub seed: u64,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        TournamentConfig {
            width: 7,
            height: 7,
            games: 20,
            time_limit_ms: 150.0,
            opening_moves: 2,
            workers: num_cpus::get(),
            seed: 0,
        }
    }
}

/*====================================================================================================================*/

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tournament: TournamentConfig,
    pub player_one: AgentConfig,
    pub player_two: AgentConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            tournament: TournamentConfig::default(),
            player_one: AgentConfig::default(),
            player_two: AgentConfig {
                evaluator: EvaluatorKind::Improved,
                ..AgentConfig::default()
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let tournament = &self.tournament;

        if tournament.width == 0 || tournament.height == 0 {
            return Err(ConfigError::Validation("tournament board needs at least one cell".into()));
        }
        if tournament.width > MAX_SIDE || tournament.height > MAX_SIDE {
            return Err(ConfigError::Validation(format!(
                "tournament board can't be larger than {MAX_SIDE}x{MAX_SIDE}"
            )));
        }
        if tournament.games == 0 {
            return Err(ConfigError::Validation("tournament.games must be >= 1".into()));
        }
        if tournament.workers == 0 {
            return Err(ConfigError::Validation("tournament.workers must be >= 1".into()));
        }

        self.player_one.validate("player_one")?;
        self.player_two.validate("player_two")?;

        for (name, agent) in [("player_one", &self.player_one), ("player_two", &self.player_two)] {
            if tournament.time_limit_ms.is_nan() || tournament.time_limit_ms <= agent.timeout {
                return Err(ConfigError::Validation(format!(
                    "tournament.time_limit_ms must be larger than {name}.timeout"
                )));
            }
        }

        Ok(())
    }

    /// TOML with all default values, useful as a starting point for a config file.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

/*====================================================================================================================*/
