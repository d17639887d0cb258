//! Request configuration for SquadForge.
//!
//! Load a solve request from a TOML file to control budget, formation,
//! style, locks and the age band without code changes.
//!
//! # Examples
//!
//! Load a request from a TOML string:
//!
//! ```
//! use squadforge_config::RequestConfig;
//! use squadforge_core::Style;
//!
//! let config = RequestConfig::from_toml_str(r#"
//!     budget_millions = 80.0
//!     formation = "4-3-3"
//!     style = "attack"
//!
//!     [locks]
//!     "M. Salah" = "RW"
//!
//!     [age_band]
//!     min = 20
//!     max = 28
//!
//!     [solver]
//!     time_limit_seconds = 30
//! "#).unwrap();
//!
//! assert_eq!(config.style, Style::Attack);
//! let request = config.into_request().unwrap();
//! assert_eq!(request.budget_eur, 80_000_000.0);
//! ```
//!
//! Use defaults when the file is missing:
//!
//! ```
//! use squadforge_config::RequestConfig;
//!
//! let config = RequestConfig::load("request.toml").unwrap_or_default();
//! // Proceeds with an 80M attack 4-3-3 request if the file doesn't exist
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use squadforge_core::{AgeBand, Formation, LockSet, Role, SolveRequest, Style};

#[cfg(test)]
mod tests;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main request configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct RequestConfig {
    /// Weekly wage budget in millions of EUR.
    #[serde(default = "default_budget_millions")]
    pub budget_millions: f64,

    /// Outfield formation, e.g. `"4-3-3"`.
    #[serde(default = "default_formation")]
    pub formation: String,

    /// Playing style selecting the role sub-limit table.
    #[serde(default = "default_style")]
    pub style: Style,

    /// Pinned player-role assignments, keyed by player name.
    #[serde(default)]
    pub locks: BTreeMap<String, Role>,

    /// Average-age band; omit to disable.
    #[serde(default)]
    pub age_band: Option<AgeBandConfig>,

    /// Solver section.
    #[serde(default)]
    pub solver: SolverSection,
}

fn default_budget_millions() -> f64 {
    80.0
}

fn default_formation() -> String {
    "4-3-3".to_string()
}

fn default_style() -> Style {
    Style::Attack
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            budget_millions: default_budget_millions(),
            formation: default_formation(),
            style: default_style(),
            locks: BTreeMap::new(),
            age_band: None,
            solver: SolverSection::default(),
        }
    }
}

/// Age band: either a named preset or an explicit inclusive range.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AgeBandConfig {
    /// A preset name from the interactive front end: `"U20"`, `"20-28"`,
    /// `"28-32"`, `"32-45"` or `"<45"`.
    Preset(String),
    /// Explicit inclusive bounds.
    Range { min: u32, max: u32 },
}

/// Solver tuning knobs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct SolverSection {
    /// Wall-clock limit in seconds; omit for no limit.
    #[serde(default)]
    pub time_limit_seconds: Option<u64>,
}

/// Resolves a named age-band preset.
pub fn age_band_preset(name: &str) -> Option<AgeBand> {
    match name {
        "U20" => Some(AgeBand::new(12, 20)),
        "20-28" => Some(AgeBand::new(20, 28)),
        "28-32" => Some(AgeBand::new(28, 32)),
        "32-45" => Some(AgeBand::new(32, 45)),
        "<45" => Some(AgeBand::new(12, 45)),
        _ => None,
    }
}

impl RequestConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Sets the budget in millions of EUR.
    pub fn with_budget_millions(mut self, millions: f64) -> Self {
        self.budget_millions = millions;
        self
    }

    /// Sets the formation string.
    pub fn with_formation(mut self, formation: impl Into<String>) -> Self {
        self.formation = formation.into();
        self
    }

    /// Sets the playing style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Pins a player to a role.
    pub fn with_lock(mut self, name: impl Into<String>, role: Role) -> Self {
        self.locks.insert(name.into(), role);
        self
    }

    /// Sets the age band.
    pub fn with_age_band(mut self, band: AgeBandConfig) -> Self {
        self.age_band = Some(band);
        self
    }

    /// Converts the configuration into a [`SolveRequest`].
    ///
    /// This is where the budget moves from millions to EUR: the encoder
    /// downstream always works in the wage unit.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an unparseable formation, a
    /// negative budget, an unknown age-band preset or an inverted range.
    pub fn into_request(self) -> Result<SolveRequest, ConfigError> {
        if self.budget_millions < 0.0 || !self.budget_millions.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "budget_millions must be finite and non-negative, got {}",
                self.budget_millions
            )));
        }
        let formation: Formation = self
            .formation
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("{e}")))?;

        let age_band = match self.age_band {
            None => None,
            Some(AgeBandConfig::Preset(name)) => Some(age_band_preset(&name).ok_or_else(|| {
                ConfigError::Invalid(format!("unknown age band preset: {name:?}"))
            })?),
            Some(AgeBandConfig::Range { min, max }) => {
                if min > max {
                    return Err(ConfigError::Invalid(format!(
                        "age band min {min} exceeds max {max}"
                    )));
                }
                Some(AgeBand::new(min, max))
            }
        };

        let mut request = SolveRequest::new(self.budget_millions * 1_000_000.0, formation, self.style)
            .with_locks(
                self.locks
                    .into_iter()
                    .collect::<LockSet>(),
            );
        request.age_band = age_band;
        request.time_limit = self.solver.time_limit_seconds.map(Duration::from_secs);
        Ok(request)
    }
}
