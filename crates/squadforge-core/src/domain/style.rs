//! Tactical styles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SquadForgeError;

/// Tactical mode selecting a role sub-limit table.
///
/// `Balanced` is part of the request vocabulary but no sub-limit table is
/// defined for it; requesting it fails validation instead of solving with
/// no sub-limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Attack,
    Defend,
    Balanced,
}

impl Style {
    /// Returns the lowercase request-vocabulary form.
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Attack => "attack",
            Style::Defend => "defend",
            Style::Balanced => "balanced",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = SquadForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attack" => Ok(Style::Attack),
            "defend" => Ok(Style::Defend),
            "balanced" => Ok(Style::Balanced),
            other => Err(SquadForgeError::Config(format!(
                "unknown playing style: {other:?}"
            ))),
        }
    }
}
