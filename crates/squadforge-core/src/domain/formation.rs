//! Formation shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::role::PositionGroup;
use crate::error::{Result, SquadForgeError};

/// Total squad size, goalkeeper included.
pub const SQUAD_SIZE: u32 = 11;

/// Coarse outfield counts plus the goalkeeper.
///
/// Parses from the usual outfield notation; the goalkeeper is implied:
///
/// ```
/// use squadforge_core::Formation;
///
/// let f: Formation = "4-3-3".parse().unwrap();
/// assert_eq!((f.defenders, f.midfielders, f.forwards, f.goalkeepers), (4, 3, 3, 1));
/// assert!(f.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Formation {
    pub defenders: u32,
    pub midfielders: u32,
    pub forwards: u32,
    pub goalkeepers: u32,
}

impl Formation {
    /// Creates a single-keeper formation from outfield counts.
    pub fn new(defenders: u32, midfielders: u32, forwards: u32) -> Self {
        Self {
            defenders,
            midfielders,
            forwards,
            goalkeepers: 1,
        }
    }

    /// Total number of players the formation demands.
    pub fn total(&self) -> u32 {
        self.defenders + self.midfielders + self.forwards + self.goalkeepers
    }

    /// Required count for one coarse group.
    pub fn count_for(&self, group: PositionGroup) -> u32 {
        match group {
            PositionGroup::GK => self.goalkeepers,
            PositionGroup::DF => self.defenders,
            PositionGroup::MF => self.midfielders,
            PositionGroup::FW => self.forwards,
        }
    }

    /// Checks the formation shape: exactly one keeper, eleven in total.
    ///
    /// # Errors
    ///
    /// Returns [`SquadForgeError::Config`] otherwise.
    pub fn validate(&self) -> Result<()> {
        if self.goalkeepers != 1 {
            return Err(SquadForgeError::Config(format!(
                "formation {self} must field exactly one goalkeeper"
            )));
        }
        if self.total() != SQUAD_SIZE {
            return Err(SquadForgeError::Config(format!(
                "formation {self} fields {} players, expected {SQUAD_SIZE}",
                self.total()
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.defenders, self.midfielders, self.forwards
        )
    }
}

impl FromStr for Formation {
    type Err = SquadForgeError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<u32> = s
            .split('-')
            .map(|p| {
                p.trim()
                    .parse::<u32>()
                    .map_err(|_| SquadForgeError::Config(format!("invalid formation: {s:?}")))
            })
            .collect::<Result<_>>()?;
        match parts.as_slice() {
            [df, mf, fw] => Ok(Formation::new(*df, *mf, *fw)),
            _ => Err(SquadForgeError::Config(format!(
                "invalid formation: {s:?} (expected DF-MF-FW)"
            ))),
        }
    }
}
