//! Read-only player roster.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::Player;
use crate::error::{Result, SquadForgeError};

/// An ordered, validated collection of players.
///
/// The roster is read-only input: a solve never mutates it, and one
/// roster may back any number of independent solves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Builds a roster, validating every player record.
    ///
    /// # Errors
    ///
    /// Returns [`SquadForgeError::Config`] for an empty roster, a
    /// duplicated player name, or any per-player invariant violation.
    pub fn new(players: Vec<Player>) -> Result<Self> {
        let roster = Self { players };
        roster.validate()?;
        Ok(roster)
    }

    /// Parses a roster from a JSON array of player records.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let players: Vec<Player> = serde_json::from_str(s)?;
        Self::new(players)
    }

    /// Reads and parses a roster JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    fn validate(&self) -> Result<()> {
        if self.players.is_empty() {
            return Err(SquadForgeError::Config("roster is empty".into()));
        }
        for player in &self.players {
            player.validate()?;
        }
        let mut seen = std::collections::HashSet::with_capacity(self.players.len());
        for player in &self.players {
            if !seen.insert(player.name.as_str()) {
                return Err(SquadForgeError::Config(format!(
                    "duplicate player name in roster: {:?}",
                    player.name
                )));
            }
        }
        Ok(())
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Finds a player by name.
    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }
}
