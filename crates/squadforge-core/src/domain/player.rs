//! Player records as consumed from the scraped dataset.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::role::{PositionGroup, Role};
use crate::error::{Result, SquadForgeError};

/// One roster entry.
///
/// Field renames follow the external dataset contract, so a roster JSON
/// document deserializes directly into `Vec<Player>`:
///
/// ```
/// use squadforge_core::Player;
///
/// let p: Player = serde_json::from_str(r#"{
///     "Name": "T. Kroos",
///     "PossiblePositions": ["CM", "CDM"],
///     "GlobalPos": {"CM": "MF", "CDM": "MF"},
///     "rating_per_roles": {"CM": 88.0, "CDM": 85.5},
///     "WageEUR": 350000,
///     "Age": 34
/// }"#).unwrap();
/// assert!(p.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Display identifier, unique within one roster.
    #[serde(rename = "Name")]
    pub name: String,

    /// Roles this player can occupy; non-empty.
    #[serde(rename = "PossiblePositions")]
    pub possible_positions: Vec<Role>,

    /// Maps each possible role to its coarse group.
    #[serde(rename = "GlobalPos")]
    pub global_positions: BTreeMap<Role, PositionGroup>,

    /// Fitness score per role, the objective coefficient when the player
    /// fills that role. Covers every possible position.
    #[serde(rename = "rating_per_roles")]
    pub ratings: BTreeMap<Role, f64>,

    /// Weekly wage in EUR.
    #[serde(rename = "WageEUR")]
    pub wage_eur: f64,

    #[serde(rename = "Age")]
    pub age: u32,
}

impl Player {
    /// Checks the per-player invariants of the roster contract.
    ///
    /// # Errors
    ///
    /// Returns [`SquadForgeError::Config`] if the player declares no
    /// positions, a position without a coarse-group mapping or rating,
    /// a negative rating or wage, or a non-positive age.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SquadForgeError::Config("player with empty name".into()));
        }
        if self.possible_positions.is_empty() {
            return Err(SquadForgeError::Config(format!(
                "player {:?} declares no possible positions",
                self.name
            )));
        }
        for &role in &self.possible_positions {
            if !self.global_positions.contains_key(&role) {
                return Err(SquadForgeError::Config(format!(
                    "player {:?}: role {role} missing from GlobalPos mapping",
                    self.name
                )));
            }
            match self.ratings.get(&role) {
                None => {
                    return Err(SquadForgeError::Config(format!(
                        "player {:?}: role {role} missing from rating_per_roles",
                        self.name
                    )))
                }
                Some(r) if *r < 0.0 || !r.is_finite() => {
                    return Err(SquadForgeError::Config(format!(
                        "player {:?}: rating for {role} must be finite and non-negative",
                        self.name
                    )))
                }
                Some(_) => {}
            }
        }
        if self.wage_eur < 0.0 || !self.wage_eur.is_finite() {
            return Err(SquadForgeError::Config(format!(
                "player {:?}: wage must be finite and non-negative",
                self.name
            )));
        }
        if self.age == 0 {
            return Err(SquadForgeError::Config(format!(
                "player {:?}: age must be positive",
                self.name
            )));
        }
        Ok(())
    }

    /// True if `role` is among this player's possible positions.
    pub fn can_play(&self, role: Role) -> bool {
        self.possible_positions.contains(&role)
    }

    /// The coarse group this player's `role` maps to, if declared.
    pub fn group_of(&self, role: Role) -> Option<PositionGroup> {
        self.global_positions.get(&role).copied()
    }

    /// The rating this player earns in `role`, if declared.
    pub fn rating_of(&self, role: Role) -> Option<f64> {
        self.ratings.get(&role).copied()
    }

    /// The player's best rating across all declared roles.
    ///
    /// Scalar score for the player-only scoring mode.
    pub fn best_rating(&self) -> f64 {
        self.ratings.values().copied().fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kroos() -> Player {
        serde_json::from_str(
            r#"{
                "Name": "T. Kroos",
                "PossiblePositions": ["CM", "CDM"],
                "GlobalPos": {"CM": "MF", "CDM": "MF"},
                "rating_per_roles": {"CM": 88.0, "CDM": 85.5},
                "WageEUR": 350000,
                "Age": 34
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_deserializes_dataset_field_names() {
        let p = kroos();
        assert_eq!(p.name, "T. Kroos");
        assert_eq!(p.possible_positions, vec![Role::CM, Role::CDM]);
        assert_eq!(p.group_of(Role::CM), Some(PositionGroup::MF));
        assert_eq!(p.rating_of(Role::CDM), Some(85.5));
        assert_eq!(p.wage_eur, 350_000.0);
        assert_eq!(p.age, 34);
    }

    #[test]
    fn test_validate_accepts_complete_record() {
        assert!(kroos().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_global_pos() {
        let mut p = kroos();
        p.global_positions.remove(&Role::CDM);
        let err = p.validate().unwrap_err();
        assert!(matches!(err, SquadForgeError::Config(_)));
        assert!(err.to_string().contains("GlobalPos"));
    }

    #[test]
    fn test_validate_rejects_missing_rating() {
        let mut p = kroos();
        p.ratings.remove(&Role::CM);
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_positions() {
        let mut p = kroos();
        p.possible_positions.clear();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_wage() {
        let mut p = kroos();
        p.wage_eur = -1.0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_best_rating_is_max_over_roles() {
        assert_eq!(kroos().best_rating(), 88.0);
    }

    #[test]
    fn test_can_play() {
        let p = kroos();
        assert!(p.can_play(Role::CM));
        assert!(!p.can_play(Role::ST));
    }
}
