//! Position role tags and coarse position groups.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SquadForgeError;

/// Fine-grained position a player can occupy on the pitch.
///
/// The string forms match the role vocabulary of the scraped player
/// dataset (`"GK"`, `"CB"`, `"CAM"`, ...).
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    GK,
    CB,
    LB,
    RB,
    CDM,
    CM,
    CAM,
    LM,
    RM,
    LW,
    RW,
    ST,
    CF,
}

impl Role {
    /// All roles, in back-to-front order.
    pub const ALL: [Role; 13] = [
        Role::GK,
        Role::CB,
        Role::LB,
        Role::RB,
        Role::CDM,
        Role::CM,
        Role::CAM,
        Role::LM,
        Role::RM,
        Role::LW,
        Role::RW,
        Role::ST,
        Role::CF,
    ];

    /// The conventional coarse group for this role.
    ///
    /// Used for display grouping and for sanity-checking tactics tables.
    /// Constraint encoding uses each player's own role-to-group mapping
    /// instead, since that is part of the roster contract.
    pub fn group_hint(self) -> PositionGroup {
        match self {
            Role::GK => PositionGroup::GK,
            Role::CB | Role::LB | Role::RB => PositionGroup::DF,
            Role::CDM | Role::CM | Role::CAM | Role::LM | Role::RM => PositionGroup::MF,
            Role::LW | Role::RW | Role::ST | Role::CF => PositionGroup::FW,
        }
    }

    /// Returns the string form used in roster documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::GK => "GK",
            Role::CB => "CB",
            Role::LB => "LB",
            Role::RB => "RB",
            Role::CDM => "CDM",
            Role::CM => "CM",
            Role::CAM => "CAM",
            Role::LM => "LM",
            Role::RM => "RM",
            Role::LW => "LW",
            Role::RW => "RW",
            Role::ST => "ST",
            Role::CF => "CF",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = SquadForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| SquadForgeError::Config(format!("unknown role tag: {s:?}")))
    }
}

/// Coarse position group used for formation totals.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PositionGroup {
    GK,
    DF,
    MF,
    FW,
}

impl PositionGroup {
    /// All groups, in back-to-front order.
    pub const ALL: [PositionGroup; 4] = [
        PositionGroup::GK,
        PositionGroup::DF,
        PositionGroup::MF,
        PositionGroup::FW,
    ];

    /// Returns the string form used in roster documents.
    pub fn as_str(self) -> &'static str {
        match self {
            PositionGroup::GK => "GK",
            PositionGroup::DF => "DF",
            PositionGroup::MF => "MF",
            PositionGroup::FW => "FW",
        }
    }
}

impl fmt::Display for PositionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PositionGroup {
    type Err = SquadForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PositionGroup::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| SquadForgeError::Config(format!("unknown position group: {s:?}")))
    }
}
