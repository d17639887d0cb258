//! SquadForge Core - Domain types for exact squad selection
//!
//! This crate provides the fundamental types shared by the SquadForge
//! optimizer:
//! - The player/roster data model consumed from the scraped dataset
//! - Formation, tactical style, lock and age-band request types
//! - The decoded selection result and its status vocabulary
//! - The error taxonomy separating bad configuration from solver faults

pub mod domain;
pub mod error;
pub mod roster;
pub mod selection;

pub use domain::{
    AgeBand, Formation, LockSet, Player, PositionGroup, Role, SolveRequest, Style,
    RECOMMENDED_MAX_LOCKS, SQUAD_SIZE,
};
pub use error::{Result, SquadForgeError};
pub use roster::Roster;
pub use selection::{SelectedPlayer, Selection, SolveStatus};
