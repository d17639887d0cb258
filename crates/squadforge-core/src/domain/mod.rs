//! Domain model for squad selection.
//!
//! Players, positions, formations and the solve request are plain data:
//! the roster is read-only input owned by the caller, and every solve
//! builds its own private model from these types.

mod formation;
mod player;
mod request;
mod role;
mod style;

pub use formation::{Formation, SQUAD_SIZE};
pub use player::Player;
pub use request::{AgeBand, LockSet, SolveRequest, RECOMMENDED_MAX_LOCKS};
pub use role::{PositionGroup, Role};
pub use style::Style;
