//! SquadForge MILP core
//!
//! Builds and solves the exact squad-selection model: one binary decision
//! variable per (player, role) pair, formation and style-dependent role
//! constraints, a wage budget and an optional age band, maximizing the
//! summed role ratings of the selected eleven.
//!
//! The three stages compose in sequence: model builder ([`model`]) →
//! constraint encoder ([`encoder`]) → solver & extractor ([`solver`]).
//! Each solve builds its own private model; nothing is shared between
//! invocations.

pub mod encoder;
pub mod model;
pub mod solver;
pub mod tactics;

pub use model::{select_top_players, VariableIndex};
pub use solver::{optimize_squad, SquadSolver};
pub use tactics::{RoleLimit, TacticsTable};
