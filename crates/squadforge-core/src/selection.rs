//! Decoded solve results.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Role;

/// Outcome of one solver invocation.
///
/// Only `Optimal` carries a decoded squad. `Infeasible` and `Unbounded`
/// are normal, recoverable outcomes; `TimedOut` means the wall-clock
/// limit expired before the solver proved anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    Optimal,
    Infeasible,
    Unbounded,
    TimedOut,
}

impl SolveStatus {
    pub fn is_optimal(self) -> bool {
        self == SolveStatus::Optimal
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SolveStatus::Optimal => "Optimal",
            SolveStatus::Infeasible => "Infeasible",
            SolveStatus::Unbounded => "Unbounded",
            SolveStatus::TimedOut => "TimedOut",
        };
        f.write_str(s)
    }
}

/// One decoded `(player, role)` assignment.
///
/// Field renames follow the rendering layer's contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedPlayer {
    #[serde(rename = "Name")]
    pub name: String,
    pub role: Role,
    #[serde(rename = "Rating")]
    pub rating: f64,
    #[serde(rename = "WageEur")]
    pub wage_eur: f64,
    #[serde(rename = "Age")]
    pub age: u32,
}

/// The result of one solve, immutable once constructed.
///
/// Serializes to the external output contract: consumers must not assume
/// `selected_players` is present unless `status` is `"Optimal"`.
#[derive(Debug, Clone, Serialize)]
pub struct Selection {
    pub status: SolveStatus,
    pub feasible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_players: Option<Vec<SelectedPlayer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_age: Option<f64>,
}

impl Selection {
    /// Builds an optimal result, recomputing total wage and average age
    /// from the decoded squad rather than trusting solver bookkeeping.
    pub fn optimal(objective: f64, players: Vec<SelectedPlayer>) -> Self {
        let total_budget = players.iter().map(|p| p.wage_eur).sum::<f64>();
        let average_age = if players.is_empty() {
            0.0
        } else {
            players.iter().map(|p| f64::from(p.age)).sum::<f64>() / players.len() as f64
        };
        Self {
            status: SolveStatus::Optimal,
            feasible: true,
            objective: Some(objective),
            selected_players: Some(players),
            total_budget: Some(total_budget),
            average_age: Some(average_age),
        }
    }

    /// Builds a status-only result for any non-optimal outcome.
    pub fn unsolved(status: SolveStatus) -> Self {
        debug_assert!(!status.is_optimal());
        Self {
            status,
            feasible: false,
            objective: None,
            selected_players: None,
            total_budget: None,
            average_age: None,
        }
    }

    /// The decoded squad, empty unless the status is optimal.
    pub fn players(&self) -> &[SelectedPlayer] {
        self.selected_players.as_deref().unwrap_or(&[])
    }
}
