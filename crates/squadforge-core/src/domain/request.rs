//! Solve request: budget, formation, style, locks and age band.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::formation::Formation;
use super::role::Role;
use super::style::Style;

/// Soft cap on locked players.
///
/// The interactive front end never offers more than three locks; the
/// solver accepts more but logs a warning, since heavily pinned squads
/// are usually a sign of a misconfigured request.
pub const RECOMMENDED_MAX_LOCKS: usize = 3;

/// Pinned player-role assignments, keyed by player name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockSet(BTreeMap<String, Role>);

impl LockSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins `name` to `role`, replacing any previous lock for that player.
    pub fn insert(&mut self, name: impl Into<String>, role: Role) {
        self.0.insert(name.into(), role);
    }

    pub fn remove(&mut self, name: &str) -> Option<Role> {
        self.0.remove(name)
    }

    /// The locked role for `name`, if any.
    pub fn role_for(&self, name: &str) -> Option<Role> {
        self.0.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates locks in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Role)> {
        self.0.iter().map(|(n, r)| (n.as_str(), *r))
    }
}

impl FromIterator<(String, Role)> for LockSet {
    fn from_iter<I: IntoIterator<Item = (String, Role)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Inclusive age band applied per non-locked selected player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBand {
    pub min: u32,
    pub max: u32,
}

impl AgeBand {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, age: u32) -> bool {
        self.min <= age && age <= self.max
    }
}

/// One squad-selection request.
///
/// The budget is in the same unit as player wages (EUR per week); any
/// millions-to-EUR conversion belongs to the caller, not the encoder.
#[derive(Debug, Clone)]
pub struct SolveRequest {
    pub budget_eur: f64,
    pub formation: Formation,
    pub style: Style,
    pub locks: LockSet,
    pub age_band: Option<AgeBand>,
    /// Wall-clock limit for the solver; `None` means unbounded.
    pub time_limit: Option<Duration>,
}

impl SolveRequest {
    /// Creates a request with no locks, no age band and no time limit.
    pub fn new(budget_eur: f64, formation: Formation, style: Style) -> Self {
        Self {
            budget_eur,
            formation,
            style,
            locks: LockSet::new(),
            age_band: None,
            time_limit: None,
        }
    }

    /// Pins a player to a role.
    pub fn with_lock(mut self, name: impl Into<String>, role: Role) -> Self {
        self.locks.insert(name, role);
        self
    }

    /// Replaces the whole lock set.
    pub fn with_locks(mut self, locks: LockSet) -> Self {
        self.locks = locks;
        self
    }

    /// Restricts every non-locked selected player to the band.
    pub fn with_age_band(mut self, band: AgeBand) -> Self {
        self.age_band = Some(band);
        self
    }

    /// Bounds the solver's wall-clock time.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_set_replaces_previous_role() {
        let mut locks = LockSet::new();
        locks.insert("A. Robertson", Role::LB);
        locks.insert("A. Robertson", Role::CB);
        assert_eq!(locks.len(), 1);
        assert_eq!(locks.role_for("A. Robertson"), Some(Role::CB));
    }

    #[test]
    fn test_lock_set_iterates_in_name_order() {
        let mut locks = LockSet::new();
        locks.insert("Zidane", Role::CAM);
        locks.insert("Ayew", Role::ST);
        let names: Vec<&str> = locks.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Ayew", "Zidane"]);
    }

    #[test]
    fn test_age_band_contains_is_inclusive() {
        let band = AgeBand::new(20, 28);
        assert!(band.contains(20));
        assert!(band.contains(28));
        assert!(!band.contains(29));
    }

    #[test]
    fn test_request_builders() {
        let req = SolveRequest::new(80e6, Formation::new(4, 3, 3), Style::Attack)
            .with_lock("M. Salah", Role::RW)
            .with_age_band(AgeBand::new(20, 28))
            .with_time_limit(Duration::from_secs(30));
        assert_eq!(req.locks.role_for("M. Salah"), Some(Role::RW));
        assert_eq!(req.age_band, Some(AgeBand::new(20, 28)));
        assert_eq!(req.time_limit, Some(Duration::from_secs(30)));
    }
}
