//! Style-dependent role sub-limit tables.
//!
//! For a (formation, style) pair the table gives, for a curated subset of
//! fine-grained roles, how many of that role the squad may field. Only
//! `4-3-3` with `attack` or `defend` is defined; any other pair is an
//! unsupported configuration and fails fast instead of solving with no
//! sub-limits.

use std::collections::{BTreeMap, HashMap};

use squadforge_core::{Formation, PositionGroup, Result, Role, SquadForgeError, Style};

/// Occupancy range for one role within a squad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleLimit {
    pub role: Role,
    pub min: u32,
    pub max: u32,
}

impl RoleLimit {
    pub fn new(role: Role, min: u32, max: u32) -> Self {
        Self { role, min, max }
    }
}

/// Lookup from (formation, style) to role sub-limits.
#[derive(Debug, Clone, Default)]
pub struct TacticsTable {
    limits: HashMap<(Formation, Style), Vec<RoleLimit>>,
}

impl TacticsTable {
    /// Creates an empty table. Mostly useful for tests; production code
    /// starts from [`TacticsTable::builtin`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table: `4-3-3` in its attacking and defensive reads.
    ///
    /// Attack favors advanced creative roles (at least one CAM, a lone
    /// striker at most); defend anchors the midfield with holding players
    /// and fixes the striker count at one. Both fix the back line at two
    /// center-backs and one full-back per flank.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        let four_three_three = Formation::new(4, 3, 3);
        table.insert(
            four_three_three,
            Style::Attack,
            vec![
                RoleLimit::new(Role::CB, 2, 2),
                RoleLimit::new(Role::LB, 1, 1),
                RoleLimit::new(Role::RB, 1, 1),
                RoleLimit::new(Role::CAM, 1, 2),
                RoleLimit::new(Role::CM, 0, 2),
                RoleLimit::new(Role::CDM, 0, 1),
                RoleLimit::new(Role::LW, 0, 1),
                RoleLimit::new(Role::RW, 0, 1),
                RoleLimit::new(Role::ST, 0, 1),
                RoleLimit::new(Role::CF, 0, 1),
            ],
        );
        table.insert(
            four_three_three,
            Style::Defend,
            vec![
                RoleLimit::new(Role::CB, 2, 2),
                RoleLimit::new(Role::LB, 1, 1),
                RoleLimit::new(Role::RB, 1, 1),
                RoleLimit::new(Role::CDM, 1, 2),
                RoleLimit::new(Role::CM, 1, 2),
                RoleLimit::new(Role::CAM, 0, 1),
                RoleLimit::new(Role::ST, 1, 1),
            ],
        );
        table
    }

    /// Adds or replaces the limits for a (formation, style) pair.
    pub fn insert(&mut self, formation: Formation, style: Style, limits: Vec<RoleLimit>) {
        self.limits.insert((formation, style), limits);
    }

    /// Checks every table entry against its formation.
    ///
    /// Each row must have `min <= max` and appear once; the summed row
    /// minimums per coarse group must fit inside the formation's count
    /// for that group. Run once at startup for custom tables.
    pub fn validate(&self) -> Result<()> {
        for ((formation, style), limits) in &self.limits {
            formation.validate()?;
            let mut seen = Vec::new();
            let mut min_per_group: BTreeMap<PositionGroup, u32> = BTreeMap::new();
            for limit in limits {
                if limit.min > limit.max {
                    return Err(SquadForgeError::Config(format!(
                        "tactics {formation}/{style}: role {} has min {} > max {}",
                        limit.role, limit.min, limit.max
                    )));
                }
                if seen.contains(&limit.role) {
                    return Err(SquadForgeError::Config(format!(
                        "tactics {formation}/{style}: duplicate entry for role {}",
                        limit.role
                    )));
                }
                seen.push(limit.role);
                *min_per_group.entry(limit.role.group_hint()).or_default() += limit.min;
            }
            for (group, min_total) in min_per_group {
                if min_total > formation.count_for(group) {
                    return Err(SquadForgeError::Config(format!(
                        "tactics {formation}/{style}: role minimums demand {min_total} {group} \
                         players but the formation fields {}",
                        formation.count_for(group)
                    )));
                }
            }
        }
        Ok(())
    }

    /// Looks up the sub-limits for a (formation, style) pair.
    ///
    /// # Errors
    ///
    /// Returns [`SquadForgeError::Config`] naming the supported pairs if
    /// the combination is undefined (including the `balanced` style).
    pub fn limits_for(&self, formation: Formation, style: Style) -> Result<&[RoleLimit]> {
        self.limits
            .get(&(formation, style))
            .map(Vec::as_slice)
            .ok_or_else(|| {
                let mut supported: Vec<String> = self
                    .limits
                    .keys()
                    .map(|(f, s)| format!("{f}/{s}"))
                    .collect();
                supported.sort();
                SquadForgeError::Config(format!(
                    "unsupported formation/style combination {formation}/{style} \
                     (supported: {})",
                    supported.join(", ")
                ))
            })
    }

    /// Iterates the defined (formation, style) pairs.
    pub fn supported_pairs(&self) -> impl Iterator<Item = (Formation, Style)> + '_ {
        self.limits.keys().copied()
    }
}
