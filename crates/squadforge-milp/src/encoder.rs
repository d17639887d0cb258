//! Constraint encoding.
//!
//! Each constraint family is one function that takes the solver model and
//! returns it with the family's rows added. Order of encoding aids
//! debuggability only; correctness is order-independent.

use good_lp::{constraint, Expression, SolverModel};

use squadforge_core::{
    PositionGroup, Result, Role, Roster, SolveRequest, SquadForgeError, SQUAD_SIZE,
};

use crate::model::VariableIndex;
use crate::tactics::RoleLimit;

/// Per-solve encoding context: the roster, the request, the style
/// sub-limits and the locks resolved to player indices.
#[derive(Debug)]
pub struct EncoderContext<'a> {
    pub roster: &'a Roster,
    pub request: &'a SolveRequest,
    pub limits: &'a [RoleLimit],
    /// Locked role per player index; `None` for free players.
    locked: Vec<Option<Role>>,
}

impl<'a> EncoderContext<'a> {
    /// Resolves the request's locks against the roster.
    ///
    /// Lock referential integrity is validated before variables exist;
    /// a lock that still fails to resolve here is an internal fault, not
    /// a user error.
    pub fn new(
        roster: &'a Roster,
        request: &'a SolveRequest,
        limits: &'a [RoleLimit],
    ) -> Result<Self> {
        let mut locked = vec![None; roster.len()];
        for (name, role) in request.locks.iter() {
            let idx = roster
                .players()
                .iter()
                .position(|p| p.name == name)
                .ok_or_else(|| {
                    SquadForgeError::Internal(format!(
                        "lock for {name:?} survived validation but is not in the roster"
                    ))
                })?;
            locked[idx] = Some(role);
        }
        Ok(Self {
            roster,
            request,
            limits,
            locked,
        })
    }

    /// True if the player at `idx` is pinned by a lock.
    pub fn is_locked(&self, idx: usize) -> bool {
        self.locked[idx].is_some()
    }

    /// Iterates resolved locks as (player index, role).
    pub fn locks(&self) -> impl Iterator<Item = (usize, Role)> + '_ {
        self.locked
            .iter()
            .enumerate()
            .filter_map(|(idx, role)| role.map(|r| (idx, r)))
    }
}

/// Pins every locked (player, role) variable to exactly one.
pub fn add_lock_constraints<M: SolverModel>(
    mut model: M,
    ctx: &EncoderContext<'_>,
    index: &VariableIndex,
) -> Result<M> {
    for (idx, role) in ctx.locks() {
        let var = index.get(idx, role).ok_or_else(|| {
            SquadForgeError::Internal(format!(
                "no decision variable for locked pair ({:?}, {role})",
                ctx.roster.players()[idx].name
            ))
        })?;
        model = model.with(constraint!(var == 1.0));
    }
    Ok(model)
}

/// Each player occupies at most one role.
pub fn add_role_exclusivity<M: SolverModel>(
    mut model: M,
    index: &VariableIndex,
) -> M {
    for player in 0..index.num_players() {
        let occupancy = index
            .player_vars(player)
            .iter()
            .fold(Expression::from(0.0), |acc, (_, var)| acc + *var);
        model = model.with(constraint!(occupancy <= 1.0));
    }
    model
}

/// Style sub-limits: for each table row, the role's occupancy across all
/// eligible players stays within [min, max].
pub fn add_style_limits<M: SolverModel>(
    mut model: M,
    ctx: &EncoderContext<'_>,
    index: &VariableIndex,
) -> M {
    for limit in ctx.limits {
        let occupancy = index
            .iter()
            .filter(|(_, role, _)| *role == limit.role)
            .fold(Expression::from(0.0), |acc, (_, _, var)| acc + var);
        model = model
            .with(constraint!(occupancy.clone() >= f64::from(limit.min)))
            .with(constraint!(occupancy <= f64::from(limit.max)));
    }
    model
}

/// Coarse formation totals: each group's occupancy equals the formation
/// count exactly, using every player's own role-to-group mapping.
pub fn add_formation_totals<M: SolverModel>(
    mut model: M,
    ctx: &EncoderContext<'_>,
    index: &VariableIndex,
) -> M {
    for group in PositionGroup::ALL {
        let occupancy = index
            .iter()
            .filter(|(p, role, _)| ctx.roster.players()[*p].group_of(*role) == Some(group))
            .fold(Expression::from(0.0), |acc, (_, _, var)| acc + var);
        let required = f64::from(ctx.request.formation.count_for(group));
        model = model.with(constraint!(occupancy == required));
    }
    model
}

/// Total squad size: exactly eleven variables set.
pub fn add_squad_size<M: SolverModel>(mut model: M, index: &VariableIndex) -> M {
    let total = index
        .iter()
        .fold(Expression::from(0.0), |acc, (_, _, var)| acc + var);
    model = model.with(constraint!(total == f64::from(SQUAD_SIZE)));
    model
}

/// Wage budget: summed wages of selected players stay within budget.
///
/// Budget and wages share the same currency unit; any millions-to-EUR
/// conversion happened upstream.
pub fn add_budget<M: SolverModel>(
    mut model: M,
    ctx: &EncoderContext<'_>,
    index: &VariableIndex,
) -> M {
    let spend = index.iter().fold(Expression::from(0.0), |acc, (p, _, var)| {
        acc + ctx.roster.players()[p].wage_eur * var
    });
    model.with(constraint!(spend <= ctx.request.budget_eur))
}

/// Age band, linearized per player.
///
/// For every non-locked player and each of their role variables:
/// `(age - min) * x >= 0` and `(age - max) * x <= 0`. This bounds each
/// selected player's age individually rather than the squad's true
/// arithmetic mean; the looseness is part of the behavioral contract and
/// tightening it would change observable optima.
pub fn add_age_band<M: SolverModel>(
    mut model: M,
    ctx: &EncoderContext<'_>,
    index: &VariableIndex,
) -> M {
    let Some(band) = ctx.request.age_band else {
        return model;
    };
    for (p, _, var) in index.iter() {
        if ctx.is_locked(p) {
            continue;
        }
        let age = f64::from(ctx.roster.players()[p].age);
        model = model
            .with(constraint!((age - f64::from(band.min)) * var >= 0.0))
            .with(constraint!((age - f64::from(band.max)) * var <= 0.0));
    }
    model
}
