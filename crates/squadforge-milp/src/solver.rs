//! Solver invocation and solution extraction.

use std::collections::HashSet;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;

use good_lp::{variables, ResolutionError, Solution, SolverModel};
use tracing::{debug, info, warn};

use squadforge_core::{
    Result, Roster, SelectedPlayer, Selection, SolveRequest, SolveStatus, SquadForgeError,
    RECOMMENDED_MAX_LOCKS, SQUAD_SIZE,
};

use crate::encoder::{
    add_age_band, add_budget, add_formation_totals, add_lock_constraints, add_role_exclusivity,
    add_squad_size, add_style_limits, EncoderContext,
};
use crate::model::{build_objective, VariableIndex};
use crate::tactics::{RoleLimit, TacticsTable};

/// The exact squad-selection solver.
///
/// Stateless across solves: each invocation validates the request, builds
/// a private model and discards it once the result is extracted. The
/// roster may back any number of concurrent solves.
#[derive(Debug, Clone)]
pub struct SquadSolver {
    tactics: TacticsTable,
}

impl Default for SquadSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SquadSolver {
    /// Creates a solver backed by the built-in tactics table.
    pub fn new() -> Self {
        Self {
            tactics: TacticsTable::builtin(),
        }
    }

    /// Creates a solver with a custom tactics table, validating it first.
    ///
    /// # Errors
    ///
    /// Returns [`SquadForgeError::Config`] if any table entry is
    /// inconsistent with its formation.
    pub fn with_table(tactics: TacticsTable) -> Result<Self> {
        tactics.validate()?;
        Ok(Self { tactics })
    }

    /// Solves one squad-selection instance.
    ///
    /// Configuration problems (bad formation shape, unsupported style,
    /// locks referencing unknown players or impossible roles) surface as
    /// errors before any solver work begins. Infeasibility is a normal
    /// outcome: the returned [`Selection`] carries a non-optimal status
    /// and no squad.
    pub fn solve(&self, roster: &Roster, request: &SolveRequest) -> Result<Selection> {
        validate_request(roster, request)?;
        let limits = self.tactics.limits_for(request.formation, request.style)?;
        info!(
            formation = %request.formation,
            style = %request.style,
            players = roster.len(),
            locks = request.locks.len(),
            "solving squad selection"
        );

        match request.time_limit {
            None => solve_model(roster, request, limits),
            Some(limit) => {
                // The worker owns clones of the inputs; on timeout it is
                // left to finish in the background and its result is
                // dropped with the channel.
                let worker_roster = roster.clone();
                let worker_request = request.clone();
                let worker_limits = limits.to_vec();
                let (tx, rx) = mpsc::channel();
                thread::spawn(move || {
                    let _ = tx.send(solve_model(&worker_roster, &worker_request, &worker_limits));
                });
                match rx.recv_timeout(limit) {
                    Ok(result) => result,
                    Err(RecvTimeoutError::Timeout) => {
                        warn!(?limit, "solver hit wall-clock limit");
                        Ok(Selection::unsolved(SolveStatus::TimedOut))
                    }
                    Err(RecvTimeoutError::Disconnected) => Err(SquadForgeError::Solver(
                        "solver worker terminated unexpectedly".into(),
                    )),
                }
            }
        }
    }
}

/// One-shot convenience wrapper over [`SquadSolver`] with the built-in
/// tactics table.
pub fn optimize_squad(roster: &Roster, request: &SolveRequest) -> Result<Selection> {
    SquadSolver::new().solve(roster, request)
}

/// Request validation, all before any variable exists.
fn validate_request(roster: &Roster, request: &SolveRequest) -> Result<()> {
    request.formation.validate()?;
    if request.budget_eur < 0.0 || !request.budget_eur.is_finite() {
        return Err(SquadForgeError::Config(format!(
            "budget must be finite and non-negative, got {}",
            request.budget_eur
        )));
    }
    if let Some(band) = request.age_band {
        if band.min > band.max {
            return Err(SquadForgeError::Config(format!(
                "age band min {} exceeds max {}",
                band.min, band.max
            )));
        }
    }
    for (name, role) in request.locks.iter() {
        let player = roster.get(name).ok_or_else(|| {
            SquadForgeError::Config(format!("locked player {name:?} is not in the roster"))
        })?;
        if !player.can_play(role) {
            return Err(SquadForgeError::Config(format!(
                "locked role {role} is not among {name:?}'s possible positions"
            )));
        }
    }
    if request.locks.len() > RECOMMENDED_MAX_LOCKS {
        warn!(
            locks = request.locks.len(),
            "more than {RECOMMENDED_MAX_LOCKS} locked players; the squad is mostly pinned"
        );
    }
    Ok(())
}

/// Builds and solves one model, then decodes the assignment.
fn solve_model(
    roster: &Roster,
    request: &SolveRequest,
    limits: &[RoleLimit],
) -> Result<Selection> {
    let mut vars = variables!();
    let index = VariableIndex::role_aware(roster, &mut vars);
    let objective = build_objective(roster, &index);
    let ctx = EncoderContext::new(roster, request, limits)?;
    debug!(
        variables = index.num_variables(),
        sub_limits = limits.len(),
        "model built"
    );

    let model = vars.maximise(objective).using(good_lp::microlp);
    let model = add_lock_constraints(model, &ctx, &index)?;
    let model = add_role_exclusivity(model, &index);
    let model = add_style_limits(model, &ctx, &index);
    let model = add_formation_totals(model, &ctx, &index);
    let model = add_squad_size(model, &index);
    let model = add_budget(model, &ctx, &index);
    let model = add_age_band(model, &ctx, &index);

    match model.solve() {
        Ok(solution) => extract_selection(roster, &index, &solution),
        Err(ResolutionError::Infeasible) => {
            info!("no squad satisfies the constraints");
            Ok(Selection::unsolved(SolveStatus::Infeasible))
        }
        Err(ResolutionError::Unbounded) => Ok(Selection::unsolved(SolveStatus::Unbounded)),
        Err(other) => Err(SquadForgeError::Solver(other.to_string())),
    }
}

/// Decodes every variable with value one into a (player, role) pair.
///
/// Total wage and average age are recomputed from the decoded squad, not
/// taken from solver bookkeeping.
fn extract_selection<S: Solution>(
    roster: &Roster,
    index: &VariableIndex,
    solution: &S,
) -> Result<Selection> {
    let mut selected = Vec::with_capacity(SQUAD_SIZE as usize);
    let mut seen_players = HashSet::new();

    for (p, role, var) in index.iter() {
        if solution.value(var) < 0.5 {
            continue;
        }
        let player = &roster.players()[p];
        if !seen_players.insert(p) {
            return Err(SquadForgeError::Internal(format!(
                "player {:?} decoded into more than one role",
                player.name
            )));
        }
        let rating = player.rating_of(role).ok_or_else(|| {
            SquadForgeError::Internal(format!(
                "selected pair ({:?}, {role}) has no rating",
                player.name
            ))
        })?;
        selected.push(SelectedPlayer {
            name: player.name.clone(),
            role,
            rating,
            wage_eur: player.wage_eur,
            age: player.age,
        });
    }

    if selected.len() != SQUAD_SIZE as usize {
        return Err(SquadForgeError::Internal(format!(
            "optimal solution decoded {} players, expected {SQUAD_SIZE}",
            selected.len()
        )));
    }

    let objective = selected.iter().map(|p| p.rating).sum::<f64>();
    info!(objective, "optimal squad found");
    Ok(Selection::optimal(objective, selected))
}
