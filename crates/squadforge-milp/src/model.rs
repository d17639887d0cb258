//! Decision-variable construction.
//!
//! The main flow is role-aware: one binary variable per (player, role)
//! pair, because formation and style limits are role-specific and a
//! multi-role player may be selected into at most one of their roles.
//! A simpler player-only mode (one variable per player, scalar score)
//! is kept for plain top-N scoring.

use good_lp::{
    constraint, variable, variables, Expression, ProblemVariables, Solution, SolverModel, Variable,
};

use squadforge_core::{Result, Role, Roster, SquadForgeError};

/// Index of binary decision variables keyed by (player, role).
///
/// Player positions are indices into the roster's player slice; iteration
/// order is roster order, so repeated solves of the same instance build
/// identical models.
#[derive(Debug)]
pub struct VariableIndex {
    per_player: Vec<Vec<(Role, Variable)>>,
}

impl VariableIndex {
    /// Declares one binary variable per (player, possible role).
    ///
    /// The roster's own validation guarantees every declared role carries
    /// a group mapping and a rating, so construction cannot fail.
    pub fn role_aware(roster: &Roster, vars: &mut ProblemVariables) -> Self {
        let per_player = roster
            .players()
            .iter()
            .map(|player| {
                player
                    .possible_positions
                    .iter()
                    .map(|&role| (role, vars.add(variable().binary())))
                    .collect()
            })
            .collect();
        Self { per_player }
    }

    /// The variable for `(player, role)`, if that pairing exists.
    pub fn get(&self, player: usize, role: Role) -> Option<Variable> {
        self.per_player
            .get(player)?
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, v)| *v)
    }

    /// All (role, variable) pairs for one player.
    pub fn player_vars(&self, player: usize) -> &[(Role, Variable)] {
        &self.per_player[player]
    }

    /// Iterates every (player, role, variable) triple in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Role, Variable)> + '_ {
        self.per_player
            .iter()
            .enumerate()
            .flat_map(|(p, roles)| roles.iter().map(move |(r, v)| (p, *r, *v)))
    }

    pub fn num_players(&self) -> usize {
        self.per_player.len()
    }

    pub fn num_variables(&self) -> usize {
        self.per_player.iter().map(Vec::len).sum()
    }
}

/// Builds the role-aware objective: maximize summed role ratings.
pub(crate) fn build_objective(roster: &Roster, index: &VariableIndex) -> Expression {
    index
        .iter()
        .fold(Expression::from(0.0), |acc, (p, role, var)| {
            let rating = roster.players()[p].rating_of(role).unwrap_or(0.0);
            acc + rating * var
        })
}

/// Player-only scoring mode: picks the `n` players with the highest best
/// ratings, ignoring formations, styles and budgets.
///
/// Returned names are in roster order.
///
/// # Errors
///
/// Returns [`SquadForgeError::Config`] if `n` exceeds the roster size or
/// is zero, [`SquadForgeError::Solver`] on a backend fault.
pub fn select_top_players(roster: &Roster, n: usize) -> Result<Vec<String>> {
    if n == 0 || n > roster.len() {
        return Err(SquadForgeError::Config(format!(
            "cannot select {n} players from a roster of {}",
            roster.len()
        )));
    }

    let mut vars = variables!();
    let player_vars: Vec<Variable> = roster
        .players()
        .iter()
        .map(|_| vars.add(variable().binary()))
        .collect();

    let objective = roster
        .players()
        .iter()
        .zip(&player_vars)
        .fold(Expression::from(0.0), |acc, (player, &var)| {
            acc + player.best_rating() * var
        });
    let count = player_vars
        .iter()
        .fold(Expression::from(0.0), |acc, &var| acc + var);

    let model = vars
        .maximise(objective)
        .using(good_lp::microlp)
        .with(constraint!(count == n as f64));

    let solution = model
        .solve()
        .map_err(|e| SquadForgeError::Solver(e.to_string()))?;

    Ok(roster
        .players()
        .iter()
        .zip(&player_vars)
        .filter(|(_, &var)| solution.value(var) > 0.5)
        .map(|(player, _)| player.name.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use squadforge_core::Player;

    fn roster() -> Roster {
        let players: Vec<Player> = serde_json::from_str(
            r#"[
                {"Name": "A", "PossiblePositions": ["GK"], "GlobalPos": {"GK": "GK"},
                 "rating_per_roles": {"GK": 70.0}, "WageEUR": 1000, "Age": 25},
                {"Name": "B", "PossiblePositions": ["CB", "RB"],
                 "GlobalPos": {"CB": "DF", "RB": "DF"},
                 "rating_per_roles": {"CB": 82.0, "RB": 78.0}, "WageEUR": 1000, "Age": 27},
                {"Name": "C", "PossiblePositions": ["ST"], "GlobalPos": {"ST": "FW"},
                 "rating_per_roles": {"ST": 91.0}, "WageEUR": 1000, "Age": 23}
            ]"#,
        )
        .unwrap();
        Roster::new(players).unwrap()
    }

    #[test]
    fn test_one_variable_per_player_role_pair() {
        let roster = roster();
        let mut vars = variables!();
        let index = VariableIndex::role_aware(&roster, &mut vars);
        assert_eq!(index.num_players(), 3);
        assert_eq!(index.num_variables(), 4);
        assert!(index.get(1, Role::CB).is_some());
        assert!(index.get(1, Role::RB).is_some());
        assert!(index.get(1, Role::ST).is_none());
        assert!(index.get(0, Role::GK).is_some());
    }

    #[test]
    fn test_iteration_follows_roster_order() {
        let roster = roster();
        let mut vars = variables!();
        let index = VariableIndex::role_aware(&roster, &mut vars);
        let order: Vec<(usize, Role)> = index.iter().map(|(p, r, _)| (p, r)).collect();
        assert_eq!(
            order,
            vec![
                (0, Role::GK),
                (1, Role::CB),
                (1, Role::RB),
                (2, Role::ST)
            ]
        );
    }

    #[test]
    fn test_select_top_players_picks_highest_ratings() {
        let selected = select_top_players(&roster(), 2).unwrap();
        assert_eq!(selected, vec!["B".to_string(), "C".to_string()]);
    }

    #[test]
    fn test_select_top_players_rejects_bad_counts() {
        assert!(select_top_players(&roster(), 0).is_err());
        assert!(select_top_players(&roster(), 4).is_err());
    }
}
