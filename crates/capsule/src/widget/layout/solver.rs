//! Linear constraint solver.
//!
//! Solves a [`Constraint`] set with a dense two-phase simplex:
//!
//! 1. Every required constraint becomes a hard row (inequalities get a slack
//!    column). Non-required constraints get error columns whose weighted sum
//!    is the objective.
//! 2. Phase one finds a point satisfying the rows, or reports the first
//!    required constraint that cannot hold.
//! 3. Phase two minimizes the weighted error from that point.
//!
//! Free variables are split into a positive and a negative part so every
//! column is nonnegative. Bland's rule keeps degenerate pivots from cycling.
//! Layout sets are small (a few dozen rows), so a dense tableau is plenty.

use capsule_render::Rect;
use thiserror::Error;

use super::constraint::{Constraint, Edge, LayoutItem, Relation, Variable};
use crate::logging::targets;

const EPSILON: f64 = 1e-9;
const FEASIBILITY_TOLERANCE: f64 = 1e-6;

/// Errors reported by [`solve`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// A required constraint conflicts with the other required constraints.
    #[error("required constraint cannot be satisfied: {constraint}")]
    Unsatisfiable { constraint: &'static str },
    /// The objective decreases without bound.
    #[error("layout objective is unbounded")]
    Unbounded,
    /// Pivoting did not finish in time.
    #[error("solver did not converge within {iterations} iterations")]
    IterationLimit { iterations: usize },
}

/// Result alias for solving.
pub type SolveResult<T> = Result<T, SolveError>;

/// Variable values produced by [`solve`].
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    values: [f64; Variable::COUNT],
    error: f64,
}

impl Solution {
    /// The value of a variable. Unconstrained variables are zero.
    pub fn value(&self, variable: Variable) -> f64 {
        self.values[variable.index()]
    }

    /// The weighted error left in non-required constraints.
    pub fn error(&self) -> f64 {
        self.error
    }

    /// The rectangle spanned by an item's edges.
    pub fn frame(&self, item: LayoutItem) -> Rect {
        let edge = |edge: Edge| self.value(item.edge(edge)) as f32;
        Rect::from_edges(
            edge(Edge::Left),
            edge(Edge::Top),
            edge(Edge::Right),
            edge(Edge::Bottom),
        )
    }

    /// Whether a constraint holds in this solution.
    pub fn satisfies(&self, constraint: &Constraint, tolerance: f64) -> bool {
        constraint.is_satisfied(|v| self.value(v), tolerance)
    }
}

/// Solve a constraint set.
pub fn solve(constraints: &[Constraint]) -> SolveResult<Solution> {
    let mut problem = Problem::build(constraints);
    tracing::trace!(
        target: targets::SOLVER,
        rows = problem.tableau.rows.len(),
        columns = problem.tableau.columns,
        "solving"
    );

    problem.phase_one()?;
    problem.phase_two()?;

    let solution = problem.solution();
    tracing::trace!(target: targets::SOLVER, error = solution.error, "solved");
    Ok(solution)
}

struct Tableau {
    /// Each row holds `columns` coefficients followed by the right-hand side.
    rows: Vec<Vec<f64>>,
    basis: Vec<usize>,
    columns: usize,
}

impl Tableau {
    fn rhs(&self, row: usize) -> f64 {
        self.rows[row][self.columns]
    }

    fn pivot(&mut self, row: usize, column: usize, objective: &mut [f64]) {
        let divisor = self.rows[row][column];
        for value in self.rows[row].iter_mut() {
            *value /= divisor;
        }
        let pivot_row = self.rows[row].clone();

        let eliminate = |target: &mut [f64]| {
            let factor = target[column];
            if factor != 0.0 {
                for (value, p) in target.iter_mut().zip(&pivot_row) {
                    *value -= factor * p;
                }
            }
        };

        for (index, other) in self.rows.iter_mut().enumerate() {
            if index != row {
                eliminate(other);
            }
        }
        eliminate(objective);
        self.basis[row] = column;
    }

    /// Run simplex iterations until no allowed column improves `objective`.
    fn optimize(
        &mut self,
        objective: &mut [f64],
        allowed: impl Fn(usize) -> bool,
        tolerance: f64,
        budget: &mut usize,
        limit: usize,
    ) -> SolveResult<()> {
        loop {
            let Some(column) =
                (0..self.columns).find(|&j| allowed(j) && objective[j] < -tolerance)
            else {
                return Ok(());
            };

            let mut leaving: Option<(usize, f64)> = None;
            for row in 0..self.rows.len() {
                let a = self.rows[row][column];
                if a <= EPSILON {
                    continue;
                }
                let ratio = self.rhs(row).max(0.0) / a;
                leaving = match leaving {
                    None => Some((row, ratio)),
                    Some((best_row, best)) => {
                        let better = ratio < best - EPSILON
                            || (ratio <= best + EPSILON && self.basis[row] < self.basis[best_row]);
                        if better { Some((row, ratio)) } else { Some((best_row, best)) }
                    }
                };
            }

            let Some((row, _)) = leaving else {
                return Err(SolveError::Unbounded);
            };
            if *budget == 0 {
                return Err(SolveError::IterationLimit { iterations: limit });
            }
            *budget -= 1;
            self.pivot(row, column, objective);
        }
    }
}

struct Problem {
    tableau: Tableau,
    /// First column of each used variable's positive/negative pair.
    variable_columns: [Option<usize>; Variable::COUNT],
    /// Phase-two cost of each structural column.
    costs: Vec<f64>,
    /// Number of non-artificial columns.
    structural: usize,
    labels: Vec<&'static str>,
    budget: usize,
    limit: usize,
}

impl Problem {
    fn build(constraints: &[Constraint]) -> Self {
        let terms: Vec<_> = constraints.iter().map(|c| c.expression().terms()).collect();

        let mut variable_columns = [None; Variable::COUNT];
        let mut next = 0;
        for (variable, _) in terms.iter().flatten() {
            let slot = &mut variable_columns[variable.index()];
            if slot.is_none() {
                *slot = Some(next);
                next += 2;
            }
        }

        let extra_columns = |c: &Constraint| match (c.strength().is_required(), c.relation()) {
            (true, Relation::Equal) => 0,
            (true, _) => 1,
            (false, _) => 2,
        };
        let structural = next + constraints.iter().map(extra_columns).sum::<usize>();
        let columns = structural + constraints.len();

        let mut costs = vec![0.0; structural];
        let mut rows = Vec::with_capacity(constraints.len());
        let mut extra = next;

        for (index, (constraint, terms)) in constraints.iter().zip(&terms).enumerate() {
            let mut row = vec![0.0; columns + 1];
            for &(variable, coefficient) in terms {
                if let Some(column) = variable_columns[variable.index()] {
                    row[column] += coefficient;
                    row[column + 1] -= coefficient;
                }
            }
            row[columns] = -constraint.expression().constant_part();

            let weight = constraint.strength().weight();
            match (constraint.strength().is_required(), constraint.relation()) {
                (true, Relation::Equal) => {}
                (true, Relation::LessOrEqual) => {
                    row[extra] = 1.0;
                    extra += 1;
                }
                (true, Relation::GreaterOrEqual) => {
                    row[extra] = -1.0;
                    extra += 1;
                }
                (false, Relation::Equal) => {
                    row[extra] = 1.0;
                    row[extra + 1] = -1.0;
                    costs[extra] = weight;
                    costs[extra + 1] = weight;
                    extra += 2;
                }
                (false, Relation::LessOrEqual) => {
                    row[extra] = -1.0;
                    row[extra + 1] = 1.0;
                    costs[extra] = weight;
                    extra += 2;
                }
                (false, Relation::GreaterOrEqual) => {
                    row[extra] = 1.0;
                    row[extra + 1] = -1.0;
                    costs[extra] = weight;
                    extra += 2;
                }
            }

            if row[columns] < 0.0 {
                for value in row.iter_mut() {
                    *value = -*value;
                }
            }
            row[structural + index] = 1.0;
            rows.push(row);
        }

        let limit = 100 * (rows.len() + columns).max(1);
        Self {
            tableau: Tableau {
                basis: (structural..columns).collect(),
                rows,
                columns,
            },
            variable_columns,
            costs,
            structural,
            labels: constraints.iter().map(Constraint::label).collect(),
            budget: limit,
            limit,
        }
    }

    fn phase_one(&mut self) -> SolveResult<()> {
        let columns = self.tableau.columns;
        let mut objective = vec![0.0; columns + 1];
        for j in self.structural..columns {
            objective[j] = 1.0;
        }
        for row in &self.tableau.rows {
            for (value, a) in objective.iter_mut().zip(row) {
                *value -= a;
            }
        }

        self.tableau
            .optimize(&mut objective, |_| true, EPSILON, &mut self.budget, self.limit)?;

        let scale = self
            .tableau
            .rows
            .iter()
            .map(|row| row[columns].abs())
            .fold(1.0_f64, f64::max);
        let tolerance = FEASIBILITY_TOLERANCE * scale;
        if -objective[columns] > tolerance {
            let row = (0..self.tableau.rows.len())
                .find(|&r| self.tableau.basis[r] >= self.structural && self.tableau.rhs(r) > tolerance);
            let constraint = row
                .and_then(|r| self.labels.get(self.tableau.basis[r] - self.structural))
                .copied()
                .unwrap_or("unknown");
            tracing::warn!(target: targets::SOLVER, constraint, "unsatisfiable layout");
            return Err(SolveError::Unsatisfiable { constraint });
        }

        self.drive_out_artificials(&mut objective);
        Ok(())
    }

    /// Pivot remaining zero-valued artificials out of the basis and drop the
    /// rows that are linear combinations of others.
    fn drive_out_artificials(&mut self, objective: &mut [f64]) {
        let mut redundant = Vec::new();
        for row in 0..self.tableau.rows.len() {
            if self.tableau.basis[row] < self.structural {
                continue;
            }
            let replacement =
                (0..self.structural).find(|&j| self.tableau.rows[row][j].abs() > EPSILON);
            match replacement {
                Some(column) => self.tableau.pivot(row, column, objective),
                None => redundant.push(row),
            }
        }

        for row in redundant.into_iter().rev() {
            self.tableau.rows.remove(row);
            self.tableau.basis.remove(row);
        }
    }

    fn phase_two(&mut self) -> SolveResult<()> {
        let columns = self.tableau.columns;
        let mut objective = vec![0.0; columns + 1];
        objective[..self.structural].copy_from_slice(&self.costs);
        for (row, &basic) in self.tableau.rows.iter().zip(&self.tableau.basis) {
            let cost = self.costs.get(basic).copied().unwrap_or(0.0);
            if cost != 0.0 {
                for (value, a) in objective.iter_mut().zip(row) {
                    *value -= cost * a;
                }
            }
        }

        let max_weight = self.costs.iter().copied().fold(1.0_f64, f64::max);
        let structural = self.structural;
        self.tableau.optimize(
            &mut objective,
            |j| j < structural,
            EPSILON * max_weight,
            &mut self.budget,
            self.limit,
        )
    }

    fn solution(&self) -> Solution {
        let mut column_values = vec![0.0; self.tableau.columns];
        for (row, &basic) in self.tableau.basis.iter().enumerate() {
            column_values[basic] = self.tableau.rhs(row);
        }

        let mut values = [0.0; Variable::COUNT];
        for (value, column) in values.iter_mut().zip(&self.variable_columns) {
            if let Some(column) = *column {
                *value = column_values[column] - column_values[column + 1];
            }
        }

        let error = self
            .costs
            .iter()
            .zip(&column_values)
            .map(|(cost, value)| cost * value)
            .sum();

        Solution { values, error }
    }
}
