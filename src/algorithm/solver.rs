//! Fixed-point control loop of the assignment solver
//!
//! The solver reduces the matrix once, then repeats graph construction,
//! maximum matching and line cover until the cover needs `n` lines. Each
//! round that falls short adjusts the matrix and tries again.

use crate::algorithm::assignment::Assignment;
use crate::graph::bipartite::BipartiteGraph;
use crate::graph::cover::{LineCover, minimum_line_cover};
use crate::graph::matching::{Matching, maximum_matching};
use crate::io::error::{
    AssignmentError, Result, WithContext, computation_error, invariant_violation,
};
use crate::io::render::render_matrix;
use crate::matrix::adjust::adjust;
use crate::matrix::{Cost, CostMatrix};

/// Position of the solver in its control loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverPhase {
    /// Row and column reduction has not run yet
    Reducing,
    /// Matching and covering until the cover is complete
    Iterating,
    /// An optimal matching has been found
    Done,
}

/// Tunable limits for a solve
#[derive(Debug, Clone, Copy, Default)]
pub struct SolverConfig {
    /// Iteration budget; `None` uses [`default_iteration_limit`]
    pub max_iterations: Option<usize>,
}

/// Observations from one pass of the iterating phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationReport<T> {
    /// One-based iteration number
    pub iteration: usize,
    /// Zero entries in the matrix at the start of the pass
    pub zero_edges: usize,
    /// Size of the maximum matching on the zero graph
    pub matching_size: usize,
    /// Covered rows
    pub covered_rows: usize,
    /// Covered columns
    pub covered_columns: usize,
    /// Minimum uncovered value subtracted, `None` when the cover was complete
    pub adjustment: Option<T>,
}

impl<T> IterationReport<T> {
    /// Total number of covering lines
    pub const fn cover_size(&self) -> usize {
        self.covered_rows + self.covered_columns
    }
}

/// Outcome of a single [`AssignmentSolver::step`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    /// Reduction ran and the solver entered the iterating phase
    Reduced,
    /// One matching/cover pass ran
    Iterated(IterationReport<T>),
    /// The solver was already done; nothing ran
    Finished,
}

/// Default iteration budget for an `n`x`n` matrix
///
/// While the matching size stays fixed every adjustment reaches at least
/// one more column, so at most `n` adjustments happen per matching size.
pub const fn default_iteration_limit(dimension: usize) -> usize {
    dimension.saturating_mul(dimension).saturating_add(1)
}

/// Hungarian-method state machine over an owned cost matrix
#[derive(Debug, Clone)]
pub struct AssignmentSolver<T> {
    original: CostMatrix<T>,
    working: CostMatrix<T>,
    phase: SolverPhase,
    iteration: usize,
    adjustments: usize,
    iteration_limit: usize,
    matching: Option<Matching>,
    cover: Option<LineCover>,
}

impl<T: Cost> AssignmentSolver<T> {
    /// Create a solver with the default iteration budget
    pub fn new(costs: CostMatrix<T>) -> Self {
        Self::with_config(costs, SolverConfig::default())
    }

    /// Create a solver with explicit limits
    pub fn with_config(costs: CostMatrix<T>, config: SolverConfig) -> Self {
        let iteration_limit = config
            .max_iterations
            .unwrap_or_else(|| default_iteration_limit(costs.dimension()));

        Self {
            working: costs.clone(),
            original: costs,
            phase: SolverPhase::Reducing,
            iteration: 0,
            adjustments: 0,
            iteration_limit,
            matching: None,
            cover: None,
        }
    }

    /// Current phase
    pub const fn phase(&self) -> SolverPhase {
        self.phase
    }

    /// Iterations completed so far
    pub const fn iteration(&self) -> usize {
        self.iteration
    }

    /// Iteration budget
    pub const fn iteration_limit(&self) -> usize {
        self.iteration_limit
    }

    /// Matrix as given by the caller
    pub const fn original_matrix(&self) -> &CostMatrix<T> {
        &self.original
    }

    /// Matrix after reduction and any adjustments so far
    pub const fn working_matrix(&self) -> &CostMatrix<T> {
        &self.working
    }

    /// Line cover computed by the latest iteration
    pub const fn last_cover(&self) -> Option<&LineCover> {
        self.cover.as_ref()
    }

    /// Advance the state machine by one transition
    ///
    /// # Errors
    ///
    /// Returns `IterationLimit` when the budget is exhausted,
    /// `InvariantViolation` when a phase produces inconsistent output, and
    /// `Overflow` when adjustment exceeds the cost type
    pub fn step(&mut self) -> Result<Step<T>> {
        match self.phase {
            SolverPhase::Reducing => {
                self.working.reduce();
                self.phase = SolverPhase::Iterating;
                tracing::debug!(
                    dimension = self.working.dimension(),
                    zeros = self.working.zero_count(),
                    "matrix reduced"
                );
                tracing::trace!(matrix = %render_matrix(&self.working), "after reduction");
                Ok(Step::Reduced)
            }
            SolverPhase::Iterating => self.iterate().map(Step::Iterated),
            SolverPhase::Done => Ok(Step::Finished),
        }
    }

    fn iterate(&mut self) -> Result<IterationReport<T>> {
        let dimension = self.working.dimension();
        if self.iteration >= self.iteration_limit {
            return Err(AssignmentError::IterationLimit {
                limit: self.iteration_limit,
                dimension,
            });
        }
        self.iteration += 1;
        let iteration = self.iteration;

        let graph = BipartiteGraph::from_zero_entries(&self.working);
        let matching = maximum_matching(&graph);
        let cover = minimum_line_cover(&graph, &matching);

        if !cover.covers_all_edges(&graph) {
            return Err(invariant_violation("line cover misses a zero entry"))
                .with_iteration(iteration);
        }
        if cover.size() != matching.size() {
            return Err(invariant_violation(
                "line cover size differs from maximum matching size",
            ))
            .with_iteration(iteration);
        }

        let mut report = IterationReport {
            iteration,
            zero_edges: graph.edge_count(),
            matching_size: matching.size(),
            covered_rows: cover.rows().count(),
            covered_columns: cover.columns().count(),
            adjustment: None,
        };

        if cover.size() == dimension {
            self.phase = SolverPhase::Done;
            self.matching = Some(matching);
        } else {
            let h = adjust(&mut self.working, &cover).with_iteration(iteration)?;
            self.adjustments += 1;
            report.adjustment = Some(h);
            tracing::trace!(matrix = %render_matrix(&self.working), "after adjustment");
        }

        tracing::debug!(
            iteration,
            zeros = report.zero_edges,
            matched = report.matching_size,
            lines = report.cover_size(),
            adjustment = ?report.adjustment,
            "iteration complete"
        );

        self.cover = Some(cover);
        Ok(report)
    }

    /// Run the state machine to completion
    ///
    /// # Errors
    ///
    /// Propagates any error from [`step`](Self::step) or from building the
    /// final assignment
    #[tracing::instrument(level = "debug", skip_all, fields(dimension = self.original.dimension()))]
    pub fn solve(mut self) -> Result<Assignment<T>> {
        while self.phase != SolverPhase::Done {
            self.step()?;
        }
        let assignment = self.assignment()?;
        tracing::debug!(
            total_cost = %assignment.total_cost(),
            iterations = assignment.iterations(),
            adjustments = assignment.adjustments(),
            "optimal assignment found"
        );
        Ok(assignment)
    }

    /// Final assignment, available once the solver is done
    ///
    /// # Errors
    ///
    /// Returns `Computation` before the solver reaches the done phase
    pub fn assignment(&self) -> Result<Assignment<T>> {
        let matching = self
            .matching
            .as_ref()
            .ok_or_else(|| computation_error("assignment", &"solver has not finished"))?;

        Assignment::from_matching(matching, &self.original, self.iteration, self.adjustments)
    }
}

/// Solve the assignment problem for a cost matrix
///
/// # Errors
///
/// Returns an error only on an internal defect or cost overflow; every
/// validated matrix has an optimal assignment
pub fn solve<T: Cost>(costs: &CostMatrix<T>) -> Result<Assignment<T>> {
    AssignmentSolver::new(costs.clone()).solve()
}
