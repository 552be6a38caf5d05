//! Solver facade
//!
//! Orchestrates validation, balancing, allocation and costing.

use crate::{
    allocator::north_west_corner,
    balancer::balance,
    config::ValidationConfig,
    cost::total_cost,
    num::Quantity,
    types::*,
    validation::InputValidator,
    Result,
};

/// North West Corner solver
///
/// Holds only validation settings. Every call works on its own copies of the
/// inputs, so one solver can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct NorthWestCornerSolver {
    /// Input validator
    validator: InputValidator,
}

impl NorthWestCornerSolver {
    /// Create new solver
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            validator: InputValidator::new(config),
        }
    }

    /// Compute an initial basic feasible solution.
    ///
    /// The problem is left untouched. The returned allocation is sized to
    /// the balanced problem and may carry one extra row or column; see
    /// [`Solution::balance`].
    ///
    /// For floating-point input, totals are compared exactly as computed.
    /// Rounding error in the balancing sums can leave the last row or column
    /// a tiny amount short of its original value.
    pub fn solve<T: Quantity>(&self, problem: &TransportProblem<T>) -> Result<Solution<T>> {
        self.validator.validate(problem)?;

        // Step 1: Balance
        let balanced = balance(problem.clone())?;

        // Step 2: Sweep over working copies
        let mut supply = balanced.supply.clone();
        let mut demand = balanced.demand.clone();
        let allocation = north_west_corner(&mut supply, &mut demand);

        // Step 3: Cost
        let total = total_cost(&allocation.cells, &balanced.costs)?;

        tracing::debug!(
            "Solved {}x{} problem: total cost {} over {} basic cells",
            balanced.sources(),
            balanced.destinations(),
            total,
            allocation.basis.len()
        );

        Ok(Solution {
            allocation: allocation.cells,
            total_cost: total,
            balance: balanced.balance,
            basis: allocation.basis,
            original_sources: balanced.original_sources,
            original_destinations: balanced.original_destinations,
        })
    }
}

/// Solve with default validation settings.
///
/// ```
/// use transport_solver::{solve, Balance};
///
/// let solution = solve(&[10u64, 10], &[5], &[vec![3], vec![9]])?;
/// assert_eq!(solution.allocation, vec![vec![5, 5], vec![0, 10]]);
/// assert_eq!(solution.balance, Balance::DummyDestination { surplus: 15 });
/// assert_eq!(solution.total_cost, 15);
/// # Ok::<(), transport_solver::Error>(())
/// ```
pub fn solve<T: Quantity>(supply: &[T], demand: &[T], costs: &[Vec<T>]) -> Result<Solution<T>> {
    let problem = TransportProblem::new(supply.to_vec(), demand.to_vec(), costs.to_vec());
    NorthWestCornerSolver::default().solve(&problem)
}
