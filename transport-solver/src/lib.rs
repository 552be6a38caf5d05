//! Transport Solver
//!
//! Computes an initial basic feasible solution to the transportation problem
//! using the North West Corner method.
//!
//! # Pipeline
//!
//! Every solve runs three stages in strict sequence:
//!
//! 1. **Balancing**: add a zero-cost dummy source or destination when total
//!    supply and total demand differ
//! 2. **Allocation**: sweep the grid from the top-left cell, shipping
//!    `min(supply, demand)` at each step
//! 3. **Costing**: sum `allocation[i][j] * cost[i][j]` over every cell

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
//!
//! # Invariants
//!
//! - After balancing: Σ(supply) == Σ(demand)
//! - Row sums of the allocation equal the original supply, column sums the
//!   original demand
//! - The sweep never revisits a cell and visits at most m+n−1 cells
//!
//! The result is feasible, not optimal. It is the starting point for an
//! optimality phase such as the stepping-stone or MODI method.
//!
//! # Example
//!
//! ```
//! use transport_solver::solve;
//!
//! let solution = solve(&[20u64, 30], &[10, 40], &[vec![4, 6], vec![8, 2]])?;
//! assert_eq!(solution.allocation, vec![vec![10, 10], vec![0, 30]]);
//! assert_eq!(solution.total_cost, 160);
//! # Ok::<(), transport_solver::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod num;
pub mod types;
pub mod validation;
pub mod balancer;
pub mod allocator;
pub mod cost;
pub mod error;
pub mod config;
pub mod solver;

// Re-exports
pub use error::{Error, Result};
pub use num::Quantity;
pub use types::*;
pub use config::Config;
pub use solver::{solve, NorthWestCornerSolver};
