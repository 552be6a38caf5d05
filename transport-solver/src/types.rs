//! Core types for the transport solver

use crate::{config::LabelConfig, num::Quantity, Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Row-major grid indexed as `[source][destination]`
pub type Matrix<T> = Vec<Vec<T>>;

/// Transportation problem as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportProblem<T> {
    /// Available quantity per source
    pub supply: Vec<T>,

    /// Required quantity per destination
    pub demand: Vec<T>,

    /// Unit shipping cost, `costs[source][destination]`
    pub costs: Matrix<T>,
}

impl<T> TransportProblem<T> {
    /// Create new problem
    pub fn new(supply: Vec<T>, demand: Vec<T>, costs: Matrix<T>) -> Self {
        Self {
            supply,
            demand,
            costs,
        }
    }

    /// Number of sources (rows)
    pub fn sources(&self) -> usize {
        self.supply.len()
    }

    /// Number of destinations (columns)
    pub fn destinations(&self) -> usize {
        self.demand.len()
    }
}

impl<T: DeserializeOwned> TransportProblem<T> {
    /// Parse a problem from a TOML document
    ///
    /// ```toml
    /// supply = [20, 30]
    /// demand = [10, 40]
    /// costs = [[4, 6], [8, 2]]
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Serialization(format!("Failed to parse problem: {}", e)))
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// How the balancer equalized total supply and total demand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Balance<T> {
    /// Totals were already equal
    Balanced,

    /// A zero-cost source row was appended to cover the demand deficit
    DummySource {
        /// Supply given to the dummy source
        deficit: T,
    },

    /// A zero-cost destination column was appended to absorb the supply surplus
    DummyDestination {
        /// Demand given to the dummy destination
        surplus: T,
    },
}

impl<T> Balance<T> {
    /// True when no dummy was added
    pub fn is_balanced(&self) -> bool {
        matches!(self, Balance::Balanced)
    }
}

/// Problem after balancing, with Σ(supply) == Σ(demand)
#[derive(Debug, Clone, PartialEq)]
pub struct BalancedProblem<T> {
    /// Supply, including the dummy source if one was added
    pub supply: Vec<T>,

    /// Demand, including the dummy destination if one was added
    pub demand: Vec<T>,

    /// Costs, with a zero row or column for the dummy
    pub costs: Matrix<T>,

    /// Adjustment applied
    pub balance: Balance<T>,

    /// Source count before balancing
    pub original_sources: usize,

    /// Destination count before balancing
    pub original_destinations: usize,
}

impl<T> BalancedProblem<T> {
    /// Number of sources after balancing
    pub fn sources(&self) -> usize {
        self.supply.len()
    }

    /// Number of destinations after balancing
    pub fn destinations(&self) -> usize {
        self.demand.len()
    }
}

/// A grid cell visited by the sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Row index
    pub source: usize,

    /// Column index
    pub destination: usize,
}

impl Cell {
    /// Create new cell
    pub fn new(source: usize, destination: usize) -> Self {
        Self {
            source,
            destination,
        }
    }
}

/// Output of the North West Corner sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation<T> {
    /// Quantity shipped per cell
    pub cells: Matrix<T>,

    /// Cells assigned by the sweep, in visiting order.
    /// Zero-valued entries here are degenerate basic cells.
    pub basis: Vec<Cell>,
}

/// Initial basic feasible solution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution<T> {
    /// Quantity shipped per cell, sized to the balanced problem
    pub allocation: Matrix<T>,

    /// Σ allocation[i][j] × cost[i][j]
    pub total_cost: T,

    /// Dummy row/column added by balancing, if any
    pub balance: Balance<T>,

    /// Cells assigned by the sweep, in visiting order
    pub basis: Vec<Cell>,

    /// Source count before balancing
    pub original_sources: usize,

    /// Destination count before balancing
    pub original_destinations: usize,
}

impl<T: Quantity> Solution<T> {
    /// Split into `(allocation, total_cost)`
    pub fn into_parts(self) -> (Matrix<T>, T) {
        (self.allocation, self.total_cost)
    }

    /// Number of rows, including a dummy source
    pub fn sources(&self) -> usize {
        self.allocation.len()
    }

    /// Number of columns, including a dummy destination
    pub fn destinations(&self) -> usize {
        self.allocation.first().map_or(0, Vec::len)
    }

    /// Index of the dummy source row
    pub fn dummy_source(&self) -> Option<usize> {
        match self.balance {
            Balance::DummySource { .. } => Some(self.original_sources),
            _ => None,
        }
    }

    /// Index of the dummy destination column
    pub fn dummy_destination(&self) -> Option<usize> {
        match self.balance {
            Balance::DummyDestination { .. } => Some(self.original_destinations),
            _ => None,
        }
    }

    /// Count of strictly positive allocations
    pub fn positive_allocations(&self) -> usize {
        self.allocation
            .iter()
            .flatten()
            .filter(|&&quantity| quantity > T::zero())
            .count()
    }

    /// Fewer than m+n−1 positive allocations
    pub fn is_degenerate(&self) -> bool {
        let required = (self.sources() + self.destinations()).saturating_sub(1);
        self.positive_allocations() < required
    }

    /// Quantity shipped out of each source
    pub fn row_totals(&self) -> Vec<T> {
        self.allocation
            .iter()
            .map(|row| row.iter().fold(T::zero(), |acc, &q| acc + q))
            .collect()
    }

    /// Quantity received by each destination
    pub fn column_totals(&self) -> Vec<T> {
        let mut totals = vec![T::zero(); self.destinations()];
        for row in &self.allocation {
            for (total, &q) in totals.iter_mut().zip(row) {
                *total = *total + q;
            }
        }
        totals
    }

    /// Display labels for the rows
    pub fn source_labels(&self, labels: &LabelConfig) -> Vec<String> {
        let mut names: Vec<String> = (1..=self.original_sources)
            .map(|i| format!("{} {}", labels.source_prefix, i))
            .collect();
        if self.dummy_source().is_some() {
            names.push(labels.dummy_source.clone());
        }
        names
    }

    /// Display labels for the columns
    pub fn destination_labels(&self, labels: &LabelConfig) -> Vec<String> {
        let mut names: Vec<String> = (1..=self.original_destinations)
            .map(|j| format!("{} {}", labels.destination_prefix, j))
            .collect();
        if self.dummy_destination().is_some() {
            names.push(labels.dummy_destination.clone());
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn dummy_destination_solution() -> Solution<u64> {
        Solution {
            allocation: vec![vec![5, 5], vec![0, 10]],
            total_cost: 15,
            balance: Balance::DummyDestination { surplus: 15 },
            basis: vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)],
            original_sources: 2,
            original_destinations: 1,
        }
    }

    #[test]
    fn test_problem_from_toml() {
        let problem: TransportProblem<u64> = TransportProblem::from_toml_str(
            r#"
            supply = [20, 30]
            demand = [10, 40]
            costs = [[4, 6], [8, 2]]
            "#,
        )
        .unwrap();

        assert_eq!(problem.sources(), 2);
        assert_eq!(problem.destinations(), 2);
        assert_eq!(problem.costs[1], vec![8, 2]);
    }

    #[test]
    fn test_problem_from_toml_decimal() {
        let problem: TransportProblem<Decimal> = TransportProblem::from_toml_str(
            r#"
            supply = [12.5, 7.5]
            demand = [20]
            costs = [[1.25], [3]]
            "#,
        )
        .unwrap();

        assert_eq!(problem.supply[0], Decimal::new(125, 1));
        assert_eq!(problem.supply[1], Decimal::new(75, 1));
        assert_eq!(problem.costs[1][0], Decimal::from(3));
    }

    #[test]
    fn test_problem_from_toml_missing_field() {
        let result: Result<TransportProblem<u64>> =
            TransportProblem::from_toml_str("supply = [1]\ndemand = [1]");
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_solution_dummy_indices() {
        let solution = dummy_destination_solution();

        assert_eq!(solution.dummy_destination(), Some(1));
        assert_eq!(solution.dummy_source(), None);
        assert!(!solution.balance.is_balanced());
    }

    #[test]
    fn test_solution_totals() {
        let solution = dummy_destination_solution();

        assert_eq!(solution.row_totals(), vec![10, 10]);
        assert_eq!(solution.column_totals(), vec![5, 15]);
        assert_eq!(solution.positive_allocations(), 3);
        assert!(!solution.is_degenerate());
    }

    #[test]
    fn test_solution_labels() {
        let solution = dummy_destination_solution();
        let labels = LabelConfig::default();

        assert_eq!(solution.source_labels(&labels), vec!["Source 1", "Source 2"]);
        assert_eq!(
            solution.destination_labels(&labels),
            vec!["Destination 1", "Dummy Destination"]
        );
    }

    #[test]
    fn test_solution_serializes_balance_tag() {
        let json = serde_json::to_value(dummy_destination_solution()).unwrap();

        assert_eq!(json["balance"]["kind"], "dummy_destination");
        assert_eq!(json["balance"]["surplus"], 15);
        assert_eq!(json["total_cost"], 15);
    }
}
