//! Input contracts checked before balancing
//!
//! Validation is fail-fast: the first violation aborts the solve and no
//! partial result is produced.

use crate::{config::ValidationConfig, num::Quantity, types::TransportProblem, Error, Result};

/// Input validator
#[derive(Debug, Clone, Default)]
pub struct InputValidator {
    config: ValidationConfig,
}

impl InputValidator {
    /// Create new validator
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Run every check in order: shape, limits, values
    pub fn validate<T: Quantity>(&self, problem: &TransportProblem<T>) -> Result<()> {
        let result = self
            .check_not_empty(problem)
            .and_then(|_| self.check_dimensions(problem))
            .and_then(|_| self.check_limits(problem))
            .and_then(|_| self.check_values(problem));

        if let Err(e) = &result {
            tracing::warn!("Rejected transport problem: {}", e);
        }
        result
    }

    /// At least one source and one destination
    pub fn check_not_empty<T>(&self, problem: &TransportProblem<T>) -> Result<()> {
        if problem.supply.is_empty() {
            return Err(Error::InvalidInput("supply has no sources".to_string()));
        }
        if problem.demand.is_empty() {
            return Err(Error::InvalidInput("demand has no destinations".to_string()));
        }
        Ok(())
    }

    /// Cost grid is exactly sources × destinations
    pub fn check_dimensions<T>(&self, problem: &TransportProblem<T>) -> Result<()> {
        let (m, n) = (problem.sources(), problem.destinations());

        if problem.costs.len() != m {
            return Err(Error::DimensionMismatch(format!(
                "cost grid has {} rows but supply has {} sources",
                problem.costs.len(),
                m
            )));
        }

        if let Some((i, row)) = problem.costs.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(Error::DimensionMismatch(format!(
                "cost row {} has {} columns but demand has {} destinations",
                i,
                row.len(),
                n
            )));
        }

        Ok(())
    }

    /// Configured size limits
    pub fn check_limits<T>(&self, problem: &TransportProblem<T>) -> Result<()> {
        if let Some(max) = self.config.max_sources {
            if problem.sources() > max {
                return Err(Error::InvalidInput(format!(
                    "{} sources exceeds limit of {}",
                    problem.sources(),
                    max
                )));
            }
        }

        if let Some(max) = self.config.max_destinations {
            if problem.destinations() > max {
                return Err(Error::InvalidInput(format!(
                    "{} destinations exceeds limit of {}",
                    problem.destinations(),
                    max
                )));
            }
        }

        Ok(())
    }

    /// Every supply, demand and cost value is a valid quantity
    pub fn check_values<T: Quantity>(&self, problem: &TransportProblem<T>) -> Result<()> {
        check_vector("supply", &problem.supply)?;
        check_vector("demand", &problem.demand)?;

        for (i, row) in problem.costs.iter().enumerate() {
            if let Some((j, value)) = first_invalid(row) {
                return Err(Error::InvalidInput(format!(
                    "costs[{}][{}] = {} is negative or not finite",
                    i, j, value
                )));
            }
        }

        Ok(())
    }
}

fn check_vector<T: Quantity>(name: &str, values: &[T]) -> Result<()> {
    match first_invalid(values) {
        Some((i, value)) => Err(Error::InvalidInput(format!(
            "{}[{}] = {} is negative or not finite",
            name, i, value
        ))),
        None => Ok(()),
    }
}

fn first_invalid<T: Quantity>(values: &[T]) -> Option<(usize, T)> {
    values
        .iter()
        .copied()
        .enumerate()
        .find(|(_, value)| !value.is_valid())
}
