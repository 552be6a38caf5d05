//! Supply/demand balancing
//!
//! When total supply and total demand differ, a single zero-cost dummy
//! closes the gap:
//!
//! ```text
//! supply = [10, 10]      demand = [5]        (surplus 15)
//!
//!            D1   Dummy
//!   S1       c    0       10
//!   S2       c    0       10
//!            5    15
//! ```
//!
//! A surplus adds a dummy destination column, a deficit adds a dummy source
//! row. Never both.

use crate::{
    num::{checked_total, Quantity},
    types::*,
    Error, Result,
};

/// Equalize total supply and total demand.
///
/// Takes ownership: the returned vectors are the input vectors, extended by
/// at most one entry.
///
/// # Errors
///
/// - [`Error::DegenerateProblem`] when both totals are zero
/// - [`Error::Overflow`] when a total does not fit in `T`
pub fn balance<T: Quantity>(problem: TransportProblem<T>) -> Result<BalancedProblem<T>> {
    let TransportProblem {
        mut supply,
        mut demand,
        mut costs,
    } = problem;

    let original_sources = supply.len();
    let original_destinations = demand.len();

    let total_supply = checked_total(&supply)
        .ok_or_else(|| Error::Overflow("total supply".to_string()))?;
    let total_demand = checked_total(&demand)
        .ok_or_else(|| Error::Overflow("total demand".to_string()))?;

    if total_supply.is_zero() && total_demand.is_zero() {
        tracing::warn!("Total supply and total demand are both zero");
        return Err(Error::DegenerateProblem);
    }

    tracing::debug!(
        "Balancing {}x{} problem: supply {} / demand {}",
        original_sources,
        original_destinations,
        total_supply,
        total_demand
    );

    let balance = if total_supply > total_demand {
        let surplus = total_supply - total_demand;
        demand.push(surplus);
        for row in costs.iter_mut() {
            row.push(T::zero());
        }
        tracing::info!("Added dummy destination with demand {} to balance the problem", surplus);
        Balance::DummyDestination { surplus }
    } else if total_demand > total_supply {
        let deficit = total_demand - total_supply;
        supply.push(deficit);
        costs.push(vec![T::zero(); demand.len()]);
        tracing::info!("Added dummy source with supply {} to balance the problem", deficit);
        Balance::DummySource { deficit }
    } else {
        tracing::debug!("The problem is balanced");
        Balance::Balanced
    };

    Ok(BalancedProblem {
        supply,
        demand,
        costs,
        balance,
        original_sources,
        original_destinations,
    })
}
