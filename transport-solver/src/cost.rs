//! Total cost evaluation

use crate::{num::Quantity, types::Matrix, Error, Result};

/// Σ allocation[i][j] × costs[i][j]
///
/// # Panics
///
/// Panics if the two grids differ in shape. They are produced from the same
/// balanced problem, so a mismatch is a caller bug rather than bad input.
///
/// # Errors
///
/// [`Error::Overflow`] when a product or the running total does not fit in `T`.
pub fn total_cost<T: Quantity>(allocation: &Matrix<T>, costs: &Matrix<T>) -> Result<T> {
    assert_eq!(
        allocation.len(),
        costs.len(),
        "allocation and cost grids have different row counts"
    );

    let mut total = T::zero();
    for (i, (shipped, unit_costs)) in allocation.iter().zip(costs).enumerate() {
        assert_eq!(
            shipped.len(),
            unit_costs.len(),
            "allocation and cost grids differ in width at row {}",
            i
        );

        for (j, (&quantity, &unit_cost)) in shipped.iter().zip(unit_costs).enumerate() {
            total = quantity
                .checked_mul_qty(unit_cost)
                .and_then(|cell_cost| total.checked_add_qty(cell_cost))
                .ok_or_else(|| Error::Overflow(format!("total cost at cell ({}, {})", i, j)))?;
        }
    }

    Ok(total)
}
