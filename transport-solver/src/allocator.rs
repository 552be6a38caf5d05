//! North West Corner allocation
//!
//! # Algorithm
//!
//! Start at the top-left cell. At each cell ship `min(supply[i], demand[j])`,
//! subtract it from both sides, then move down if the source is exhausted and
//! right otherwise. Stop when either index runs off the grid.
//!
//! ```text
//! supply = [20, 30]   demand = [10, 40]
//!
//!   (0,0) ship 10   supply[0] = 10   move right
//!   (0,1) ship 10   supply[0] = 0    move down
//!   (1,1) ship 30   supply[1] = 0    move down, done
//!
//!   allocation = [[10, 10],
//!                 [ 0, 30]]
//! ```
//!
//! # Simultaneous exhaustion
//!
//! When source and destination run out on the same step only the row index
//! advances. The next step then lands on the exhausted column, ships zero and
//! moves right. That zero cell stays in the basis, so the solution is
//! degenerate (fewer than m+n−1 positive cells). The basis is returned
//! exactly as visited, zero cells included.

use crate::{num::Quantity, types::*};

/// Run the sweep over balanced supply and demand.
///
/// Both slices are consumed in place: on return every entry the sweep
/// reached has been decremented to zero. Pass copies if the original values
/// are still needed.
///
/// Termination does not depend on the totals matching, since each step
/// advances one index. Feasibility does: with unbalanced input the trailing
/// rows or columns are left short.
pub fn north_west_corner<T: Quantity>(supply: &mut [T], demand: &mut [T]) -> Allocation<T> {
    let (m, n) = (supply.len(), demand.len());
    let mut cells = vec![vec![T::zero(); n]; m];
    let mut basis = Vec::with_capacity((m + n).saturating_sub(1));

    let mut i = 0;
    let mut j = 0;
    while i < m && j < n {
        let quantity = supply[i].min_qty(demand[j]);
        cells[i][j] = quantity;
        basis.push(Cell::new(i, j));

        supply[i] = supply[i] - quantity;
        demand[j] = demand[j] - quantity;

        tracing::trace!("Allocated {} at ({}, {})", quantity, i, j);

        if supply[i].is_zero() {
            i += 1;
        } else {
            j += 1;
        }
    }

    tracing::debug!("Sweep assigned {} cells on a {}x{} grid", basis.len(), m, n);

    Allocation { cells, basis }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_two_by_two_sweep() {
        let mut supply = vec![20u64, 30];
        let mut demand = vec![10u64, 40];

        let allocation = north_west_corner(&mut supply, &mut demand);

        assert_eq!(allocation.cells, vec![vec![10, 10], vec![0, 30]]);
        assert_eq!(
            allocation.basis,
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]
        );
    }

    #[test]
    fn test_working_copies_exhausted() {
        let mut supply = vec![7i64, 5, 3];
        let mut demand = vec![4i64, 6, 5];

        north_west_corner(&mut supply, &mut demand);

        assert_eq!(supply, vec![0, 0, 0]);
        assert_eq!(demand, vec![0, 0, 0]);
    }

    #[test]
    fn test_single_cell() {
        let mut supply = vec![10u32];
        let mut demand = vec![10u32];

        let allocation = north_west_corner(&mut supply, &mut demand);

        assert_eq!(allocation.cells, vec![vec![10]]);
        assert_eq!(allocation.basis.len(), 1);
    }

    #[test]
    fn test_simultaneous_exhaustion_advances_row_only() {
        // Source 0 and destination 0 both run out at (0,0).
        let mut supply = vec![10u64, 20];
        let mut demand = vec![10u64, 20];

        let allocation = north_west_corner(&mut supply, &mut demand);

        assert_eq!(allocation.cells, vec![vec![10, 0], vec![0, 20]]);
        // (1,0) is visited with a zero shipment before moving right.
        assert_eq!(
            allocation.basis,
            vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)]
        );
    }

    #[test]
    fn test_degenerate_basis_in_wide_problem() {
        let mut supply = vec![5u64, 10];
        let mut demand = vec![5u64, 4, 6];

        let allocation = north_west_corner(&mut supply, &mut demand);

        assert_eq!(allocation.cells, vec![vec![5, 0, 0], vec![0, 4, 6]]);
        assert_eq!(allocation.basis.len(), 4);
        assert_eq!(allocation.basis[1], Cell::new(1, 0));
    }

    #[test]
    fn test_staircase_three_by_three() {
        let mut supply = vec![250u64, 300, 400];
        let mut demand = vec![200u64, 225, 275, 250];

        let allocation = north_west_corner(&mut supply, &mut demand);

        assert_eq!(
            allocation.cells,
            vec![
                vec![200, 50, 0, 0],
                vec![0, 175, 125, 0],
                vec![0, 0, 150, 250],
            ]
        );
        assert_eq!(allocation.basis.len(), 6);
    }

    #[test]
    fn test_decimal_quantities() {
        let mut supply = vec![Decimal::new(25, 1), Decimal::new(15, 1)];
        let mut demand = vec![Decimal::new(1, 0), Decimal::new(3, 0)];

        let allocation = north_west_corner(&mut supply, &mut demand);

        assert_eq!(
            allocation.cells,
            vec![
                vec![Decimal::ONE, Decimal::new(15, 1)],
                vec![Decimal::ZERO, Decimal::new(15, 1)],
            ]
        );
    }

    #[test]
    fn test_float_quantities() {
        let mut supply = vec![2.5f64, 1.5];
        let mut demand = vec![1.0f64, 3.0];

        let allocation = north_west_corner(&mut supply, &mut demand);

        assert_eq!(allocation.cells, vec![vec![1.0, 1.5], vec![0.0, 1.5]]);
    }
}
