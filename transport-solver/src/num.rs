//! Numeric representation of supply, demand and cost values
//!
//! The solver is generic over [`Quantity`] so that every stage computes in
//! the caller's own type. Integer and [`Decimal`] inputs are exact. Floating
//! point inputs accumulate rounding error in the balancing totals and in the
//! total cost; the solver reports what the arithmetic produced and never
//! rounds.

use num_traits::Zero;
use rust_decimal::Decimal;
use std::fmt::{Debug, Display};
use std::ops::{Mul, Sub};

/// A numeric type usable as supply, demand, cost or allocation.
///
/// # Examples
///
/// ```rust
/// use transport_solver::Quantity;
///
/// assert!(5u64.is_valid());
/// assert!(!(-1i64).is_valid());
/// assert!(!f64::NAN.is_valid());
/// assert_eq!(u32::MAX.checked_add_qty(1), None);
/// ```
pub trait Quantity:
    Copy
    + PartialOrd
    + Debug
    + Display
    + Zero
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// True when the value is a usable quantity (non-negative, and finite for floats).
    fn is_valid(self) -> bool {
        self >= Self::zero()
    }

    /// Addition that reports overflow instead of wrapping or saturating.
    fn checked_add_qty(self, rhs: Self) -> Option<Self>;

    /// Multiplication that reports overflow instead of wrapping or saturating.
    fn checked_mul_qty(self, rhs: Self) -> Option<Self>;

    /// The smaller of two values. Returns `self` when they are equal.
    #[inline]
    fn min_qty(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }
}

macro_rules! checked_quantity {
    ($($t:ty),*) => {
        $(
            impl Quantity for $t {
                #[inline]
                fn checked_add_qty(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }

                #[inline]
                fn checked_mul_qty(self, rhs: Self) -> Option<Self> {
                    self.checked_mul(rhs)
                }
            }
        )*
    };
}

macro_rules! float_quantity {
    ($($t:ty),*) => {
        $(
            impl Quantity for $t {
                #[inline]
                fn is_valid(self) -> bool {
                    self.is_finite() && self >= 0.0
                }

                #[inline]
                fn checked_add_qty(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs).filter(|sum| sum.is_finite())
                }

                #[inline]
                fn checked_mul_qty(self, rhs: Self) -> Option<Self> {
                    Some(self * rhs).filter(|product| product.is_finite())
                }
            }
        )*
    };
}

checked_quantity!(u32, u64, i32, i64, Decimal);
float_quantity!(f32, f64);

/// Checked sum of a slice. `None` when the total overflows `T`.
pub fn checked_total<T: Quantity>(values: &[T]) -> Option<T> {
    values
        .iter()
        .try_fold(T::zero(), |acc, &value| acc.checked_add_qty(value))
}
