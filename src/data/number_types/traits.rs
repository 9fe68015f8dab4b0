//! # Traits
//!
//! The transportation algorithms only ever add, subtract and multiply quantities and costs, and
//! compare the results. No division happens, so integers are as good as exact rationals; floats
//! are excluded because they are not totally ordered.
use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Sub};

use num_traits::Zero;

/// Values that can be used as quantities and costs.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Number:
    Zero + // Additive identity
    Add<Self, Output=Self> +
    Sub<Self, Output=Self> +
    Mul<Self, Output=Self> +

    Eq +
    Ord +

    // Practicalities
    Clone +
    Display +
    Debug
{
    /// Whether the value is strictly smaller than zero.
    fn is_negative(&self) -> bool {
        self < &Self::zero()
    }
}
impl<T> Number for T
where
    T: Zero + Add<T, Output=T> + Sub<T, Output=T> + Mul<T, Output=T> + Ord + Clone + Display + Debug,
{
}

/// Sum a sequence of values, starting from zero.
pub fn total<'a, F: Number + 'a>(values: impl IntoIterator<Item = &'a F>) -> F {
    values.into_iter().fold(F::zero(), |total, value| total + value.clone())
}
