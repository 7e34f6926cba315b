//! Overflow-checked arithmetic over iterators.
//!
//! Sums use the `checked_sum` crate; [`CheckedProduct`] is its multiplicative counterpart for any
//! integer implementing [`CheckedMul`].

use num_traits::{CheckedMul, One};
use thiserror::Error;

/// An answer overflowed its integer type.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("integer overflow computing {0}")]
pub struct Overflow(pub &'static str);

/// Iterator extension multiplying all items, returning `None` on overflow.
pub trait CheckedProduct<T> {
    fn checked_product(self) -> Option<T>;
}

impl<T, I> CheckedProduct<T> for I
where
    T: CheckedMul + One,
    I: Iterator<Item = T>,
{
    fn checked_product(mut self) -> Option<T> {
        self.try_fold(T::one(), |product, value| product.checked_mul(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplies_items() {
        assert_eq!([2u64, 3, 7].into_iter().checked_product(), Some(42));
    }

    #[test]
    fn empty_product_is_one() {
        assert_eq!(std::iter::empty::<u32>().checked_product(), Some(1));
    }

    #[test]
    fn overflow_is_none() {
        assert_eq!([200u8, 2].into_iter().checked_product(), None);
        assert_eq!([u64::MAX, 2].into_iter().checked_product(), None);
    }

    #[test]
    fn overflow_names_the_computation() {
        assert_eq!(
            Overflow("total").to_string(),
            "integer overflow computing total"
        );
    }
}
