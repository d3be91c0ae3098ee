//! Mixed-radix position within a product space.
//!
//! This module provides the [`Cursor`], an odometer over a list of bounds.
//! The first digit is the least significant one and moves on every step.

/// An odometer whose digit `i` ranges over `0..bounds[i]`.
///
/// Every bound is expected to be non-zero. An empty cursor has exactly one
/// position and wraps on its first step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    indices: Vec<usize>,
    bounds: Vec<usize>,
}

impl Cursor {
    /// Creates a cursor at the origin of the space described by `bounds`.
    pub fn new(bounds: Vec<usize>) -> Self {
        debug_assert!(bounds.iter().all(|&bound| bound > 0));
        Self {
            indices: vec![0; bounds.len()],
            bounds,
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn bounds(&self) -> &[usize] {
        &self.bounds
    }

    /// Moves to the next position.
    ///
    /// The first digit is always incremented. Each following digit is only
    /// incremented when the previous one wrapped back to zero. Returns `true`
    /// when the carry ran past the last digit, i.e. the cursor is back at
    /// the origin after visiting every position.
    pub fn step(&mut self) -> bool {
        let mut carry = false;

        for (i, (index, &bound)) in self.indices.iter_mut().zip(&self.bounds).enumerate() {
            if carry || i == 0 {
                *index += 1;
            }

            if *index >= bound {
                *index = 0;
                carry = true;
            } else {
                carry = false;
            }
        }

        carry || self.indices.is_empty()
    }

    /// Number of steps taken from the origin, or `None` if it does not fit
    /// into a `usize`.
    pub fn position(&self) -> Option<usize> {
        self.indices
            .iter()
            .zip(&self.bounds)
            .rev()
            .try_fold(0usize, |acc, (&index, &bound)| {
                acc.checked_mul(bound)?.checked_add(index)
            })
    }

    /// Total number of positions, or `None` on overflow.
    pub fn capacity(&self) -> Option<usize> {
        self.bounds
            .iter()
            .try_fold(1usize, |acc, &bound| acc.checked_mul(bound))
    }
}
