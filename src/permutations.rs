//! Lazy enumeration of every combination of axis values.
//!
//! A [`ProductIterator`] takes a list of `(key, value)` entries once, keeps
//! the entries whose value is a non-empty sequence (see [`AsAxis`]) and then
//! walks their Cartesian product one [`Combination`] at a time.
//!
//! # Examples
//!
//! ```
//! # use obj_permute::permutations;
//! let mut permutations = permutations(vec![("x", vec![0, 1]), ("y", vec![2, 3])]);
//! let all = permutations.drain();
//! assert_eq!(all.len(), 4);
//! assert_eq!(all[1].get("x"), Some(&1));
//! assert_eq!(all[1].get("y"), Some(&2));
//! ```

use std::iter::FusedIterator;

use log::{debug, trace};
use serde_json::Value;

use crate::axis::AsAxis;
use crate::combination::Combination;
use crate::cursor::Cursor;

/// Creates an iterator over every combination of the axes in `states`.
///
/// Keys are expected to be unique. A repeated key is treated as a separate
/// axis and shows up once per occurrence in every combination.
pub fn permutations<K, A, I>(states: I) -> ProductIterator<K, A>
where
    A: AsAxis,
    I: IntoIterator<Item = (K, A)>,
{
    ProductIterator::new(states)
}

/// Creates an iterator over a JSON axis map.
///
/// A JSON object supplies its entries in insertion order. An array supplies
/// its elements keyed by their index (`"0"`, `"1"`, ...). Any other value,
/// `null` included, yields an iterator that is exhausted from the start.
pub fn permutations_of_value(states: Value) -> ProductIterator<String, Value> {
    match states {
        Value::Object(map) => ProductIterator::new(map),
        Value::Array(items) => ProductIterator::new(
            items
                .into_iter()
                .enumerate()
                .map(|(index, value)| (index.to_string(), value)),
        ),
        _ => ProductIterator::empty(),
    }
}

/// Stateful odometer over the product of the eligible axes.
///
/// The first eligible key varies fastest. The final combination is returned
/// normally and exhaustion is only reported by the call after it.
#[derive(Clone, Debug)]
pub struct ProductIterator<K, A> {
    states: Vec<(K, A)>,
    // Positions in `states` of the eligible entries.
    keys: Vec<usize>,
    cursor: Cursor,
    length: usize,
    done: bool,
}

impl<K, A: AsAxis> ProductIterator<K, A> {
    /// Keys are expected to be unique, as in [`permutations`].
    pub fn new<I>(states: I) -> Self
    where
        I: IntoIterator<Item = (K, A)>,
    {
        let states: Vec<(K, A)> = states.into_iter().collect();
        let keys: Vec<usize> = states
            .iter()
            .enumerate()
            .filter(|(_, (_, axis))| axis.is_axis())
            .map(|(position, _)| position)
            .collect();
        let bounds: Vec<usize> = keys
            .iter()
            .map(|&position| states[position].1.as_axis().len())
            .collect();
        let length = bounds.iter().sum();
        let cursor = Cursor::new(bounds);

        debug!(
            "{} of {} entries are axes, {} combinations",
            keys.len(),
            states.len(),
            cursor
                .capacity()
                .map_or_else(|| "too many".to_owned(), |count| count.to_string())
        );

        Self {
            done: keys.is_empty(),
            states,
            keys,
            cursor,
            length,
        }
    }

    /// An iterator with no entries at all.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// All entries passed at construction, eligible or not.
    pub fn states(&self) -> &[(K, A)] {
        &self.states
    }

    /// The eligible keys, in traversal order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.keys.iter().map(|&position| &self.states[position].0)
    }

    /// Current index into each eligible axis.
    pub fn indices(&self) -> &[usize] {
        self.cursor.indices()
    }

    /// Sum of the eligible axis lengths.
    ///
    /// This is not the number of combinations once there is more than one
    /// axis longer than one. Use [`Self::combination_count`] for that.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Product of the eligible axis lengths, `Some(0)` without any eligible
    /// key and `None` if the product overflows.
    pub fn combination_count(&self) -> Option<usize> {
        if self.keys.is_empty() {
            Some(0)
        } else {
            self.cursor.capacity()
        }
    }

    /// Whether the final combination has already been produced.
    pub fn is_done(&self) -> bool {
        self.done
    }

    fn remaining(&self) -> Option<usize> {
        if self.done {
            return Some(0);
        }
        self.cursor.capacity()?.checked_sub(self.cursor.position()?)
    }
}

impl<K, A> ProductIterator<K, A>
where
    K: Clone,
    A: AsAxis,
    A::Item: Clone,
{
    /// Produces the next combination, or `None` once every combination has
    /// been produced. Calling it again after `None` keeps returning `None`.
    pub fn advance(&mut self) -> Option<Combination<K, A::Item>> {
        if self.done {
            return None;
        }

        let mut combination = Combination::with_capacity(self.keys.len());
        for (&position, &index) in self.keys.iter().zip(self.cursor.indices()) {
            let (key, axis) = &self.states[position];
            combination.push(key.clone(), axis.as_axis()[index].clone());
        }

        if self.cursor.step() {
            trace!("product exhausted");
            self.done = true;
        }

        Some(combination)
    }

    /// Collects every combination not produced yet.
    pub fn drain(&mut self) -> Vec<Combination<K, A::Item>> {
        let mut results = Vec::with_capacity(self.remaining().unwrap_or(0));
        while let Some(combination) = self.advance() {
            results.push(combination);
        }
        results
    }
}

impl<K, A: AsAxis> Default for ProductIterator<K, A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for ProductIterator<String, Value> {
    fn from(states: Value) -> Self {
        permutations_of_value(states)
    }
}

impl<K, A> Iterator for ProductIterator<K, A>
where
    K: Clone,
    A: AsAxis,
    A::Item: Clone,
{
    type Item = Combination<K, A::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl<K, A> FusedIterator for ProductIterator<K, A>
where
    K: Clone,
    A: AsAxis,
    A::Item: Clone,
{
}
