//! Result of a two-sum search.

use std::fmt;

use crate::finder::IndexPair;

/// What [`find`](crate::find) produced for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Two distinct original positions whose values sum to the target.
    Found(IndexPair),
    /// At least two elements, and no pair sums to the target.
    NotFound,
    /// Fewer than two elements: the input itself, unchanged.
    ///
    /// Inconsistent with the empty not-found result: the list form of this
    /// variant is the raw input, not indices.
    Degenerate(Vec<i64>),
}

impl Outcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    pub fn pair(&self) -> Option<IndexPair> {
        match self {
            Outcome::Found(pair) => Some(*pair),
            _ => None,
        }
    }

    /// Flat list form: `[low, high]`, `[]`, or the degenerate input.
    pub fn to_list(&self) -> Vec<i64> {
        match self {
            Outcome::Found(pair) => vec![pair.low as i64, pair.high as i64],
            Outcome::NotFound => Vec::new(),
            Outcome::Degenerate(nums) => nums.clone(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_list())
    }
}
