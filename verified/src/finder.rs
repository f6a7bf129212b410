//! Sorted two-pointer search.

use log::debug;
use verus_builtin_macros::verus;

use crate::outcome::Outcome;

verus! {

// ============================================================================
// WORKING COPY
// ============================================================================

/// One element of the sorted working copy: a value and where it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub index: usize,
    pub value: i64,
}

/// Original indices of a matching pair, in (low pointer, high pointer) order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexPair {
    pub low: usize,
    pub high: usize,
}

/// Sum of two values, unbounded.
pub open spec fn spec_pair_sum(a: i64, b: i64) -> int {
    a as int + b as int
}

/// Entries are in non-decreasing value order.
pub open spec fn sorted_by_value(entries: &[Entry]) -> bool {
    forall|i: int, j: int|
        0 <= i <= j < entries.len() ==> entries[i].value <= entries[j].value
}

/// No two entries point at the same original position.
pub open spec fn distinct_indices(entries: &[Entry]) -> bool {
    forall|i: int, j: int|
        0 <= i < j < entries.len() ==> entries[i].index != entries[j].index
}

// ============================================================================
// SCAN
// ============================================================================

/// Two-pointer scan over a value-sorted working copy.
///
/// Returns the original indices of the first pair whose values sum to
/// `target`, or `None` once the pointers meet.
pub fn scan(entries: &[Entry], target: i64) -> (result: Option<IndexPair>)
    requires
        sorted_by_value(entries),
        distinct_indices(entries),
    ensures
        match result {
            Some(pair) => exists|a: int, b: int|
                0 <= a < b < entries.len()
                && pair.low == entries[a].index
                && pair.high == entries[b].index
                && pair.low != pair.high
                && spec_pair_sum(entries[a].value, entries[b].value) == target as int,
            // completeness (no pair sums to target) is not stated
            None => true,
        },
{
    if entries.len() < 2 {
        return None;
    }

    let mut lo: usize = 0;
    let mut hi: usize = entries.len() - 1;

    while lo < hi
        invariant
            lo <= hi,
            hi < entries.len(),
        decreases
            hi - lo,
    {
        let low = entries[lo];
        let high = entries[hi];
        // i128 holds any sum of two i64 values
        let sum = low.value as i128 + high.value as i128;

        if sum == target as i128 {
            return Some(IndexPair { low: low.index, high: high.index });
        } else if sum > target as i128 {
            hi = hi - 1;
        } else {
            lo = lo + 1;
        }
    }

    None
}

} // verus!

// The sort stays outside `verus!`: slice sorting carries no specification.

/// Build the working copy: each value tagged with its original index, stably
/// sorted by value so equal values keep their input order.
pub fn decorate(nums: &[i64]) -> Vec<Entry> {
    let mut entries: Vec<Entry> = nums
        .iter()
        .enumerate()
        .map(|(index, &value)| Entry { index, value })
        .collect();
    entries.sort_by_key(|entry| entry.value);
    entries
}

/// Find two distinct positions of `nums` whose values sum to `target`.
///
/// Inputs shorter than two elements come back unchanged as
/// [`Outcome::Degenerate`] rather than [`Outcome::NotFound`].
pub fn find(nums: &[i64], target: i64) -> Outcome {
    if nums.len() < 2 {
        debug!("input of length {} returned unchanged", nums.len());
        return Outcome::Degenerate(nums.to_vec());
    }

    let entries = decorate(nums);
    match scan(&entries, target) {
        Some(pair) => {
            debug!("target {} matched at {:?}", target, pair);
            Outcome::Found(pair)
        }
        None => {
            debug!("no pair of {} values sums to {}", nums.len(), target);
            Outcome::NotFound
        }
    }
}

/// Stateless handle over [`find`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TwoSumFinder;

impl TwoSumFinder {
    pub fn new() -> Self {
        Self
    }

    pub fn find(&self, nums: &[i64], target: i64) -> Outcome {
        find(nums, target)
    }
}

impl IndexPair {
    /// Check the result guarantee against the input that produced the pair:
    /// distinct, in bounds, and the two values sum to `target`.
    pub fn is_solution(&self, nums: &[i64], target: i64) -> bool {
        if self.low == self.high {
            return false;
        }
        match (nums.get(self.low), nums.get(self.high)) {
            (Some(&a), Some(&b)) => a as i128 + b as i128 == target as i128,
            _ => false,
        }
    }
}
