//! # Two-Sum Finder
//!
//! Finds two positions in a sequence of integers whose values add up to a
//! target. The library builds with both:
//! - `cargo build/test` - specs stripped, compiles as pure Rust
//! - `verus` - the two-pointer scan is checked against its contract
//!
//! ## How It Works
//!
//! The input is decorated with original indices and stable-sorted by value.
//! A low pointer and a high pointer then walk toward each other over the
//! sorted copy until the pointed-to values sum to the target or the pointers
//! meet. Matches are reported with the original indices.
//!
//! ```
//! use twosum::{find, Outcome, IndexPair};
//!
//! assert_eq!(find(&[2, 7, 11, 15], 9), Outcome::Found(IndexPair { low: 0, high: 1 }));
//! assert_eq!(find(&[1, 2], 10), Outcome::NotFound);
//! ```

pub mod finder;
pub mod outcome;

pub use finder::{decorate, find, scan, Entry, IndexPair, TwoSumFinder};
pub use outcome::Outcome;
