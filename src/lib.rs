//! # Skip List Key-Value Container
//!
//! An ordered, mutable map from keys to values backed by a skip list.
//!
//! ## Core idea
//! Instead of rebalancing a tree on every write, give each entry a tower of
//! random height. Level 0 links every entry in order; each level above links
//! roughly half the entries of the level below. Searches run along the top
//! level and drop down as they overshoot, so insert, lookup and delete all
//! cost O(log n) on average with no global rebalancing.
//!
//! ```
//! use skiplist_kv::SkipList;
//!
//! let mut sl = SkipList::new();
//! for (k, v) in [(14, "alpha"), (23, "beta"), (34, "gamma")] {
//!     sl.insert(k, v);
//! }
//! assert_eq!(sl.get(&34), Some(&"gamma"));
//!
//! sl.delete(&23);
//! assert_eq!(sl.keys().copied().collect::<Vec<_>>(), vec![14, 34]);
//! ```

pub mod error;
pub mod level;
pub mod options;
pub mod skiplist;
mod types;

// Public re-exports for the top-level API
pub use error::{Error, Result};
pub use level::{CoinFlip, FixedHeights, LevelGenerator};
pub use options::Options;
pub use skiplist::SkipList;
