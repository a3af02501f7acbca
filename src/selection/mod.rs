//! Selection pipelines.
//!
//! A fluent, composable way to pick a sub-sequence out of a collection:
//! build a pipeline from a source slice, optionally exclude elements and
//! register ordering strategies, then materialize with a terminal
//! operation (`first`, `last`, `random`). The source collection is never
//! mutated; the pipeline works on its own entry list and returns a newly
//! allocated result.
//!
//! # Key Types
//!
//! - [`Selection`]: the pipeline
//! - [`UniqueSelection`]: pipeline variant whose result never contains
//!   duplicates
//! - [`Entry`]: one working-list element, as seen by ordering strategies
//!
//! # Submodules
//!
//! - [`ordering`]: the [`Ordering`](ordering::Ordering) trait and the
//!   shipped strategies (identity, reverse, sorted, ring, random)
//!
//! # Examples
//!
//! ```
//! use u_select::random::MersenneTwister;
//! use u_select::selection::{ordering::ReverseOrdering, Selection};
//!
//! let elements = [1, 2, 3, 4, 5, 6, 7, 8, 9];
//!
//! let tail = Selection::from(&elements).last(3).select();
//! assert_eq!(tail, vec![7, 8, 9]);
//!
//! let reversed_head = Selection::from(&elements)
//!     .order_by(ReverseOrdering)
//!     .first(2)
//!     .select();
//! assert_eq!(reversed_head, vec![9, 8]);
//!
//! let sampled = Selection::from(&elements)
//!     .random(MersenneTwister::new(42), 3)
//!     .select();
//! assert_eq!(sampled.len(), 3);
//! ```

mod entry;
pub mod ordering;
mod pipeline;
mod unique;

pub use entry::Entry;
pub use pipeline::Selection;
pub use unique::UniqueSelection;
