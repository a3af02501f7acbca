//! Composable selection-and-ordering pipelines.
//!
//! Builds a fluent pipeline over any finite ordered collection: apply
//! zero or more reordering strategies, filter out excluded elements, and
//! materialize a sub-sequence, all without touching the caller's
//! collection.
//!
//! - **Ordering strategies**: pluggable in-place reorderings (identity,
//!   reverse, sorted, ring rotation, seeded random shuffle) behind one
//!   [`selection::ordering::Ordering`] trait.
//! - **Reproducible randomness**: a seedable Mersenne Twister
//!   ([`random::MersenneTwister`]) integrated with the `rand` ecosystem,
//!   plus a process-wide, swappable seeding policy ([`random::Seeder`])
//!   for deterministic tests.
//! - **Selection pipelines**: [`selection::Selection`] for plain
//!   selection, [`selection::UniqueSelection`] when the result must never
//!   contain duplicates.
//! - **Benchmark functions**: small continuous evaluation functions
//!   ([`functions`]) used by the benches and tests; the selection engine
//!   itself never scores elements.
//!
//! # Architecture
//!
//! This crate is domain-agnostic: it knows nothing about what the
//! elements are or how they were produced. Consumers pair it with their
//! own element types and, where random selection is involved, decide
//! whether to pass an explicitly seeded generator or defer to the
//! installed seeding policy.
//!
//! Pipelines and generators are single-threaded per instance; see the
//! module docs of [`random`] for the seeding-policy concurrency contract.

pub mod functions;
pub mod random;
pub mod selection;
