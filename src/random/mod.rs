//! Reproducible random number generation.
//!
//! A seedable Mersenne Twister generator plus the process-wide seeding
//! policy that supplies seeds to generators constructed without an
//! explicit one.
//!
//! # Key Types
//!
//! - [`MersenneTwister`]: MT19937 generator, integrated with the `rand`
//!   ecosystem via `RngCore`/`SeedableRng`
//! - [`SeedStrategy`]: pluggable source of seed values
//! - [`Seeder`]: the installable process-wide policy, with
//!   [`Seeder::scoped`] for install/restore scoping in tests
//!
//! # Determinism
//!
//! Identically seeded generators produce identical output sequences.
//! Everything downstream (random orderings, random selection terminals)
//! inherits that guarantee, which is what makes seeded selection results
//! reproducible.
//!
//! # Concurrency
//!
//! Generators are single-threaded per instance. The seeding policy is
//! shared process state; see [`Seeder`] for the swap-while-constructing
//! caveat.

mod mersenne;
mod seeder;

pub use mersenne::MersenneTwister;
pub use seeder::{EntropySeeder, SeedError, SeedStrategy, Seeder, SeederGuard, ZeroSeeder};

#[cfg(test)]
pub(crate) use seeder::test_support;
