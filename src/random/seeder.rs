//! Process-wide seeding policy for new generators.
//!
//! [`Seeder`] holds one installable [`SeedStrategy`] for the whole
//! process. Production code leaves the default [`EntropySeeder`] in
//! place; tests install [`ZeroSeeder`] through [`Seeder::scoped`] so
//! every generator constructed inside the scope is reproducible, and the
//! previous policy is restored when the guard drops.

use std::sync::{Arc, LazyLock, RwLock};

use thiserror::Error;

/// The installed seeding policy could not produce a seed.
///
/// Raised by a [`SeedStrategy`] and propagated unchanged from
/// [`MersenneTwister::from_seeder`](super::MersenneTwister::from_seeder);
/// construction is never retried.
#[derive(Debug, Clone, Error)]
#[error("seeding policy failed: {reason}")]
pub struct SeedError {
    reason: String,
}

impl SeedError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Supplies seed values to newly created generators.
///
/// Strategies must be `Send + Sync`: the installed strategy is shared
/// process-wide and may be read from any thread.
pub trait SeedStrategy: Send + Sync {
    /// Produces the seed for the next generator.
    fn next_seed(&self) -> Result<u32, SeedError>;
}

/// Always seeds with zero. Intended for reproducible tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroSeeder;

impl SeedStrategy for ZeroSeeder {
    fn next_seed(&self) -> Result<u32, SeedError> {
        Ok(0)
    }
}

/// Seeds from process entropy. The default production policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropySeeder;

impl SeedStrategy for EntropySeeder {
    fn next_seed(&self) -> Result<u32, SeedError> {
        Ok(rand::random())
    }
}

static ACTIVE: LazyLock<RwLock<Arc<dyn SeedStrategy>>> = LazyLock::new(|| {
    let default: Arc<dyn SeedStrategy> = Arc::new(EntropySeeder);
    RwLock::new(default)
});

fn read_active() -> Arc<dyn SeedStrategy> {
    let guard = match ACTIVE.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    Arc::clone(&guard)
}

/// The process-wide seeding policy.
///
/// Swapping the policy is not atomic with respect to generator
/// construction on other threads: a thread calling
/// [`MersenneTwister::from_seeder`](super::MersenneTwister::from_seeder)
/// concurrently with [`install`](Seeder::install) may observe either
/// policy. Scopes that swap and restore (tests, primarily) must not
/// construct generators concurrently on other threads.
pub struct Seeder;

impl Seeder {
    /// Produces a seed from the installed strategy.
    ///
    /// # Errors
    ///
    /// Returns the strategy's [`SeedError`] unchanged.
    pub fn seed() -> Result<u32, SeedError> {
        read_active().next_seed()
    }

    /// Installs a new strategy and returns the previously installed one.
    pub fn install(strategy: Arc<dyn SeedStrategy>) -> Arc<dyn SeedStrategy> {
        let mut guard = match ACTIVE.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::replace(&mut *guard, strategy)
    }

    /// Installs a strategy for the lifetime of the returned guard.
    ///
    /// The previously installed strategy is restored when the guard
    /// drops, including on panic.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use rand::RngCore;
    /// use u_select::random::{MersenneTwister, Seeder, ZeroSeeder};
    ///
    /// let _guard = Seeder::scoped(Arc::new(ZeroSeeder));
    /// let mut generator = MersenneTwister::from_seeder().expect("zero seeder cannot fail");
    /// assert_eq!(generator.next_u32(), 2_357_136_044);
    /// ```
    #[must_use = "the previous policy is restored when the guard drops"]
    pub fn scoped(strategy: Arc<dyn SeedStrategy>) -> SeederGuard {
        SeederGuard {
            previous: Some(Self::install(strategy)),
        }
    }
}

/// Restores the previously installed seeding policy on drop.
///
/// Returned by [`Seeder::scoped`].
pub struct SeederGuard {
    previous: Option<Arc<dyn SeedStrategy>>,
}

impl Drop for SeederGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            Seeder::install(previous);
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Mutex, MutexGuard};

    static SEEDER_LOCK: Mutex<()> = Mutex::new(());

    /// Serializes tests that swap the process-wide seeding policy.
    pub(crate) fn serial() -> MutexGuard<'static, ()> {
        SEEDER_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
