//! The fluent selection pipeline.

use log::{debug, trace};
use rand::RngCore;

use super::entry::Entry;
use super::ordering::{Ordering, RandomOrdering};

/// The slicing operation a pipeline performs after exclusions and
/// orderings have run. `All` is the state before any terminal was
/// configured.
enum Terminal {
    All,
    First(usize),
    Last(usize),
}

/// A selection pipeline over a borrowed source collection.
///
/// Built with [`Selection::from`], configured with zero or more
/// exclusions and ordering strategies, and materialized with a terminal
/// operation. Nothing runs until [`select`](Selection::select) (or
/// [`select_single`](Selection::select_single)) executes; at that point
/// the pipeline applies, in order:
///
/// 1. exclusion filtering (element equality),
/// 2. every registered ordering, in registration order,
/// 3. the configured terminal slice (`first`, `last`, or all).
///
/// The source collection is never mutated; the result is a freshly
/// allocated `Vec` of cloned elements.
///
/// # Examples
///
/// ```
/// use u_select::selection::Selection;
///
/// let elements = [1, 2, 3, 4, 5, 6, 7];
/// let picked = Selection::from(&elements)
///     .exclude(&[1, 2, 4, 6])
///     .first(3)
///     .select();
/// assert_eq!(picked, vec![3, 5, 7]);
/// ```
///
/// Requesting more elements than remain is not an error; the count is
/// clamped:
///
/// ```
/// use u_select::selection::Selection;
///
/// let elements = [1, 2, 3];
/// assert_eq!(Selection::from(&elements).first(10).select(), vec![1, 2, 3]);
/// ```
pub struct Selection<'a, E> {
    entries: Vec<Entry<'a, E>>,
    excluded: Vec<&'a E>,
    orderings: Vec<Box<dyn Ordering<E> + 'a>>,
    terminal: Terminal,
}

impl<'a, E> Selection<'a, E> {
    /// Builds a pipeline over `elements`.
    ///
    /// The pipeline holds its own entry list; the source storage is never
    /// aliased by the result.
    pub fn from(elements: &'a [E]) -> Self {
        let entries = elements
            .iter()
            .enumerate()
            .map(|(position, element)| Entry::new(element, position))
            .collect();
        Self::from_entries(entries)
    }

    pub(crate) fn from_entries(entries: Vec<Entry<'a, E>>) -> Self {
        Self {
            entries,
            excluded: Vec::new(),
            orderings: Vec::new(),
            terminal: Terminal::All,
        }
    }

    /// Marks `elements` as excluded.
    ///
    /// Exclusion uses element equality, not identity: every working-list
    /// entry equal to any excluded element is removed before orderings
    /// and the terminal run. Repeated calls accumulate.
    pub fn exclude(mut self, elements: &'a [E]) -> Self {
        self.excluded.extend(elements.iter());
        self
    }

    /// Registers an ordering strategy.
    ///
    /// Strategies run in registration order, after exclusions and before
    /// the terminal slice. A strategy that refuses its input is skipped;
    /// see [`Ordering`].
    pub fn order_by<O>(mut self, ordering: O) -> Self
    where
        O: Ordering<E> + 'a,
    {
        self.orderings.push(Box::new(ordering));
        self
    }

    /// Configures the terminal to keep the first `count` elements.
    ///
    /// Clamped to the available size. Configuring a second terminal
    /// replaces the first.
    pub fn first(mut self, count: usize) -> Self {
        self.terminal = Terminal::First(count);
        self
    }

    /// Configures the terminal to keep the last `count` elements, in
    /// their working-list order.
    ///
    /// Clamped to the available size. Configuring a second terminal
    /// replaces the first.
    pub fn last(mut self, count: usize) -> Self {
        self.terminal = Terminal::Last(count);
        self
    }

    /// Configures random selection: shuffle with `generator`, keep the
    /// first `count` elements of the shuffled list.
    ///
    /// The shuffle runs after any orderings registered so far.
    /// Identically seeded generators yield identical results.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_select::random::MersenneTwister;
    /// use u_select::selection::Selection;
    ///
    /// let elements = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    /// let a = Selection::from(&elements)
    ///     .random(MersenneTwister::new(42), 3)
    ///     .select();
    /// let b = Selection::from(&elements)
    ///     .random(MersenneTwister::new(42), 3)
    ///     .select();
    /// assert_eq!(a, b);
    /// ```
    pub fn random<R>(self, generator: R, count: usize) -> Self
    where
        R: RngCore + 'a,
    {
        self.order_by(RandomOrdering::new(generator)).first(count)
    }
}

impl<'a, E: PartialEq + Clone> Selection<'a, E> {
    /// Executes the pipeline and returns the selected elements.
    ///
    /// An empty source, a zero count, or an exclusion set covering the
    /// whole source all yield an empty result. With no terminal
    /// configured, every remaining element is returned.
    pub fn select(self) -> Vec<E> {
        self.materialize()
            .iter()
            .map(|entry| entry.element().clone())
            .collect()
    }

    /// Executes the pipeline and returns the first selected element, if
    /// any.
    ///
    /// This is the single-element shorthand: `from(s).select_single()`
    /// picks the head of the working list the way a `first(1)` terminal
    /// would.
    pub fn select_single(self) -> Option<E> {
        self.materialize()
            .first()
            .map(|entry| entry.element().clone())
    }

    fn materialize(self) -> Vec<Entry<'a, E>> {
        let Self {
            entries,
            excluded,
            mut orderings,
            terminal,
        } = self;

        let total = entries.len();
        let mut working = entries;
        if !excluded.is_empty() {
            working.retain(|entry| !excluded.iter().any(|element| *element == entry.element()));
            trace!("excluded {} of {} entries", total - working.len(), total);
        }

        for ordering in orderings.iter_mut() {
            if !ordering.order(&mut working) {
                debug!(
                    "ordering strategy refused a working list of {} entries; continuing unordered",
                    working.len()
                );
            }
        }

        match terminal {
            Terminal::All => working,
            Terminal::First(count) => {
                working.truncate(count);
                working
            }
            Terminal::Last(count) => {
                if count >= working.len() {
                    working
                } else {
                    working.split_off(working.len() - count)
                }
            }
        }
    }
}
