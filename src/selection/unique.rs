//! Duplicate-free selection.

use rand::RngCore;

use super::entry::Entry;
use super::ordering::Ordering;
use super::pipeline::Selection;

/// A selection pipeline whose result never contains two equal elements.
///
/// The working list is deduplicated by element equality when the pipeline
/// is built (the first occurrence of each element is kept, at its
/// original position); everything else delegates to [`Selection`].
/// Random selection therefore draws distinct elements by construction:
/// the deduplicated list is shuffled and the head taken, never sampled
/// with replacement.
///
/// # Examples
///
/// ```
/// use u_select::selection::UniqueSelection;
///
/// let elements = [1, 2, 1, 3, 2];
/// let distinct = UniqueSelection::from(&elements).select();
/// assert_eq!(distinct, vec![1, 2, 3]);
/// ```
pub struct UniqueSelection<'a, E> {
    inner: Selection<'a, E>,
}

impl<'a, E: PartialEq> UniqueSelection<'a, E> {
    /// Builds a pipeline over the distinct elements of `elements`.
    pub fn from(elements: &'a [E]) -> Self {
        let mut entries: Vec<Entry<'a, E>> = Vec::with_capacity(elements.len());
        for (position, element) in elements.iter().enumerate() {
            if !entries.iter().any(|existing| existing.element() == element) {
                entries.push(Entry::new(element, position));
            }
        }
        Self {
            inner: Selection::from_entries(entries),
        }
    }

    /// See [`Selection::exclude`].
    pub fn exclude(mut self, elements: &'a [E]) -> Self {
        self.inner = self.inner.exclude(elements);
        self
    }

    /// See [`Selection::order_by`].
    pub fn order_by<O>(mut self, ordering: O) -> Self
    where
        O: Ordering<E> + 'a,
    {
        self.inner = self.inner.order_by(ordering);
        self
    }

    /// See [`Selection::first`].
    pub fn first(mut self, count: usize) -> Self {
        self.inner = self.inner.first(count);
        self
    }

    /// See [`Selection::last`].
    pub fn last(mut self, count: usize) -> Self {
        self.inner = self.inner.last(count);
        self
    }

    /// Random selection over the distinct elements.
    ///
    /// A `count` larger than the number of distinct elements yields
    /// exactly the full distinct set, in shuffled order.
    pub fn random<R>(mut self, generator: R, count: usize) -> Self
    where
        R: RngCore + 'a,
    {
        self.inner = self.inner.random(generator, count);
        self
    }
}

impl<'a, E: PartialEq + Clone> UniqueSelection<'a, E> {
    /// See [`Selection::select`].
    pub fn select(self) -> Vec<E> {
        self.inner.select()
    }

    /// See [`Selection::select_single`].
    pub fn select_single(self) -> Option<E> {
        self.inner.select_single()
    }
}
