//! Working-list entries for selection pipelines.

/// One element of a pipeline's working list.
///
/// An entry borrows its element from the source collection and remembers
/// the position the element occupied there. Ordering strategies reposition
/// entries inside the working list; the recorded position always refers to
/// the original source order.
///
/// Entries are created by [`Selection::from`](super::Selection::from) and
/// only ever handed out as a mutable slice to an ordering strategy, so a
/// strategy can reorder the working list but never grow or shrink it.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a, E> {
    element: &'a E,
    position: usize,
}

impl<'a, E> Entry<'a, E> {
    pub(crate) fn new(element: &'a E, position: usize) -> Self {
        Self { element, position }
    }

    /// The borrowed source element.
    pub fn element(&self) -> &'a E {
        self.element
    }

    /// The element's position in the original source collection.
    pub fn position(&self) -> usize {
        self.position
    }
}

/// Entries compare by element equality, not by position or identity.
impl<E: PartialEq> PartialEq for Entry<'_, E> {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let value = 7;
        let entry = Entry::new(&value, 3);
        assert_eq!(*entry.element(), 7);
        assert_eq!(entry.position(), 3);
    }

    #[test]
    fn test_equality_ignores_position() {
        let a = 5;
        let b = 5;
        let c = 6;
        assert_eq!(Entry::new(&a, 0), Entry::new(&b, 9));
        assert_ne!(Entry::new(&a, 0), Entry::new(&c, 0));
    }
}
