//! Lazy, single-pass iteration over node trees.
//!
//! `NodeIter` is the stream every operation builds on. It yields borrowed
//! `&Node`s one pull at a time: nothing is computed until the consumer asks
//! for the next element, and no stage looks ahead by more than one element.
//! Every combinator consumes the iterator it is called on and returns a new
//! `NodeIter` wrapping it, so a chain always has exactly one consumer.
//!
//! Once a `NodeIter` returns `None` it keeps returning `None`.
//!
//! # Modules
//!
//! - `recurse`: depth-first, pre-order tree walk
//! - `projection`: child, key and value projections plus filtering
//! - `aggregate`: terminal operations
//!
//! # Example
//!
//! ```
//! use yit::document::node::Node;
//! use yit::iter::NodeIter;
//!
//! let a = Node::scalar("a");
//! let b = Node::scalar("b");
//! let c = Node::scalar("c");
//!
//! let mut iter = NodeIter::from_iterators(vec![
//!     NodeIter::from_nodes([&a, &b]),
//!     NodeIter::from_node(&c),
//! ]);
//!
//! assert_eq!(iter.next().map(|n| n.value.as_str()), Some("a"));
//! assert_eq!(iter.next().map(|n| n.value.as_str()), Some("b"));
//! assert_eq!(iter.next().map(|n| n.value.as_str()), Some("c"));
//! assert!(iter.next().is_none());
//! assert!(iter.next().is_none());
//! ```

mod aggregate;
mod projection;
mod recurse;

use crate::document::node::Node;
use std::fmt;
use std::iter::FusedIterator;

/// A single-pass, pull-driven stream of nodes borrowed from a tree.
///
/// The wrapped source is private; the only way to observe a `NodeIter` is to
/// pull from it (directly through `Iterator::next` or via the aggregates).
pub struct NodeIter<'a> {
    source: Box<dyn Iterator<Item = &'a Node> + 'a>,
    exhausted: bool,
}

impl<'a> NodeIter<'a> {
    /// Wraps any iterator of node references.
    pub fn new<I>(source: I) -> Self
    where
        I: Iterator<Item = &'a Node> + 'a,
    {
        Self {
            source: Box::new(source),
            exhausted: false,
        }
    }

    /// Builds an iterator from a pull function.
    ///
    /// The function is not called again after it first returns `None`.
    ///
    /// ```
    /// use yit::iter::NodeIter;
    ///
    /// let mut empty = NodeIter::from_fn(|| None);
    /// assert!(empty.next().is_none());
    /// ```
    pub fn from_fn<F>(pull: F) -> Self
    where
        F: FnMut() -> Option<&'a Node> + 'a,
    {
        Self::new(std::iter::from_fn(pull))
    }

    /// An iterator that yields nothing.
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    /// Yields `node` once.
    pub fn from_node(node: &'a Node) -> Self {
        Self::new(std::iter::once(node))
    }

    /// Yields the given nodes in order.
    pub fn from_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = &'a Node>,
        I::IntoIter: 'a,
    {
        Self::new(nodes.into_iter())
    }

    /// Concatenates iterators: each source is drained before the next is
    /// pulled from.
    pub fn from_iterators<I>(iterators: I) -> Self
    where
        I: IntoIterator<Item = NodeIter<'a>>,
        I::IntoIter: 'a,
    {
        Self::new(iterators.into_iter().flatten())
    }

    /// Inserts a caller-supplied stage into the chain.
    ///
    /// `iter.iterate(a).iterate(b)` is the same as `b(a(iter))`.
    ///
    /// ```
    /// use yit::document::node::Node;
    /// use yit::iter::NodeIter;
    ///
    /// fn skip_first(iter: NodeIter<'_>) -> NodeIter<'_> {
    ///     NodeIter::new(iter.skip(1))
    /// }
    ///
    /// let nodes = vec![Node::scalar("a"), Node::scalar("b"), Node::scalar("c")];
    /// let values: Vec<_> = NodeIter::from_nodes(&nodes)
    ///     .iterate(skip_first)
    ///     .iterate(skip_first)
    ///     .map(|n| n.value.as_str())
    ///     .collect();
    /// assert_eq!(values, vec!["c"]);
    /// ```
    pub fn iterate<F>(self, transform: F) -> NodeIter<'a>
    where
        F: FnOnce(NodeIter<'a>) -> NodeIter<'a>,
    {
        transform(self)
    }
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let next = self.source.next();
        if next.is_none() {
            self.exhausted = true;
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            (0, Some(0))
        } else {
            self.source.size_hint()
        }
    }
}

impl FusedIterator for NodeIter<'_> {}

impl Default for NodeIter<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for NodeIter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeIter")
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_from_node_yields_once() {
        let node = Node::default();
        let mut iter = NodeIter::from_node(&node);

        assert!(std::ptr::eq(iter.next().unwrap(), &node));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_exhaustion_is_sticky_for_flaky_source() {
        let node = Node::scalar("x");
        let node_ref = &node;
        // Yields None, then a node: a badly behaved pull function.
        let mut calls = 0;
        let mut iter = NodeIter::from_fn(move || {
            calls += 1;
            if calls == 1 {
                None
            } else {
                Some(node_ref)
            }
        });

        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_source_not_pulled_after_exhaustion() {
        let pulls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulls);
        let mut iter = NodeIter::from_fn(move || {
            counter.set(counter.get() + 1);
            None
        });

        for _ in 0..5 {
            assert!(iter.next().is_none());
        }
        assert_eq!(pulls.get(), 1);
    }

    #[test]
    fn test_from_iterators_empty() {
        let mut iter = NodeIter::from_iterators(Vec::new());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(NodeIter::default().count(), 0);
    }
}
