//! Structural projections and filtering.
//!
//! Every projection is a streaming flat-map: for each source node it yields
//! zero or more nodes before pulling the next source node, preserving order.
//! Nodes of the wrong kind simply produce nothing.

use super::NodeIter;
use crate::document::node::{Kind, Node, Pairs};
use crate::predicate::Predicate;

impl<'a> NodeIter<'a> {
    /// Steps one level into documents, sequences and mappings.
    ///
    /// Yields the direct children of each such source node in content order
    /// (keys and values alike for mappings). Scalars and aliases yield
    /// nothing.
    pub fn values(self) -> NodeIter<'a> {
        NodeIter::new(self.flat_map(|node| {
            let children: &'a [Node] = match node.kind {
                Kind::Document | Kind::Sequence | Kind::Mapping => &node.content,
                Kind::Scalar | Kind::Alias => &[],
            };
            children.iter()
        }))
    }

    /// Yields the keys of each Mapping source node, in pair order.
    pub fn map_keys(self) -> NodeIter<'a> {
        self.select_pairs(|key, _| Some(key))
    }

    /// Yields the values of each Mapping source node, in pair order.
    pub fn map_values(self) -> NodeIter<'a> {
        self.select_pairs(|_, value| Some(value))
    }

    /// Yields the value of every mapping pair whose key satisfies
    /// `key_pred` and whose value satisfies `value_pred`.
    ///
    /// ```
    /// use yit::document::parser::parse_document;
    /// use yit::document::node::Kind;
    /// use yit::iter::NodeIter;
    /// use yit::predicate::{all, with_kind, with_string_value};
    ///
    /// let doc = parse_document("a: b\nc: d\ne: f").unwrap();
    /// let found: Vec<_> = NodeIter::from_node(&doc)
    ///     .recurse_nodes()
    ///     .filter(with_kind(Kind::Mapping))
    ///     .values_for_map(all(), with_string_value("d"))
    ///     .map(|n| n.value.as_str())
    ///     .collect();
    ///
    /// assert_eq!(found, vec!["d"]);
    /// ```
    pub fn values_for_map(self, key_pred: Predicate, value_pred: Predicate) -> NodeIter<'a> {
        self.select_pairs(move |key, value| {
            (key_pred.test(key) && value_pred.test(value)).then_some(value)
        })
    }

    /// Yields only the source nodes satisfying `pred`.
    ///
    /// The predicate is called once per source node and never after the
    /// source is exhausted.
    pub fn filter(self, pred: Predicate) -> NodeIter<'a> {
        NodeIter::new(Filter { source: self, pred })
    }

    fn select_pairs<F>(self, select: F) -> NodeIter<'a>
    where
        F: FnMut(&'a Node, &'a Node) -> Option<&'a Node> + 'a,
    {
        NodeIter::new(SelectPairs {
            source: self,
            pairs: Pairs::empty(),
            select,
        })
    }
}

struct Filter<'a> {
    source: NodeIter<'a>,
    pred: Predicate,
}

impl<'a> Iterator for Filter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.source.next()?;
            if self.pred.test(node) {
                return Some(node);
            }
        }
    }
}

/// Walks the pairs of one mapping at a time, yielding whatever `select`
/// picks from each pair.
struct SelectPairs<'a, F> {
    source: NodeIter<'a>,
    pairs: Pairs<'a>,
    select: F,
}

impl<'a, F> Iterator for SelectPairs<'a, F>
where
    F: FnMut(&'a Node, &'a Node) -> Option<&'a Node>,
{
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            for (key, value) in &mut self.pairs {
                if let Some(selected) = (self.select)(key, value) {
                    return Some(selected);
                }
            }
            self.pairs = self.source.next()?.pairs();
        }
    }
}
