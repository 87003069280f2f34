//! Terminal operations that consume a `NodeIter`.

use super::NodeIter;
use crate::document::node::Node;
use crate::predicate::Predicate;

impl<'a> NodeIter<'a> {
    /// Returns true as soon as a node satisfies `pred`; false if the source
    /// runs out first (including when it is empty).
    pub fn any_match(mut self, pred: Predicate) -> bool {
        self.any(|node| pred.test(node))
    }

    /// Returns false at the first node failing `pred`; true once the source
    /// is exhausted. An empty source is vacuously true.
    pub fn all_match(mut self, pred: Predicate) -> bool {
        self.all(|node| pred.test(node))
    }

    /// Drains the iterator, collecting every node in pull order.
    pub fn into_vec(self) -> Vec<&'a Node> {
        self.collect()
    }
}
