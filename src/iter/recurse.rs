//! Depth-first, pre-order traversal.

use super::NodeIter;
use crate::document::node::Node;
use std::slice;

impl<'a> NodeIter<'a> {
    /// Walks every node reachable from the source nodes.
    ///
    /// Each node is yielded before its descendants, children in content
    /// order. Roots are walked in source order, one full subtree at a time.
    /// The walk keeps an explicit stack of sibling cursors, so it advances
    /// exactly one node per pull and stopping early costs nothing.
    ///
    /// The tree must be acyclic.
    ///
    /// ```
    /// use yit::document::parser::parse_document;
    /// use yit::iter::NodeIter;
    ///
    /// let doc = parse_document("{a: b}").unwrap();
    /// let kinds: Vec<String> = NodeIter::from_node(&doc)
    ///     .recurse_nodes()
    ///     .map(|n| n.kind.to_string())
    ///     .collect();
    ///
    /// assert_eq!(kinds, vec!["document", "mapping", "scalar", "scalar"]);
    /// ```
    pub fn recurse_nodes(self) -> NodeIter<'a> {
        NodeIter::new(Recurse {
            roots: self,
            stack: Vec::new(),
        })
    }
}

/// Traversal cursor: each frame holds the not-yet-visited children of a
/// node on the current path.
struct Recurse<'a> {
    roots: NodeIter<'a>,
    stack: Vec<slice::Iter<'a, Node>>,
}

impl<'a> Recurse<'a> {
    fn visit(&mut self, node: &'a Node) -> &'a Node {
        if !node.content.is_empty() {
            self.stack.push(node.content.iter());
        }
        node
    }
}

impl<'a> Iterator for Recurse<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.last_mut() {
            match frame.next() {
                Some(child) => return Some(self.visit(child)),
                None => {
                    self.stack.pop();
                }
            }
        }

        let root = self.roots.next()?;
        Some(self.visit(root))
    }
}
