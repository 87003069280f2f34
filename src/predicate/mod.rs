//! Node predicates and their combinators.
//!
//! A `Predicate` is a pure boolean test over a single `Node`. Predicates are
//! plain function values: they are cheap to clone and compose with
//! `union`, `intersect` and `negate` (or the `or`, `and` and `not` methods).
//!
//! Predicates that only make sense for mappings return false for every other
//! kind of node.
//!
//! # Example
//!
//! ```
//! use yit::document::node::{Kind, Node};
//! use yit::predicate::{intersect, with_kind, with_map_key};
//!
//! let named_map = intersect([with_kind(Kind::Mapping), with_map_key("name")]);
//!
//! let map = Node::mapping(vec![(Node::scalar("name"), Node::scalar("yit"))]);
//! assert!(named_map.test(&map));
//! assert!(!named_map.test(&Node::scalar("name")));
//! ```

use crate::document::node::{Kind, Node};
use std::fmt;
use std::rc::Rc;

/// A reusable boolean test over a node.
///
/// Predicates must be side-effect free and give the same answer for the same
/// node every time they are called.
#[derive(Clone)]
pub struct Predicate(Rc<dyn Fn(&Node) -> bool>);

impl Predicate {
    /// Wraps a function as a predicate.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&Node) -> bool + 'static,
    {
        Self(Rc::new(test))
    }

    /// Applies the predicate to a node.
    pub fn test(&self, node: &Node) -> bool {
        (self.0)(node)
    }

    /// Logical OR with another predicate.
    pub fn or(self, other: Predicate) -> Predicate {
        union([self, other])
    }

    /// Logical AND with another predicate.
    pub fn and(self, other: Predicate) -> Predicate {
        intersect([self, other])
    }

    /// Logical NOT.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Predicate {
        negate(self)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate")
    }
}

/// Matches every node.
pub fn all() -> Predicate {
    Predicate::new(|_| true)
}

/// Matches no node.
pub fn none() -> Predicate {
    Predicate::new(|_| false)
}

/// Matches nodes of the given kind.
pub fn with_kind(kind: Kind) -> Predicate {
    Predicate::new(move |node| node.kind == kind)
}

/// Matches nodes whose tag is exactly `tag` (for example `!!str`).
pub fn with_short_tag(tag: impl Into<String>) -> Predicate {
    let tag = tag.into();
    Predicate::new(move |node| node.tag == tag)
}

/// Matches nodes whose value is exactly `value`.
pub fn with_string_value(value: impl Into<String>) -> Predicate {
    let value = value.into();
    Predicate::new(move |node| node.value == value)
}

/// Shorthand for [`with_string_value`].
pub fn with_value(value: impl Into<String>) -> Predicate {
    with_string_value(value)
}

/// Matches nodes whose value starts with `prefix`.
pub fn with_prefix(prefix: impl Into<String>) -> Predicate {
    let prefix = prefix.into();
    Predicate::new(move |node| node.value.starts_with(prefix.as_str()))
}

/// Matches nodes whose value ends with `suffix`.
pub fn with_suffix(suffix: impl Into<String>) -> Predicate {
    let suffix = suffix.into();
    Predicate::new(move |node| node.value.ends_with(suffix.as_str()))
}

/// Matches mappings with a key whose value is `key`.
pub fn with_map_key(key: impl Into<String>) -> Predicate {
    with_map_key_value(with_string_value(key), all())
}

/// Matches mappings with a value node whose value is `value`.
pub fn with_map_value(value: impl Into<String>) -> Predicate {
    with_map_key_value(all(), with_string_value(value))
}

/// Matches mappings with at least one pair satisfying both predicates.
///
/// ```
/// use yit::document::node::Node;
/// use yit::predicate::{with_map_key_value, with_prefix, with_suffix};
///
/// let pred = with_map_key_value(with_prefix("im"), with_suffix(":latest"));
/// let map = Node::mapping(vec![(Node::scalar("image"), Node::scalar("nginx:latest"))]);
///
/// assert!(pred.test(&map));
/// assert!(!pred.test(&Node::sequence(vec![])));
/// ```
pub fn with_map_key_value(key_pred: Predicate, value_pred: Predicate) -> Predicate {
    Predicate::new(move |node| {
        node.pairs()
            .any(|(key, value)| key_pred.test(key) && value_pred.test(value))
    })
}

/// True when any of the predicates is true, tried left to right.
///
/// An empty set of predicates is false.
pub fn union<I>(predicates: I) -> Predicate
where
    I: IntoIterator<Item = Predicate>,
{
    let predicates: Vec<Predicate> = predicates.into_iter().collect();
    Predicate::new(move |node| predicates.iter().any(|p| p.test(node)))
}

/// True when every predicate is true, tried left to right.
///
/// An empty set of predicates is true.
pub fn intersect<I>(predicates: I) -> Predicate
where
    I: IntoIterator<Item = Predicate>,
{
    let predicates: Vec<Predicate> = predicates.into_iter().collect();
    Predicate::new(move |node| predicates.iter().all(|p| p.test(node)))
}

/// Inverts a predicate.
pub fn negate(pred: Predicate) -> Predicate {
    Predicate::new(move |node| !pred.test(node))
}
