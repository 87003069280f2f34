//! YAML node representation read by the iterator layer.
//!
//! A `Node` mirrors the shape of a parsed YAML document: every node has a
//! `Kind`, a short type tag, a scalar value and an ordered list of children.
//! Mapping nodes store their entries flattened in `content` as
//! key, value, key, value, ...
//!
//! Nodes are built by the parser (or by hand) and are only ever read by
//! iterators and predicates.
//!
//! # Example
//!
//! ```
//! use yit::document::node::{Kind, Node};
//!
//! let map = Node::mapping(vec![
//!     (Node::scalar("name"), Node::scalar("yit")),
//!     (Node::scalar("version"), Node::scalar("2").with_tag("!!int")),
//! ]);
//!
//! assert_eq!(map.kind, Kind::Mapping);
//! assert_eq!(map.content.len(), 4);
//!
//! let keys: Vec<&str> = map.pairs().map(|(k, _)| k.value.as_str()).collect();
//! assert_eq!(keys, vec!["name", "version"]);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::slice::ChunksExact;
use std::str::FromStr;

/// The structural kind of a YAML node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// A document root; its content holds the single top-level node
    Document,
    /// An ordered list of nodes
    Sequence,
    /// Key/value pairs stored flattened in content
    Mapping,
    /// A leaf value
    #[default]
    Scalar,
    /// An unresolved alias reference
    Alias,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Document => "document",
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
            Kind::Scalar => "scalar",
            Kind::Alias => "alias",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "document" => Ok(Kind::Document),
            "sequence" => Ok(Kind::Sequence),
            "mapping" => Ok(Kind::Mapping),
            "scalar" => Ok(Kind::Scalar),
            "alias" => Ok(Kind::Alias),
            other => Err(format!("unknown node kind '{}'", other)),
        }
    }
}

/// A node in a YAML document tree.
///
/// Fields are public so trees can be built and inspected freely. The tree
/// must be acyclic; traversal does not detect cycles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    /// Structural kind
    pub kind: Kind,
    /// Short type tag such as `!!str` or `!!map` (may be empty)
    #[serde(default)]
    pub tag: String,
    /// Scalar value; empty for collections
    #[serde(default)]
    pub value: String,
    /// Ordered children. Mappings alternate key and value nodes.
    #[serde(default)]
    pub content: Vec<Node>,
}

impl Node {
    /// Creates a plain scalar node with no tag.
    pub fn scalar(value: impl Into<String>) -> Self {
        Self {
            kind: Kind::Scalar,
            value: value.into(),
            ..Self::default()
        }
    }

    /// Creates a sequence node from its items.
    pub fn sequence(items: Vec<Node>) -> Self {
        Self {
            kind: Kind::Sequence,
            content: items,
            ..Self::default()
        }
    }

    /// Creates a mapping node, flattening the pairs into content order.
    ///
    /// # Example
    ///
    /// ```
    /// use yit::document::node::Node;
    ///
    /// let map = Node::mapping(vec![(Node::scalar("a"), Node::scalar("b"))]);
    /// assert_eq!(map.content[0].value, "a");
    /// assert_eq!(map.content[1].value, "b");
    /// ```
    pub fn mapping(pairs: Vec<(Node, Node)>) -> Self {
        let mut content = Vec::with_capacity(pairs.len() * 2);
        for (key, value) in pairs {
            content.push(key);
            content.push(value);
        }

        Self {
            kind: Kind::Mapping,
            content,
            ..Self::default()
        }
    }

    /// Wraps a top-level node in a document node.
    pub fn document(root: Node) -> Self {
        Self {
            kind: Kind::Document,
            content: vec![root],
            ..Self::default()
        }
    }

    /// Creates an alias node. Aliases are leaves and are never resolved.
    pub fn alias() -> Self {
        Self {
            kind: Kind::Alias,
            ..Self::default()
        }
    }

    /// Returns this node with its tag replaced.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn is_mapping(&self) -> bool {
        self.kind == Kind::Mapping
    }

    /// Returns true for sequences and mappings.
    pub fn is_container(&self) -> bool {
        matches!(self.kind, Kind::Sequence | Kind::Mapping)
    }

    /// Iterates the key/value pairs of a mapping in order.
    ///
    /// Any other kind yields no pairs. A trailing key without a value
    /// (odd-length content) is skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use yit::document::node::Node;
    ///
    /// let seq = Node::sequence(vec![Node::scalar("a"), Node::scalar("b")]);
    /// assert_eq!(seq.pairs().count(), 0);
    /// ```
    pub fn pairs(&self) -> Pairs<'_> {
        if self.is_mapping() {
            Pairs::new(&self.content)
        } else {
            Pairs::empty()
        }
    }
}

/// Iterator over the key/value pairs of a mapping node.
#[derive(Debug, Clone)]
pub struct Pairs<'a> {
    chunks: ChunksExact<'a, Node>,
}

impl<'a> Pairs<'a> {
    fn new(content: &'a [Node]) -> Self {
        Self {
            chunks: content.chunks_exact(2),
        }
    }

    /// A pair iterator that yields nothing.
    pub fn empty() -> Self {
        Self::new(&[])
    }
}

impl<'a> Iterator for Pairs<'a> {
    type Item = (&'a Node, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().map(|pair| (&pair[0], &pair[1]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl From<&serde_yaml::Value> for Node {
    /// Converts an already-deserialized `serde_yaml` value into a node tree,
    /// assigning core-schema short tags.
    fn from(value: &serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => Node::scalar("null").with_tag("!!null"),
            Value::Bool(b) => Node::scalar(b.to_string()).with_tag("!!bool"),
            Value::Number(n) => {
                let tag = if n.is_f64() { "!!float" } else { "!!int" };
                Node::scalar(n.to_string()).with_tag(tag)
            }
            Value::String(s) => Node::scalar(s.as_str()).with_tag("!!str"),
            Value::Sequence(items) => {
                Node::sequence(items.iter().map(Node::from).collect()).with_tag("!!seq")
            }
            Value::Mapping(map) => Node::mapping(
                map.iter()
                    .map(|(k, v)| (Node::from(k), Node::from(v)))
                    .collect(),
            )
            .with_tag("!!map"),
            Value::Tagged(tagged) => Node::from(&tagged.value).with_tag(tagged.tag.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_and_parse() {
        for kind in [
            Kind::Document,
            Kind::Sequence,
            Kind::Mapping,
            Kind::Scalar,
            Kind::Alias,
        ] {
            assert_eq!(kind.to_string().parse::<Kind>(), Ok(kind));
        }
        assert!("tuple".parse::<Kind>().is_err());
    }

    #[test]
    fn test_pairs_of_mapping() {
        let map = Node::mapping(vec![
            (Node::scalar("a"), Node::scalar("b")),
            (Node::scalar("c"), Node::scalar("d")),
        ]);

        let pairs: Vec<(&str, &str)> = map
            .pairs()
            .map(|(k, v)| (k.value.as_str(), v.value.as_str()))
            .collect();
        assert_eq!(pairs, vec![("a", "b"), ("c", "d")]);
    }

    #[test]
    fn test_pairs_skip_trailing_key() {
        let mut map = Node::mapping(vec![(Node::scalar("a"), Node::scalar("b"))]);
        map.content.push(Node::scalar("dangling"));

        assert_eq!(map.pairs().count(), 1);
    }

    #[test]
    fn test_pairs_empty_for_scalar() {
        assert_eq!(Node::scalar("a").pairs().count(), 0);
    }

    #[test]
    fn test_is_container() {
        assert!(Node::sequence(vec![]).is_container());
        assert!(Node::mapping(vec![]).is_container());
        assert!(!Node::scalar("x").is_container());
        assert!(!Node::document(Node::scalar("x")).is_container());
    }

    #[test]
    fn test_from_serde_yaml_value() {
        let value: serde_yaml::Value = serde_yaml::from_str("a: 1\nb: [true, 2.5, ~]").unwrap();
        let node = Node::from(&value);

        assert_eq!(node.kind, Kind::Mapping);
        assert_eq!(node.tag, "!!map");
        assert_eq!(node.content[0].value, "a");
        assert_eq!(node.content[1].tag, "!!int");

        let seq = &node.content[3];
        assert_eq!(seq.kind, Kind::Sequence);
        let tags: Vec<&str> = seq.content.iter().map(|n| n.tag.as_str()).collect();
        assert_eq!(tags, vec!["!!bool", "!!float", "!!null"]);
    }

    #[test]
    fn test_from_serde_yaml_tagged_value() {
        let value: serde_yaml::Value = serde_yaml::from_str("!point 3").unwrap();
        let node = Node::from(&value);

        assert_eq!(node.tag, "!point");
        assert_eq!(node.value, "3");
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&Kind::Mapping).unwrap();
        assert_eq!(json, "\"mapping\"");
    }
}
