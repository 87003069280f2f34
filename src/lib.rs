//! yit - lazy iterators over YAML node trees.
//!
//! A `NodeIter` is a single-pass, pull-driven stream of borrowed `Node`s.
//! Streams are built from root nodes, walked depth-first, projected through
//! mapping and sequence structure, filtered with composable `Predicate`s and
//! finally consumed by an aggregate.
//!
//! # Example
//!
//! ```
//! use yit::document::parser::parse_yaml;
//! use yit::document::node::Kind;
//! use yit::iter::NodeIter;
//! use yit::predicate::with_kind;
//!
//! let docs = parse_yaml("name: yit\ntags: [yaml, iter]").unwrap();
//! let keys: Vec<_> = NodeIter::from_nodes(&docs)
//!     .recurse_nodes()
//!     .filter(with_kind(Kind::Mapping))
//!     .map_keys()
//!     .map(|node| node.value.as_str())
//!     .collect();
//!
//! assert_eq!(keys, vec!["name", "tags"]);
//! ```

pub mod config;
pub mod document;
pub mod file;
pub mod iter;
pub mod predicate;

pub use document::node::{Kind, Node};
pub use iter::NodeIter;
pub use predicate::Predicate;
