//! YAML document model.
//!
//! This module provides the node tree that iterators walk, and a parser that
//! builds such trees from YAML text.
//!
//! # Modules
//!
//! - `node`: `Node` and `Kind`, the tree read by iterators
//! - `parser`: YAML text to `Node` documents via yaml-rust2
//! - `error`: parse errors

pub mod error;
pub mod node;
pub mod parser;

pub use error::ParseError;
pub use node::{Kind, Node, Pairs};
