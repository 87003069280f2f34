//! File I/O for YAML documents.
//!
//! This module loads YAML from disk, readers or stdin into `Node` documents,
//! decompressing gzip input transparently.

pub mod loader;
