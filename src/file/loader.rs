//! YAML file loading functionality.
//!
//! This module provides functions to load YAML streams from files, readers or
//! stdin and parse them into `Document` nodes ready for iteration. Gzip input
//! is detected by a `.gz` extension or by its magic bytes and decompressed
//! before parsing.

use crate::config::LoaderConfig;
use crate::document::node::Node;
use crate::document::parser::parse_yaml_with;
use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs;
use std::io::Read;
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Loads and parses a YAML file with the default configuration.
///
/// # Examples
///
/// ```no_run
/// use yit::file::loader::load_yaml_file;
/// use yit::iter::NodeIter;
///
/// let docs = load_yaml_file("deployment.yaml").unwrap();
/// let count = NodeIter::from_nodes(&docs).recurse_nodes().count();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be opened or read
/// - The file is gzipped but corrupted
/// - The content exceeds the configured size limit
/// - The content is not valid YAML
pub fn load_yaml_file<P: AsRef<Path>>(path: P) -> Result<Vec<Node>> {
    load_yaml_file_with(path, &LoaderConfig::default())
}

/// Loads and parses a YAML file with an explicit configuration.
pub fn load_yaml_file_with<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> Result<Vec<Node>> {
    let path = path.as_ref();
    tracing::debug!("loading YAML from {:?}", path);

    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open file {}", path.display()))?;

    load_yaml_from_reader(file, config)
        .with_context(|| format!("Failed to load YAML from {}", path.display()))
}

/// Reads a YAML stream from any reader and parses it.
///
/// Gzip-compressed input is recognised by its magic bytes.
pub fn load_yaml_from_reader<R: Read>(reader: R, config: &LoaderConfig) -> Result<Vec<Node>> {
    let content = read_content(reader, config.max_input_bytes)?;
    let documents = parse_yaml_with(&content, config.parse_options())
        .context("Failed to parse YAML")?;

    tracing::debug!(
        bytes = content.len(),
        documents = documents.len(),
        "loaded YAML stream"
    );
    Ok(documents)
}

/// Loads and parses YAML from standard input.
///
/// ```no_run
/// use yit::file::loader::load_yaml_from_stdin;
///
/// // Usage: cat config.yaml | my-tool
/// let docs = load_yaml_from_stdin().unwrap();
/// ```
pub fn load_yaml_from_stdin() -> Result<Vec<Node>> {
    let stdin = std::io::stdin();
    load_yaml_from_reader(stdin.lock(), &LoaderConfig::default())
        .context("Failed to load YAML from stdin")
}

/// Reads at most `limit` bytes of (decompressed) UTF-8 text.
fn read_content<R: Read>(reader: R, limit: usize) -> Result<String> {
    let raw = read_limited(reader, limit).context("Failed to read input")?;

    let bytes = if raw.starts_with(&GZIP_MAGIC) {
        read_limited(GzDecoder::new(raw.as_slice()), limit)
            .context("Failed to decompress gzipped input - data may be corrupted")?
    } else {
        raw
    };

    String::from_utf8(bytes).context("Input is not valid UTF-8")
}

fn read_limited<R: Read>(reader: R, limit: usize) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    reader.take(cap).read_to_end(&mut buffer)?;

    if buffer.len() > limit {
        anyhow::bail!("Input exceeds the {} byte limit", limit);
    }
    Ok(buffer)
}
