//! YAML parsing into `Node` trees.
//!
//! This module drives the yaml-rust2 event parser and assembles the events
//! into `Node` documents. Every document in the stream becomes a node of kind
//! `Document` whose content is the document's top-level node. Short tags are
//! resolved the way the YAML 1.2 core schema resolves them, so plain `42` is
//! tagged `!!int` and `"42"` is tagged `!!str`.
//!
//! # Example
//!
//! ```
//! use yit::document::parser::parse_yaml;
//! use yit::document::node::Kind;
//!
//! let docs = parse_yaml("a: 1\n---\n[x, y]").unwrap();
//! assert_eq!(docs.len(), 2);
//! assert_eq!(docs[0].kind, Kind::Document);
//! assert_eq!(docs[0].content[0].kind, Kind::Mapping);
//! assert_eq!(docs[1].content[0].tag, "!!seq");
//! ```

use super::error::ParseError;
use super::node::{Kind, Node};
use yaml_rust2::parser::{Event, EventReceiver, Parser};
use yaml_rust2::scanner::TScalarStyle;

const CORE_SCHEMA_PREFIX: &str = "tag:yaml.org,2002:";

/// Options controlling how parsed nodes are annotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Resolve implicit core-schema tags. When false only explicit tags are kept.
    pub resolve_tags: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { resolve_tags: true }
    }
}

/// Parses a YAML stream into one `Document` node per document.
///
/// An empty stream yields an empty vector.
///
/// # Errors
///
/// Returns `ParseError::Syntax` if the scanner rejects the input.
///
/// ```
/// use yit::document::parser::parse_yaml;
///
/// assert!(parse_yaml("key: [unclosed").is_err());
/// assert!(parse_yaml("").unwrap().is_empty());
/// ```
pub fn parse_yaml(source: &str) -> Result<Vec<Node>, ParseError> {
    parse_yaml_with(source, ParseOptions::default())
}

/// Parses a YAML stream with explicit options.
pub fn parse_yaml_with(source: &str, options: ParseOptions) -> Result<Vec<Node>, ParseError> {
    let mut builder = TreeBuilder::new(options);
    let mut parser = Parser::new_from_str(source);
    parser.load(&mut builder, true)?;

    tracing::debug!(documents = builder.documents.len(), "parsed YAML stream");
    Ok(builder.documents)
}

/// Parses a YAML stream and returns its first document.
///
/// # Errors
///
/// Returns `ParseError::EmptyStream` if the input holds no document.
pub fn parse_document(source: &str) -> Result<Node, ParseError> {
    parse_yaml(source)?
        .into_iter()
        .next()
        .ok_or(ParseError::EmptyStream)
}

/// Assembles parser events into node trees.
///
/// Open collections live on `stack`; a finished node is appended to the
/// innermost open collection, or becomes the pending document root.
struct TreeBuilder {
    options: ParseOptions,
    stack: Vec<Node>,
    root: Option<Node>,
    documents: Vec<Node>,
}

impl TreeBuilder {
    fn new(options: ParseOptions) -> Self {
        Self {
            options,
            stack: Vec::new(),
            root: None,
            documents: Vec::new(),
        }
    }

    fn insert(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(parent) => parent.content.push(node),
            None => self.root = Some(node),
        }
    }

    fn open(&mut self, kind: Kind, explicit: Option<String>, default_tag: &str) {
        let tag = match explicit {
            Some(tag) if tag != "!" => tag,
            _ if self.options.resolve_tags => default_tag.to_string(),
            _ => String::new(),
        };

        self.stack.push(Node {
            kind,
            tag,
            ..Node::default()
        });
    }

    fn close(&mut self) {
        if let Some(node) = self.stack.pop() {
            self.insert(node);
        }
    }

    fn scalar(&mut self, value: String, style: TScalarStyle, explicit: Option<String>) {
        let tag = match explicit {
            Some(tag) if tag == "!" => "!!str".to_string(),
            Some(tag) => tag,
            None if !self.options.resolve_tags => String::new(),
            None if style == TScalarStyle::Plain => resolve_plain_tag(&value).to_string(),
            None => "!!str".to_string(),
        };

        self.insert(Node {
            kind: Kind::Scalar,
            tag,
            value,
            content: Vec::new(),
        });
    }
}

impl EventReceiver for TreeBuilder {
    fn on_event(&mut self, ev: Event) {
        match ev {
            Event::Scalar(value, style, _, tag) => {
                let explicit = tag.map(|t| short_tag(&t.handle, &t.suffix));
                self.scalar(value, style, explicit);
            }
            Event::SequenceStart(_, tag) => {
                let explicit = tag.map(|t| short_tag(&t.handle, &t.suffix));
                self.open(Kind::Sequence, explicit, "!!seq");
            }
            Event::MappingStart(_, tag) => {
                let explicit = tag.map(|t| short_tag(&t.handle, &t.suffix));
                self.open(Kind::Mapping, explicit, "!!map");
            }
            Event::SequenceEnd | Event::MappingEnd => self.close(),
            Event::Alias(_) => self.insert(Node::alias()),
            Event::DocumentEnd => {
                let document = Node {
                    kind: Kind::Document,
                    content: self.root.take().into_iter().collect(),
                    ..Node::default()
                };
                self.documents.push(document);
            }
            _ => {}
        }
    }
}

/// Collapses a tag handle and suffix into its short form (`!!str`, `!local`).
fn short_tag(handle: &str, suffix: &str) -> String {
    let full = if handle == "!!" {
        format!("{}{}", CORE_SCHEMA_PREFIX, suffix)
    } else {
        format!("{}{}", handle, suffix)
    };

    match full.strip_prefix(CORE_SCHEMA_PREFIX) {
        Some(name) => format!("!!{}", name),
        None => full,
    }
}

/// Resolves the core-schema tag of a plain scalar.
pub(crate) fn resolve_plain_tag(value: &str) -> &'static str {
    if is_null(value) {
        "!!null"
    } else if is_bool(value) {
        "!!bool"
    } else if is_int(value) {
        "!!int"
    } else if is_float(value) {
        "!!float"
    } else {
        "!!str"
    }
}

fn is_null(value: &str) -> bool {
    matches!(value, "" | "~" | "null" | "Null" | "NULL")
}

fn is_bool(value: &str) -> bool {
    matches!(
        value,
        "true" | "True" | "TRUE" | "false" | "False" | "FALSE"
    )
}

fn is_int(value: &str) -> bool {
    if let Some(octal) = value.strip_prefix("0o") {
        return !octal.is_empty() && octal.bytes().all(|b| (b'0'..=b'7').contains(&b));
    }
    if let Some(hex) = value.strip_prefix("0x") {
        return !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit());
    }

    let digits = value.strip_prefix(['-', '+']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_float(value: &str) -> bool {
    let unsigned = value.strip_prefix(['-', '+']).unwrap_or(value);
    if matches!(unsigned, ".inf" | ".Inf" | ".INF") || matches!(value, ".nan" | ".NaN" | ".NAN") {
        return true;
    }

    // [0-9]* ( \. [0-9]* )? ( [eE] [-+]? [0-9]+ )? with at least one mantissa digit
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(idx) => (&unsigned[..idx], Some(&unsigned[idx + 1..])),
        None => (unsigned, None),
    };

    let (whole, fraction) = match mantissa.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (mantissa, ""),
    };

    let digits_ok = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() && fraction.is_empty() {
        return false;
    }
    if !digits_ok(whole) || !digits_ok(fraction) {
        return false;
    }

    match exponent {
        Some(exp) => {
            let exp = exp.strip_prefix(['-', '+']).unwrap_or(exp);
            !exp.is_empty() && digits_ok(exp)
        }
        None => true,
    }
}
