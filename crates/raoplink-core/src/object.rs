//! Parsing of PipeWire object listings.
//!
//! `pw-cli ls <Kind>` prints a flat, ordered dump of objects: each object
//! starts with an `id <n>, type PipeWire:Interface:<Kind>` header line,
//! followed by indented `key = value` property lines. This module turns
//! that text into [`PwObject`] records. Lines that match neither pattern
//! are ignored so newer PipeWire releases can add output without breaking
//! the parser.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

static HEADER_RE: OnceLock<Regex> = OnceLock::new();
static PROPERTY_RE: OnceLock<Regex> = OnceLock::new();

fn header_re() -> &'static Regex {
    // Tolerates the `/version` suffix pw-cli appends to the interface name.
    HEADER_RE.get_or_init(|| {
        Regex::new(r"^id (\d+), type PipeWire:Interface:([A-Za-z]+)")
            .expect("header pattern compiles")
    })
}

fn property_re() -> &'static Regex {
    // Quoted values may contain escaped quotes; bare values run to end of line.
    PROPERTY_RE.get_or_init(|| {
        Regex::new(r#"^([A-Za-z0-9._:-]+) = (?:"((?:[^"\\]|\\.)*)"|(.*))$"#)
            .expect("property pattern compiles")
    })
}

/// The object kinds relevant to audio routing. Every other interface kind
/// in the dump is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Node,
    Port,
}

impl ObjectKind {
    /// Map an interface name from a header line to a kind.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Node" => Some(Self::Node),
            "Port" => Some(Self::Port),
            _ => None,
        }
    }

    /// The listing argument understood by `pw-cli ls`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Node => "Node",
            Self::Port => "Port",
        }
    }
}

/// A single object from a graph listing: an opaque id, a kind, and the
/// raw property map. Within one object the last occurrence of a repeated
/// key wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PwObject {
    pub id: u32,
    pub kind: ObjectKind,
    pub properties: HashMap<String, String>,
}

impl PwObject {
    /// Look up a property value.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

/// Parse a full `pw-cli ls` dump into objects, preserving emission order.
///
/// A header line flushes the previously accumulated object; end of input
/// flushes the last one. Empty or malformed input yields an empty vector,
/// never an error - callers distinguish "no objects" from "query failed"
/// at the query layer.
#[must_use]
pub fn parse_objects(input: &str) -> Vec<PwObject> {
    let mut objects = Vec::new();
    let mut current: Option<PwObject> = None;

    for raw in input.lines() {
        let line = raw.trim();

        if let Some(caps) = header_re().captures(line) {
            if let Some(done) = current.take() {
                objects.push(done);
            }
            // A header of an unrecognized kind (or an id too large for the
            // server to ever hand out) still terminates the previous object;
            // its own property lines are dropped below.
            current = caps[1]
                .parse::<u32>()
                .ok()
                .zip(ObjectKind::from_label(&caps[2]))
                .map(|(id, kind)| PwObject { id, kind, properties: HashMap::new() });
            continue;
        }

        if let Some(obj) = current.as_mut()
            && let Some(caps) = property_re().captures(line)
        {
            let value = match caps.get(2) {
                Some(quoted) => unescape(quoted.as_str()),
                None => caps.get(3).map_or_else(String::new, |m| m.as_str().trim().to_string()),
            };
            obj.properties.insert(caps[1].to_string(), value);
        }
    }

    if let Some(done) = current.take() {
        objects.push(done);
    }

    objects
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(escaped) => out.push(escaped),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}
