//! Device selection over a graph snapshot.
//!
//! Selection is a best-effort heuristic: among nodes of the requested
//! media class, the first one (in emission order) whose name or
//! description satisfies the selector wins. The graph does not guarantee
//! uniqueness, and neither do we.

use std::fmt;

use tracing::debug;

use crate::node::{MediaClass, Node};

/// Name tokens identifying the HiFiBerry ADC, matched case-sensitively
/// against `node.name`.
const HIFIBERRY_NAME_TOKENS: &[&str] = &["platform-soc_sound", "sndrpihifiberry"];

/// Vendor token matched case-insensitively against `node.description`.
const HIFIBERRY_DESCRIPTION_TOKEN: &str = "hifiberry";

#[derive(Debug, Clone)]
enum NamePattern {
    /// The HiFiBerry capture-device heuristic: any name token, or the
    /// vendor token somewhere in the description.
    HifiberryCapture,
    /// Exact, case-sensitive match on `node.name`.
    Exact(String),
}

/// A media-class plus name predicate for picking one node out of a
/// snapshot.
#[derive(Debug, Clone)]
pub struct NodeSelector {
    media_class: MediaClass,
    pattern: NamePattern,
}

impl NodeSelector {
    /// Selector for the on-board HiFiBerry ADC capture device.
    #[must_use]
    pub fn hifiberry_capture() -> Self {
        Self { media_class: MediaClass::AudioSource, pattern: NamePattern::HifiberryCapture }
    }

    /// Selector for an audio sink with exactly the given `node.name`.
    #[must_use]
    pub fn sink_named(name: impl Into<String>) -> Self {
        Self { media_class: MediaClass::AudioSink, pattern: NamePattern::Exact(name.into()) }
    }

    /// The media class this selector requires.
    #[must_use]
    pub fn media_class(&self) -> &MediaClass {
        &self.media_class
    }

    /// Check whether a node satisfies this selector.
    #[must_use]
    pub fn matches(&self, node: &Node) -> bool {
        if node.media_class.as_ref() != Some(&self.media_class) {
            return false;
        }
        match &self.pattern {
            NamePattern::HifiberryCapture => {
                HIFIBERRY_NAME_TOKENS.iter().any(|token| node.name.contains(token))
                    || node
                        .description
                        .as_ref()
                        .is_some_and(|d| d.to_lowercase().contains(HIFIBERRY_DESCRIPTION_TOKEN))
            }
            NamePattern::Exact(name) => node.name == *name,
        }
    }
}

impl fmt::Display for NodeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pattern {
            NamePattern::HifiberryCapture => write!(f, "HiFiBerry ADC capture device"),
            NamePattern::Exact(name) => write!(f, "sink named \"{name}\""),
        }
    }
}

/// Return the first node (in emission order) satisfying the selector.
///
/// First-match-wins is stable under re-runs on identical input; callers
/// must not assume a specific physical device is always first.
#[must_use]
pub fn find_node<'a>(nodes: &'a [Node], selector: &NodeSelector) -> Option<&'a Node> {
    let found = nodes.iter().find(|node| selector.matches(node));
    if let Some(node) = found {
        debug!(id = node.id, name = %node.name, "Matched {selector}");
    }
    found
}
