//! Typed views over parsed graph objects.
//!
//! The raw property maps stay inside the parser boundary: downstream code
//! only ever sees these records with named fields.

use crate::object::{ObjectKind, PwObject};

/// The media class of a node. Only sources and sinks take part in
/// routing; everything else is carried as [`MediaClass::Other`] and never
/// matches a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaClass {
    AudioSource,
    AudioSink,
    Other(String),
}

impl MediaClass {
    /// Map a `media.class` property value to a class.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "Audio/Source" => Self::AudioSource,
            "Audio/Sink" => Self::AudioSink,
            other => Self::Other(other.to_string()),
        }
    }
}

/// An addressable audio endpoint in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// PipeWire object ID
    pub id: u32,
    /// Stable machine identifier (`node.name`); empty when the dump lacks one
    pub name: String,
    /// Human-readable description, used only as a matching fallback
    pub description: Option<String>,
    /// Media class (Audio/Sink, Audio/Source, etc.)
    pub media_class: Option<MediaClass>,
}

impl Node {
    /// Build a node view from a parsed object. Returns `None` for
    /// non-Node objects.
    #[must_use]
    pub fn from_object(object: &PwObject) -> Option<Self> {
        if object.kind != ObjectKind::Node {
            return None;
        }
        Some(Self {
            id: object.id,
            name: object.property("node.name").unwrap_or_default().to_string(),
            description: object.property("node.description").map(String::from),
            media_class: object.property("media.class").map(MediaClass::parse),
        })
    }
}

/// Port direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortDirection {
    /// Input port (receives audio)
    Input,
    /// Output port (sends audio)
    Output,
}

impl PortDirection {
    /// Map a `port.direction` property value to a direction.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "in" => Some(Self::Input),
            "out" => Some(Self::Output),
            _ => None,
        }
    }

    /// The wire form, for log lines.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Input => "in",
            Self::Output => "out",
        }
    }
}

/// A single mono audio terminal on a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    /// PipeWire object ID
    pub id: u32,
    /// Parent node ID - a lookup key, not ownership
    pub node_id: u32,
    /// Port direction (in/out)
    pub direction: PortDirection,
    /// Whether this is a synthetic monitor (loopback) port
    pub is_monitor: bool,
    /// Audio channel position (FL, FR, MONO, ...); absent means the port
    /// is not eligible for linking
    pub channel: Option<String>,
}

impl Port {
    /// Build a port view from a parsed object. Returns `None` for
    /// non-Port objects and for objects without a parent node id or a
    /// recognizable direction - such ports can never be routed.
    #[must_use]
    pub fn from_object(object: &PwObject) -> Option<Self> {
        if object.kind != ObjectKind::Port {
            return None;
        }
        let node_id = object.property("node.id")?.parse().ok()?;
        let direction = PortDirection::parse(object.property("port.direction")?)?;
        Some(Self {
            id: object.id,
            node_id,
            direction,
            is_monitor: object.property("port.monitor") == Some("true"),
            channel: object.property("audio.channel").map(String::from),
        })
    }
}
