//! Raoplink Core - graph parsing, device matching, and link planning.
//!
//! This crate contains the pure domain logic shared by the PipeWire
//! boundary and the CLI: turning `pw-cli ls` dumps into typed records,
//! picking the capture device and the configured sink out of a snapshot,
//! resolving each node's linkable ports in canonical order, and pairing
//! them into a link plan. No I/O happens here.

pub mod error;
pub mod matcher;
pub mod node;
pub mod object;
pub mod plan;
pub mod ports;

pub use error::{Error, Result};
pub use matcher::{NodeSelector, find_node};
pub use node::{MediaClass, Node, Port, PortDirection};
pub use object::{ObjectKind, PwObject, parse_objects};
pub use plan::{LinkPair, LinkPlan};
pub use ports::resolve_ports;
