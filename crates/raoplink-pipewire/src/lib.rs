//! Raoplink PipeWire - the boundary to the PipeWire server.
//!
//! The server is treated as a black box behind two interfaces: `pw-cli`
//! for readiness checks and object listings, and `pw-link` for creating
//! links. This crate owns the subprocess plumbing, the per-pass graph
//! snapshot, and the link-plan execution loop.

pub mod cli;
pub mod error;
pub mod graph;
pub mod link;

pub use cli::{DEFAULT_COMMAND_TIMEOUT, PwCli};
pub use error::{PwError, PwResult};
pub use graph::GraphSnapshot;
pub use link::{LinkCommand, LinkReport, execute_plan};
