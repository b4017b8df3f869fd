//! Link planning: pairing source ports with sink ports.

use tracing::debug;

use crate::error::{Error, Result};
use crate::node::Port;

/// One planned point-to-point link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPair {
    /// Output port on the capture device
    pub source_port: u32,
    /// Input port on the sink
    pub sink_port: u32,
    /// Channel label of the source port, for log lines
    pub source_channel: String,
    /// Channel label of the sink port, for log lines
    pub sink_channel: String,
}

/// The ordered set of links to create for one resolution pass.
#[derive(Debug, Clone)]
pub struct LinkPlan {
    pub pairs: Vec<LinkPair>,
}

impl LinkPlan {
    /// Pair source ports with sink ports positionally, in the canonical
    /// order produced by the resolver.
    ///
    /// The plan length is `min(|source|, |sink|)`; surplus ports on the
    /// longer side stay unlinked. Both sides must already be resolved and
    /// non-empty.
    ///
    /// # Errors
    /// Returns an error when either side has no ports, so the caller
    /// reports the condition instead of silently succeeding with zero
    /// link attempts.
    pub fn build(source_ports: &[Port], sink_ports: &[Port]) -> Result<Self> {
        if source_ports.is_empty() {
            return Err(Error::EmptySourcePorts);
        }
        if sink_ports.is_empty() {
            return Err(Error::EmptySinkPorts);
        }

        let surplus = source_ports.len().abs_diff(sink_ports.len());
        if surplus > 0 {
            debug!(surplus, "Port counts differ; surplus ports stay unlinked");
        }

        let pairs = source_ports
            .iter()
            .zip(sink_ports)
            .map(|(source, sink)| LinkPair {
                source_port: source.id,
                sink_port: sink.id,
                source_channel: source.channel.clone().unwrap_or_default(),
                sink_channel: sink.channel.clone().unwrap_or_default(),
            })
            .collect();

        Ok(Self { pairs })
    }
}
