//! Link orchestration: executing a plan against the command interface.

use tracing::{info, warn};

use raoplink_core::{LinkPair, LinkPlan};

use crate::cli::PwCli;
use crate::error::{PwError, PwResult};

/// The command half of the server boundary: create one link between an
/// output port and an input port.
#[allow(async_fn_in_trait)]
pub trait LinkCommand {
    /// Link an output port to an input port.
    async fn link_ports(&self, output_port: u32, input_port: u32) -> PwResult<()>;
}

impl LinkCommand for PwCli {
    async fn link_ports(&self, output_port: u32, input_port: u32) -> PwResult<()> {
        PwCli::link_ports(self, output_port, input_port).await
    }
}

/// Outcome of one resolution pass.
#[derive(Debug, Clone, Default)]
pub struct LinkReport {
    /// Number of pairs for which a link command was issued
    pub attempted: usize,
    /// Number of pairs that linked successfully
    pub succeeded: usize,
    /// The pairs that failed, for caller-visible accounting
    pub failed: Vec<LinkPair>,
}

impl LinkReport {
    /// True when every attempted pair linked.
    #[must_use]
    pub fn fully_linked(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Create every link in the plan, one command per pair, in plan order.
///
/// Each command is issued and awaited before the next. A pair failure is
/// logged with both port identifiers and recorded in the report, but
/// later pairs are still attempted.
///
/// # Errors
/// Returns an error only when no pair succeeded at all; a partial result
/// is a success with a non-empty `failed` list.
pub async fn execute_plan<C: LinkCommand>(commands: &C, plan: &LinkPlan) -> PwResult<LinkReport> {
    let mut report = LinkReport { attempted: plan.pairs.len(), ..LinkReport::default() };

    for pair in &plan.pairs {
        info!(
            source_port = pair.source_port,
            sink_port = pair.sink_port,
            "Linking {} -> {}",
            pair.source_channel,
            pair.sink_channel
        );

        match commands.link_ports(pair.source_port, pair.sink_port).await {
            Ok(()) => report.succeeded += 1,
            Err(e) => {
                warn!(
                    source_port = pair.source_port,
                    sink_port = pair.sink_port,
                    error = %e,
                    "Failed to link {} -> {}",
                    pair.source_channel,
                    pair.sink_channel
                );
                report.failed.push(pair.clone());
            }
        }
    }

    if report.succeeded == 0 {
        return Err(PwError::LinkCreationFailed(format!(
            "all {} link attempts failed",
            report.attempted
        )));
    }

    Ok(report)
}
