//! Subprocess client for the PipeWire command-line tools.
//!
//! The server is only ever reached through `pw-cli` (queries) and
//! `pw-link` (link commands). Every invocation is bounded by a timeout so
//! a hung tool cannot hang the whole job.

use std::process::Output;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, trace};

use raoplink_core::ObjectKind;

use crate::error::{PwError, PwResult};

const PW_CLI: &str = "pw-cli";
const PW_LINK: &str = "pw-link";

/// Default bound on a single tool invocation.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the PipeWire command-line tools.
#[derive(Debug, Clone)]
pub struct PwCli {
    command_timeout: Duration,
}

impl Default for PwCli {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND_TIMEOUT)
    }
}

impl PwCli {
    /// Create a client with the given per-command timeout.
    #[must_use]
    pub fn new(command_timeout: Duration) -> Self {
        Self { command_timeout }
    }

    /// Verify the tools are installed and the PipeWire server is
    /// reachable.
    ///
    /// `pw-cli info 0` queries the core object and fails fast when the
    /// server socket is absent. A missing binary is reported as
    /// [`PwError::ToolMissing`], distinct from an unreachable server.
    ///
    /// # Errors
    /// Returns an error when either tool is missing or the server does
    /// not answer.
    pub async fn check_ready(&self) -> PwResult<()> {
        // Probe pw-link too, so a missing binary aborts the job before
        // any graph work instead of failing every pair later.
        let _ = self.run(PW_LINK, &["--version"]).await?;

        let output = self.run(PW_CLI, &["info", "0"]).await?;
        if output.status.success() {
            debug!("PipeWire core is reachable");
            Ok(())
        } else {
            Err(PwError::ConnectionFailed(format!(
                "pw-cli info failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )))
        }
    }

    /// List all graph objects of one kind, returning the raw dump text.
    ///
    /// # Errors
    /// Returns an error when the query itself fails; an empty dump is a
    /// valid result and parses to zero objects.
    pub async fn list_objects(&self, kind: ObjectKind) -> PwResult<String> {
        let output = self.run(PW_CLI, &["ls", kind.label()]).await?;
        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(PwError::CommandFailed(format!(
                "pw-cli ls {} failed: {}",
                kind.label(),
                String::from_utf8_lossy(&output.stderr).trim()
            )))
        }
    }

    /// Link an output port to an input port.
    ///
    /// The result is an opaque pass/fail signal. Re-linking an already
    /// linked pair is harmless at the server side, which keeps the whole
    /// job safe to re-run.
    ///
    /// # Errors
    /// Returns an error when the link command fails.
    pub async fn link_ports(&self, output_port: u32, input_port: u32) -> PwResult<()> {
        let out = output_port.to_string();
        let inp = input_port.to_string();
        let output = self.run(PW_LINK, &[out.as_str(), inp.as_str()]).await?;
        if output.status.success() {
            Ok(())
        } else {
            Err(PwError::LinkCreationFailed(format!(
                "pw-link {out} {inp}: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )))
        }
    }

    async fn run(&self, tool: &str, args: &[&str]) -> PwResult<Output> {
        trace!(tool, ?args, "Running command");

        let mut command = Command::new(tool);
        // Reap the child if the timeout fires while it is still running.
        command.args(args).kill_on_drop(true);

        match timeout(self.command_timeout, command.output()).await {
            Ok(Ok(output)) => Ok(output),
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(PwError::ToolMissing(format!("{tool} (install the PipeWire tools)")))
            }
            Ok(Err(e)) => Err(PwError::CommandFailed(format!("{tool}: {e}"))),
            Err(_) => Err(PwError::CommandTimeout(format!(
                "{tool} did not finish within {:?}",
                self.command_timeout
            ))),
        }
    }
}
