//! raoplink - links the HiFiBerry ADC input to the configured RAOP sink.
//!
//! One resolution pass: check the server is up, snapshot the object
//! graph, match the capture device and the target sink, resolve their
//! linkable ports, and issue one `pw-link` per channel pair. The process
//! exits zero only when at least one link was established.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tokio::time::sleep;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;

use raoplink_core::{LinkPlan, MediaClass, NodeSelector, PortDirection};
use raoplink_pipewire::{GraphSnapshot, PwCli, execute_plan};

/// Link the HiFiBerry ADC capture device to a RAOP sink.
#[derive(Debug, Parser)]
#[command(name = "raoplink", version, about)]
struct Args {
    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Target sink name, overriding the configured one
    #[arg(long)]
    sink: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("raoplink_cli=info".parse()?)
                .add_directive("raoplink_core=info".parse()?)
                .add_directive("raoplink_pipewire=info".parse()?),
        )
        .init();

    let args = Args::parse();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting RAOP audio linking");

    let config = config::load_config(args.config.as_deref())?;

    let Some(target_sink) = args.sink.or(config.sink.name).filter(|n| !n.is_empty()) else {
        bail!("no target sink configured; set [sink] name in the config file or pass --sink");
    };
    info!(sink = %target_sink, "Target RAOP sink");

    let cli = PwCli::new(Duration::from_secs(config.link.command_timeout_secs));
    cli.check_ready().await.context("PipeWire is not running or accessible")?;

    if config.link.settle_delay_secs > 0 {
        info!(secs = config.link.settle_delay_secs, "Waiting for audio devices to initialize");
        sleep(Duration::from_secs(config.link.settle_delay_secs)).await;
    }

    let snapshot =
        GraphSnapshot::fetch(&cli).await.context("Could not query the PipeWire graph")?;

    let capture = NodeSelector::hifiberry_capture();
    let Some(source) = snapshot.find_node(&capture) else {
        let available = snapshot.node_names_of_class(&MediaClass::AudioSource);
        warn!(?available, "Audio sources present in the graph");
        bail!("could not find the {capture}");
    };
    info!(id = source.id, name = %source.name, "Found capture device");

    let Some(sink) = snapshot.find_node(&NodeSelector::sink_named(&target_sink)) else {
        bail!("target sink not found: {target_sink}");
    };
    info!(id = sink.id, name = %sink.name, "Target sink verified");

    let source_ports = snapshot.ports_for(source.id, PortDirection::Output);
    if source_ports.is_empty() {
        bail!("no linkable output ports on capture device (node {})", source.id);
    }
    let sink_ports = snapshot.ports_for(sink.id, PortDirection::Input);
    if sink_ports.is_empty() {
        bail!("no linkable input ports on sink (node {})", sink.id);
    }
    info!(source_ports = source_ports.len(), sink_ports = sink_ports.len(), "Found audio ports");

    let plan = LinkPlan::build(&source_ports, &sink_ports)?;
    let report = execute_plan(&cli, &plan).await.context("No audio links could be created")?;

    if report.fully_linked() {
        info!(links = report.succeeded, "All audio links established");
    } else {
        warn!(
            succeeded = report.succeeded,
            failed = report.failed.len(),
            "Some links could not be established"
        );
    }
    info!("Audio linking completed");

    Ok(())
}
