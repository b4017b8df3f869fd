//! One-shot snapshot of the PipeWire object graph.

use tracing::debug;

use raoplink_core::{
    MediaClass, Node, NodeSelector, ObjectKind, Port, PortDirection, find_node, parse_objects,
    resolve_ports,
};

use crate::cli::PwCli;
use crate::error::PwResult;

/// All nodes and ports at the time of the query.
///
/// A snapshot is valid for one resolution pass only: device hot-plug can
/// invalidate it at any moment, and nothing re-validates after the query,
/// so resolved ids are handed to the link commands immediately and a
/// fresh run re-queries from scratch.
#[derive(Debug, Clone, Default)]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
    pub ports: Vec<Port>,
}

impl GraphSnapshot {
    /// Query the server once per object kind and parse the results.
    ///
    /// The two dumps serve every downstream lookup of the pass: both
    /// device matches share the Node dump, both port resolutions share
    /// the Port dump.
    ///
    /// # Errors
    /// Returns an error when either query fails.
    pub async fn fetch(cli: &PwCli) -> PwResult<Self> {
        let node_dump = cli.list_objects(ObjectKind::Node).await?;
        let port_dump = cli.list_objects(ObjectKind::Port).await?;
        let snapshot = Self::from_listings(&node_dump, &port_dump);
        debug!(
            nodes = snapshot.nodes.len(),
            ports = snapshot.ports.len(),
            "Graph snapshot taken"
        );
        Ok(snapshot)
    }

    /// Build a snapshot from raw listing text.
    #[must_use]
    pub fn from_listings(node_dump: &str, port_dump: &str) -> Self {
        let nodes = parse_objects(node_dump).iter().filter_map(Node::from_object).collect();
        let ports = parse_objects(port_dump).iter().filter_map(Port::from_object).collect();
        Self { nodes, ports }
    }

    /// First node satisfying the selector, in emission order.
    #[must_use]
    pub fn find_node(&self, selector: &NodeSelector) -> Option<&Node> {
        find_node(&self.nodes, selector)
    }

    /// The linkable ports of one node, in canonical order.
    #[must_use]
    pub fn ports_for(&self, node_id: u32, direction: PortDirection) -> Vec<Port> {
        resolve_ports(&self.ports, node_id, direction)
    }

    /// Names of all nodes with the given media class, for not-found
    /// diagnostics.
    #[must_use]
    pub fn node_names_of_class(&self, class: &MediaClass) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| n.media_class.as_ref() == Some(class))
            .map(|n| n.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use raoplink_core::LinkPlan;

    use super::*;

    // A trimmed-down pw-cli dump: the HiFiBerry source (with its monitor
    // taps), a RAOP sink, and an unrelated stream node.
    const NODE_DUMP: &str = "\
id 30, type PipeWire:Interface:Node/3
 \t\tnode.name = \"alsa_input.platform-soc_sound.stereo-fallback\"
 \t\tnode.description = \"HiFiBerry DAC+ ADC\"
 \t\tmedia.class = \"Audio/Source\"
id 42, type PipeWire:Interface:Node/3
 \t\tnode.name = \"MySink\"
 \t\tnode.description = \"Living Room Speaker\"
 \t\tmedia.class = \"Audio/Sink\"
id 50, type PipeWire:Interface:Node/3
 \t\tnode.name = \"spotify\"
 \t\tmedia.class = \"Stream/Output/Audio\"
";

    const PORT_DUMP: &str = "\
id 31, type PipeWire:Interface:Port/3
 \t\tnode.id = \"30\"
 \t\tport.direction = \"out\"
 \t\taudio.channel = \"FR\"
id 32, type PipeWire:Interface:Port/3
 \t\tnode.id = \"30\"
 \t\tport.direction = \"out\"
 \t\taudio.channel = \"FL\"
id 33, type PipeWire:Interface:Port/3
 \t\tnode.id = \"30\"
 \t\tport.direction = \"out\"
 \t\tport.monitor = \"true\"
 \t\taudio.channel = \"FL\"
id 43, type PipeWire:Interface:Port/3
 \t\tnode.id = \"42\"
 \t\tport.direction = \"in\"
 \t\taudio.channel = \"FL\"
id 44, type PipeWire:Interface:Port/3
 \t\tnode.id = \"42\"
 \t\tport.direction = \"in\"
 \t\taudio.channel = \"FR\"
";

    #[test]
    fn test_from_listings_builds_typed_views() {
        let snapshot = GraphSnapshot::from_listings(NODE_DUMP, PORT_DUMP);
        assert_eq!(snapshot.nodes.len(), 3);
        assert_eq!(snapshot.ports.len(), 5);
    }

    #[test]
    fn test_full_resolution_pass_pairs_channels_left_to_right() {
        let snapshot = GraphSnapshot::from_listings(NODE_DUMP, PORT_DUMP);

        let source = snapshot.find_node(&NodeSelector::hifiberry_capture()).unwrap();
        assert_eq!(source.id, 30);
        let sink = snapshot.find_node(&NodeSelector::sink_named("MySink")).unwrap();
        assert_eq!(sink.id, 42);

        let source_ports = snapshot.ports_for(source.id, PortDirection::Output);
        let sink_ports = snapshot.ports_for(sink.id, PortDirection::Input);

        let plan = LinkPlan::build(&source_ports, &sink_ports).unwrap();
        assert_eq!(plan.pairs.len(), 2);
        // FL pairs with FL even though FR was emitted first, and the
        // monitor tap (port 33) never shows up.
        assert_eq!(plan.pairs[0].source_port, 32);
        assert_eq!(plan.pairs[0].sink_port, 43);
        assert_eq!(plan.pairs[0].source_channel, "FL");
        assert_eq!(plan.pairs[1].source_port, 31);
        assert_eq!(plan.pairs[1].sink_port, 44);
        assert_eq!(plan.pairs[1].sink_channel, "FR");
    }

    #[test]
    fn test_unknown_sink_name_resolves_to_nothing() {
        let snapshot = GraphSnapshot::from_listings(NODE_DUMP, PORT_DUMP);
        assert!(snapshot.find_node(&NodeSelector::sink_named("NoSuchSink")).is_none());
    }

    #[test]
    fn test_source_listing_for_diagnostics() {
        let snapshot = GraphSnapshot::from_listings(NODE_DUMP, PORT_DUMP);
        let sources = snapshot.node_names_of_class(&MediaClass::AudioSource);
        assert_eq!(sources, vec!["alsa_input.platform-soc_sound.stereo-fallback"]);
    }

    #[test]
    fn test_empty_dumps_yield_empty_snapshot() {
        let snapshot = GraphSnapshot::from_listings("", "");
        assert!(snapshot.nodes.is_empty());
        assert!(snapshot.ports.is_empty());
    }
}
