//! Port resolution for a matched node.

use tracing::debug;

use crate::node::{Port, PortDirection};

/// Extract the linkable ports of one node, in canonical order.
///
/// A port is linkable when it belongs to the node, has exactly the
/// requested direction, is not a monitor tap, and carries a non-empty
/// channel label. Missing any one condition excludes it outright.
///
/// The canonical order is plain lexical order of the channel label. That
/// places FL before FR; it does not generalize to numeric labels ("10"
/// sorts before "2"), and downstream pairing relies only on this relative
/// order, so it must not be changed to a numeric sort.
#[must_use]
pub fn resolve_ports(ports: &[Port], node_id: u32, direction: PortDirection) -> Vec<Port> {
    let mut matched: Vec<Port> = ports
        .iter()
        .filter(|p| {
            p.node_id == node_id
                && p.direction == direction
                && !p.is_monitor
                && p.channel.as_ref().is_some_and(|c| !c.is_empty())
        })
        .cloned()
        .collect();

    matched.sort_by(|a, b| a.channel.cmp(&b.channel));

    debug!(
        node_id,
        direction = direction.as_str(),
        count = matched.len(),
        "Resolved linkable ports"
    );
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port(id: u32, node_id: u32, direction: PortDirection, channel: Option<&str>) -> Port {
        Port { id, node_id, direction, is_monitor: false, channel: channel.map(String::from) }
    }

    #[test]
    fn test_filters_by_node_and_direction() {
        let ports = vec![
            port(1, 30, PortDirection::Output, Some("FL")),
            port(2, 30, PortDirection::Input, Some("FL")),
            port(3, 31, PortDirection::Output, Some("FL")),
        ];

        let resolved = resolve_ports(&ports, 30, PortDirection::Output);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, 1);
    }

    #[test]
    fn test_monitor_ports_are_always_excluded() {
        let mut monitor = port(1, 30, PortDirection::Output, Some("FL"));
        monitor.is_monitor = true;
        let ports = vec![monitor, port(2, 30, PortDirection::Output, Some("FR"))];

        let resolved = resolve_ports(&ports, 30, PortDirection::Output);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, 2);
    }

    #[test]
    fn test_ports_without_channel_are_excluded() {
        let ports = vec![
            port(1, 30, PortDirection::Output, None),
            port(2, 30, PortDirection::Output, Some("")),
            port(3, 30, PortDirection::Output, Some("MONO")),
        ];

        let resolved = resolve_ports(&ports, 30, PortDirection::Output);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, 3);
    }

    #[test]
    fn test_channel_order_is_lexical() {
        let ports = vec![
            port(1, 30, PortDirection::Output, Some("FR")),
            port(2, 30, PortDirection::Output, Some("FL")),
        ];

        let resolved = resolve_ports(&ports, 30, PortDirection::Output);
        let channels: Vec<&str> = resolved
            .iter()
            .map(|p| p.channel.as_deref().unwrap())
            .collect();
        assert_eq!(channels, vec!["FL", "FR"]);
    }

    #[test]
    fn test_numeric_labels_still_sort_lexically() {
        let ports = vec![
            port(1, 30, PortDirection::Output, Some("2")),
            port(2, 30, PortDirection::Output, Some("10")),
            port(3, 30, PortDirection::Output, Some("1")),
        ];

        let resolved = resolve_ports(&ports, 30, PortDirection::Output);
        let channels: Vec<&str> = resolved
            .iter()
            .map(|p| p.channel.as_deref().unwrap())
            .collect();
        // Lexical, not numeric - pinned on purpose.
        assert_eq!(channels, vec!["1", "10", "2"]);
    }
}
