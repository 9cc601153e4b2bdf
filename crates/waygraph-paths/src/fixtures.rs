//! Test graphs shared across the search test modules.
//!
//! The campus network is a real building-navigation data set: 36 named
//! waypoints with per-direction edge weights. Most links are declared
//! symmetrically by the data, but not all (`"17" -> "35"` is 16 while
//! `"35" -> "17"` is 160), so every edge is inserted exactly as listed.

use waygraph_core::{Cost, WayGraph};

#[rustfmt::skip]
const CAMPUS_EDGES: &[(&str, &str, Cost)] = &[
    ("20", "14", 100), ("20", "13", 100), ("20", "21", 70), ("20", "24", 180),
    ("14", "20", 100), ("14", "13", 250), ("14", "1", 350), ("14", "19", 350), ("14", "23", 50), ("14", "29", 170),
    ("13", "14", 250), ("13", "20", 100), ("13", "21", 170), ("13", "30", 70), ("13", "12", 180), ("13", "15", 400), ("13", "19", 350),
    ("12", "13", 180), ("12", "15", 350), ("12", "19", 140), ("12", "11", 240),
    ("15", "12", 350), ("15", "13", 400), ("15", "34", 70),
    ("21", "20", 70), ("21", "13", 170), ("21", "30", 210),
    ("30", "13", 70), ("30", "21", 210), ("30", "35", 80),
    ("34", "15", 70), ("34", "17", 110),
    ("35", "30", 80), ("35", "17", 160),
    ("17", "34", 110), ("17", "35", 16), ("17", "32", 400),
    ("32", "17", 400),
    ("19", "12", 140), ("19", "9A", 70), ("19", "1", 250), ("19", "14", 350), ("19", "13", 350),
    ("11", "10", 100), ("11", "8A", 250), ("11", "12", 240),
    ("10", "7", 190), ("10", "11", 100),
    ("7", "10", 190),
    ("8A", "8B", 90), ("8A", "9A", 10), ("8A", "11", 250),
    ("9A", "1", 300), ("9A", "19", 70), ("9A", "8A", 10),
    ("8B", "8C", 270), ("8B", "8A", 90),
    ("1", "9B", 140), ("1", "23", 350), ("1", "14", 350), ("1", "19", 250), ("1", "9A", 300),
    ("24", "20", 180), ("24", "29", 40),
    ("29", "24", 40), ("29", "14", 170), ("29", "23", 110), ("29", "27", 140),
    ("9B", "18", 160), ("9B", "1", 140),
    ("8C", "6", 100), ("8C", "8B", 270),
    ("18", "9B", 160), ("18", "2", 210), ("18", "3", 230),
    ("6", "8C", 100), ("6", "29A", 0), ("6", "5A", 210),
    ("5A", "6", 210), ("5A", "2", 140),
    ("2", "5A", 140), ("2", "4", 10), ("2", "18", 210),
    ("29A", "6", 0), ("29A", "5B", 100),
    ("3", "26", 60), ("3", "28", 200), ("3", "18", 230),
    ("23", "27", 130), ("23", "1", 350), ("23", "14", 50), ("23", "29", 110),
    ("5B", "29A", 100), ("5B", "4", 170),
    ("4", "5B", 170), ("4", "2", 10), ("4", "26", 100),
    ("26", "4", 100), ("26", "25", 30), ("26", "28", 100), ("26", "3", 60),
    ("28", "26", 100), ("28", "3", 200), ("28", "27", 40),
    ("27", "28", 40), ("27", "23", 130), ("27", "29", 140),
    ("25", "26", 30),
];

/// Waypoints of the west wing, a 10-node slice of the campus network.
const WEST_WING: &[&str] = &["20", "13", "12", "15", "21", "30", "34", "35", "17", "32"];

/// The full 36-waypoint campus network.
pub(crate) fn campus() -> WayGraph<&'static str> {
    CAMPUS_EDGES.iter().copied().collect()
}

/// The campus restricted to the west wing: only edges with both endpoints
/// in [`WEST_WING`] survive.
pub(crate) fn west_wing() -> WayGraph<&'static str> {
    CAMPUS_EDGES
        .iter()
        .copied()
        .filter(|(from, to, _)| WEST_WING.contains(from) && WEST_WING.contains(to))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campus_has_all_waypoints() {
        let g = campus();
        assert_eq!(g.node_count(), 36);
        // The one deliberately asymmetric link in the data set.
        assert_eq!(g.edge(&"17", &"35"), Some(16));
        assert_eq!(g.edge(&"35", &"17"), Some(160));
    }

    #[test]
    fn west_wing_is_a_strict_slice() {
        let g = west_wing();
        assert_eq!(g.node_count(), WEST_WING.len());
        assert!(g.nodes().all(|n| WEST_WING.contains(n)));
        // Edges leaving the wing are cut.
        assert_eq!(g.edge(&"20", &"14"), None);
        assert_eq!(g.edge(&"20", &"13"), Some(100));
    }
}
