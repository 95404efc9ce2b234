use serde::{Deserialize, Serialize};

/// Edge routing style requested from the rendering service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeRouting {
    /// Service-default curved routing.
    Curved,
    /// Straight segments only; the least demanding geometry for the router.
    Linear,
}

/// A named bundle of rendering-service layout settings.
///
/// Profiles trade visual fidelity for layout robustness. The cascade passes the
/// profile explicitly into every attempt; services backed by session-global
/// configuration must re-apply it before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutProfile {
    pub edge_routing: EdgeRouting,
    /// Let the host environment measure label sizes. Disabled in the robust
    /// profile: host measurement is the usual source of layout-pathing faults.
    pub host_measured_labels: bool,
    pub padding: f64,
    pub node_spacing: f64,
    pub rank_spacing: f64,
}

impl LayoutProfile {
    /// The default "pretty" profile used for first attempts.
    pub fn standard() -> Self {
        Self {
            edge_routing: EdgeRouting::Curved,
            host_measured_labels: true,
            padding: 15.0,
            node_spacing: 50.0,
            rank_spacing: 50.0,
        }
    }

    /// Conservative settings for retrying layout failures: straight edges,
    /// doubled spacing, no host-measured labels.
    pub fn robust() -> Self {
        Self {
            edge_routing: EdgeRouting::Linear,
            host_measured_labels: false,
            padding: 20.0,
            node_spacing: 80.0,
            rank_spacing: 80.0,
        }
    }
}

impl Default for LayoutProfile {
    fn default() -> Self {
        Self::standard()
    }
}
