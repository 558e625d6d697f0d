//! Catalogue of third-party charts the installer can import.

use crate::helm::Chart;

/// Helm repository publishing the Cilium project's charts.
pub const CILIUM_REPOSITORY: &str = "https://helm.cilium.io";

/// Pinned Tetragon chart version.
pub const TETRAGON_VERSION: &str = "0.8.0";

/// Tetragon, an eBPF-based security observability and runtime enforcement agent.
pub fn tetragon() -> Chart {
    Chart::new("tetragon", CILIUM_REPOSITORY, TETRAGON_VERSION)
}
