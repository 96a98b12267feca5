// ─────────────────────────────────────────────────────────────────────
// Jamming Kernel — Data Layout
// ─────────────────────────────────────────────────────────────────────
//! On-disk layout of generator output:
//!
//! ```text
//! {root}/data/{network_prefix}/Adjacency.csv
//! {root}/data/{network_prefix}/FullDistance.csv
//! {root}/data/{network_prefix}/totPacket/{dynamics_file}.csv
//! {root}/data/{network_prefix}/routerQueue/{dynamics_file}.csv
//! {root}/data/Network/{network_name}
//! ```
//!
//! The directory carries the network seed, the dynamics file the
//! generator's own seed (`dynamics_seed`), so a seeded network with an
//! unseeded generator writes `N..-0/totPacket/S..P..I...csv`.
//! Paths are built only; nothing here touches the filesystem.

use std::path::{Path, PathBuf};

use jamming_types::{AnalysisParams, RunParams};

use crate::names::network_name;
use crate::prefix::{dynamics_prefix_for_seed, network_prefix};

const DATA_DIR: &str = "data";
const NETWORK_ARCHIVE_DIR: &str = "Network";
const ADJACENCY_FILE: &str = "Adjacency.csv";
const FULL_DISTANCE_FILE: &str = "FullDistance.csv";
const TOT_PACKET_DIR: &str = "totPacket";
const ROUTER_QUEUE_DIR: &str = "routerQueue";

fn dynamics_file(param: &AnalysisParams) -> String {
    format!("{}.csv", dynamics_prefix_for_seed(param, param.dynamics_seed))
}

/// Path builder rooted at a study directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    root: PathBuf,
}

impl Default for DataLayout {
    fn default() -> Self {
        Self::new(".")
    }
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one network realisation and its dynamics.
    pub fn network_dir(&self, param: &AnalysisParams) -> PathBuf {
        self.root.join(DATA_DIR).join(network_prefix(param))
    }

    pub fn adjacency_path(&self, param: &AnalysisParams) -> PathBuf {
        self.network_dir(param).join(ADJACENCY_FILE)
    }

    pub fn full_distance_path(&self, param: &AnalysisParams) -> PathBuf {
        self.network_dir(param).join(FULL_DISTANCE_FILE)
    }

    /// Total-packet history of one dynamics run.
    pub fn tot_packet_path(&self, param: &AnalysisParams) -> PathBuf {
        self.network_dir(param)
            .join(TOT_PACKET_DIR)
            .join(dynamics_file(param))
    }

    /// Per-router queue history of one dynamics run.
    pub fn router_queue_path(&self, param: &AnalysisParams) -> PathBuf {
        self.network_dir(param)
            .join(ROUTER_QUEUE_DIR)
            .join(dynamics_file(param))
    }

    /// Archived network named by its run parameters.
    pub fn network_archive(&self, param: &RunParams) -> PathBuf {
        self.root
            .join(DATA_DIR)
            .join(NETWORK_ARCHIVE_DIR)
            .join(network_name(param))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_dir() {
        let layout = DataLayout::new("/study");
        assert_eq!(
            layout.network_dir(&AnalysisParams::default()),
            PathBuf::from("/study/data/N10000L25000G2.2-0")
        );
    }

    #[test]
    fn test_tot_packet_path() {
        let layout = DataLayout::new("/study");
        assert_eq!(
            layout.tot_packet_path(&AnalysisParams::default()),
            PathBuf::from("/study/data/N10000L25000G2.2-0/totPacket/S0.85P10I10000-0.csv")
        );
    }

    #[test]
    fn test_seed_independent_paths() {
        let layout = DataLayout::default();
        let p = AnalysisParams::default()
            .with_network_seed(-1)
            .with_dynamics_seed(-1);
        assert_eq!(
            layout.router_queue_path(&p),
            PathBuf::from("./data/N10000L25000G2.2/routerQueue/S0.85P10I10000.csv")
        );
    }

    #[test]
    fn test_unseeded_generator_on_seeded_network() {
        let layout = DataLayout::new("r");
        let p = AnalysisParams::default().with_dynamics_seed(-1);
        assert_eq!(
            layout.tot_packet_path(&p),
            PathBuf::from("r/data/N10000L25000G2.2-0/totPacket/S0.85P10I10000.csv")
        );
        assert_eq!(
            layout.router_queue_path(&p),
            PathBuf::from("r/data/N10000L25000G2.2-0/routerQueue/S0.85P10I10000.csv")
        );
    }

    #[test]
    fn test_dynamics_file_ignores_network_seed() {
        let layout = DataLayout::new("r");
        let p = AnalysisParams::default()
            .with_network_seed(-1)
            .with_dynamics_seed(4);
        assert_eq!(
            layout.tot_packet_path(&p),
            PathBuf::from("r/data/N10000L25000G2.2/totPacket/S0.85P10I10000-4.csv")
        );
    }

    #[test]
    fn test_network_files() {
        let layout = DataLayout::new("out");
        let p = AnalysisParams::default();
        assert!(layout.adjacency_path(&p).ends_with("Adjacency.csv"));
        assert!(layout.full_distance_path(&p).ends_with("FullDistance.csv"));
    }

    #[test]
    fn test_network_archive() {
        let layout = DataLayout::new("out");
        assert_eq!(
            layout.network_archive(&RunParams::default()),
            PathBuf::from("out/data/Network/N10000L200000G2.2-0")
        );
    }
}
