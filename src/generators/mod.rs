use rand::{SeedableRng, rngs::StdRng};

mod dfs;
mod disjoint_set;
mod kruskal;
mod wilson;

use crate::config::MazeConfig;
use crate::maze::{Grid, PatternOutcome, StepSink};

pub use dfs::generate_dfs;
pub use disjoint_set::DisjointSet;
pub use kruskal::generate_kruskal;
pub use wilson::generate_wilson;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Maze carving algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dfs,
    Kruskal,
    Wilson,
}

impl Algorithm {
    /// Parse a config-file algorithm name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Algorithm> {
        match name.trim().to_ascii_uppercase().as_str() {
            "DFS" => Some(Algorithm::Dfs),
            "KRUSKAL" => Some(Algorithm::Kruskal),
            "WILSON" => Some(Algorithm::Wilson),
            _ => None,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Dfs => write!(f, "Randomized Depth-First Search (DFS)"),
            Algorithm::Kruskal => write!(f, "Randomized Kruskal's Algorithm"),
            Algorithm::Wilson => write!(f, "Wilson's Loop-Erased Random Walk"),
        }
    }
}

/// Generate a perfect maze with the algorithm selected in the configuration.
///
/// Returns the carved grid together with the pattern placement outcome, so
/// the caller can notify about a too-small grid without the mask keeping any
/// hidden global state.
pub fn generate_maze(
    config: &MazeConfig,
    rng: &mut StdRng,
    sink: &mut dyn StepSink,
) -> (Grid, PatternOutcome) {
    match config.algorithm {
        Algorithm::Dfs => generate_dfs(config, rng, sink),
        Algorithm::Kruskal => generate_kruskal(config, rng, sink),
        Algorithm::Wilson => generate_wilson(config, rng, sink),
    }
}
