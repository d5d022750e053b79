use rand::{rngs::StdRng, seq::SliceRandom};

use crate::config::MazeConfig;
use crate::generators::DisjointSet;
use crate::maze::{CellState, Direction, Grid, PatternOutcome, StepSink};

/// Candidate wall between two adjacent non-masked cells.
#[derive(Clone, Copy)]
struct Edge {
    cell1: (u16, u16),
    cell2: (u16, u16),
}

/// South and east edges whose endpoints are both unmasked. Each interior wall
/// shows up exactly once.
fn collect_edges(grid: &Grid) -> Vec<Edge> {
    let mut edges = Vec::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let cell = (x, y);
            if grid[cell].state == CellState::Visited {
                continue;
            }
            for direction in [Direction::South, Direction::East] {
                if let Some(neighbor) = grid.neighbor_toward(cell, direction) {
                    if grid[neighbor].state != CellState::Visited {
                        edges.push(Edge {
                            cell1: cell,
                            cell2: neighbor,
                        });
                    }
                }
            }
        }
    }
    edges
}

/// Generate a perfect maze with randomized Kruskal.
///
/// Shuffles all candidate edges, then opens exactly the walls whose endpoints
/// still belong to different disjoint sets. Edges inside one set are skipped:
/// opening them would close a cycle.
pub fn generate_kruskal(
    config: &MazeConfig,
    rng: &mut StdRng,
    sink: &mut dyn StepSink,
) -> (Grid, PatternOutcome) {
    let (mut grid, outcome) = Grid::generate_full(config.width, config.height);
    if grid.is_empty() {
        return (grid, outcome);
    }

    let mut edges = collect_edges(&grid);
    edges.shuffle(rng);

    // Index the disjoint set by flat cell index; masked cells simply never
    // take part in a union.
    let width = grid.width() as usize;
    let mut sets = DisjointSet::new(width * grid.height() as usize);
    let flat = |(x, y): (u16, u16)| y as usize * width + x as usize;

    sink.on_step(&grid);

    for edge in edges {
        if sets.union(flat(edge.cell1), flat(edge.cell2)) {
            grid.open_wall_between(edge.cell1, edge.cell2);
            grid[edge.cell1].state = CellState::Visited;
            grid[edge.cell2].state = CellState::Visited;
            sink.on_step(&grid);
        }
    }

    (grid, outcome)
}
