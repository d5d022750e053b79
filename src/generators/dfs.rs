use rand::{Rng, rngs::StdRng};

use crate::config::MazeConfig;
use crate::maze::{CellState, Grid, PatternOutcome, StepSink};

/// Generate a perfect maze with the depth-first backtracker.
///
/// Carves from the configured entry cell: repeatedly pick a random unvisited
/// neighbor of the cell on top of the stack, open the wall toward it and
/// descend; backtrack when a cell has no unvisited neighbor left.
pub fn generate_dfs(
    config: &MazeConfig,
    rng: &mut StdRng,
    sink: &mut dyn StepSink,
) -> (Grid, PatternOutcome) {
    let (mut grid, outcome) = Grid::generate_full(config.width, config.height);
    if grid.is_empty() {
        return (grid, outcome);
    }

    let entry = config.entry;
    grid[entry].state = CellState::Visited;
    let mut stack = vec![entry];
    sink.on_step(&grid);

    while let Some(&current) = stack.last() {
        // Masked cells are pre-marked Visited, so they are never carved into.
        let neighbors = grid
            .neighbors(current)
            .filter(|&c| grid[c].state != CellState::Visited)
            .collect::<Vec<_>>();

        match neighbors.len() {
            0 => {
                stack.pop();
            }
            n => {
                let next = neighbors[rng.random_range(0..n)];
                grid.open_wall_between(current, next);
                grid[next].state = CellState::Visited;
                stack.push(next);
                sink.on_step(&grid);
            }
        }
    }

    (grid, outcome)
}
