use rand::{Rng, rngs::StdRng};

use crate::config::MazeConfig;
use crate::maze::{CellState, Grid, PatternOutcome, StepSink};

/// All unvisited cell coordinates, in row-major order so random picks depend
/// only on the RNG stream.
fn unvisited_cells(grid: &Grid) -> Vec<(u16, u16)> {
    let mut cells = Vec::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid[(x, y)].state == CellState::Unvisited {
                cells.push((x, y));
            }
        }
    }
    cells
}

/// Generate a perfect maze with Wilson's loop-erased random walk.
///
/// One random cell seeds the tree. Each round walks randomly from an
/// unvisited cell, erasing any loop by truncating the recorded path back to
/// the first repeated cell, until the walk hits the tree; the whole path is
/// then carved and absorbed. The result is uniform over all spanning trees,
/// unlike the DFS and Kruskal biases.
pub fn generate_wilson(
    config: &MazeConfig,
    rng: &mut StdRng,
    sink: &mut dyn StepSink,
) -> (Grid, PatternOutcome) {
    let (mut grid, outcome) = Grid::generate_full(config.width, config.height);
    if grid.is_empty() {
        return (grid, outcome);
    }

    let unvisited = unvisited_cells(&grid);
    let seed_cell = unvisited[rng.random_range(0..unvisited.len())];
    grid[seed_cell].state = CellState::InMaze;
    sink.on_step(&grid);

    loop {
        let unvisited = unvisited_cells(&grid);
        if unvisited.is_empty() {
            break;
        }

        let mut current = unvisited[rng.random_range(0..unvisited.len())];
        let mut path = vec![current];

        while grid[current].state != CellState::InMaze {
            let neighbors = grid.unmasked_neighbors(current).collect::<Vec<_>>();
            if neighbors.is_empty() {
                // Dead end: the cell is sealed off by the pattern. Abandon
                // the walk without connecting anything.
                break;
            }
            let next = neighbors[rng.random_range(0..neighbors.len())];
            match path.iter().position(|&c| c == next) {
                // Loop erasure: drop everything walked since the first visit.
                Some(index) => path.truncate(index + 1),
                None => path.push(next),
            }
            current = next;
        }

        if grid[current].state == CellState::InMaze {
            for pair in path.windows(2) {
                grid.open_wall_between(pair[0], pair[1]);
                sink.on_step(&grid);
            }
            for coord in path {
                grid[coord].state = CellState::InMaze;
            }
        }
    }

    (grid, outcome)
}
