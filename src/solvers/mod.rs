mod astar;

pub use astar::solve_astar;

use crate::maze::{Direction, Grid};

/// Replay a solver path string into the sequence of coordinates it visits,
/// starting at `entry` (inclusive). Returns `None` on an unknown token or a
/// hop that leaves the grid; it does not check walls.
pub fn replay_path(grid: &Grid, entry: (u16, u16), path: &str) -> Option<Vec<(u16, u16)>> {
    let mut positions = vec![entry];
    let mut current = entry;
    for token in path.chars() {
        let direction = match token.to_ascii_uppercase() {
            'N' => Direction::North,
            'E' => Direction::East,
            'S' => Direction::South,
            'W' => Direction::West,
            _ => return None,
        };
        current = grid.neighbor_toward(current, direction)?;
        positions.push(current);
    }
    Some(positions)
}
