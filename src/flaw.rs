use rand::{Rng, rngs::StdRng};

use crate::maze::{Direction, Grid, StepSink};

/// Upper bound on random attempts before giving up on the remaining budget.
const MAX_ITERATIONS: u32 = 1500;

/// Whether the wall of `cell` toward `direction` may be broken.
///
/// A wall is breakable only when the cell is unmasked, none of its neighbors
/// are masked, a neighbor exists that way, and both sides of the wall agree
/// it is closed.
fn wall_breakable_toward(grid: &Grid, cell: (u16, u16), direction: Direction) -> bool {
    if grid.is_masked(cell) {
        return false;
    }
    if grid.neighbors(cell).any(|c| grid.is_masked(c)) {
        return false;
    }
    grid.wall_closed_toward(cell, direction)
}

/// Poke extra openings into an already-perfect maze, creating cycles.
///
/// Removes up to `cells / 7` wall pairs, trying at most 1500 random
/// cell/direction picks. Running out of iterations is not an error: flawing
/// is best-effort and simply stops.
pub fn flaw_maze(grid: &mut Grid, rng: &mut StdRng, sink: &mut dyn StepSink) {
    if grid.is_empty() {
        return;
    }

    let mut walls_to_break = grid.width() as u32 * grid.height() as u32 / 7;
    let mut iterations_remaining = MAX_ITERATIONS;

    while walls_to_break > 0 && iterations_remaining > 0 {
        let cell = (
            rng.random_range(0..grid.width()),
            rng.random_range(0..grid.height()),
        );
        let direction = Direction::ALL[rng.random_range(0..4)];

        if wall_breakable_toward(grid, cell, direction) {
            // Checked above: the neighbor exists.
            if let Some(neighbor) = grid.neighbor_toward(cell, direction) {
                grid.open_wall_between(cell, neighbor);
                walls_to_break -= 1;
                sink.on_step(grid);
            }
        }
        iterations_remaining -= 1;
    }
    tracing::debug!(
        remaining_budget = walls_to_break,
        remaining_iterations = iterations_remaining,
        "flaw injection finished"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{generate_dfs, generate_kruskal, get_rng, test_support};
    use crate::maze::NoopSink;

    #[test]
    fn test_flaw_increases_open_edges() {
        let config = test_support::config(15, 11);
        let mut rng = get_rng(Some(42));
        let (mut grid, _) = generate_dfs(&config, &mut rng, &mut NoopSink);
        let perfect_edges = grid.open_edge_count();

        flaw_maze(&mut grid, &mut rng, &mut NoopSink);
        let flawed_edges = grid.open_edge_count();
        assert!(flawed_edges > perfect_edges);
        // Budget bound: floor(15 * 11 / 7) extra walls at most.
        assert!(flawed_edges - perfect_edges <= 15 * 11 / 7);
    }

    #[test]
    fn test_flaw_never_touches_masked_cells() {
        let config = test_support::config(21, 21);
        let mut rng = get_rng(Some(7));
        let (mut grid, outcome) = generate_kruskal(&config, &mut rng, &mut NoopSink);
        flaw_maze(&mut grid, &mut rng, &mut NoopSink);
        for coord in outcome.positions() {
            assert!(Direction::ALL.iter().all(|&d| grid[coord].has_wall(d)));
        }
    }

    #[test]
    fn test_flaw_keeps_wall_symmetry() {
        let config = test_support::config(15, 11);
        let mut rng = get_rng(Some(3));
        let (mut grid, _) = generate_dfs(&config, &mut rng, &mut NoopSink);
        flaw_maze(&mut grid, &mut rng, &mut NoopSink);

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                for direction in [Direction::East, Direction::South] {
                    if let Some(neighbor) = grid.neighbor_toward((x, y), direction) {
                        assert_eq!(
                            grid[(x, y)].has_wall(direction),
                            grid[neighbor].has_wall(direction.opposite()),
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_flaw_is_deterministic_under_seed() {
        let config = test_support::config(15, 11);
        let run = |seed| {
            let mut rng = get_rng(Some(seed));
            let (mut grid, _) = generate_dfs(&config, &mut rng, &mut NoopSink);
            flaw_maze(&mut grid, &mut rng, &mut NoopSink);
            grid.to_hex()
        };
        assert_eq!(run(4242), run(4242));
    }

    #[test]
    fn test_breakable_rejects_perimeter_and_masked() {
        let config = test_support::config(15, 11);
        let mut rng = get_rng(Some(1));
        let (grid, outcome) = generate_dfs(&config, &mut rng, &mut NoopSink);

        // No neighbor north of the top row.
        assert!(!wall_breakable_toward(&grid, (3, 0), Direction::North));
        // Masked cells and their neighbors are off limits.
        let &masked = outcome
            .positions()
            .iter()
            .next()
            .expect("15x11 fits the pattern");
        assert!(!wall_breakable_toward(&grid, masked, Direction::East));
    }
}
