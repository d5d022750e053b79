use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::maze::{Direction, Grid};

/// Search-frontier entry. Ordered by f-score with the insertion counter as a
/// deterministic tie-breaker: among equal f-scores the node inserted first
/// expands first, so ordering never falls back to comparing coordinates.
struct FrontierNode {
    f_score: u32,
    counter: u64,
    position: (u16, u16),
    path: String,
}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierNode {}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.f_score, self.counter).cmp(&(other.f_score, other.counter))
    }
}

fn manhattan_distance(from: (u16, u16), to: (u16, u16)) -> u32 {
    from.0.abs_diff(to.0) as u32 + from.1.abs_diff(to.1) as u32
}

/// Find a shortest path from `entry` to `exit` with A*.
///
/// Returns the walk as a string of `N`/`E`/`S`/`W` tokens, one per hop.
/// Expansion only crosses open walls. The Manhattan heuristic is admissible
/// and consistent on a unit-cost grid, so the first pop of the exit node is
/// optimal. An unreachable exit (or an empty grid) yields an empty string,
/// never an error.
pub fn solve_astar(grid: &Grid, entry: (u16, u16), exit: (u16, u16)) -> String {
    if grid.is_empty() {
        return String::new();
    }

    let mut counter: u64 = 0;
    let mut open_set: BinaryHeap<Reverse<FrontierNode>> = BinaryHeap::new();
    open_set.push(Reverse(FrontierNode {
        f_score: manhattan_distance(entry, exit),
        counter,
        position: entry,
        path: String::new(),
    }));

    // Best known step count per coordinate.
    let mut g_score: HashMap<(u16, u16), u32> = HashMap::from([(entry, 0)]);
    let mut closed_set: HashSet<(u16, u16)> = HashSet::new();

    while let Some(Reverse(current)) = open_set.pop() {
        if current.position == exit {
            return current.path;
        }
        if !closed_set.insert(current.position) {
            continue;
        }

        let current_g = g_score.get(&current.position).copied().unwrap_or(0);
        let tentative_g = current_g + 1;

        for direction in Direction::ALL {
            if grid[current.position].has_wall(direction) {
                continue;
            }
            let Some(neighbor) = grid.neighbor_toward(current.position, direction) else {
                continue;
            };
            if closed_set.contains(&neighbor) {
                continue;
            }
            let known = g_score.get(&neighbor).copied();
            if known.is_none_or(|g| tentative_g < g) {
                g_score.insert(neighbor, tentative_g);
                counter += 1;
                let mut path = current.path.clone();
                path.push(direction.token());
                open_set.push(Reverse(FrontierNode {
                    f_score: tentative_g + manhattan_distance(neighbor, exit),
                    counter,
                    position: neighbor,
                    path,
                }));
            }
        }
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, VecDeque};

    use super::*;
    use crate::generators::{generate_dfs, generate_wilson, get_rng, test_support};
    use crate::maze::NoopSink;

    /// Unweighted shortest-path distance over open walls, or None when
    /// disconnected. Reference implementation for checking A* optimality.
    fn bfs_distance(grid: &Grid, entry: (u16, u16), exit: (u16, u16)) -> Option<u32> {
        let mut distances = HashMap::from([(entry, 0)]);
        let mut queue = VecDeque::from([entry]);
        while let Some(coord) = queue.pop_front() {
            if coord == exit {
                return distances.get(&coord).copied();
            }
            let next = distances[&coord] + 1;
            for direction in Direction::ALL {
                if grid[coord].has_wall(direction) {
                    continue;
                }
                if let Some(neighbor) = grid.neighbor_toward(coord, direction) {
                    if !distances.contains_key(&neighbor) {
                        distances.insert(neighbor, next);
                        queue.push_back(neighbor);
                    }
                }
            }
        }
        None
    }

    /// Walk the path tokens from entry, checking every hop crosses an open
    /// wall, and return the end position.
    fn walk(grid: &Grid, entry: (u16, u16), path: &str) -> (u16, u16) {
        let mut position = entry;
        for token in path.chars() {
            let direction = match token {
                'N' => Direction::North,
                'E' => Direction::East,
                'S' => Direction::South,
                'W' => Direction::West,
                other => panic!("unexpected path token {other:?}"),
            };
            assert!(!grid[position].has_wall(direction), "walked through a wall");
            position = grid
                .neighbor_toward(position, direction)
                .expect("walked out of bounds");
        }
        position
    }

    #[test]
    fn test_astar_matches_bfs_distance_on_dfs_maze() {
        let config = test_support::config(15, 11);
        let mut rng = get_rng(Some(42));
        let (grid, _) = generate_dfs(&config, &mut rng, &mut NoopSink);

        let path = solve_astar(&grid, (0, 0), (14, 10));
        assert!(!path.is_empty());
        assert_eq!(walk(&grid, (0, 0), &path), (14, 10));
        assert_eq!(path.len() as u32, bfs_distance(&grid, (0, 0), (14, 10)).unwrap());
    }

    #[test]
    fn test_astar_matches_bfs_distance_on_flawed_maze() {
        use crate::flaw::flaw_maze;

        let config = test_support::config(15, 11);
        let mut rng = get_rng(Some(17));
        let (mut grid, _) = generate_wilson(&config, &mut rng, &mut NoopSink);
        flaw_maze(&mut grid, &mut rng, &mut NoopSink);

        let path = solve_astar(&grid, (0, 0), (14, 10));
        assert_eq!(walk(&grid, (0, 0), &path), (14, 10));
        assert_eq!(path.len() as u32, bfs_distance(&grid, (0, 0), (14, 10)).unwrap());
    }

    #[test]
    fn test_astar_entry_equals_exit() {
        let config = test_support::config(5, 5);
        let mut rng = get_rng(Some(1));
        let (grid, _) = generate_dfs(&config, &mut rng, &mut NoopSink);
        assert_eq!(solve_astar(&grid, (2, 2), (2, 2)), "");
    }

    #[test]
    fn test_astar_disconnected_returns_empty() {
        // A fully walled grid has no open walls at all.
        let (grid, _) = Grid::generate_full(4, 4);
        assert_eq!(solve_astar(&grid, (0, 0), (3, 3)), "");
        assert_eq!(bfs_distance(&grid, (0, 0), (3, 3)), None);
    }

    #[test]
    fn test_astar_simple_corridor() {
        let (mut grid, _) = Grid::generate_full(3, 1);
        grid.open_wall_between((0, 0), (1, 0));
        grid.open_wall_between((1, 0), (2, 0));
        assert_eq!(solve_astar(&grid, (0, 0), (2, 0)), "EE");
        assert_eq!(solve_astar(&grid, (2, 0), (0, 0)), "WW");
    }

    #[test]
    fn test_astar_masked_exit_is_unreachable() {
        let config = test_support::config(15, 11);
        let mut rng = get_rng(Some(5));
        let (grid, outcome) = generate_dfs(&config, &mut rng, &mut NoopSink);
        let &masked = outcome
            .positions()
            .iter()
            .next()
            .expect("15x11 fits the pattern");
        assert_eq!(solve_astar(&grid, (0, 0), masked), "");
    }
}
