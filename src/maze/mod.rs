pub mod cell;
pub mod pattern;

use std::collections::HashSet;

pub use cell::{Cell, CellState, Direction};
pub use pattern::PatternOutcome;

/// Observer invoked after each grid mutation during generation or flaw
/// injection. Hooks run synchronously on the caller's thread and must treat
/// the grid as a read-only snapshot; any pacing delay belongs to the sink.
pub trait StepSink {
    fn on_step(&mut self, grid: &Grid);
}

/// Sink that ignores every step, for callers that do not animate.
pub struct NoopSink;

impl StepSink for NoopSink {
    fn on_step(&mut self, _grid: &Grid) {}
}

/// A rectangular maze grid: a flat row-major arena of cells addressed by
/// `(x, y)` coordinates, plus the set of pattern-masked positions.
///
/// Dimensions are fixed at construction. Exactly one generator pass mutates
/// the grid; afterwards only the flaw injector may open further walls.
pub struct Grid {
    data: Box<[Cell]>,
    width: u16,
    height: u16,
    masked: HashSet<(u16, u16)>,
}

impl Grid {
    /// Build a fully walled grid and place the fixed pattern.
    ///
    /// Every cell starts `Unvisited` with all four walls closed. Pattern
    /// cells are marked `Visited` so generators skip them, but their walls
    /// are kept closed: they stay fully enclosed islands.
    pub fn generate_full(width: u16, height: u16) -> (Grid, PatternOutcome) {
        let data = vec![Cell::CLOSED; width as usize * height as usize].into_boxed_slice();
        let outcome = pattern::glyph_positions(width, height);
        let masked = outcome.positions();
        let mut grid = Grid {
            data,
            width,
            height,
            masked,
        };
        for &coord in grid.masked.clone().iter() {
            grid[coord].state = CellState::Visited;
        }
        (grid, outcome)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// Whether the coordinate belongs to the fixed pattern.
    pub fn is_masked(&self, coord: (u16, u16)) -> bool {
        self.masked.contains(&coord)
    }

    pub fn masked_count(&self) -> usize {
        self.masked.len()
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }

    /// The adjacent coordinate in the given direction, if it is in bounds.
    pub fn neighbor_toward(&self, coord: (u16, u16), direction: Direction) -> Option<(u16, u16)> {
        let (x, y) = coord;
        match direction {
            Direction::North => (y > 0).then(|| (x, y - 1)),
            Direction::East => (x + 1 < self.width).then_some((x + 1, y)),
            Direction::South => (y + 1 < self.height).then_some((x, y + 1)),
            Direction::West => (x > 0).then(|| (x - 1, y)),
        }
    }

    /// In-bounds neighbors of a cell in the four cardinal directions.
    pub fn neighbors(&self, coord: (u16, u16)) -> impl Iterator<Item = (u16, u16)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.neighbor_toward(coord, direction))
    }

    /// In-bounds neighbors that are not pattern-masked.
    pub fn unmasked_neighbors(&self, coord: (u16, u16)) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.neighbors(coord).filter(|&c| !self.is_masked(c))
    }

    /// Open the wall pair between two adjacent cells.
    ///
    /// Walls are symmetric: both sides are always opened together so that
    /// adjacent cells never disagree about a shared wall.
    ///
    /// # Panics
    /// If the two coordinates are not adjacent or not in bounds.
    pub fn open_wall_between(&mut self, a: (u16, u16), b: (u16, u16)) {
        let direction = Direction::between(a, b)
            .unwrap_or_else(|| panic!("cells {:?} and {:?} are not adjacent", a, b));
        self[a].open_wall(direction);
        self[b].open_wall(direction.opposite());
    }

    /// Whether the wall between a cell and its neighbor in `direction` is
    /// closed on both sides. `false` when there is no neighbor that way.
    pub fn wall_closed_toward(&self, coord: (u16, u16), direction: Direction) -> bool {
        match self.neighbor_toward(coord, direction) {
            Some(neighbor) => {
                self[coord].has_wall(direction) && self[neighbor].has_wall(direction.opposite())
            }
            None => false,
        }
    }

    /// Count of open edges between non-masked adjacent cells. A perfect maze
    /// over `n` connected cells has exactly `n - 1` of them.
    pub fn open_edge_count(&self) -> usize {
        let mut edges = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_masked((x, y)) {
                    continue;
                }
                for direction in [Direction::East, Direction::South] {
                    if let Some(neighbor) = self.neighbor_toward((x, y), direction) {
                        if !self.is_masked(neighbor) && !self[(x, y)].has_wall(direction) {
                            edges += 1;
                        }
                    }
                }
            }
        }
        edges
    }

    /// Hexadecimal dump of the grid: one uppercase digit per cell, one row
    /// per line (N=1, E=2, S=4, W=8).
    pub fn to_hex(&self) -> String {
        let mut lines = Vec::with_capacity(self.height as usize);
        for y in 0..self.height {
            lines.push(
                (0..self.width)
                    .map(|x| self[(x, y)].hex_digit())
                    .collect::<String>(),
            );
        }
        lines.join("\n")
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Cell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<(u16, u16)> for Grid {
    fn index_mut(&mut self, index: (u16, u16)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}
