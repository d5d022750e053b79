use std::fmt;

/// Cardinal direction of a wall or a move between two adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Bit weight of the wall in the hexadecimal cell encoding (N=1, E=2, S=4, W=8).
    pub fn mask(self) -> u8 {
        match self {
            Direction::North => 1,
            Direction::East => 2,
            Direction::South => 4,
            Direction::West => 8,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Single-character token used in solver path strings.
    pub fn token(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    /// Direction from `from` toward `to`, if the two coordinates are adjacent.
    pub fn between(from: (u16, u16), to: (u16, u16)) -> Option<Direction> {
        let (x1, y1) = from;
        let (x2, y2) = to;
        if x1 == x2 && y2 + 1 == y1 {
            Some(Direction::North)
        } else if y1 == y2 && x2 == x1 + 1 {
            Some(Direction::East)
        } else if x1 == x2 && y2 == y1 + 1 {
            Some(Direction::South)
        } else if y1 == y2 && x2 + 1 == x1 {
            Some(Direction::West)
        } else {
            None
        }
    }
}

/// State markers used during maze generation and solving.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    #[default]
    Unvisited,
    /// Carved by a generator, or masked out by the fixed pattern.
    Visited,
    /// Candidate for carving (frontier-based generators).
    Frontier,
    /// Part of the growing tree in Wilson's algorithm.
    InMaze,
    /// Part of the solved route.
    Path,
}

/// A single maze cell: a state tag plus four wall bits.
///
/// Wall bits are stored in the hexadecimal encoding order (N=1, E=2, S=4, W=8),
/// so a fully walled cell encodes as `F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub state: CellState,
    walls: u8,
}

impl Cell {
    /// A fully walled, unvisited cell.
    pub const CLOSED: Cell = Cell {
        state: CellState::Unvisited,
        walls: 0xF,
    };

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls & direction.mask() != 0
    }

    pub fn open_wall(&mut self, direction: Direction) {
        self.walls &= !direction.mask();
    }

    pub fn close_wall(&mut self, direction: Direction) {
        self.walls |= direction.mask();
    }

    /// Number of open sides.
    pub fn open_sides(&self) -> u32 {
        4 - (self.walls & 0xF).count_ones()
    }

    /// Uppercase hexadecimal digit encoding the four wall bits.
    pub fn hex_digit(&self) -> char {
        char::from_digit(self.walls as u32, 16)
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('F')
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::CLOSED
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex_digit())
    }
}
