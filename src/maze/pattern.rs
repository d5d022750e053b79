use std::collections::HashSet;

/// Fixed 7x5 bitmap of the decorative "42" glyph. Filled cells are excluded
/// from the spanning tree and stay fully walled.
const GLYPH: [[u8; 7]; 5] = [
    [1, 0, 0, 0, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 0, 1, 1, 1],
    [0, 0, 1, 0, 1, 0, 0],
    [0, 0, 1, 0, 1, 1, 1],
];

/// Smallest grid the glyph fits in, with a one-cell margin on every side.
pub const MIN_WIDTH: u16 = 9;
pub const MIN_HEIGHT: u16 = 7;

/// Outcome of placing the glyph on a grid of the given size.
///
/// `TooSmall` is not an error: generation proceeds without a pattern, and the
/// caller decides whether to notify anyone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternOutcome {
    Placed(HashSet<(u16, u16)>),
    TooSmall,
}

impl PatternOutcome {
    /// Positions covered by the pattern, empty when it did not fit.
    pub fn positions(&self) -> HashSet<(u16, u16)> {
        match self {
            PatternOutcome::Placed(positions) => positions.clone(),
            PatternOutcome::TooSmall => HashSet::new(),
        }
    }
}

/// Compute the coordinates covered by the glyph, centered in a grid of the
/// given dimensions. The top-left anchor is `(width/2 - 3, height/2 - 2)`.
pub fn glyph_positions(width: u16, height: u16) -> PatternOutcome {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        return PatternOutcome::TooSmall;
    }
    let anchor = (width / 2 - 3, height / 2 - 2);
    let positions = GLYPH
        .iter()
        .enumerate()
        .flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &bit)| bit == 1)
                .map(move |(x, _)| (anchor.0 + x as u16, anchor.1 + y as u16))
        })
        .collect();
    PatternOutcome::Placed(positions)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Number of filled bits in the glyph bitmap.
    const GLYPH_CELLS: usize = 18;

    #[test]
    fn test_too_small_grid_has_no_pattern() {
        assert_eq!(glyph_positions(5, 5), PatternOutcome::TooSmall);
        assert_eq!(glyph_positions(8, 7), PatternOutcome::TooSmall);
        assert_eq!(glyph_positions(9, 6), PatternOutcome::TooSmall);
        assert!(glyph_positions(5, 5).positions().is_empty());
    }

    #[test]
    fn test_minimal_grid_fits_pattern() {
        let outcome = glyph_positions(MIN_WIDTH, MIN_HEIGHT);
        let positions = outcome.positions();
        assert_eq!(positions.len(), GLYPH_CELLS);
        // Anchor is (1, 1) on a 9x7 grid; the glyph spans x 1..=7, y 1..=5.
        assert!(
            positions
                .iter()
                .all(|&(x, y)| (1..=7).contains(&x) && (1..=5).contains(&y))
        );
    }

    #[test]
    fn test_pattern_is_centered() {
        let positions = glyph_positions(15, 11).positions();
        assert_eq!(positions.len(), GLYPH_CELLS);
        // Anchor (4, 3); top-left glyph bit is filled.
        assert!(positions.contains(&(4, 3)));
        // Bottom-right glyph bit is filled too.
        assert!(positions.contains(&(10, 7)));
        // The glyph's top-row hole.
        assert!(!positions.contains(&(5, 3)));
    }
}
