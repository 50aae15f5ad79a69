//! Named seed templates.
//!
//! Offsets are relative to an origin and may be negative; the board wraps
//! them onto the torus when stamping.

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(isize, isize)],
}

/// A pattern anchored at an origin cell.
#[derive(Clone, Copy)]
pub struct Placement {
    pub pattern: &'static Pattern,
    pub row: usize,
    pub col: usize,
}

impl Placement {
    pub fn new(pattern: &'static Pattern, row: usize, col: usize) -> Self {
        Self { pattern, row, col }
    }
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, -1), (0, 0), (0, 1)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

/// Small methuselah; settles only after ~1100 generations on an open plane.
pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(-1, 0), (-1, 1), (0, -1), (0, 0), (1, 0)],
};

pub const GLIDER_SE: Pattern = Pattern {
    name: "Glider (south-east)",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const GLIDER_SW: Pattern = Pattern {
    name: "Glider (south-west)",
    cells: &[(0, 1), (1, 0), (2, 0), (2, 1), (2, 2)],
};

pub const GLIDER_NE: Pattern = Pattern {
    name: "Glider (north-east)",
    cells: &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 1)],
};

pub const GLIDER_NW: Pattern = Pattern {
    name: "Glider (north-west)",
    cells: &[(0, 0), (0, 1), (0, 2), (1, 0), (2, 1)],
};

pub const PATTERNS: &[&Pattern] = &[
    &BLOCK,
    &BLINKER,
    &TOAD,
    &BEACON,
    &R_PENTOMINO,
    &GLIDER_SE,
    &GLIDER_SW,
    &GLIDER_NE,
    &GLIDER_NW,
];

/// The layout used for reseeding: a chaotic R-pentomino in the middle and a
/// glider near each corner, every glider heading toward the centre.
pub fn default_layout(rows: usize, cols: usize) -> Vec<Placement> {
    let far_row = rows.saturating_sub(4);
    let far_col = cols.saturating_sub(4);
    vec![
        Placement::new(&R_PENTOMINO, rows / 2, cols / 2),
        Placement::new(&GLIDER_SE, 1, 1),
        Placement::new(&GLIDER_SW, 1, far_col),
        Placement::new(&GLIDER_NE, far_row, 1),
        Placement::new(&GLIDER_NW, far_row, far_col),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_names_are_distinct() {
        let mut names: Vec<&str> = PATTERNS.iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PATTERNS.len());
    }

    #[test]
    fn pattern_offsets_are_unique() {
        for pattern in PATTERNS {
            let mut cells = pattern.cells.to_vec();
            cells.sort_unstable();
            cells.dedup();
            assert_eq!(cells.len(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn default_layout_has_centre_and_four_corners() {
        let layout = default_layout(20, 30);
        assert_eq!(layout.len(), 5);
        assert_eq!(layout[0].pattern.name, R_PENTOMINO.name);
        assert_eq!((layout[0].row, layout[0].col), (10, 15));
        let corners: Vec<(usize, usize)> = layout[1..].iter().map(|p| (p.row, p.col)).collect();
        assert_eq!(corners, vec![(1, 1), (1, 26), (16, 1), (16, 26)]);
    }
}
