use std::fmt;

use rand::Rng;

use crate::error::{EngineError, Result};
use crate::patterns::{Pattern, Placement};
use crate::board::CellState::{Alive, Dead};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            Alive => Dead,
            Dead => Alive,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Alive
        } else {
            Dead
        }
    }
}

/// Fixed-size toroidal grid of cells.
///
/// Coordinates are `(row, col)`; callers must stay inside `rows() x cols()`.
/// Every neighbor and seed offset is wrapped internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<CellState>>,
}

impl Board {
    /// All-dead board. Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be positive");
        Board {
            rows,
            cols,
            cells: vec![vec![Dead; cols]; rows],
        }
    }

    /// Parse rows of `#` (alive) and `.` (dead). All rows must be equally wide.
    pub fn from_rows(lines: &[&str]) -> Result<Self> {
        let cols = lines.first().map(|line| line.chars().count()).unwrap_or(0);
        if lines.is_empty() || cols == 0 {
            return Err(EngineError::EmptyBoard {
                rows: lines.len(),
                cols,
            });
        }

        let mut board = Board::new(lines.len(), cols);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(EngineError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                board.cells[row][col] = match ch {
                    '#' => Alive,
                    '.' => Dead,
                    found => return Err(EngineError::InvalidCell { row, col, found }),
                };
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &[Vec<CellState>] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> CellState {
        self.cells[row][col]
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_alive()
    }

    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        self.cells[row][col] = state;
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        let cell = &mut self.cells[row][col];
        *cell = cell.toggled();
    }

    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(Dead);
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_alive()).count()
    }

    /// Coordinates of every live cell in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_alive())
                .map(move |(col, _)| (row, col))
        })
    }

    /// Replace every cell with an independent draw that is alive with probability `density`.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        for cell in self.cells.iter_mut().flatten() {
            *cell = rng.random_bool(density).into();
        }
    }

    /// Advance the grid by one step (Game of Life logic).
    ///
    /// The next generation is computed entirely from the current one and then
    /// swapped in. Returns whether any cell changed.
    pub fn advance(&mut self) -> bool {
        let mut next_cells = vec![vec![Dead; self.cols]; self.rows];

        for (row, next_row) in next_cells.iter_mut().enumerate() {
            for (col, next) in next_row.iter_mut().enumerate() {
                let alive_neighbors = self.count_live_neighbors(row, col);

                *next = match (self.cells[row][col], alive_neighbors) {
                    (Alive, 2..=3) => Alive, // Survives
                    (Dead, 3) => Alive,      // Becomes alive
                    _ => Dead,               // Dies or remains dead
                };
            }
        }

        if self.cells == next_cells {
            return false;
        }
        self.cells = next_cells;
        true
    }

    /// Count the live cells among the 8 neighbors of `(row, col)`, wrapping at the edges.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for dr in [-1, 0, 1] {
            for dc in [-1, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let (neighbor_row, neighbor_col) = self.wrap(row, col, dr, dc);
                if self.cells[neighbor_row][neighbor_col] == Alive {
                    count += 1;
                }
            }
        }

        count
    }

    /// Stamp `pattern` at the origin without touching other cells.
    pub fn place(&mut self, pattern: &Pattern, origin_row: usize, origin_col: usize) {
        for &(dr, dc) in pattern.cells {
            let (row, col) = self.wrap(origin_row, origin_col, dr, dc);
            self.cells[row][col] = Alive;
        }
    }

    /// Clear the board and stamp a single pattern.
    pub fn seed_pattern(&mut self, pattern: &Pattern, origin_row: usize, origin_col: usize) {
        self.clear();
        self.place(pattern, origin_row, origin_col);
    }

    /// Clear the board once, then stamp every placement.
    pub fn seed(&mut self, placements: &[Placement]) {
        self.clear();
        for placement in placements {
            self.place(placement.pattern, placement.row, placement.col);
        }
    }

    fn wrap(&self, row: usize, col: usize, dr: isize, dc: isize) -> (usize, usize) {
        let row = (row as isize + dr).rem_euclid(self.rows as isize) as usize;
        let col = (col as isize + dc).rem_euclid(self.cols as isize) as usize;
        (row, col)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{BLINKER, BLOCK, GLIDER_SE, R_PENTOMINO};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board_with(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Board {
        let mut board = Board::new(rows, cols);
        for &(row, col) in alive {
            board.set(row, col, Alive);
        }
        board
    }

    fn live_set(board: &Board) -> Vec<(usize, usize)> {
        board.live_cells().collect()
    }

    #[test]
    fn new_board_is_all_dead() {
        let board = Board::new(20, 30);
        assert_eq!(board.rows(), 20);
        assert_eq!(board.cols(), 30);
        assert_eq!(board.population(), 0);
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn zero_dimension_panics() {
        Board::new(0, 5);
    }

    #[test]
    fn neighbors_wrap_around_corners() {
        let board = board_with(20, 30, &[(19, 29), (19, 0), (0, 29)]);
        assert_eq!(board.count_live_neighbors(0, 0), 3);
    }

    #[test]
    fn neighbors_ignore_the_cell_itself() {
        let board = board_with(5, 5, &[(2, 2)]);
        assert_eq!(board.count_live_neighbors(2, 2), 0);
        assert_eq!(board.count_live_neighbors(1, 1), 1);
    }

    #[test]
    fn fully_alive_board_counts_eight() {
        let mut board = Board::new(3, 3);
        board.randomize(&mut StdRng::seed_from_u64(1), 1.0);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(board.count_live_neighbors(row, col), 8);
            }
        }
    }

    #[test]
    fn block_is_stable() {
        let alive = [(5, 5), (5, 6), (6, 5), (6, 6)];
        let mut board = board_with(20, 30, &alive);

        assert!(!board.advance());

        assert_eq!(live_set(&board), alive.to_vec());
        assert!(!board.is_alive(5, 4));
        assert!(!board.is_alive(4, 5));
    }

    #[test]
    fn blinker_oscillates() {
        let mut board = board_with(20, 30, &[(6, 5), (6, 6), (6, 7)]);

        assert!(board.advance());
        assert_eq!(live_set(&board), vec![(5, 6), (6, 6), (7, 6)]);

        board.advance();
        assert_eq!(live_set(&board), vec![(6, 5), (6, 6), (6, 7)]);
    }

    #[test]
    fn blinker_across_the_edge_uses_wrapped_neighbors() {
        let mut board = board_with(6, 6, &[(0, 5), (0, 0), (0, 1)]);
        board.advance();
        assert_eq!(live_set(&board), vec![(0, 0), (1, 0), (5, 0)]);
    }

    #[test]
    fn overcrowded_and_lonely_cells_die() {
        let mut board = Board::from_rows(&[
            ".....", //
            ".###.",
            ".###.",
            ".###.",
            ".....",
        ])
        .unwrap();
        board.advance();
        assert!(!board.is_alive(2, 2), "centre had eight neighbors");

        let mut lonely = board_with(5, 5, &[(2, 2)]);
        lonely.advance();
        assert_eq!(lonely.population(), 0);
    }

    #[test]
    fn glider_travels_across_the_torus() {
        let mut board = Board::new(8, 8);
        board.seed_pattern(&GLIDER_SE, 6, 6);
        let start = live_set(&board);

        for _ in 0..4 {
            board.advance();
        }

        let mut expected: Vec<(usize, usize)> =
            start.iter().map(|&(r, c)| ((r + 1) % 8, (c + 1) % 8)).collect();
        expected.sort_unstable();
        assert_eq!(live_set(&board), expected);
    }

    #[test]
    fn advance_is_deterministic() {
        let mut a = Board::new(20, 30);
        a.seed_pattern(&R_PENTOMINO, 10, 15);
        let mut b = a.clone();

        for _ in 0..2 {
            a.advance();
            b.advance();
        }
        assert_eq!(a, b);
    }

    #[test]
    fn toggle_twice_restores_dead() {
        let mut board = Board::new(4, 4);
        board.toggle_cell(1, 2);
        assert!(board.is_alive(1, 2));
        assert_eq!(board.population(), 1);
        board.toggle_cell(1, 2);
        assert!(!board.is_alive(1, 2));
    }

    #[test]
    fn seed_pattern_wraps_and_clears_first() {
        let mut board = board_with(10, 10, &[(5, 5)]);
        board.seed_pattern(&BLINKER, 0, 0);
        assert_eq!(live_set(&board), vec![(0, 0), (0, 1), (0, 9)]);
    }

    #[test]
    fn seed_places_every_pattern() {
        let mut board = Board::new(10, 10);
        board.seed(&[
            Placement::new(&BLOCK, 4, 4),
            Placement::new(&BLOCK, 9, 9),
        ]);
        assert_eq!(board.population(), 8);
        assert!(board.is_alive(0, 0));
        assert!(board.is_alive(0, 9));
        assert!(board.is_alive(9, 0));
    }

    #[test]
    fn clear_after_seed_leaves_nothing() {
        let mut board = Board::new(20, 30);
        board.seed(&crate::patterns::default_layout(20, 30));
        assert!(board.population() > 0);
        board.clear();
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn clear_after_seed_pattern_leaves_nothing() {
        let mut board = Board::new(20, 30);
        board.seed_pattern(&R_PENTOMINO, 0, 0);
        assert_eq!(board.population(), 5);
        board.clear();
        assert_eq!(board.population(), 0);
        assert_eq!(board, Board::new(20, 30));
    }

    #[test]
    fn randomize_treats_nan_density_as_empty() {
        let mut board = Board::new(4, 4);
        board.toggle_cell(0, 0);
        board.randomize(&mut StdRng::seed_from_u64(3), f64::NAN);
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn randomize_is_reproducible_with_a_seeded_rng() {
        let mut a = Board::new(20, 30);
        let mut b = Board::new(20, 30);
        a.randomize(&mut StdRng::seed_from_u64(42), 0.5);
        b.randomize(&mut StdRng::seed_from_u64(42), 0.5);
        assert_eq!(a, b);

        a.randomize(&mut StdRng::seed_from_u64(42), 0.0);
        assert_eq!(a.population(), 0);
    }

    #[test]
    fn from_rows_round_trips_through_display() {
        let rows = [".#.", "..#", "###"];
        let board = Board::from_rows(&rows).unwrap();
        assert_eq!(board.to_string(), ".#.\n..#\n###\n");
    }

    #[test]
    fn from_rows_rejects_bad_input() {
        assert_eq!(
            Board::from_rows(&["##", "#"]),
            Err(EngineError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Board::from_rows(&["#x"]),
            Err(EngineError::InvalidCell {
                row: 0,
                col: 1,
                found: 'x'
            })
        );
        assert_eq!(
            Board::from_rows(&[]),
            Err(EngineError::EmptyBoard { rows: 0, cols: 0 })
        );
    }
}
