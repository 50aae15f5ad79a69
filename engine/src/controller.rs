use std::fmt;
use std::time::Duration;

use rand::Rng;

use crate::board::Board;
use crate::config::LifeConfig;
use crate::error::Result;
use crate::observer::{Change, Observer};
use crate::patterns::{self, Pattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

/// A simulation session: one board plus play/pause and speed state.
///
/// Every command that changes something notifies the subscribed observers
/// exactly once. Guarded commands that decline to act notify nobody.
pub struct Controller {
    board: Board,
    state: RunState,
    interval_ms: u64,
    generation: u64,
    observers: Vec<Box<dyn Observer>>,
}

impl Default for Controller {
    fn default() -> Self {
        let config = LifeConfig::default();
        Self::new(Board::new(config.rows, config.cols), config.interval_ms)
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("rows", &self.board.rows())
            .field("cols", &self.board.cols())
            .field("state", &self.state)
            .field("interval_ms", &self.interval_ms)
            .field("generation", &self.generation)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Controller {
    pub fn new(board: Board, interval_ms: u64) -> Self {
        Self {
            board,
            state: RunState::Stopped,
            interval_ms,
            generation: 0,
            observers: Vec::new(),
        }
    }

    pub fn from_config(config: &LifeConfig) -> Result<Self> {
        config.validate()?;
        log::info!(
            "new session: {}x{} board, {} ms per generation",
            config.rows,
            config.cols,
            config.interval_ms
        );
        Ok(Self::new(
            Board::new(config.rows, config.cols),
            config.interval_ms,
        ))
    }

    pub fn subscribe<O: Observer + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// The sleep between ticks. Never shorter than a millisecond.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn toggle_running(&mut self) {
        self.state = match self.state {
            RunState::Stopped => RunState::Running,
            RunState::Running => RunState::Stopped,
        };
        log::debug!("run state -> {:?}", self.state);
        self.notify(Change::RunState(self.state));
    }

    /// Range checks belong to the control surface; any value is accepted here.
    pub fn set_speed(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms;
        log::debug!("interval -> {interval_ms} ms");
        self.notify(Change::Speed(interval_ms));
    }

    /// Advance one generation whether or not the session is running.
    pub fn step(&mut self) {
        self.advance();
    }

    /// One firing of the periodic driver. Returns whether the board advanced.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.advance();
        true
    }

    pub fn clear_grid(&mut self) {
        self.board.clear();
        self.generation = 0;
        log::debug!("board cleared");
        self.notify(Change::Cleared);
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        self.board.toggle_cell(row, col);
        self.notify(Change::Cell { row, col });
    }

    /// Reseed with the default layout, unless the simulation is running.
    pub fn seed_if_stopped(&mut self) -> bool {
        if self.is_running() {
            log::debug!("reseed ignored while running");
            return false;
        }
        let layout = patterns::default_layout(self.board.rows(), self.board.cols());
        self.board.seed(&layout);
        self.generation = 0;
        log::debug!("board reseeded with {} patterns", layout.len());
        self.notify(Change::Seeded);
        true
    }

    /// Clear the board and stamp `pattern` at its centre, unless running.
    pub fn apply_pattern_if_stopped(&mut self, pattern: &Pattern) -> bool {
        if self.is_running() {
            log::debug!("{} ignored while running", pattern.name);
            return false;
        }
        let (row, col) = (self.board.rows() / 2, self.board.cols() / 2);
        self.board.seed_pattern(pattern, row, col);
        self.generation = 0;
        log::debug!("board seeded with {} at ({row}, {col})", pattern.name);
        self.notify(Change::Seeded);
        true
    }

    /// Fill the board at random, unless the simulation is running.
    pub fn randomize_if_stopped<R: Rng>(&mut self, rng: &mut R, density: f64) -> bool {
        if self.is_running() {
            log::debug!("randomize ignored while running");
            return false;
        }
        self.board.randomize(rng, density);
        self.generation = 0;
        log::debug!("board randomized, population {}", self.board.population());
        self.notify(Change::Seeded);
        true
    }

    fn advance(&mut self) {
        self.board.advance();
        self.generation += 1;
        log::trace!("generation {}", self.generation);
        self.notify(Change::Generation(self.generation));
    }

    fn notify(&self, change: Change) {
        for observer in &self.observers {
            observer.on_change(&change);
        }
    }
}
