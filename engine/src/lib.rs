/**
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*
* The board is a torus: the last row neighbors the first, the last column the first.
*/

pub mod board;
pub mod config;
pub mod controller;
pub mod error;
pub mod observer;
pub mod patterns;
pub mod ticker;

pub use board::{Board, CellState};
pub use config::LifeConfig;
pub use controller::{Controller, RunState};
pub use error::EngineError;
pub use observer::{Change, Observer};
pub use patterns::{Pattern, Placement};
pub use ticker::TickLoop;
