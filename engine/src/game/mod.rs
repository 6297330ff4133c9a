mod blocks;
mod board;
mod controller;
mod history;
mod move_engine;
mod session_rng;
mod share;
mod spawner;
mod terminal;
mod tile;
mod types;

pub use blocks::block_name;
pub use board::Board;
pub use controller::{Command, GameController, MoveReport};
pub use history::{History, HistoryAction, Snapshot};
pub use move_engine::{MoveOutcome, apply_move};
pub use session_rng::SessionRng;
pub use share::ShareSummary;
pub use spawner::{add_random_tile, create_initial_grid};
pub use terminal::{evaluate, has_available_moves, has_won, is_game_over};
pub use tile::{MAX_TILE_VALUE, Tile};
pub use types::{Direction, GameStatus, MIN_SWIPE_DISTANCE, Position};
