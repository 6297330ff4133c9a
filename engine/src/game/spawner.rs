use super::board::Board;
use super::session_rng::SessionRng;
use super::tile::Tile;
use crate::error::EngineError;

const FOUR_PROBABILITY: f64 = 0.1;

/// Places a 2 (90%) or a 4 (10%) on a uniformly chosen empty cell.
/// A full board comes back unchanged.
pub fn add_random_tile(board: &Board, rng: &mut SessionRng) -> Board {
    let empty = board.empty_positions();
    if empty.is_empty() {
        return board.clone();
    }

    let position = empty[rng.random_range(0..empty.len())];
    let value = if rng.chance(FOUR_PROBABILITY) { 4 } else { 2 };

    let mut next = board.clone();
    next.set_cell(position, Some(Tile::new(value, position)));
    next
}

pub fn create_initial_grid(size: usize, rng: &mut SessionRng) -> Result<Board, EngineError> {
    let board = Board::empty(size)?;
    let board = add_random_tile(&board, rng);
    Ok(add_random_tile(&board, rng))
}
