use super::board::Board;
use super::types::{Direction, GameStatus, Position};

pub fn has_won(board: &Board, winning_tile: u32) -> bool {
    board.tiles().any(|tile| tile.value == winning_tile)
}

/// True when the board is full and no two orthogonal neighbours share a value.
pub fn is_game_over(board: &Board) -> bool {
    if board.has_empty_cell() {
        return false;
    }

    let size = board.size();
    for row in 0..size {
        for col in 0..size {
            let origin = Position::new(row, col);
            let Some(tile) = board.cell(origin) else {
                continue;
            };

            for direction in Direction::ALL {
                if let Some(neighbour) = origin.step(direction, size)
                    && board.cell(neighbour).is_some_and(|other| tile.can_merge_with(other))
                {
                    return false;
                }
            }
        }
    }

    true
}

pub fn has_available_moves(board: &Board) -> bool {
    !is_game_over(board)
}

/// Win takes precedence over loss.
pub fn evaluate(board: &Board, winning_tile: u32) -> GameStatus {
    if has_won(board, winning_tile) {
        GameStatus::Won
    } else if is_game_over(board) {
        GameStatus::Lost
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tile::MAX_TILE_VALUE;

    #[rustfmt::skip]
    const CHECKERBOARD: [u32; 16] = [
        2, 4, 2, 4,
        4, 2, 4, 2,
        2, 4, 2, 4,
        4, 2, 4, 2,
    ];

    #[test]
    fn test_full_board_without_pairs_is_game_over() {
        let board = Board::from_values(4, &CHECKERBOARD).unwrap();
        assert!(is_game_over(&board));
        assert!(!has_available_moves(&board));
        assert_eq!(evaluate(&board, 2048), GameStatus::Lost);
    }

    #[test]
    fn test_single_vertical_pair_prevents_loss() {
        let mut values = CHECKERBOARD;
        values[0] = 8;
        values[4] = 8;
        values[8] = 16;
        values[12] = 32;
        let board = Board::from_values(4, &values).unwrap();
        assert!(!is_game_over(&board));
    }

    #[test]
    fn test_single_horizontal_pair_prevents_loss() {
        let mut values = CHECKERBOARD;
        values[0] = 4;
        values[4] = 8;
        values[8] = 16;
        let board = Board::from_values(4, &values).unwrap();
        assert!(!is_game_over(&board));
    }

    #[test]
    fn test_empty_cell_prevents_loss() {
        let mut values = CHECKERBOARD;
        values[6] = 0;
        let board = Board::from_values(4, &values).unwrap();
        assert!(!is_game_over(&board));
        assert_eq!(evaluate(&board, 2048), GameStatus::InProgress);
    }

    #[test]
    fn test_wrapping_neighbours_are_not_adjacent() {
        #[rustfmt::skip]
        let board = Board::from_values(4, &[
            2, 4, 2, 8,
            8, 2, 4, 2,
            2, 4, 2, 4,
            4, 2, 4, 2,
        ]).unwrap();
        assert!(is_game_over(&board));
    }

    #[test]
    fn test_pair_of_largest_tiles_is_not_a_move() {
        let mut values = CHECKERBOARD;
        values[0] = MAX_TILE_VALUE;
        values[1] = MAX_TILE_VALUE;
        values[4] = 8;
        let board = Board::from_values(4, &values).unwrap();
        assert!(is_game_over(&board));
    }

    #[test]
    fn test_has_won_requires_exact_value() {
        let mut values = [0; 16];
        values[3] = 4096;
        let board = Board::from_values(4, &values).unwrap();
        assert!(has_won(&board, 4096));
        assert!(!has_won(&board, 2048));
        assert!(!has_won(&board, 8192));
    }

    #[test]
    fn test_win_beats_loss() {
        let mut values = CHECKERBOARD;
        values[5] = 1024;
        let board = Board::from_values(4, &values).unwrap();
        assert!(is_game_over(&board));
        assert_eq!(evaluate(&board, 1024), GameStatus::Won);
    }
}
