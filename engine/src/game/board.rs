use std::fmt;

use super::tile::{MAX_TILE_VALUE, Tile};
use super::types::Position;
use crate::config::SUPPORTED_GRID_SIZES;
use crate::error::EngineError;

/// Square grid of optional tiles. A `Board` is a value: every update
/// returns a new board and leaves the original untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Option<Tile>>,
    size: usize,
}

impl Board {
    pub fn empty(size: usize) -> Result<Self, EngineError> {
        if !SUPPORTED_GRID_SIZES.contains(&size) {
            return Err(EngineError::invalid(format!(
                "grid size must be one of {:?}, got {}",
                SUPPORTED_GRID_SIZES, size
            )));
        }
        Ok(Self {
            cells: vec![None; size * size],
            size,
        })
    }

    /// Builds a board from row-major values, `0` meaning an empty cell.
    pub fn from_values(size: usize, values: &[u32]) -> Result<Self, EngineError> {
        let mut board = Self::empty(size)?;
        if values.len() != size * size {
            return Err(EngineError::invalid(format!(
                "expected {} values for a {}x{} board, got {}",
                size * size,
                size,
                size,
                values.len()
            )));
        }

        for (index, &value) in values.iter().enumerate() {
            if value == 0 {
                continue;
            }
            if !Tile::is_valid_value(value) {
                return Err(EngineError::invalid(format!(
                    "tile value must be a power of two between 2 and {}, got {}",
                    MAX_TILE_VALUE, value
                )));
            }
            let position = board.position_of(index);
            board.cells[index] = Some(Tile::new(value, position));
        }

        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    pub fn get(&self, pos: Position) -> Result<Option<&Tile>, EngineError> {
        self.check_bounds(pos)?;
        Ok(self.cell(pos))
    }

    pub fn with_tile_at(&self, pos: Position, tile: Tile) -> Result<Board, EngineError> {
        self.check_bounds(pos)?;
        Ok(self.with_cell(pos, Some(Tile { position: pos, ..tile })))
    }

    pub fn without_tile_at(&self, pos: Position) -> Result<Board, EngineError> {
        self.check_bounds(pos)?;
        Ok(self.with_cell(pos, None))
    }

    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| self.position_of(index))
            .collect()
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().flatten()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    pub fn highest_tile(&self) -> u32 {
        self.tiles().map(|tile| tile.value).max().unwrap_or(0)
    }

    pub fn total_value(&self) -> u64 {
        self.tiles().map(|tile| u64::from(tile.value)).sum()
    }

    /// Row-major tile values, `0` for empty cells.
    pub fn values(&self) -> Vec<u32> {
        self.cells
            .iter()
            .map(|cell| cell.as_ref().map_or(0, |tile| tile.value))
            .collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<Tile>]> {
        self.cells.chunks(self.size)
    }

    pub(crate) fn cell(&self, pos: Position) -> Option<&Tile> {
        self.cells[self.index_of(pos)].as_ref()
    }

    pub(crate) fn set_cell(&mut self, pos: Position, tile: Option<Tile>) {
        let index = self.index_of(pos);
        self.cells[index] = tile;
    }

    fn with_cell(&self, pos: Position, tile: Option<Tile>) -> Board {
        let mut next = self.clone();
        next.set_cell(pos, tile);
        next
    }

    fn check_bounds(&self, pos: Position) -> Result<(), EngineError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(EngineError::invalid(format!(
                "position {} is outside a {}x{} board",
                pos, self.size, self.size
            )))
        }
    }

    fn index_of(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    fn position_of(&self, index: usize) -> Position {
        Position::new(index / self.size, index % self.size)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.highest_tile().max(2).to_string().len();
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(tile) => format!("{:>width$}", tile.value),
                    None => format!("{:>width$}", "."),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rejects_unsupported_size() {
        assert!(Board::empty(3).is_err());
        assert!(Board::empty(7).is_err());
        for size in SUPPORTED_GRID_SIZES {
            assert_eq!(Board::empty(size).unwrap().empty_positions().len(), size * size);
        }
    }

    #[test]
    fn test_from_values_rejects_bad_input() {
        assert!(Board::from_values(4, &[2, 2]).is_err());
        let mut values = vec![0; 16];
        values[5] = 6;
        assert!(Board::from_values(4, &values).is_err());
        values[5] = 1;
        assert!(Board::from_values(4, &values).is_err());
        values[5] = 1 << 31;
        assert!(matches!(
            Board::from_values(4, &values),
            Err(EngineError::InvalidArgument(_))
        ));
        values[5] = MAX_TILE_VALUE;
        assert!(Board::from_values(4, &values).is_ok());
    }

    #[test]
    fn test_from_values_positions_match_cells() {
        #[rustfmt::skip]
        let board = Board::from_values(4, &[
            0, 0, 0, 0,
            0, 0, 8, 0,
            0, 0, 0, 0,
            0, 0, 0, 2,
        ]).unwrap();
        let eight = board.get(Position::new(1, 2)).unwrap().unwrap();
        assert_eq!(eight.value, 8);
        assert_eq!(eight.position, Position::new(1, 2));
        assert_eq!(board.tile_count(), 2);
        assert_eq!(board.highest_tile(), 8);
        assert_eq!(board.empty_positions().len(), 14);
    }

    #[test]
    fn test_with_tile_at_leaves_original_untouched() {
        let board = Board::empty(4).unwrap();
        let updated = board
            .with_tile_at(Position::new(2, 1), Tile::new(4, Position::new(0, 0)))
            .unwrap();

        assert!(board.get(Position::new(2, 1)).unwrap().is_none());
        let tile = updated.get(Position::new(2, 1)).unwrap().unwrap();
        assert_eq!(tile.value, 4);
        assert_eq!(tile.position, Position::new(2, 1));
        assert_eq!(updated.tile_count(), 1);
    }

    #[test]
    fn test_out_of_bounds_is_invalid_argument() {
        let board = Board::empty(4).unwrap();
        assert!(matches!(
            board.get(Position::new(4, 0)),
            Err(EngineError::InvalidArgument(_))
        ));
        assert!(board.without_tile_at(Position::new(0, 9)).is_err());
    }

    #[test]
    fn test_display_renders_rows() {
        let mut values = vec![0; 16];
        values[0] = 2;
        values[15] = 16;
        let board = Board::from_values(4, &values).unwrap();
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], " 2  .  .  .");
        assert_eq!(lines[3], " .  .  . 16");
    }
}
