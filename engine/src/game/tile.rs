use super::types::Position;
use crate::identifiers::TileId;

/// Largest value a tile may hold. Two tiles at this value no longer merge,
/// so doubling never leaves `u32`.
pub const MAX_TILE_VALUE: u32 = 1 << 30;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub value: u32,
    pub position: Position,
    /// The two tiles consumed by the merge that produced this one.
    /// Only set on the board returned by that move; for animation only.
    pub merged_from: Option<Box<[Tile; 2]>>,
}

impl Tile {
    pub fn new(value: u32, position: Position) -> Self {
        Self {
            id: TileId::next(),
            value,
            position,
            merged_from: None,
        }
    }

    pub fn is_valid_value(value: u32) -> bool {
        (2..=MAX_TILE_VALUE).contains(&value) && value.is_power_of_two()
    }

    pub fn can_merge_with(&self, other: &Tile) -> bool {
        self.value == other.value && self.value < MAX_TILE_VALUE
    }

    /// Same tile at a new cell, with merge provenance dropped.
    pub(crate) fn slid_to(&self, position: Position) -> Tile {
        Tile {
            id: self.id,
            value: self.value,
            position,
            merged_from: None,
        }
    }

    /// New tile of double value built from `moving` landing on `target`.
    pub(crate) fn merged(moving: &Tile, target: &Tile) -> Tile {
        Tile {
            id: TileId::next(),
            value: moving.value * 2,
            position: target.position,
            merged_from: Some(Box::new([
                moving.slid_to(moving.position),
                target.slid_to(target.position),
            ])),
        }
    }
}
