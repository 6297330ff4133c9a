use super::board::Board;
use super::tile::Tile;
use super::types::{Direction, Position};

#[derive(Clone, Debug)]
pub struct MoveOutcome {
    pub board: Board,
    pub moved: bool,
    pub score_delta: u32,
}

/// Slides every tile toward `direction` and merges equal pairs.
///
/// Cells nearest the target edge are processed first, so a tile always
/// sees its final obstacles. Each cell can receive at most one merge per
/// move; this is tracked in `merged_into` rather than inferred from the
/// traversal order.
pub fn apply_move(board: &Board, direction: Direction) -> MoveOutcome {
    let size = board.size();
    let mut next = board.clone();
    let mut merged_into = vec![false; size * size];
    let mut moved = false;
    let mut score_delta: u32 = 0;

    for tile in next.tiles().cloned().collect::<Vec<_>>() {
        if tile.merged_from.is_some() {
            next.set_cell(tile.position, Some(tile.slid_to(tile.position)));
        }
    }

    let (rows, cols) = traversals(direction, size);
    for &row in &rows {
        for &col in &cols {
            let origin = Position::new(row, col);
            let Some(tile) = next.cell(origin).cloned() else {
                continue;
            };

            let (farthest, obstacle) = find_farthest_position(&next, origin, direction);

            if let Some(target) = obstacle
                && let Some(other) = next.cell(target)
                && tile.can_merge_with(other)
                && !merged_into[target.row * size + target.col]
            {
                let merged = Tile::merged(&tile, other);
                score_delta += merged.value;
                next.set_cell(origin, None);
                next.set_cell(target, Some(merged));
                merged_into[target.row * size + target.col] = true;
                moved = true;
            } else if farthest != origin {
                next.set_cell(origin, None);
                next.set_cell(farthest, Some(tile.slid_to(farthest)));
                moved = true;
            }
        }
    }

    MoveOutcome {
        board: next,
        moved,
        score_delta,
    }
}

/// Row and column visiting order for `direction`.
fn traversals(direction: Direction, size: usize) -> (Vec<usize>, Vec<usize>) {
    let (d_row, d_col) = direction.vector();
    let mut rows: Vec<usize> = (0..size).collect();
    let mut cols: Vec<usize> = (0..size).collect();
    if d_row == 1 {
        rows.reverse();
    }
    if d_col == 1 {
        cols.reverse();
    }
    (rows, cols)
}

/// Walks from `origin` through empty cells. Returns the last empty cell
/// reached (or `origin` itself) and the first occupied cell beyond it.
fn find_farthest_position(
    board: &Board,
    origin: Position,
    direction: Direction,
) -> (Position, Option<Position>) {
    let size = board.size();
    let mut previous = origin;
    let mut cursor = origin.step(direction, size);

    while let Some(cell) = cursor {
        if board.cell(cell).is_some() {
            return (previous, Some(cell));
        }
        previous = cell;
        cursor = cell.step(direction, size);
    }

    (previous, None)
}
