use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

pub const MIN_SWIPE_DISTANCE: f64 = 30.0;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit step as `(d_row, d_col)`.
    pub fn vector(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Maps keyboard key names (`ArrowUp`, ...) to a direction.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Maps a touch gesture to a direction. The dominant axis wins and
    /// gestures shorter than `MIN_SWIPE_DISTANCE` are ignored.
    pub fn from_swipe(dx: f64, dy: f64) -> Option<Self> {
        if dx.abs() > dy.abs() {
            if dx.abs() < MIN_SWIPE_DISTANCE {
                return None;
            }
            Some(if dx > 0.0 { Direction::Right } else { Direction::Left })
        } else {
            if dy.abs() < MIN_SWIPE_DISTANCE {
                return None;
            }
            Some(if dy > 0.0 { Direction::Down } else { Direction::Up })
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|direction| direction.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| EngineError::invalid(format!("unknown direction '{}'", s)))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbour one step along `direction`, or `None` when it leaves a `size`-wide grid.
    pub fn step(self, direction: Direction, size: usize) -> Option<Position> {
        let (d_row, d_col) = direction.vector();
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < size && col < size).then_some(Position { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}
