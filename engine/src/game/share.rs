use std::fmt;

use super::blocks::block_name;
use super::types::GameStatus;

/// Snapshot of a game in the shape of the "share your score" text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShareSummary {
    pub status: GameStatus,
    pub score: u32,
    pub best_score: u32,
    pub largest_tile: u32,
    pub grid_size: usize,
    pub winning_tile: u32,
}

impl ShareSummary {
    fn headline(&self) -> &'static str {
        match self.status {
            GameStatus::Won => "Crafted the Ultimate Block!",
            GameStatus::Lost => "Creeper Destroyed Your World!",
            GameStatus::InProgress => "Mining in Progress",
        }
    }
}

impl fmt::Display for ShareSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline())?;
        writeln!(f, "My Score: {}", self.score)?;
        writeln!(f, "High Score: {}", self.best_score)?;
        writeln!(f, "Largest Tile: {}", block_name(self.largest_tile))?;
        writeln!(f, "Grid Size: {}x{}", self.grid_size, self.grid_size)?;
        writeln!(
            f,
            "Goal Block: {} ({})",
            block_name(self.winning_tile),
            self.winning_tile
        )?;
        write!(f, "Craft strategically and become a MineMerge legend!")
    }
}
