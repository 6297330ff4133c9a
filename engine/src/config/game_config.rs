use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Validate;

pub const SUPPORTED_GRID_SIZES: [usize; 4] = [4, 5, 6, 8];
pub const WINNING_TILE_OPTIONS: [u32; 5] = [1024, 2048, 4096, 8192, 16384];

/// Background skin of the playfield. The engine never reads it; it travels
/// with the config so front-ends can persist it alongside the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    MountainCaverns,
    Junglewood,
    MobsMines,
    SunsetSanctuary,
}

impl Theme {
    pub const ALL: [Theme; 4] = [
        Theme::MountainCaverns,
        Theme::Junglewood,
        Theme::MobsMines,
        Theme::SunsetSanctuary,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Theme::MountainCaverns => "Mountain Caverns",
            Theme::Junglewood => "Junglewood Grove",
            Theme::MobsMines => "Mobs & Mines",
            Theme::SunsetSanctuary => "Sunset Sanctuary",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Theme::MountainCaverns => "mountainCaverns",
            Theme::Junglewood => "junglewood",
            Theme::MobsMines => "mobsMines",
            Theme::SunsetSanctuary => "sunsetSanctuary",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown theme '{}'", s))
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub struct GameConfig {
    pub grid_size: usize,
    pub winning_tile: u32,
    pub theme: Theme,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if !SUPPORTED_GRID_SIZES.contains(&self.grid_size) {
            return Err(format!(
                "Grid size must be one of {:?}, got {}",
                SUPPORTED_GRID_SIZES, self.grid_size
            ));
        }
        if !WINNING_TILE_OPTIONS.contains(&self.winning_tile) {
            return Err(format!(
                "Winning tile must be one of {:?}, got {}",
                WINNING_TILE_OPTIONS, self.winning_tile
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 4,
            winning_tile: 4096,
            theme: Theme::MountainCaverns,
        }
    }
}
