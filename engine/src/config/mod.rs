mod config_content_provider;
mod config_manager;
mod config_serializer;
mod game_config;

pub use config_content_provider::{
    ConfigContentProvider, FileContentConfigProvider, MemoryConfigProvider,
};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use game_config::{GameConfig, Theme, SUPPORTED_GRID_SIZES, WINNING_TILE_OPTIONS};

/// Checked whenever a config is loaded from or written to storage.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
