pub mod config;
pub mod error;
pub mod game;
pub mod identifiers;
pub mod logger;

pub use error::EngineError;
pub use identifiers::TileId;
