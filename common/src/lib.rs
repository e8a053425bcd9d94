pub mod config;
pub mod defaults;
pub mod error;
pub mod game;
pub mod identifiers;
pub mod logger;
pub mod rng;

pub use error::GameError;
pub use identifiers::GameId;
