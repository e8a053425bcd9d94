pub mod board;
pub mod codec;
pub mod engine;
pub mod session;
pub mod spawner;
pub mod types;

pub use board::Board;
pub use session::GameSession;
pub use types::Direction;
