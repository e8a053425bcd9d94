pub const DEFAULT_BOARD_SIZE: usize = 4;

pub const WINNING_TILE: u32 = 2048;

/// One spawn in this many produces a 4 instead of a 2.
pub const FOUR_TILE_ONE_IN: u32 = 10;
