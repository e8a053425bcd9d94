use super::board::Board;
use crate::defaults::FOUR_TILE_ONE_IN;
use crate::rng::SessionRng;

/// Places one new tile in a uniformly chosen empty cell: a 4 one time in
/// ten, otherwise a 2. A full board is left untouched.
pub fn spawn_tile(board: &mut Board, rng: &mut SessionRng) {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return;
    }

    let index = empty[rng.random_range(0..empty.len())];
    let value = if rng.random_range(0..FOUR_TILE_ONE_IN) == 0 {
        4
    } else {
        2
    };
    board.set_index(index, value);
}
