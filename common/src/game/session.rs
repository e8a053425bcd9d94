use super::board::Board;
use super::engine;
use super::spawner;
use super::types::Direction;
use crate::defaults::WINNING_TILE;
use crate::identifiers::GameId;
use crate::rng::SessionRng;

/// One 2048 game: board, score and win/loss flags. The caller owns the
/// session exclusively for the duration of a move.
#[derive(Clone, Debug)]
pub struct GameSession {
    id: GameId,
    board: Board,
    score: u32,
    game_over: bool,
    won: bool,
}

impl GameSession {
    /// Fresh game with two spawned tiles and score 0. `board_size` must be
    /// at least 1; the caller validates raw input.
    pub fn new(id: GameId, board_size: usize, rng: &mut SessionRng) -> Self {
        let mut board = Board::empty(board_size);
        spawner::spawn_tile(&mut board, rng);
        spawner::spawn_tile(&mut board, rng);
        Self {
            id,
            board,
            score: 0,
            game_over: false,
            won: false,
        }
    }

    /// Rehydrates a session from stored state.
    pub fn from_parts(id: GameId, board: Board, score: u32, game_over: bool, won: bool) -> Self {
        Self {
            id,
            board,
            score,
            game_over,
            won,
        }
    }

    pub fn id(&self) -> &GameId {
        &self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn won(&self) -> bool {
        self.won
    }

    /// Applies one move. Returns whether the board changed.
    ///
    /// A finished game ignores moves. A move that changes nothing spawns no
    /// tile and leaves score and flags alone. Otherwise the merge score is
    /// added, one tile spawns, `won` latches once a winning tile appears
    /// (play continues), and the game ends when the post-spawn board has no
    /// possible move left.
    pub fn apply_move(&mut self, direction: Direction, rng: &mut SessionRng) -> bool {
        if self.game_over {
            return false;
        }

        let outcome = engine::resolve(&self.board, direction);
        if !outcome.moved {
            return false;
        }

        self.board = outcome.board;
        self.score += outcome.score_gained;
        spawner::spawn_tile(&mut self.board, rng);

        if !self.won && self.board.has_tile(WINNING_TILE) {
            self.won = true;
        }
        if !engine::is_move_possible(&self.board) {
            self.game_over = true;
        }

        true
    }
}
