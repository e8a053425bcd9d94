use std::sync::Arc;

use tokio::sync::Mutex;

use common::game::codec;
use common::game::{Direction, GameSession};
use common::log;
use common::rng::SessionRng;
use common::{GameError, GameId};

use crate::server_config::ServerConfig;
use crate::store::{GameStore, StoredGame};

/// Orchestrates the store and the game core: the three operations the
/// HTTP boundary exposes.
#[derive(Clone)]
pub struct GameService {
    store: GameStore,
    rng: Arc<Mutex<SessionRng>>,
    config: ServerConfig,
}

impl GameService {
    pub fn new(store: GameStore, config: ServerConfig) -> Self {
        Self::with_rng(store, config, SessionRng::from_random())
    }

    pub fn with_rng(store: GameStore, config: ServerConfig, rng: SessionRng) -> Self {
        Self {
            store,
            rng: Arc::new(Mutex::new(rng)),
            config,
        }
    }

    pub fn default_board_size(&self) -> usize {
        self.config.default_board_size
    }

    pub async fn new_game(&self, board_size: i64) -> Result<GameSession, GameError> {
        if board_size <= 0 {
            return Err(GameError::InvalidArgument(format!(
                "Board size must be positive, got {}",
                board_size
            )));
        }

        let mut rng = self.rng.lock().await;
        let id = self.store.allocate_id();
        let session = GameSession::new(id.clone(), board_size as usize, &mut rng);
        drop(rng);

        self.store
            .put(id.clone(), StoredGame::from_session(&session))
            .await;
        log!(
            "Created game {} with a {}x{} board",
            id,
            board_size,
            board_size
        );
        Ok(session)
    }

    pub async fn get_game(&self, id: &GameId) -> Result<GameSession, GameError> {
        let record = self
            .store
            .get(id)
            .await
            .ok_or_else(|| game_not_found(id))?;
        session_from_record(id.clone(), &record)
    }

    pub async fn apply_move(
        &self,
        id: &GameId,
        direction: Direction,
    ) -> Result<GameSession, GameError> {
        let mut rng = self.rng.lock().await;
        let result = self
            .store
            .update(id, |record| {
                let mut session = session_from_record(id.clone(), record)?;
                let moved = session.apply_move(direction, &mut rng);
                record.board_text = codec::encode(session.board());
                record.score = session.score();
                record.game_over = session.game_over();
                record.won = session.won();
                Ok((session, moved))
            })
            .await;

        match result {
            None => Err(game_not_found(id)),
            Some(Err(err)) => Err(err),
            Some(Ok((session, moved))) => {
                log!(
                    "Game {}: {:?} move, changed={}, score={}, game_over={}",
                    id,
                    direction,
                    moved,
                    session.score(),
                    session.game_over()
                );
                Ok(session)
            }
        }
    }
}

fn game_not_found(id: &GameId) -> GameError {
    GameError::NotFound(format!("Game with ID {} not found", id))
}

fn session_from_record(id: GameId, record: &StoredGame) -> Result<GameSession, GameError> {
    let board = codec::decode(&record.board_text)?;
    Ok(GameSession::from_parts(
        id,
        board,
        record.score,
        record.game_over,
        record.won,
    ))
}
