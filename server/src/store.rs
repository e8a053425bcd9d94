use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use common::GameId;
use common::game::GameSession;
use common::game::codec;

/// Durable form of one game. The board lives here as the codec's text
/// representation, exactly as it would sit in a storage column.
#[derive(Clone, Debug)]
pub struct StoredGame {
    pub board_text: String,
    pub score: u32,
    pub game_over: bool,
    pub won: bool,
    pub last_activity: Instant,
}

impl StoredGame {
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            board_text: codec::encode(session.board()),
            score: session.score(),
            game_over: session.game_over(),
            won: session.won(),
            last_activity: Instant::now(),
        }
    }
}

/// In-memory session store. The map mutex is held across every
/// read-modify-write, so moves against the same game are serialized and
/// never overwrite each other.
#[derive(Clone)]
pub struct GameStore {
    games: Arc<Mutex<HashMap<GameId, StoredGame>>>,
    next_id: Arc<AtomicU64>,
}

impl GameStore {
    pub fn new() -> Self {
        Self {
            games: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn allocate_id(&self) -> GameId {
        GameId::from(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    pub async fn put(&self, id: GameId, record: StoredGame) {
        self.games.lock().await.insert(id, record);
    }

    pub async fn get(&self, id: &GameId) -> Option<StoredGame> {
        self.games.lock().await.get(id).cloned()
    }

    /// Runs `f` on the stored record under the map lock and refreshes its
    /// activity timestamp. Returns `None` for an unknown id.
    pub async fn update<R>(&self, id: &GameId, f: impl FnOnce(&mut StoredGame) -> R) -> Option<R> {
        let mut games = self.games.lock().await;
        let record = games.get_mut(id)?;
        let result = f(record);
        record.last_activity = Instant::now();
        Some(result)
    }

    /// Drops every game idle for longer than `timeout` and returns the
    /// removed ids.
    pub async fn remove_inactive(&self, timeout: Duration) -> Vec<GameId> {
        let mut games = self.games.lock().await;
        let expired: Vec<GameId> = games
            .iter()
            .filter(|(_, record)| record.last_activity.elapsed() > timeout)
            .map(|(id, _)| id.clone())
            .collect();
        for id in &expired {
            games.remove(id);
        }
        expired
    }

    pub async fn len(&self) -> usize {
        self.games.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.games.lock().await.is_empty()
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}
