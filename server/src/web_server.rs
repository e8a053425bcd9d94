use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use common::GameId;
use common::game::{Direction, GameSession};
use common::log;

use crate::api_error::ApiError;
use crate::game_service::GameService;

#[derive(Clone)]
pub struct WebServerState {
    pub game_service: GameService,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameStateResponse {
    pub id: String,
    pub board: Vec<Vec<u32>>,
    pub score: u32,
    pub game_over: bool,
    pub won: bool,
}

impl GameStateResponse {
    fn from_session(session: &GameSession) -> Self {
        Self {
            id: session.id().to_string(),
            board: session.board().to_rows(),
            score: session.score(),
            game_over: session.game_over(),
            won: session.won(),
        }
    }
}

#[derive(Deserialize)]
pub struct NewGameParams {
    board_size: Option<i64>,
}

#[derive(Deserialize)]
pub struct MoveParams {
    direction: String,
}

pub async fn run_web_server(game_service: GameService, bind_address: &str) {
    let state = WebServerState { game_service };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/api/games", post(create_game))
        .route("/api/games/{id}", get(get_game))
        .route("/api/games/{id}/move", post(apply_move))
        .layer(cors)
        .with_state(state);

    log!("Web server listening on {}", bind_address);

    let listener = tokio::net::TcpListener::bind(bind_address)
        .await
        .expect("Failed to bind web server address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Web server error");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");
    log!("Shutdown signal received, stopping server...");
}

async fn create_game(
    State(state): State<WebServerState>,
    Query(params): Query<NewGameParams>,
) -> Result<Json<GameStateResponse>, ApiError> {
    let board_size = params
        .board_size
        .unwrap_or(state.game_service.default_board_size() as i64);
    let session = state.game_service.new_game(board_size).await?;
    Ok(Json(GameStateResponse::from_session(&session)))
}

async fn get_game(
    State(state): State<WebServerState>,
    Path(id): Path<String>,
) -> Result<Json<GameStateResponse>, ApiError> {
    let session = state.game_service.get_game(&GameId::new(id)).await?;
    Ok(Json(GameStateResponse::from_session(&session)))
}

async fn apply_move(
    State(state): State<WebServerState>,
    Path(id): Path<String>,
    Query(params): Query<MoveParams>,
) -> Result<Json<GameStateResponse>, ApiError> {
    let direction: Direction = params.direction.parse()?;
    let session = state
        .game_service
        .apply_move(&GameId::new(id), direction)
        .await?;
    Ok(Json(GameStateResponse::from_session(&session)))
}
