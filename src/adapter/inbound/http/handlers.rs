//! Route handlers. Each one makes a single ledger call.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use super::error::ApiError;
use super::ADMIN_KEY_HEADER;
use crate::domain::{GameId, Selection, UserId};
use crate::ledger::{BetReceipt, BetRequest, GameSnapshot, Ledger};

/// Body of `POST /games/:id/bets`. Missing fields take zero values and are
/// then rejected by the ledger.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlaceBetBody {
    pub user_id: u64,
    pub selection: String,
    pub stake: i64,
}

/// Body of `POST /games/:id/settle`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SettleBody {
    pub result: String,
}

fn parse_game_id(raw: &str) -> Result<GameId, ApiError> {
    raw.parse::<u64>()
        .map(GameId::new)
        .map_err(|_| ApiError::BadId(raw.to_string()))
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(body)| body)
        .map_err(|rejection| ApiError::BadJson(rejection.body_text()))
}

pub async fn list_games(State(ledger): State<Arc<Ledger>>) -> Json<Vec<GameSnapshot>> {
    Json(ledger.list_games())
}

pub async fn get_game(
    State(ledger): State<Arc<Ledger>>,
    Path(id): Path<String>,
) -> Result<Json<GameSnapshot>, ApiError> {
    let game_id = parse_game_id(&id)?;
    ledger.game(game_id).map(Json).map_err(ApiError::NotFound)
}

pub async fn place_bet(
    State(ledger): State<Arc<Ledger>>,
    Path(id): Path<String>,
    body: Result<Json<PlaceBetBody>, JsonRejection>,
) -> Result<Json<BetReceipt>, ApiError> {
    let game_id = parse_game_id(&id)?;
    let body = json_body(body)?;

    let request = BetRequest::new(UserId::new(body.user_id), game_id, body.selection, body.stake);
    ledger
        .place_bet(request)
        .map(Json)
        .map_err(ApiError::Rejected)
}

pub async fn settle(
    State(ledger): State<Arc<Ledger>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<SettleBody>, JsonRejection>,
) -> Result<Json<GameSnapshot>, ApiError> {
    let game_id = parse_game_id(&id)?;
    let body = json_body(body)?;

    let admin_key = headers
        .get(ADMIN_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    // Credential before result, so a bad key is always a 403.
    ledger.authorize(admin_key).map_err(ApiError::Forbidden)?;
    let result: Selection = body.result.parse().map_err(ApiError::Rejected)?;

    ledger
        .settle(admin_key, game_id, result)
        .map(Json)
        .map_err(ApiError::Forbidden)
}

pub async fn fallback() -> ApiError {
    ApiError::RouteNotFound
}
