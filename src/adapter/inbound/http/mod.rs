//! HTTP adapter over the [`Ledger`].
//!
//! | Route                     | Ledger call           | Error status |
//! |---------------------------|-----------------------|--------------|
//! | `GET /games`              | [`Ledger::list_games`] | -           |
//! | `GET /games/:id`          | [`Ledger::game`]       | 404         |
//! | `POST /games/:id/bets`    | [`Ledger::place_bet`]  | 400         |
//! | `POST /games/:id/settle`  | [`Ledger::settle`]     | 403         |
//!
//! `GET /games/` is accepted as the list route too. A non-numeric id or a
//! malformed JSON body is a 400 on every route. Settlement checks the
//! admin key before it parses the result.
//! Handlers hold no state of their own and never await while the ledger
//! lock is held.

pub mod error;
pub mod handlers;

use std::future::Future;
use std::sync::Arc;

use axum::http::{header, HeaderName, Method};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::ledger::Ledger;

/// Header carrying the settlement credential.
pub const ADMIN_KEY_HEADER: HeaderName = HeaderName::from_static("x-admin-key");

/// Build the router for a ledger.
pub fn router(ledger: Arc<Ledger>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, ADMIN_KEY_HEADER]);

    Router::new()
        .route("/games", get(handlers::list_games))
        .route("/games/", get(handlers::list_games))
        .route("/games/:id", get(handlers::get_game))
        .route("/games/:id/bets", post(handlers::place_bet))
        .route("/games/:id/settle", post(handlers::settle))
        .fallback(handlers::fallback)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ledger)
}

/// Serve the ledger on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, ledger: Arc<Ledger>, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Listening");
    }
    axum::serve(listener, router(ledger))
        .with_graceful_shutdown(shutdown)
        .await
}
