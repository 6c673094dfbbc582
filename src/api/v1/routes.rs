/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health は公開、/me は API key 必須 (middleware::auth::api_key を route 群に適用)
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{health::health, me::me};
use crate::middleware;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new().route("/me", get(me));
    let protected = middleware::auth::api_key::apply(protected, state);

    Router::new().route("/health", get(health)).merge(protected)
}
