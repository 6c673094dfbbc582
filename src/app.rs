/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config読み込み → AppState 生成 → Router 組み立て
 * - Middleware の適用 (HTTP 共通 / security headers / API key)
 * - axum::serve() で起動
 */
use std::{panic, process};

use anyhow::Result;
use axum::Router;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api,
    config::{AppEnv, Config},
    middleware,
    state::AppState,
};

/// Filter used when `RUST_LOG` is unset.
fn default_filter(app_env: AppEnv) -> &'static str {
    if app_env.is_production() {
        "info,tower_http=info"
    } else {
        "info,apikey_gate=debug,tower_http=debug"
    }
}

fn init_tracing(app_env: AppEnv) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(app_env)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(app_env: AppEnv) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        tracing::error!(%location, payload = ?info.payload_as_str(), "panic");

        // development: crash the whole process so we notice immediately.
        if app_env.is_production() {
            default_hook(info);
        } else {
            process::abort();
        }
    }))
}

pub async fn run() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.app_env);
    init_panic_hook(config.app_env);

    tracing::info!(
        app_env = ?config.app_env,
        addr = %config.addr,
        timeout = ?config.request_timeout,
        body_limit = config.request_body_limit_bytes,
        "starting API"
    );

    let state = AppState::new(config.app_env);
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .nest("/api/v1", api::v1::routes(state.clone()))
        .with_state(state);

    // security headers outermost, so 408/413 from the http layers carry them too
    let router = middleware::http::apply(router, config);
    middleware::security_headers::apply(router)
}
