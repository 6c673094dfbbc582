//! `Authorization: ApiKey <key>` を検証 → ApiKeyCtx を extensions に入れる
//!
//! - header の解析は `services::auth::get_api_key` に任せる
//! - 解析結果が空文字 (scheme と key の間に空白が複数) の場合も 401 にする
//! - production ではエラーメッセージを伏せ、code だけ返す

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::ApiKeyCtx;
use crate::error::AppError;
use crate::services::auth::get_api_key;
use crate::state::AppState;

/// 保護したい route 群に API key 認証を掛ける。
///
/// 例：
/// ```ignore
/// let protected = Router::new().route("/me", get(me));
/// let protected = middleware::auth::api_key::apply(protected, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, api_key_middleware))
}

async fn api_key_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let reject = |err: AppError| {
        if state.app_env.is_production() {
            err.redacted()
        } else {
            err
        }
    };

    let key = match get_api_key(req.headers()) {
        Ok(key) => key,
        Err(err) => {
            tracing::warn!(error = %err, path = %req.uri().path(), "api key extraction failed");
            return Err(reject(err.into()));
        }
    };

    if key.is_empty() {
        tracing::warn!(path = %req.uri().path(), "api key is empty");
        return Err(reject(AppError::unauthorized(
            "EMPTY_API_KEY",
            "api key is empty",
        )));
    }

    let ctx = ApiKeyCtx::new(key);
    tracing::debug!(fingerprint = ctx.fingerprint(), "api key accepted");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}
