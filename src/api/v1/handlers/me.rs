/*
 * Responsibility
 * - GET /me (API key 必須)
 * - middleware が入れた ApiKeyCtx を extractor で受け取り、fingerprint を返す
 */
use axum::Json;

use crate::api::v1::dto::me::MeResponse;
use crate::api::v1::extractors::ApiKeyCtxExtractor;
use crate::services::auth::API_KEY_SCHEME;

pub async fn me(ApiKeyCtxExtractor(ctx): ApiKeyCtxExtractor) -> Json<MeResponse> {
    Json(MeResponse {
        scheme: API_KEY_SCHEME,
        key_fingerprint: ctx.fingerprint().to_string(),
        key_length: ctx.key().len(),
    })
}
