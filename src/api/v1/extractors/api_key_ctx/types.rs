/*
 * Responsibility
 * - Handler から見える「API key 認証済みコンテキスト」の型
 * - middleware が header を解析して request extensions に格納し、handler はこの型だけを受け取る
 */

use crate::services::auth::fingerprint;

/// API key が提示されたリクエストに付与されるコンテキスト
///
/// - `key` は header から取り出した生の値 (ログやレスポンスには出さない)
/// - `fingerprint` は base64url(SHA-256(key))、相関用
#[derive(Clone)]
pub struct ApiKeyCtx {
    key: String,
    fingerprint: String,
}

impl ApiKeyCtx {
    pub fn new(key: String) -> Self {
        let fingerprint = fingerprint(&key);
        Self { key, fingerprint }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

// Debug never prints the raw key.
impl std::fmt::Debug for ApiKeyCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyCtx")
            .field("fingerprint", &self.fingerprint)
            .finish_non_exhaustive()
    }
}
