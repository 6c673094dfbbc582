/*
 * Responsibility
 * - middleware の公開インターフェース
 * - http / security_headers は全 route、auth は保護したい route 群だけに掛ける
 */
pub mod auth;
pub mod http;
pub mod security_headers;
