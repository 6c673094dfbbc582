/*
 * Responsibility
 * - HTTP から切り離したドメインロジック (header parsing / fingerprint など)
 */
pub mod auth;
