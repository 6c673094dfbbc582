/*
 * Responsibility
 * - GET /me の response DTO
 * - 生の key は含めない (fingerprint と長さのみ)
 */
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub scheme: &'static str,
    pub key_fingerprint: String,
    pub key_length: usize,
}
