pub mod api_key;

pub use api_key::{API_KEY_SCHEME, ApiKeyError, fingerprint, get_api_key};
