//! HTTP clients for both API generations.
//!
//! [`ApiV1`] talks to the old key-authenticated endpoints, [`ApiV2`] to the
//! bearer-authenticated ones. Both decode into the same v1-shaped models.

mod client;
pub mod v1;
pub mod v2;

pub use client::HttpClient;
pub use v1::ApiV1;
pub use v2::ApiV2;

/// First 100 characters of an unparseable response, for error messages.
pub(crate) fn snippet(text: &str) -> String {
    const LIMIT: usize = 100;
    if text.chars().count() <= LIMIT {
        text.to_string()
    } else {
        let cut: String = text.chars().take(LIMIT).collect();
        format!("{}...", cut)
    }
}
