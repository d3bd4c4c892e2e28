//! OAuth client credentials and the bearer-token cache for the new API
//! generation.

mod credentials;
mod token;

pub use credentials::Credentials;
pub use token::{
    CachedToken, ConstantStore, FileStore, MemoryStore, OauthExchange, TokenCache,
    TokenExchange, TokenGrant, TokenStore, RENEWAL_MARGIN_SECS, TOKEN_URL,
};
