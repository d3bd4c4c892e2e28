pub mod api;
pub mod auth;
pub mod beatmap;
pub mod error;
pub mod game_mode;
pub mod mods;
pub mod score;
pub mod user;

mod serde_util;

pub use api::{ApiV1, ApiV2, HttpClient};
pub use auth::{
    CachedToken, ConstantStore, Credentials, FileStore, MemoryStore, OauthExchange, TokenCache,
    TokenExchange, TokenGrant, TokenStore,
};
pub use beatmap::{Beatmap, RankedStatus};
pub use error::{Error, Result};
pub use game_mode::GameMode;
pub use mods::{Mod, Mods};
pub use score::Score;
pub use user::User;
