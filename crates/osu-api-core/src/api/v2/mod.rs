//! Client for the new API generation (`/api/v2/`, bearer-authenticated).
//!
//! Every request first asks the token cache for a valid bearer token, which
//! may trigger a client-credentials exchange. Responses are mapped onto the
//! v1-shaped models so callers see one schema regardless of generation.

pub mod convert;
pub mod models;

use serde_json::Value;
use tracing::debug;

use crate::api::{snippet, HttpClient};
use crate::auth::{
    Credentials, MemoryStore, OauthExchange, TokenCache, TokenExchange, TokenStore,
};
use crate::beatmap::Beatmap;
use crate::error::{Error, Result};
use crate::game_mode::GameMode;
use crate::mods::Mod;
use crate::score::Score;
use crate::user::User;

pub use convert::mods_from_acronyms;

pub const API_V2_BASE: &str = "https://osu.ppy.sh/api/v2/";

pub struct ApiV2<S = MemoryStore, E = OauthExchange> {
    client: HttpClient,
    tokens: TokenCache<S, E>,
}

impl ApiV2<MemoryStore> {
    /// Client with an in-memory token cache.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_token_cache(TokenCache::in_memory(credentials))
    }
}

impl<S: TokenStore, E: TokenExchange> ApiV2<S, E> {
    pub fn with_token_cache(tokens: TokenCache<S, E>) -> Self {
        Self::with_base_url(API_V2_BASE, tokens)
    }

    pub fn with_base_url(base_url: impl Into<String>, tokens: TokenCache<S, E>) -> Self {
        Self {
            client: HttpClient::new(base_url),
            tokens,
        }
    }

    async fn get(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Value> {
        debug!("GET {}", endpoint);
        let token = self.tokens.get_token().await?;
        let text = self.client.get_with_bearer(endpoint, &token, query).await?;
        serde_json::from_str(&text).map_err(|_| Error::UnexpectedResponse(snippet(&text)))
    }

    async fn post(&self, endpoint: &str) -> Result<Value> {
        debug!("POST {}", endpoint);
        let token = self.tokens.get_token().await?;
        let text = self.client.post_with_bearer(endpoint, &token, &[]).await?;
        serde_json::from_str(&text).map_err(|_| Error::UnexpectedResponse(snippet(&text)))
    }

    /// A beatmap with its difficulty attributes merged in, the way the old
    /// single-endpoint lookup reported them.
    pub async fn get_beatmap(&self, beatmap_id: u32) -> Result<Option<Beatmap>> {
        let info = match self.get(&format!("beatmaps/{}", beatmap_id), &[]).await {
            Err(Error::NotFound) => return Ok(None),
            other => other?,
        };
        let map: models::BeatmapV2 = serde_json::from_value(info)?;

        let attributes = match self
            .post(&format!("beatmaps/{}/attributes", beatmap_id))
            .await
        {
            Ok(value) => {
                let envelope: models::BeatmapAttributesEnvelopeV2 =
                    serde_json::from_value(value)?;
                Some(envelope.attributes)
            }
            Err(Error::NotFound) => None,
            Err(e) => return Err(e),
        };

        Ok(Some(convert::beatmap_from_v2(map, attributes)))
    }

    pub async fn get_user(&self, user_id: u32, mode: GameMode) -> Result<Option<User>> {
        self.fetch_user(&user_id.to_string(), "id", mode).await
    }

    pub async fn get_user_by_name(&self, username: &str, mode: GameMode) -> Result<Option<User>> {
        self.fetch_user(&urlencoding::encode(username), "username", mode)
            .await
    }

    async fn fetch_user(&self, user: &str, key: &str, mode: GameMode) -> Result<Option<User>> {
        let result = self
            .get(
                &format!("users/{}", user),
                &[
                    ("mode", mode.ruleset_name().to_string()),
                    ("key", key.to_string()),
                ],
            )
            .await;

        match result {
            Err(Error::NotFound) => Ok(None),
            Err(e) => Err(e),
            Ok(value) => {
                let v2: models::UserV2 = serde_json::from_value(value)?;
                Ok(Some(convert::user_from_v2(v2, mode)))
            }
        }
    }

    /// A user's best scores, `limit` 1-50.
    pub async fn get_user_top(
        &self,
        user_id: u32,
        mode: GameMode,
        limit: u32,
    ) -> Result<Vec<Score>> {
        let value = self
            .get(
                &format!("users/{}/scores/best", user_id),
                &[
                    ("mode", mode.ruleset_name().to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;

        let rows: Vec<models::ScoreV2> = serde_json::from_value(value)?;
        Ok(rows.into_iter().map(convert::score_from_v2).collect())
    }

    pub async fn get_user_recent(&self, user_id: u32, mode: GameMode) -> Result<Vec<Score>> {
        let result = self
            .get(
                &format!("users/{}/scores/recent", user_id),
                &[
                    ("mode", mode.ruleset_name().to_string()),
                    ("limit", "10".to_string()),
                ],
            )
            .await;

        let value = match result {
            Err(Error::NotFound) => return Ok(Vec::new()),
            other => other?,
        };
        if value.is_null() {
            return Ok(Vec::new());
        }

        let rows: Vec<models::ScoreV2> = serde_json::from_value(value)?;
        Ok(rows.into_iter().map(convert::score_from_v2).collect())
    }

    /// Top scores on a beatmap, optionally restricted to a mod combination.
    pub async fn get_beatmap_top(
        &self,
        beatmap_id: u32,
        mode: GameMode,
        mods: &[Mod],
    ) -> Result<Vec<Score>> {
        let mut query = vec![("mode", mode.ruleset_name().to_string())];
        for m in mods {
            if let Some(code) = m.short_code() {
                query.push(("mods[]", code.to_string()));
            }
        }

        let value = self
            .get(&format!("beatmaps/{}/scores", beatmap_id), &query)
            .await?;

        let envelope: models::BeatmapScoresV2 = serde_json::from_value(value)?;
        Ok(envelope
            .scores
            .into_iter()
            .map(|row| {
                let mut score = convert::score_from_v2(row);
                if score.beatmap_id == 0 {
                    score.beatmap_id = beatmap_id;
                }
                score
            })
            .collect())
    }

    /// A user's best score on a beatmap.
    pub async fn get_user_beatmap_score(
        &self,
        user_id: u32,
        beatmap_id: u32,
        mode: GameMode,
    ) -> Result<Option<Score>> {
        let result = self
            .get(
                &format!("beatmaps/{}/scores/users/{}", beatmap_id, user_id),
                &[("mode", mode.ruleset_name().to_string())],
            )
            .await;

        match result {
            Err(Error::NotFound) => Ok(None),
            Err(e) => Err(e),
            Ok(value) => {
                let envelope: models::UserBeatmapScoreV2 = serde_json::from_value(value)?;
                let mut score = convert::score_from_v2(envelope.score);
                if score.beatmap_id == 0 {
                    score.beatmap_id = beatmap_id;
                }
                Ok(Some(score))
            }
        }
    }
}
