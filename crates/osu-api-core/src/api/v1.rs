//! Client for the old API generation (`/api/`, key-authenticated).

use serde_json::Value;
use tracing::debug;

use crate::api::{snippet, HttpClient};
use crate::beatmap::Beatmap;
use crate::error::{Error, Result};
use crate::game_mode::GameMode;
use crate::score::Score;
use crate::user::User;

pub const API_V1_BASE: &str = "https://osu.ppy.sh/api/";

const GET_BEATMAPS: &str = "get_beatmaps";
const GET_USER_BEST: &str = "get_user_best";
const GET_SCORES: &str = "get_scores";
const GET_USER: &str = "get_user";

/// Body the server sends back for a rejected key, with HTTP 200.
const INVALID_API_KEY: &str = "Please provide a valid API key.";

pub struct ApiV1 {
    client: HttpClient,
    key: String,
}

impl ApiV1 {
    /// The key must be 40 lowercase hex characters; anything else fails
    /// fast without touching the network.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(API_V1_BASE, key)
    }

    pub fn with_base_url(base_url: impl Into<String>, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.len() != 40 || !key.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(Error::InvalidApiKeyFormat);
        }
        Ok(Self {
            client: HttpClient::new(base_url),
            key,
        })
    }

    async fn get(&self, command: &str, params: &[(&str, String)]) -> Result<Value> {
        debug!("GET {}", command);

        let mut query: Vec<(&str, String)> = Vec::with_capacity(params.len() + 1);
        query.push(("k", self.key.clone()));
        query.extend_from_slice(params);

        let text = self.client.get(command, &query).await?;
        if text == INVALID_API_KEY {
            return Err(Error::InvalidApiKey);
        }
        serde_json::from_str(&text).map_err(|_| Error::UnexpectedResponse(snippet(&text)))
    }

    pub async fn get_beatmap(&self, beatmap_id: u32) -> Result<Option<Beatmap>> {
        let value = self
            .get(GET_BEATMAPS, &[("b", beatmap_id.to_string())])
            .await?;
        let maps: Vec<Beatmap> = serde_json::from_value(value)?;
        Ok(maps.into_iter().next())
    }

    /// All difficulties of a beatmap set, in no particular order.
    pub async fn get_beatmap_set(&self, set_id: u32) -> Result<Vec<Beatmap>> {
        let value = self.get(GET_BEATMAPS, &[("s", set_id.to_string())]).await?;
        Ok(serde_json::from_value(value)?)
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
                GET_USER_BEST,
                &[
                    ("u", user_id.to_string()),
                    ("m", (mode as u8).to_string()),
                    ("limit", limit.to_string()),
                    ("type", "id".to_string()),
                ],
            )
            .await?;

        let mut scores: Vec<Score> = serde_json::from_value(value)?;
        for score in &mut scores {
            score.mode = mode;
        }
        Ok(scores)
    }

    /// Top scores on a beatmap. The rows come back without a beatmap id,
    /// so it is filled in here.
    pub async fn get_beatmap_top(&self, beatmap_id: u32, mode: GameMode) -> Result<Vec<Score>> {
        let value = self
            .get(
                GET_SCORES,
                &[
                    ("b", beatmap_id.to_string()),
                    ("m", (mode as u8).to_string()),
                ],
            )
            .await?;

        let mut scores: Vec<Score> = serde_json::from_value(value)?;
        for score in &mut scores {
            score.beatmap_id = beatmap_id;
            score.mode = mode;
        }
        Ok(scores)
    }

    /// A user's best score on a beatmap.
    pub async fn get_score(
        &self,
        user_id: u32,
        beatmap_id: u32,
        mode: GameMode,
    ) -> Result<Option<Score>> {
        let value = self
            .get(
                GET_SCORES,
                &[
                    ("b", beatmap_id.to_string()),
                    ("u", user_id.to_string()),
                    ("m", (mode as u8).to_string()),
                ],
            )
            .await?;

        if value.is_null() {
            return Ok(None);
        }

        let scores: Vec<Score> = serde_json::from_value(value)?;
        Ok(scores.into_iter().next().map(|mut score| {
            score.beatmap_id = beatmap_id;
            score.mode = mode;
            score
        }))
    }

    pub async fn get_user(&self, user_id: u32, mode: GameMode) -> Result<Option<User>> {
        self.fetch_user(&[
            ("u", user_id.to_string()),
            ("m", (mode as u8).to_string()),
            ("type", "id".to_string()),
        ], mode)
        .await
    }

    pub async fn get_user_by_name(&self, username: &str, mode: GameMode) -> Result<Option<User>> {
        self.fetch_user(&[
            ("u", username.to_string()),
            ("m", (mode as u8).to_string()),
            ("type", "string".to_string()),
        ], mode)
        .await
    }

    async fn fetch_user(&self, params: &[(&str, String)], mode: GameMode) -> Result<Option<User>> {
        let value = self.get(GET_USER, params).await?;
        let users: Vec<User> = serde_json::from_value(value)?;
        Ok(users.into_iter().next().map(|mut user| {
            user.mode = mode;
            user
        }))
    }
}
