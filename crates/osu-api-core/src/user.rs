use serde::{Deserialize, Serialize};

use crate::game_mode::GameMode;
use crate::serde_util;

/// A player profile, in the shape of the old API generation.
///
/// Hit counts and scores only cover ranked and approved beatmaps. The game
/// mode is not part of the payload; the API clients fill it in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "user_id", deserialize_with = "serde_util::from_str")]
    pub user_id: u32,

    #[serde(rename = "username")]
    pub user_name: String,

    #[serde(deserialize_with = "serde_util::from_str")]
    pub count300: i64,

    #[serde(deserialize_with = "serde_util::from_str")]
    pub count100: i64,

    #[serde(deserialize_with = "serde_util::from_str")]
    pub count50: i64,

    #[serde(rename = "playcount", deserialize_with = "serde_util::from_str")]
    pub play_count: i32,

    /// Best individual score on each ranked/approved beatmap, summed.
    #[serde(rename = "ranked_score", deserialize_with = "serde_util::from_str")]
    pub ranked_score: i64,

    /// Every score on ranked/approved beatmaps, summed.
    #[serde(rename = "total_score", deserialize_with = "serde_util::from_str")]
    pub total_score: i64,

    #[serde(rename = "pp_rank", deserialize_with = "serde_util::from_str")]
    pub rank: i32,

    #[serde(deserialize_with = "serde_util::from_str")]
    pub level: f64,

    #[serde(rename = "pp_raw", deserialize_with = "serde_util::from_str")]
    pub pp: f64,

    #[serde(deserialize_with = "serde_util::from_str")]
    pub accuracy: f64,

    #[serde(rename = "count_rank_ss", deserialize_with = "serde_util::from_str")]
    pub count_ss: i32,

    #[serde(rename = "count_rank_s", deserialize_with = "serde_util::from_str")]
    pub count_s: i32,

    #[serde(rename = "count_rank_a", deserialize_with = "serde_util::from_str")]
    pub count_a: i32,

    pub country: String,

    #[serde(default)]
    pub mode: GameMode,
}
