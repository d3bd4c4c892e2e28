//! Wire shapes of the new API generation.
//!
//! Only the fields the v1-shaped models need are listed; everything else in
//! the responses is ignored.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct BeatmapV2 {
    pub id: u32,
    pub beatmapset_id: u32,
    pub version: String,
    pub status: String,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub bpm: f64,
    pub difficulty_rating: f64,
    /// Overall difficulty.
    pub accuracy: f64,
    pub ar: f64,
    pub cs: f64,
    pub drain: f64,
    #[serde(default)]
    pub hit_length: i32,
    #[serde(default)]
    pub total_length: i32,
    pub mode_int: u8,
    #[serde(default)]
    pub beatmapset: Option<BeatmapsetV2>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BeatmapsetV2 {
    pub title: String,
    pub artist: String,
    pub creator: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub ranked_date: Option<String>,
}

/// `beatmaps/{id}/attributes` response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct BeatmapAttributesEnvelopeV2 {
    pub attributes: BeatmapAttributesV2,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BeatmapAttributesV2 {
    #[serde(default)]
    pub aim_difficulty: Option<f64>,
    #[serde(default)]
    pub speed_difficulty: Option<f64>,
}

/// A score row. Depending on the endpoint the beatmap reference is either
/// nested (`beatmap.id`) or flat (`beatmap_id`); both are optional here and
/// the converter takes whichever is present.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreV2 {
    pub score: i64,
    pub max_combo: i32,
    pub perfect: bool,
    /// Mod acronyms, e.g. `["HD", "DT"]`.
    #[serde(default)]
    pub mods: Vec<String>,
    pub user_id: u32,
    #[serde(default)]
    pub created_at: Option<String>,
    pub rank: String,
    #[serde(default)]
    pub pp: Option<f64>,
    pub mode_int: u8,
    pub statistics: ScoreStatisticsV2,
    #[serde(default)]
    pub beatmap: Option<BeatmapRefV2>,
    #[serde(default)]
    pub beatmap_id: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BeatmapRefV2 {
    pub id: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoreStatisticsV2 {
    pub count_300: i32,
    pub count_100: i32,
    pub count_50: i32,
    pub count_miss: i32,
    #[serde(default)]
    pub count_katu: i32,
    #[serde(default)]
    pub count_geki: i32,
}

/// `beatmaps/{id}/scores` response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct BeatmapScoresV2 {
    pub scores: Vec<ScoreV2>,
}

/// `beatmaps/{id}/scores/users/{user}` response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct UserBeatmapScoreV2 {
    pub score: ScoreV2,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserV2 {
    pub id: u32,
    pub username: String,
    #[serde(default)]
    pub country: Option<CountryV2>,
    pub statistics: UserStatisticsV2,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryV2 {
    pub code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserStatisticsV2 {
    pub count_300: i64,
    pub count_100: i64,
    pub count_50: i64,
    pub play_count: i32,
    pub ranked_score: i64,
    pub total_score: i64,
    /// Absent for inactive players.
    #[serde(default)]
    pub global_rank: Option<i32>,
    pub pp: f64,
    pub hit_accuracy: f64,
    pub level: LevelV2,
    pub grade_counts: GradeCountsV2,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LevelV2 {
    pub current: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GradeCountsV2 {
    pub ss: i32,
    pub s: i32,
    pub a: i32,
}
