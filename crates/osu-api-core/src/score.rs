use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game_mode::GameMode;
use crate::mods::{Mod, Mods};
use crate::serde_util;

/// A score on a beatmap, in the shape of the old API generation.
///
/// Some responses omit `beatmap_id` and none carry the game mode; the API
/// clients fill both in after decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    #[serde(
        rename = "beatmap_id",
        deserialize_with = "serde_util::from_str",
        default
    )]
    pub beatmap_id: u32,

    #[serde(deserialize_with = "serde_util::from_str")]
    pub score: i64,

    #[serde(rename = "maxcombo", deserialize_with = "serde_util::from_str")]
    pub max_combo: i32,

    #[serde(deserialize_with = "serde_util::from_str")]
    pub count300: i32,

    #[serde(deserialize_with = "serde_util::from_str")]
    pub count100: i32,

    #[serde(deserialize_with = "serde_util::from_str")]
    pub count50: i32,

    #[serde(rename = "countmiss", deserialize_with = "serde_util::from_str")]
    pub count_miss: i32,

    #[serde(rename = "countkatu", deserialize_with = "serde_util::from_str")]
    pub count_katu: i32,

    #[serde(rename = "countgeki", deserialize_with = "serde_util::from_str")]
    pub count_geki: i32,

    /// 1 if the map's maximum combo was reached, 0 otherwise.
    #[serde(deserialize_with = "serde_util::from_str")]
    pub perfect: i32,

    #[serde(rename = "enabled_mods", deserialize_with = "serde_util::mods")]
    pub mods: Mods,

    #[serde(rename = "user_id", deserialize_with = "serde_util::from_str")]
    pub user_id: u32,

    #[serde(deserialize_with = "serde_util::v1_date::deserialize", default)]
    pub date: Option<DateTime<Utc>>,

    pub rank: String,

    #[serde(deserialize_with = "serde_util::from_str_opt", default)]
    pub pp: Option<f64>,

    #[serde(default)]
    pub mode: GameMode,
}

impl Score {
    /// Hit accuracy in [0, 1].
    pub fn accuracy(&self) -> f64 {
        accuracy(
            self.count300 as f64,
            self.count100 as f64,
            self.count50 as f64,
            self.count_miss as f64,
        )
    }

    /// The active modifiers in declaration order.
    pub fn mods_list(&self) -> Vec<Mod> {
        self.mods.iter().collect()
    }
}

/// Weighted hit accuracy: 300s, 100s and 50s against the full object count.
pub fn accuracy(count300: f64, count100: f64, count50: f64, count_miss: f64) -> f64 {
    let sum = count50 * 50.0 + count100 * 100.0 + count300 * 300.0;
    let denom = (count50 + count100 + count300 + count_miss) * 300.0;
    sum / denom
}
