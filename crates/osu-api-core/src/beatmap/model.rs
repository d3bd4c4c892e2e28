use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::FromRepr;

use crate::beatmap::difficulty;
use crate::game_mode::GameMode;
use crate::mods::Mods;
use crate::serde_util;

/// Approval state of a beatmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromRepr)]
#[repr(i8)]
pub enum RankedStatus {
    Unknown = -3,
    Graveyard = -2,
    Wip = -1,
    Pending = 0,
    Ranked = 1,
    Approved = 2,
    Qualified = 3,
    Loved = 4,
}

impl RankedStatus {
    pub fn from_i8(value: i8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Map the status string of the new API generation. Unrecognized
    /// statuses collapse to [`RankedStatus::Unknown`].
    pub fn from_status_str(status: &str) -> Self {
        match status {
            "ranked" => Self::Ranked,
            "approved" => Self::Approved,
            "qualified" => Self::Qualified,
            "loved" => Self::Loved,
            "pending" => Self::Pending,
            "wip" => Self::Wip,
            "graveyard" => Self::Graveyard,
            _ => Self::Unknown,
        }
    }
}

fn ranked_status<'de, D>(deserializer: D) -> Result<RankedStatus, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: i8 = serde_util::from_str(deserializer)?;
    Ok(RankedStatus::from_repr(value).unwrap_or(RankedStatus::Unknown))
}

/// A single difficulty of a beatmap set, in the shape of the old API
/// generation (the canonical model of this crate; new-generation responses
/// are mapped onto it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beatmap {
    #[serde(rename = "beatmap_id", deserialize_with = "serde_util::from_str")]
    pub id: u32,

    #[serde(rename = "beatmapset_id", deserialize_with = "serde_util::from_str")]
    pub set_id: u32,

    pub artist: String,
    pub title: String,

    /// Difficulty name within the set.
    pub version: String,

    pub creator: String,
    pub source: String,

    #[serde(deserialize_with = "ranked_status")]
    pub approved: RankedStatus,

    #[serde(
        rename = "approved_date",
        deserialize_with = "serde_util::v1_date::deserialize",
        default
    )]
    pub approved_date: Option<DateTime<Utc>>,

    #[serde(
        rename = "last_update",
        deserialize_with = "serde_util::v1_date::deserialize",
        default
    )]
    pub last_update: Option<DateTime<Utc>>,

    #[serde(deserialize_with = "serde_util::from_str")]
    pub bpm: f64,

    #[serde(rename = "difficultyrating", deserialize_with = "serde_util::from_str")]
    pub star_difficulty: f64,

    #[serde(rename = "diff_overall", deserialize_with = "serde_util::from_str")]
    pub overall_difficulty: f64,

    #[serde(rename = "diff_size", deserialize_with = "serde_util::from_str")]
    pub circle_size: f64,

    #[serde(rename = "diff_approach", deserialize_with = "serde_util::from_str")]
    pub approach_rate: f64,

    #[serde(rename = "diff_drain", deserialize_with = "serde_util::from_str")]
    pub health_drain: f64,

    /// Seconds from first to last note, excluding breaks.
    #[serde(rename = "hit_length", deserialize_with = "serde_util::from_str")]
    pub hit_length: i32,

    /// Seconds from first to last note, including breaks.
    #[serde(rename = "total_length", deserialize_with = "serde_util::from_str")]
    pub total_length: i32,

    pub mode: GameMode,

    /// Aim star component. Only the new API generation reports this.
    #[serde(default)]
    pub aim_difficulty: Option<f64>,

    /// Speed star component. Only the new API generation reports this.
    #[serde(default)]
    pub speed_difficulty: Option<f64>,
}

impl Beatmap {
    pub fn approach_rate_with(&self, mods: Mods) -> f64 {
        difficulty::adjusted_approach_rate(self.approach_rate, mods)
    }

    pub fn overall_difficulty_with(&self, mods: Mods) -> f64 {
        difficulty::adjusted_overall_difficulty(self.overall_difficulty, mods)
    }

    pub fn circle_size_with(&self, mods: Mods) -> f64 {
        difficulty::adjusted_circle_size(self.circle_size, mods)
    }

    pub fn health_drain_with(&self, mods: Mods) -> f64 {
        difficulty::adjusted_health_drain(self.health_drain, mods)
    }

    pub fn bpm_with(&self, mods: Mods) -> f64 {
        difficulty::adjusted_bpm(self.bpm, mods)
    }

    pub fn total_length_with(&self, mods: Mods) -> i32 {
        difficulty::adjusted_total_length(self.total_length, mods)
    }
}
