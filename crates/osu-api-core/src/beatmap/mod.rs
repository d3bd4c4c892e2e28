//! Beatmap model and mods-aware difficulty adjustment.

pub mod difficulty;
mod model;

pub use difficulty::{
    adjusted_approach_rate, adjusted_bpm, adjusted_circle_size, adjusted_health_drain,
    adjusted_overall_difficulty, adjusted_total_length, approach_rate_to_ms,
    ms_to_approach_rate, ms_to_overall_difficulty, overall_difficulty_to_ms,
};
pub use model::{Beatmap, RankedStatus};
