//! Mapping from the new wire shapes onto the v1-shaped models.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::beatmap::{Beatmap, RankedStatus};
use crate::game_mode::GameMode;
use crate::mods::{Mod, Mods};
use crate::score::Score;
use crate::user::User;

use super::models::{BeatmapAttributesV2, BeatmapV2, ScoreV2, UserV2};

/// Mod acronyms (`["HD", "DT"]`) to the legacy bitmask.
///
/// The new generation has mods the old encoding cannot express (CL, lazer
/// mods); unknown acronyms are skipped rather than failing the whole score.
pub fn mods_from_acronyms<S: AsRef<str>>(codes: &[S]) -> Mods {
    codes
        .iter()
        .filter_map(|code| {
            let code = code.as_ref();
            let parsed = Mod::from_short_code(code);
            if parsed.is_none() {
                debug!("Ignoring unknown mod acronym {}", code);
            }
            parsed
        })
        .collect()
}

fn parse_iso(date: Option<&str>) -> Option<DateTime<Utc>> {
    date.and_then(|d| DateTime::parse_from_rfc3339(d).ok())
        .map(|d| d.with_timezone(&Utc))
}

pub fn beatmap_from_v2(v2: BeatmapV2, attributes: Option<BeatmapAttributesV2>) -> Beatmap {
    let (artist, title, creator, source, ranked_date) = match v2.beatmapset {
        Some(set) => (set.artist, set.title, set.creator, set.source, set.ranked_date),
        None => Default::default(),
    };

    Beatmap {
        id: v2.id,
        set_id: v2.beatmapset_id,
        artist,
        title,
        version: v2.version,
        creator,
        source,
        approved: RankedStatus::from_status_str(&v2.status),
        approved_date: parse_iso(ranked_date.as_deref()),
        last_update: parse_iso(v2.last_updated.as_deref()),
        bpm: v2.bpm,
        star_difficulty: v2.difficulty_rating,
        overall_difficulty: v2.accuracy,
        circle_size: v2.cs,
        approach_rate: v2.ar,
        health_drain: v2.drain,
        hit_length: v2.hit_length,
        total_length: v2.total_length,
        mode: GameMode::from_u8(v2.mode_int).unwrap_or_default(),
        aim_difficulty: attributes.as_ref().and_then(|a| a.aim_difficulty),
        speed_difficulty: attributes.as_ref().and_then(|a| a.speed_difficulty),
    }
}

pub fn score_from_v2(v2: ScoreV2) -> Score {
    let beatmap_id = v2.beatmap.map(|b| b.id).or(v2.beatmap_id).unwrap_or(0);

    Score {
        beatmap_id,
        score: v2.score,
        max_combo: v2.max_combo,
        count300: v2.statistics.count_300,
        count100: v2.statistics.count_100,
        count50: v2.statistics.count_50,
        count_miss: v2.statistics.count_miss,
        count_katu: v2.statistics.count_katu,
        count_geki: v2.statistics.count_geki,
        perfect: i32::from(v2.perfect),
        mods: mods_from_acronyms(&v2.mods),
        user_id: v2.user_id,
        date: parse_iso(v2.created_at.as_deref()),
        rank: v2.rank,
        pp: v2.pp,
        mode: GameMode::from_u8(v2.mode_int).unwrap_or_default(),
    }
}

pub fn user_from_v2(v2: UserV2, mode: GameMode) -> User {
    let stats = v2.statistics;

    User {
        user_id: v2.id,
        user_name: v2.username,
        count300: stats.count_300,
        count100: stats.count_100,
        count50: stats.count_50,
        play_count: stats.play_count,
        ranked_score: stats.ranked_score,
        total_score: stats.total_score,
        rank: stats.global_rank.unwrap_or(0),
        level: stats.level.current,
        pp: stats.pp,
        accuracy: stats.hit_accuracy,
        count_ss: stats.grade_counts.ss,
        count_s: stats.grade_counts.s,
        count_a: stats.grade_counts.a,
        country: v2.country.map(|c| c.code).unwrap_or_default(),
        mode,
    }
}
