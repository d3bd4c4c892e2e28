//! Mods-aware difficulty adjustment.
//!
//! All functions are pure. Approach rate and overall difficulty are scaled
//! through their millisecond reaction-window form, because the time-warping
//! modifiers act on time, not on the 0-10 difficulty scale. Easy and Hard
//! Rock scale the difficulty value itself and are applied first; the Hard
//! Rock cap lands before any time scaling.

use crate::mods::{Mod, Mods};

/// Approach-rate preempt window in milliseconds. Piecewise linear with the
/// break at ar=5 (both branches yield 1200 there).
pub fn approach_rate_to_ms(ar: f64) -> f64 {
    if ar < 5.0 {
        1800.0 - ar * 120.0
    } else {
        1200.0 - 150.0 * (ar - 5.0)
    }
}

/// Exact inverse of [`approach_rate_to_ms`].
pub fn ms_to_approach_rate(ms: f64) -> f64 {
    if ms > 1200.0 {
        (1800.0 - ms) / 120.0
    } else {
        (1200.0 - ms) / 150.0 + 5.0
    }
}

/// Overall-difficulty hit window in milliseconds.
///
/// The ceiling matches how the scoring system quantizes the window, which
/// makes this NOT invertible; see [`ms_to_overall_difficulty`].
pub fn overall_difficulty_to_ms(od: f64) -> f64 {
    79.5 - (6.0 * od).ceil()
}

/// Window back to overall difficulty.
///
/// Not a true inverse of [`overall_difficulty_to_ms`]: the ceiling there
/// loses information, and the asymmetry is deliberate.
pub fn ms_to_overall_difficulty(ms: f64) -> f64 {
    (79.5 - ms) / 6.0
}

pub fn adjusted_approach_rate(approach_rate: f64, mods: Mods) -> f64 {
    let mods = mods.canonicalize();
    let mut ar = approach_rate;
    if mods.contains(Mod::Easy) {
        ar /= 2.0;
    }
    if mods.contains(Mod::HardRock) {
        ar = (ar * 1.4).min(10.0);
    }
    if mods.contains(Mod::DoubleTime) {
        ar = ms_to_approach_rate(approach_rate_to_ms(ar) * 2.0 / 3.0);
    }
    if mods.contains(Mod::HalfTime) {
        ar = ms_to_approach_rate(approach_rate_to_ms(ar) * 4.0 / 3.0);
    }
    ar
}

pub fn adjusted_overall_difficulty(overall_difficulty: f64, mods: Mods) -> f64 {
    let mods = mods.canonicalize();
    let mut od = overall_difficulty;
    if mods.contains(Mod::Easy) {
        od /= 2.0;
    }
    if mods.contains(Mod::HardRock) {
        od = (od * 1.4).min(10.0);
    }
    if mods.contains(Mod::DoubleTime) {
        od = ms_to_overall_difficulty(overall_difficulty_to_ms(od) * 2.0 / 3.0);
    }
    if mods.contains(Mod::HalfTime) {
        od = ms_to_overall_difficulty(overall_difficulty_to_ms(od) * 4.0 / 3.0);
    }
    od
}

pub fn adjusted_circle_size(circle_size: f64, mods: Mods) -> f64 {
    let mut cs = circle_size;
    if mods.contains(Mod::Easy) {
        cs /= 2.0;
    }
    if mods.contains(Mod::HardRock) {
        cs *= 1.3;
    }
    cs
}

/// Health drain is scaled by Easy and Hard Rock only; the time-warping
/// modifiers deliberately leave it untouched.
pub fn adjusted_health_drain(health_drain: f64, mods: Mods) -> f64 {
    let mut hp = health_drain;
    if mods.contains(Mod::Easy) {
        hp /= 2.0;
    }
    if mods.contains(Mod::HardRock) {
        hp *= 1.4;
    }
    hp
}

pub fn adjusted_bpm(bpm: f64, mods: Mods) -> f64 {
    let mods = mods.canonicalize();
    let mut bpm = bpm;
    if mods.contains(Mod::DoubleTime) {
        bpm *= 1.5;
    }
    if mods.contains(Mod::HalfTime) {
        bpm *= 0.75;
    }
    bpm
}

/// Total length in seconds, truncated to whole seconds only after scaling.
pub fn adjusted_total_length(total_length: i32, mods: Mods) -> i32 {
    let mods = mods.canonicalize();
    let mut length = total_length as f64;
    if mods.contains(Mod::DoubleTime) {
        // multiply before dividing so exact thirds stay exact (258 * 2 / 3
        // must truncate to 172, not 171)
        length = length * 2.0 / 3.0;
    }
    if mods.contains(Mod::HalfTime) {
        length = length * 4.0 / 3.0;
    }
    length as i32
}
