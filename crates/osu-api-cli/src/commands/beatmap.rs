//! Beatmap lookup command.

use anyhow::Result;
use osu_api_core::{ApiV2, Mods, TokenExchange, TokenStore};

use crate::commands::parse_mods;

pub async fn run<S: TokenStore, E: TokenExchange>(
    api: &ApiV2<S, E>,
    beatmap_id: u32,
    mods: Option<&str>,
    json: bool,
) -> Result<()> {
    let mods = match mods {
        Some(input) => parse_mods(input)?,
        None => Mods::NOMOD,
    };

    let Some(map) = api.get_beatmap(beatmap_id).await? else {
        eprintln!("Beatmap {} not found", beatmap_id);
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    let mut pairs = vec![
        ("Title", format!("{} - {} [{}]", map.artist, map.title, map.version)),
        ("Creator", map.creator.clone()),
        ("Status", format!("{:?}", map.approved)),
        ("Mode", map.mode.to_string()),
        ("Stars", format!("{:.2}", map.star_difficulty)),
    ];

    if mods.is_empty() {
        pairs.extend([
            ("AR", format!("{:.1}", map.approach_rate)),
            ("OD", format!("{:.1}", map.overall_difficulty)),
            ("CS", format!("{:.1}", map.circle_size)),
            ("HP", format!("{:.1}", map.health_drain)),
            ("BPM", format!("{:.2}", map.bpm)),
            ("Length", format!("{}s", map.total_length)),
        ]);
    } else {
        pairs.push(("Mods", mods.to_string()));
        pairs.extend([
            (
                "AR",
                format!("{:.1} -> {:.2}", map.approach_rate, map.approach_rate_with(mods)),
            ),
            (
                "OD",
                format!(
                    "{:.1} -> {:.2}",
                    map.overall_difficulty,
                    map.overall_difficulty_with(mods)
                ),
            ),
            (
                "CS",
                format!("{:.1} -> {:.2}", map.circle_size, map.circle_size_with(mods)),
            ),
            (
                "HP",
                format!("{:.1} -> {:.2}", map.health_drain, map.health_drain_with(mods)),
            ),
            ("BPM", format!("{:.2} -> {:.2}", map.bpm, map.bpm_with(mods))),
            (
                "Length",
                format!("{}s -> {}s", map.total_length, map.total_length_with(mods)),
            ),
        ]);
    }

    for (key, value) in pairs {
        println!("{:>8}: {}", key, value);
    }

    Ok(())
}
