//! Score listing commands.

use anyhow::Result;
use osu_api_core::{ApiV2, GameMode, Score, TokenExchange, TokenStore};

use crate::commands::parse_mods;

pub async fn user_top<S: TokenStore, E: TokenExchange>(
    api: &ApiV2<S, E>,
    user_id: u32,
    mode: GameMode,
    limit: u32,
    json: bool,
) -> Result<()> {
    let scores = api.get_user_top(user_id, mode, limit).await?;
    print_scores(&scores, json)
}

pub async fn beatmap_scores<S: TokenStore, E: TokenExchange>(
    api: &ApiV2<S, E>,
    beatmap_id: u32,
    mode: GameMode,
    mods: Option<&str>,
    json: bool,
) -> Result<()> {
    let mods = match mods {
        Some(input) => parse_mods(input)?.iter().collect::<Vec<_>>(),
        None => Vec::new(),
    };

    let scores = api.get_beatmap_top(beatmap_id, mode, &mods).await?;
    print_scores(&scores, json)
}

pub async fn recent<S: TokenStore, E: TokenExchange>(
    api: &ApiV2<S, E>,
    user_id: u32,
    mode: GameMode,
    json: bool,
) -> Result<()> {
    let scores = api.get_user_recent(user_id, mode).await?;
    print_scores(&scores, json)
}

fn print_scores(scores: &[Score], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(scores)?);
        return Ok(());
    }

    if scores.is_empty() {
        eprintln!("No scores");
        return Ok(());
    }

    for score in scores {
        let mods = if score.mods.is_empty() {
            String::new()
        } else {
            format!(" +{}", score.mods)
        };
        let pp = score
            .pp
            .map(|pp| format!("{:.0}pp", pp))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:>2} {:>9}{} {:>7.2}% {:>6} x{} b/{}",
            score.rank,
            score.score,
            mods,
            score.accuracy() * 100.0,
            pp,
            score.max_combo,
            score.beatmap_id,
        );
    }

    Ok(())
}
