//! User profile lookup command.

use anyhow::Result;
use osu_api_core::{ApiV2, GameMode, TokenExchange, TokenStore};

pub async fn run<S: TokenStore, E: TokenExchange>(
    api: &ApiV2<S, E>,
    user: &str,
    mode: GameMode,
    json: bool,
) -> Result<()> {
    // numeric input is an ID, anything else a name
    let profile = match user.parse::<u32>() {
        Ok(user_id) => api.get_user(user_id, mode).await?,
        Err(_) => api.get_user_by_name(user, mode).await?,
    };

    let Some(profile) = profile else {
        eprintln!("User {} not found", user);
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    let pairs = [
        ("User", format!("{} (#{})", profile.user_name, profile.user_id)),
        ("Country", profile.country.clone()),
        ("Mode", profile.mode.to_string()),
        ("Rank", format!("#{}", profile.rank)),
        ("pp", format!("{:.2}", profile.pp)),
        ("Accuracy", format!("{:.2}%", profile.accuracy)),
        ("Level", format!("{:.1}", profile.level)),
        ("Playcount", profile.play_count.to_string()),
        ("Ranked score", profile.ranked_score.to_string()),
        (
            "SS/S/A",
            format!("{}/{}/{}", profile.count_ss, profile.count_s, profile.count_a),
        ),
    ];

    for (key, value) in pairs {
        println!("{:>13}: {}", key, value);
    }

    Ok(())
}
