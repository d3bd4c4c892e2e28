mod cli;
mod commands;

use anyhow::{bail, Result};
use clap::Parser;
use osu_api_core::{ApiV2, Credentials, TokenCache, TokenExchange, TokenStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("osu_api=info".parse()?)
                .add_directive("osu_api_core=info".parse()?),
        )
        .init();

    let args = Args::parse();

    // decoding mods needs neither credentials nor network
    if let Command::Mods { input } = &args.command {
        return commands::mods::run(input);
    }

    let (Some(client_id), Some(client_secret)) = (args.client_id, args.client_secret) else {
        bail!(
            "No credentials: pass --client-id/--client-secret or set \
             OSU_API_CLIENT_ID/OSU_API_CLIENT_SECRET"
        );
    };
    let credentials = Credentials::new(client_id, client_secret)?;

    match args.token_cache {
        Some(path) => {
            info!("Caching bearer token in {}", path.display());
            let api = ApiV2::with_token_cache(TokenCache::in_file(credentials, path));
            dispatch(&api, args.command).await
        }
        None => {
            let api = ApiV2::new(credentials);
            dispatch(&api, args.command).await
        }
    }
}

async fn dispatch<S: TokenStore, E: TokenExchange>(
    api: &ApiV2<S, E>,
    command: Command,
) -> Result<()> {
    match command {
        Command::Beatmap {
            beatmap_id,
            mods,
            json,
        } => commands::beatmap::run(api, beatmap_id, mods.as_deref(), json).await,
        Command::User { user, mode, json } => commands::user::run(api, &user, mode, json).await,
        Command::UserTop {
            user_id,
            mode,
            limit,
            json,
        } => commands::scores::user_top(api, user_id, mode, limit, json).await,
        Command::BeatmapScores {
            beatmap_id,
            mode,
            mods,
            json,
        } => commands::scores::beatmap_scores(api, beatmap_id, mode, mods.as_deref(), json).await,
        Command::Recent {
            user_id,
            mode,
            json,
        } => commands::scores::recent(api, user_id, mode, json).await,
        Command::Mods { .. } => unreachable!("handled before credentials are required"),
    }
}
