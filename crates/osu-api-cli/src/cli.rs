//! CLI argument definitions for osu-api.

use clap::{Parser, Subcommand};
use osu_api_core::GameMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "osu-api")]
#[command(about = "osu! statistics API client", version)]
pub struct Args {
    /// OAuth client ID (numeric)
    #[arg(long, env = "OSU_API_CLIENT_ID")]
    pub client_id: Option<String>,

    /// OAuth client secret
    #[arg(long, env = "OSU_API_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Cache the bearer token in this file between runs
    #[arg(long, value_name = "FILE")]
    pub token_cache: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Look up a beatmap
    Beatmap {
        beatmap_id: u32,
        /// Mods as a continuous short-code string (e.g. HDDT)
        #[arg(long, short)]
        mods: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Look up a user profile by ID or name
    User {
        user: String,
        /// Game mode (osu, taiko, fruits, mania)
        #[arg(long, short, default_value = "osu")]
        mode: GameMode,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// A user's best scores
    UserTop {
        user_id: u32,
        /// Game mode (osu, taiko, fruits, mania)
        #[arg(long, short, default_value = "osu")]
        mode: GameMode,
        /// Number of scores, 1-50
        #[arg(long, short, default_value = "10")]
        limit: u32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Top scores on a beatmap
    BeatmapScores {
        beatmap_id: u32,
        /// Game mode (osu, taiko, fruits, mania)
        #[arg(long, short, default_value = "osu")]
        mode: GameMode,
        /// Restrict to a mod combination (e.g. HDDT)
        #[arg(long)]
        mods: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// A user's recent scores
    Recent {
        user_id: u32,
        /// Game mode (osu, taiko, fruits, mania)
        #[arg(long, short, default_value = "osu")]
        mode: GameMode,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decode a mods string or bitmask
    Mods {
        /// Short-code string (HDDT) or numeric bitmask (72)
        input: String,
    },
}
