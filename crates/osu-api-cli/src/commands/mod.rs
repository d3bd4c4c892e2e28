pub mod beatmap;
pub mod mods;
pub mod scores;
pub mod user;

use anyhow::{bail, Result};
use osu_api_core::Mods;

/// Parse a continuous short-code string, rejecting unparseable input
/// instead of silently dropping it.
pub fn parse_mods(input: &str) -> Result<Mods> {
    match Mods::from_short_codes(input) {
        Some(mods) => Ok(mods),
        None => bail!("Unrecognized mods string: {}", input),
    }
}
