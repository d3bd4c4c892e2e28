//! Mods decoding command.

use anyhow::Result;
use osu_api_core::Mods;

use crate::commands::parse_mods;

pub fn run(input: &str) -> Result<()> {
    // numeric input is a raw bitmask, anything else a short-code string
    let mods = match input.parse::<u64>() {
        Ok(bits) => Mods::from_bits(bits),
        Err(_) => parse_mods(input)?,
    };

    if mods.is_empty() {
        println!("No mods");
        return Ok(());
    }

    for m in mods.iter() {
        println!(
            "{:>10?}  bit {:>7}  code {}  {}",
            m,
            m.bit(),
            m.short_code().unwrap_or("--"),
            if m.is_effective() { "effective" } else { "cosmetic" },
        );
    }

    let canonical = mods.canonicalize();
    println!("{:>10}: {}", "mask", mods.bits());
    if canonical != mods {
        println!("{:>10}: {} ({})", "canonical", canonical.bits(), canonical);
    }
    let effective = mods.effective();
    if effective != mods {
        println!("{:>10}: {}", "effective", effective);
    }

    Ok(())
}
