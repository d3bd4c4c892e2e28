use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use super::Mod;

/// Bitwise union of active modifiers.
///
/// Zero means "no modifiers". The wire encoding (`enabled_mods` in the old
/// API generation) is the raw bit value, so this serializes transparently
/// as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mods(u64);

impl Mods {
    pub const NOMOD: Mods = Mods(0);

    pub const fn from_bits(bits: u64) -> Self {
        Mods(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, flag: Mod) -> bool {
        self.0 & flag.bit() == flag.bit()
    }

    /// Every set modifier, in declaration order. Derived from the mask on
    /// each call, so the iteration is restartable.
    pub fn iter(self) -> impl Iterator<Item = Mod> {
        Mod::ALL.into_iter().filter(move |m| self.contains(*m))
    }

    /// Keep only score-affecting flags.
    pub fn effective(self) -> Mods {
        self.iter().filter(|m| m.is_effective()).collect()
    }

    /// Collapse Nightcore onto Double Time.
    ///
    /// Nightcore is a strict superset of Double Time server-side, so only
    /// the Double Time bit is meaningful downstream. Idempotent; a mask with
    /// both bits set collapses to Double Time alone.
    pub fn canonicalize(self) -> Mods {
        if self.contains(Mod::Nightcore) {
            Mods(self.0 & !Mod::Nightcore.bit() | Mod::DoubleTime.bit())
        } else {
            self
        }
    }

    /// Parse a concatenation of two-letter codes, e.g. `"HDDT"`.
    ///
    /// Codes are matched case-insensitively. Any unknown code or trailing
    /// garbage fails the whole parse with `None`, which is distinct from
    /// `Some(NOMOD)` for an empty string. Recognized non-effective codes
    /// (e.g. `SD`) parse fine but contribute nothing to the mask, and `NC`
    /// contributes the Double Time bit.
    pub fn from_short_codes(text: &str) -> Option<Mods> {
        if !text.is_ascii() || text.len() % 2 != 0 {
            return None;
        }

        let mut mods = Mods::NOMOD;
        let mut rest = text;
        while !rest.is_empty() {
            let (code, tail) = rest.split_at(2);
            rest = tail;

            let flag = Mod::from_short_code(&code.to_ascii_uppercase())?;
            if flag.is_effective() {
                mods |= if flag == Mod::Nightcore {
                    Mod::DoubleTime
                } else {
                    flag
                };
            }
        }
        Some(mods)
    }

    /// Concatenate the short codes of the given modifiers in input order.
    ///
    /// Callers must only pass modifiers that have a short code; modifiers
    /// without one are skipped.
    pub fn to_short_codes(mods: impl IntoIterator<Item = Mod>) -> String {
        mods.into_iter().filter_map(Mod::short_code).collect()
    }
}

impl fmt::Display for Mods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in self.iter() {
            if let Some(code) = m.short_code() {
                f.write_str(code)?;
            }
        }
        Ok(())
    }
}

impl From<Mod> for Mods {
    fn from(flag: Mod) -> Self {
        Mods(flag.bit())
    }
}

impl FromIterator<Mod> for Mods {
    fn from_iter<I: IntoIterator<Item = Mod>>(iter: I) -> Self {
        iter.into_iter().fold(Mods::NOMOD, |acc, m| acc | m)
    }
}

impl BitOr for Mods {
    type Output = Mods;

    fn bitor(self, rhs: Mods) -> Mods {
        Mods(self.0 | rhs.0)
    }
}

impl BitOr<Mod> for Mods {
    type Output = Mods;

    fn bitor(self, rhs: Mod) -> Mods {
        Mods(self.0 | rhs.bit())
    }
}

impl BitOrAssign for Mods {
    fn bitor_assign(&mut self, rhs: Mods) {
        self.0 |= rhs.0;
    }
}

impl BitOrAssign<Mod> for Mods {
    fn bitor_assign(&mut self, rhs: Mod) {
        self.0 |= rhs.bit();
    }
}
