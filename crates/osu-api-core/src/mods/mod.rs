//! Gameplay modifier flags and their bitmask encoding.
//!
//! Both API generations encode active modifiers as a single integer formed
//! by OR-ing per-modifier bit values. [`Mod`] is the closed set of flags,
//! [`Mods`] is the combined mask.

mod flag;
mod mask;

pub use flag::Mod;
pub use mask::Mods;
