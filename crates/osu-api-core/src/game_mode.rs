use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{EnumString, FromRepr, IntoStaticStr};

/// Game mode (ruleset).
///
/// Serialized as the numeric mode used by the old API generation; the
/// strum strings are the ruleset path segments of the new one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, FromRepr, EnumString, IntoStaticStr,
)]
#[repr(u8)]
pub enum GameMode {
    #[default]
    #[strum(serialize = "osu")]
    Osu = 0,
    #[strum(serialize = "taiko")]
    Taiko = 1,
    #[strum(serialize = "fruits", serialize = "catch")]
    Ctb = 2,
    #[strum(serialize = "mania")]
    Mania = 3,
}

impl GameMode {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Ruleset name as used in v2 request paths ("osu", "taiko", "fruits",
    /// "mania").
    pub fn ruleset_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ruleset_name())
    }
}

impl Serialize for GameMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for GameMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: u8 = crate::serde_util::from_str(deserializer)?;
        Self::from_repr(value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid game mode {}", value)))
    }
}
