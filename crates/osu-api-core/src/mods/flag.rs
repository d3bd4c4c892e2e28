use strum::{EnumString, FromRepr};

/// A single gameplay modifier.
///
/// Discriminants are the wire bit values shared by both API generations and
/// must never change. Variants without a short code carry
/// `#[strum(disabled)]` and are bit-addressable only, never text-parseable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, EnumString)]
#[repr(u32)]
pub enum Mod {
    #[strum(serialize = "NF")]
    NoFail = 1,
    #[strum(serialize = "EZ")]
    Easy = 2,
    #[strum(disabled)]
    NoVideo = 4,
    #[strum(serialize = "HD")]
    Hidden = 8,
    #[strum(serialize = "HR")]
    HardRock = 16,
    #[strum(serialize = "SD")]
    SuddenDeath = 32,
    #[strum(serialize = "DT")]
    DoubleTime = 64,
    #[strum(disabled)]
    Relax = 128,
    #[strum(serialize = "HT")]
    HalfTime = 256,
    #[strum(serialize = "NC")]
    Nightcore = 512,
    #[strum(serialize = "FL")]
    Flashlight = 1024,
    #[strum(disabled)]
    Autoplay = 2048,
    #[strum(serialize = "SO")]
    SpunOut = 4096,
    #[strum(disabled)]
    Relax2 = 8192,
    #[strum(serialize = "PF")]
    Perfect = 16384,
    #[strum(disabled)]
    Key4 = 32768,
    #[strum(disabled)]
    Key5 = 65536,
    #[strum(disabled)]
    Key6 = 131072,
    #[strum(disabled)]
    Key7 = 262144,
    #[strum(disabled)]
    Key8 = 524288,
    #[strum(disabled)]
    FadeIn = 1048576,
    #[strum(disabled)]
    Random = 2097152,
    #[strum(disabled)]
    LastMod = 4194304,
}

impl Mod {
    /// Every modifier in declaration order. Mask decoding iterates this
    /// table, so decoded modifiers come out in declaration order, not
    /// numeric order.
    pub const ALL: [Mod; 23] = [
        Mod::NoFail,
        Mod::Easy,
        Mod::NoVideo,
        Mod::Hidden,
        Mod::HardRock,
        Mod::SuddenDeath,
        Mod::DoubleTime,
        Mod::Relax,
        Mod::HalfTime,
        Mod::Nightcore,
        Mod::Flashlight,
        Mod::Autoplay,
        Mod::SpunOut,
        Mod::Relax2,
        Mod::Perfect,
        Mod::Key4,
        Mod::Key5,
        Mod::Key6,
        Mod::Key7,
        Mod::Key8,
        Mod::FadeIn,
        Mod::Random,
        Mod::LastMod,
    ];

    pub fn bit(self) -> u64 {
        self as u32 as u64
    }

    pub fn from_bit(bit: u64) -> Option<Self> {
        u32::try_from(bit).ok().and_then(Self::from_repr)
    }

    /// Two-letter code used in textual mod strings, if this modifier has one.
    pub fn short_code(self) -> Option<&'static str> {
        match self {
            Self::NoFail => Some("NF"),
            Self::Easy => Some("EZ"),
            Self::Hidden => Some("HD"),
            Self::HardRock => Some("HR"),
            Self::SuddenDeath => Some("SD"),
            Self::DoubleTime => Some("DT"),
            Self::HalfTime => Some("HT"),
            Self::Nightcore => Some("NC"),
            Self::Flashlight => Some("FL"),
            Self::SpunOut => Some("SO"),
            Self::Perfect => Some("PF"),
            _ => None,
        }
    }

    /// Whether this modifier changes scoring or difficulty, as opposed to
    /// cosmetic and meta flags.
    pub fn is_effective(self) -> bool {
        matches!(
            self,
            Self::NoFail
                | Self::Easy
                | Self::Hidden
                | Self::HardRock
                | Self::DoubleTime
                | Self::HalfTime
                | Self::Nightcore
                | Self::Flashlight
                | Self::SpunOut
        )
    }

    /// Case-sensitive short-code lookup. Returns `None` for unknown codes
    /// and for modifiers that have no code.
    pub fn from_short_code(code: &str) -> Option<Self> {
        code.parse().ok()
    }

    /// All score-affecting modifiers in declaration order.
    pub fn effective_mods() -> impl Iterator<Item = Mod> {
        Self::ALL.into_iter().filter(|m| m.is_effective())
    }
}
