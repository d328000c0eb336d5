//! Characters: the immutable records the generator derives from a name.
//!
//! A [`Character`] is a pure function of its name and the digest oracle. The
//! battle engine only ever reads it.

mod avatar;
mod generate;

pub use avatar::Avatar;
pub use generate::{GenerateError, generate, generate_with};

use core::fmt;

use arrayvec::ArrayString;

const ID_LEN: usize = 8;

/// Short stable identifier: the first 8 hex characters of the digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CharacterId(ArrayString<ID_LEN>);

impl CharacterId {
    /// Number of digest characters kept in an id.
    pub const LEN: usize = ID_LEN;

    const SYSTEM: &'static str = "SYSTEM";

    /// Builds an id from arbitrary text of at most [`Self::LEN`] bytes.
    pub fn new(id: &str) -> Option<Self> {
        ArrayString::from(id).ok().map(Self)
    }

    /// Sentinel used on both sides of the closing log entry.
    ///
    /// Never collides with a generated id, which is always lowercase hex.
    pub fn system() -> Self {
        let mut id = ArrayString::new();
        id.push_str(Self::SYSTEM);
        Self(id)
    }

    pub fn is_system(&self) -> bool {
        self.0.as_str() == Self::SYSTEM
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Character class, chosen by `class segment % 3` in this fixed order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum CharacterClass {
    /// Tanky and slow.
    Warrior,
    /// Glass cannon.
    Mage,
    /// Fast and balanced.
    Rogue,
}

impl CharacterClass {
    /// Maps a digest byte onto a class.
    pub const fn from_segment(segment: u8) -> Self {
        match segment % 3 {
            0 => Self::Warrior,
            1 => Self::Mage,
            _ => Self::Rogue,
        }
    }

    /// Base stat block before digest bonuses.
    pub const fn base_stats(self) -> Stats {
        match self {
            Self::Warrior => Stats::uniform_hp(150, 15, 8, 8),
            Self::Mage => Stats::uniform_hp(100, 22, 3, 10),
            Self::Rogue => Stats::uniform_hp(120, 18, 5, 15),
        }
    }
}

/// Stat block. Signed so effective values can dip below zero under debuffs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Stats {
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
}

impl Stats {
    pub const fn new(hp: i32, max_hp: i32, attack: i32, defense: i32, speed: i32) -> Self {
        Self {
            hp,
            max_hp,
            attack,
            defense,
            speed,
        }
    }

    /// Stat block at full health.
    pub const fn uniform_hp(hp: i32, attack: i32, defense: i32, speed: i32) -> Self {
        Self::new(hp, hp, attack, defense, speed)
    }
}

/// `#rrggbb` colour taken verbatim from the digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct HexColor([u8; 3]);

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.0[0], self.0[1], self.0[2])
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn parse(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        let mut rgb = [0u8; 3];
        hex::decode_to_slice(digits, &mut rgb).ok()?;
        Some(Self(rgb))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.rgb();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::parse(&text).ok_or_else(|| format!("invalid colour '{text}'"))
    }
}

/// Generated combatant. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub id: CharacterId,
    /// Raw input name.
    pub name: String,
    pub class: CharacterClass,
    pub stats: Stats,
    pub color: HexColor,
    /// Full digest, retained for avatar rendering.
    pub hash: String,
}

impl Character {
    pub fn avatar(&self) -> Avatar {
        Avatar::from_character(self)
    }
}
