//! Deterministic character generation from a name digest.
//!
//! # Digest layout
//!
//! ```text
//! hex index   0..2   2..4   4..6   6..8   8..10  10..16
//! segment     class  hp     atk    def    spd    colour
//! ```
//!
//! The id is the first 8 hex characters. Stat bonuses are
//! `hp/4`, `atk/12`, `def/18`, `spd/20` (integer division of the byte value),
//! added on top of the class base table.

use arrayvec::ArrayString;

use super::{Character, CharacterClass, CharacterId, HexColor, Stats};
use crate::env::{GameEnv, MIN_DIGEST_LEN, OracleError};
use crate::error::{ErrorSeverity, GameError};

/// Errors raised when a digest oracle breaks its contract.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// The digest is too short or contains non-hex characters.
    #[error("digest '{digest}' is not a hex string of at least 16 characters")]
    InvalidDigest { digest: String },
}

impl GameError for GenerateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(err) => err.severity(),
            Self::InvalidDigest { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(err) => err.error_code(),
            Self::InvalidDigest { .. } => "GENERATE_INVALID_DIGEST",
        }
    }
}

/// Generates the character for `name` using SHA-256.
///
/// Total over all strings, the empty name included.
pub fn generate(name: &str) -> Character {
    use sha2::{Digest, Sha256};

    let digest = Sha256::digest(name.as_bytes());
    let mut prefix = [0u8; PREFIX_BYTES];
    prefix.copy_from_slice(&digest[..PREFIX_BYTES]);

    build(name, hex::encode(digest), prefix)
}

/// Generates the character for `name` with the environment's digest oracle.
///
/// # Errors
///
/// - [`GenerateError::Oracle`] if the environment has no digest oracle
/// - [`GenerateError::InvalidDigest`] if the oracle returns fewer than 16 hex
///   characters or anything that is not hex
pub fn generate_with(env: &GameEnv<'_>, name: &str) -> Result<Character, GenerateError> {
    let digest = env.digest()?.digest_hex(name).to_ascii_lowercase();
    let prefix = parse_prefix(&digest)?;
    let character = build(name, digest, prefix);

    tracing::debug!(
        name = %character.name,
        id = %character.id,
        class = %character.class,
        "generated character"
    );
    Ok(character)
}

/// Digest bytes consumed by the layout (16 hex characters).
const PREFIX_BYTES: usize = MIN_DIGEST_LEN / 2;

fn parse_prefix(digest: &str) -> Result<[u8; PREFIX_BYTES], GenerateError> {
    let invalid = || GenerateError::InvalidDigest {
        digest: digest.to_owned(),
    };

    if digest.len() < MIN_DIGEST_LEN || !digest.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let mut prefix = [0u8; PREFIX_BYTES];
    hex::decode_to_slice(&digest[..MIN_DIGEST_LEN], &mut prefix).map_err(|_| invalid())?;
    Ok(prefix)
}

/// Assembles the character. `digest` must be lowercase hex of at least
/// [`MIN_DIGEST_LEN`] characters whose first bytes are `prefix`.
fn build(name: &str, digest: String, prefix: [u8; PREFIX_BYTES]) -> Character {
    let [class_seg, hp_seg, atk_seg, def_seg, spd_seg, r, g, b] = prefix;

    let class = CharacterClass::from_segment(class_seg);
    let base = class.base_stats();

    let hp = base.hp + i32::from(hp_seg / 4);
    let stats = Stats {
        hp,
        max_hp: hp,
        attack: base.attack + i32::from(atk_seg / 12),
        defense: base.defense + i32::from(def_seg / 18),
        speed: base.speed + i32::from(spd_seg / 20),
    };

    let mut id = ArrayString::new();
    id.push_str(&digest[..CharacterId::LEN]);

    Character {
        id: CharacterId(id),
        name: name.to_owned(),
        class,
        stats,
        color: HexColor::new(r, g, b),
        hash: digest,
    }
}
