//! Traits describing the external collaborators of the core.
//!
//! Oracles expose the hashing primitive and the random source. The [`Env`]
//! aggregate bundles them so the generator and the battle engine can reach
//! everything they need without hard coupling to concrete implementations.
mod digest;
mod error;
mod rng;

pub use digest::{DigestOracle, MIN_DIGEST_LEN, Sha256Digest};
pub use error::OracleError;
pub use rng::{PcgRng, RngOracle, RollKind, SYSTEM_ROLLER, compute_seed};

/// Aggregates read-only oracles required by the generator and battle engine.
pub struct Env<'a, D, R>
where
    D: DigestOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    digest: Option<&'a D>,
    rng: Option<&'a R>,
}

// Manual impls: derives would demand `D: Copy`, which trait objects never are.
impl<D, R> Clone for Env<'_, D, R>
where
    D: DigestOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, R> Copy for Env<'_, D, R>
where
    D: DigestOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

pub type GameEnv<'a> = Env<'a, dyn DigestOracle + 'a, dyn RngOracle + 'a>;

impl<'a, D, R> Env<'a, D, R>
where
    D: DigestOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(digest: Option<&'a D>, rng: Option<&'a R>) -> Self {
        Self { digest, rng }
    }

    pub fn with_all(digest: &'a D, rng: &'a R) -> Self {
        Self::new(Some(digest), Some(rng))
    }

    pub fn empty() -> Self {
        Self {
            digest: None,
            rng: None,
        }
    }

    /// Returns the DigestOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::DigestNotAvailable` if no digest oracle was provided.
    pub fn digest(&self) -> Result<&'a D, OracleError> {
        self.digest.ok_or(OracleError::DigestNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl<'a, D, R> Env<'a, D, R>
where
    D: DigestOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv`.
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let digest: Option<&'a dyn DigestOracle> = self.digest.map(|digest| digest as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(digest, rng)
    }
}

/// Default oracles: SHA-256 digests and PCG rolls.
pub fn default_env() -> GameEnv<'static> {
    static DIGEST: Sha256Digest = Sha256Digest;
    static RNG: PcgRng = PcgRng;
    Env::with_all(&DIGEST, &RNG).as_game_env()
}
