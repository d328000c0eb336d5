//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when accessing oracles through an [`Env`](super::Env).
///
/// A missing oracle means the caller assembled the environment incorrectly;
/// neither the generator nor the battle engine can proceed without it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// DigestOracle is not available in the environment.
    #[error("DigestOracle not available")]
    DigestNotAvailable,

    /// RngOracle is not available in the environment.
    #[error("RngOracle not available")]
    RngNotAvailable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DigestNotAvailable => "ORACLE_DIGEST_NOT_AVAILABLE",
            Self::RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
        }
    }
}
