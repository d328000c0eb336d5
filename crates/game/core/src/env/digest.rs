//! Digest oracle: the text → hex hashing primitive characters are built from.
//!
//! The generator treats the digest as a black box. Any implementation that is
//! deterministic and returns at least [`MIN_DIGEST_LEN`] hex characters with a
//! good bit distribution satisfies the contract.

/// Shortest digest the character generator can partition.
pub const MIN_DIGEST_LEN: usize = 16;

/// Digest oracle for deterministic name hashing.
pub trait DigestOracle: Send + Sync {
    /// Hash `input` and render the result as a hexadecimal string.
    fn digest_hex(&self, input: &str) -> String;
}

/// SHA-256 over the UTF-8 bytes of the input, rendered as 64 lowercase hex
/// characters.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Digest;

impl DigestOracle for Sha256Digest {
    fn digest_hex(&self, input: &str) -> String {
        use sha2::{Digest, Sha256};

        let digest = Sha256::digest(input.as_bytes());
        hex::encode(digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_matches_known_vectors() {
        assert_eq!(
            Sha256Digest.digest_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            Sha256Digest.digest_hex("Trae"),
            "336b22f96369f1b7f9beab120eb0a5fe936ac8b7bd45480bf26383b280995ae4"
        );
    }

    #[test]
    fn digest_is_lowercase_and_full_length() {
        let digest = Sha256Digest.digest_hex("Bug");
        assert_eq!(digest.len(), 64);
        assert!(
            digest
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }
}
