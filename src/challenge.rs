use crate::bigint_codec::minimal_bytes;
use crate::error::{DlnError, Result};
use crate::statement::Statement;
use crate::ITERATIONS;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512_256};

/// Length of a challenge in bytes: one bit per round.
pub const CHALLENGE_BYTES: usize = ITERATIONS / 8;

/// Externally derived challenge selecting the response branch of each round.
///
/// Bit `i` lives in byte `i / 8`, least-significant bit first.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Challenge([u8; CHALLENGE_BYTES]);

impl Challenge {
    pub fn new(bytes: [u8; CHALLENGE_BYTES]) -> Self {
        Challenge(bytes)
    }

    /// Accepts exactly `CHALLENGE_BYTES` bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; CHALLENGE_BYTES] = bytes.try_into().map_err(|_| {
            DlnError::InvalidArgument(format!(
                "challenge must be {} bytes, got {}",
                CHALLENGE_BYTES,
                bytes.len()
            ))
        })?;
        Ok(Challenge(bytes))
    }

    /// Challenge bit of round `i`. Panics if `i >= ITERATIONS`.
    pub fn bit(&self, i: usize) -> bool {
        (self.0[i / 8] >> (i % 8)) & 1 == 1
    }

    pub fn as_bytes(&self) -> &[u8; CHALLENGE_BYTES] {
        &self.0
    }

    /// Derives a challenge from the statement and a caller-chosen context
    /// label: the first `CHALLENGE_BYTES` of SHA-512/256 over the
    /// length-prefixed big-endian `h1`, `h2`, `N` and `context`.
    ///
    /// The hash does not cover the round commitments (the alphas), so this is
    /// not a Fiat-Shamir transform on its own: a prover who knows the
    /// challenge before committing can answer every round without `x`. Use it
    /// only where the commitments are bound elsewhere in the transcript, or
    /// derive the challenge over the alphas and pass it to [`Challenge::new`].
    #[tracing::instrument(name = "Deriving DLN challenge from the statement", skip_all)]
    pub fn from_statement(statement: &Statement, context: &[u8]) -> Self {
        let mut hasher = Sha512_256::new();
        for part in [&statement.h1, &statement.h2, &statement.n] {
            absorb(&mut hasher, &minimal_bytes(part));
        }
        absorb(&mut hasher, context);
        let digest = hasher.finalize();

        let mut bytes = [0u8; CHALLENGE_BYTES];
        bytes.copy_from_slice(&digest[..CHALLENGE_BYTES]);
        Challenge(bytes)
    }
}

fn absorb(hasher: &mut Sha512_256, part: &[u8]) {
    hasher.update((part.len() as u64).to_be_bytes());
    hasher.update(part);
}
