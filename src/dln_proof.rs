use crate::challenge::Challenge;
use crate::error::{DlnError, Result};
use crate::prover::prove_rounds;
use crate::statement::{Statement, Witness};
use crate::verifier::{ensure_round_widths, verify_rounds};
use crate::ITERATIONS;
use serde::{Deserialize, Serialize};

/// One round `(alpha, t)`, each a fixed-width big-endian buffer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProofRound {
    pub alpha: Vec<u8>,
    pub t: Vec<u8>,
}

impl ProofRound {
    pub fn into_pair(self) -> (Vec<u8>, Vec<u8>) {
        (self.alpha, self.t)
    }
}

/// DLN proof: `ITERATIONS` rounds in challenge-bit order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DlnProof {
    rounds: Vec<ProofRound>,
}

impl DlnProof {
    /// Proves knowledge of `x` with `h2 = h1^x mod N`.
    ///
    /// # Arguments
    ///
    /// * `statement` - The public `(h1, h2, N)`.
    /// * `witness` - The secret `(x, p, q)`.
    /// * `challenge` - The externally derived challenge bits.
    /// * `rng` - Cryptographically secure source for the round nonces.
    ///
    /// Buffers are sized to fit both `N - 1` and `p*q - 1`.
    #[tracing::instrument(name = "Creating DLN proof", skip_all)]
    pub fn new<R>(
        statement: &Statement,
        witness: &Witness,
        challenge: &Challenge,
        rng: R,
    ) -> Result<Self>
    where
        R: rand::CryptoRng + rand::RngCore,
    {
        let output_byte_len = witness.output_byte_len(statement);
        Self::with_output_len(statement, witness, challenge, output_byte_len, rng)
    }

    /// Same as [`DlnProof::new`] with a buffer width agreed out of band.
    pub fn with_output_len<R>(
        statement: &Statement,
        witness: &Witness,
        challenge: &Challenge,
        output_byte_len: usize,
        rng: R,
    ) -> Result<Self>
    where
        R: rand::CryptoRng + rand::RngCore,
    {
        let rounds = prove_rounds(
            &statement.h1,
            &statement.n,
            witness,
            challenge,
            output_byte_len,
            rng,
        )?;
        Ok(DlnProof { rounds })
    }

    pub fn from_rounds(rounds: Vec<ProofRound>) -> Result<Self> {
        if rounds.len() != ITERATIONS {
            return Err(DlnError::MalformedInput(format!(
                "expected {} rounds, got {}",
                ITERATIONS,
                rounds.len()
            )));
        }
        Ok(DlnProof { rounds })
    }

    pub fn rounds(&self) -> &[ProofRound] {
        &self.rounds
    }

    /// Returns `Ok(true)` if every round holds, `Ok(false)` if any fails.
    pub fn verify(&self, statement: &Statement, challenge: &Challenge) -> Result<bool> {
        verify_rounds(statement, &self.rounds, challenge)
    }

    /// Flattens the proof into `2 * ITERATIONS` buffers: every alpha, then every t.
    pub fn to_parts(&self) -> Vec<Vec<u8>> {
        let alphas = self.rounds.iter().map(|round| round.alpha.clone());
        let ts = self.rounds.iter().map(|round| round.t.clone());
        alphas.chain(ts).collect()
    }

    /// Parses the layout produced by [`DlnProof::to_parts`].
    pub fn from_parts<B: AsRef<[u8]>>(parts: &[B]) -> Result<Self> {
        if parts.len() != 2 * ITERATIONS {
            return Err(DlnError::MalformedInput(format!(
                "expected {} parts, got {}",
                2 * ITERATIONS,
                parts.len()
            )));
        }
        let parts: Vec<&[u8]> = parts.iter().map(|part| part.as_ref()).collect();
        let (alphas, ts) = parts.split_at(ITERATIONS);
        ensure_round_widths(alphas, ts)?;

        let rounds = alphas
            .iter()
            .zip(ts)
            .map(|(alpha, t)| ProofRound {
                alpha: alpha.to_vec(),
                t: t.to_vec(),
            })
            .collect();
        Ok(DlnProof { rounds })
    }
}
