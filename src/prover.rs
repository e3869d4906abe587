use crate::bigint_codec::{decode, encode};
use crate::challenge::Challenge;
use crate::dln_proof::ProofRound;
use crate::error::{DlnError, Result};
use crate::rand_nonce::RandomNonce;
use crate::statement::Witness;
use crate::ITERATIONS;
use num_bigint::BigUint;
use num_traits::Zero;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use secrecy::ExposeSecret;

/// Generates the `ITERATIONS` proof rounds from raw big-endian buffers.
///
/// For each round `i`: `r_i` uniform in `[0, p*q)`, `alpha_i = h1^r_i mod N`,
/// `t_i = (r_i + c_i * x) mod p*q`, both encoded into `output_byte_len` bytes.
///
/// # Errors
///
/// - `InvalidArgument` for an empty input buffer, a zero `output_byte_len`,
///   a challenge that is not `CHALLENGE_BYTES` long, or a zero `h1`, `N`, `p` or `q`
/// - `EncodingOverflow` if any alpha or t does not fit `output_byte_len`
/// - `RandomnessFailure` if `rng` fails
///
/// Nothing is returned unless every round succeeded.
#[allow(clippy::too_many_arguments)]
#[tracing::instrument(
    name = "Generating DLN proof from byte buffers",
    skip_all,
    fields(output_byte_len = output_byte_len)
)]
pub fn prove<R>(
    h1: &[u8],
    x: &[u8],
    p: &[u8],
    q: &[u8],
    n: &[u8],
    challenge: &[u8],
    output_byte_len: usize,
    rng: R,
) -> Result<Vec<(Vec<u8>, Vec<u8>)>>
where
    R: rand::CryptoRng + rand::RngCore,
{
    for (name, buffer) in [("h1", h1), ("x", x), ("p", p), ("q", q), ("N", n)] {
        if buffer.is_empty() {
            return Err(DlnError::InvalidArgument(format!(
                "{name} must not be empty"
            )));
        }
    }
    let challenge = Challenge::from_slice(challenge)?;
    let witness = Witness::from_bytes(x, p, q)?;

    let rounds = prove_rounds(
        &decode(h1),
        &decode(n),
        &witness,
        &challenge,
        output_byte_len,
        rng,
    )?;
    Ok(rounds.into_iter().map(ProofRound::into_pair).collect())
}

/// Typed core of [`prove`].
///
/// The nonces are drawn from `rng` in round order before any round is
/// computed, so a seeded source yields the same proof whether or not the
/// rounds run in parallel.
#[tracing::instrument(
    name = "Generating DLN proof rounds",
    skip_all,
    fields(output_byte_len = output_byte_len)
)]
pub fn prove_rounds<R>(
    h1: &BigUint,
    n: &BigUint,
    witness: &Witness,
    challenge: &Challenge,
    output_byte_len: usize,
    mut rng: R,
) -> Result<Vec<ProofRound>>
where
    R: rand::CryptoRng + rand::RngCore,
{
    if output_byte_len == 0 {
        return Err(DlnError::InvalidArgument(
            "output length must be positive".to_string(),
        ));
    }
    if h1.is_zero() || n.is_zero() {
        return Err(DlnError::InvalidArgument(
            "h1 and N must be positive".to_string(),
        ));
    }

    let pq = witness.order_bound();
    let x = witness.x.expose_secret().value();

    let nonces = (0..ITERATIONS)
        .map(|_| RandomNonce::new_rand(&pq, &mut rng))
        .collect::<Result<Vec<_>>>()?;

    let respond = |(i, nonce): (usize, RandomNonce)| -> Result<ProofRound> {
        let r = nonce.value();
        let alpha = h1.modpow(r, n);
        let t = if challenge.bit(i) {
            (r + x) % &pq
        } else {
            r % &pq
        };
        Ok(ProofRound {
            alpha: encode(&alpha, output_byte_len)?,
            t: encode(&t, output_byte_len)?,
        })
    };

    #[cfg(feature = "parallel")]
    let rounds = nonces
        .into_par_iter()
        .enumerate()
        .map(respond)
        .collect::<Result<Vec<_>>>()?;
    #[cfg(not(feature = "parallel"))]
    let rounds = nonces
        .into_iter()
        .enumerate()
        .map(respond)
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(rounds = rounds.len(), "DLN proof rounds generated");
    Ok(rounds)
}
