use crate::bigint_codec::decode;
use crate::challenge::Challenge;
use crate::dln_proof::ProofRound;
use crate::error::{DlnError, Result};
use crate::statement::Statement;
use crate::ITERATIONS;
use num_traits::Zero;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Verifies `ITERATIONS` rounds given as raw big-endian buffers.
///
/// Round `i` passes when `h1^t_i mod N` equals `alpha_i * h2 mod N` if
/// challenge bit `i` is set, `alpha_i mod N` otherwise.
///
/// # Errors
///
/// `MalformedInput` if the round counts are not `ITERATIONS`, the alpha and t
/// buffers do not all share one width, the challenge is not `CHALLENGE_BYTES` long, or
/// `h1`, `h2`, `N` is zero.
///
/// Returns `Ok(false)` for a well-formed proof that fails the check.
#[tracing::instrument(name = "Verifying DLN proof from byte buffers", skip_all)]
pub fn verify<A, T>(
    h1: &[u8],
    h2: &[u8],
    n: &[u8],
    alphas: &[A],
    ts: &[T],
    challenge: &[u8],
) -> Result<bool>
where
    A: AsRef<[u8]>,
    T: AsRef<[u8]>,
{
    let challenge = Challenge::from_slice(challenge).map_err(malformed)?;
    let statement = Statement::from_bytes(h1, h2, n).map_err(malformed)?;

    let alphas: Vec<&[u8]> = alphas.iter().map(|alpha| alpha.as_ref()).collect();
    let ts: Vec<&[u8]> = ts.iter().map(|t| t.as_ref()).collect();
    check_rounds(&statement, &alphas, &ts, &challenge)
}

/// Verifies typed proof rounds against a statement.
#[tracing::instrument(name = "Verifying DLN proof rounds", skip_all)]
pub fn verify_rounds(
    statement: &Statement,
    rounds: &[ProofRound],
    challenge: &Challenge,
) -> Result<bool> {
    let alphas: Vec<&[u8]> = rounds.iter().map(|round| round.alpha.as_slice()).collect();
    let ts: Vec<&[u8]> = rounds.iter().map(|round| round.t.as_slice()).collect();
    check_rounds(statement, &alphas, &ts, challenge)
}

/// All buffers of one role must share a single width.
fn ensure_uniform_width(role: &str, buffers: &[&[u8]]) -> Result<()> {
    let Some(first) = buffers.first() else {
        return Ok(());
    };
    match buffers.iter().position(|buffer| buffer.len() != first.len()) {
        Some(i) => Err(DlnError::MalformedInput(format!(
            "{role} buffer {i} has length {}, expected {}",
            buffers[i].len(),
            first.len()
        ))),
        None => Ok(()),
    }
}

/// Alphas and ts are written at the same agreed width.
pub(crate) fn ensure_round_widths(alphas: &[&[u8]], ts: &[&[u8]]) -> Result<()> {
    ensure_uniform_width("alpha", alphas)?;
    ensure_uniform_width("t", ts)?;
    match (alphas.first(), ts.first()) {
        (Some(alpha), Some(t)) if alpha.len() != t.len() => Err(DlnError::MalformedInput(
            format!("alpha width {} differs from t width {}", alpha.len(), t.len()),
        )),
        _ => Ok(()),
    }
}

fn malformed(err: DlnError) -> DlnError {
    DlnError::MalformedInput(err.to_string())
}

// Every round is evaluated; failures are counted rather than short-circuited.
fn check_rounds(
    statement: &Statement,
    alphas: &[&[u8]],
    ts: &[&[u8]],
    challenge: &Challenge,
) -> Result<bool> {
    if alphas.len() != ITERATIONS || ts.len() != ITERATIONS {
        return Err(DlnError::MalformedInput(format!(
            "expected {} alphas and ts, got {} and {}",
            ITERATIONS,
            alphas.len(),
            ts.len()
        )));
    }
    if statement.h1.is_zero() || statement.h2.is_zero() || statement.n.is_zero() {
        return Err(DlnError::MalformedInput(
            "h1, h2 and N must be positive".to_string(),
        ));
    }
    ensure_round_widths(alphas, ts)?;

    let round_holds = |i: usize| -> bool {
        let alpha = decode(alphas[i]);
        let t = decode(ts[i]);

        let lhs = statement.h1.modpow(&t, &statement.n);
        let rhs = if challenge.bit(i) {
            (alpha * &statement.h2) % &statement.n
        } else {
            alpha % &statement.n
        };
        lhs == rhs
    };

    #[cfg(feature = "parallel")]
    let failed = (0..ITERATIONS)
        .into_par_iter()
        .filter(|&i| !round_holds(i))
        .count();
    #[cfg(not(feature = "parallel"))]
    let failed = (0..ITERATIONS).filter(|&i| !round_holds(i)).count();

    if failed > 0 {
        tracing::debug!(failed_rounds = failed, "DLN proof rejected");
    }
    Ok(failed == 0)
}
