//! # DLN Proof Library
//!
//! This Rust library provides a non-interactive zero-knowledge proof that the prover knows a secret exponent `x` with `h2 = h1^x mod N`, where `N` is a modulus whose factorization is known only to the prover.
//!
//! ## Overview of DLN Proofs
//!
//! Threshold key-generation protocols ask every party to publish auxiliary commitment parameters `(h1, h2, N)`. The DLN proof certifies that these were generated honestly, i.e. that `h2` lies in the group generated by `h1`, without revealing the trapdoor `x`.
//!
//! - Statement: the public values `h1`, `h2` and `N`.
//! - Witness: the secret `x` together with `p`, `q`, whose product `p*q` bounds the order of `h1`.
//! - Challenge: 128 bits derived outside of this library, bit `i` selecting the response branch of round `i`. It must not be known to the prover before the alphas are fixed, so a hash used to derive it has to cover the commitments or a transcript that binds them.
//!
//! ## Algorithm
//!
//! The proof is a sigma protocol repeated `ITERATIONS` times. For each round `i`:
//!
//! - Proving: draw `r_i` uniformly from `[0, p*q)`, then `(alpha_i, t_i) = (h1^r_i mod N, r_i + c_i * x mod p*q)`
//! - Verification: `h1^t_i = alpha_i * h2^c_i mod N`
//!
//! A false statement passes a round with probability at most one half, so the soundness error is `2^-ITERATIONS`.
//!
//! ## Encoding
//!
//! All integers cross the API as big-endian unsigned buffers of a width agreed by both parties. An integer that does not fit its buffer is rejected with [`DlnError::EncodingOverflow`], never truncated.
//!
//! ## Usage
//!
//! ```
//! use dln_proof::{Challenge, DlnProof, Statement, Witness};
//! use rand_core::OsRng;
//!
//! // N = 23 * 11, p*q = 11 * 5, h1 = 4 of order 55, h2 = 4^7 mod N
//! let statement = Statement::new(4u32.into(), 192u32.into(), 253u32.into()).unwrap();
//! let witness = Witness::new(7u32.into(), 11u32.into(), 5u32.into()).unwrap();
//! let challenge = Challenge::from_statement(&statement, b"keygen round 1");
//!
//! let proof = DlnProof::new(&statement, &witness, &challenge, OsRng).unwrap();
//! assert!(proof.verify(&statement, &challenge).unwrap());
//! ```
//!
//! ## Features
//!
//! - `parallel`: spreads the independent rounds over a rayon worker pool.
//! - `telemetry`: exposes the `telemetry` module to install a bunyan JSON subscriber.

pub mod bigint_codec;
pub mod challenge;
pub mod dln_proof;
pub mod error;
pub mod prover;
pub mod rand_nonce;
pub mod statement;
pub mod verifier;

#[cfg(feature = "telemetry")]
pub mod telemetry;

#[cfg(test)]
mod test_vectors;

/// Number of independent rounds, i.e. the soundness parameter in bits.
pub const ITERATIONS: usize = 128;

pub use crate::challenge::{Challenge, CHALLENGE_BYTES};
pub use crate::dln_proof::{DlnProof, ProofRound};
pub use crate::error::{DlnError, Result};
pub use crate::prover::prove;
pub use crate::statement::{Statement, Witness};
pub use crate::verifier::verify;
