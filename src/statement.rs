use crate::bigint_codec::{byte_len, decode};
use crate::error::{DlnError, Result};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use secrecy::zeroize::Zeroize;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// Public statement `(h1, h2, N)`: the prover claims to know `x` with
/// `h2 = h1^x mod N`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Statement {
    pub h1: BigUint,
    pub h2: BigUint,
    pub n: BigUint,
}

impl Statement {
    /// Builds a statement, rejecting any component that is not strictly positive.
    pub fn new(h1: BigUint, h2: BigUint, n: BigUint) -> Result<Statement> {
        for (name, value) in [("h1", &h1), ("h2", &h2), ("N", &n)] {
            if value.is_zero() {
                return Err(DlnError::InvalidArgument(format!(
                    "{name} must be positive"
                )));
            }
        }
        Ok(Statement { h1, h2, n })
    }

    pub fn from_bytes(h1: &[u8], h2: &[u8], n: &[u8]) -> Result<Statement> {
        Statement::new(decode(h1), decode(h2), decode(n))
    }
}

/// Big integer that wipes itself when dropped inside a `Secret`.
pub struct SecretInt(BigUint);

impl SecretInt {
    pub fn new(value: BigUint) -> Self {
        SecretInt(value)
    }

    pub(crate) fn value(&self) -> &BigUint {
        &self.0
    }
}

impl Zeroize for SecretInt {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// Prover-only witness `(x, p, q)`. Never serialized and never printed.
pub struct Witness {
    pub(crate) x: Secret<SecretInt>,
    pub(crate) p: Secret<SecretInt>,
    pub(crate) q: Secret<SecretInt>,
}

use std::fmt;
impl fmt::Debug for Witness {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Only the fact that a witness is present is printed
        write!(f, "Witness {{ .. }}")
    }
}

impl Clone for Witness {
    fn clone(&self) -> Self {
        let copy = |s: &Secret<SecretInt>| Secret::new(SecretInt(s.expose_secret().0.clone()));

        Witness {
            x: copy(&self.x),
            p: copy(&self.p),
            q: copy(&self.q),
        }
    }
}

impl Witness {
    /// Builds a witness. `p` and `q` must be nonzero since their product
    /// bounds the per-round randomness.
    pub fn new(x: BigUint, p: BigUint, q: BigUint) -> Result<Witness> {
        if p.is_zero() || q.is_zero() {
            return Err(DlnError::InvalidArgument(
                "p and q must be positive".to_string(),
            ));
        }
        Ok(Witness {
            x: Secret::new(SecretInt(x)),
            p: Secret::new(SecretInt(p)),
            q: Secret::new(SecretInt(q)),
        })
    }

    pub fn from_bytes(x: &[u8], p: &[u8], q: &[u8]) -> Result<Witness> {
        Witness::new(decode(x), decode(p), decode(q))
    }

    /// The exponent modulus `p*q` used for both the randomness range and `t`.
    pub fn order_bound(&self) -> BigUint {
        self.p.expose_secret().value() * self.q.expose_secret().value()
    }

    /// Smallest buffer width that fits every alpha (`< N`) and every t (`< p*q`).
    pub fn output_byte_len(&self, statement: &Statement) -> usize {
        let largest_t = self.order_bound() - BigUint::one();
        byte_len(&statement.n).max(byte_len(&largest_t))
    }
}
