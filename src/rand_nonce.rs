use crate::error::{DlnError, Result};
use crate::statement::SecretInt;
use num_bigint::BigUint;
use num_traits::Zero;
use secrecy::zeroize::Zeroize;
use secrecy::{ExposeSecret, Secret};

/// Secret per-round exponent `r` drawn uniformly from `[0, bound)`.
pub struct RandomNonce {
    pub(crate) r_private: Secret<SecretInt>,
}

use std::fmt;
impl fmt::Debug for RandomNonce {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Format the RandomNonce struct without including r_private
        write!(f, "RandomNonce {{ .. }}")
    }
}

impl Clone for RandomNonce {
    fn clone(&self) -> Self {
        let r_private_clone = Secret::new(SecretInt::new(self.value().clone()));

        RandomNonce {
            r_private: r_private_clone,
        }
    }
}

impl RandomNonce {
    /// Draws a fresh nonce by rejection sampling: read `ceil(bits/8)` bytes,
    /// clear the bits above the bound's bit length, retry until below `bound`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `bound` is zero
    /// - `RandomnessFailure` if the source cannot deliver bytes
    pub fn new_rand<R>(bound: &BigUint, mut rng: R) -> Result<RandomNonce>
    where
        R: rand::CryptoRng + rand::RngCore,
    {
        if bound.is_zero() {
            return Err(DlnError::InvalidArgument(
                "nonce bound must be positive".to_string(),
            ));
        }

        let bits = bound.bits();
        let byte_len = ((bits + 7) / 8) as usize;
        let top_mask = 0xffu8 >> (byte_len as u64 * 8 - bits);
        let mut buffer = vec![0u8; byte_len];

        loop {
            let drawn = rng.try_fill_bytes(&mut buffer);
            if let Err(err) = drawn {
                buffer.as_mut_slice().zeroize();
                return Err(DlnError::RandomnessFailure(err.to_string()));
            }
            buffer[0] &= top_mask;
            let candidate = BigUint::from_bytes_be(&buffer);
            buffer.as_mut_slice().zeroize();

            if candidate < *bound {
                return Ok(RandomNonce {
                    r_private: Secret::new(SecretInt::new(candidate)),
                });
            }
        }
    }

    pub(crate) fn value(&self) -> &BigUint {
        self.r_private.expose_secret().value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{CryptoRng, RngCore, SeedableRng};

    #[test]
    fn test_nonce_below_bound() {
        let mut rng = StdRng::seed_from_u64(123);
        // 2^8 + 1 forces the sampler to mask down to 9 bits and reject often
        let bound = BigUint::from(257u32);
        for _ in 0..500 {
            let nonce = RandomNonce::new_rand(&bound, &mut rng).unwrap();
            assert!(*nonce.value() < bound);
        }
    }

    #[test]
    fn test_nonce_covers_small_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let bound = BigUint::from(3u32);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let nonce = RandomNonce::new_rand(&bound, &mut rng).unwrap();
            let idx = nonce.value().to_u32_digits().first().copied().unwrap_or(0);
            seen[idx as usize] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    // Counts fill calls so the test can tell a rejected draw happened.
    struct CountingRng {
        inner: StdRng,
        fills: usize,
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.fills += 1;
            self.inner.fill_bytes(dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            self.fills += 1;
            self.inner.try_fill_bytes(dest)
        }
    }

    impl CryptoRng for CountingRng {}

    #[test]
    fn test_nonce_redraw_after_rejection() {
        // Bound 5 masks to 3 bits, so 3 of every 8 draws are rejected
        let bound = BigUint::from(5u32);
        let mut redrawn = 0;
        for seed in 0..64 {
            let mut rng = CountingRng {
                inner: StdRng::seed_from_u64(seed),
                fills: 0,
            };
            let nonce = RandomNonce::new_rand(&bound, &mut rng).unwrap();
            assert!(*nonce.value() < bound);
            if rng.fills > 1 {
                redrawn += 1;
            }
        }
        assert!(redrawn > 0);
    }

    #[test]
    fn test_nonce_same_seed_same_value() {
        let bound = BigUint::from(u64::MAX) * BigUint::from(u64::MAX);
        let a = RandomNonce::new_rand(&bound, StdRng::seed_from_u64(99)).unwrap();
        let b = RandomNonce::new_rand(&bound, StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a.value(), b.value());
        assert_eq!(a.clone().value(), a.value());
    }

    #[test]
    fn test_nonce_zero_bound() {
        let rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            RandomNonce::new_rand(&BigUint::zero(), rng),
            Err(DlnError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_nonce_debug_hides_value() {
        let nonce = RandomNonce::new_rand(&BigUint::from(1000u32), StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(format!("{:?}", nonce), "RandomNonce { .. }");
    }
}
