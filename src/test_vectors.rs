// Fixed DLN statements for the unit tests. Each modulus is N = P*Q with
// safe primes P = 2p+1, Q = 2q+1, and h1 a quadratic residue so that its
// order divides p*q.
use crate::bigint_codec::minimal_bytes;
use crate::statement::{Statement, Witness};
use num_bigint::BigUint;

pub(crate) struct Fixture {
    pub h1: BigUint,
    pub h2: BigUint,
    pub n: BigUint,
    pub x: BigUint,
    pub p: BigUint,
    pub q: BigUint,
}

impl Fixture {
    pub fn statement(&self) -> Statement {
        Statement::new(self.h1.clone(), self.h2.clone(), self.n.clone()).unwrap()
    }

    pub fn witness(&self) -> Witness {
        Witness::new(self.x.clone(), self.p.clone(), self.q.clone()).unwrap()
    }

    pub fn output_byte_len(&self) -> usize {
        self.witness().output_byte_len(&self.statement())
    }

    /// (h1, h2, N, x, p, q) as minimal big-endian buffers
    pub fn buffers(&self) -> [Vec<u8>; 6] {
        [&self.h1, &self.h2, &self.n, &self.x, &self.p, &self.q].map(minimal_bytes)
    }

    /// Same statement with h2 replaced by h1^(x+1), for which `x` is no witness.
    pub fn with_wrong_h2(&self) -> Fixture {
        Fixture {
            h2: self.h1.modpow(&(&self.x + 1u8), &self.n),
            h1: self.h1.clone(),
            n: self.n.clone(),
            x: self.x.clone(),
            p: self.p.clone(),
            q: self.q.clone(),
        }
    }
}

/// N = 23 * 11 = 253, p*q = 11 * 5 = 55, h1 = 4 has order 55, h2 = 4^7.
pub(crate) fn small() -> Fixture {
    Fixture {
        h1: BigUint::from(4u32),
        h2: BigUint::from(192u32),
        n: BigUint::from(253u32),
        x: BigUint::from(7u32),
        p: BigUint::from(11u32),
        q: BigUint::from(5u32),
    }
}

/// 256-bit modulus built from two 127-bit Sophie Germain primes.
pub(crate) fn safe_prime_256() -> Fixture {
    let hex = |digits: &str| BigUint::parse_bytes(digits.as_bytes(), 16).unwrap();
    Fixture {
        h1: hex("4b1b71f40b76331f24860d3652e43346a520f917f352d61ddec7e12b4d64f9c4"),
        h2: hex("40c98f4f9a25ed748b20c7eb7e5a19351d07940eeb667d55c11ec2273e07a188"),
        n: hex("5076e38fc5346a75633e2f37789bda15b3f2eb26abc050e52b48915ca0aec119"),
        x: hex("11a22dd91738f7d93d9c172411e20b8f6b0d549b6f03675a1600a35a099950d9"),
        p: hex("4c8bbe8bed6dba03517463bce74c5a13"),
        q: hex("4346baa62af1d8f318041c850bddf45f"),
    }
}

#[test]
fn test_fixtures_are_consistent() {
    for fixture in [small(), safe_prime_256()] {
        let pq = &fixture.p * &fixture.q;
        let two = BigUint::from(2u8);
        let one = BigUint::from(1u8);
        assert_eq!((&two * &fixture.p + 1u8) * (&two * &fixture.q + 1u8), fixture.n);
        assert_eq!(fixture.h1.modpow(&pq, &fixture.n), one);
        assert_eq!(fixture.h1.modpow(&fixture.x, &fixture.n), fixture.h2);
    }
}
