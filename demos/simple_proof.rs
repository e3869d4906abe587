use dln_proof::{Challenge, DlnProof, Statement, Witness};
use num_bigint::BigUint;
use rand_core::OsRng;

fn main() {
    // Randomness source
    let csprng = OsRng;

    // N = (2p+1)(2q+1) for 127-bit Sophie Germain primes p, q; h1 is a square mod N
    let hex = |digits: &str| BigUint::parse_bytes(digits.as_bytes(), 16).expect("Invalid hex");
    let p = hex("4c8bbe8bed6dba03517463bce74c5a13");
    let q = hex("4346baa62af1d8f318041c850bddf45f");
    let n = hex("5076e38fc5346a75633e2f37789bda15b3f2eb26abc050e52b48915ca0aec119");
    let h1 = hex("4b1b71f40b76331f24860d3652e43346a520f917f352d61ddec7e12b4d64f9c4");
    let x = hex("11a22dd91738f7d93d9c172411e20b8f6b0d549b6f03675a1600a35a099950d9");
    let h2 = h1.modpow(&x, &n);

    let statement = Statement::new(h1, h2, n).expect("Error");
    let witness = Witness::new(x, p, q).expect("Error");

    // Challenge bound to the statement and the protocol session
    let challenge = Challenge::from_statement(&statement, b"demo session");

    // Proof generation
    let proof = DlnProof::new(&statement, &witness, &challenge, csprng).expect("Error");

    // Verification of the proof
    let result = proof.verify(&statement, &challenge).expect("Error");

    println!("Verification result: {:?}", result);
    assert!(result);
}
