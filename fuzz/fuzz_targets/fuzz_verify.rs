#![no_main]

use libfuzzer_sys::fuzz_target;

use dln_proof::{verify, CHALLENGE_BYTES, ITERATIONS};

fuzz_target!(|data: &[u8]| {
    // Statement from the small test modulus, proof bytes from the fuzzer
    let (h1, h2, n) = ([4u8], [192u8], [253u8]);

    if data.len() < CHALLENGE_BYTES + 1 {
        return;
    }
    let (challenge, rest) = data.split_at(CHALLENGE_BYTES);
    let width = (rest[0] % 4) as usize + 1;
    let body = &rest[1..];

    // Recycle the fuzz input into 2 * ITERATIONS buffers of one width
    let mut buffers = body
        .chunks(width)
        .filter(|chunk| chunk.len() == width)
        .map(|chunk| chunk.to_vec())
        .cycle()
        .take(2 * ITERATIONS)
        .collect::<Vec<_>>();
    if buffers.len() < 2 * ITERATIONS {
        buffers.clear();
    }
    let (alphas, ts) = buffers.split_at(buffers.len() / 2);

    // Must never panic, whatever the verdict
    let _ = verify(&h1, &h2, &n, alphas, ts, challenge);
});
