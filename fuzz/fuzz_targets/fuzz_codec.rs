#![no_main]

use libfuzzer_sys::fuzz_target;

use dln_proof::bigint_codec::{byte_len, decode, encode};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let length = data[0] as usize;
    let value = decode(&data[1..]);

    match encode(&value, length) {
        Ok(buffer) => {
            assert_eq!(buffer.len(), length);
            assert_eq!(decode(&buffer), value);
        }
        Err(_) => assert!(byte_len(&value) > length),
    }
});
