// Conversion between arbitrary-precision unsigned integers and fixed-width
// big-endian byte buffers.
use crate::error::{DlnError, Result};
use num_bigint::BigUint;
use num_traits::Zero;

/// Number of bytes in the minimal big-endian representation of `value`.
/// Zero has an empty minimal representation.
pub fn byte_len(value: &BigUint) -> usize {
    ((value.bits() + 7) / 8) as usize
}

/// Minimal big-endian bytes of `value`; empty for zero.
pub fn minimal_bytes(value: &BigUint) -> Vec<u8> {
    if value.is_zero() {
        Vec::new()
    } else {
        value.to_bytes_be()
    }
}

/// Encodes `value` as exactly `length` big-endian bytes, left-padded with zeros.
///
/// # Errors
///
/// `EncodingOverflow` if the minimal representation of `value` is longer than
/// `length`. The value is never truncated.
pub fn encode(value: &BigUint, length: usize) -> Result<Vec<u8>> {
    let required = byte_len(value);
    if required > length {
        return Err(DlnError::EncodingOverflow {
            required,
            capacity: length,
        });
    }

    let mut buffer = vec![0u8; length];
    buffer[length - required..].copy_from_slice(&minimal_bytes(value));
    Ok(buffer)
}

/// Interprets `buffer` as a big-endian unsigned integer. Any length is
/// accepted; an empty or all-zero buffer decodes to zero.
pub fn decode(buffer: &[u8]) -> BigUint {
    BigUint::from_bytes_be(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_left_pads() {
        let value = BigUint::from(0x0102u32);
        assert_eq!(encode(&value, 4).unwrap(), vec![0, 0, 1, 2]);
    }

    #[test]
    fn test_encode_exact_width() {
        let value = BigUint::from(0xffffu32);
        assert_eq!(encode(&value, 2).unwrap(), vec![0xff, 0xff]);
    }

    #[test]
    fn test_encode_zero() {
        assert_eq!(encode(&BigUint::zero(), 3).unwrap(), vec![0, 0, 0]);
        assert!(encode(&BigUint::zero(), 0).unwrap().is_empty());
    }

    #[test]
    fn test_encode_overflow() {
        // 2^(8*length) is the smallest value that must be rejected
        for length in [0usize, 1, 2, 16, 32] {
            let too_big = BigUint::from(1u8) << (8 * length);
            assert_eq!(
                encode(&too_big, length),
                Err(DlnError::EncodingOverflow {
                    required: length + 1,
                    capacity: length,
                })
            );
            let largest = &too_big - 1u8;
            assert_eq!(encode(&largest, length).unwrap().len(), length);
        }
    }

    #[test]
    fn test_decode_any_length() {
        assert_eq!(decode(&[]), BigUint::zero());
        assert_eq!(decode(&[0u8; 64]), BigUint::zero());
        assert_eq!(decode(&[0, 0, 1, 0]), BigUint::from(256u32));
    }

    #[test]
    fn test_round_trip_at_boundaries() {
        for length in 1usize..=40 {
            let max = (BigUint::from(1u8) << (8 * length)) - 1u8;
            let mid = BigUint::from(1u8) << (4 * length);
            for value in [BigUint::zero(), BigUint::from(1u8), mid, max] {
                let buffer = encode(&value, length).unwrap();
                assert_eq!(buffer.len(), length);
                assert_eq!(decode(&buffer), value);
            }
        }
    }

    #[test]
    fn test_byte_len() {
        assert_eq!(byte_len(&BigUint::zero()), 0);
        assert_eq!(byte_len(&BigUint::from(255u32)), 1);
        assert_eq!(byte_len(&BigUint::from(256u32)), 2);
    }
}
