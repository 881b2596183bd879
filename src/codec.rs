//! Conversion between text and Gaussian integer blocks.
//!
//! The UTF-8 bytes of a message are cut into chunks of [`chunk_size`] bytes.
//! Each block takes one chunk as its real part and the next as its imaginary
//! part, both read as big-endian magnitudes. Components are kept to roughly
//! half the bit length of the modulus norm minus [`SAFETY_MARGIN_BITS`], so
//! the blocks stay reduced modulo `N` and survive encryption unchanged.
//!
//! Decoding concatenates the big-endian bytes of every nonzero component. A
//! component whose chunk is all zero bytes is indistinguishable from an empty
//! one and is dropped, so only messages without such chunks round-trip exactly.
//! Leading `NUL` bytes of a chunk are lost for the same reason.

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp;

use num_bigint::{BigInt, BigUint, Sign::Plus};
use num_traits::Zero;
use tracing::debug;

use crate::errors::{Error, Result};
use crate::gaussian::GaussianInt;

/// Bits held back from each component so blocks stay well inside the modulus.
pub const SAFETY_MARGIN_BITS: usize = 8;

/// Lower bound on the bits carried by each component.
pub const MIN_COMPONENT_BITS: usize = 8;

/// Number of message bytes placed in each component of a block for a modulus
/// whose norm is `modulus_norm`. Never less than one.
pub fn chunk_size(modulus_norm: &BigUint) -> usize {
    let half_bits = (modulus_norm.bits() / 2).saturating_sub(SAFETY_MARGIN_BITS);
    cmp::max(cmp::max(half_bits, MIN_COMPONENT_BITS) / 8, 1)
}

/// Splits `message` into blocks for a modulus whose norm is `modulus_norm`.
///
/// The empty message encodes to no blocks.
pub fn encode_message(message: &str, modulus_norm: &BigUint) -> Vec<GaussianInt> {
    let size = chunk_size(modulus_norm);

    message
        .as_bytes()
        .chunks(2 * size)
        .map(|chunk| {
            let (re, im) = chunk.split_at(cmp::min(size, chunk.len()));
            GaussianInt::new(component(re), component(im))
        })
        .collect()
}

/// Reassembles the text carried by `blocks`, replacing invalid UTF-8 with
/// `U+FFFD`.
pub fn decode_message(blocks: &[GaussianInt]) -> String {
    let bytes = message_bytes(blocks);

    match String::from_utf8(bytes) {
        Ok(message) => message,
        Err(err) => {
            debug!(
                valid_up_to = err.utf8_error().valid_up_to(),
                "decoded blocks are not valid UTF-8, replacing invalid sequences"
            );
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

/// Like [`decode_message`] but fails with [`Error::Decoding`] on invalid UTF-8.
pub fn try_decode_message(blocks: &[GaussianInt]) -> Result<String> {
    String::from_utf8(message_bytes(blocks)).map_err(|_| Error::Decoding)
}

fn component(bytes: &[u8]) -> BigInt {
    BigInt::from_biguint(Plus, BigUint::from_bytes_be(bytes))
}

fn message_bytes(blocks: &[GaussianInt]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for block in blocks {
        for part in [block.re(), block.im()] {
            if !part.is_zero() {
                // magnitude only, the sign carries no message bytes
                bytes.extend_from_slice(&part.to_bytes_be().1);
            }
        }
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use num_traits::One;

    fn norm_of_bits(bits: usize) -> BigUint {
        BigUint::one() << (bits - 1)
    }

    #[test]
    fn test_chunk_size() {
        assert_eq!(chunk_size(&BigUint::zero()), 1);
        assert_eq!(chunk_size(&BigUint::from(5u32)), 1);
        assert_eq!(chunk_size(&norm_of_bits(32)), 1);
        assert_eq!(chunk_size(&norm_of_bits(48)), 2);
        assert_eq!(chunk_size(&norm_of_bits(64)), 3);
        assert_eq!(chunk_size(&norm_of_bits(2048)), 127);
    }

    #[test]
    fn test_encode() {
        // 64-bit norm: three bytes per component
        let blocks = encode_message("abcdefg", &norm_of_bits(64));
        assert_eq!(
            blocks,
            vec![
                GaussianInt::new(0x616263, 0x646566),
                GaussianInt::new(0x67, 0),
            ]
        );

        assert!(encode_message("", &norm_of_bits(64)).is_empty());
    }

    #[test]
    fn test_round_trip() {
        let messages = [
            "hello world",
            "a",
            "Gaussian integers: a + bi with a, b in Z",
            "ünïcödé ✓ 高斯整数",
        ];

        for bits in [8, 32, 64, 100, 512] {
            let norm = norm_of_bits(bits);
            for message in messages {
                let blocks = encode_message(message, &norm);
                assert_eq!(decode_message(&blocks), message);
                assert_eq!(try_decode_message(&blocks).unwrap(), message);
            }
        }
    }

    #[test]
    fn test_zero_component_is_dropped() {
        let blocks = encode_message("a\0b", &norm_of_bits(32));
        assert_eq!(blocks[0], GaussianInt::new(0x61, 0));
        assert_eq!(decode_message(&blocks), "ab");
    }

    #[test]
    fn test_negative_components_use_magnitude() {
        let blocks = [GaussianInt::new(-0x68, 0x69)];
        assert_eq!(decode_message(&blocks), "hi");
    }

    #[test]
    fn test_invalid_utf8() {
        let blocks = [GaussianInt::new(0x61, 0xff)];
        assert_eq!(decode_message(&blocks), "a\u{fffd}");
        assert_eq!(try_decode_message(&blocks), Err(Error::Decoding));
    }
}
