//! Stable 32-bit hashing.
//!
//! Signature hashes are persisted next to serialized call sites, so they must
//! not change between builds or platforms. `core::hash::Hasher` makes no such
//! promise, hence this small MurmurHash3 (x86, 32-bit) kernel.

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

/// Seed used when a hash chain is started without one.
pub const HASH_SEED: u32 = 0x7f07_c65;

/// Mix one 32-bit word into `seed`.
#[inline]
pub const fn murmur3_one_32(value: u32, seed: u32) -> u32 {
    let mut k = value.wrapping_mul(C1);
    k = k.rotate_left(15);
    k = k.wrapping_mul(C2);

    let mut h = seed ^ k;
    h = h.rotate_left(13);
    h.wrapping_mul(5).wrapping_add(0xe654_6b64)
}

/// Mix a 64-bit word into `seed`, low half first.
#[inline]
pub const fn murmur3_one_64(value: u64, seed: u32) -> u32 {
    let h = murmur3_one_32(value as u32, seed);
    murmur3_one_32((value >> 32) as u32, h)
}

/// Mix the bit pattern of a float. `0.0` and `-0.0` hash alike, as do all NaNs.
#[inline]
pub fn murmur3_one_f64(value: f64, seed: u32) -> u32 {
    let bits = if value == 0.0 {
        0
    } else if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    };
    murmur3_one_64(bits, seed)
}

/// Final avalanche step.
#[inline]
pub const fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// Hash a byte string (e.g. a class name) into a standalone 32-bit value.
pub fn murmur3_bytes(bytes: &[u8], seed: u32) -> u32 {
    let mut h = seed;
    let mut chunks = bytes.chunks_exact(4);
    for chunk in &mut chunks {
        let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        h = murmur3_one_32(word, h);
    }

    let tail = chunks.remainder();
    if !tail.is_empty() {
        let mut k: u32 = 0;
        for (i, byte) in tail.iter().enumerate() {
            k |= (*byte as u32) << (8 * i);
        }
        k = k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2);
        h ^= k;
    }

    fmix32(h ^ bytes.len() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(murmur3_one_32(42, HASH_SEED), murmur3_one_32(42, HASH_SEED));
        assert_eq!(murmur3_bytes(b"Node3D", HASH_SEED), murmur3_bytes(b"Node3D", HASH_SEED));
    }

    #[test]
    fn test_hash_distinguishes_inputs() {
        assert_ne!(murmur3_one_32(1, HASH_SEED), murmur3_one_32(2, HASH_SEED));
        assert_ne!(murmur3_bytes(b"abc", HASH_SEED), murmur3_bytes(b"abd", HASH_SEED));
        assert_ne!(murmur3_bytes(b"abcd", HASH_SEED), murmur3_bytes(b"abcde", HASH_SEED));
    }

    #[test]
    fn test_signed_zero_and_nan_hash_alike() {
        assert_eq!(murmur3_one_f64(0.0, 7), murmur3_one_f64(-0.0, 7));
        assert_eq!(murmur3_one_f64(f64::NAN, 7), murmur3_one_f64(-f64::NAN, 7));
    }

    #[test]
    fn test_fmix_zero_is_zero() {
        assert_eq!(fmix32(0), 0);
        assert_ne!(fmix32(1), 1);
    }
}
