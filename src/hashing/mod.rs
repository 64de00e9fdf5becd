//! BLAKE3-based hashing helpers.
//!
//! Used for feature hashing in the stub embedder, where the hash must be stable
//! across processes and Rust releases (`DefaultHasher` is not).

#[cfg(test)]
mod tests;

/// First 8 bytes of the BLAKE3 hash of `data`, little-endian.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    let hash = blake3::hash(data);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[0..8]);
    u64::from_le_bytes(bytes)
}

/// Maps a token to a (bucket, sign) pair for a `dim`-wide hashed feature vector.
///
/// The low bits select the bucket; the top bit selects the sign so collisions
/// tend to cancel rather than accumulate.
///
/// # Panics
///
/// Panics if `dim` is zero.
#[inline]
pub fn feature_slot(token: &str, dim: usize) -> (usize, f32) {
    assert!(dim > 0, "feature dimension must be non-zero");
    let hash = hash_to_u64(token.as_bytes());
    let index = (hash % dim as u64) as usize;
    let sign = if hash >> 63 == 1 { -1.0 } else { 1.0 };
    (index, sign)
}
