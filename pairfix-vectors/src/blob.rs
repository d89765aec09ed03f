//! Fixed-width windows over hex blobs.

/// Width in hex characters of one 64-byte base-field element.
pub const FP_HEX: usize = 128;

/// Width in hex characters of one pairing term: a G1 point (x, y) followed
/// by a G2 point (x_a0, x_a1, y_a0, y_a1).
pub const TERM_HEX: usize = 6 * FP_HEX;

/// The `index`-th 128-character window of `blob`, if fully in bounds.
pub(crate) fn limb(blob: &str, index: usize) -> Option<&str> {
    blob.get(index * FP_HEX..(index + 1) * FP_HEX)
}

/// Everything from `offset` to the end of `blob`. Empty when `offset`
/// equals the blob length.
pub(crate) fn tail(blob: &str, offset: usize) -> Option<&str> {
    blob.get(offset..)
}
