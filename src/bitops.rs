//! Key-block length math shared by every codec in this crate.
//!
//! Every stream produced by this crate is little-endian regardless of host
//! byte order, using `u32`/`u16` `to_le_bytes`/`from_le_bytes` throughout.

/// Number of key bytes needed for `count` elements at `kbits` bits per key.
///
/// `kbits` is 2 for the 32-bit SVB1/SVB0 families and 1 for the short
/// varint codec.
#[inline]
pub(crate) const fn key_block_len(count: usize, kbits: usize) -> usize {
    (count * kbits + 7) / 8
}
