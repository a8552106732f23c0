//! Composable pre/post-filters: zigzag, delta, and the 4x4 transpose used
//! by the `dt` variant.
//!
//! These are hand-rolled rather than built on the `zigzag`/`delta-encoding`
//! crates (both of which this crate's ancestor pulls in for the 16-bit
//! codec) because every filter here needs an explicit, caller-supplied
//! `previous` anchor rather than an implicit zero start — see DESIGN.md.
//! The same choice shows up in the teacher's own `svb.rs`, which hand-rolls
//! `zigzag_decode` even with the `zigzag` crate sitting in `Cargo.toml`.

/// Maps small signed magnitudes to small unsigned magnitudes.
#[inline]
pub(crate) fn zigzag_encode(v: u32) -> u32 {
    let signed = v as i32;
    ((signed << 1) ^ (signed >> 31)) as u32
}

/// Inverse of [`zigzag_encode`].
#[inline]
pub(crate) fn zigzag_decode(v: u32) -> u32 {
    (v >> 1) ^ (0u32.wrapping_sub(v & 1))
}

/// `v - prev`, wrapping in the 32-bit ring.
#[inline]
pub(crate) fn delta_encode(v: u32, prev: u32) -> u32 {
    v.wrapping_sub(prev)
}

/// `d + prev`, inverse of [`delta_encode`].
#[inline]
pub(crate) fn delta_decode(d: u32, prev: u32) -> u32 {
    d.wrapping_add(prev)
}

/// zigzag ∘ delta.
#[inline]
pub(crate) fn delta_zigzag_encode(v: u32, prev: u32) -> u32 {
    zigzag_encode(delta_encode(v, prev))
}

/// Inverse of [`delta_zigzag_encode`], applied in the opposite order.
#[inline]
pub(crate) fn delta_zigzag_decode(d: u32, prev: u32) -> u32 {
    delta_decode(zigzag_decode(d), prev)
}

/// Threads [`delta_encode`] across a whole slice in place, seeded by `prev`.
/// Returns the last *original* value, which becomes the next anchor.
pub(crate) fn delta_encode_seq(values: &mut [u32], mut prev: u32) -> u32 {
    let last_original = values.last().copied().unwrap_or(prev);
    for v in values.iter_mut() {
        let original = *v;
        *v = delta_encode(original, prev);
        prev = original;
    }
    last_original
}

/// Inverse of [`delta_encode_seq`]. Returns the last *reconstructed* value.
pub(crate) fn delta_decode_seq(deltas: &mut [u32], mut prev: u32) -> u32 {
    for d in deltas.iter_mut() {
        let value = delta_decode(*d, prev);
        *d = value;
        prev = value;
    }
    deltas.last().copied().unwrap_or(prev)
}

/// 16-bit analog of [`zigzag_encode`], for the short codec's `z` variant.
#[inline]
pub(crate) fn zigzag_encode16(v: u16) -> u16 {
    let signed = v as i16;
    ((signed << 1) ^ (signed >> 15)) as u16
}

/// Inverse of [`zigzag_encode16`].
#[inline]
pub(crate) fn zigzag_decode16(v: u16) -> u16 {
    (v >> 1) ^ (0u16.wrapping_sub(v & 1))
}

/// `v - prev`, wrapping in the 16-bit ring.
#[inline]
pub(crate) fn delta_encode16(v: u16, prev: u16) -> u16 {
    v.wrapping_sub(prev)
}

/// `d + prev`, inverse of [`delta_encode16`].
#[inline]
pub(crate) fn delta_decode16(d: u16, prev: u16) -> u16 {
    d.wrapping_add(prev)
}

/// 16-bit analog of [`delta_encode_seq`].
pub(crate) fn delta_encode_seq16(values: &mut [u16], mut prev: u16) -> u16 {
    let last_original = values.last().copied().unwrap_or(prev);
    for v in values.iter_mut() {
        let original = *v;
        *v = delta_encode16(original, prev);
        prev = original;
    }
    last_original
}

/// Inverse of [`delta_encode_seq16`].
pub(crate) fn delta_decode_seq16(deltas: &mut [u16], mut prev: u16) -> u16 {
    for d in deltas.iter_mut() {
        let value = delta_decode16(*d, prev);
        *d = value;
        prev = value;
    }
    deltas.last().copied().unwrap_or(prev)
}

/// Transposes the 16-element block `arr` as four independent 4x4
/// transposes, in place. Self-inverse: calling this twice restores the
/// original order.
///
/// ```text
/// 00 01 02 03        00 10 20 30
/// 10 11 12 13   ->   01 11 21 31
/// 20 21 22 23        02 12 22 32
/// 30 31 32 33        03 13 23 33
/// ```
pub(crate) fn transpose4x4(arr: &mut [u32; 16]) {
    for r in 0..4 {
        for c in (r + 1)..4 {
            arr.swap(r * 4 + c, c * 4 + r);
        }
    }
}

/// Views the 64-element `dt` block as a 4x16 matrix whose four "rows" are
/// the 16-element quadrants `block[0:16)`, `block[16:32)`, `block[32:48)`,
/// `block[48:64)`, and applies [`transpose4x4`] to each group of 4 "columns"
/// independently — i.e. each sub-transpose mixes the same local column
/// across all four quadrants (elements 16 apart), matching the reference's
/// register loading at stride 16 (`r0=in[0:4), r4=in[16:20), r8=in[32:36),
/// rC=in[48:52)`, then `SVB_TRANSPOSE(r0,r4,r8,rC)`).
pub(crate) fn transpose_block(block: &mut [u32; 64]) {
    for group in 0..4 {
        let base = group * 4;
        let mut sub: [u32; 16] = core::array::from_fn(|i| {
            let row = i / 4;
            let col = i % 4;
            block[row * 16 + base + col]
        });
        transpose4x4(&mut sub);
        for i in 0..16 {
            let row = i / 4;
            let col = i % 4;
            block[row * 16 + base + col] = sub[i];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zigzag_identities() {
        for v in [0i32, 1, -1, 2, -2, i32::MAX, i32::MIN] {
            let encoded = zigzag_encode(v as u32);
            assert_eq!(zigzag_decode(encoded) as i32, v);
        }
    }

    #[test]
    fn zigzag_small_values_stay_small() {
        assert_eq!(zigzag_encode(0), 0);
        assert_eq!(zigzag_encode((-1i32) as u32), 1);
        assert_eq!(zigzag_encode(1), 2);
        assert_eq!(zigzag_encode((-2i32) as u32), 3);
    }

    #[test]
    fn delta_identities() {
        for (v, p) in [(10u32, 10u32), (0, 0), (u32::MAX, 1), (5, 100)] {
            assert_eq!(delta_decode(delta_encode(v, p), p), v);
        }
    }

    #[test]
    fn delta_encode_seq_matches_elementwise() {
        let mut xs = [10u32, 11, 12, 13];
        let prev = 10;
        let last = delta_encode_seq(&mut xs, prev);
        assert_eq!(xs, [0, 1, 1, 1]);
        assert_eq!(last, 13);

        let mut back = xs;
        delta_decode_seq(&mut back, prev);
        assert_eq!(back, [10, 11, 12, 13]);
    }

    #[test]
    fn zigzag16_identities() {
        for v in [0i16, 1, -1, 2, -2, i16::MAX, i16::MIN] {
            let encoded = zigzag_encode16(v as u16);
            assert_eq!(zigzag_decode16(encoded) as i16, v);
        }
    }

    #[test]
    fn delta16_encode_seq_matches_elementwise() {
        let mut xs = [10u16, 11, 12, 13];
        let prev = 10;
        let last = delta_encode_seq16(&mut xs, prev);
        assert_eq!(xs, [0, 1, 1, 1]);
        assert_eq!(last, 13);

        let mut back = xs;
        delta_decode_seq16(&mut back, prev);
        assert_eq!(back, [10, 11, 12, 13]);
    }

    #[test]
    fn transpose_is_self_inverse() {
        let mut original: [u32; 16] = core::array::from_fn(|i| i as u32);
        let snapshot = original;
        transpose4x4(&mut original);
        assert_ne!(original, snapshot);
        transpose4x4(&mut original);
        assert_eq!(original, snapshot);
    }

    #[test]
    fn transpose_block_matches_diagram() {
        let mut block: [u32; 64] = core::array::from_fn(|i| i as u32);
        transpose_block(&mut block);
        // group 0 (local columns 0..4) draws its 4x4 matrix from the same
        // columns of all four 16-stride quadrants: rows [0,1,2,3],
        // [16,17,18,19], [32,33,34,35], [48,49,50,51]. Transposing swaps
        // row/column, so the result's first quadrant row becomes the
        // original column: [0,16,32,48].
        assert_eq!(&block[0..4], &[0, 16, 32, 48]);
        assert_eq!(&block[16..20], &[1, 17, 33, 49]);
        assert_eq!(&block[32..36], &[2, 18, 34, 50]);
        assert_eq!(&block[48..52], &[3, 19, 35, 51]);
    }

    #[test]
    fn transpose_block_is_self_inverse() {
        let mut block: [u32; 64] = core::array::from_fn(|i| (i as u32) * 7 + 3);
        let snapshot = block;
        transpose_block(&mut block);
        assert_ne!(block, snapshot);
        transpose_block(&mut block);
        assert_eq!(block, snapshot);
    }
}
