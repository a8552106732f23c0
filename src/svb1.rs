//! The "1234" format: every element is stored in 1–4 bytes. Five variants,
//! built on the generic [`crate::codec`] core plus the filters in
//! [`crate::filters`].

use crate::codec::{decode_raw, encode_raw};
use crate::filters::{
    delta_decode_seq, delta_encode_seq, transpose_block, zigzag_decode, zigzag_encode,
};
use crate::tables::Svb1;

/// Plain encode, no pre-filter.
pub fn svb1_enc(input: &[u32], out: &mut [u8]) -> usize {
    log::trace!("svb1_enc: {} elements", input.len());
    encode_raw::<Svb1>(input, out)
}

/// Plain decode, no post-filter.
pub fn svb1_dec(input: &[u8], count: usize, out: &mut [u32]) -> usize {
    log::trace!("svb1_dec: {count} elements");
    decode_raw::<Svb1>(input, count, out)
}

/// Zigzag pre-filter: useful when `input` holds small-magnitude signed
/// values reinterpreted as `u32`.
pub fn svb1z_enc(input: &[u32], out: &mut [u8]) -> usize {
    log::trace!("svb1z_enc: {} elements", input.len());
    let mapped: Vec<u32> = input.iter().map(|&v| zigzag_encode(v)).collect();
    encode_raw::<Svb1>(&mapped, out)
}

pub fn svb1z_dec(input: &[u8], count: usize, out: &mut [u32]) -> usize {
    log::trace!("svb1z_dec: {count} elements");
    let consumed = decode_raw::<Svb1>(input, count, out);
    for v in out.iter_mut() {
        *v = zigzag_decode(*v);
    }
    consumed
}

/// Delta pre-filter, seeded by `previous` (the anchor for the first
/// element).
pub fn svb1d_enc(input: &[u32], out: &mut [u8], previous: u32) -> usize {
    log::trace!("svb1d_enc: {} elements, previous={previous}", input.len());
    let mut deltas = input.to_vec();
    delta_encode_seq(&mut deltas, previous);
    encode_raw::<Svb1>(&deltas, out)
}

pub fn svb1d_dec(input: &[u8], count: usize, out: &mut [u32], previous: u32) -> usize {
    log::trace!("svb1d_dec: {count} elements, previous={previous}");
    let consumed = decode_raw::<Svb1>(input, count, out);
    delta_decode_seq(out, previous);
    consumed
}

/// Delta then zigzag.
pub fn svb1dz_enc(input: &[u32], out: &mut [u8], previous: u32) -> usize {
    log::trace!("svb1dz_enc: {} elements, previous={previous}", input.len());
    let mut deltas = input.to_vec();
    delta_encode_seq(&mut deltas, previous);
    for v in deltas.iter_mut() {
        *v = zigzag_encode(*v);
    }
    encode_raw::<Svb1>(&deltas, out)
}

pub fn svb1dz_dec(input: &[u8], count: usize, out: &mut [u32], previous: u32) -> usize {
    log::trace!("svb1dz_dec: {count} elements, previous={previous}");
    let consumed = decode_raw::<Svb1>(input, count, out);
    for v in out.iter_mut() {
        *v = zigzag_decode(*v);
    }
    delta_decode_seq(out, previous);
    consumed
}

/// Delta + transpose, operating on 64-element blocks. The anchor threaded
/// into the next block is the last element of the *original* (untransposed)
/// block; trailing `N mod 64` elements fall back to plain delta.
pub fn svb1dt_enc(input: &[u32], out: &mut [u8], previous: u32) -> usize {
    log::trace!("svb1dt_enc: {} elements, previous={previous}", input.len());
    let mut transformed = Vec::with_capacity(input.len());
    let mut anchor = previous;
    let mut chunks = input.chunks_exact(64);
    for chunk in &mut chunks {
        let mut block: [u32; 64] = chunk.try_into().unwrap();
        let last_original = block[63];
        transpose_block(&mut block);
        delta_encode_seq(&mut block, anchor);
        transformed.extend_from_slice(&block);
        anchor = last_original;
    }
    let rem = chunks.remainder();
    if !rem.is_empty() {
        let mut tail = rem.to_vec();
        delta_encode_seq(&mut tail, anchor);
        transformed.extend_from_slice(&tail);
    }
    encode_raw::<Svb1>(&transformed, out)
}

pub fn svb1dt_dec(input: &[u8], count: usize, out: &mut [u32], previous: u32) -> usize {
    log::trace!("svb1dt_dec: {count} elements, previous={previous}");
    let consumed = decode_raw::<Svb1>(input, count, out);

    let mut anchor = previous;
    let mut idx = 0;
    while count - idx >= 64 {
        let mut block: [u32; 64] = out[idx..idx + 64].try_into().unwrap();
        delta_decode_seq(&mut block, anchor);
        transpose_block(&mut block); // self-inverse
        out[idx..idx + 64].copy_from_slice(&block);
        anchor = block[63];
        idx += 64;
    }
    if idx < count {
        delta_decode_seq(&mut out[idx..count], anchor);
    }
    consumed
}
