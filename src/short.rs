//! The 16-bit "short varint" codec: a 1-bit key bitmap (set when an element
//! needed 2 bytes) followed by the data block, same key-before-data
//! convention as the 32-bit formats.

use bitvec::prelude::*;
use itertools::Itertools;

use crate::bitops::key_block_len;
use crate::filters::{
    delta_decode_seq16, delta_encode_seq16, zigzag_decode16, zigzag_encode16,
};

/// Plain encode, no pre-filter.
pub fn short_enc(input: &[u16], out: &mut [u8]) -> usize {
    log::trace!("short_enc: {} elements", input.len());
    let key_len = key_block_len(input.len(), 1);
    let (keys, data) = out.split_at_mut(key_len);
    for b in keys.iter_mut() {
        *b = 0;
    }

    let mut cursor = 0usize;
    let grouped = input.iter().chunks(8);
    for (chunk_idx, chunk) in (&grouped).into_iter().enumerate() {
        let mut ctrl_byte = 0u8;
        let bits = ctrl_byte.view_bits_mut::<Lsb0>();
        for (mut bit, &v) in bits.iter_mut().zip(chunk) {
            if v > u8::MAX as u16 {
                *bit = true;
                data[cursor..cursor + 2].copy_from_slice(&v.to_le_bytes());
                cursor += 2;
            } else {
                data[cursor] = v as u8;
                cursor += 1;
            }
        }
        keys[chunk_idx] = ctrl_byte;
    }
    key_len + cursor
}

/// Plain decode, no post-filter.
pub fn short_dec(input: &[u8], count: usize, out: &mut [u16]) -> usize {
    log::trace!("short_dec: {count} elements");
    let key_len = key_block_len(count, 1);
    let (keys, data) = input.split_at(key_len);

    let mut cursor = 0usize;
    let mut idx = 0usize;
    for &key_byte in keys.iter() {
        if idx >= count {
            break;
        }
        let bits = key_byte.view_bits::<Lsb0>();
        let take = (count - idx).min(8);
        for bit in bits.iter().take(take) {
            if *bit {
                out[idx] = u16::from_le_bytes([data[cursor], data[cursor + 1]]);
                cursor += 2;
            } else {
                out[idx] = data[cursor] as u16;
                cursor += 1;
            }
            idx += 1;
        }
    }
    key_len + cursor
}

/// Zigzag pre-filter: useful when `input` holds small-magnitude signed
/// values reinterpreted as `u16`.
pub fn shortz_enc(input: &[u16], out: &mut [u8]) -> usize {
    log::trace!("shortz_enc: {} elements", input.len());
    let mapped: Vec<u16> = input.iter().map(|&v| zigzag_encode16(v)).collect();
    short_enc(&mapped, out)
}

pub fn shortz_dec(input: &[u8], count: usize, out: &mut [u16]) -> usize {
    log::trace!("shortz_dec: {count} elements");
    let consumed = short_dec(input, count, out);
    for v in out.iter_mut() {
        *v = zigzag_decode16(*v);
    }
    consumed
}

/// Delta pre-filter, seeded by `previous` (the anchor for the first
/// element).
pub fn shortd_enc(input: &[u16], out: &mut [u8], previous: u16) -> usize {
    log::trace!("shortd_enc: {} elements, previous={previous}", input.len());
    let mut deltas = input.to_vec();
    delta_encode_seq16(&mut deltas, previous);
    short_enc(&deltas, out)
}

pub fn shortd_dec(input: &[u8], count: usize, out: &mut [u16], previous: u16) -> usize {
    log::trace!("shortd_dec: {count} elements, previous={previous}");
    let consumed = short_dec(input, count, out);
    delta_decode_seq16(out, previous);
    consumed
}

/// Delta then zigzag.
pub fn shortdz_enc(input: &[u16], out: &mut [u8], previous: u16) -> usize {
    log::trace!("shortdz_enc: {} elements, previous={previous}", input.len());
    let mut deltas = input.to_vec();
    delta_encode_seq16(&mut deltas, previous);
    for v in deltas.iter_mut() {
        *v = zigzag_encode16(*v);
    }
    short_enc(&deltas, out)
}

pub fn shortdz_dec(input: &[u8], count: usize, out: &mut [u16], previous: u16) -> usize {
    log::trace!("shortdz_dec: {count} elements, previous={previous}");
    let consumed = short_dec(input, count, out);
    for v in out.iter_mut() {
        *v = zigzag_decode16(*v);
    }
    delta_decode_seq16(out, previous);
    consumed
}
