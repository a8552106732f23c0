//! The "0124" format: every element is stored in 0, 1, 2, or 4 bytes, with
//! zero-valued elements consuming no payload. Same five variants as
//! [`crate::svb1`], built on the same generic core.

use crate::codec::{decode_raw, encode_raw};
use crate::filters::{
    delta_decode_seq, delta_encode_seq, transpose_block, zigzag_decode, zigzag_encode,
};
use crate::tables::Svb0;

pub fn svb0_enc(input: &[u32], out: &mut [u8]) -> usize {
    log::trace!("svb0_enc: {} elements", input.len());
    encode_raw::<Svb0>(input, out)
}

pub fn svb0_dec(input: &[u8], count: usize, out: &mut [u32]) -> usize {
    log::trace!("svb0_dec: {count} elements");
    decode_raw::<Svb0>(input, count, out)
}

pub fn svb0z_enc(input: &[u32], out: &mut [u8]) -> usize {
    log::trace!("svb0z_enc: {} elements", input.len());
    let mapped: Vec<u32> = input.iter().map(|&v| zigzag_encode(v)).collect();
    encode_raw::<Svb0>(&mapped, out)
}

pub fn svb0z_dec(input: &[u8], count: usize, out: &mut [u32]) -> usize {
    log::trace!("svb0z_dec: {count} elements");
    let consumed = decode_raw::<Svb0>(input, count, out);
    for v in out.iter_mut() {
        *v = zigzag_decode(*v);
    }
    consumed
}

pub fn svb0d_enc(input: &[u32], out: &mut [u8], previous: u32) -> usize {
    log::trace!("svb0d_enc: {} elements, previous={previous}", input.len());
    let mut deltas = input.to_vec();
    delta_encode_seq(&mut deltas, previous);
    encode_raw::<Svb0>(&deltas, out)
}

pub fn svb0d_dec(input: &[u8], count: usize, out: &mut [u32], previous: u32) -> usize {
    log::trace!("svb0d_dec: {count} elements, previous={previous}");
    let consumed = decode_raw::<Svb0>(input, count, out);
    delta_decode_seq(out, previous);
    consumed
}

pub fn svb0dz_enc(input: &[u32], out: &mut [u8], previous: u32) -> usize {
    log::trace!("svb0dz_enc: {} elements, previous={previous}", input.len());
    let mut deltas = input.to_vec();
    delta_encode_seq(&mut deltas, previous);
    for v in deltas.iter_mut() {
        *v = zigzag_encode(*v);
    }
    encode_raw::<Svb0>(&deltas, out)
}

pub fn svb0dz_dec(input: &[u8], count: usize, out: &mut [u32], previous: u32) -> usize {
    log::trace!("svb0dz_dec: {count} elements, previous={previous}");
    let consumed = decode_raw::<Svb0>(input, count, out);
    for v in out.iter_mut() {
        *v = zigzag_decode(*v);
    }
    delta_decode_seq(out, previous);
    consumed
}

pub fn svb0dt_enc(input: &[u32], out: &mut [u8], previous: u32) -> usize {
    log::trace!("svb0dt_enc: {} elements, previous={previous}", input.len());
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
    encode_raw::<Svb0>(&transformed, out)
}

pub fn svb0dt_dec(input: &[u8], count: usize, out: &mut [u32], previous: u32) -> usize {
    log::trace!("svb0dt_dec: {count} elements, previous={previous}");
    let consumed = decode_raw::<Svb0>(input, count, out);

    let mut anchor = previous;
    let mut idx = 0;
    while count - idx >= 64 {
        let mut block: [u32; 64] = out[idx..idx + 64].try_into().unwrap();
        delta_decode_seq(&mut block, anchor);
        transpose_block(&mut block);
        out[idx..idx + 64].copy_from_slice(&block);
        anchor = block[63];
        idx += 64;
    }
    if idx < count {
        delta_decode_seq(&mut out[idx..count], anchor);
    }
    consumed
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::bound::streamvbyte_compress_bound;

    #[test]
    fn svb0_basic_round_trip() {
        let input = [0u32, 1, 255, 256, 65535, 65536, 16_777_215];
        let mut out = vec![0u8; streamvbyte_compress_bound(input.len())];
        let written = svb0_enc(&input, &mut out);
        assert_eq!(written, 16);
        assert_eq!(&out[..2], &[0x94, 0x3E]);

        let mut decoded = vec![0u32; input.len()];
        svb0_dec(&out[..written], input.len(), &mut decoded);
        assert_eq!(decoded, input);
    }

    #[test]
    fn svb0_all_zero_is_one_byte() {
        let input = [0u32; 4];
        let mut out = vec![0u8; streamvbyte_compress_bound(input.len())];
        let written = svb0_enc(&input, &mut out);
        assert_eq!(written, 1);
        assert_eq!(out[0], 0x00);
    }

    #[test]
    fn svb0z_round_trip_with_negatives() {
        let signed = [0i32, -1, 1, -1000, 1000];
        let input: Vec<u32> = signed.iter().map(|&v| v as u32).collect();
        let mut out = vec![0u8; streamvbyte_compress_bound(input.len())];
        let written = svb0z_enc(&input, &mut out);
        let mut decoded = vec![0u32; input.len()];
        svb0z_dec(&out[..written], input.len(), &mut decoded);
        assert_eq!(decoded, input);
    }

    #[test]
    fn svb0d_round_trip() {
        let input = [10u32, 11, 11, 13, 13, 13];
        let mut out = vec![0u8; streamvbyte_compress_bound(input.len())];
        let written = svb0d_enc(&input, &mut out, 10);
        let mut decoded = vec![0u32; input.len()];
        svb0d_dec(&out[..written], input.len(), &mut decoded, 10);
        assert_eq!(decoded, input);
    }

    #[test]
    fn svb0dz_round_trip() {
        let input: Vec<u32> = vec![0, 5, 4, 9, 1, 4_000_000_000];
        let mut out = vec![0u8; streamvbyte_compress_bound(input.len())];
        let written = svb0dz_enc(&input, &mut out, 0);
        let mut decoded = vec![0u32; input.len()];
        svb0dz_dec(&out[..written], input.len(), &mut decoded, 0);
        assert_eq!(decoded, input);
    }

    #[test]
    fn svb0dt_round_trip_exact_block() {
        let input: Vec<u32> = (0..64u32).map(|i| (i % 7) * (i % 7)).collect();
        let mut out = vec![0u8; streamvbyte_compress_bound(input.len())];
        let written = svb0dt_enc(&input, &mut out, 0);
        let mut decoded = vec![0u32; input.len()];
        svb0dt_dec(&out[..written], input.len(), &mut decoded, 0);
        assert_eq!(decoded, input);
    }

    #[test]
    fn svb0dt_round_trip_with_tail() {
        let input: Vec<u32> = (0..100u32).map(|i| i.wrapping_mul(13)).collect();
        let mut out = vec![0u8; streamvbyte_compress_bound(input.len())];
        let written = svb0dt_enc(&input, &mut out, 3);
        let mut decoded = vec![0u32; input.len()];
        svb0dt_dec(&out[..written], input.len(), &mut decoded, 3);
        assert_eq!(decoded, input);
    }
}
