//! StreamVByte-family integer codecs.
//!
//! Two 32-bit formats — `svb1` ("1234": every element stored in 1-4 bytes)
//! and `svb0` ("0124": zero-valued elements stored in 0 bytes) — each with
//! five variants (`_`, `z` zigzag, `d` delta, `dz` delta+zigzag, `dt`
//! delta+transpose), plus an independent 16-bit `short` codec. All streams
//! are raw: no header, no length prefix, no checksum. The element count is
//! always supplied out-of-band by the caller.
//!
//! Every `_enc` function returns the number of bytes written to `out`;
//! every `_dec` function returns the number of bytes consumed from `in`.
//! `out` must be sized to at least the relevant `*_compress_bound`.

mod bitops;
mod bound;
mod codec;
mod error;
mod filters;
mod short;
mod svb0;
mod svb1;
mod tables;

pub use bound::{short_compress_bound, streamvbyte_compress_bound};
pub use error::SvbError;
pub use short::{
    short_dec, short_enc, shortd_dec, shortd_enc, shortdz_dec, shortdz_enc, shortz_dec, shortz_enc,
};
pub use svb0::{
    svb0_dec, svb0_enc, svb0d_dec, svb0d_enc, svb0dt_dec, svb0dt_enc, svb0dz_dec, svb0dz_enc,
    svb0z_dec, svb0z_enc,
};
pub use svb1::{
    svb1_dec, svb1_enc, svb1d_dec, svb1d_enc, svb1dt_dec, svb1dt_enc, svb1dz_dec, svb1dz_enc,
    svb1z_dec, svb1z_enc,
};

/// Decodes `count` SVB1 elements after checking that `input` is long enough
/// to plausibly hold them, instead of trusting the caller the way
/// [`svb1_dec`] does.
///
/// This only bounds-checks the key block; a truncated data block still
/// produces a panic from the underlying slice indexing, because recovering
/// the exact data length requires decoding the keys first. Callers that
/// need a hard guarantee against panics on untrusted input should pad
/// `input` to `streamvbyte_compress_bound(count)` bytes, per the upstream
/// algorithm's read-ahead discipline.
pub fn checked_svb1_dec(
    input: &[u8],
    count: usize,
    out: &mut [u32],
) -> Result<usize, SvbError> {
    checked_key_block(input, count, 2)?;
    Ok(svb1_dec(input, count, out))
}

/// See [`checked_svb1_dec`].
pub fn checked_svb0_dec(
    input: &[u8],
    count: usize,
    out: &mut [u32],
) -> Result<usize, SvbError> {
    checked_key_block(input, count, 2)?;
    Ok(svb0_dec(input, count, out))
}

/// See [`checked_svb1_dec`].
pub fn checked_short_dec(
    input: &[u8],
    count: usize,
    out: &mut [u16],
) -> Result<usize, SvbError> {
    checked_key_block(input, count, 1)?;
    Ok(short_dec(input, count, out))
}

/// Encodes `input` with [`svb1_enc`] after checking `out` is at least
/// `streamvbyte_compress_bound(input.len())` bytes.
pub fn checked_svb1_enc(input: &[u32], out: &mut [u8]) -> Result<usize, SvbError> {
    checked_out_len(out, streamvbyte_compress_bound(input.len()))?;
    Ok(svb1_enc(input, out))
}

/// See [`checked_svb1_enc`].
pub fn checked_svb0_enc(input: &[u32], out: &mut [u8]) -> Result<usize, SvbError> {
    checked_out_len(out, streamvbyte_compress_bound(input.len()))?;
    Ok(svb0_enc(input, out))
}

/// See [`checked_svb1_enc`].
pub fn checked_short_enc(input: &[u16], out: &mut [u8]) -> Result<usize, SvbError> {
    checked_out_len(out, short_compress_bound(input.len()))?;
    Ok(short_enc(input, out))
}

fn checked_out_len(out: &[u8], needed: usize) -> Result<(), SvbError> {
    if out.len() < needed {
        return Err(SvbError::OutputTooSmall {
            needed,
            got: out.len(),
        });
    }
    Ok(())
}

fn checked_key_block(input: &[u8], count: usize, kbits: usize) -> Result<(), SvbError> {
    let needed = bitops::key_block_len(count, kbits);
    if input.len() < needed {
        return Err(SvbError::TruncatedInput {
            needed,
            got: input.len(),
            count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_decode_rejects_truncated_key_block() {
        let input = [0u8; 1];
        let mut out = [0u32; 8];
        let err = checked_svb1_dec(&input, 8, &mut out).unwrap_err();
        assert_eq!(
            err,
            SvbError::TruncatedInput {
                needed: 2,
                got: 1,
                count: 8
            }
        );
    }

    #[test]
    fn checked_decode_accepts_well_formed_stream() {
        let input = [1u32, 2, 3, 4];
        let mut buf = vec![0u8; streamvbyte_compress_bound(input.len())];
        let written = svb1_enc(&input, &mut buf);
        let mut decoded = vec![0u32; input.len()];
        let consumed = checked_svb1_dec(&buf[..written], input.len(), &mut decoded).unwrap();
        assert_eq!(consumed, written);
        assert_eq!(decoded, input);
    }

    #[test]
    fn checked_encode_rejects_undersized_output() {
        let input = [1u32, 2, 3, 4];
        let mut buf = [0u8; 2];
        let err = checked_svb1_enc(&input, &mut buf).unwrap_err();
        assert_eq!(
            err,
            SvbError::OutputTooSmall {
                needed: streamvbyte_compress_bound(4),
                got: 2
            }
        );
    }

    #[test]
    fn checked_encode_accepts_well_sized_output() {
        let input = [1u32, 2, 3, 4];
        let mut buf = vec![0u8; streamvbyte_compress_bound(input.len())];
        let written = checked_svb1_enc(&input, &mut buf).unwrap();
        let mut decoded = vec![0u32; input.len()];
        svb1_dec(&buf[..written], input.len(), &mut decoded);
        assert_eq!(decoded, input);
    }
}
