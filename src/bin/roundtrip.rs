//! Tiny end-to-end demo: encode a synthetic array with each variant, decode
//! it back, and report the compression ratio achieved.

use streamvbyte::{
    short_compress_bound, short_dec, short_enc, streamvbyte_compress_bound, svb0_dec, svb0_enc,
    svb1d_dec, svb1d_enc, svb1dt_dec, svb1dt_enc, svb1z_dec, svb1z_enc,
};

fn report(name: &str, raw_len: usize, encoded_len: usize) {
    let ratio = encoded_len as f64 / raw_len as f64;
    println!("{name:>12}: {raw_len} bytes -> {encoded_len} bytes ({ratio:.3}x)");
}

fn main() {
    env_logger::init();

    let monotone: Vec<u32> = (0..10_000u32).map(|i| i * 3 + 7).collect();
    let mut out = vec![0u8; streamvbyte_compress_bound(monotone.len())];
    let written = svb1d_enc(&monotone, &mut out, 0);
    report("svb1d", monotone.len() * 4, written);
    let mut decoded = vec![0u32; monotone.len()];
    svb1d_dec(&out[..written], monotone.len(), &mut decoded, 0);
    assert_eq!(decoded, monotone);

    let mut out_dt = vec![0u8; streamvbyte_compress_bound(monotone.len())];
    let written_dt = svb1dt_enc(&monotone, &mut out_dt, 0);
    report("svb1dt", monotone.len() * 4, written_dt);
    let mut decoded_dt = vec![0u32; monotone.len()];
    svb1dt_dec(&out_dt[..written_dt], monotone.len(), &mut decoded_dt, 0);
    assert_eq!(decoded_dt, monotone);

    let signed: Vec<u32> = (0..10_000i32)
        .map(|i| (i - 5_000) as u32)
        .collect();
    let mut out_z = vec![0u8; streamvbyte_compress_bound(signed.len())];
    let written_z = svb1z_enc(&signed, &mut out_z);
    report("svb1z", signed.len() * 4, written_z);
    let mut decoded_z = vec![0u32; signed.len()];
    svb1z_dec(&out_z[..written_z], signed.len(), &mut decoded_z);
    assert_eq!(decoded_z, signed);

    let sparse: Vec<u32> = (0..10_000u32)
        .map(|i| if i % 17 == 0 { i } else { 0 })
        .collect();
    let mut out0 = vec![0u8; streamvbyte_compress_bound(sparse.len())];
    let written0 = svb0_enc(&sparse, &mut out0);
    report("svb0", sparse.len() * 4, written0);
    let mut decoded0 = vec![0u32; sparse.len()];
    svb0_dec(&out0[..written0], sparse.len(), &mut decoded0);
    assert_eq!(decoded0, sparse);

    let small: Vec<u16> = (0..10_000u32).map(|i| (i % 300) as u16).collect();
    let mut out_short = vec![0u8; short_compress_bound(small.len())];
    let written_short = short_enc(&small, &mut out_short);
    report("short", small.len() * 2, written_short);
    let mut decoded_short = vec![0u16; small.len()];
    short_dec(&out_short[..written_short], small.len(), &mut decoded_short);
    assert_eq!(decoded_short, small);
}
