//! Linear resampling for non-engine container rates.

/// Linearly resamples `input` from `src_hz` to `dst_hz`.
///
/// Output length is `floor(len * dst / src)`. Equal rates and empty input
/// return the input unchanged. Interpolation reads one sample past each
/// position and holds the last sample at the tail.
pub fn resample_linear(input: &[f64], src_hz: u32, dst_hz: u32) -> Vec<f64> {
    if src_hz == dst_hz || input.is_empty() {
        return input.to_vec();
    }

    let out_len = ((input.len() as u64) * u64::from(dst_hz) / u64::from(src_hz)) as usize;
    let mut out = vec![0.0; out_len];

    for (i, sample) in out.iter_mut().enumerate() {
        let src_pos = i as f64 * f64::from(src_hz) / f64::from(dst_hz);
        let idx = src_pos.floor() as usize;
        let frac = src_pos - idx as f64;

        let a = input.get(idx).copied().unwrap_or(0.0);
        let b = input.get(idx + 1).copied().unwrap_or(a);
        *sample = a * (1.0 - frac) + b * frac;
    }

    out
}
