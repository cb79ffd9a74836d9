//! Angle-based resampling of laser scans to the canonical beam count.

use std::f32::consts::PI;

use crate::constants::{CANONICAL_BEAM_COUNT, INTERP_EPS, RESAMPLE_SOURCE_BEAMS};

/// Resample a raw scan to the canonical beam count.
///
/// This is a narrow compatibility shim for the 512-beam lidar revision,
/// not a general N-to-M resampler: only scans of exactly
/// [`RESAMPLE_SOURCE_BEAMS`] beams are interpolated; every other length
/// passes through unchanged. Beams are assumed evenly spaced over a full
/// turn with angle increment `2*pi / (len - 1)`, angle-indexed from -pi
/// to +pi.
///
/// Each target beam is the linear interpolation between the two native
/// beams bracketing its angle, with indices clamped to the native range
/// and an epsilon keeping the weight finite when both brackets collapse
/// onto the same index.
pub fn resample_scan(scan: &[f32]) -> Vec<f32> {
    if scan.len() != RESAMPLE_SOURCE_BEAMS {
        return scan.to_vec();
    }

    let src_len = scan.len();
    let tgt_len = CANONICAL_BEAM_COUNT;
    let d_src = 2.0 * PI / (src_len as f32 - 1.0);
    let d_tgt = 2.0 * PI / (tgt_len as f32 - 1.0);
    let last = src_len - 1;

    let mut out = vec![0.0f32; tgt_len];
    for (i, beam) in out.iter_mut().enumerate() {
        let theta = (i as f32 - tgt_len as f32 / 2.0) * d_tgt;

        let idx_low =
            (((theta + PI) / d_src).floor() as isize).clamp(0, last as isize) as usize;
        let idx_high =
            (((theta + PI) / d_src).ceil() as isize).clamp(0, last as isize) as usize;

        let theta_low = (idx_low as f32 - src_len as f32 / 2.0) * d_src;
        let theta_high = (idx_high as f32 - src_len as f32 / 2.0) * d_src;

        let weight = (theta - theta_low) / ((theta_high - theta_low) + INTERP_EPS);
        *beam = scan[idx_low] + weight * (scan[idx_high] - scan[idx_low]);
    }
    out
}
