//! Reduction of a laser stack into the square feature map.
//!
//! Each stacked scan is pooled into `feature_map_size` angular sectors
//! twice: the per-sector minimum keeps the nearest-obstacle signal, the
//! per-sector mean keeps the local density. The two rows per scan are
//! interleaved into a `2*depth x feature_map_size` matrix which is then
//! tiled to fill the square map. The tiling repeats rows; that redundancy
//! is a fixed characteristic of the encoding the downstream convolutional
//! extractors were trained against, and is preserved exactly.

use crate::observation::laser_stack::LaserStack;

/// Reduce a laser stack into a flat `feature_map_size^2` map.
///
/// Never fails: any geometry inconsistency (unprimed stack, scan length
/// not divisible into sectors, pooled matrix that does not tile the
/// square) is logged as a warning and yields an all-zero map of the
/// declared size.
pub fn build_laser_map(stack: &LaserStack, feature_map_size: usize) -> Vec<f32> {
    let out_len = feature_map_size * feature_map_size;
    match try_build(stack, feature_map_size, out_len) {
        Ok(map) => map,
        Err(reason) => {
            log::warn!("cannot build laser map: {}; returning empty map", reason);
            vec![0.0; out_len]
        }
    }
}

fn try_build(
    stack: &LaserStack,
    feature_map_size: usize,
    out_len: usize,
) -> Result<Vec<f32>, String> {
    let depth = stack.len();
    if depth == 0 {
        return Err("scan history is empty".into());
    }

    let scan_len = stack.latest().map(|s| s.len()).unwrap_or(0);
    if scan_len == 0 || scan_len % feature_map_size != 0 {
        return Err(format!(
            "scan length {} does not split into {} sectors",
            scan_len, feature_map_size
        ));
    }
    let sector = scan_len / feature_map_size;

    let pooled_len = 2 * depth * feature_map_size;
    if out_len % pooled_len != 0 {
        return Err(format!(
            "pooled matrix of {} values does not tile a map of {}",
            pooled_len, out_len
        ));
    }

    // Interleaved min/mean pooling: row 2n = sector minima of scan n,
    // row 2n+1 = sector means. Scan 0 is the most recent.
    let mut pooled = vec![0.0f32; pooled_len];
    for (n, scan) in stack.iter().enumerate() {
        if scan.len() != scan_len {
            return Err(format!(
                "scan {} has {} beams, expected {}",
                n,
                scan.len(),
                scan_len
            ));
        }
        for i in 0..feature_map_size {
            let group = &scan[i * sector..(i + 1) * sector];
            let min = group.iter().copied().fold(f32::INFINITY, f32::min);
            let mean = group.iter().sum::<f32>() / sector as f32;
            pooled[2 * n * feature_map_size + i] = min;
            pooled[(2 * n + 1) * feature_map_size + i] = mean;
        }
    }

    let tile = out_len / pooled_len;
    let mut map = Vec::with_capacity(out_len);
    for _ in 0..tile {
        map.extend_from_slice(&pooled);
    }
    Ok(map)
}
