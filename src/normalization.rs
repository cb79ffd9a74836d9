//! Min-max normalization of encoded observations.
//!
//! Normalization is explicit composition: every observation space that
//! opts in calls [`normalize_in_place`] at the end of its own encode path
//! with the bounds it declared. There is no implicit wrapping layer, so
//! the contract is visible at each call site.

use crate::spaces::SpaceDescriptor;

/// Rescale `values` into [0, 1] against per-element bounds.
///
/// Elements whose declared bounds collapse (`high == low`) map to 0.0.
/// Values outside the declared bounds are clamped after rescaling, so a
/// range reading slightly above `laser_max_range` cannot push a feature
/// outside the advertised space.
pub fn normalize_in_place(values: &mut [f32], descriptor: &SpaceDescriptor) {
    for (i, v) in values.iter_mut().enumerate() {
        let low = descriptor.low_at(i);
        let high = descriptor.high_at(i);
        let span = high - low;
        *v = if span > 0.0 {
            ((*v - low) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
    }
}
