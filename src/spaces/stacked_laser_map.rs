//! Temporal laser history pooled into a square feature map.

use crate::config::SpaceConfig;
use crate::normalization::normalize_in_place;
use crate::observation::feature_map::build_laser_map;
use crate::observation::laser_stack::LaserStack;
use crate::observation::raw::{Channel, RawObservation};
use crate::observation::resample::resample_scan;
use crate::spaces::factory::SpaceKind;
use crate::spaces::space::{ObservationSpace, SpaceDescriptor};

/// Laser history over the last `laser_stack_size` steps, min/mean pooled
/// into a `feature_map_size^2` map bounded by the ROI.
///
/// Owns the temporal buffer. Per step: resample the incoming scan to the
/// canonical beam count, prime the stack on first contact, push, pool the
/// stack into the map, and zero-reset the stack when the episode-done
/// flag is set so no history leaks into the next episode. A missing or
/// malformed laser channel returns an all-zero map and leaves the buffer
/// untouched.
#[derive(Clone, Debug)]
pub struct StackedLaserMapSpace {
    stack: LaserStack,
    feature_map_size: usize,
    roi_in_m: f32,
    flatten: bool,
    normalize: bool,
}

impl StackedLaserMapSpace {
    pub fn new(config: &SpaceConfig) -> Self {
        Self {
            stack: LaserStack::new(config.laser_stack_size),
            feature_map_size: config.feature_map_size,
            roi_in_m: config.roi_in_m,
            flatten: config.flatten,
            normalize: config.normalize,
        }
    }

    /// Side length of the square feature map.
    #[inline]
    pub fn feature_map_size(&self) -> usize {
        self.feature_map_size
    }

    /// Current scan buffer (test and introspection hook).
    pub fn stack(&self) -> &LaserStack {
        &self.stack
    }
}

impl ObservationSpace for StackedLaserMapSpace {
    fn kind(&self) -> SpaceKind {
        SpaceKind::StackedLaserMap
    }

    fn required_observations(&self) -> &'static [Channel] {
        SpaceKind::StackedLaserMap.required_observations()
    }

    fn descriptor(&self) -> SpaceDescriptor {
        let shape = if self.flatten {
            vec![self.feature_map_size * self.feature_map_size]
        } else {
            vec![self.feature_map_size, self.feature_map_size]
        };
        SpaceDescriptor::uniform(shape, 0.0, self.roi_in_m)
    }

    fn encode(&mut self, obs: &RawObservation) -> Vec<f32> {
        let out_len = self.feature_map_size * self.feature_map_size;

        let Some(raw_scan) = obs.vector(Channel::Laser) else {
            return vec![0.0; out_len];
        };

        let scan = resample_scan(raw_scan);
        let scan_len = scan.len();
        if self.stack.is_empty() {
            self.stack.reset(scan_len);
        }
        self.stack.push(scan);

        let mut map = build_laser_map(&self.stack, self.feature_map_size);

        if obs.flag(Channel::Done) {
            self.stack.reset(scan_len);
        }

        if self.normalize {
            normalize_in_place(&mut map, &self.descriptor());
        }
        map
    }
}
