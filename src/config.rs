//! Shared configuration for observation-space construction.
//!
//! One `SpaceConfig` is handed to every space a manager builds, so the
//! space manager and the feature extractor consuming its output always
//! agree on shapes. Validation happens once, at construction time; the
//! per-step encode path never re-checks geometry.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{NavError, Result};

/// Configuration shared by all observation spaces of one agent.
///
/// # Example
/// ```ignore
/// let config = SpaceConfig::new()
///     .with_laser_num_beams(720)
///     .with_feature_map_size(80)
///     .with_roi_in_m(20.0)
///     .with_normalize(true);
/// config.validate()?;
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpaceConfig {
    /// Number of beams the flat laser space exposes.
    pub laser_num_beams: usize,
    /// Maximum laser range (m); upper bound of the flat laser space.
    pub laser_max_range: f32,
    /// Depth of the temporal laser stack.
    pub laser_stack_size: usize,
    /// Side length of the square feature maps.
    pub feature_map_size: usize,
    /// Physical span of a feature map (m); upper bound of the laser map.
    pub roi_in_m: f32,
    /// Expose feature maps flattened to one dimension.
    pub flatten: bool,
    /// Min-max normalize every encoded array into [0, 1] against its
    /// declared bounds.
    pub normalize: bool,
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            laser_num_beams: CANONICAL_BEAM_COUNT,
            laser_max_range: DEFAULT_LASER_MAX_RANGE,
            laser_stack_size: DEFAULT_LASER_STACK_SIZE,
            feature_map_size: DEFAULT_FEATURE_MAP_SIZE,
            roi_in_m: DEFAULT_ROI_IN_M,
            flatten: true,
            normalize: false,
        }
    }
}

impl SpaceConfig {
    /// Create a config with the deployed defaults (720 beams, 10-deep
    /// stack, 80x80 maps over a 20 m ROI).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flat laser space's beam count.
    pub fn with_laser_num_beams(mut self, laser_num_beams: usize) -> Self {
        self.laser_num_beams = laser_num_beams;
        self
    }

    /// Set the maximum laser range (m).
    pub fn with_laser_max_range(mut self, laser_max_range: f32) -> Self {
        self.laser_max_range = laser_max_range;
        self
    }

    /// Set the temporal laser stack depth.
    pub fn with_laser_stack_size(mut self, laser_stack_size: usize) -> Self {
        self.laser_stack_size = laser_stack_size;
        self
    }

    /// Set the feature map side length.
    pub fn with_feature_map_size(mut self, feature_map_size: usize) -> Self {
        self.feature_map_size = feature_map_size;
        self
    }

    /// Set the region of interest (m).
    pub fn with_roi_in_m(mut self, roi_in_m: f32) -> Self {
        self.roi_in_m = roi_in_m;
        self
    }

    /// Expose feature maps as square matrices instead of flat vectors.
    pub fn with_flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }

    /// Enable min-max normalization of every encoded array.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Check the geometric constraints the map builder relies on.
    ///
    /// The canonical scan must split into `feature_map_size` equal groups,
    /// and the interleaved min/mean matrix (2 rows per stacked scan) must
    /// tile a whole number of times into the square map.
    pub fn validate(&self) -> Result<()> {
        if self.laser_num_beams == 0 {
            return Err(NavError::InvalidConfig {
                param: "laser_num_beams".into(),
                message: "must be positive".into(),
            });
        }
        if self.laser_stack_size == 0 {
            return Err(NavError::InvalidConfig {
                param: "laser_stack_size".into(),
                message: "must be positive".into(),
            });
        }
        if self.feature_map_size == 0 {
            return Err(NavError::InvalidConfig {
                param: "feature_map_size".into(),
                message: "must be positive".into(),
            });
        }
        if !(self.laser_max_range > 0.0) {
            return Err(NavError::InvalidConfig {
                param: "laser_max_range".into(),
                message: "must be positive".into(),
            });
        }
        if !(self.roi_in_m > 0.0) {
            return Err(NavError::InvalidConfig {
                param: "roi_in_m".into(),
                message: "must be positive".into(),
            });
        }
        if CANONICAL_BEAM_COUNT % self.feature_map_size != 0 {
            return Err(NavError::InvalidConfig {
                param: "feature_map_size".into(),
                message: format!(
                    "must divide the canonical beam count {}, got {}",
                    CANONICAL_BEAM_COUNT, self.feature_map_size
                ),
            });
        }
        if self.feature_map_size % (2 * self.laser_stack_size) != 0 {
            return Err(NavError::InvalidConfig {
                param: "laser_stack_size".into(),
                message: format!(
                    "2 * stack size must divide feature_map_size {}, got stack size {}",
                    self.feature_map_size, self.laser_stack_size
                ),
            });
        }
        Ok(())
    }
}
