//! Pedestrian feature maps rasterized over the region of interest.

use crate::config::SpaceConfig;
use crate::constants::{PED_MAX_SPEED, PED_SOCIAL_STATE_MAX, PED_TYPE_MAX};
use crate::normalization::normalize_in_place;
use crate::observation::raw::{Channel, RawObservation};
use crate::spaces::factory::SpaceKind;
use crate::spaces::space::{ObservationSpace, SpaceDescriptor};

/// Which per-pedestrian value a map carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PedestrianFeature {
    /// x velocity (m/s).
    VelX,
    /// y velocity (m/s).
    VelY,
    /// Type id.
    Type,
    /// Social-state id.
    SocialState,
}

impl PedestrianFeature {
    fn kind(self) -> SpaceKind {
        match self {
            Self::VelX => SpaceKind::PedestrianVelX,
            Self::VelY => SpaceKind::PedestrianVelY,
            Self::Type => SpaceKind::PedestrianType,
            Self::SocialState => SpaceKind::PedestrianSocialState,
        }
    }

    fn value_channel(self) -> Channel {
        match self {
            Self::VelX => Channel::PedestrianVelX,
            Self::VelY => Channel::PedestrianVelY,
            Self::Type => Channel::PedestrianType,
            Self::SocialState => Channel::PedestrianSocialState,
        }
    }

    fn bounds(self) -> (f32, f32) {
        match self {
            Self::VelX | Self::VelY => (-PED_MAX_SPEED, PED_MAX_SPEED),
            Self::Type => (0.0, PED_TYPE_MAX),
            Self::SocialState => (0.0, PED_SOCIAL_STATE_MAX),
        }
    }
}

/// Square grid over the ROI, centered on the robot.
#[derive(Clone, Copy, Debug)]
pub struct FeatureMapGrid {
    size: usize,
    roi_in_m: f32,
}

impl FeatureMapGrid {
    pub fn new(size: usize, roi_in_m: f32) -> Self {
        Self { size, roi_in_m }
    }

    /// Side length in cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Flat cell index for a robot-frame position, `None` outside the ROI.
    pub fn index(&self, rel_x: f32, rel_y: f32) -> Option<usize> {
        let half = self.roi_in_m / 2.0;
        if rel_x < -half || rel_x >= half || rel_y < -half || rel_y >= half {
            return None;
        }
        let scale = self.size as f32 / self.roi_in_m;
        let cell_x = (((rel_x + half) * scale) as usize).min(self.size - 1);
        let cell_y = (((rel_y + half) * scale) as usize).min(self.size - 1);
        Some(cell_y * self.size + cell_x)
    }
}

/// One pedestrian value channel rasterized into the feature-map grid.
///
/// Pedestrian positions arrive in the world frame together with the robot
/// pose; each pedestrian inside the ROI writes its value into the grid
/// cell of its robot-frame position. Missing channels rasterize nothing,
/// yielding the all-zero map.
#[derive(Clone, Debug)]
pub struct PedestrianMapSpace {
    feature: PedestrianFeature,
    grid: FeatureMapGrid,
    flatten: bool,
    normalize: bool,
}

impl PedestrianMapSpace {
    pub fn new(feature: PedestrianFeature, config: &SpaceConfig) -> Self {
        Self {
            feature,
            grid: FeatureMapGrid::new(config.feature_map_size, config.roi_in_m),
            flatten: config.flatten,
            normalize: config.normalize,
        }
    }
}

impl ObservationSpace for PedestrianMapSpace {
    fn kind(&self) -> SpaceKind {
        self.feature.kind()
    }

    fn required_observations(&self) -> &'static [Channel] {
        self.feature.kind().required_observations()
    }

    fn descriptor(&self) -> SpaceDescriptor {
        let size = self.grid.size();
        let shape = if self.flatten {
            vec![size * size]
        } else {
            vec![size, size]
        };
        let (low, high) = self.feature.bounds();
        SpaceDescriptor::uniform(shape, low, high)
    }

    fn encode(&mut self, obs: &RawObservation) -> Vec<f32> {
        let size = self.grid.size();
        let mut map = vec![0.0f32; size * size];

        let pose = obs.vector(Channel::RobotPose).filter(|p| p.len() >= 3);
        let locations = obs.vector(Channel::PedestrianLocation);
        let values = obs.vector(self.feature.value_channel());

        if let (Some(pose), Some(locations), Some(values)) = (pose, locations, values) {
            let (cos_t, sin_t) = (pose[2].cos(), pose[2].sin());
            let count = (locations.len() / 2).min(values.len());
            for k in 0..count {
                let dx = locations[2 * k] - pose[0];
                let dy = locations[2 * k + 1] - pose[1];
                // world -> robot frame
                let rel_x = cos_t * dx + sin_t * dy;
                let rel_y = -sin_t * dx + cos_t * dy;
                if let Some(cell) = self.grid.index(rel_x, rel_y) {
                    map[cell] = values[k];
                }
            }
        }

        if self.normalize {
            normalize_in_place(&mut map, &self.descriptor());
        }
        map
    }
}
