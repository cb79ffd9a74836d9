//! Last commanded action space.

use crate::config::SpaceConfig;
use crate::constants::{MAX_ANGULAR_VEL, MAX_LINEAR_VEL};
use crate::normalization::normalize_in_place;
use crate::observation::raw::{Channel, RawObservation};
use crate::spaces::factory::SpaceKind;
use crate::spaces::space::{ObservationSpace, SpaceDescriptor};

/// Last commanded velocity `[vx, vy, omega]`, bounded by the base's
/// velocity envelope.
#[derive(Clone, Debug)]
pub struct LastActionSpace {
    normalize: bool,
}

impl LastActionSpace {
    pub fn new(config: &SpaceConfig) -> Self {
        Self {
            normalize: config.normalize,
        }
    }
}

impl ObservationSpace for LastActionSpace {
    fn kind(&self) -> SpaceKind {
        SpaceKind::LastAction
    }

    fn required_observations(&self) -> &'static [Channel] {
        SpaceKind::LastAction.required_observations()
    }

    fn descriptor(&self) -> SpaceDescriptor {
        SpaceDescriptor::per_element(
            vec![3],
            vec![-MAX_LINEAR_VEL, -MAX_LINEAR_VEL, -MAX_ANGULAR_VEL],
            vec![MAX_LINEAR_VEL, MAX_LINEAR_VEL, MAX_ANGULAR_VEL],
        )
    }

    fn encode(&mut self, obs: &RawObservation) -> Vec<f32> {
        let mut out = match obs.vector(Channel::LastAction) {
            Some(v) if v.len() >= 3 => vec![v[0], v[1], v[2]],
            _ => vec![0.0, 0.0, 0.0],
        };
        if self.normalize {
            normalize_in_place(&mut out, &self.descriptor());
        }
        out
    }
}
