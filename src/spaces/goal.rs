//! Goal and subgoal spaces: distance and angle in the robot frame.

use std::f32::consts::PI;

use crate::config::SpaceConfig;
use crate::constants::GOAL_MAX_DIST;
use crate::normalization::normalize_in_place;
use crate::observation::raw::{Channel, RawObservation};
use crate::spaces::factory::SpaceKind;
use crate::spaces::space::{ObservationSpace, SpaceDescriptor};

/// `[distance, angle]` to the goal or current subgoal, robot frame.
///
/// Distance is bounded by [`GOAL_MAX_DIST`], angle by a full turn around
/// zero. The same implementation serves both the goal and the subgoal
/// space; only the source channel and the semantic tag differ.
#[derive(Clone, Debug)]
pub struct GoalSpace {
    kind: SpaceKind,
    channel: Channel,
    normalize: bool,
}

impl GoalSpace {
    /// Space reading the final goal.
    pub fn goal(config: &SpaceConfig) -> Self {
        Self {
            kind: SpaceKind::Goal,
            channel: Channel::GoalInRobotFrame,
            normalize: config.normalize,
        }
    }

    /// Space reading the planner's current subgoal.
    pub fn subgoal(config: &SpaceConfig) -> Self {
        Self {
            kind: SpaceKind::Subgoal,
            channel: Channel::SubgoalInRobotFrame,
            normalize: config.normalize,
        }
    }
}

impl ObservationSpace for GoalSpace {
    fn kind(&self) -> SpaceKind {
        self.kind
    }

    fn required_observations(&self) -> &'static [Channel] {
        self.kind.required_observations()
    }

    fn descriptor(&self) -> SpaceDescriptor {
        SpaceDescriptor::per_element(
            vec![2],
            vec![0.0, -PI],
            vec![GOAL_MAX_DIST, PI],
        )
    }

    fn encode(&mut self, obs: &RawObservation) -> Vec<f32> {
        let mut out = match obs.vector(self.channel) {
            Some(v) if v.len() >= 2 => vec![v[0], v[1]],
            _ => vec![0.0, 0.0],
        };
        if self.normalize {
            normalize_in_place(&mut out, &self.descriptor());
        }
        out
    }
}
