//! Observation-space registry.
//!
//! Space variants form a closed, compile-time-checked set: `SpaceKind`
//! enumerates them, `from_name` resolves the configuration strings, and
//! `build` is the exhaustive constructor table. Adding a variant without
//! extending the table is a compile error, which replaces the original
//! stringly-typed registration scheme.

use crate::config::SpaceConfig;
use crate::error::{NavError, Result};
use crate::observation::raw::Channel;
use crate::spaces::goal::GoalSpace;
use crate::spaces::laser::LaserScanSpace;
use crate::spaces::last_action::LastActionSpace;
use crate::spaces::pedestrian::{PedestrianFeature, PedestrianMapSpace};
use crate::spaces::space::ObservationSpace;
use crate::spaces::stacked_laser_map::StackedLaserMapSpace;

/// Semantic tag of one observation-space variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpaceKind {
    /// Flat single-step laser scan.
    Laser,
    /// Temporal laser history pooled into a square feature map.
    StackedLaserMap,
    /// Pedestrian x velocities rasterized over the ROI.
    PedestrianVelX,
    /// Pedestrian y velocities rasterized over the ROI.
    PedestrianVelY,
    /// Pedestrian type ids rasterized over the ROI.
    PedestrianType,
    /// Pedestrian social-state ids rasterized over the ROI.
    PedestrianSocialState,
    /// Distance and angle to the goal, robot frame.
    Goal,
    /// Distance and angle to the current subgoal, robot frame.
    Subgoal,
    /// Last commanded velocity.
    LastAction,
}

impl SpaceKind {
    /// Every registered variant, in a stable order.
    pub const ALL: [SpaceKind; 9] = [
        SpaceKind::Laser,
        SpaceKind::StackedLaserMap,
        SpaceKind::PedestrianVelX,
        SpaceKind::PedestrianVelY,
        SpaceKind::PedestrianType,
        SpaceKind::PedestrianSocialState,
        SpaceKind::Goal,
        SpaceKind::Subgoal,
        SpaceKind::LastAction,
    ];

    /// Configuration-facing name of this variant.
    pub fn name(self) -> &'static str {
        match self {
            Self::Laser => "LASER",
            Self::StackedLaserMap => "STACKED_LASER_MAP",
            Self::PedestrianVelX => "PEDESTRIAN_VEL_X",
            Self::PedestrianVelY => "PEDESTRIAN_VEL_Y",
            Self::PedestrianType => "PEDESTRIAN_TYPE",
            Self::PedestrianSocialState => "PEDESTRIAN_SOCIAL_STATE",
            Self::Goal => "GOAL",
            Self::Subgoal => "SUBGOAL",
            Self::LastAction => "LAST_ACTION",
        }
    }

    /// Resolve a configuration string to a variant.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| NavError::UnknownSpace(name.to_string()))
    }

    /// Whether this variant is one of the pedestrian feature maps.
    #[inline]
    pub fn is_pedestrian(self) -> bool {
        self.name().contains("PEDESTRIAN")
    }

    /// Raw channels the variant's encode path reads.
    pub fn required_observations(self) -> &'static [Channel] {
        match self {
            Self::Laser => &[Channel::Laser],
            Self::StackedLaserMap => &[Channel::Laser, Channel::Done],
            Self::PedestrianVelX => &[
                Channel::RobotPose,
                Channel::PedestrianLocation,
                Channel::PedestrianVelX,
            ],
            Self::PedestrianVelY => &[
                Channel::RobotPose,
                Channel::PedestrianLocation,
                Channel::PedestrianVelY,
            ],
            Self::PedestrianType => &[
                Channel::RobotPose,
                Channel::PedestrianLocation,
                Channel::PedestrianType,
            ],
            Self::PedestrianSocialState => &[
                Channel::RobotPose,
                Channel::PedestrianLocation,
                Channel::PedestrianSocialState,
            ],
            Self::Goal => &[Channel::GoalInRobotFrame],
            Self::Subgoal => &[Channel::SubgoalInRobotFrame],
            Self::LastAction => &[Channel::LastAction],
        }
    }

    /// Construct the variant's observation space from a shared config.
    pub fn build(self, config: &SpaceConfig) -> Box<dyn ObservationSpace> {
        match self {
            Self::Laser => Box::new(LaserScanSpace::new(config)),
            Self::StackedLaserMap => Box::new(StackedLaserMapSpace::new(config)),
            Self::PedestrianVelX => {
                Box::new(PedestrianMapSpace::new(PedestrianFeature::VelX, config))
            }
            Self::PedestrianVelY => {
                Box::new(PedestrianMapSpace::new(PedestrianFeature::VelY, config))
            }
            Self::PedestrianType => {
                Box::new(PedestrianMapSpace::new(PedestrianFeature::Type, config))
            }
            Self::PedestrianSocialState => Box::new(PedestrianMapSpace::new(
                PedestrianFeature::SocialState,
                config,
            )),
            Self::Goal => Box::new(GoalSpace::goal(config)),
            Self::Subgoal => Box::new(GoalSpace::subgoal(config)),
            Self::LastAction => Box::new(LastActionSpace::new(config)),
        }
    }
}
