//! Raw observation channels as delivered by the upstream sensor collectors.
//!
//! A `RawObservation` is rebuilt by the collector every control step and
//! consumed exactly once per encode pass. Channel availability depends on
//! the sensor configuration, so every accessor is total: a missing channel
//! or one carrying the wrong value kind reads as `None`, which the spaces
//! turn into zero-valued features rather than an error.

use std::collections::HashMap;

/// Identifier of one raw sensor channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// 1-D range array from the planar lidar.
    Laser,
    /// Episode-done flag; set on the step an episode terminates.
    Done,
    /// Robot pose `[x, y, theta]` in the world frame.
    RobotPose,
    /// `[distance, angle]` to the goal in the robot frame.
    GoalInRobotFrame,
    /// `[distance, angle]` to the current subgoal in the robot frame.
    SubgoalInRobotFrame,
    /// Pedestrian positions, interleaved `[x0, y0, x1, y1, ..]`, world frame.
    PedestrianLocation,
    /// Per-pedestrian x velocity (m/s), world frame.
    PedestrianVelX,
    /// Per-pedestrian y velocity (m/s), world frame.
    PedestrianVelY,
    /// Per-pedestrian type id.
    PedestrianType,
    /// Per-pedestrian social-state id.
    PedestrianSocialState,
    /// Last commanded action `[vx, vy, omega]`.
    LastAction,
}

impl Channel {
    /// Collector-facing channel name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Laser => "LASER",
            Self::Done => "DONE",
            Self::RobotPose => "ROBOT_POSE",
            Self::GoalInRobotFrame => "GOAL_IN_ROBOT_FRAME",
            Self::SubgoalInRobotFrame => "SUBGOAL_IN_ROBOT_FRAME",
            Self::PedestrianLocation => "PEDESTRIAN_LOCATION",
            Self::PedestrianVelX => "PEDESTRIAN_VEL_X",
            Self::PedestrianVelY => "PEDESTRIAN_VEL_Y",
            Self::PedestrianType => "PEDESTRIAN_TYPE",
            Self::PedestrianSocialState => "PEDESTRIAN_SOCIAL_STATE",
            Self::LastAction => "LAST_ACTION",
        }
    }
}

/// Value carried by one channel.
#[derive(Clone, Debug, PartialEq)]
pub enum ChannelValue {
    /// Boolean flag (episode-done).
    Bool(bool),
    /// Single scalar reading.
    Scalar(f32),
    /// 1-D numeric array.
    Vector(Vec<f32>),
}

/// One control step's worth of raw sensor data.
#[derive(Clone, Debug, Default)]
pub struct RawObservation {
    channels: HashMap<Channel, ChannelValue>,
}

impl RawObservation {
    /// Create an empty observation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a channel value, replacing any previous one.
    pub fn insert(&mut self, channel: Channel, value: ChannelValue) {
        self.channels.insert(channel, value);
    }

    /// Builder-style insert for test and collector code.
    pub fn with(mut self, channel: Channel, value: ChannelValue) -> Self {
        self.insert(channel, value);
        self
    }

    /// Whether a channel is present (regardless of value kind).
    pub fn contains(&self, channel: Channel) -> bool {
        self.channels.contains_key(&channel)
    }

    /// Read a channel as a 1-D array. `None` if absent or not a vector.
    #[inline]
    pub fn vector(&self, channel: Channel) -> Option<&[f32]> {
        match self.channels.get(&channel) {
            Some(ChannelValue::Vector(v)) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Read a channel as a scalar. `None` if absent or not a scalar.
    #[inline]
    pub fn scalar(&self, channel: Channel) -> Option<f32> {
        match self.channels.get(&channel) {
            Some(ChannelValue::Scalar(s)) => Some(*s),
            _ => None,
        }
    }

    /// Read a channel as a flag. Absent or non-boolean reads as `false`.
    #[inline]
    pub fn flag(&self, channel: Channel) -> bool {
        matches!(self.channels.get(&channel), Some(ChannelValue::Bool(true)))
    }
}
