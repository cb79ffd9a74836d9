//! Per-variant encode tests: shapes, fallbacks, reset-on-done,
//! rasterization, and normalization.

use std::f32::consts::PI;

use crate::config::SpaceConfig;
use crate::constants::CANONICAL_BEAM_COUNT;
use crate::observation::raw::{Channel, ChannelValue, RawObservation};
use crate::spaces::factory::SpaceKind;
use crate::spaces::goal::GoalSpace;
use crate::spaces::laser::LaserScanSpace;
use crate::spaces::last_action::LastActionSpace;
use crate::spaces::pedestrian::{PedestrianFeature, PedestrianMapSpace};
use crate::spaces::space::ObservationSpace;
use crate::spaces::stacked_laser_map::StackedLaserMapSpace;

fn laser_obs(scan: Vec<f32>, done: bool) -> RawObservation {
    RawObservation::new()
        .with(Channel::Laser, ChannelValue::Vector(scan))
        .with(Channel::Done, ChannelValue::Bool(done))
}

// ============================================================================
// Laser Scan Space
// ============================================================================

#[test]
fn should_encode_laser_scan_at_declared_length() {
    let mut space = LaserScanSpace::new(&SpaceConfig::default());
    let scan: Vec<f32> = (0..720).map(|i| i as f32 * 0.01).collect();
    let out = space.encode(&laser_obs(scan.clone(), false));
    assert_eq!(out, scan);
    assert_eq!(space.descriptor().shape, vec![1, 720]);
}

#[test]
fn should_keep_native_scans_for_a_512_beam_configuration() {
    // A pipeline built natively for the 512-beam lidar revision must not
    // push its scans through the canonical resampling shim.
    let config = SpaceConfig::default().with_laser_num_beams(512);
    let mut space = LaserScanSpace::new(&config);
    let scan = vec![2.0f32; 512];
    let out = space.encode(&laser_obs(scan.clone(), false));
    assert_eq!(out, scan);
}

#[test]
fn should_resample_short_revision_scans_in_laser_space() {
    let mut space = LaserScanSpace::new(&SpaceConfig::default());
    let out = space.encode(&laser_obs(vec![2.0; 512], false));
    assert_eq!(out.len(), 720);
    assert!(out.iter().all(|&v| v == 2.0));
}

#[test]
fn should_fall_back_to_zeros_when_laser_channel_is_missing() {
    let mut space = LaserScanSpace::new(&SpaceConfig::default());
    let out = space.encode(&RawObservation::new());
    assert_eq!(out.len(), 720);
    assert!(out.iter().all(|&v| v == 0.0));
}

#[test]
fn should_fall_back_to_zeros_when_laser_channel_has_wrong_kind() {
    let mut space = LaserScanSpace::new(&SpaceConfig::default());
    let obs = RawObservation::new().with(Channel::Laser, ChannelValue::Scalar(1.0));
    let out = space.encode(&obs);
    assert!(out.iter().all(|&v| v == 0.0));
}

#[test]
fn should_fall_back_to_zeros_for_unrecognized_scan_lengths() {
    let mut space = LaserScanSpace::new(&SpaceConfig::default());
    let out = space.encode(&laser_obs(vec![2.0; 360], false));
    assert_eq!(out.len(), 720);
    assert!(out.iter().all(|&v| v == 0.0));
}

#[test]
fn should_normalize_laser_scan_against_max_range() {
    let config = SpaceConfig::default().with_normalize(true);
    let mut space = LaserScanSpace::new(&config);
    let max_range = config.laser_max_range;
    let out = space.encode(&laser_obs(vec![max_range; 720], false));
    assert!(out.iter().all(|&v| v == 1.0));
}

// ============================================================================
// Stacked Laser Map Space
// ============================================================================

#[test]
fn should_declare_flat_or_square_map_shape() {
    let flat = StackedLaserMapSpace::new(&SpaceConfig::default());
    assert_eq!(flat.descriptor().shape, vec![6400]);

    let square = StackedLaserMapSpace::new(&SpaceConfig::default().with_flatten(false));
    assert_eq!(square.descriptor().shape, vec![80, 80]);
    assert_eq!(square.descriptor().len(), 6400);
}

#[test]
fn should_return_zero_map_without_touching_stack_on_malformed_laser() {
    let mut space = StackedLaserMapSpace::new(&SpaceConfig::default());
    let obs = RawObservation::new().with(Channel::Laser, ChannelValue::Bool(true));
    let out = space.encode(&obs);

    assert_eq!(out.len(), 6400);
    assert!(out.iter().all(|&v| v == 0.0));
    assert!(space.stack().is_empty(), "fallback must not mutate the stack");
}

#[test]
fn should_pool_the_most_recent_scan_into_the_first_rows() {
    let mut space = StackedLaserMapSpace::new(&SpaceConfig::default());
    let out = space.encode(&laser_obs(vec![3.0; CANONICAL_BEAM_COUNT], false));

    // One real scan on top of nine zero scans.
    assert_eq!(out[0], 3.0);
    assert_eq!(out[80], 3.0);
    assert!(out[160..1600].iter().all(|&v| v == 0.0));
}

#[test]
fn should_reset_stack_after_episode_done() {
    let mut space = StackedLaserMapSpace::new(&SpaceConfig::default());

    // Step k: episode ends while scanning 7.0 everywhere.
    space.encode(&laser_obs(vec![7.0; CANONICAL_BEAM_COUNT], true));
    assert!(
        space
            .stack()
            .iter()
            .all(|scan| scan.iter().all(|&v| v == 0.0)),
        "stack must be zeroed immediately after the done step"
    );

    // Step k+1: no trace of the previous episode may remain.
    let out = space.encode(&laser_obs(vec![2.0; CANONICAL_BEAM_COUNT], false));
    assert!(!out.contains(&7.0), "stale history leaked across episodes");
    assert_eq!(out[0], 2.0);
    assert!(out[160..1600].iter().all(|&v| v == 0.0));
}

#[test]
fn should_accept_short_revision_scans_in_the_map_pipeline() {
    let mut space = StackedLaserMapSpace::new(&SpaceConfig::default());
    let out = space.encode(&laser_obs(vec![5.0; 512], false));
    assert_eq!(out[0], 5.0, "resampled constant scan must pool to itself");
    assert_eq!(out[80], 5.0);
}

#[test]
fn should_normalize_map_against_roi() {
    let config = SpaceConfig::default().with_normalize(true);
    let roi = config.roi_in_m;
    let mut space = StackedLaserMapSpace::new(&config);
    let out = space.encode(&laser_obs(vec![roi; CANONICAL_BEAM_COUNT], false));
    assert_eq!(out[0], 1.0);
    assert_eq!(out[160], 0.0, "zero-primed rows normalize to zero");
}

// ============================================================================
// Pedestrian Map Spaces
// ============================================================================

fn pedestrian_obs(pose: Vec<f32>, locations: Vec<f32>, vel_x: Vec<f32>) -> RawObservation {
    RawObservation::new()
        .with(Channel::RobotPose, ChannelValue::Vector(pose))
        .with(Channel::PedestrianLocation, ChannelValue::Vector(locations))
        .with(Channel::PedestrianVelX, ChannelValue::Vector(vel_x))
}

#[test]
fn should_rasterize_a_pedestrian_at_its_grid_cell() {
    let mut space = PedestrianMapSpace::new(PedestrianFeature::VelX, &SpaceConfig::default());
    // Robot at origin facing +x; pedestrian 1 m ahead. ROI 20 m over 80
    // cells puts it at cell (44, 40).
    let obs = pedestrian_obs(vec![0.0, 0.0, 0.0], vec![1.0, 0.0], vec![2.5]);
    let out = space.encode(&obs);

    assert_eq!(out[40 * 80 + 44], 2.5);
    assert_eq!(out.iter().filter(|&&v| v != 0.0).count(), 1);
}

#[test]
fn should_transform_pedestrians_into_the_robot_frame() {
    let mut space = PedestrianMapSpace::new(PedestrianFeature::VelX, &SpaceConfig::default());
    // Robot rotated 90 degrees; a pedestrian at world (0, 1) sits 1 m
    // ahead in the robot frame.
    let obs = pedestrian_obs(vec![0.0, 0.0, PI / 2.0], vec![0.0, 1.0], vec![1.5]);
    let out = space.encode(&obs);

    let nonzero: Vec<usize> = (0..out.len()).filter(|&i| out[i] != 0.0).collect();
    assert_eq!(nonzero.len(), 1);
    let cell_x = nonzero[0] % 80;
    assert_eq!(cell_x, 44, "pedestrian must land 1 m ahead after rotation");
    assert_eq!(out[nonzero[0]], 1.5);
}

#[test]
fn should_ignore_pedestrians_outside_the_roi() {
    let mut space = PedestrianMapSpace::new(PedestrianFeature::VelX, &SpaceConfig::default());
    let obs = pedestrian_obs(vec![0.0, 0.0, 0.0], vec![100.0, 0.0], vec![2.5]);
    let out = space.encode(&obs);
    assert!(out.iter().all(|&v| v == 0.0));
}

#[test]
fn should_return_zero_map_when_pedestrian_channels_are_missing() {
    for feature in [
        PedestrianFeature::VelX,
        PedestrianFeature::VelY,
        PedestrianFeature::Type,
        PedestrianFeature::SocialState,
    ] {
        let mut space = PedestrianMapSpace::new(feature, &SpaceConfig::default());
        let out = space.encode(&RawObservation::new());
        assert_eq!(out.len(), 6400);
        assert!(out.iter().all(|&v| v == 0.0));
    }
}

#[test]
fn should_rasterize_only_pedestrians_with_matching_values() {
    let mut space = PedestrianMapSpace::new(PedestrianFeature::VelX, &SpaceConfig::default());
    // Two locations but one velocity entry: only the first pedestrian
    // may be rasterized.
    let obs = pedestrian_obs(
        vec![0.0, 0.0, 0.0],
        vec![1.0, 0.0, -1.0, 0.0],
        vec![2.0],
    );
    let out = space.encode(&obs);
    assert_eq!(out.iter().filter(|&&v| v != 0.0).count(), 1);
}

// ============================================================================
// Goal, Subgoal, and Last Action
// ============================================================================

#[test]
fn should_encode_goal_distance_and_angle() {
    let mut space = GoalSpace::goal(&SpaceConfig::default());
    let obs = RawObservation::new().with(
        Channel::GoalInRobotFrame,
        ChannelValue::Vector(vec![3.0, 0.5]),
    );
    assert_eq!(space.encode(&obs), vec![3.0, 0.5]);
    assert_eq!(space.kind(), SpaceKind::Goal);
}

#[test]
fn should_read_subgoal_from_its_own_channel() {
    let mut space = GoalSpace::subgoal(&SpaceConfig::default());
    let obs = RawObservation::new()
        .with(
            Channel::GoalInRobotFrame,
            ChannelValue::Vector(vec![9.0, 1.0]),
        )
        .with(
            Channel::SubgoalInRobotFrame,
            ChannelValue::Vector(vec![1.5, -0.25]),
        );
    assert_eq!(space.encode(&obs), vec![1.5, -0.25]);
    assert_eq!(space.kind(), SpaceKind::Subgoal);
}

#[test]
fn should_fall_back_to_zero_goal_on_short_vector() {
    let mut space = GoalSpace::goal(&SpaceConfig::default());
    let obs = RawObservation::new()
        .with(Channel::GoalInRobotFrame, ChannelValue::Vector(vec![3.0]));
    assert_eq!(space.encode(&obs), vec![0.0, 0.0]);
}

#[test]
fn should_encode_last_action_velocities() {
    let mut space = LastActionSpace::new(&SpaceConfig::default());
    let obs = RawObservation::new().with(
        Channel::LastAction,
        ChannelValue::Vector(vec![0.5, -0.2, 1.0]),
    );
    assert_eq!(space.encode(&obs), vec![0.5, -0.2, 1.0]);
}

#[test]
fn should_fall_back_to_zero_action_when_channel_is_missing() {
    let mut space = LastActionSpace::new(&SpaceConfig::default());
    assert_eq!(space.encode(&RawObservation::new()), vec![0.0, 0.0, 0.0]);
}

#[test]
fn should_normalize_last_action_into_unit_range() {
    let config = SpaceConfig::default().with_normalize(true);
    let mut space = LastActionSpace::new(&config);
    let obs = RawObservation::new().with(
        Channel::LastAction,
        ChannelValue::Vector(vec![5.0, -5.0, 0.0]),
    );
    assert_eq!(space.encode(&obs), vec![1.0, 0.0, 0.5]);
}
