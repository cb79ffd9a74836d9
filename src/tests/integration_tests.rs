//! Full-pipeline scenarios: golden pooling output and agent assembly.

use crate::config::SpaceConfig;
use crate::constants::CANONICAL_BEAM_COUNT;
use crate::model::agent::AgentKind;
use crate::model::extractor::ExtractorInputs;
use crate::observation::raw::{Channel, ChannelValue, RawObservation};
use crate::spaces::factory::SpaceKind;
use crate::spaces::manager::ObservationSpaceManager;

fn laser_obs(scan: Vec<f32>, done: bool) -> RawObservation {
    RawObservation::new()
        .with(Channel::Laser, ChannelValue::Vector(scan))
        .with(Channel::Done, ChannelValue::Bool(done))
}

// ============================================================================
// Golden Pooling Regression
// ============================================================================

#[test]
fn should_reproduce_hand_computed_pooling_for_a_ramp_history() {
    // Ten identical ramp scans through the full stack + map pipeline.
    let scale = 0.01;
    let scan: Vec<f32> = (0..CANONICAL_BEAM_COUNT).map(|i| i as f32 * scale).collect();

    let mut manager =
        ObservationSpaceManager::new(&[SpaceKind::StackedLaserMap], SpaceConfig::default())
            .unwrap();

    let mut encoded = manager.encode(&laser_obs(scan.clone(), false));
    for _ in 0..9 {
        encoded = manager.encode(&laser_obs(scan.clone(), false));
    }
    let map = encoded.get(SpaceKind::StackedLaserMap).unwrap();
    assert_eq!(map.len(), 6400);

    // Hand-computed min/mean pooling of the scan's first 144 values: the
    // first 16 sectors of 9 beams each. The ramp's sector minimum is its
    // first beam and the mean is its center beam.
    for sector in 0..16 {
        let expected_min = (9 * sector) as f32 * scale;
        let expected_mean = (9 * sector + 4) as f32 * scale;

        for scan_row in 0..10 {
            let min_row = 2 * scan_row * 80;
            let mean_row = (2 * scan_row + 1) * 80;
            assert!(
                (map[min_row + sector] - expected_min).abs() < 1e-4,
                "min row {} sector {}: {} vs {}",
                scan_row,
                sector,
                map[min_row + sector],
                expected_min
            );
            assert!(
                (map[mean_row + sector] - expected_mean).abs() < 1e-4,
                "mean row {} sector {}: {} vs {}",
                scan_row,
                sector,
                map[mean_row + sector],
                expected_mean
            );
        }
    }

    // The 1600-value pooled matrix tiles the square exactly four times.
    assert_eq!(&map[0..1600], &map[1600..3200]);
    assert_eq!(&map[0..1600], &map[4800..6400]);
}

#[test]
fn should_not_leak_history_across_episodes_in_the_manager() {
    let mut manager =
        ObservationSpaceManager::new(&[SpaceKind::StackedLaserMap], SpaceConfig::default())
            .unwrap();

    for _ in 0..5 {
        manager.encode(&laser_obs(vec![8.0; CANONICAL_BEAM_COUNT], false));
    }
    manager.encode(&laser_obs(vec![8.0; CANONICAL_BEAM_COUNT], true));

    let encoded = manager.encode(&laser_obs(vec![1.0; CANONICAL_BEAM_COUNT], false));
    let map = encoded.get(SpaceKind::StackedLaserMap).unwrap();
    assert!(
        !map.contains(&8.0),
        "previous episode's ranges survived the reset"
    );
    assert_eq!(map[0], 1.0);
}

// ============================================================================
// Agent Assembly
// ============================================================================

#[test]
fn should_assemble_every_resnet_agent_end_to_end() {
    for kind in [
        AgentKind::ResNet1,
        AgentKind::ResNet2,
        AgentKind::ResNet3,
        AgentKind::ResNet4,
    ] {
        let blueprint = kind.blueprint();
        let mut manager = blueprint.build_manager().unwrap();
        let inputs = ExtractorInputs::from_manager(blueprint.extractor, &manager).unwrap();
        assert_eq!(inputs.scan_map_len, 6400);
        assert_eq!(inputs.goal_size, 2);

        let obs = laser_obs(vec![2.0; CANONICAL_BEAM_COUNT], false)
            .with(Channel::RobotPose, ChannelValue::Vector(vec![0.0, 0.0, 0.0]))
            .with(
                Channel::SubgoalInRobotFrame,
                ChannelValue::Vector(vec![1.0, 0.0]),
            )
            .with(
                Channel::PedestrianLocation,
                ChannelValue::Vector(vec![1.0, 1.0]),
            )
            .with(Channel::PedestrianVelX, ChannelValue::Vector(vec![0.4]))
            .with(Channel::PedestrianVelY, ChannelValue::Vector(vec![0.1]))
            .with(Channel::PedestrianType, ChannelValue::Vector(vec![1.0]))
            .with(
                Channel::PedestrianSocialState,
                ChannelValue::Vector(vec![2.0]),
            )
            .with(
                Channel::LastAction,
                ChannelValue::Vector(vec![0.2, 0.0, -0.1]),
            );

        let encoded = manager.encode(&obs);
        assert_eq!(encoded.len(), blueprint.observation_spaces.len());
        assert_eq!(encoded.concat().len(), manager.total_len());
    }
}

#[test]
fn should_reject_an_agent_blueprint_with_a_broken_topology() {
    use crate::model::extractor::ResNetTopology;

    let blueprint = AgentKind::ResNet1.blueprint().with_topology(ResNetTopology {
        replace_stride_with_dilation: Some(vec![true]),
        ..ResNetTopology::default()
    });
    assert!(blueprint.build_manager().is_err());
}

#[test]
fn should_run_a_short_revision_sensor_through_a_full_agent() {
    // A 512-beam lidar feeding an agent configured for canonical scans.
    let blueprint = AgentKind::ResNet1.blueprint();
    let mut manager = blueprint.build_manager().unwrap();

    let obs = laser_obs(vec![3.0; 512], false)
        .with(Channel::RobotPose, ChannelValue::Vector(vec![0.0, 0.0, 0.0]))
        .with(
            Channel::SubgoalInRobotFrame,
            ChannelValue::Vector(vec![2.0, 0.3]),
        )
        .with(
            Channel::PedestrianLocation,
            ChannelValue::Vector(vec![1.0, 0.0]),
        )
        .with(Channel::PedestrianVelX, ChannelValue::Vector(vec![0.4]))
        .with(Channel::PedestrianVelY, ChannelValue::Vector(vec![0.1]));

    let encoded = manager.encode(&obs);
    let map = encoded.get(SpaceKind::StackedLaserMap).unwrap();
    assert_eq!(map.len(), 6400);
    assert_eq!(map[0], 3.0, "constant 512-beam scan must pool to itself");
    assert_eq!(encoded.get(SpaceKind::Subgoal).unwrap(), &[2.0, 0.3]);
}
