//! Observation-space variants, their registry, and the per-agent manager.

pub mod factory;
pub mod goal;
pub mod laser;
pub mod last_action;
pub mod manager;
pub mod pedestrian;
pub mod space;
pub mod stacked_laser_map;

pub use factory::SpaceKind;
pub use goal::GoalSpace;
pub use laser::LaserScanSpace;
pub use last_action::LastActionSpace;
pub use manager::{EncodedObservation, ObservationSpaceManager};
pub use pedestrian::{FeatureMapGrid, PedestrianFeature, PedestrianMapSpace};
pub use space::{ObservationSpace, SpaceDescriptor};
pub use stacked_laser_map::StackedLaserMapSpace;
