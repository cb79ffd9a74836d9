//! # nav_rl
//!
//! Observation-space encoding and policy configuration for a robot
//! navigation RL stack.
//!
//! Heterogeneous sensor streams (laser scans of varying beam counts,
//! pedestrian state streams, goal vectors, the last commanded action)
//! are converted into normalized, fixed-shape feature arrays, and the
//! feature extractors consuming them declare their input contracts
//! against the same registry, so sensor pipeline and network always
//! agree on shapes.
//!
//! ## Architecture
//!
//! ```text
//! raw sensor dict (RawObservation)
//!        │ per declared space
//!        ▼
//! ┌─────────────────────────────────────────────┐
//! │ ObservationSpaceManager                     │
//! │  ├─ LaserScanSpace        (1 x beams)       │
//! │  ├─ StackedLaserMapSpace  (80 x 80)         │
//! │  │    resample → LaserStack → min/mean pool │
//! │  ├─ PedestrianMapSpace x4 (80 x 80)         │
//! │  ├─ Goal / Subgoal        (2,)              │
//! │  └─ LastActionSpace       (3,)              │
//! └─────────────────────────────────────────────┘
//!        │ named tensor mapping, insertion order
//!        ▼
//! ExtractorKind::required_observations() / ExtractorInputs
//! ```
//!
//! ## Failure discipline
//!
//! Construction-time misconfiguration (unknown names, duplicate spaces,
//! bad geometry, inconsistent topology) fails fast with a [`NavError`].
//! Per-step encoding never fails: malformed sensor data degrades to
//! zero-valued features of the declared shape.
//!
//! ## Example
//!
//! ```rust,ignore
//! use nav_rl::{AgentKind, Channel, ChannelValue, RawObservation};
//!
//! let blueprint = AgentKind::ResNet1.blueprint();
//! let mut manager = blueprint.build_manager()?;
//!
//! let obs = RawObservation::new()
//!     .with(Channel::Laser, ChannelValue::Vector(scan))
//!     .with(Channel::Done, ChannelValue::Bool(false));
//! let encoded = manager.encode(&obs);
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod normalization;
pub mod observation;
pub mod spaces;

pub use config::SpaceConfig;
pub use error::{NavError, Result};
pub use model::{
    Activation, AgentBlueprint, AgentKind, ExtractorInputs, ExtractorKind, LayerSpec,
    NetworkSpec, ResNetTopology,
};
pub use observation::{build_laser_map, resample_scan, Channel, ChannelValue, LaserStack,
    RawObservation};
pub use spaces::{
    EncodedObservation, ObservationSpace, ObservationSpaceManager, SpaceDescriptor, SpaceKind,
};

// Behavior suite lives in the tests module (src/tests/)
#[cfg(test)]
pub mod tests;
