//! Raw-sensor representation and the laser encoding pipeline.
//!
//! Data flow: a [`raw::RawObservation`] arrives once per control step,
//! the scan is normalized to the canonical beam count
//! ([`resample::resample_scan`]), buffered in a [`laser_stack::LaserStack`],
//! and reduced into a fixed square map ([`feature_map::build_laser_map`]).

pub mod feature_map;
pub mod laser_stack;
pub mod raw;
pub mod resample;

pub use feature_map::build_laser_map;
pub use laser_stack::LaserStack;
pub use raw::{Channel, ChannelValue, RawObservation};
pub use resample::resample_scan;
