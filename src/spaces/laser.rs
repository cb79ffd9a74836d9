//! Flat single-step laser scan space.

use crate::config::SpaceConfig;
use crate::normalization::normalize_in_place;
use crate::observation::raw::{Channel, RawObservation};
use crate::observation::resample::resample_scan;
use crate::spaces::factory::SpaceKind;
use crate::spaces::space::{ObservationSpace, SpaceDescriptor};

/// The most recent laser scan, shaped `(1, laser_num_beams)`.
///
/// A scan already matching the configured beam count passes through
/// untouched, so a pipeline configured natively for the 512-beam lidar
/// revision keeps its scans. Only mismatched scans go through the
/// canonical resampling shim; anything that still does not match the
/// configured beam count degrades to zeros.
#[derive(Clone, Debug)]
pub struct LaserScanSpace {
    num_beams: usize,
    max_range: f32,
    normalize: bool,
}

impl LaserScanSpace {
    pub fn new(config: &SpaceConfig) -> Self {
        Self {
            num_beams: config.laser_num_beams,
            max_range: config.laser_max_range,
            normalize: config.normalize,
        }
    }
}

impl ObservationSpace for LaserScanSpace {
    fn kind(&self) -> SpaceKind {
        SpaceKind::Laser
    }

    fn required_observations(&self) -> &'static [Channel] {
        SpaceKind::Laser.required_observations()
    }

    fn descriptor(&self) -> SpaceDescriptor {
        SpaceDescriptor::uniform(vec![1, self.num_beams], 0.0, self.max_range)
    }

    fn encode(&mut self, obs: &RawObservation) -> Vec<f32> {
        let mut out = match obs.vector(Channel::Laser) {
            Some(scan) if scan.len() == self.num_beams => scan.to_vec(),
            Some(scan) => {
                let scan = resample_scan(scan);
                if scan.len() == self.num_beams {
                    scan
                } else {
                    vec![0.0; self.num_beams]
                }
            }
            None => vec![0.0; self.num_beams],
        };
        if self.normalize {
            normalize_in_place(&mut out, &self.descriptor());
        }
        out
    }
}
