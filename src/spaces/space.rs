//! The polymorphic observation-space capability.

use crate::observation::raw::{Channel, RawObservation};
use crate::spaces::factory::SpaceKind;

/// Declared shape and numeric bounds of one encoded observation.
///
/// Bounds are stored per element; uniform bounds are broadcast from a
/// single entry. All encoded values are f32.
#[derive(Clone, Debug, PartialEq)]
pub struct SpaceDescriptor {
    /// Tensor shape of the encoded array.
    pub shape: Vec<usize>,
    /// Lower bounds; length 1 (broadcast) or `len()`.
    pub low: Vec<f32>,
    /// Upper bounds; length 1 (broadcast) or `len()`.
    pub high: Vec<f32>,
}

impl SpaceDescriptor {
    /// Descriptor with one bound pair shared by every element.
    pub fn uniform(shape: Vec<usize>, low: f32, high: f32) -> Self {
        Self {
            shape,
            low: vec![low],
            high: vec![high],
        }
    }

    /// Descriptor with per-element bounds.
    pub fn per_element(shape: Vec<usize>, low: Vec<f32>, high: Vec<f32>) -> Self {
        debug_assert_eq!(low.len(), high.len());
        Self { shape, low, high }
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.shape.iter().product()
    }

    /// Whether the declared shape is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lower bound of element `i` (broadcast-aware).
    #[inline]
    pub fn low_at(&self, i: usize) -> f32 {
        if self.low.len() == 1 {
            self.low[0]
        } else {
            self.low[i]
        }
    }

    /// Upper bound of element `i` (broadcast-aware).
    #[inline]
    pub fn high_at(&self, i: usize) -> f32 {
        if self.high.len() == 1 {
            self.high[0]
        } else {
            self.high[i]
        }
    }
}

/// One semantic observation channel: a declared shape plus an encode
/// operation from the raw sensor data into that shape.
///
/// Encoding is total: a missing or malformed upstream channel degrades to
/// an all-zero array of the declared shape, never an error. Stateful
/// variants (the stacked laser map) mutate their internal buffer during
/// `encode` and watch the [`Channel::Done`] flag to reset it at episode
/// boundaries.
pub trait ObservationSpace {
    /// Semantic tag of this space.
    fn kind(&self) -> SpaceKind;

    /// Raw channels this space reads.
    fn required_observations(&self) -> &'static [Channel];

    /// Declared shape and bounds of the encoded array.
    fn descriptor(&self) -> SpaceDescriptor;

    /// Encode one raw observation into exactly `descriptor().len()`
    /// values.
    fn encode(&mut self, obs: &RawObservation) -> Vec<f32>;
}
