//! Ordered, name-keyed collection of observation spaces for one agent.

use crate::config::SpaceConfig;
use crate::error::{NavError, Result};
use crate::observation::raw::RawObservation;
use crate::spaces::factory::SpaceKind;
use crate::spaces::space::{ObservationSpace, SpaceDescriptor};

/// One encode pass over every space of a manager, in insertion order.
///
/// Downstream feature extractors consume this as a named-tensor mapping;
/// the entry order is the manager's construction order and determines the
/// channel concatenation order.
#[derive(Clone, Debug, Default)]
pub struct EncodedObservation {
    entries: Vec<(SpaceKind, Vec<f32>)>,
}

impl EncodedObservation {
    /// Encoded array for one space, if present.
    pub fn get(&self, kind: SpaceKind) -> Option<&[f32]> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, v)| v.as_slice())
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (SpaceKind, &[f32])> {
        self.entries.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Number of encoded spaces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no space was encoded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Concatenate all arrays in insertion order.
    pub fn concat(&self) -> Vec<f32> {
        let total = self.entries.iter().map(|(_, v)| v.len()).sum();
        let mut out = Vec::with_capacity(total);
        for (_, v) in &self.entries {
            out.extend_from_slice(v);
        }
        out
    }
}

/// Owns the observation spaces of one agent configuration.
///
/// Built once per agent from an ordered list of space kinds plus one
/// shared [`SpaceConfig`]; queried for the rest of the agent's lifetime.
/// Names are unique within a manager (duplicates fail construction) and
/// insertion order is preserved and observable.
pub struct ObservationSpaceManager {
    spaces: Vec<Box<dyn ObservationSpace>>,
    config: SpaceConfig,
}

impl ObservationSpaceManager {
    /// Build the listed spaces against a validated config.
    ///
    /// Fails fast on invalid geometry or a kind listed twice.
    pub fn new(kinds: &[SpaceKind], config: SpaceConfig) -> Result<Self> {
        config.validate()?;

        let mut spaces: Vec<Box<dyn ObservationSpace>> = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            if spaces.iter().any(|s| s.kind() == kind) {
                return Err(NavError::DuplicateSpace(kind.name().to_string()));
            }
            spaces.push(kind.build(&config));
        }
        Ok(Self { spaces, config })
    }

    /// Shared config the spaces were built with.
    pub fn config(&self) -> &SpaceConfig {
        &self.config
    }

    /// Whether a space is part of this manager.
    pub fn contains(&self, kind: SpaceKind) -> bool {
        self.spaces.iter().any(|s| s.kind() == kind)
    }

    /// Number of spaces.
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Whether the manager holds no spaces.
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Space kinds in insertion order.
    pub fn kinds(&self) -> Vec<SpaceKind> {
        self.spaces.iter().map(|s| s.kind()).collect()
    }

    /// Iterate spaces in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn ObservationSpace> {
        self.spaces.iter().map(|s| s.as_ref())
    }

    /// Look up one space.
    pub fn space(&self, kind: SpaceKind) -> Result<&dyn ObservationSpace> {
        self.spaces
            .iter()
            .find(|s| s.kind() == kind)
            .map(|s| s.as_ref())
            .ok_or_else(|| NavError::SpaceNotFound(kind.name().to_string()))
    }

    /// Declared descriptor of one space.
    pub fn descriptor(&self, kind: SpaceKind) -> Result<SpaceDescriptor> {
        self.space(kind).map(|s| s.descriptor())
    }

    /// Pedestrian-related spaces present, in insertion order. Matching is
    /// by name substring, so new pedestrian variants enumerate without a
    /// table update here.
    pub fn pedestrian_spaces(&self) -> Vec<SpaceKind> {
        self.spaces
            .iter()
            .map(|s| s.kind())
            .filter(|k| k.name().contains("PEDESTRIAN"))
            .collect()
    }

    /// Total flat length of one encode pass.
    pub fn total_len(&self) -> usize {
        self.spaces.iter().map(|s| s.descriptor().len()).sum()
    }

    /// Collector-facing names of channels the managed spaces read but a
    /// sample observation does not carry, without duplicates, in space
    /// order.
    ///
    /// Pre-flight check for wiring a sensor pipeline to an agent: an
    /// empty result means every space can encode real data. Per-step
    /// encoding never requires this; missing channels there degrade to
    /// zero-valued features.
    pub fn missing_channel_names(&self, obs: &RawObservation) -> Vec<&'static str> {
        let mut missing: Vec<&'static str> = Vec::new();
        for space in self.iter() {
            for &channel in space.required_observations() {
                if !obs.contains(channel) && !missing.contains(&channel.name()) {
                    missing.push(channel.name());
                }
            }
        }
        missing
    }

    /// Encode one raw observation through every space, in order.
    pub fn encode(&mut self, obs: &RawObservation) -> EncodedObservation {
        let entries = self
            .spaces
            .iter_mut()
            .map(|s| (s.kind(), s.encode(obs)))
            .collect();
        EncodedObservation { entries }
    }
}
