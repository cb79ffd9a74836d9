//! Feature-extractor contracts.
//!
//! Extractor variants are described by composition: each kind declares
//! the observation spaces it consumes and a [`ResNetTopology`] consumed
//! by the network builder, instead of one subclass per topology. The
//! tensor math itself lives downstream; this layer stops at the
//! validated configuration and input-size contract.

use crate::error::{NavError, Result};
use crate::spaces::factory::SpaceKind;
use crate::spaces::manager::ObservationSpaceManager;

/// Registered feature-extractor variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExtractorKind {
    /// Mid-fusion ResNet over laser map + pedestrian velocity maps.
    ResNetMidFusion1,
    /// Variant 1 plus the pedestrian type and social-state maps.
    ResNetMidFusion2,
    /// Variant 2 plus the last-action channel.
    ResNetMidFusion3,
    /// Variant 2's channels with a deeper block arrangement.
    ResNetMidFusion4,
    /// Body network defined by a JSON description over flat channels.
    Custom,
}

impl ExtractorKind {
    /// Every registered variant.
    pub const ALL: [ExtractorKind; 5] = [
        ExtractorKind::ResNetMidFusion1,
        ExtractorKind::ResNetMidFusion2,
        ExtractorKind::ResNetMidFusion3,
        ExtractorKind::ResNetMidFusion4,
        ExtractorKind::Custom,
    ];

    /// Configuration-facing name.
    pub fn name(self) -> &'static str {
        match self {
            Self::ResNetMidFusion1 => "RESNET_MID_FUSION_1",
            Self::ResNetMidFusion2 => "RESNET_MID_FUSION_2",
            Self::ResNetMidFusion3 => "RESNET_MID_FUSION_3",
            Self::ResNetMidFusion4 => "RESNET_MID_FUSION_4",
            Self::Custom => "CUSTOM",
        }
    }

    /// Observation spaces this extractor consumes, in concatenation
    /// order. A manager must provide at least these for the extractor to
    /// be constructible.
    pub fn required_observations(self) -> &'static [SpaceKind] {
        match self {
            Self::ResNetMidFusion1 => &[
                SpaceKind::StackedLaserMap,
                SpaceKind::PedestrianVelX,
                SpaceKind::PedestrianVelY,
                SpaceKind::Subgoal,
            ],
            Self::ResNetMidFusion2 | Self::ResNetMidFusion4 => &[
                SpaceKind::StackedLaserMap,
                SpaceKind::PedestrianVelX,
                SpaceKind::PedestrianVelY,
                SpaceKind::PedestrianType,
                SpaceKind::PedestrianSocialState,
                SpaceKind::Subgoal,
            ],
            Self::ResNetMidFusion3 => &[
                SpaceKind::StackedLaserMap,
                SpaceKind::PedestrianVelX,
                SpaceKind::PedestrianVelY,
                SpaceKind::PedestrianType,
                SpaceKind::PedestrianSocialState,
                SpaceKind::Subgoal,
                SpaceKind::LastAction,
            ],
            Self::Custom => &[SpaceKind::Laser, SpaceKind::Goal, SpaceKind::LastAction],
        }
    }

    /// Default network topology for this variant.
    pub fn default_topology(self) -> ResNetTopology {
        match self {
            Self::ResNetMidFusion1 | Self::ResNetMidFusion2 => ResNetTopology::default(),
            Self::ResNetMidFusion3 => ResNetTopology {
                layers: vec![2, 2, 1],
                ..ResNetTopology::default()
            },
            Self::ResNetMidFusion4 => ResNetTopology {
                layers: vec![2, 2, 2],
                ..ResNetTopology::default()
            },
            Self::Custom => ResNetTopology {
                layers: Vec::new(),
                ..ResNetTopology::default()
            },
        }
    }
}

/// Topology of a mid-fusion ResNet extractor.
///
/// One configuration struct consumed by a generic builder, replacing a
/// subclass per block arrangement.
#[derive(Clone, Debug, PartialEq)]
pub struct ResNetTopology {
    /// Bottleneck block count per stage.
    pub layers: Vec<usize>,
    /// Grouped-convolution group count.
    pub groups: usize,
    /// Base width per group.
    pub width_per_group: usize,
    /// Per-stage stride-to-dilation replacement; length must match
    /// `layers` when present.
    pub replace_stride_with_dilation: Option<Vec<bool>>,
    /// Zero-initialize the last norm layer of each residual branch.
    pub zero_init_residual: bool,
    /// Output feature dimensionality.
    pub features_dim: usize,
}

impl Default for ResNetTopology {
    fn default() -> Self {
        Self {
            layers: vec![2, 1, 1],
            groups: 1,
            width_per_group: 64,
            replace_stride_with_dilation: None,
            zero_init_residual: true,
            features_dim: 256,
        }
    }
}

impl ResNetTopology {
    /// Reject inconsistent topologies before any network is built.
    pub fn validate(&self) -> Result<()> {
        if let Some(dilation) = &self.replace_stride_with_dilation {
            if dilation.len() != self.layers.len() {
                return Err(NavError::InvalidConfig {
                    param: "replace_stride_with_dilation".into(),
                    message: format!(
                        "must have one entry per layer stage: got {} entries for {} stages",
                        dilation.len(),
                        self.layers.len()
                    ),
                });
            }
        }
        if self.features_dim == 0 {
            return Err(NavError::InvalidConfig {
                param: "features_dim".into(),
                message: "must be positive".into(),
            });
        }
        Ok(())
    }
}

/// Input sizes a feature extractor derives from the manager it is built
/// against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractorInputs {
    /// Side length of the square feature maps.
    pub feature_map_size: usize,
    /// Flat length of the stacked laser map channel.
    pub scan_map_len: usize,
    /// Goal vector length (distance, angle).
    pub goal_size: usize,
    /// Last-action vector length; 0 when the channel is absent.
    pub last_action_size: usize,
    /// Number of pedestrian feature maps present.
    pub num_pedestrian_maps: usize,
}

impl ExtractorInputs {
    /// Derive input sizes for `kind` from a constructed manager.
    ///
    /// Fails with `SpaceNotFound` if the manager is missing any space the
    /// extractor requires; optional channels (last action) size to zero
    /// when absent.
    pub fn from_manager(kind: ExtractorKind, manager: &ObservationSpaceManager) -> Result<Self> {
        for &required in kind.required_observations() {
            if !manager.contains(required) {
                return Err(NavError::SpaceNotFound(required.name().to_string()));
            }
        }

        let scan_map_len = if manager.contains(SpaceKind::StackedLaserMap) {
            let descriptor = manager.descriptor(SpaceKind::StackedLaserMap)?;
            descriptor.shape.last().copied().unwrap_or(0)
        } else {
            0
        };

        let goal_size = if manager.contains(SpaceKind::Subgoal) {
            manager.descriptor(SpaceKind::Subgoal)?.len()
        } else if manager.contains(SpaceKind::Goal) {
            manager.descriptor(SpaceKind::Goal)?.len()
        } else {
            0
        };

        let last_action_size = if manager.contains(SpaceKind::LastAction) {
            manager.descriptor(SpaceKind::LastAction)?.len()
        } else {
            0
        };

        Ok(Self {
            feature_map_size: manager.config().feature_map_size,
            scan_map_len,
            goal_size,
            last_action_size,
            num_pedestrian_maps: manager.pedestrian_spaces().len(),
        })
    }
}
