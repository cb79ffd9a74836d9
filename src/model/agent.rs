//! Agent blueprints: the per-agent bundle of observation spaces, feature
//! extractor, and policy head configuration.

use serde::{Deserialize, Serialize};

use crate::config::SpaceConfig;
use crate::error::{NavError, Result};
use crate::model::extractor::{ExtractorKind, ResNetTopology};
use crate::spaces::factory::SpaceKind;
use crate::spaces::manager::ObservationSpaceManager;

/// Activation function used by the policy/value heads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    #[serde(rename = "relu")]
    ReLU,
    #[serde(rename = "tanh")]
    Tanh,
}

/// Registered agent configurations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AgentKind {
    /// Mid-fusion ResNet agent, base variant.
    ResNet1,
    /// ResNet agent with pedestrian type and social-state awareness.
    ResNet2,
    /// ResNet agent adding last-action feedback.
    ResNet3,
    /// ResNet agent with variant 2's channels and deeper blocks.
    ResNet4,
    /// MLP agent with a JSON-defined body network.
    Custom,
}

impl AgentKind {
    /// Every registered agent.
    pub const ALL: [AgentKind; 5] = [
        AgentKind::ResNet1,
        AgentKind::ResNet2,
        AgentKind::ResNet3,
        AgentKind::ResNet4,
        AgentKind::Custom,
    ];

    /// Configuration-facing name.
    pub fn name(self) -> &'static str {
        match self {
            Self::ResNet1 => "RESNET_1",
            Self::ResNet2 => "RESNET_2",
            Self::ResNet3 => "RESNET_3",
            Self::ResNet4 => "RESNET_4",
            Self::Custom => "CUSTOM",
        }
    }

    /// Resolve a configuration string to an agent.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| NavError::UnknownAgent(name.to_string()))
    }

    fn extractor(self) -> ExtractorKind {
        match self {
            Self::ResNet1 => ExtractorKind::ResNetMidFusion1,
            Self::ResNet2 => ExtractorKind::ResNetMidFusion2,
            Self::ResNet3 => ExtractorKind::ResNetMidFusion3,
            Self::ResNet4 => ExtractorKind::ResNetMidFusion4,
            Self::Custom => ExtractorKind::Custom,
        }
    }

    /// Full blueprint for this agent with default settings.
    pub fn blueprint(self) -> AgentBlueprint {
        let extractor = self.extractor();
        AgentBlueprint {
            kind: self,
            observation_spaces: extractor.required_observations().to_vec(),
            space_config: SpaceConfig::default(),
            extractor,
            topology: extractor.default_topology(),
            net_arch: vec![64, 64],
            activation: Activation::ReLU,
        }
    }
}

/// Everything needed to assemble one agent: which spaces to build, how,
/// and which extractor/head configuration consumes them.
#[derive(Clone, Debug)]
pub struct AgentBlueprint {
    /// Registered agent this blueprint describes.
    pub kind: AgentKind,
    /// Observation spaces in concatenation order.
    pub observation_spaces: Vec<SpaceKind>,
    /// Shared space configuration.
    pub space_config: SpaceConfig,
    /// Feature extractor consuming the encoded spaces.
    pub extractor: ExtractorKind,
    /// Extractor topology.
    pub topology: ResNetTopology,
    /// Hidden widths of the policy/value heads.
    pub net_arch: Vec<usize>,
    /// Head activation function.
    pub activation: Activation,
}

impl AgentBlueprint {
    /// Override the shared space configuration.
    pub fn with_space_config(mut self, config: SpaceConfig) -> Self {
        self.space_config = config;
        self
    }

    /// Override the extractor topology.
    pub fn with_topology(mut self, topology: ResNetTopology) -> Self {
        self.topology = topology;
        self
    }

    /// Validate the blueprint and build its observation-space manager.
    pub fn build_manager(&self) -> Result<ObservationSpaceManager> {
        self.topology.validate()?;
        ObservationSpaceManager::new(&self.observation_spaces, self.space_config.clone())
    }
}
