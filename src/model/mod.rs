//! Policy configuration: extractor contracts and agent blueprints.

pub mod agent;
pub mod extractor;
pub mod net_json;

pub use agent::{Activation, AgentBlueprint, AgentKind};
pub use extractor::{ExtractorInputs, ExtractorKind, ResNetTopology};
pub use net_json::{LayerSpec, NetworkSpec};
