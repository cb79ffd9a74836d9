//! JSON-defined body networks for the custom agent.
//!
//! The network description is data, not code: a list of layers parsed
//! from JSON and validated before any builder touches it. Parse and
//! validation failures are construction-time errors.
//!
//! ```json
//! {
//!   "layers": [
//!     { "type": "linear", "in_features": 725, "out_features": 128 },
//!     { "type": "activation", "function": "relu" },
//!     { "type": "linear", "in_features": 128, "out_features": 64 }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NavError, Result};
use crate::model::agent::Activation;

/// One layer of a body network.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayerSpec {
    /// Fully connected layer.
    Linear {
        in_features: usize,
        out_features: usize,
    },
    /// Elementwise activation.
    Activation { function: Activation },
    /// Flatten multi-dimensional input.
    Flatten,
}

/// A body network description parsed from JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Layers in forward order.
    pub layers: Vec<LayerSpec>,
}

impl NetworkSpec {
    /// Parse a network description from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| NavError::MalformedNetworkSpec(e.to_string()))
    }

    /// Parse a network description from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())
            .map_err(|e| NavError::MalformedNetworkSpec(e.to_string()))?;
        Self::from_json_str(&json)
    }

    /// Check that the description forms a buildable network.
    ///
    /// The first linear layer must accept `feature_dim` inputs, linear
    /// layers must chain (each `in_features` equals the previous
    /// `out_features`), and every width must be positive.
    pub fn validate(&self, feature_dim: usize) -> Result<()> {
        if self.layers.is_empty() {
            return Err(NavError::MalformedNetworkSpec(
                "network has no layers".into(),
            ));
        }

        let mut current_dim = feature_dim;
        let mut saw_linear = false;
        for (i, layer) in self.layers.iter().enumerate() {
            if let LayerSpec::Linear {
                in_features,
                out_features,
            } = layer
            {
                if *in_features == 0 || *out_features == 0 {
                    return Err(NavError::MalformedNetworkSpec(format!(
                        "layer {}: zero-width linear layer",
                        i
                    )));
                }
                if *in_features != current_dim {
                    return Err(NavError::MalformedNetworkSpec(format!(
                        "layer {}: expects {} inputs but receives {}",
                        i, in_features, current_dim
                    )));
                }
                current_dim = *out_features;
                saw_linear = true;
            }
        }

        if !saw_linear {
            return Err(NavError::MalformedNetworkSpec(
                "network has no linear layers".into(),
            ));
        }
        Ok(())
    }

    /// Output width of the last linear layer, if any.
    pub fn output_dim(&self) -> Option<usize> {
        self.layers.iter().rev().find_map(|layer| match layer {
            LayerSpec::Linear { out_features, .. } => Some(*out_features),
            _ => None,
        })
    }
}
