//! Error types for the navigation RL configuration layer.
//!
//! All errors here are construction-time errors: unknown names, duplicate
//! registrations, inconsistent configuration. Per-step encoding never
//! surfaces an error; it degrades to zero-valued output instead.

use std::fmt;

/// Result type for nav_rl operations.
pub type Result<T> = std::result::Result<T, NavError>;

/// Error types that can occur while assembling an agent configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum NavError {
    /// Invalid configuration (zero sizes, non-divisible map geometry, etc.)
    InvalidConfig {
        param: String,
        message: String,
    },
    /// An observation-space name that was never registered.
    UnknownSpace(String),
    /// An agent name that was never registered.
    UnknownAgent(String),
    /// A space required by a lookup or feature extractor is not part of
    /// the manager it was requested from.
    SpaceNotFound(String),
    /// The same space name was listed twice for one manager.
    DuplicateSpace(String),
    /// A JSON network description failed to parse or validate.
    MalformedNetworkSpec(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { param, message } => {
                write!(f, "Invalid configuration for '{}': {}", param, message)
            }
            Self::UnknownSpace(name) => {
                write!(f, "Unknown observation space '{}'", name)
            }
            Self::UnknownAgent(name) => {
                write!(f, "Unknown agent '{}'", name)
            }
            Self::SpaceNotFound(name) => {
                write!(f, "Observation space '{}' not present in manager", name)
            }
            Self::DuplicateSpace(name) => {
                write!(f, "Observation space '{}' listed more than once", name)
            }
            Self::MalformedNetworkSpec(msg) => {
                write!(f, "Malformed network description: {}", msg)
            }
        }
    }
}

impl std::error::Error for NavError {}
