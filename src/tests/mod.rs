//! Behavior suite for the observation encoding pipeline and the policy
//! configuration layer.
//!
//! ## Organization
//!
//! - `resample_tests`: canonical-beam-count resampling
//! - `laser_stack_tests`: temporal buffer invariants and reset semantics
//! - `feature_map_tests`: min/mean pooling, tiling, degraded fallbacks
//! - `space_tests`: per-variant encode behavior and zero-fallbacks
//! - `manager_tests`: ordering, uniqueness, lookup, aggregate encode
//! - `model_tests`: registries, topology validation, JSON networks
//! - `integration_tests`: full pipeline scenarios and golden outputs

pub mod integration_tests;
pub mod space_tests;
