//! Pointlight Motion - kinematic synthesis of point-light figures
//!
//! This crate implements:
//! - Skeleton topology: rest pose, reference poses, bones
//! - Motion primitives: oscillation, arcs, easing, planar rotation
//! - Action generators and their registry
//! - Modulation: weight/affect traits to continuous scalars
//! - Pose assembler (`MotionEngine`) with frame iteration
//! - Projection adapter and seedable noise source

pub mod config;
pub mod engine;
pub mod frame;
pub mod generators;
pub mod modulation;
pub mod noise;
pub mod pose;
pub mod primitives;
pub mod projection;
pub mod registry;
pub mod skeleton;

pub use config::*;
pub use engine::*;
pub use frame::*;
pub use generators::*;
pub use modulation::*;
pub use noise::*;
pub use pose::*;
pub use primitives::*;
pub use projection::*;
pub use registry::*;
pub use skeleton::*;
