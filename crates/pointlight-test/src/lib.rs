//! Pointlight Test Harness - stimulus validation
//!
//! This crate provides:
//! - Stimulus matrix: every action × weight × affect condition
//! - Invariant checker: sampled determinism, wrap, clamp and segment checks
//! - Criterion benchmarks for pose synthesis and projection

pub mod invariants;
pub mod matrix;

pub use invariants::*;
pub use matrix::*;
