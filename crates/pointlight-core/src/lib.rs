//! Pointlight Core - Fundamental types
//!
//! This crate defines the core types shared by every pointlight crate:
//! - Landmark identities (the 15 dots, canonical order)
//! - Action identities and duration semantics
//! - Categorical modulation traits (weight, affect)
//! - Vector math in body units
//! - Error taxonomy

pub mod action;
pub mod disposition;
pub mod error;
pub mod landmark;
pub mod vector;

pub use action::*;
pub use disposition::*;
pub use error::*;
pub use landmark::*;
pub use vector::*;
