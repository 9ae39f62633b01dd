//! Strut Core - Foundational types for the strut structural modeler
//!
//! This crate provides the core types that all other strut crates depend on:
//! - `ObjectId` - Store-level object handles
//! - `Transform`, `Vec3` - Spatial types
//! - Error types and Result alias

mod error;
mod id;
mod types;

pub use error::{Result, StrutError};
pub use id::ObjectId;
pub use types::{Transform, Vec3};
