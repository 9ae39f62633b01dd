//! Strut Store - Domain-blind scene object storage
//!
//! Objects carry geometry, a transform, and named TOML attribute bags.
//! The `SceneStore` trait is the injection point: the registry and the
//! interactive tools work against it, and `MemoryScene` is the shipped
//! implementation.

mod object;
mod store;

pub use object::{AttrBags, MeshData, ObjectKind, SceneObject};
pub use store::{MemoryScene, SceneStore};
