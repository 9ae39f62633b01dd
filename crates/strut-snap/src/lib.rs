//! Strut Snap - Pointer snap resolution
//!
//! Candidate point providers yield world-space snap candidates per
//! scene object; the engine projects them to screen space and picks the
//! closest one within a pixel threshold, falling back to free placement
//! at the reference-cursor depth.

mod engine;
pub mod providers;

pub use engine::{PointerSample, SnapEngine, DEFAULT_SNAP_THRESHOLD};
pub use providers::{Provider, SNAP_PROVIDERS};
