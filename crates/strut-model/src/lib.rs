//! Strut Model - Typed entity registry over the scene store
//!
//! Nodes (point entities) and frames (line entities) are typed views
//! over store objects carrying tag attribute bags. Ids are per-namespace
//! decimal strings allocated by scanning display names.

pub mod entity;
pub mod frame;
pub mod ident;
pub mod node;
pub mod tag;

pub use entity::{selected_entities, Entity, Frame, Node};
pub use ident::{next_id, FRAME_PREFIX, NODE_PREFIX};
pub use tag::{FrameTag, NodeTag, FRAME_KIND, NODE_KIND};
