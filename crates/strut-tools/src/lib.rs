//! Strut Tools - Interactive placement, replication and edit operations
//!
//! Tools consume pointer events against a store and a viewport. They
//! own no rendering; outputs are store mutations plus plain data the
//! host can draw (labels, outcomes).

pub mod draw;
pub mod edit;
pub mod overlay;
pub mod replicate;

pub use draw::{FrameTool, NodeTool, ToolEvent, ToolOutcome, ToolState, UNRESOLVED_REF};
pub use edit::{delete_selected, move_selected, set_origin_to_geometry};
pub use overlay::{label_overlay, DisplaySettings, ScreenLabel, LABEL_OFFSET_PX};
pub use replicate::replicate_many;
