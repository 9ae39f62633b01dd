//! Screen-space id/label annotations for visible entities

use serde::{Deserialize, Serialize};
use strut_core::ObjectId;
use strut_model::Entity;
use strut_store::SceneStore;
use strut_view::Viewport;

/// Pixel offset applied to each label so text sits beside the anchor
pub const LABEL_OFFSET_PX: f32 = 8.0;

/// Per-kind toggles for which annotation parts are rendered
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub show_node_id: bool,
    pub show_node_label: bool,
    pub show_frame_id: bool,
    pub show_frame_label: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_node_id: true,
            show_node_label: true,
            show_frame_id: true,
            show_frame_label: true,
        }
    }
}

/// One annotation ready for text rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenLabel {
    pub object: ObjectId,
    pub text: String,
    /// Pixel position, already offset from the anchor
    pub position: [f32; 2],
}

/// Build labels for every visible entity, in store order.
///
/// A label joins the enabled, non-empty parts (id first, then label)
/// with " | ". Entities whose parts are all disabled or empty, and
/// anchors behind the camera, produce no label.
pub fn label_overlay(
    store: &impl SceneStore,
    settings: &DisplaySettings,
    viewport: &Viewport,
) -> Vec<ScreenLabel> {
    let mut labels = Vec::new();

    for id in store.visible_objects() {
        let Some(obj) = store.get(id) else { continue };
        let Some(entity) = Entity::resolve(id, obj) else { continue };

        let (anchor, parts) = match &entity {
            Entity::Node(node) => {
                let Ok(anchor) = node.position(store) else { continue };
                let mut parts = Vec::new();
                if settings.show_node_id && !node.id().is_empty() {
                    parts.push(node.id());
                }
                if settings.show_node_label && !node.label().is_empty() {
                    parts.push(node.label());
                }
                (anchor, parts)
            }
            Entity::Frame(frame) => {
                let Ok(anchor) = frame.midpoint(store) else { continue };
                let mut parts = Vec::new();
                if settings.show_frame_id && !frame.id().is_empty() {
                    parts.push(frame.id());
                }
                if settings.show_frame_label && !frame.label().is_empty() {
                    parts.push(frame.label());
                }
                (anchor, parts)
            }
        };

        if parts.is_empty() {
            continue;
        }
        let Some([sx, sy]) = viewport.world_to_screen(anchor) else {
            continue;
        };

        labels.push(ScreenLabel {
            object: id,
            text: parts.join(" | "),
            position: [sx + LABEL_OFFSET_PX, sy + LABEL_OFFSET_PX],
        });
    }

    labels
}
