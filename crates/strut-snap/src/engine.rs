//! Snap resolution: one pointer sample in, one 3D point out

use crate::providers::SNAP_PROVIDERS;
use strut_core::Vec3;
use strut_store::SceneStore;
use strut_view::Viewport;

/// Pixel radius within which a candidate can win
pub const DEFAULT_SNAP_THRESHOLD: f32 = 10.0;

/// One pointer event sample in viewport pixels
#[derive(Debug, Clone, Copy)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    /// True while the snap modifier (shift) is held
    pub snap_modifier: bool,
}

impl PointerSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            snap_modifier: false,
        }
    }

    pub fn with_snap(mut self) -> Self {
        self.snap_modifier = true;
        self
    }
}

/// Decides the correct 3D point from pointer input, considering
/// snapping rules.
pub struct SnapEngine {
    pub snap_threshold: f32,
}

impl Default for SnapEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SNAP_THRESHOLD)
    }
}

impl SnapEngine {
    pub fn new(snap_threshold: f32) -> Self {
        Self { snap_threshold }
    }

    /// Resolve a pointer sample to a world point
    pub fn get_point(
        &self,
        store: &impl SceneStore,
        viewport: &Viewport,
        pointer: &PointerSample,
    ) -> Vec3 {
        if self.should_snap(pointer) {
            self.snapped_point(store, viewport, pointer)
        } else {
            self.free_point(store, viewport, pointer)
        }
    }

    /// Snapping policy: shift held = snap
    pub fn should_snap(&self, pointer: &PointerSample) -> bool {
        pointer.snap_modifier
    }

    /// Unproject the pointer onto the view-aligned plane at the
    /// reference-cursor depth
    fn free_point(
        &self,
        store: &impl SceneStore,
        viewport: &Viewport,
        pointer: &PointerSample,
    ) -> Vec3 {
        viewport.location_at_depth(pointer.x, pointer.y, store.cursor())
    }

    /// Scan every candidate of every provider over every visible object,
    /// keeping the first strictly-closest candidate under the threshold.
    /// Iteration order (store order x provider priority) is the tie-break.
    fn snapped_point(
        &self,
        store: &impl SceneStore,
        viewport: &Viewport,
        pointer: &PointerSample,
    ) -> Vec3 {
        let mut best: Option<(Vec3, f32)> = None;

        for id in store.visible_objects() {
            let Some(obj) = store.get(id) else { continue };

            for provider in SNAP_PROVIDERS {
                for world_co in provider(obj) {
                    let Some(screen_co) = viewport.world_to_screen(world_co) else {
                        continue;
                    };

                    let dx = screen_co[0] - pointer.x;
                    let dy = screen_co[1] - pointer.y;
                    let dist = (dx * dx + dy * dy).sqrt();

                    if dist < self.snap_threshold
                        && best.map_or(true, |(_, best_dist)| dist < best_dist)
                    {
                        best = Some((world_co, dist));
                    }
                }
            }
        }

        match best {
            Some((point, _)) => point,
            None => self.free_point(store, viewport, pointer),
        }
    }
}
