//! Interactive node/frame placement state machines
//!
//! Each tool is an explicit state machine consuming discrete pointer
//! events and reporting what it did. View-navigation gestures are
//! answered with `PassThrough` so the host keeps orbiting/zooming while
//! a tool is live; cancellation discards recorded state but never rolls
//! back entities committed by earlier presses.

use strut_core::{ObjectId, Result, Vec3};
use strut_model::{frame, node};
use strut_snap::{PointerSample, SnapEngine};
use strut_store::SceneStore;
use strut_view::Viewport;

/// Placeholder written into frame references until node binding exists.
/// References are frozen at creation; nothing resolves them later.
pub const UNRESOLVED_REF: &str = "TEMP";

/// A discrete input event delivered to a tool
#[derive(Debug, Clone, Copy)]
pub enum ToolEvent {
    /// Primary button press at a pointer position
    Press(PointerSample),
    /// Pointer motion without a press
    Move(PointerSample),
    /// Camera/view navigation gesture (orbit, pan, zoom)
    Navigate,
    /// Abort request (escape)
    Cancel,
}

/// What a tool did with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolOutcome {
    /// Event consumed, tool still running
    Continue,
    /// An entity was created and selected
    Commit(ObjectId),
    /// Navigation event, forwarded unconsumed to the host
    PassThrough,
    /// Tool cancelled; recorded state discarded
    Cancelled,
}

/// Capture progress of a placement tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolState {
    Idle,
    AwaitingStart,
    /// Frame tool only: start point recorded, waiting for the end point
    AwaitingEnd,
    Cancelled,
}

/// Repeatable single-point node placement
pub struct NodeTool {
    snap: SnapEngine,
    display_size: f32,
    state: ToolState,
}

impl NodeTool {
    pub fn new(snap_threshold: f32, display_size: f32) -> Self {
        Self {
            snap: SnapEngine::new(snap_threshold),
            display_size,
            state: ToolState::Idle,
        }
    }

    /// Arm the tool
    pub fn start(&mut self) {
        self.state = ToolState::AwaitingStart;
    }

    pub fn state(&self) -> ToolState {
        self.state
    }

    pub fn handle(
        &mut self,
        store: &mut impl SceneStore,
        viewport: &Viewport,
        event: ToolEvent,
    ) -> Result<ToolOutcome> {
        match event {
            ToolEvent::Navigate => Ok(ToolOutcome::PassThrough),
            ToolEvent::Cancel => {
                if self.state == ToolState::Idle {
                    return Ok(ToolOutcome::Continue);
                }
                self.state = ToolState::Cancelled;
                Ok(ToolOutcome::Cancelled)
            }
            ToolEvent::Press(pointer) if self.state == ToolState::AwaitingStart => {
                let point = self.snap.get_point(store, viewport, &pointer);
                let new_node = node::create(store, point, self.display_size)?;
                new_node.select(store)?;
                // stays in AwaitingStart: every further press places another node
                Ok(ToolOutcome::Commit(new_node.object()))
            }
            ToolEvent::Press(_) | ToolEvent::Move(_) => Ok(ToolOutcome::Continue),
        }
    }
}

/// Continuous polyline frame placement: after the first segment, every
/// committed end point becomes the next start point
pub struct FrameTool {
    snap: SnapEngine,
    state: ToolState,
    start_point: Option<Vec3>,
    start_ref: Option<String>,
}

impl FrameTool {
    pub fn new(snap_threshold: f32) -> Self {
        Self {
            snap: SnapEngine::new(snap_threshold),
            state: ToolState::Idle,
            start_point: None,
            start_ref: None,
        }
    }

    /// Arm the tool
    pub fn start(&mut self) {
        self.state = ToolState::AwaitingStart;
        self.start_point = None;
        self.start_ref = None;
    }

    pub fn state(&self) -> ToolState {
        self.state
    }

    pub fn handle(
        &mut self,
        store: &mut impl SceneStore,
        viewport: &Viewport,
        event: ToolEvent,
    ) -> Result<ToolOutcome> {
        match event {
            ToolEvent::Navigate => Ok(ToolOutcome::PassThrough),
            ToolEvent::Cancel => {
                if self.state == ToolState::Idle {
                    return Ok(ToolOutcome::Continue);
                }
                // drop the recorded start; committed frames stay
                self.start_point = None;
                self.start_ref = None;
                self.state = ToolState::Cancelled;
                Ok(ToolOutcome::Cancelled)
            }
            ToolEvent::Press(pointer) if self.state == ToolState::AwaitingStart => {
                let point = self.snap.get_point(store, viewport, &pointer);
                self.start_point = Some(point);
                self.start_ref = Some(UNRESOLVED_REF.into());
                self.state = ToolState::AwaitingEnd;
                Ok(ToolOutcome::Continue)
            }
            ToolEvent::Press(pointer) if self.state == ToolState::AwaitingEnd => {
                let point = self.snap.get_point(store, viewport, &pointer);
                let start = self.start_point.expect("start recorded in AwaitingEnd");
                let start_ref = self
                    .start_ref
                    .clone()
                    .expect("start ref recorded in AwaitingEnd");

                let new_frame = frame::create(store, start, point, &start_ref, UNRESOLVED_REF)?;
                new_frame.select(store)?;

                // the end point opens the next segment
                self.start_point = Some(point);
                self.start_ref = Some(UNRESOLVED_REF.into());
                Ok(ToolOutcome::Commit(new_frame.object()))
            }
            ToolEvent::Press(_) | ToolEvent::Move(_) => Ok(ToolOutcome::Continue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strut_model::{frame, node};
    use strut_snap::DEFAULT_SNAP_THRESHOLD;
    use strut_store::MemoryScene;
    use strut_view::Camera;

    fn viewport() -> Viewport {
        let camera = Camera::look_from(Vec3::new(0.0, -10.0, 0.0), Vec3::ZERO);
        Viewport::new(camera, 800.0, 600.0)
    }

    fn press(x: f32, y: f32) -> ToolEvent {
        ToolEvent::Press(PointerSample::new(x, y))
    }

    #[test]
    fn test_node_tool_repeats_placement() {
        let mut scene = MemoryScene::new();
        let viewport = viewport();
        let mut tool = NodeTool::new(DEFAULT_SNAP_THRESHOLD, 0.1);
        tool.start();

        let first = tool.handle(&mut scene, &viewport, press(400.0, 300.0)).unwrap();
        assert!(matches!(first, ToolOutcome::Commit(_)));
        assert_eq!(tool.state(), ToolState::AwaitingStart);

        let second = tool.handle(&mut scene, &viewport, press(500.0, 300.0)).unwrap();
        assert!(matches!(second, ToolOutcome::Commit(_)));
        assert_eq!(node::all(&scene).len(), 2);
    }

    #[test]
    fn test_node_tool_idle_ignores_presses() {
        let mut scene = MemoryScene::new();
        let viewport = viewport();
        let mut tool = NodeTool::new(DEFAULT_SNAP_THRESHOLD, 0.1);

        let outcome = tool.handle(&mut scene, &viewport, press(400.0, 300.0)).unwrap();
        assert_eq!(outcome, ToolOutcome::Continue);
        assert!(node::all(&scene).is_empty());
    }

    #[test]
    fn test_frame_tool_polyline_loop() {
        let mut scene = MemoryScene::new();
        let viewport = viewport();
        let mut tool = FrameTool::new(DEFAULT_SNAP_THRESHOLD);
        tool.start();

        // first press records the start
        let outcome = tool.handle(&mut scene, &viewport, press(300.0, 300.0)).unwrap();
        assert_eq!(outcome, ToolOutcome::Continue);
        assert_eq!(tool.state(), ToolState::AwaitingEnd);
        assert!(frame::all(&scene).is_empty());

        // second press commits a frame and stays armed
        let outcome = tool.handle(&mut scene, &viewport, press(400.0, 300.0)).unwrap();
        assert!(matches!(outcome, ToolOutcome::Commit(_)));
        assert_eq!(tool.state(), ToolState::AwaitingEnd);

        // third press commits a second frame starting at the previous end
        let outcome = tool.handle(&mut scene, &viewport, press(500.0, 300.0)).unwrap();
        assert!(matches!(outcome, ToolOutcome::Commit(_)));

        let frames = frame::all(&scene);
        assert_eq!(frames.len(), 2);

        let [_, first_end] = frames[0].endpoints(&scene).unwrap();
        let [second_start, _] = frames[1].endpoints(&scene).unwrap();
        assert!((first_end - second_start).length() < 1e-4);
    }

    #[test]
    fn test_frame_refs_are_placeholders() {
        let mut scene = MemoryScene::new();
        let viewport = viewport();
        let mut tool = FrameTool::new(DEFAULT_SNAP_THRESHOLD);
        tool.start();

        tool.handle(&mut scene, &viewport, press(300.0, 300.0)).unwrap();
        tool.handle(&mut scene, &viewport, press(400.0, 300.0)).unwrap();

        let frames = frame::all(&scene);
        assert_eq!(frames[0].start_ref(), UNRESOLVED_REF);
        assert_eq!(frames[0].end_ref(), UNRESOLVED_REF);
    }

    #[test]
    fn test_cancel_discards_pending_start_only() {
        let mut scene = MemoryScene::new();
        let viewport = viewport();
        let mut tool = FrameTool::new(DEFAULT_SNAP_THRESHOLD);
        tool.start();

        tool.handle(&mut scene, &viewport, press(300.0, 300.0)).unwrap();
        let outcome = tool.handle(&mut scene, &viewport, ToolEvent::Cancel).unwrap();

        assert_eq!(outcome, ToolOutcome::Cancelled);
        assert_eq!(tool.state(), ToolState::Cancelled);
        // no partial frame was created
        assert!(frame::all(&scene).is_empty());

        // the tool is re-armable
        tool.start();
        assert_eq!(tool.state(), ToolState::AwaitingStart);
    }

    #[test]
    fn test_cancel_keeps_committed_frames() {
        let mut scene = MemoryScene::new();
        let viewport = viewport();
        let mut tool = FrameTool::new(DEFAULT_SNAP_THRESHOLD);
        tool.start();

        tool.handle(&mut scene, &viewport, press(300.0, 300.0)).unwrap();
        tool.handle(&mut scene, &viewport, press(400.0, 300.0)).unwrap();
        tool.handle(&mut scene, &viewport, ToolEvent::Cancel).unwrap();

        assert_eq!(frame::all(&scene).len(), 1);
    }

    #[test]
    fn test_navigation_passes_through_mid_capture() {
        let mut scene = MemoryScene::new();
        let viewport = viewport();
        let mut tool = FrameTool::new(DEFAULT_SNAP_THRESHOLD);
        tool.start();
        tool.handle(&mut scene, &viewport, press(300.0, 300.0)).unwrap();

        let outcome = tool.handle(&mut scene, &viewport, ToolEvent::Navigate).unwrap();
        assert_eq!(outcome, ToolOutcome::PassThrough);
        // capture state survives navigation
        assert_eq!(tool.state(), ToolState::AwaitingEnd);
    }

    #[test]
    fn test_commit_selects_new_entity() {
        let mut scene = MemoryScene::new();
        let viewport = viewport();
        let mut tool = NodeTool::new(DEFAULT_SNAP_THRESHOLD, 0.1);
        tool.start();

        let outcome = tool.handle(&mut scene, &viewport, press(400.0, 300.0)).unwrap();
        let ToolOutcome::Commit(object) = outcome else {
            panic!("expected a commit");
        };

        assert_eq!(scene.selected_objects(), vec![object]);
        assert_eq!(scene.active_object(), Some(object));
    }
}
