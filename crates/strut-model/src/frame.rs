//! Frame CRUD over the scene store

use crate::entity::Frame;
use crate::ident::{next_id, FRAME_PREFIX};
use crate::tag::{FrameTag, FRAME_KIND};
use log::debug;
use strut_core::{ObjectId, Result, StrutError, Vec3};
use strut_store::{MeshData, SceneObject, SceneStore};

/// Create a frame between two world points.
///
/// `start_ref`/`end_ref` are recorded verbatim as weak node references;
/// nothing validates that they name live nodes.
pub fn create(
    store: &mut impl SceneStore,
    start: Vec3,
    end: Vec3,
    start_ref: &str,
    end_ref: &str,
) -> Result<Frame> {
    let (frame_id, name) = next_id(store, FRAME_PREFIX);

    let mut obj = SceneObject::mesh(name.clone(), MeshData::line(start, end));
    center_geometry(&mut obj);

    let tag = FrameTag {
        frame_id,
        frame_type: FRAME_KIND.into(),
        start_node: start_ref.into(),
        end_node: end_ref.into(),
        label: name.clone(),
    };
    tag.write(&mut obj)?;

    let object = store.add_object(obj);
    debug!("created frame {name} from {start:?} to {end:?}");

    Frame::from_object(object, store.get(object).expect("object just added"))
}

/// Move the local origin to the vertex centroid, compensating the
/// transform so world-space geometry is unchanged. Downstream origin
/// math assumes local-origin-at-centroid, so this runs on every create
/// and replicate.
pub fn center_geometry(obj: &mut SceneObject) {
    let Some(mesh) = obj.mesh.as_mut() else { return };
    if mesh.vertices.is_empty() {
        return;
    }

    let center = mesh.centroid();
    for v in &mut mesh.vertices {
        *v -= center;
    }

    obj.transform.position += obj.transform.rotate_scale(center);
}

/// Translate a frame; both endpoints move together
pub fn move_by(store: &mut impl SceneStore, frame: &Frame, direction: Vec3) -> Result<()> {
    let obj = store
        .get_mut(frame.object())
        .ok_or_else(|| StrutError::ObjectNotFound(frame.object().to_string()))?;
    obj.transform.position += direction;
    Ok(())
}

/// Delete a frame unconditionally
pub fn delete(store: &mut impl SceneStore, frame: &Frame) -> Result<()> {
    debug!("deleting frame {}", frame.label());
    store.remove_object(frame.object())
}

/// Duplicate a frame offset by `direction`, allocating a fresh id.
/// Node references are copied verbatim even when stale or duplicated.
pub fn replicate(store: &mut impl SceneStore, frame: &Frame, direction: Vec3) -> Result<Frame> {
    let (frame_id, name) = next_id(store, FRAME_PREFIX);

    let object = store.duplicate_object(frame.object())?;
    let obj = store
        .get_mut(object)
        .ok_or_else(|| StrutError::ObjectNotFound(object.to_string()))?;
    obj.name = name.clone();
    obj.transform.position += direction;

    let tag = FrameTag {
        frame_id,
        frame_type: FRAME_KIND.into(),
        start_node: frame.start_ref().into(),
        end_node: frame.end_ref().into(),
        label: name,
    };
    tag.write(obj)?;

    Frame::from_object(object, store.get(object).expect("object just duplicated"))
}

/// Look a frame up by its namespace id
pub fn get_by_id(store: &impl SceneStore, frame_id: &str) -> Option<Frame> {
    all(store).into_iter().find(|f| f.id() == frame_id)
}

/// View an object as a frame, or `None` if it isn't one.
/// Tag mismatch is recovered here, never propagated.
pub fn get_by_object(store: &impl SceneStore, object: ObjectId) -> Option<Frame> {
    let obj = store.get(object)?;
    Frame::from_object(object, obj).ok()
}

/// All frames, in store order
pub fn all(store: &impl SceneStore) -> Vec<Frame> {
    store
        .object_ids()
        .into_iter()
        .filter_map(|id| get_by_object(store, id))
        .collect()
}

/// Selected frames, in store order
pub fn selected(store: &impl SceneStore) -> Vec<Frame> {
    store
        .selected_objects()
        .into_iter()
        .filter_map(|id| get_by_object(store, id))
        .collect()
}

pub fn exists(store: &impl SceneStore, frame_id: &str) -> bool {
    get_by_id(store, frame_id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strut_store::MemoryScene;

    const TOL: f32 = 1e-6;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < TOL
    }

    #[test]
    fn test_create_recenters_geometry() {
        let mut scene = MemoryScene::new();
        let a = Vec3::ZERO;
        let b = Vec3::new(2.0, 0.0, 0.0);

        let frame = create(&mut scene, a, b, "1", "2").unwrap();

        let obj = scene.get(frame.object()).unwrap();
        let mesh = obj.mesh.as_ref().unwrap();

        // local vertices sum to zero after recentering
        let sum = mesh.vertices[0] + mesh.vertices[1];
        assert!(close(sum, Vec3::ZERO));

        // the transform absorbed the centroid, world endpoints unchanged
        assert_eq!(obj.transform.position, Vec3::new(1.0, 0.0, 0.0));
        let [w0, w1] = frame.endpoints(&scene).unwrap();
        assert!(close(w0, a));
        assert!(close(w1, b));
    }

    #[test]
    fn test_midpoint() {
        let mut scene = MemoryScene::new();
        let frame = create(
            &mut scene,
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(4.0, 0.0, 2.0),
            "1",
            "2",
        )
        .unwrap();

        assert!(close(
            frame.midpoint(&scene).unwrap(),
            Vec3::new(2.0, 0.0, 2.0)
        ));
    }

    #[test]
    fn test_frame_ids_independent_of_nodes() {
        let mut scene = MemoryScene::new();
        crate::node::create(&mut scene, Vec3::ZERO, 0.5).unwrap();

        let frame = create(&mut scene, Vec3::ZERO, Vec3::X, "1", "TEMP").unwrap();

        assert_eq!(frame.id(), "1");
        assert_eq!(frame.label(), "F1");
        assert_eq!(frame.start_ref(), "1");
        assert_eq!(frame.end_ref(), "TEMP");
    }

    #[test]
    fn test_move_translates_both_endpoints() {
        let mut scene = MemoryScene::new();
        let frame = create(&mut scene, Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), "1", "2").unwrap();

        move_by(&mut scene, &frame, Vec3::new(0.0, 0.0, 3.0)).unwrap();

        let [w0, w1] = frame.endpoints(&scene).unwrap();
        assert!(close(w0, Vec3::new(0.0, 0.0, 3.0)));
        assert!(close(w1, Vec3::new(2.0, 0.0, 3.0)));
    }

    #[test]
    fn test_replicate_copies_refs_verbatim() {
        let mut scene = MemoryScene::new();
        let src = create(&mut scene, Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), "7", "gone").unwrap();

        let copy = replicate(&mut scene, &src, Vec3::new(0.0, 1.0, 0.0)).unwrap();

        assert_eq!(copy.id(), "2");
        assert_eq!(copy.start_ref(), "7");
        assert_eq!(copy.end_ref(), "gone");

        let [w0, w1] = copy.endpoints(&scene).unwrap();
        assert!(close(w0, Vec3::new(0.0, 1.0, 0.0)));
        assert!(close(w1, Vec3::new(2.0, 1.0, 0.0)));

        // source untouched
        let [s0, _] = src.endpoints(&scene).unwrap();
        assert!(close(s0, Vec3::ZERO));
    }

    #[test]
    fn test_get_by_object_rejects_nodes() {
        let mut scene = MemoryScene::new();
        let node = crate::node::create(&mut scene, Vec3::ZERO, 0.5).unwrap();
        let frame = create(&mut scene, Vec3::ZERO, Vec3::X, "1", "2").unwrap();

        assert!(get_by_object(&scene, node.object()).is_none());
        assert!(get_by_object(&scene, frame.object()).is_some());
        assert!(crate::node::get_by_object(&scene, frame.object()).is_none());
    }

    #[test]
    fn test_recenter_with_rotated_transform() {
        // Rotation applied before recentering must not shift world geometry
        let mut obj = SceneObject::mesh(
            "F9",
            MeshData::line(Vec3::new(1.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0)),
        );
        obj.transform.rotation = Vec3::new(0.0, 0.0, 90.0);

        let before = obj.world_vertices();
        center_geometry(&mut obj);
        let after = obj.world_vertices();

        assert!(close(before[0], after[0]));
        assert!(close(before[1], after[1]));
        let mesh = obj.mesh.as_ref().unwrap();
        assert!(close(mesh.vertices[0] + mesh.vertices[1], Vec3::ZERO));
    }
}
