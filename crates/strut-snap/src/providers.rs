//! Candidate point providers
//!
//! A provider is a pure function from one scene object to the snap
//! candidates it offers. Providers self-guard: handed an object outside
//! their domain they return nothing, never an error. Registration order
//! in [`SNAP_PROVIDERS`] is the only tie-break between equidistant
//! candidates; it never filters validity.

use strut_core::Vec3;
use strut_model::{FrameTag, NodeTag};
use strut_store::{ObjectKind, SceneObject};

/// One snap candidate source
pub type Provider = fn(&SceneObject) -> Vec<Vec3>;

/// Node origin (one point)
pub fn node_origin(obj: &SceneObject) -> Vec<Vec3> {
    if NodeTag::read(obj).is_err() {
        return Vec::new();
    }
    vec![obj.transform.position]
}

/// Frame endpoints (the two stored vertices, world space)
pub fn frame_endpoints(obj: &SceneObject) -> Vec<Vec3> {
    if FrameTag::read(obj).is_err() {
        return Vec::new();
    }
    let Some(mesh) = obj.mesh.as_ref().filter(|m| m.vertices.len() >= 2) else {
        return Vec::new();
    };
    vec![
        obj.transform.transform_point(mesh.vertices[0]),
        obj.transform.transform_point(mesh.vertices[1]),
    ]
}

/// Frame midpoint (mean of the two endpoints)
pub fn frame_midpoint(obj: &SceneObject) -> Vec<Vec3> {
    let endpoints = frame_endpoints(obj);
    if endpoints.len() < 2 {
        return Vec::new();
    }
    vec![(endpoints[0] + endpoints[1]) * 0.5]
}

/// Origin of an empty that is not a node
pub fn plain_empty_origin(obj: &SceneObject) -> Vec<Vec3> {
    if obj.kind != ObjectKind::Empty || NodeTag::read(obj).is_ok() {
        return Vec::new();
    }
    vec![obj.transform.position]
}

/// Extreme vertices of a mesh that is not a frame: the lexicographically
/// smallest and largest world-space vertices (axis priority x, y, z)
pub fn plain_mesh_extremes(obj: &SceneObject) -> Vec<Vec3> {
    let Some(verts) = plain_mesh_world_vertices(obj) else {
        return Vec::new();
    };

    let min = verts.iter().copied().min_by(|a, b| a.lex_cmp(b));
    let max = verts.iter().copied().max_by(|a, b| a.lex_cmp(b));

    match (min, max) {
        (Some(min), Some(max)) => vec![min, max],
        _ => Vec::new(),
    }
}

/// Vertex centroid of a mesh that is not a frame
pub fn plain_mesh_centroid(obj: &SceneObject) -> Vec<Vec3> {
    let Some(verts) = plain_mesh_world_vertices(obj) else {
        return Vec::new();
    };

    let mut sum = Vec3::ZERO;
    for v in &verts {
        sum += *v;
    }
    vec![sum / verts.len() as f32]
}

fn plain_mesh_world_vertices(obj: &SceneObject) -> Option<Vec<Vec3>> {
    if obj.kind != ObjectKind::Mesh || FrameTag::read(obj).is_ok() {
        return None;
    }
    let verts = obj.world_vertices();
    if verts.is_empty() {
        return None;
    }
    Some(verts)
}

/// Registered providers in priority order: domain-aware first,
/// generic objects after
pub const SNAP_PROVIDERS: [Provider; 6] = [
    node_origin,
    frame_endpoints,
    frame_midpoint,
    plain_empty_origin,
    plain_mesh_extremes,
    plain_mesh_centroid,
];

#[cfg(test)]
mod tests {
    use super::*;
    use strut_model::{frame, node};
    use strut_store::{MemoryScene, MeshData, SceneStore};

    #[test]
    fn test_node_origin_guards() {
        let mut scene = MemoryScene::new();
        let n = node::create(&mut scene, Vec3::new(1.0, 2.0, 3.0), 0.5).unwrap();
        let plain = scene.add_object(SceneObject::empty("helper", Vec3::X, 1.0));

        let node_obj = scene.get(n.object()).unwrap();
        assert_eq!(node_origin(node_obj), vec![Vec3::new(1.0, 2.0, 3.0)]);

        let plain_obj = scene.get(plain).unwrap();
        assert!(node_origin(plain_obj).is_empty());
        assert_eq!(plain_empty_origin(plain_obj), vec![Vec3::X]);
        assert!(plain_empty_origin(node_obj).is_empty());
    }

    #[test]
    fn test_frame_endpoints_and_midpoint() {
        let mut scene = MemoryScene::new();
        let f = frame::create(
            &mut scene,
            Vec3::ZERO,
            Vec3::new(4.0, 0.0, 0.0),
            "1",
            "2",
        )
        .unwrap();

        let obj = scene.get(f.object()).unwrap();
        let ends = frame_endpoints(obj);
        assert_eq!(ends.len(), 2);
        assert!((ends[0] - Vec3::ZERO).length() < 1e-6);
        assert!((ends[1] - Vec3::new(4.0, 0.0, 0.0)).length() < 1e-6);

        let mid = frame_midpoint(obj);
        assert_eq!(mid.len(), 1);
        assert!((mid[0] - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-6);

        // frames are not plain meshes
        assert!(plain_mesh_extremes(obj).is_empty());
        assert!(plain_mesh_centroid(obj).is_empty());
    }

    #[test]
    fn test_plain_mesh_extremes_lexicographic() {
        let mesh = MeshData {
            vertices: vec![
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 5.0, 9.0),
                Vec3::new(1.0, -2.0, 0.0),
            ],
            edges: vec![],
        };
        let obj = SceneObject::mesh("M1", mesh);

        let extremes = plain_mesh_extremes(&obj);
        assert_eq!(extremes[0], Vec3::new(0.0, 5.0, 9.0));
        assert_eq!(extremes[1], Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_plain_mesh_centroid_uses_transform() {
        let mut obj = SceneObject::mesh("M1", MeshData::line(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)));
        obj.transform.position = Vec3::new(0.0, 0.0, 5.0);

        let centroid = plain_mesh_centroid(&obj);
        assert_eq!(centroid, vec![Vec3::new(1.0, 0.0, 5.0)]);
    }

    #[test]
    fn test_empty_mesh_yields_nothing() {
        let obj = SceneObject::mesh("M1", MeshData::default());
        assert!(plain_mesh_extremes(&obj).is_empty());
        assert!(plain_mesh_centroid(&obj).is_empty());
    }
}
