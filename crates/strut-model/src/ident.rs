//! Namespace ID allocation by display-name scan
//!
//! Ids are not persisted counters: each allocation scans every object
//! whose display name starts with the namespace prefix, parses the
//! trailing digits, and returns max + 1. Linear in store size per call,
//! which is fine for interactive placement but not for bulk import.
//! Renaming or delete-then-recreate can therefore re-issue an id.

use strut_store::SceneStore;

/// Display-name prefix of the node namespace
pub const NODE_PREFIX: &str = "N";
/// Display-name prefix of the frame namespace
pub const FRAME_PREFIX: &str = "F";

/// Allocate the next id in a namespace.
/// Returns `(numeric_id, display_name)`, e.g. `("4", "N4")`.
pub fn next_id(store: &impl SceneStore, prefix: &str) -> (String, String) {
    let mut max_index: u64 = 0;

    for id in store.object_ids() {
        let Some(obj) = store.get(id) else { continue };
        let Some(suffix) = obj.name.strip_prefix(prefix) else {
            continue;
        };
        if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        if let Ok(n) = suffix.parse::<u64>() {
            max_index = max_index.max(n);
        }
    }

    let idx = max_index + 1;
    (idx.to_string(), format!("{prefix}{idx}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strut_core::Vec3;
    use strut_store::{MemoryScene, SceneObject, SceneStore};

    #[test]
    fn test_empty_namespace_starts_at_one() {
        let scene = MemoryScene::new();
        assert_eq!(next_id(&scene, NODE_PREFIX), ("1".into(), "N1".into()));
    }

    #[test]
    fn test_next_id_is_max_plus_one() {
        let mut scene = MemoryScene::new();
        for name in ["N1", "N7", "N3"] {
            scene.add_object(SceneObject::empty(name, Vec3::ZERO, 0.5));
        }

        assert_eq!(next_id(&scene, NODE_PREFIX), ("8".into(), "N8".into()));
    }

    #[test]
    fn test_namespaces_are_independent() {
        let mut scene = MemoryScene::new();
        scene.add_object(SceneObject::empty("N5", Vec3::ZERO, 0.5));

        assert_eq!(next_id(&scene, FRAME_PREFIX), ("1".into(), "F1".into()));
    }

    #[test]
    fn test_non_numeric_suffixes_ignored() {
        let mut scene = MemoryScene::new();
        for name in ["N2a", "Nine", "N", "N4"] {
            scene.add_object(SceneObject::empty(name, Vec3::ZERO, 0.5));
        }

        assert_eq!(next_id(&scene, NODE_PREFIX), ("5".into(), "N5".into()));
    }

    #[test]
    fn test_gap_after_delete_is_not_refilled() {
        let mut scene = MemoryScene::new();
        scene.add_object(SceneObject::empty("N1", Vec3::ZERO, 0.5));
        let n2 = scene.add_object(SceneObject::empty("N2", Vec3::ZERO, 0.5));
        scene.add_object(SceneObject::empty("N3", Vec3::ZERO, 0.5));

        scene.remove_object(n2).unwrap();
        assert_eq!(next_id(&scene, NODE_PREFIX), ("4".into(), "N4".into()));
    }
}
