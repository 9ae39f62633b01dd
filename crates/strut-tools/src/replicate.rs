//! Breadth-first array replication of the selection

use log::debug;
use strut_core::{Result, StrutError, Vec3};
use strut_model::{frame, node, selected_entities, Entity};
use strut_store::SceneStore;

/// Replicate every selected entity `count` times along `direction`.
///
/// Copy `i` of a source lands at `source + direction * i`, so all
/// copies are spaced from the original, not chained off each other.
/// The selection snapshot is taken up front; afterwards the selection
/// is replaced by the new copies with the last one active. With
/// `count == 0` the store is left untouched.
pub fn replicate_many(
    store: &mut impl SceneStore,
    direction: Vec3,
    count: u32,
) -> Result<Vec<Entity>> {
    let sources = selected_entities(store);
    if sources.is_empty() {
        return Err(StrutError::ContextUnavailable(
            "nothing selected to replicate".into(),
        ));
    }
    if count == 0 {
        return Ok(Vec::new());
    }

    debug!(
        "replicating {} entities {} times along {:?}",
        sources.len(),
        count,
        direction
    );

    let mut produced = Vec::with_capacity(sources.len() * count as usize);
    for i in 1..=count {
        let step = direction * i as f32;
        for source in &sources {
            let copy = match source {
                Entity::Node(n) => {
                    let at = n.position(store)? + step;
                    Entity::Node(node::replicate(store, n, Some(at))?)
                }
                Entity::Frame(f) => Entity::Frame(frame::replicate(store, f, step)?),
            };
            produced.push(copy);
        }
    }

    store.deselect_all();
    for copy in &produced {
        store.set_selected(copy.object(), true)?;
    }
    store.set_active(produced.last().map(Entity::object));

    Ok(produced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strut_model::node;
    use strut_store::MemoryScene;

    #[test]
    fn test_copies_spaced_from_original() {
        let mut scene = MemoryScene::new();
        let source = node::create(&mut scene, Vec3::new(1.0, 0.0, 0.0), 0.1).unwrap();
        source.select(&mut scene).unwrap();

        let copies = replicate_many(&mut scene, Vec3::new(2.0, 0.0, 0.0), 3).unwrap();
        assert_eq!(copies.len(), 3);

        let positions: Vec<f32> = copies
            .iter()
            .map(|e| match e {
                Entity::Node(n) => n.position(&scene).unwrap().x,
                Entity::Frame(_) => panic!("expected nodes"),
            })
            .collect();
        assert_eq!(positions, vec![3.0, 5.0, 7.0]);
    }

    #[test]
    fn test_selection_moves_to_copies() {
        let mut scene = MemoryScene::new();
        let source = node::create(&mut scene, Vec3::ZERO, 0.1).unwrap();
        source.select(&mut scene).unwrap();

        let copies = replicate_many(&mut scene, Vec3::UP, 2).unwrap();

        let selected = scene.selected_objects();
        assert_eq!(selected.len(), 2);
        assert!(!selected.contains(&source.object()));
        assert_eq!(scene.active_object(), Some(copies.last().unwrap().object()));
    }

    #[test]
    fn test_empty_selection_is_an_error() {
        let mut scene = MemoryScene::new();
        node::create(&mut scene, Vec3::ZERO, 0.1).unwrap();
        scene.deselect_all();

        let result = replicate_many(&mut scene, Vec3::UP, 2);
        assert!(matches!(result, Err(StrutError::ContextUnavailable(_))));
    }

    #[test]
    fn test_zero_count_leaves_store_untouched() {
        let mut scene = MemoryScene::new();
        let source = node::create(&mut scene, Vec3::ZERO, 0.1).unwrap();
        source.select(&mut scene).unwrap();

        let copies = replicate_many(&mut scene, Vec3::UP, 0).unwrap();
        assert!(copies.is_empty());
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.selected_objects(), vec![source.object()]);
    }

    #[test]
    fn test_mixed_selection_replicates_both_kinds() {
        let mut scene = MemoryScene::new();
        let n = node::create(&mut scene, Vec3::ZERO, 0.1).unwrap();
        let f = frame::create(
            &mut scene,
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            "TEMP",
            "TEMP",
        )
        .unwrap();
        scene.set_selected(n.object(), true).unwrap();
        scene.set_selected(f.object(), true).unwrap();

        let copies = replicate_many(&mut scene, Vec3::new(0.0, 3.0, 0.0), 1).unwrap();
        assert_eq!(copies.len(), 2);
        assert!(copies.iter().any(|e| matches!(e, Entity::Node(_))));
        assert!(copies.iter().any(|e| matches!(e, Entity::Frame(_))));

        let frame_copy = copies
            .iter()
            .find_map(|e| match e {
                Entity::Frame(f) => Some(f),
                _ => None,
            })
            .unwrap();
        let mid = frame_copy.midpoint(&scene).unwrap();
        assert!((mid - Vec3::new(0.5, 3.0, 0.0)).length() < 1e-5);
    }
}
