//! Bulk edits on the current selection

use log::debug;
use strut_core::{Result, StrutError, Vec3};
use strut_model::{frame, node, selected_entities, Entity};
use strut_store::SceneStore;

/// Translate every selected entity by `direction`. Returns how many
/// entities moved.
pub fn move_selected(store: &mut impl SceneStore, direction: Vec3) -> Result<usize> {
    let targets = selected_entities(store);
    if targets.is_empty() {
        return Err(StrutError::ContextUnavailable(
            "nothing selected to move".into(),
        ));
    }

    for target in &targets {
        match target {
            Entity::Node(n) => node::move_by(store, n, direction)?,
            Entity::Frame(f) => frame::move_by(store, f, direction)?,
        }
    }
    Ok(targets.len())
}

/// Delete every selected entity. The snapshot is taken before any
/// removal so partial failures cannot skip survivors.
pub fn delete_selected(store: &mut impl SceneStore) -> Result<usize> {
    let targets = selected_entities(store);
    if targets.is_empty() {
        return Err(StrutError::ContextUnavailable(
            "nothing selected to delete".into(),
        ));
    }

    debug!("deleting {} selected entities", targets.len());
    for target in &targets {
        match target {
            Entity::Node(n) => node::delete(store, n)?,
            Entity::Frame(f) => frame::delete(store, f)?,
        }
    }
    store.set_active(None);
    Ok(targets.len())
}

/// Recenter every selected mesh object so its origin sits at the
/// geometry centroid, without moving the geometry in world space.
/// Returns how many objects were recentered.
pub fn set_origin_to_geometry(store: &mut impl SceneStore) -> Result<usize> {
    let selected = store.selected_objects();
    if selected.is_empty() {
        return Err(StrutError::ContextUnavailable(
            "nothing selected to recenter".into(),
        ));
    }

    let mut recentered = 0;
    for id in selected {
        let Some(obj) = store.get_mut(id) else { continue };
        if obj.mesh.is_some() {
            frame::center_geometry(obj);
            recentered += 1;
        }
    }
    Ok(recentered)
}
