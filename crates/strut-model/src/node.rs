//! Node CRUD over the scene store

use crate::entity::Node;
use crate::ident::{next_id, NODE_PREFIX};
use crate::tag::{NodeTag, NODE_KIND};
use log::debug;
use strut_core::{ObjectId, Result, StrutError, Vec3};
use strut_store::{SceneObject, SceneStore};

/// Default viewport marker size for nodes
pub const DEFAULT_DISPLAY_SIZE: f32 = 0.5;

/// Create a node at a world position
pub fn create(store: &mut impl SceneStore, position: Vec3, display_size: f32) -> Result<Node> {
    let (node_id, name) = next_id(store, NODE_PREFIX);

    let mut obj = SceneObject::empty(name.clone(), position, display_size);
    let tag = NodeTag {
        node_id,
        node_type: NODE_KIND.into(),
        label: name.clone(),
    };
    tag.write(&mut obj)?;

    let object = store.add_object(obj);
    debug!("created node {name} at {position:?}");

    Node::from_object(object, store.get(object).expect("object just added"))
}

/// Translate a node by a direction vector
pub fn move_by(store: &mut impl SceneStore, node: &Node, direction: Vec3) -> Result<()> {
    let obj = store
        .get_mut(node.object())
        .ok_or_else(|| StrutError::ObjectNotFound(node.object().to_string()))?;
    obj.transform.position += direction;
    Ok(())
}

/// Set a node's world position outright (drag placement)
pub fn set_location(store: &mut impl SceneStore, node: &Node, location: Vec3) -> Result<()> {
    let obj = store
        .get_mut(node.object())
        .ok_or_else(|| StrutError::ObjectNotFound(node.object().to_string()))?;
    obj.transform.position = location;
    Ok(())
}

/// Delete a node unconditionally. Frames referencing it keep their
/// now-dangling reference.
pub fn delete(store: &mut impl SceneStore, node: &Node) -> Result<()> {
    debug!("deleting node {}", node.label());
    store.remove_object(node.object())
}

/// Duplicate a node, allocating a fresh id in the node namespace.
/// `location` defaults to the source position.
pub fn replicate(
    store: &mut impl SceneStore,
    node: &Node,
    location: Option<Vec3>,
) -> Result<Node> {
    let src = store
        .get(node.object())
        .ok_or_else(|| StrutError::ObjectNotFound(node.object().to_string()))?;
    let display_size = src.display_size;
    let location = location.unwrap_or(src.transform.position);

    create(store, location, display_size)
}

/// Look a node up by its namespace id
pub fn get_by_id(store: &impl SceneStore, node_id: &str) -> Option<Node> {
    all(store).into_iter().find(|n| n.id() == node_id)
}

/// View an object as a node, or `None` if it isn't one.
/// Tag mismatch is recovered here, never propagated.
pub fn get_by_object(store: &impl SceneStore, object: ObjectId) -> Option<Node> {
    let obj = store.get(object)?;
    Node::from_object(object, obj).ok()
}

/// All nodes, in store order
pub fn all(store: &impl SceneStore) -> Vec<Node> {
    store
        .object_ids()
        .into_iter()
        .filter_map(|id| get_by_object(store, id))
        .collect()
}

/// Selected nodes, in store order
pub fn selected(store: &impl SceneStore) -> Vec<Node> {
    store
        .selected_objects()
        .into_iter()
        .filter_map(|id| get_by_object(store, id))
        .collect()
}

pub fn exists(store: &impl SceneStore, node_id: &str) -> bool {
    get_by_id(store, node_id).is_some()
}
