//! Typed entity views over store objects
//!
//! A view is a handle plus its validated tag, resolved once per lookup.
//! Views never own geometry; reads and writes go back through the store.

use crate::tag::{FrameTag, NodeTag};
use strut_core::{ObjectId, Result, StrutError, Vec3};
use strut_store::{SceneObject, SceneStore};

/// A point entity
#[derive(Debug, Clone)]
pub struct Node {
    object: ObjectId,
    tag: NodeTag,
}

/// A line entity connecting two weakly referenced nodes
#[derive(Debug, Clone)]
pub struct Frame {
    object: ObjectId,
    tag: FrameTag,
}

/// Domain classification of a store object, decided once per lookup
#[derive(Debug, Clone)]
pub enum Entity {
    Node(Node),
    Frame(Frame),
}

impl Node {
    /// Build a view, failing with `TypeMismatch` unless the object
    /// carries a valid node tag.
    pub fn from_object(object: ObjectId, obj: &SceneObject) -> Result<Self> {
        let tag = NodeTag::read(obj)?;
        Ok(Self { object, tag })
    }

    pub fn object(&self) -> ObjectId {
        self.object
    }

    pub fn id(&self) -> &str {
        &self.tag.node_id
    }

    pub fn kind(&self) -> &str {
        &self.tag.node_type
    }

    pub fn label(&self) -> &str {
        &self.tag.label
    }

    /// World position of the node
    pub fn position(&self, store: &impl SceneStore) -> Result<Vec3> {
        let obj = store
            .get(self.object)
            .ok_or_else(|| StrutError::ObjectNotFound(self.object.to_string()))?;
        Ok(obj.transform.position)
    }

    /// Make this node the sole selection and the active object
    pub fn select(&self, store: &mut impl SceneStore) -> Result<()> {
        store.deselect_all();
        store.set_selected(self.object, true)?;
        store.set_active(Some(self.object));
        Ok(())
    }
}

impl Frame {
    /// Build a view, failing with `TypeMismatch` unless the object
    /// carries a valid frame tag.
    pub fn from_object(object: ObjectId, obj: &SceneObject) -> Result<Self> {
        let tag = FrameTag::read(obj)?;
        Ok(Self { object, tag })
    }

    pub fn object(&self) -> ObjectId {
        self.object
    }

    pub fn id(&self) -> &str {
        &self.tag.frame_id
    }

    pub fn kind(&self) -> &str {
        &self.tag.frame_type
    }

    pub fn label(&self) -> &str {
        &self.tag.label
    }

    pub fn start_ref(&self) -> &str {
        &self.tag.start_node
    }

    pub fn end_ref(&self) -> &str {
        &self.tag.end_node
    }

    /// World-space endpoints (the two stored vertices)
    pub fn endpoints(&self, store: &impl SceneStore) -> Result<[Vec3; 2]> {
        let obj = store
            .get(self.object)
            .ok_or_else(|| StrutError::ObjectNotFound(self.object.to_string()))?;

        let mesh = obj
            .mesh
            .as_ref()
            .filter(|m| m.vertices.len() >= 2)
            .ok_or_else(|| {
                StrutError::GeometryError(format!("frame '{}' has no line geometry", obj.name))
            })?;

        Ok([
            obj.transform.transform_point(mesh.vertices[0]),
            obj.transform.transform_point(mesh.vertices[1]),
        ])
    }

    /// World-space midpoint of the two endpoints
    pub fn midpoint(&self, store: &impl SceneStore) -> Result<Vec3> {
        let [a, b] = self.endpoints(store)?;
        Ok((a + b) * 0.5)
    }

    /// Make this frame the sole selection and the active object
    pub fn select(&self, store: &mut impl SceneStore) -> Result<()> {
        store.deselect_all();
        store.set_selected(self.object, true)?;
        store.set_active(Some(self.object));
        Ok(())
    }
}

impl Entity {
    /// Classify a store object. Plain objects resolve to `None`.
    pub fn resolve(object: ObjectId, obj: &SceneObject) -> Option<Self> {
        if let Ok(node) = Node::from_object(object, obj) {
            return Some(Entity::Node(node));
        }
        if let Ok(frame) = Frame::from_object(object, obj) {
            return Some(Entity::Frame(frame));
        }
        None
    }

    pub fn object(&self) -> ObjectId {
        match self {
            Entity::Node(n) => n.object(),
            Entity::Frame(f) => f.object(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Entity::Node(n) => n.id(),
            Entity::Frame(f) => f.id(),
        }
    }
}

/// Resolve every selected object that is a domain entity, in store order
pub fn selected_entities(store: &impl SceneStore) -> Vec<Entity> {
    store
        .selected_objects()
        .into_iter()
        .filter_map(|id| store.get(id).and_then(|obj| Entity::resolve(id, obj)))
        .collect()
}
