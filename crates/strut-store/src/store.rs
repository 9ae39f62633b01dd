//! The scene-store port and its in-memory implementation

use crate::object::SceneObject;
use std::collections::{HashMap, HashSet};
use strut_core::{ObjectId, Result, StrutError, Vec3};

/// What a scene store must provide to the registry and tools.
///
/// The registry never owns entity data; it is a typed facade over
/// whichever store is injected. Iteration order must be stable across
/// calls as long as the object set is unchanged — snap tie-breaking
/// depends on it.
pub trait SceneStore {
    /// Add an object, returning its handle
    fn add_object(&mut self, object: SceneObject) -> ObjectId;

    /// Remove an object unconditionally. No cascade: references held in
    /// other objects' attribute bags are left dangling.
    fn remove_object(&mut self, id: ObjectId) -> Result<()>;

    fn get(&self, id: ObjectId) -> Option<&SceneObject>;
    fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject>;
    fn contains(&self, id: ObjectId) -> bool;

    /// All object handles in insertion order
    fn object_ids(&self) -> Vec<ObjectId>;

    /// Visible object handles in insertion order
    fn visible_objects(&self) -> Vec<ObjectId>;

    /// Selected object handles in insertion order
    fn selected_objects(&self) -> Vec<ObjectId>;

    /// Duplicate an object and its geometry, returning the copy's handle.
    /// The copy keeps the source's name; callers rename it afterwards.
    fn duplicate_object(&mut self, id: ObjectId) -> Result<ObjectId>;

    fn set_selected(&mut self, id: ObjectId, selected: bool) -> Result<()>;
    fn deselect_all(&mut self);
    fn set_active(&mut self, id: Option<ObjectId>);
    fn active_object(&self) -> Option<ObjectId>;

    /// The reference cursor: free placement unprojects the pointer onto
    /// the view-aligned plane through this point.
    fn cursor(&self) -> Vec3;
    fn set_cursor(&mut self, position: Vec3);
}

/// In-memory scene store with stable insertion order
#[derive(Default)]
pub struct MemoryScene {
    objects: HashMap<ObjectId, SceneObject>,
    /// Insertion order of live objects
    order: Vec<ObjectId>,
    selected: HashSet<ObjectId>,
    active: Option<ObjectId>,
    cursor: Vec3,
    next_id: u64,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn alloc_id(&mut self) -> ObjectId {
        self.next_id += 1;
        ObjectId::from_raw(self.next_id)
    }
}

impl SceneStore for MemoryScene {
    fn add_object(&mut self, object: SceneObject) -> ObjectId {
        let id = self.alloc_id();
        self.objects.insert(id, object);
        self.order.push(id);
        id
    }

    fn remove_object(&mut self, id: ObjectId) -> Result<()> {
        if self.objects.remove(&id).is_none() {
            return Err(StrutError::ObjectNotFound(id.to_string()));
        }
        self.order.retain(|o| *o != id);
        self.selected.remove(&id);
        if self.active == Some(id) {
            self.active = None;
        }
        Ok(())
    }

    fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(&id)
    }

    fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    fn object_ids(&self) -> Vec<ObjectId> {
        self.order.clone()
    }

    fn visible_objects(&self) -> Vec<ObjectId> {
        self.order
            .iter()
            .filter(|id| self.objects.get(id).is_some_and(|o| o.visible))
            .copied()
            .collect()
    }

    fn selected_objects(&self) -> Vec<ObjectId> {
        self.order
            .iter()
            .filter(|id| self.selected.contains(id))
            .copied()
            .collect()
    }

    fn duplicate_object(&mut self, id: ObjectId) -> Result<ObjectId> {
        let copy = self
            .objects
            .get(&id)
            .cloned()
            .ok_or_else(|| StrutError::ObjectNotFound(id.to_string()))?;
        Ok(self.add_object(copy))
    }

    fn set_selected(&mut self, id: ObjectId, selected: bool) -> Result<()> {
        if !self.objects.contains_key(&id) {
            return Err(StrutError::ObjectNotFound(id.to_string()));
        }
        if selected {
            self.selected.insert(id);
        } else {
            self.selected.remove(&id);
        }
        Ok(())
    }

    fn deselect_all(&mut self) {
        self.selected.clear();
    }

    fn set_active(&mut self, id: Option<ObjectId>) {
        self.active = id;
    }

    fn active_object(&self) -> Option<ObjectId> {
        self.active
    }

    fn cursor(&self) -> Vec3 {
        self.cursor
    }

    fn set_cursor(&mut self, position: Vec3) {
        self.cursor = position;
    }
}
