//! Scene objects with dynamic attribute bags

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strut_core::{Transform, Vec3};

/// What a scene object is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// A point marker with no geometry of its own
    Empty,
    /// A vertex/edge mesh
    Mesh,
}

/// Vertex/edge geometry stored in object-local space
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshData {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<[u32; 2]>,
}

impl MeshData {
    /// A single line segment between two points
    pub fn line(start: Vec3, end: Vec3) -> Self {
        Self {
            vertices: vec![start, end],
            edges: vec![[0, 1]],
        }
    }

    /// Arithmetic mean of all vertices, or zero for an empty mesh
    pub fn centroid(&self) -> Vec3 {
        if self.vertices.is_empty() {
            return Vec3::ZERO;
        }
        let mut sum = Vec3::ZERO;
        for v in &self.vertices {
            sum += *v;
        }
        sum / self.vertices.len() as f32
    }
}

/// Named attribute bags stored as TOML values
///
/// This keeps the registry's tag fields out of the store's type system:
/// the store only sees opaque tables, and typed views are resolved per
/// lookup by the registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttrBags {
    #[serde(flatten)]
    data: HashMap<String, toml::Value>,
}

impl AttrBags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a bag by name
    pub fn get(&self, bag: &str) -> Option<&toml::Value> {
        self.data.get(bag)
    }

    /// Set a bag, replacing any previous value
    pub fn set(&mut self, bag: impl Into<String>, value: toml::Value) {
        self.data.insert(bag.into(), value);
    }

    /// Remove a bag
    pub fn remove(&mut self, bag: &str) -> Option<toml::Value> {
        self.data.remove(bag)
    }

    /// Check if a bag exists
    pub fn has(&self, bag: &str) -> bool {
        self.data.contains_key(bag)
    }

    /// Get a field value from a bag
    pub fn get_field(&self, bag: &str, field: &str) -> Option<&toml::Value> {
        self.data.get(bag).and_then(|v| v.get(field))
    }

    /// Set a field value in a bag
    pub fn set_field(&mut self, bag: &str, field: &str, value: toml::Value) {
        let entry = self
            .data
            .entry(bag.to_string())
            .or_insert_with(|| toml::Value::Table(toml::map::Map::new()));

        if let Some(table) = entry.as_table_mut() {
            table.insert(field.to_string(), value);
        }
    }
}

/// An object owned by the scene store.
///
/// Domain meaning (node, frame, or nothing) lives entirely in the
/// attribute bags; the store itself is domain-blind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObject {
    /// Display name. Namespace ID allocation scans these.
    pub name: String,
    pub kind: ObjectKind,
    pub transform: Transform,
    /// Geometry for `Mesh` objects; `None` for empties
    pub mesh: Option<MeshData>,
    /// Viewport marker size for `Empty` objects
    pub display_size: f32,
    pub attrs: AttrBags,
    pub visible: bool,
}

impl SceneObject {
    /// A point marker at the given position
    pub fn empty(name: impl Into<String>, position: Vec3, display_size: f32) -> Self {
        Self {
            name: name.into(),
            kind: ObjectKind::Empty,
            transform: Transform::from_position(position),
            mesh: None,
            display_size,
            attrs: AttrBags::new(),
            visible: true,
        }
    }

    /// A mesh object with local-space geometry
    pub fn mesh(name: impl Into<String>, mesh: MeshData) -> Self {
        Self {
            name: name.into(),
            kind: ObjectKind::Mesh,
            transform: Transform::IDENTITY,
            mesh: Some(mesh),
            display_size: 0.5,
            attrs: AttrBags::new(),
            visible: true,
        }
    }

    /// World-space position of all mesh vertices
    pub fn world_vertices(&self) -> Vec<Vec3> {
        match &self.mesh {
            Some(mesh) => mesh
                .vertices
                .iter()
                .map(|v| self.transform.transform_point(*v))
                .collect(),
            None => Vec::new(),
        }
    }
}
