//! Tag bags marking store objects as domain entities
//!
//! A node object carries a `node` attribute bag, a frame object a `frame`
//! bag. The kind field inside the bag is enforced on every read: a bag
//! whose kind differs from the expected constant never produces a view.

use serde::{Deserialize, Serialize};
use strut_core::{Result, StrutError};
use strut_store::SceneObject;

/// Kind constant stored in every node tag
pub const NODE_KIND: &str = "Node";
/// Kind constant stored in every frame tag
pub const FRAME_KIND: &str = "Frame";

/// Attribute bag name for node tags
pub const NODE_BAG: &str = "node";
/// Attribute bag name for frame tags
pub const FRAME_BAG: &str = "frame";

/// Tag fields of a node object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeTag {
    pub node_id: String,
    pub node_type: String,
    pub label: String,
}

/// Tag fields of a frame object.
///
/// `start_node`/`end_node` are weak references by node id: nothing keeps
/// them in sync with the referenced node, and deleting the node leaves
/// them dangling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameTag {
    pub frame_id: String,
    pub frame_type: String,
    pub start_node: String,
    pub end_node: String,
    pub label: String,
}

impl NodeTag {
    /// Read and validate the node tag of an object
    pub fn read(obj: &SceneObject) -> Result<Self> {
        let value = obj
            .attrs
            .get(NODE_BAG)
            .ok_or_else(|| StrutError::TypeMismatch(format!("'{}' is not a node", obj.name)))?;

        let tag: NodeTag = value
            .clone()
            .try_into()
            .map_err(|e| StrutError::TypeMismatch(format!("bad node tag on '{}': {e}", obj.name)))?;

        if tag.node_type != NODE_KIND {
            return Err(StrutError::TypeMismatch(format!(
                "'{}' has kind '{}', expected '{NODE_KIND}'",
                obj.name, tag.node_type
            )));
        }

        Ok(tag)
    }

    /// Write the tag onto an object
    pub fn write(&self, obj: &mut SceneObject) -> Result<()> {
        obj.attrs.set(NODE_BAG, toml::Value::try_from(self)?);
        Ok(())
    }
}

impl FrameTag {
    /// Read and validate the frame tag of an object
    pub fn read(obj: &SceneObject) -> Result<Self> {
        let value = obj
            .attrs
            .get(FRAME_BAG)
            .ok_or_else(|| StrutError::TypeMismatch(format!("'{}' is not a frame", obj.name)))?;

        let tag: FrameTag = value
            .clone()
            .try_into()
            .map_err(|e| StrutError::TypeMismatch(format!("bad frame tag on '{}': {e}", obj.name)))?;

        if tag.frame_type != FRAME_KIND {
            return Err(StrutError::TypeMismatch(format!(
                "'{}' has kind '{}', expected '{FRAME_KIND}'",
                obj.name, tag.frame_type
            )));
        }

        Ok(tag)
    }

    /// Write the tag onto an object
    pub fn write(&self, obj: &mut SceneObject) -> Result<()> {
        obj.attrs.set(FRAME_BAG, toml::Value::try_from(self)?);
        Ok(())
    }
}
