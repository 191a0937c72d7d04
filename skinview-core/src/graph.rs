//! Arena-based scene graph
//!
//! The loaded asset is represented as a tree of nodes stored in a flat arena
//! and addressed by copyable [`NodeId`] handles, which avoids ownership
//! cycles between parents and children. The loader collaborator builds the
//! tree once at asset-load time; the core only tags nodes and mutates their
//! material and display-name fields, never their shape.

use std::sync::Arc;

use crate::{
    bounds::{Aabb, Bounded},
    material::Material,
};

/// Handle to a node in a [`SceneGraph`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The arena index behind this handle
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A node in the scene graph
///
/// The display name is mutable and user-facing; the tag, once assigned, is
/// the durable identity key and survives arbitrary renames.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Mutable display name
    pub name: String,
    /// Whether this node carries renderable geometry (vs. a grouping node)
    pub renderable: bool,
    /// Material currently applied, shared with the catalog
    pub material: Option<Arc<Material>>,
    /// World-space extent of this node's own geometry, supplied by the
    /// loader for renderable nodes
    pub bounds: Option<Aabb>,
    tag: Option<String>,
    children: Vec<NodeId>,
}

impl SceneNode {
    /// Create a grouping/transform-only node
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            renderable: false,
            material: None,
            bounds: None,
            tag: None,
            children: Vec::new(),
        }
    }

    /// Create a renderable mesh node with the given geometry extent
    pub fn mesh(name: impl Into<String>, bounds: Aabb) -> Self {
        Self {
            name: name.into(),
            renderable: true,
            material: None,
            bounds: Some(bounds),
            tag: None,
            children: Vec::new(),
        }
    }

    /// The node's semantic tag, if one has been assigned
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Assign the node's semantic tag
    ///
    /// Tagging is expected to happen once per node during initial setup;
    /// when patterns overlap the last assignment wins.
    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = Some(tag.into());
    }

    /// Handles of this node's children
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A tree of scene nodes backed by a flat arena
#[derive(Debug, Clone)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
    root: NodeId,
}

impl SceneGraph {
    /// Create a graph containing only the given root node
    pub fn new(root: SceneNode) -> Self {
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    /// Handle of the root node
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the graph
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Insert `node` as the last child of `parent`, returning its handle
    pub fn add_child(&mut self, parent: NodeId, node: SceneNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Borrow a node
    pub fn node(&self, id: NodeId) -> &SceneNode {
        &self.nodes[id.0]
    }

    /// Mutably borrow a node
    pub fn node_mut(&mut self, id: NodeId) -> &mut SceneNode {
        &mut self.nodes[id.0]
    }

    /// Preorder traversal over the subtree rooted at `root`, including
    /// `root` itself
    ///
    /// Yields handles rather than node references so callers can collect
    /// them and mutate nodes afterwards.
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        Descendants {
            graph: self,
            stack: vec![root],
        }
    }

    /// Bounding box of the subtree rooted at `root`: the union of the
    /// extents of its renderable descendants
    pub fn subtree_bounds(&self, root: NodeId) -> Option<Aabb> {
        let mut bounds: Option<Aabb> = None;
        for id in self.descendants(root) {
            let node = self.node(id);
            if !node.renderable {
                continue;
            }
            if let Some(node_bounds) = node.bounds {
                bounds = Some(match bounds {
                    Some(current) => current.merged(&node_bounds),
                    None => node_bounds,
                });
            }
        }
        bounds
    }
}

impl Bounded for SceneGraph {
    fn bounding_box(&self) -> Option<Aabb> {
        self.subtree_bounds(self.root)
    }
}

/// Iterator over a subtree's node handles in preorder
pub struct Descendants<'a> {
    graph: &'a SceneGraph,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        // Push in reverse so children come out in insertion order.
        let children = &self.graph.node(id).children;
        self.stack.extend(children.iter().rev());
        Some(id)
    }
}
