//! Tag registry and material binder

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};

use skinview_core::{Material, NodeId, SceneGraph};

/// Durable mapping from semantic tags to scene nodes
///
/// Tagging walks the scene graph once and records, per tag, the handles of
/// the matched nodes; binding then resolves nodes through that index
/// instead of re-matching display names, which may have changed since. Each
/// bind still verifies the node's stored tag, so index entries left stale
/// by a later overlapping tagging pass (last write wins per node) are
/// skipped rather than rebound.
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    index: HashMap<String, Vec<NodeId>>,
}

impl TagRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag every renderable node in the subtree under `root` whose display
    /// name contains `pattern` as a substring
    ///
    /// Returns the number of nodes tagged. Zero is a soft outcome — the
    /// expected asset structure was not found — and is left to the caller
    /// to judge. Re-running with the same pattern over the same tree tags
    /// the identical node set; nodes already carrying `tag` are
    /// re-confirmed even if a bind has since renamed them away from the
    /// pattern.
    pub fn tag_matching(
        &mut self,
        graph: &mut SceneGraph,
        root: NodeId,
        pattern: &str,
        tag: &str,
    ) -> usize {
        let ids: Vec<NodeId> = graph.descendants(root).collect();
        let mut tagged = Vec::new();
        for id in ids {
            let node = graph.node_mut(id);
            let carries_tag = node.tag() == Some(tag);
            if carries_tag || (node.renderable && node.name.contains(pattern)) {
                node.set_tag(tag);
                tagged.push(id);
            }
        }

        let count = tagged.len();
        if count == 0 {
            warn!("pattern {:?} matched no renderable nodes", pattern);
        } else {
            debug!("tagged {} node(s) as {:?} for pattern {:?}", count, tag, pattern);
        }
        self.index.insert(tag.to_string(), tagged);
        count
    }

    /// Swap the material reference (and optionally the display name) of
    /// every node carrying `tag`
    ///
    /// Never creates, destroys or reparents nodes. Returns the number of
    /// nodes updated; an unknown tag yields 0, which is a valid transient
    /// state rather than an error. Repeating a call with identical
    /// arguments leaves the graph unchanged.
    pub fn bind_material(
        &self,
        graph: &mut SceneGraph,
        tag: &str,
        material: &Arc<Material>,
        display_name: Option<&str>,
    ) -> usize {
        let Some(ids) = self.index.get(tag) else {
            debug!("bind requested for unknown tag {:?}", tag);
            return 0;
        };

        let mut updated = 0;
        for &id in ids {
            let node = graph.node_mut(id);
            if node.tag() != Some(tag) {
                continue;
            }
            node.material = Some(Arc::clone(material));
            if let Some(name) = display_name {
                node.name = name.to_string();
            }
            updated += 1;
        }
        debug!("bound {:?} to {} node(s) tagged {:?}", material.name, updated, tag);
        updated
    }

    /// Handles of the nodes recorded for `tag`, in traversal order
    pub fn nodes(&self, tag: &str) -> &[NodeId] {
        self.index.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Tags known to the registry
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use skinview_core::{Aabb, SceneNode};

    fn mesh(name: &str) -> SceneNode {
        SceneNode::mesh(name, Aabb::from_point(Point3::origin()))
    }

    fn build_book() -> SceneGraph {
        let mut graph = SceneGraph::new(SceneNode::group("Scene"));
        let root = graph.root();
        graph.add_child(root, mesh("Body"));
        graph.add_child(root, mesh("BookCover_mesh"));
        graph.add_child(root, mesh("Spine"));
        graph
    }

    #[test]
    fn test_tag_matching_tags_only_matching_meshes() {
        let mut graph = build_book();
        let mut registry = TagRegistry::new();
        let root = graph.root();

        let count = registry.tag_matching(&mut graph, root, "BookCover", "cover");
        assert_eq!(count, 1);

        let tagged: Vec<_> = graph
            .descendants(root)
            .filter(|&id| graph.node(id).tag().is_some())
            .map(|id| graph.node(id).name.clone())
            .collect();
        assert_eq!(tagged, vec!["BookCover_mesh"]);
    }

    #[test]
    fn test_tag_matching_skips_grouping_nodes() {
        let mut graph = SceneGraph::new(SceneNode::group("BookCover_group"));
        let root = graph.root();
        graph.add_child(root, mesh("BookCover_mesh"));

        let mut registry = TagRegistry::new();
        assert_eq!(registry.tag_matching(&mut graph, root, "BookCover", "cover"), 1);
        assert_eq!(graph.node(root).tag(), None);
    }

    #[test]
    fn test_tag_matching_is_idempotent_in_outcome() {
        let mut graph = build_book();
        let mut registry = TagRegistry::new();
        let root = graph.root();

        let first = registry.tag_matching(&mut graph, root, "BookCover", "cover");
        let nodes_after_first = registry.nodes("cover").to_vec();
        let second = registry.tag_matching(&mut graph, root, "BookCover", "cover");

        assert_eq!(first, second);
        assert_eq!(registry.nodes("cover"), nodes_after_first.as_slice());
    }

    #[test]
    fn test_zero_matches_is_soft() {
        let mut graph = build_book();
        let mut registry = TagRegistry::new();
        let root = graph.root();
        assert_eq!(registry.tag_matching(&mut graph, root, "Handle", "handle"), 0);
        assert_eq!(registry.bind_material(&mut graph, "handle", &Material::new("m").shared(), None), 0);
    }

    #[test]
    fn test_bind_material_swaps_material_and_name() {
        let mut graph = build_book();
        let mut registry = TagRegistry::new();
        let root = graph.root();
        registry.tag_matching(&mut graph, root, "BookCover", "cover");

        let premium = Material::textured("premium", "PremiumCover.jpg").shared();
        let updated = registry.bind_material(&mut graph, "cover", &premium, Some("premium"));
        assert_eq!(updated, 1);

        let cover = registry.nodes("cover")[0];
        assert!(Arc::ptr_eq(graph.node(cover).material.as_ref().unwrap(), &premium));
        assert_eq!(graph.node(cover).name, "premium");

        // The other meshes are untouched.
        for id in graph.descendants(root) {
            if id != cover {
                assert!(graph.node(id).material.is_none());
            }
        }
    }

    #[test]
    fn test_bind_material_is_idempotent() {
        let mut graph = build_book();
        let mut registry = TagRegistry::new();
        let root = graph.root();
        registry.tag_matching(&mut graph, root, "BookCover", "cover");

        let premium = Material::new("premium").shared();
        registry.bind_material(&mut graph, "cover", &premium, Some("premium"));
        let cover = registry.nodes("cover")[0];
        let material_before = graph.node(cover).material.clone().unwrap();
        let name_before = graph.node(cover).name.clone();

        let updated = registry.bind_material(&mut graph, "cover", &premium, Some("premium"));
        assert_eq!(updated, 1);
        assert!(Arc::ptr_eq(graph.node(cover).material.as_ref().unwrap(), &material_before));
        assert_eq!(graph.node(cover).name, name_before);
    }

    #[test]
    fn test_retag_after_bind_rename_keeps_index() {
        let mut graph = build_book();
        let mut registry = TagRegistry::new();
        let root = graph.root();
        registry.tag_matching(&mut graph, root, "BookCover", "cover");

        // Binding renames the node away from the pattern.
        let default = Material::new("default").shared();
        registry.bind_material(&mut graph, "cover", &default, Some("default"));

        // A second tagging pass must re-confirm the carrier, not drop it.
        assert_eq!(registry.tag_matching(&mut graph, root, "BookCover", "cover"), 1);
        let premium = Material::new("premium").shared();
        assert_eq!(registry.bind_material(&mut graph, "cover", &premium, Some("premium")), 1);
    }

    #[test]
    fn test_bind_survives_display_rename() {
        let mut graph = build_book();
        let mut registry = TagRegistry::new();
        let root = graph.root();
        registry.tag_matching(&mut graph, root, "BookCover", "cover");

        // External rename of the display name between binds.
        let cover = registry.nodes("cover")[0];
        graph.node_mut(cover).name = "something else entirely".to_string();

        let gold = Material::new("gold").shared();
        assert_eq!(registry.bind_material(&mut graph, "cover", &gold, Some("gold")), 1);
        assert_eq!(graph.node(cover).name, "gold");
    }

    #[test]
    fn test_rebind_replaces_previous_material() {
        let mut graph = build_book();
        let mut registry = TagRegistry::new();
        let root = graph.root();
        registry.tag_matching(&mut graph, root, "BookCover", "cover");

        let default = Material::new("default").shared();
        let premium = Material::new("premium").shared();
        registry.bind_material(&mut graph, "cover", &default, Some("default"));
        registry.bind_material(&mut graph, "cover", &premium, Some("premium"));

        let cover = registry.nodes("cover")[0];
        assert!(Arc::ptr_eq(graph.node(cover).material.as_ref().unwrap(), &premium));
    }

    #[test]
    fn test_overlapping_retag_leaves_stale_entries_inert() {
        let mut graph = build_book();
        let mut registry = TagRegistry::new();
        let root = graph.root();
        registry.tag_matching(&mut graph, root, "BookCover", "cover");
        // Overlapping pattern; last write wins on the node itself.
        registry.tag_matching(&mut graph, root, "Cover_mesh", "jacket");

        let material = Material::new("m").shared();
        assert_eq!(registry.bind_material(&mut graph, "cover", &material, None), 0);
        assert_eq!(registry.bind_material(&mut graph, "jacket", &material, None), 1);
    }
}
