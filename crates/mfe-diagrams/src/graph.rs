//! Diagram description model and builder.
//!
//! A [`DiagramSpec`] is an in-memory description of one diagram: labeled,
//! iconified nodes grouped into (possibly nested) clusters and connected by
//! directed edges. Construction goes through explicit handles rather than
//! lexical scoping: [`cluster`](DiagramSpec::cluster) and
//! [`node`](DiagramSpec::node) return [`ClusterRef`] and [`NodeRef`] values
//! that later calls refer back to. Clusters are stored flat with parent
//! references, so there is no "open" cluster state that an early return
//! could leave dangling.

use crate::icon::Icon;

/// Layout direction of a diagram, lowered to the Graphviz `rankdir`
/// attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Vertical flow (`rankdir=TB`).
    TopToBottom,
    /// Horizontal flow (`rankdir=LR`).
    LeftToRight,
}

impl Direction {
    /// Returns the Graphviz `rankdir` value for this direction.
    pub fn rankdir(self) -> &'static str {
        match self {
            Direction::TopToBottom => "TB",
            Direction::LeftToRight => "LR",
        }
    }
}

/// Handle to a node declared in a [`DiagramSpec`].
///
/// Only valid for the spec that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef(pub(crate) usize);

/// Handle to a cluster declared in a [`DiagramSpec`].
///
/// Only valid for the spec that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClusterRef(pub(crate) usize);

/// A declared node: display label, icon category, and owning cluster.
#[derive(Debug)]
pub(crate) struct NodeDecl {
    pub(crate) label: String,
    pub(crate) icon: Icon,
    pub(crate) parent: Option<ClusterRef>,
}

/// A declared cluster: display label and owning parent cluster.
#[derive(Debug)]
pub(crate) struct ClusterDecl {
    pub(crate) label: String,
    pub(crate) parent: Option<ClusterRef>,
}

/// A directed edge between two declared nodes.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EdgeDecl {
    pub(crate) source: NodeRef,
    pub(crate) target: NodeRef,
}

/// Description of a single diagram: title, output file stem, layout
/// direction, and the declared clusters, nodes, and edges.
///
/// Declaration order is preserved and determines rendering order, which
/// keeps the generated DOT (and therefore the rendered image) deterministic
/// across runs.
#[derive(Debug)]
pub struct DiagramSpec {
    title: String,
    slug: String,
    direction: Direction,
    nodes: Vec<NodeDecl>,
    clusters: Vec<ClusterDecl>,
    edges: Vec<EdgeDecl>,
}

impl DiagramSpec {
    /// Creates an empty diagram description.
    ///
    /// # Arguments
    ///
    /// * `title` - Human-readable title rendered at the top of the image.
    /// * `slug` - File stem for the output image (extension is appended by
    ///   the rendering backend format).
    /// * `direction` - Overall layout direction.
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        direction: Direction,
    ) -> Self {
        DiagramSpec {
            title: title.into(),
            slug: slug.into(),
            direction,
            nodes: Vec::new(),
            clusters: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Declares a top-level cluster and returns its handle.
    pub fn cluster(&mut self, label: impl Into<String>) -> ClusterRef {
        self.push_cluster(label.into(), None)
    }

    /// Declares a cluster nested inside `parent` and returns its handle.
    pub fn cluster_in(&mut self, label: impl Into<String>, parent: ClusterRef) -> ClusterRef {
        self.push_cluster(label.into(), Some(parent))
    }

    /// Declares a node outside any cluster and returns its handle.
    ///
    /// Each call declares a distinct node; reusing a label does not merge
    /// declarations.
    pub fn node(&mut self, icon: Icon, label: impl Into<String>) -> NodeRef {
        self.push_node(icon, label.into(), None)
    }

    /// Declares a node inside `cluster` and returns its handle.
    pub fn node_in(
        &mut self,
        icon: Icon,
        label: impl Into<String>,
        cluster: ClusterRef,
    ) -> NodeRef {
        self.push_node(icon, label.into(), Some(cluster))
    }

    /// Declares a directed edge from `source` to `target`.
    pub fn edge(&mut self, source: NodeRef, target: NodeRef) {
        debug_assert!(source.0 < self.nodes.len() && target.0 < self.nodes.len());
        self.edges.push(EdgeDecl { source, target });
    }

    /// Declares one edge from `source` to each node in `targets`.
    pub fn edges_to_all(&mut self, source: NodeRef, targets: &[NodeRef]) {
        for &target in targets {
            self.edge(source, target);
        }
    }

    /// Returns the diagram title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the output file stem.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Returns the layout direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of declared nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of declared edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of declared clusters, at any nesting depth.
    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    pub(crate) fn nodes(&self) -> &[NodeDecl] {
        &self.nodes
    }

    pub(crate) fn clusters(&self) -> &[ClusterDecl] {
        &self.clusters
    }

    pub(crate) fn edges(&self) -> &[EdgeDecl] {
        &self.edges
    }

    fn push_cluster(&mut self, label: String, parent: Option<ClusterRef>) -> ClusterRef {
        if let Some(parent) = parent {
            debug_assert!(parent.0 < self.clusters.len());
        }
        let reference = ClusterRef(self.clusters.len());
        self.clusters.push(ClusterDecl { label, parent });
        reference
    }

    fn push_node(&mut self, icon: Icon, label: String, parent: Option<ClusterRef>) -> NodeRef {
        if let Some(parent) = parent {
            debug_assert!(parent.0 < self.clusters.len());
        }
        let reference = NodeRef(self.nodes.len());
        self.nodes.push(NodeDecl {
            label,
            icon,
            parent,
        });
        reference
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_diagram_has_no_elements() {
        let spec = DiagramSpec::new("Empty", "empty", Direction::TopToBottom);
        assert_eq!(spec.node_count(), 0);
        assert_eq!(spec.edge_count(), 0);
        assert_eq!(spec.cluster_count(), 0);
        assert_eq!(spec.title(), "Empty");
        assert_eq!(spec.slug(), "empty");
    }

    #[test]
    fn nodes_with_same_label_are_distinct() {
        let mut spec = DiagramSpec::new("Dup", "dup", Direction::TopToBottom);
        let a = spec.node(Icon::S3, "bucket/");
        let b = spec.node(Icon::S3, "bucket/");
        assert_ne!(a, b);
        assert_eq!(spec.node_count(), 2);
    }

    #[test]
    fn clusters_nest_through_parent_handles() {
        let mut spec = DiagramSpec::new("Nest", "nest", Direction::LeftToRight);
        let outer = spec.cluster("Outer");
        let inner = spec.cluster_in("Inner", outer);
        let deepest = spec.cluster_in("Deepest", inner);

        assert_eq!(spec.cluster_count(), 3);
        assert_eq!(spec.clusters()[deepest.0].parent, Some(inner));
        assert_eq!(spec.clusters()[inner.0].parent, Some(outer));
        assert_eq!(spec.clusters()[outer.0].parent, None);
    }

    #[test]
    fn fan_out_declares_one_edge_per_target() {
        let mut spec = DiagramSpec::new("Fan", "fan", Direction::TopToBottom);
        let hub = spec.node(Icon::React, "Hub");
        let spokes: Vec<_> = (0..4)
            .map(|i| spec.node(Icon::React, format!("Spoke {i}")))
            .collect();

        spec.edges_to_all(hub, &spokes);

        assert_eq!(spec.edge_count(), 4);
        for (edge, spoke) in spec.edges().iter().zip(&spokes) {
            assert_eq!(edge.source, hub);
            assert_eq!(edge.target, *spoke);
        }
    }
}
