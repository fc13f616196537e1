//! DOT lowering and Graphviz rendering.
//!
//! [`DotExporter`] converts a [`DiagramSpec`] into a [`dot_structures::Graph`]
//! and hands it to the Graphviz `dot` executable through [`graphviz_rust`].
//! Clusters become `subgraph cluster_N { ... }` blocks (the `cluster_` name
//! prefix is what makes Graphviz draw a containing box), nodes carry the
//! styling of their icon category, and graph-level attributes come from the
//! shared [`StyleConfig`].
//!
//! Declaration order in the spec is preserved in the emitted DOT, so output
//! is deterministic for a given backend version.

use std::{
    io,
    path::{Path, PathBuf},
};

use dot_generator::{attr, id};
use dot_structures::{
    Attribute, Edge as DotEdge, EdgeTy, Graph, GraphAttributes, Id, Node as DotNode, NodeId,
    Stmt, Subgraph, Vertex,
};
use graphviz_rust::{
    cmd::{CommandArg, Format},
    exec, print,
    printer::PrinterContext,
};
use log::{debug, info};

use crate::{
    config::{ImageFormat, StyleConfig},
    graph::DiagramSpec,
};

use super::Error;

/// Lowers diagram descriptions to DOT and renders them via Graphviz.
pub struct DotExporter<'a> {
    style: &'a StyleConfig,
}

impl<'a> DotExporter<'a> {
    /// Creates an exporter applying the given shared styling.
    pub fn new(style: &'a StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the DOT source for `spec`.
    ///
    /// Exposed for inspection and tests; [`render`](Self::render) uses the
    /// same lowering.
    pub fn dot_source(&self, spec: &DiagramSpec) -> String {
        print(self.to_graph(spec), &mut PrinterContext::default())
    }

    /// Renders `spec` into `out_dir` and returns the written file path.
    ///
    /// The file is named `<slug>.<extension>` and overwritten if present.
    /// The output directory must already exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BackendMissing`] when the `dot` executable cannot be
    /// found, and [`Error::Io`] for any other backend or file failure.
    pub fn render(
        &self,
        spec: &DiagramSpec,
        out_dir: &Path,
        format: ImageFormat,
    ) -> Result<PathBuf, Error> {
        let path = out_dir.join(format!("{}.{}", spec.slug(), format.extension()));
        let graph = self.to_graph(spec);
        debug!(
            diagram = spec.slug(),
            nodes = spec.node_count(),
            edges = spec.edge_count();
            "Lowered diagram to DOT"
        );

        let output_format = match format {
            ImageFormat::Png => Format::Png,
            ImageFormat::Svg => Format::Svg,
        };

        exec(
            graph,
            &mut PrinterContext::default(),
            vec![
                CommandArg::Format(output_format),
                CommandArg::Output(path.display().to_string()),
            ],
        )
        .map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => Error::BackendMissing(
                "the Graphviz `dot` executable was not found on PATH".to_string(),
            ),
            _ => Error::Io(err),
        })?;

        info!(file = path.display().to_string(); "Rendered diagram");
        Ok(path)
    }

    /// Lowers `spec` to a DOT graph structure.
    fn to_graph(&self, spec: &DiagramSpec) -> Graph {
        let mut stmts = vec![
            Stmt::GAttribute(GraphAttributes::Graph(vec![
                Attribute(id!("label"), quoted(spec.title())),
                attr!("labelloc", "t"),
                Attribute(id!("fontsize"), id!(self.style.font_size())),
                Attribute(id!("fontname"), quoted(self.style.font_name())),
                Attribute(id!("bgcolor"), quoted(self.style.background_color())),
                Attribute(id!("pad"), id!(self.style.padding())),
                attr!("rankdir", spec.direction().rankdir()),
            ])),
            Stmt::GAttribute(GraphAttributes::Node(vec![
                attr!("shape", "box"),
                attr!("style", esc "filled,rounded"),
                Attribute(id!("fontname"), quoted(self.style.font_name())),
                attr!("fontsize", 12),
            ])),
        ];

        // Group nodes and sub-clusters under their parent cluster, keeping
        // declaration order. Parents are always declared before children.
        let mut child_clusters: Vec<Vec<usize>> = vec![Vec::new(); spec.cluster_count()];
        let mut root_clusters: Vec<usize> = Vec::new();
        for (index, cluster) in spec.clusters().iter().enumerate() {
            match cluster.parent {
                Some(parent) => child_clusters[parent.0].push(index),
                None => root_clusters.push(index),
            }
        }

        let mut cluster_nodes: Vec<Vec<usize>> = vec![Vec::new(); spec.cluster_count()];
        let mut root_nodes: Vec<usize> = Vec::new();
        for (index, node) in spec.nodes().iter().enumerate() {
            match node.parent {
                Some(parent) => cluster_nodes[parent.0].push(index),
                None => root_nodes.push(index),
            }
        }

        for &index in &root_nodes {
            stmts.push(Stmt::Node(self.node_stmt(spec, index)));
        }
        for &index in &root_clusters {
            stmts.push(Stmt::Subgraph(self.subgraph(
                spec,
                index,
                &child_clusters,
                &cluster_nodes,
            )));
        }

        // Edges go at graph level; Graphviz resolves endpoints inside
        // clusters by node id.
        for edge in spec.edges() {
            stmts.push(Stmt::Edge(DotEdge {
                ty: EdgeTy::Pair(
                    Vertex::N(node_id(edge.source.0)),
                    Vertex::N(node_id(edge.target.0)),
                ),
                attributes: vec![],
            }));
        }

        Graph::DiGraph {
            id: quoted(spec.slug()),
            strict: false,
            stmts,
        }
    }

    fn subgraph(
        &self,
        spec: &DiagramSpec,
        index: usize,
        child_clusters: &[Vec<usize>],
        cluster_nodes: &[Vec<usize>],
    ) -> Subgraph {
        let decl = &spec.clusters()[index];
        let mut stmts = vec![
            Stmt::Attribute(Attribute(id!("label"), quoted(&decl.label))),
            Stmt::Attribute(attr!("labeljust", "l")),
            Stmt::Attribute(attr!("style", "rounded")),
            Stmt::Attribute(Attribute(id!("color"), quoted("#AEB6BE"))),
        ];

        for &node in &cluster_nodes[index] {
            stmts.push(Stmt::Node(self.node_stmt(spec, node)));
        }
        for &child in &child_clusters[index] {
            stmts.push(Stmt::Subgraph(self.subgraph(
                spec,
                child,
                child_clusters,
                cluster_nodes,
            )));
        }

        Subgraph {
            id: Id::Plain(format!("cluster_{index}")),
            stmts,
        }
    }

    fn node_stmt(&self, spec: &DiagramSpec, index: usize) -> DotNode {
        let decl = &spec.nodes()[index];
        DotNode {
            id: node_id(index),
            attributes: vec![
                Attribute(id!("label"), quoted(&decl.label)),
                Attribute(id!("fillcolor"), quoted(decl.icon.fill_color())),
                Attribute(id!("fontcolor"), quoted(decl.icon.font_color())),
                Attribute(id!("class"), quoted(decl.icon.category())),
            ],
        }
    }
}

/// Stable DOT identifier for the node at `index`.
fn node_id(index: usize) -> NodeId {
    NodeId(Id::Plain(format!("n{index}")), None)
}

/// Quotes a label value for DOT, escaping backslashes, quotes, and
/// newlines. Multi-line labels use the DOT `\n` escape.
fn quoted(value: impl AsRef<str>) -> Id {
    let escaped = value
        .as_ref()
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    Id::Escaped(format!("\"{escaped}\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::StyleConfig, graph::Direction, icon::Icon};

    fn sample_spec() -> DiagramSpec {
        let mut spec = DiagramSpec::new("Sample Diagram", "sample", Direction::TopToBottom);
        let outer = spec.cluster("Outer Group");
        let inner = spec.cluster_in("Inner Group", outer);
        let entry = spec.node(Icon::Users, "End Users");
        let service = spec.node_in(Icon::React, "Container\n(Port 4000)", inner);
        spec.edge(entry, service);
        spec
    }

    #[test]
    fn dot_source_contains_title_and_rankdir() {
        let style = StyleConfig::default();
        let dot = DotExporter::new(&style).dot_source(&sample_spec());

        assert!(dot.contains("digraph"), "not a digraph: {dot}");
        assert!(dot.contains("\"Sample Diagram\""), "missing title: {dot}");
        assert!(dot.contains("rankdir"), "missing rankdir: {dot}");
        assert!(dot.contains("TB"), "wrong direction: {dot}");
    }

    #[test]
    fn clusters_use_cluster_prefix_and_nest() {
        let style = StyleConfig::default();
        let dot = DotExporter::new(&style).dot_source(&sample_spec());

        assert!(dot.contains("cluster_0"), "missing outer cluster: {dot}");
        assert!(dot.contains("cluster_1"), "missing inner cluster: {dot}");
        // Inner cluster must be emitted inside the outer one.
        let outer_pos = dot.find("cluster_0").unwrap();
        let inner_pos = dot.find("cluster_1").unwrap();
        assert!(outer_pos < inner_pos);
    }

    #[test]
    fn edge_count_matches_spec() {
        let style = StyleConfig::default();
        let spec = sample_spec();
        let dot = DotExporter::new(&style).dot_source(&spec);

        let arrows = dot.matches("->").count();
        assert_eq!(arrows, spec.edge_count());
    }

    #[test]
    fn multiline_labels_are_escaped() {
        let style = StyleConfig::default();
        let dot = DotExporter::new(&style).dot_source(&sample_spec());

        assert!(
            dot.contains("Container\\n(Port 4000)"),
            "newline not escaped: {dot}"
        );
    }

    #[test]
    fn node_styling_comes_from_icon() {
        let style = StyleConfig::default();
        let dot = DotExporter::new(&style).dot_source(&sample_spec());

        assert!(dot.contains(Icon::React.fill_color()));
        assert!(dot.contains(Icon::Users.category()));
    }
}
