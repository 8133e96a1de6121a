//! JSON graph documents — the on-disk form consumed by the CLI.
//!
//! A document carries a schema declaration plus node and edge entries.
//! Schema keys are declared as ordered lists (not maps) so key positions
//! survive serialization.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::schema::{EntityKind, GraphSchema};
use crate::types::{AttrValue, GraphResult};

/// One attribute declaration: a key and its ordered value domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttrDecl {
    /// Attribute key.
    pub key: String,
    /// Ordered domain of permitted values.
    pub values: Vec<AttrValue>,
}

/// Schema section of a graph document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Node attribute declarations, in key-position order.
    #[serde(default)]
    pub node: Vec<AttrDecl>,
    /// Edge attribute declarations, in key-position order.
    #[serde(default)]
    pub edge: Vec<AttrDecl>,
}

impl SchemaDocument {
    /// Build the runtime schema this section declares.
    pub fn build(&self) -> GraphSchema {
        let mut builder = GraphSchema::builder();
        for decl in &self.node {
            builder = builder.node_attr(decl.key.clone(), decl.values.clone());
        }
        for decl in &self.edge {
            builder = builder.edge_attr(decl.key.clone(), decl.values.clone());
        }
        builder.build()
    }
}

/// One node entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeEntry {
    /// User-facing node id.
    pub id: i64,
    /// Attributes to set on the node.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, AttrValue>,
}

/// One edge entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeEntry {
    /// First endpoint id.
    pub u: i64,
    /// Second endpoint id.
    pub v: i64,
    /// Attributes to set on the edge.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, AttrValue>,
}

/// A complete graph document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Schema declarations.
    #[serde(default)]
    pub schema: SchemaDocument,
    /// Nodes in insertion order.
    #[serde(default)]
    pub nodes: Vec<NodeEntry>,
    /// Edges in insertion order.
    #[serde(default)]
    pub edges: Vec<EdgeEntry>,
}

impl GraphDocument {
    /// Parse a document from JSON text.
    pub fn from_json(text: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a document from a JSON file.
    pub fn from_path(path: &Path) -> GraphResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> GraphResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the document to a JSON file.
    pub fn save(&self, path: &Path) -> GraphResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Build the runtime schema declared by this document.
    pub fn build_schema(&self) -> GraphSchema {
        self.schema.build()
    }

    /// Construct a graph from this document against a built schema.
    ///
    /// Entries are applied in document order with the library's usual
    /// validation; the first invalid entry aborts the build.
    pub fn instantiate<'s>(&self, schema: &'s GraphSchema) -> GraphResult<Graph<'s>> {
        let mut graph = Graph::new(schema);
        for node in &self.nodes {
            let attrs: Vec<(&str, AttrValue)> = node
                .attrs
                .iter()
                .map(|(k, v)| (k.as_str(), v.clone()))
                .collect();
            graph.add_node_with_attrs(node.id, &attrs)?;
        }
        for edge in &self.edges {
            let attrs: Vec<(&str, AttrValue)> = edge
                .attrs
                .iter()
                .map(|(k, v)| (k.as_str(), v.clone()))
                .collect();
            graph.add_edge_with_attrs(edge.u, edge.v, &attrs)?;
        }
        Ok(graph)
    }

    /// Capture an existing graph (and its schema) as a document.
    pub fn from_graph(graph: &Graph<'_>) -> Self {
        let schema = graph.schema();
        let decls = |kind: EntityKind| -> Vec<AttrDecl> {
            schema
                .keys(kind)
                .map(|key| AttrDecl {
                    key: key.to_owned(),
                    values: schema
                        .domain(kind, key)
                        .map(<[AttrValue]>::to_vec)
                        .unwrap_or_default(),
                })
                .collect()
        };

        let nodes = graph
            .nodes()
            .map(|node| NodeEntry {
                id: node.id(),
                attrs: schema
                    .keys(EntityKind::Node)
                    .filter_map(|key| node.attr(key).ok().map(|v| (key.to_owned(), v.clone())))
                    .collect(),
            })
            .collect();

        let edges = graph
            .edges()
            .map(|edge| {
                let (u, v) = edge.endpoints();
                EdgeEntry {
                    u,
                    v,
                    attrs: schema
                        .keys(EntityKind::Edge)
                        .filter_map(|key| edge.attr(key).ok().map(|v| (key.to_owned(), v.clone())))
                        .collect(),
                }
            })
            .collect();

        Self {
            schema: SchemaDocument {
                node: decls(EntityKind::Node),
                edge: decls(EntityKind::Edge),
            },
            nodes,
            edges,
        }
    }
}
