//! The graph container — dense stores plus the attribute overlay.

use crate::schema::{EntityKind, GraphSchema};
use crate::types::{AttrValue, GraphError, GraphResult};

use super::attributes::AttributeStore;
use super::bridges::find_bridges;
use super::edges::EdgeStore;
use super::nodes::NodeStore;
use super::view::{EdgeView, Edges, NodeView, Nodes};

/// An append-only undirected graph bound to an external attribute schema.
///
/// Nodes and edges are only ever added, never removed; positions are dense
/// insertion indices. The schema is borrowed for the graph's entire
/// lifetime and validates every attribute write.
pub struct Graph<'s> {
    pub(crate) schema: &'s GraphSchema,
    pub(crate) nodes: NodeStore,
    pub(crate) edges: EdgeStore,
    pub(crate) node_attrs: AttributeStore,
    pub(crate) edge_attrs: AttributeStore,
}

impl<'s> Graph<'s> {
    /// Create an empty graph bound to `schema`.
    pub fn new(schema: &'s GraphSchema) -> Self {
        Self {
            schema,
            nodes: NodeStore::new(),
            edges: EdgeStore::new(),
            node_attrs: AttributeStore::new(EntityKind::Node),
            edge_attrs: AttributeStore::new(EntityKind::Edge),
        }
    }

    /// The schema this graph validates against.
    pub fn schema(&self) -> &'s GraphSchema {
        self.schema
    }

    /// Add a node, returning its assigned position.
    pub fn add_node(&mut self, id: i64) -> GraphResult<usize> {
        self.nodes.add(id)
    }

    /// Add a node together with attributes, applied in the given order.
    ///
    /// Attribute application is NOT atomic: if one fails validation, the
    /// node and every attribute before the failing one stay committed and
    /// the error is returned.
    pub fn add_node_with_attrs(
        &mut self,
        id: i64,
        attrs: &[(&str, AttrValue)],
    ) -> GraphResult<usize> {
        let position = self.nodes.add(id)?;
        for &(key, ref value) in attrs {
            self.node_attrs.set(self.schema, position, key, value)?;
        }
        Ok(position)
    }

    /// Add the undirected edge `{u, v}`, returning its position.
    ///
    /// `(u, v)` and `(v, u)` name the same edge; whichever is inserted
    /// second fails with `DuplicateEdge`. Self-loops are rejected.
    pub fn add_edge(&mut self, u: i64, v: i64) -> GraphResult<usize> {
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        let u_pos = self.nodes.require(u)?;
        let v_pos = self.nodes.require(v)?;
        self.edges
            .insert(&mut self.nodes, u_pos, v_pos)
            .ok_or(GraphError::DuplicateEdge(u, v))
    }

    /// Add an edge together with attributes, applied in the given order.
    ///
    /// Same non-atomic semantics as [`Graph::add_node_with_attrs`]: a
    /// failing attribute leaves the edge and earlier attributes committed.
    pub fn add_edge_with_attrs(
        &mut self,
        u: i64,
        v: i64,
        attrs: &[(&str, AttrValue)],
    ) -> GraphResult<usize> {
        let position = self.add_edge(u, v)?;
        for &(key, ref value) in attrs {
            self.edge_attrs.set(self.schema, position, key, value)?;
        }
        Ok(position)
    }

    /// Whether `id` was successfully added.
    pub fn contains(&self, id: i64) -> bool {
        self.nodes.contains(id)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of stored node attribute records.
    pub fn node_attr_count(&self) -> usize {
        self.node_attrs.len()
    }

    /// Number of stored edge attribute records.
    pub fn edge_attr_count(&self) -> usize {
        self.edge_attrs.len()
    }

    /// Number of incident edges on node `id`.
    pub fn degree(&self, id: i64) -> GraphResult<usize> {
        let position = self.nodes.require(id)?;
        Ok(self.nodes.degree_at(position))
    }

    /// Always `false`; edges are unordered pairs.
    pub fn is_directed(&self) -> bool {
        false
    }

    /// Always `false`; duplicate edges are rejected.
    pub fn is_multigraph(&self) -> bool {
        false
    }

    /// Read a node attribute.
    pub fn node_attr(&self, id: i64, key: &str) -> GraphResult<&'s AttrValue> {
        let position = self.nodes.require(id)?;
        self.node_attrs.get(self.schema, position, key)
    }

    /// Set a node attribute, overwriting any previous value for the key.
    pub fn set_node_attr(&mut self, id: i64, key: &str, value: &AttrValue) -> GraphResult<()> {
        let position = self.nodes.require(id)?;
        self.node_attrs.set(self.schema, position, key, value)
    }

    /// Resolve an id pair to the edge position used for edge attributes.
    pub fn edge_position(&self, u: i64, v: i64) -> GraphResult<usize> {
        let u_pos = self.nodes.require(u)?;
        let v_pos = self.nodes.require(v)?;
        self.edges
            .position_of(u_pos, v_pos)
            .ok_or(GraphError::EdgeNotFound(u, v))
    }

    /// Read an edge attribute by edge insertion position.
    pub fn edge_attr(&self, position: usize, key: &str) -> GraphResult<&'s AttrValue> {
        if position >= self.edges.len() {
            return Err(GraphError::EdgePositionOutOfRange(position));
        }
        self.edge_attrs.get(self.schema, position, key)
    }

    /// Set an edge attribute by edge insertion position.
    pub fn set_edge_attr(
        &mut self,
        position: usize,
        key: &str,
        value: &AttrValue,
    ) -> GraphResult<()> {
        if position >= self.edges.len() {
            return Err(GraphError::EdgePositionOutOfRange(position));
        }
        self.edge_attrs.set(self.schema, position, key, value)
    }

    /// Bridge edges as id pairs, in edge insertion order.
    ///
    /// A bridge is an edge whose removal increases the number of connected
    /// components.
    pub fn bridges(&self) -> Vec<(i64, i64)> {
        let flags = find_bridges(&self.nodes, &self.edges);
        self.edges
            .pairs()
            .iter()
            .zip(flags)
            .filter(|&(_, is_bridge)| is_bridge)
            .map(|(&(a, b), _)| (self.nodes.id_at(a), self.nodes.id_at(b)))
            .collect()
    }

    /// Bridge flags indexed by edge insertion position.
    pub fn bridge_flags(&self) -> Vec<bool> {
        find_bridges(&self.nodes, &self.edges)
    }

    /// Fill a caller-supplied buffer with bridge flags, indexed by edge
    /// insertion position.
    ///
    /// # Panics
    ///
    /// Panics if `flags.len() != self.edge_count()`.
    pub fn bridge_flags_into(&self, flags: &mut [bool]) {
        assert_eq!(
            flags.len(),
            self.edges.len(),
            "bridge flag buffer length must equal edge count"
        );
        flags.copy_from_slice(&find_bridges(&self.nodes, &self.edges));
    }

    /// View over the node at `id`.
    pub fn node(&self, id: i64) -> GraphResult<NodeView<'_, 's>> {
        let position = self.nodes.require(id)?;
        Ok(NodeView {
            graph: self,
            position,
        })
    }

    /// View over the edge at `position`.
    pub fn edge(&self, position: usize) -> GraphResult<EdgeView<'_, 's>> {
        if position >= self.edges.len() {
            return Err(GraphError::EdgePositionOutOfRange(position));
        }
        Ok(EdgeView {
            graph: self,
            position,
        })
    }

    /// Iterate nodes in insertion order.
    pub fn nodes(&self) -> Nodes<'_, 's> {
        Nodes {
            graph: self,
            positions: 0..self.nodes.len(),
        }
    }

    /// Iterate edges in insertion order.
    pub fn edges(&self) -> Edges<'_, 's> {
        Edges {
            graph: self,
            positions: 0..self.edges.len(),
        }
    }
}

impl std::fmt::Debug for Graph<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes.len())
            .field("edges", &self.edges.len())
            .field("node_attrs", &self.node_attrs.len())
            .field("edge_attrs", &self.edge_attrs.len())
            .finish()
    }
}
