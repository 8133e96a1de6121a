//! Read-only positional views over nodes and edges.
//!
//! Views expose indexed access only; all mutation goes through
//! [`Graph`](super::Graph). Iterating a graph yields nodes in insertion
//! (positional) order.

use std::ops::Range;

use crate::types::{AttrValue, GraphResult};

use super::store::Graph;

/// A view over a single node.
#[derive(Clone, Copy)]
pub struct NodeView<'g, 's> {
    pub(crate) graph: &'g Graph<'s>,
    pub(crate) position: usize,
}

impl<'g, 's> NodeView<'g, 's> {
    /// The node's user-facing id.
    pub fn id(&self) -> i64 {
        self.graph.nodes.id_at(self.position)
    }

    /// The node's dense position (insertion index).
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of incident edges.
    pub fn degree(&self) -> usize {
        self.graph.nodes.degree_at(self.position)
    }

    /// Read an attribute of this node.
    pub fn attr(&self, key: &str) -> GraphResult<&'s AttrValue> {
        self.graph
            .node_attrs
            .get(self.graph.schema, self.position, key)
    }
}

impl std::fmt::Debug for NodeView<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeView")
            .field("id", &self.id())
            .field("position", &self.position)
            .field("degree", &self.degree())
            .finish()
    }
}

/// A view over a single edge.
#[derive(Clone, Copy)]
pub struct EdgeView<'g, 's> {
    pub(crate) graph: &'g Graph<'s>,
    pub(crate) position: usize,
}

impl<'g, 's> EdgeView<'g, 's> {
    /// The edge's position (insertion index).
    pub fn position(&self) -> usize {
        self.position
    }

    /// Endpoint ids in canonical stored order.
    pub fn endpoints(&self) -> (i64, i64) {
        let (a, b) = self.graph.edges.pairs()[self.position];
        (self.graph.nodes.id_at(a), self.graph.nodes.id_at(b))
    }

    /// Read an attribute of this edge.
    pub fn attr(&self, key: &str) -> GraphResult<&'s AttrValue> {
        self.graph
            .edge_attrs
            .get(self.graph.schema, self.position, key)
    }
}

impl std::fmt::Debug for EdgeView<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (u, v) = self.endpoints();
        f.debug_struct("EdgeView")
            .field("position", &self.position)
            .field("endpoints", &(u, v))
            .finish()
    }
}

/// Iterator over node views in insertion order.
pub struct Nodes<'g, 's> {
    pub(crate) graph: &'g Graph<'s>,
    pub(crate) positions: Range<usize>,
}

impl<'g, 's> Iterator for Nodes<'g, 's> {
    type Item = NodeView<'g, 's>;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.positions.next()?;
        Some(NodeView {
            graph: self.graph,
            position,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl ExactSizeIterator for Nodes<'_, '_> {}

/// Iterator over edge views in insertion order.
pub struct Edges<'g, 's> {
    pub(crate) graph: &'g Graph<'s>,
    pub(crate) positions: Range<usize>,
}

impl<'g, 's> Iterator for Edges<'g, 's> {
    type Item = EdgeView<'g, 's>;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.positions.next()?;
        Some(EdgeView {
            graph: self.graph,
            position,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl ExactSizeIterator for Edges<'_, '_> {}

impl<'g, 's> IntoIterator for &'g Graph<'s> {
    type Item = NodeView<'g, 's>;
    type IntoIter = Nodes<'g, 's>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes()
    }
}
