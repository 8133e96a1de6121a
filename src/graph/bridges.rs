//! Bridge (cut-edge) detection via DFS low-link timestamps.

use log::debug;

use super::edges::EdgeStore;
use super::nodes::NodeStore;

/// One suspended DFS visit.
struct Frame {
    /// Node position being expanded.
    v: usize,
    /// DFS parent and the edge position leading here; `None` at roots.
    parent: Option<(usize, usize)>,
    /// Next unexamined adjacency slot of `v`.
    next: usize,
}

/// Compute a bridge flag per edge position.
///
/// Classic discovery/low-link analysis: an edge `(v, to)` of the DFS tree
/// is a bridge iff `low[to] > tin[v]`, i.e. nothing in `to`'s subtree
/// reaches back above `v`. The DFS runs on an explicit frame stack so
/// memory stays heap-bounded on large graphs; results are identical to the
/// recursive formulation. O(V+E).
///
/// The parent edge is skipped by parent tracking, which is sound only
/// because duplicate edges and self-loops are rejected at insertion.
pub fn find_bridges(nodes: &NodeStore, edges: &EdgeStore) -> Vec<bool> {
    let n = nodes.len();
    let m = edges.len();

    // Adjacency lists sized from the precomputed degrees; each undirected
    // edge contributes one entry per endpoint, tagged with its edge
    // position so tree edges can be flagged directly.
    let mut adj: Vec<Vec<(usize, usize)>> = nodes
        .degrees()
        .iter()
        .map(|&d| Vec::with_capacity(d))
        .collect();
    for (edge_position, &(a, b)) in edges.pairs().iter().enumerate() {
        adj[a].push((b, edge_position));
        adj[b].push((a, edge_position));
    }

    let mut visited = vec![false; n];
    let mut tin = vec![0usize; n];
    let mut low = vec![0usize; n];
    let mut flags = vec![false; m];
    let mut timer = 0usize;
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        tin[root] = timer;
        low[root] = timer;
        timer += 1;
        stack.push(Frame {
            v: root,
            parent: None,
            next: 0,
        });

        while !stack.is_empty() {
            let top = stack.len() - 1;
            let v = stack[top].v;
            if stack[top].next < adj[v].len() {
                let (to, via) = adj[v][stack[top].next];
                stack[top].next += 1;
                if stack[top].parent.map(|(p, _)| p) == Some(to) {
                    continue;
                }
                if visited[to] {
                    // Back edge: the subtree of v reaches to's timestamp.
                    low[v] = low[v].min(tin[to]);
                } else {
                    visited[to] = true;
                    tin[to] = timer;
                    low[to] = timer;
                    timer += 1;
                    stack.push(Frame {
                        v: to,
                        parent: Some((v, via)),
                        next: 0,
                    });
                }
            } else if let Some(done) = stack.pop() {
                if let Some((parent, via)) = done.parent {
                    low[parent] = low[parent].min(low[done.v]);
                    if low[done.v] > tin[parent] {
                        flags[via] = true;
                    }
                }
            }
        }
    }

    debug!(
        "bridge scan: {} nodes, {} edges, {} bridges",
        n,
        m,
        flags.iter().filter(|&&b| b).count()
    );
    flags
}
