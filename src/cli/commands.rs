//! CLI command implementations.

use std::path::Path;

use log::debug;

use crate::format::GraphDocument;
use crate::schema::{EntityKind, GraphSchema};
use crate::types::GraphResult;

fn load(path: &Path) -> GraphResult<(GraphDocument, GraphSchema)> {
    let doc = GraphDocument::from_path(path)?;
    let schema = doc.build_schema();
    debug!(
        "loaded {}: {} nodes, {} edges declared",
        path.display(),
        doc.nodes.len(),
        doc.edges.len()
    );
    Ok((doc, schema))
}

/// Display information about a graph document.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let (doc, schema) = load(path)?;
    let graph = doc.instantiate(&schema)?;

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "directed": graph.is_directed(),
            "multigraph": graph.is_multigraph(),
            "schema": {
                "node_keys": schema.keys(EntityKind::Node).collect::<Vec<_>>(),
                "edge_keys": schema.keys(EntityKind::Edge).collect::<Vec<_>>(),
            }
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        println!("Directed: {}", graph.is_directed());
        println!("Multigraph: {}", graph.is_multigraph());
        println!(
            "Node attribute keys: {}",
            schema.keys(EntityKind::Node).collect::<Vec<_>>().join(", ")
        );
        println!(
            "Edge attribute keys: {}",
            schema.keys(EntityKind::Edge).collect::<Vec<_>>().join(", ")
        );
    }
    Ok(())
}

/// Find and print the bridges of a graph document.
pub fn cmd_bridges(path: &Path, json: bool) -> GraphResult<()> {
    let (doc, schema) = load(path)?;
    let graph = doc.instantiate(&schema)?;
    let bridges = graph.bridges();

    if json {
        let out = serde_json::json!({
            "count": bridges.len(),
            "bridges": bridges.iter().map(|&(u, v)| vec![u, v]).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!("{} bridge(s)", bridges.len());
        for (u, v) in bridges {
            println!("  {} -- {}", u, v);
        }
    }
    Ok(())
}

/// Validate a graph document: schema, structure and attributes.
pub fn cmd_validate(path: &Path, json: bool) -> GraphResult<()> {
    let (doc, schema) = load(path)?;
    let graph = doc.instantiate(&schema)?;

    if json {
        let out = serde_json::json!({
            "ok": true,
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!(
            "OK: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
    }
    Ok(())
}

/// Print per-node degrees in insertion order.
pub fn cmd_degrees(path: &Path, json: bool) -> GraphResult<()> {
    let (doc, schema) = load(path)?;
    let graph = doc.instantiate(&schema)?;

    if json {
        let out: Vec<_> = graph
            .nodes()
            .map(|node| serde_json::json!({"id": node.id(), "degree": node.degree()}))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&out).unwrap_or_default()
        );
    } else {
        for node in graph.nodes() {
            println!("{}: {}", node.id(), node.degree());
        }
    }
    Ok(())
}

/// Re-emit a document normalized from the instantiated graph.
pub fn cmd_export(path: &Path, pretty: bool) -> GraphResult<()> {
    let (doc, schema) = load(path)?;
    let graph = doc.instantiate(&schema)?;
    let normalized = GraphDocument::from_graph(&graph);

    let text = if pretty {
        normalized.to_json()?
    } else {
        serde_json::to_string(&normalized)?
    };
    println!("{}", text);
    Ok(())
}
