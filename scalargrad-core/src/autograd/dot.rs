// src/autograd/dot.rs

use crate::autograd::graph::{node_at, resolve, Node, NodeId};
use crate::error::ScalarGradError;
use crate::var::Var;
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Command;

/// Renders the graph reachable from `root` in Graphviz DOT format.
///
/// Nodes are numbered `node_<n>` in depth-first pre-order from the root. Each label
/// carries the operation tag (omitted for leaves), the value and the current
/// gradient. Nodes without predecessors are drawn as green ellipses, the others as
/// blue boxes. Every predecessor slot yields one `pred -> consumer` edge.
pub fn export_graph(root: &Var<'_>) -> String {
    let nodes = root.graph.nodes();
    let root_id = NodeId(resolve(&nodes, root.id, root.generation));

    let mut out = String::new();
    out.push_str("digraph G {\n");
    out.push_str("  rankdir=LR;\n");
    out.push_str("  node [shape=record, fontname=\"Arial\"];\n");
    out.push_str("  edge [fontname=\"Arial\"];\n");

    build_dot(&nodes, root_id, &mut out);

    out.push_str("}\n");
    out
}

/// Emits the node and edge lines of the subgraph reachable from `root`.
///
/// Depth-first with an explicit stack, so long chains cannot overflow the call stack.
/// A node is numbered and written when first reached; the edge to its consumer is
/// written once its own predecessors are done, which is the order the recursive
/// formulation produces.
fn build_dot(nodes: &[Node], root: NodeId, out: &mut String) {
    let mut node_ids: HashMap<NodeId, usize> = HashMap::new();
    // (node, position of the next predecessor to visit)
    let mut stack: Vec<(NodeId, usize)> = Vec::new();

    write_node(nodes, root, &mut node_ids, out);
    stack.push((root, 0));

    while let Some(&(id, next)) = stack.last() {
        match node_at(nodes, id).prev.get(next) {
            Some(&child) => {
                if let Some(frame) = stack.last_mut() {
                    frame.1 += 1;
                }
                let known = node_ids.get(&child).copied();
                match known {
                    Some(child_id) => out.push_str(&edge_line(child_id, node_ids[&id])),
                    None => {
                        write_node(nodes, child, &mut node_ids, out);
                        stack.push((child, 0));
                    }
                }
            }
            None => {
                stack.pop();
                if let Some(&(consumer, _)) = stack.last() {
                    out.push_str(&edge_line(node_ids[&id], node_ids[&consumer]));
                }
            }
        }
    }
}

/// Numbers `id` and appends its node line.
fn write_node(nodes: &[Node], id: NodeId, node_ids: &mut HashMap<NodeId, usize>, out: &mut String) {
    let number = node_ids.len();
    node_ids.insert(id, number);

    let node = node_at(nodes, id);
    let symbol = node.op.symbol();
    let op_line = if symbol.is_empty() {
        String::new()
    } else {
        format!("Op: {}\\n", symbol)
    };
    let (shape, fillcolor) = if node.prev.is_empty() {
        ("ellipse", "lightgreen")
    } else {
        ("box", "lightblue")
    };
    out.push_str(&format!(
        "  node_{}[label=\"{}Value: {:.4}\\nGrad: {:.4}\", shape={}, style=filled, fillcolor={}];\n",
        number, op_line, node.data, node.grad, shape, fillcolor
    ));
}

fn edge_line(pred: usize, consumer: usize) -> String {
    format!("  node_{} -> node_{};\n", pred, consumer)
}

impl<'g> Var<'g> {
    /// DOT description of the graph reachable from this node, see [`export_graph`].
    pub fn to_dot(&self) -> String {
        export_graph(self)
    }

    /// Writes `<stem>.dot` and renders it to `<stem>.png` with the Graphviz `dot`
    /// program.
    ///
    /// Returns the path of the image. Failures are logged and returned; they never
    /// affect the graph.
    ///
    /// # Errors
    /// `IoError` if the DOT file cannot be written, `RenderFailed` if `dot` cannot be
    /// started or exits unsuccessfully.
    pub fn visualize(&self, stem: &str) -> Result<PathBuf, ScalarGradError> {
        let dot_path = PathBuf::from(format!("{}.dot", stem));
        let png_path = PathBuf::from(format!("{}.png", stem));

        std::fs::write(&dot_path, self.to_dot()).map_err(|e| {
            let err = ScalarGradError::IoError {
                path: dot_path.display().to_string(),
                reason: e.to_string(),
            };
            log::warn!("{}", err);
            err
        })?;

        let command = format!("dot -Tpng {} -o {}", dot_path.display(), png_path.display());
        let status = Command::new("dot")
            .arg("-Tpng")
            .arg(&dot_path)
            .arg("-o")
            .arg(&png_path)
            .status();
        let failure = match status {
            Ok(status) if status.success() => None,
            Ok(status) => Some(format!("exited with {}", status)),
            Err(e) => Some(format!("{} (is Graphviz installed and on PATH?)", e)),
        };
        match failure {
            None => {
                log::debug!("rendered computation graph to {}", png_path.display());
                Ok(png_path)
            }
            Some(reason) => {
                let err = ScalarGradError::RenderFailed { command, reason };
                log::warn!("{}", err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "dot_test.rs"]
mod tests;
