//! Records output formatting
//!
//! `H` header, one `N` line per vertex, one `E` line per edge. Labels are
//! quoted so they may contain spaces.

use graphic_core::graph::{GraphReport, VertexEntry};

/// Escape double quotes for embedding in a quoted field
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', r#"\""#)
}

pub fn quoted(label: &str) -> String {
    format!("\"{}\"", escape_quotes(label))
}

fn vertex_line(vertex: &VertexEntry) -> String {
    let mut line = format!("N {} root={}", quoted(&vertex.label), vertex.root);
    if let (Some(start), Some(finish)) = (vertex.start, vertex.finish) {
        line.push_str(&format!(" start={start} finish={finish}"));
    }
    if let Some(distance) = vertex.distance {
        line.push_str(&format!(" distance={distance}"));
    }
    if let Some(predecessor) = &vertex.predecessor {
        line.push_str(&format!(" predecessor={}", quoted(predecessor)));
    }
    line
}

pub fn report(report: &GraphReport) -> String {
    let mode = report
        .algorithm
        .map(|algorithm| algorithm.to_string())
        .unwrap_or_else(|| "graph".to_string());
    let source = report
        .source
        .as_deref()
        .map(|source| format!(" source={}", quoted(source)))
        .unwrap_or_default();

    let mut lines = vec![format!(
        "H graphic=1 records=1 mode={mode}{source} vertices={} edges={} roots={}",
        report.size,
        report.edges.len(),
        report.roots.len()
    )];
    lines.extend(report.vertices.iter().map(vertex_line));
    lines.extend(report.edges.iter().map(|edge| {
        format!("E {} {} {}", quoted(&edge.from), quoted(&edge.to), edge.weight)
    }));

    lines.join("\n") + "\n"
}
