//! Human-readable output formatting

use graphic_core::graph::{Algorithm, Graph, GraphReport, TreeStep};

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

/// One indented tree per root, roots in label order
pub fn forest(algorithm: Algorithm, source: &str, forest: &Graph) -> String {
    let mut lines = vec![format!(
        "{algorithm} from {source}: {}, {}",
        plural(forest.size(), "vertex", "vertices"),
        plural(forest.roots().count(), "tree", "trees")
    )];

    for step in forest.tree_walk() {
        lines.push(format!(
            "{}{}{}",
            "  ".repeat(step.depth),
            step.label,
            annotation(algorithm, forest, &step)
        ));
    }

    lines.join("\n") + "\n"
}

fn annotation(algorithm: Algorithm, forest: &Graph, step: &TreeStep<'_>) -> String {
    let Some(vertex) = forest.vertex(step.label) else {
        return String::new();
    };
    let weight = step
        .parent
        .and_then(|parent| forest.weight(parent, step.label).ok());

    match (algorithm, weight) {
        (Algorithm::Dfs, _) => format!(" [{}/{}]", vertex.start(), vertex.finish()),
        (Algorithm::Dijkstra, Some(w)) => {
            format!(" (weight {w}, distance {})", vertex.distance())
        }
        (Algorithm::Dijkstra, None) => format!(" (distance {})", vertex.distance()),
        (Algorithm::Bfs, Some(w)) => format!(" (weight {w})"),
        (Algorithm::Bfs, None) => String::new(),
    }
}

/// Adjacency listing, one vertex per line
pub fn graph(report: &GraphReport) -> String {
    let mut lines = vec![format!(
        "{}, {}",
        plural(report.size, "vertex", "vertices"),
        plural(report.edges.len(), "edge", "edges")
    )];

    for vertex in &report.vertices {
        let targets: Vec<String> = report
            .edges
            .iter()
            .filter(|edge| edge.from == vertex.label)
            .map(|edge| format!("{} ({})", edge.to, edge.weight))
            .collect();

        if targets.is_empty() {
            lines.push(vertex.label.clone());
        } else {
            lines.push(format!("{} -> {}", vertex.label, targets.join(", ")));
        }
    }

    lines.join("\n") + "\n"
}
