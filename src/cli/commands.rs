//! CLI command implementations.

use std::path::Path;

use crate::engine::{IdentityTitles, Investigator, TitleResolver, TitleTable};
use crate::format::TgfReader;
use crate::graph::RatGraph;
use crate::types::{RatError, RatResult};

/// Load a dataset. Skipped accounts are already reported through the log.
fn load(path: &Path) -> RatResult<RatGraph> {
    let (rat, _) = RatGraph::from_file(path)?;
    Ok(rat)
}

/// Story titles from a table file, or the ids themselves.
fn load_titles(path: Option<&Path>) -> RatResult<Box<dyn TitleResolver>> {
    match path {
        Some(path) => Ok(Box::new(TitleTable::read_from_file(path)?)),
        None => Ok(Box::new(IdentityTitles)),
    }
}

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

fn print_list(label: &str, items: &[String]) {
    println!("{}: [{}]", label, items.join(", "));
}

/// Display counts for a dataset.
pub fn cmd_info(path: &Path, json: bool) -> RatResult<()> {
    let (rat, report) = RatGraph::from_file(path)?;
    let graph = rat.graph();

    if json {
        print_json(&serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "arcs": graph.arc_count(),
            "users": rat.users().len(),
            "stories": rat.stories().len(),
            "undirected": graph.is_undirected(),
            "ingest": report,
        }));
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", graph.vertex_count());
        println!("Arcs: {}", graph.arc_count());
        println!("Users: {}", rat.users().len());
        println!("Stories: {}", rat.stories().len());
        println!("Undirected: {}", graph.is_undirected());
        println!("Records read: {}", report.records);
        println!("Records skipped: {}", report.skipped.len());
        for name in &report.skipped {
            println!("  {}", name);
        }
    }
    Ok(())
}

/// Export a dataset's graph as TGF.
pub fn cmd_export(path: &Path, out: &Path, json: bool) -> RatResult<()> {
    let rat = load(path)?;
    let written = rat.save_tgf(out);

    if json {
        println!(
            "{}",
            serde_json::json!({"output": out.display().to_string(), "written": written})
        );
    } else if written {
        println!(
            "Exported {} vertices and {} arcs to {}",
            rat.graph().vertex_count(),
            rat.graph().arc_count(),
            out.display()
        );
    } else {
        println!("Export to {} failed", out.display());
    }
    Ok(())
}

/// Breadth-first order from a vertex.
pub fn cmd_bfs(path: &Path, vertex: &str, json: bool) -> RatResult<()> {
    let rat = load(path)?;
    let order = rat.bfs(vertex);
    if json {
        print_json(&serde_json::json!({"start": vertex, "order": order}));
    } else {
        print_list(&format!("BFS from {}", vertex), &order);
    }
    Ok(())
}

/// Depth-first walk from a vertex.
pub fn cmd_dfs(path: &Path, vertex: &str, json: bool) -> RatResult<()> {
    let rat = load(path)?;
    let walk = rat.dfs(vertex)?;
    if json {
        print_json(&serde_json::json!({"start": vertex, "walk": walk}));
    } else {
        print_list(&format!("DFS from {}", vertex), &walk);
    }
    Ok(())
}

/// Out-list of a vertex.
pub fn cmd_successors(path: &Path, vertex: &str, json: bool) -> RatResult<()> {
    let rat = load(path)?;
    let successors = rat
        .successors(vertex)
        .ok_or_else(|| RatError::VertexNotFound(vertex.to_string()))?;
    if json {
        print_json(&serde_json::json!({"vertex": vertex, "successors": successors}));
    } else {
        print_list(&format!("Successors of {}", vertex), successors);
    }
    Ok(())
}

/// Vertices with an arc into a vertex.
pub fn cmd_predecessors(path: &Path, vertex: &str, json: bool) -> RatResult<()> {
    let rat = load(path)?;
    let predecessors = rat.predecessors(vertex);
    if json {
        print_json(&serde_json::json!({"vertex": vertex, "predecessors": predecessors}));
    } else {
        print_list(&format!("Predecessors of {}", vertex), &predecessors);
    }
    Ok(())
}

/// User/story distance between two vertices.
pub fn cmd_distance(path: &Path, from: &str, to: &str, json: bool) -> RatResult<()> {
    let rat = load(path)?;
    let distance = Investigator::new(&rat, IdentityTitles).diam_between(from, to);
    if json {
        println!(
            "{}",
            serde_json::json!({"from": from, "to": to, "distance": distance})
        );
    } else {
        println!("Distance from {} to {}: {}", from, to, distance);
    }
    Ok(())
}

/// Most central vertices of the largest component.
pub fn cmd_central(path: &Path, titles: Option<&Path>, json: bool) -> RatResult<()> {
    let rat = load(path)?;
    let titles = load_titles(titles)?;
    let investigator = Investigator::new(&rat, &*titles);
    let central = investigator.central_nodes();
    if json {
        print_json(&serde_json::json!({"central_nodes": central}));
    } else {
        println!("Most central nodes in the largest connected component:");
        for node in &central {
            println!("  {}", node);
        }
    }
    Ok(())
}

/// Full investigation report.
pub fn cmd_report(path: &Path, titles: Option<&Path>, json: bool) -> RatResult<()> {
    let rat = load(path)?;
    let titles = load_titles(titles)?;
    let report = Investigator::new(&rat, &*titles).report();
    if json {
        print_json(&serde_json::json!(report));
    } else {
        print!("{}", report);
    }
    Ok(())
}

/// Counts for an exported TGF file.
pub fn cmd_tgf_info(path: &Path, json: bool) -> RatResult<()> {
    let graph = TgfReader::read_from_file(path)?;
    if json {
        print_json(&serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "arcs": graph.arc_count(),
            "undirected": graph.is_undirected(),
        }));
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", graph.vertex_count());
        println!("Arcs: {}", graph.arc_count());
        println!("Undirected: {}", graph.is_undirected());
    }
    Ok(())
}
