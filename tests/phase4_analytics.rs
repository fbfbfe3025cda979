//! Phase 4 tests: analytics over the user/story graph.

use std::io::{Cursor, Write};

use rat_graph::engine::{IdentityTitles, Investigator, TitleResolver, TitleTable};
use rat_graph::graph::{GraphBuilder, RatGraph};
use rat_graph::types::RatError;

use tempfile::NamedTempFile;

// ==================== Helpers ====================

/// alice: s1, s2; bob: malformed; carol: s2, s3; dan: s4.
const DATASET: &str = "\
name id tweets stories ids
alice 1001 50 2 s1,s2
bob 1002 ?? 1 s1
carol 1003 70 2 s2,s3
dan 1004 70 1 s4
";

fn build(text: &str) -> RatGraph {
    let mut builder = GraphBuilder::new();
    builder.read_from(Cursor::new(text)).unwrap();
    builder.build()
}

fn titles() -> TitleTable {
    let mut table = TitleTable::new();
    table.insert("s2", "Story Two");
    table
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ==================== Maximum Tests ====================

#[test]
fn test_most_stories_breaks_ties_by_registration_order() {
    let rat = build(DATASET);
    let inv = Investigator::new(&rat, IdentityTitles);
    // alice and carol both have two stories; alice registered first.
    assert_eq!(inv.most_stories(), Some("alice"));
}

#[test]
fn test_most_active_breaks_ties_by_registration_order() {
    let rat = build(DATASET);
    let inv = Investigator::new(&rat, IdentityTitles);
    assert_eq!(inv.most_active(), Some("carol"));
}

#[test]
fn test_most_popular_story() {
    let rat = build(DATASET);
    assert_eq!(
        Investigator::new(&rat, IdentityTitles).most_popular_story_id(),
        Some("s2")
    );
    assert_eq!(
        Investigator::new(&rat, titles()).most_popular_story(),
        Some("Story Two".to_string())
    );
}

#[test]
fn test_most_popular_story_tie_takes_first_listed() {
    let rat = build("h\nalice 1 1 2 s1,s2\n");
    let inv = Investigator::new(&rat, IdentityTitles);
    assert_eq!(inv.most_popular_story_id(), Some("s1"));
}

#[test]
fn test_zero_metrics_have_no_winner() {
    let rat = build("h\nalice 1 0 0\nbob 2 0 0\n");
    let inv = Investigator::new(&rat, IdentityTitles);
    assert_eq!(inv.most_stories(), None);
    assert_eq!(inv.most_active(), None);
    assert_eq!(inv.most_popular_story(), None);
}

#[test]
fn test_empty_graph() {
    let rat = RatGraph::new();
    let inv = Investigator::new(&rat, IdentityTitles);
    assert_eq!(inv.most_stories(), None);
    assert!(inv.largest_connected_component().is_empty());
    assert!(inv.central_nodes().is_empty());
    assert_eq!(inv.distance_sum("anything"), 0);
    assert_eq!(inv.report().largest_component_size, 0);
}

// ==================== Component Tests ====================

#[test]
fn test_largest_connected_component() {
    let rat = build(DATASET);
    let inv = Investigator::new(&rat, IdentityTitles);
    assert_eq!(
        inv.largest_connected_component(),
        strings(&["alice", "s1", "s2", "carol", "s3"])
    );
}

#[test]
fn test_largest_component_is_a_dfs_walk() {
    let rat = build(DATASET);
    let inv = Investigator::new(&rat, IdentityTitles);
    assert_eq!(inv.largest_connected_component(), rat.dfs("alice").unwrap());
    assert_eq!(rat.dfs("dan").unwrap(), strings(&["dan", "s4"]));
}

#[test]
fn test_dfs_from_absent_account_is_error() {
    let rat = build(DATASET);
    assert!(matches!(rat.dfs("mallory"), Err(RatError::VertexNotFound(_))));
    assert!(rat.bfs("mallory").is_empty());
}

// ==================== Distance Tests ====================

#[test]
fn test_diam_between_counts_level_switches() {
    let rat = build(DATASET);
    let inv = Investigator::new(&rat, IdentityTitles);
    // BFS from alice: alice, s1, s2, carol, s3.
    assert_eq!(inv.diam_between("alice", "s1"), 1);
    assert_eq!(inv.diam_between("alice", "s2"), 1);
    assert_eq!(inv.diam_between("alice", "carol"), 2);
    assert_eq!(inv.diam_between("alice", "s3"), 3);
}

#[test]
fn test_diam_between_self_is_zero() {
    let rat = build(DATASET);
    let inv = Investigator::new(&rat, IdentityTitles);
    for v in rat.graph().vertices() {
        assert_eq!(inv.diam_between(v, v), 0, "vertex {}", v);
    }
}

#[test]
fn test_diam_between_unreached_target_counts_whole_walk() {
    let rat = build(DATASET);
    let inv = Investigator::new(&rat, IdentityTitles);
    assert_eq!(inv.diam_between("alice", "dan"), 3);
    assert_eq!(inv.diam_between("alice", "nobody"), 3);
    assert_eq!(inv.diam_between("nobody", "alice"), 0);
}

#[test]
fn test_unregistered_vertex_does_not_switch_level() {
    let rat = build(DATASET);
    let inv = Investigator::new(&rat, IdentityTitles);
    assert_eq!(inv.diam_between("bob", "bob"), 0);
    assert_eq!(inv.diam_between("bob", "alice"), 0);
}

#[test]
fn test_distance_sum() {
    let rat = build(DATASET);
    let inv = Investigator::new(&rat, IdentityTitles);
    assert_eq!(inv.distance_sum("alice"), 7);
    assert_eq!(inv.distance_sum("s1"), 10);
    assert_eq!(inv.distance_sum("s2"), 6);
    assert_eq!(inv.distance_sum("carol"), 7);

    let component = inv.largest_connected_component();
    let by_pairs: usize = component
        .iter()
        .map(|m| inv.diam_between("carol", m))
        .sum();
    assert_eq!(inv.distance_sum("carol"), by_pairs);
}

// ==================== Centrality Tests ====================

#[test]
fn test_central_nodes_resolve_story_titles() {
    let rat = build(DATASET);
    assert_eq!(Investigator::new(&rat, IdentityTitles).central_nodes(), strings(&["s2"]));
    assert_eq!(Investigator::new(&rat, titles()).central_nodes(), strings(&["Story Two"]));
}

#[test]
fn test_central_nodes_keep_all_ties() {
    let rat = build("h\nu1 1 1 2 s1,s2\nu2 2 1 2 s1,s2\n");
    let inv = Investigator::new(&rat, IdentityTitles);
    assert_eq!(inv.central_nodes(), strings(&["u1", "s1", "u2", "s2"]));
}

#[test]
fn test_report() {
    let rat = build(DATASET);
    let report = Investigator::new(&rat, titles()).report();
    assert_eq!(report.most_stories.as_deref(), Some("alice"));
    assert_eq!(report.most_active.as_deref(), Some("carol"));
    assert_eq!(report.most_popular_story.as_deref(), Some("Story Two"));
    assert_eq!(report.largest_component_size, 5);
    assert_eq!(report.central_nodes, strings(&["Story Two"]));

    let text = report.to_string();
    assert!(text.contains("most stories is alice"));
    assert!(text.contains("largest connected component is 5"));
    assert!(text.contains("  Story Two"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["largest_component_size"], 5);
}

// ==================== Title Tests ====================

#[test]
fn test_identity_titles() {
    assert_eq!(IdentityTitles.resolve_title("123"), "123");
}

#[test]
fn test_title_table_falls_back_to_id() {
    let table = TitleTable::read_from(Cursor::new("s1\tFirst story\n\ns2\t Second \n")).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.resolve_title("s1"), "First story");
    assert_eq!(table.resolve_title("s2"), "Second");
    assert_eq!(table.resolve_title("s9"), "s9");
}

#[test]
fn test_title_table_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "s2\tStory Two").unwrap();
    file.flush().unwrap();
    let table = TitleTable::read_from_file(file.path()).unwrap();
    let rat = build(DATASET);
    assert_eq!(
        Investigator::new(&rat, &table).most_popular_story(),
        Some("Story Two".to_string())
    );
}

#[test]
fn test_title_table_rejects_line_without_tab() {
    assert!(matches!(
        TitleTable::read_from(Cursor::new("s1 no tab\n")),
        Err(RatError::Parse { line: 1, .. })
    ));
}
