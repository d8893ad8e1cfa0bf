use dijkstra_trail::graph::loader::{
    parse_cost_matrix, parse_graph_json, read_cost_matrix, read_graph_json, EdgeRecord,
    GraphDocument,
};
use dijkstra_trail::graph::{Graph, MAX_DENSE_VERTICES};
use dijkstra_trail::{Dijkstra, DirectedGraph, Error, ShortestPathAlgorithm, DEFAULT_MAX_VERTICES};
use std::fs;
use std::path::PathBuf;

const DIAMOND: &str = "4
-1  1  4 -1
-1 -1  1  5
-1 -1 -1  1
-1 -1 -1 -1
";

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("dijkstra_trail_{}_{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_parse_text_matrix() {
    let graph = parse_cost_matrix(DIAMOND, DEFAULT_MAX_VERTICES).unwrap();

    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 5);
    assert_eq!(graph.get(0, 2).unwrap(), Some(4));
    assert_eq!(graph.get(2, 0).unwrap(), None);

    let ledger = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(ledger.distances(), &[Some(0), Some(1), Some(2), Some(3)]);
}

#[test]
fn test_truncated_text_is_an_error() {
    let result = parse_cost_matrix("3  1 2 3", DEFAULT_MAX_VERTICES);
    assert!(matches!(
        result,
        Err(Error::TruncatedInput {
            expected: 9,
            found: 3
        })
    ));
}

#[test]
fn test_vertex_count_must_be_in_range() {
    assert!(matches!(
        parse_cost_matrix("0", DEFAULT_MAX_VERTICES),
        Err(Error::VertexCountOutOfRange { count: 0, .. })
    ));
    assert!(matches!(
        parse_cost_matrix("", DEFAULT_MAX_VERTICES),
        Err(Error::VertexCountOutOfRange { count: 0, .. })
    ));
    assert!(matches!(
        parse_cost_matrix("3 -1 -1 -1 -1 -1 -1 -1 -1 -1", 3),
        Err(Error::VertexCountOutOfRange { count: 3, max: 3 })
    ));
    assert!(parse_cost_matrix("3 -1 -1 -1 -1 -1 -1 -1 -1 -1", 4).is_ok());
}

#[test]
fn test_bad_tokens() {
    assert!(matches!(
        parse_cost_matrix("2  1 x 3 4", DEFAULT_MAX_VERTICES),
        Err(Error::Parse { position: 2, ref token }) if token == "x"
    ));
    assert!(matches!(
        parse_cost_matrix("two", DEFAULT_MAX_VERTICES),
        Err(Error::Parse { position: 0, .. })
    ));
    assert!(matches!(
        parse_cost_matrix("-2", DEFAULT_MAX_VERTICES),
        Err(Error::Parse { position: 0, .. })
    ));
}

#[test]
fn test_negative_costs_other_than_no_edge_are_rejected() {
    assert!(matches!(
        parse_cost_matrix("2  -1 -5 -1 -1", DEFAULT_MAX_VERTICES),
        Err(Error::NegativeWeight { from: 0, to: 1 })
    ));
}

#[test]
fn test_trailing_tokens_are_ignored() {
    let graph = parse_cost_matrix("1  0  7 8 9", DEFAULT_MAX_VERTICES).unwrap();
    assert_eq!(graph.get(0, 0).unwrap(), Some(0));
}

#[test]
fn test_read_text_file() {
    let path = temp_file("diamond.txt", DIAMOND);
    let graph = read_cost_matrix(&path, DEFAULT_MAX_VERTICES).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(graph.edge_count(), 5);
}

#[test]
fn test_missing_file() {
    let path = std::env::temp_dir().join("dijkstra_trail_does_not_exist.txt");
    assert!(matches!(
        read_cost_matrix(&path, DEFAULT_MAX_VERTICES),
        Err(Error::Io(_))
    ));
}

#[test]
fn test_parse_json_graph() {
    let input = r#"{
        "vertex_count": 4,
        "edges": [
            { "from": 0, "to": 1, "cost": 1 },
            { "from": 0, "to": 2, "cost": 4 },
            { "from": 1, "to": 2, "cost": 1 },
            { "from": 1, "to": 3, "cost": 5 },
            { "from": 2, "to": 3, "cost": 1 }
        ]
    }"#;
    let graph = parse_graph_json(input, DEFAULT_MAX_VERTICES).unwrap();

    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.get_edge_weight(1, 3), Some(5));

    let ledger = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(ledger.path_to(3).unwrap(), Some(vec![0, 1, 2, 3]));
}

#[test]
fn test_json_validation() {
    assert!(matches!(
        parse_graph_json(r#"{"vertex_count": 2, "edges": [{"from": 0, "to": 2, "cost": 1}]}"#, 10),
        Err(Error::VertexOutOfRange { vertex: 2, .. })
    ));
    assert!(matches!(
        parse_graph_json(r#"{"vertex_count": 2, "edges": [{"from": 0, "to": 1, "cost": -1}]}"#, 10),
        Err(Error::NegativeWeight { from: 0, to: 1 })
    ));
    assert!(matches!(
        parse_graph_json(r#"{"vertex_count": 0}"#, 10),
        Err(Error::VertexCountOutOfRange { count: 0, .. })
    ));
    assert!(matches!(
        parse_graph_json(r#"{"edges": []}"#, 10),
        Err(Error::Json(_))
    ));

    let isolated = parse_graph_json(r#"{"vertex_count": 3}"#, 10).unwrap();
    assert_eq!(isolated.edge_count(), 0);
}

#[test]
fn test_document_from_graph() {
    let graph = parse_cost_matrix(DIAMOND, DEFAULT_MAX_VERTICES).unwrap();
    let document = GraphDocument::from_graph(&graph);

    assert_eq!(document.vertex_count, 4);
    assert_eq!(document.edges.len(), 5);
    assert_eq!(
        document.edges[0],
        EdgeRecord {
            from: 0,
            to: 1,
            cost: 1
        }
    );

    let path = temp_file("diamond.json", &serde_json::to_string(&document).unwrap());
    let sparse: DirectedGraph<i64> = read_graph_json(&path, DEFAULT_MAX_VERTICES).unwrap();
    fs::remove_file(&path).unwrap();

    for u in 0..4 {
        assert_eq!(
            sparse.outgoing_edges(u).collect::<Vec<_>>(),
            graph.outgoing_edges(u).collect::<Vec<_>>()
        );
    }
}

#[test]
fn test_huge_vertex_count_with_a_raised_bound() {
    let input = MAX_DENSE_VERTICES.to_string();
    assert!(matches!(
        parse_cost_matrix(&input, usize::MAX),
        Err(Error::VertexCountOutOfRange { count, .. }) if count == MAX_DENSE_VERTICES
    ));
}
