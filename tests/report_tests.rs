use dijkstra_trail::report::{format_path, LedgerTable};
use dijkstra_trail::{CostMatrix, Dijkstra, ShortestPathAlgorithm};

#[test]
fn test_table_layout() {
    let mut graph = CostMatrix::new(3);
    graph.set(0, 1, Some(1)).unwrap();

    let ledger = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    let table = LedgerTable::new(&ledger).to_string();

    let expected = [
        "                    Cum.    Prev",
        "   From:     To:   Cost:   Node:",
        "       0       0       0      -1 >>-->",
        "       0       1       1       0",
        "       0       2     inf      -1 >>-->",
    ];
    assert_eq!(table.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn test_format_path() {
    assert_eq!(format_path(&[0, 1, 2, 3]), "0 -> 1 -> 2 -> 3");
    assert_eq!(format_path(&[4]), "4");
    assert_eq!(format_path(&[]), "");
}
