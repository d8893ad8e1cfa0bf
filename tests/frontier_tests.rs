use dijkstra_trail::data_structures::Frontier;

#[test]
fn test_extracts_by_key_then_vertex() {
    let mut frontier = Frontier::new(6);
    frontier.insert(5, 3);
    frontier.insert(2, 1);
    frontier.insert(4, 1);
    frontier.insert(0, 3);
    frontier.insert(1, 2);

    let mut order = Vec::new();
    while let Some((vertex, key)) = frontier.extract_min() {
        order.push((vertex, key));
    }

    assert_eq!(order, vec![(2, 1), (4, 1), (1, 2), (0, 3), (5, 3)]);
    assert!(frontier.is_empty());
}

#[test]
fn test_membership() {
    let mut frontier = Frontier::new(3);
    assert!(!frontier.contains(1));

    frontier.insert(1, 10);
    assert!(frontier.contains(1));
    assert_eq!(frontier.peek_min(), Some((1, 10)));
    assert_eq!(frontier.len(), 1);

    assert_eq!(frontier.extract_min(), Some((1, 10)));
    assert!(!frontier.contains(1));
    assert_eq!(frontier.peek_min(), None);
    assert!(!frontier.contains(99));
}

#[test]
fn test_remove() {
    let mut frontier = Frontier::new(4);
    frontier.insert(0, 5);
    frontier.insert(3, 1);

    assert!(frontier.remove(3));
    assert!(!frontier.remove(3));
    assert!(!frontier.remove(2));
    assert!(!frontier.remove(42));

    assert_eq!(frontier.len(), 1);
    assert_eq!(frontier.peek_min(), Some((0, 5)));
}

#[test]
fn test_reinsert_rekeys() {
    let mut frontier = Frontier::new(3);
    frontier.insert(0, 8);
    frontier.insert(1, 5);
    frontier.insert(0, 2);

    assert_eq!(frontier.len(), 2);
    assert_eq!(frontier.extract_min(), Some((0, 2)));
    assert_eq!(frontier.extract_min(), Some((1, 5)));
    assert_eq!(frontier.extract_min(), None);
}

#[test]
fn test_empty_frontier() {
    let mut frontier: Frontier<i64> = Frontier::new(3);

    assert!(frontier.is_empty());
    assert_eq!(frontier.len(), 0);
    assert_eq!(frontier.peek_min(), None);
    assert_eq!(frontier.extract_min(), None);
}
