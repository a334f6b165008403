use bairros_graphlib::{EdgeKey, Graph};

#[test]
fn edges_are_symmetric() {
    let mut g: Graph<(), i32> = Graph::new();

    g.set_edge_with_label("b", "a", 7);

    assert!(g.has_edge("a", "b"));
    assert!(g.has_edge("b", "a"));
    assert_eq!(g.edge("a", "b"), Some(&7));
    assert_eq!(g.edge("b", "a"), Some(&7));
}

#[test]
fn setting_the_same_pair_twice_keeps_a_single_edge() {
    let mut g: Graph = Graph::new();
    g.set_edge("a", "b");
    g.set_edge("b", "a");
    g.set_edge("a", "b");

    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.node_count(), 2);
}

#[test]
fn relabeling_an_existing_edge_updates_in_place() {
    let mut g: Graph<(), &str> = Graph::new();
    g.set_edge_with_label("a", "b", "first");
    g.set_edge_with_label("b", "a", "second");
    g.set_edge("a", "b");

    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.edge("a", "b"), Some(&"second"));

    if let Some(label) = g.edge_mut("b", "a") {
        *label = "third";
    }
    assert_eq!(g.edge("a", "b"), Some(&"third"));
}

#[test]
fn edge_endpoints_are_added_as_nodes() {
    let mut g: Graph = Graph::new();
    g.set_node("z", ());
    g.set_edge("y", "x");

    assert!(g.has_node("x"));
    assert!(g.has_node("y"));
    assert_eq!(g.nodes().collect::<Vec<_>>(), vec!["z", "x", "y"]);
}

#[test]
fn edge_keys_are_canonicalized() {
    let mut g: Graph = Graph::new();
    g.set_edge("c", "b");
    g.set_edge("a", "c");

    let keys: Vec<&EdgeKey> = g.edges().collect();
    assert_eq!(keys.len(), 2);
    assert_eq!((keys[0].v.as_str(), keys[0].w.as_str()), ("b", "c"));
    assert_eq!((keys[1].v.as_str(), keys[1].w.as_str()), ("a", "c"));
    assert_eq!(EdgeKey::new("q", "p"), EdgeKey::new("p", "q"));
}

#[test]
fn set_path_connects_consecutive_nodes_only() {
    let mut g: Graph = Graph::new();
    g.set_path(&["a", "b", "c", "d"]);

    assert_eq!(g.edge_count(), 3);
    assert!(g.has_edge("a", "b"));
    assert!(g.has_edge("b", "c"));
    assert!(g.has_edge("c", "d"));
    assert!(!g.has_edge("a", "c"));
    assert!(!g.has_edge("a", "d"));

    g.set_path(&["x"]);
    g.set_path(&[]);
    assert_eq!(g.edge_count(), 3);
}

#[test]
fn neighbors_and_node_edges_cover_both_orientations() {
    let mut g: Graph = Graph::new();
    g.set_edge("a", "b");
    g.set_edge("c", "b");

    let mut neigh = g.neighbors("b");
    neigh.sort();
    assert_eq!(neigh, vec!["a", "c"]);
    assert_eq!(g.node_edges("b").len(), 2);
    assert!(g.neighbors("missing").is_empty());
}

#[test]
fn degree_counts_distinct_incident_edges() {
    let mut g: Graph = Graph::new();
    g.set_path(&["a", "b", "c"]);
    g.set_path(&["c", "b", "a"]);
    g.set_edge("b", "d");

    assert_eq!(g.degree("a"), 1);
    assert_eq!(g.degree("b"), 3);
    assert_eq!(g.degree("c"), 1);
    assert_eq!(g.degree("d"), 1);
    assert_eq!(g.degree("missing"), 0);
}

#[test]
fn self_loops_count_twice_toward_degree() {
    let mut g: Graph = Graph::new();
    g.set_edge("a", "a");
    g.set_edge("a", "b");

    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.degree("a"), 3);
    assert_eq!(g.neighbors("a"), vec!["a", "b"]);
    assert!(g.edges().next().is_some_and(|e| e.is_self_loop()));
}

#[test]
fn degrees_follow_node_insertion_order() {
    let mut g: Graph = Graph::new();
    for id in ["a", "b", "c", "d"] {
        g.ensure_node(id);
    }
    g.set_path(&["a", "b", "c"]);
    g.set_edge("b", "d");

    assert_eq!(g.degrees(), vec![("a", 1), ("b", 3), ("c", 1), ("d", 1)]);
}

#[test]
fn node_labels_survive_ensure_node() {
    let mut g: Graph<u32, ()> = Graph::new();
    g.set_node("a", 5);
    g.ensure_node("a");
    assert_eq!(g.node("a"), Some(&5));

    if let Some(label) = g.node_mut("a") {
        *label += 1;
    }
    assert_eq!(g.node("a"), Some(&6));
    assert_eq!(g.node("missing"), None);
}

#[test]
fn for_each_edge_visits_labels_in_insertion_order() {
    let mut g: Graph<(), u8> = Graph::new();
    g.set_edge_with_label("a", "b", 1);
    g.set_edge_with_label("b", "c", 2);

    let mut seen = Vec::new();
    g.for_each_edge(|k, l| seen.push((k.v.clone(), k.w.clone(), *l)));
    assert_eq!(
        seen,
        vec![
            ("a".to_string(), "b".to_string(), 1),
            ("b".to_string(), "c".to_string(), 2),
        ]
    );
}
