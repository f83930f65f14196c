use courseplan::schedule::DirectedGraph;

fn abc_graph() -> DirectedGraph<String> {
    let mut graph = DirectedGraph::new();
    for v in ["A", "B", "C"] {
        graph.add_vertex(v.to_string());
    }
    graph
}

#[test]
fn add_vertex_ignores_duplicates() {
    let mut graph: DirectedGraph<String> = DirectedGraph::new();
    assert!(graph.is_empty());

    assert!(graph.add_vertex("A".to_string()));
    assert!(!graph.add_vertex("A".to_string()));

    assert_eq!(graph.order(), 1);
    assert!(graph.has_vertex("A"));
    assert!(!graph.has_vertex("B"));
}

#[test]
fn add_edge_requires_both_endpoints() {
    let mut graph = abc_graph();
    let a = "A".to_string();
    let missing = "Z".to_string();

    assert!(!graph.add_edge(&a, &missing));
    assert!(!graph.add_edge(&missing, &a));
    assert_eq!(graph.size(), 0);
    assert!(!graph.has_vertex("Z"));
}

#[test]
fn duplicate_edges_are_rejected() {
    let mut graph = abc_graph();
    let (a, b) = ("A".to_string(), "B".to_string());

    assert!(graph.add_edge(&a, &b));
    assert!(!graph.add_edge(&a, &b));
    assert_eq!(graph.size(), 1);

    // The reverse direction is a different edge.
    assert!(graph.add_edge(&b, &a));
    assert_eq!(graph.size(), 2);
    assert!(graph.has_edge("A", "B"));
    assert!(graph.has_edge("B", "A"));
}

#[test]
fn adjacency_keeps_insertion_order() {
    let mut graph = abc_graph();
    let (a, b, c) = ("A".to_string(), "B".to_string(), "C".to_string());

    graph.add_edge(&a, &c);
    graph.add_edge(&a, &b);

    assert_eq!(
        graph.adjacent_vertices_of("A"),
        Some(&["C".to_string(), "B".to_string()][..])
    );
    assert_eq!(graph.adjacent_vertices_of("B").map(<[String]>::len), Some(0));
    assert_eq!(graph.adjacent_vertices_of("Z"), None);
}

#[test]
fn remove_edge_only_touches_existing_edges() {
    let mut graph = abc_graph();
    let (a, b, c) = ("A".to_string(), "B".to_string(), "C".to_string());
    graph.add_edge(&a, &b);
    graph.add_edge(&a, &c);

    assert!(!graph.remove_edge(&b, &a));
    assert!(!graph.remove_edge(&a, &"Z".to_string()));
    assert!(graph.remove_edge(&a, &b));
    assert!(!graph.remove_edge(&a, &b));

    assert_eq!(graph.adjacent_vertices_of("A"), Some(&[c][..]));
    assert_eq!(graph.size(), 1);
}

#[test]
fn remove_vertex_drops_outgoing_edges_only() {
    let mut graph = abc_graph();
    let (a, b, c) = ("A".to_string(), "B".to_string(), "C".to_string());
    graph.add_edge(&a, &b);
    graph.add_edge(&b, &c);

    assert!(graph.remove_vertex("B"));
    assert!(!graph.remove_vertex("B"));

    assert_eq!(graph.order(), 2);
    assert_eq!(graph.adjacent_vertices_of("B"), None);
    // A still points at the removed vertex.
    assert!(graph.has_edge("A", "B"));
    assert_eq!(graph.size(), 1);
}

#[test]
fn all_vertices_and_edges_enumerate_graph() {
    let mut graph = abc_graph();
    let (a, b, c) = ("A".to_string(), "B".to_string(), "C".to_string());
    graph.add_edge(&a, &b);
    graph.add_edge(&a, &c);
    graph.add_edge(&b, &c);

    let vertices = graph.all_vertices();
    assert_eq!(vertices.len(), 3);
    assert!(vertices.contains(&b));

    let mut edges: Vec<(&String, &String)> = graph.edges().collect();
    edges.sort();
    assert_eq!(edges, vec![(&a, &b), (&a, &c), (&b, &c)]);
    assert_eq!(graph.get_vertex("C"), Some(&c));
}

#[test]
fn display_lists_edges_in_sorted_vertex_order() {
    let mut graph = abc_graph();
    let (a, b, c) = ("A".to_string(), "B".to_string(), "C".to_string());
    graph.add_edge(&b, &c);
    graph.add_edge(&a, &c);
    graph.add_edge(&a, &b);

    assert_eq!(graph.to_string(), "A -> C\nA -> B\nB -> C\nC -> \n");
}

#[test]
fn works_with_non_string_vertices() {
    let mut graph: DirectedGraph<u32> = DirectedGraph::new();
    for v in 1..=4 {
        graph.add_vertex(v);
    }
    graph.add_edge(&1, &2);
    graph.add_edge(&1, &3);
    graph.add_edge(&3, &4);
    graph.add_edge(&3, &4);

    assert_eq!(graph.order(), 4);
    assert_eq!(graph.size(), 3);
    assert_eq!(graph.adjacent_vertices_of(&1u32), Some(&[2, 3][..]));
}
