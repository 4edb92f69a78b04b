use super::*;

/// Renumber component ids by first occurrence so partitions can be
/// compared across strategies that may enumerate in different orders.
fn canonical(ids: &[usize]) -> Vec<usize> {
    let mut map = std::collections::HashMap::new();
    let mut next = 0;
    ids.iter()
        .map(|&c| {
            *map.entry(c).or_insert_with(|| {
                let id = next;
                next += 1;
                id
            })
        })
        .collect()
}

#[test]
fn test_graph_basics() {
    let mut graph = Graph::new(4, "basics").unwrap();
    assert_eq!(graph.vertices(), 4);
    assert_eq!(graph.edges(), 0);
    assert_eq!(graph.label(), "basics");

    graph.add_edge(0, 1).unwrap();
    graph.add_edge(1, 2).unwrap();
    graph.add_edge(1, 3).unwrap();

    assert_eq!(graph.edges(), 3);
    // insertion order preserved
    assert_eq!(graph.neighbors(1).unwrap(), &[0, 2, 3]);
    assert_eq!(graph.neighbors(0).unwrap(), &[1]);
    assert_eq!(graph.degree(1).unwrap(), 3);
    assert_eq!(graph.degree(3).unwrap(), 1);
}

#[test]
fn test_graph_negative_vertex_count() {
    let res = Graph::new(-1, "bad");
    assert!(matches!(
        res,
        Err(GraphError::InvalidArgument { value: -1, .. })
    ));
}

#[test]
fn test_graph_out_of_range() {
    let mut graph = Graph::new(3, "range").unwrap();

    let res = graph.add_edge(0, 3);
    assert_eq!(res, Err(GraphError::OutOfRange { vertex: 3, bound: 3 }));
    // the failed call must not mutate anything
    assert_eq!(graph.edges(), 0);
    assert_eq!(graph.degree(0).unwrap(), 0);

    assert_eq!(
        graph.degree(5),
        Err(GraphError::OutOfRange { vertex: 5, bound: 3 })
    );
    assert!(graph.neighbors(3).is_err());
}

#[test]
fn test_graph_self_loop_and_parallel_edges() {
    let mut graph = Graph::new(2, "multi").unwrap();

    graph.add_edge(0, 0).unwrap();
    assert_eq!(graph.degree(0).unwrap(), 2);
    assert_eq!(graph.neighbors(0).unwrap(), &[0, 0]);

    // parallel edges increase degree, no deduplication
    graph.add_edge(0, 1).unwrap();
    graph.add_edge(0, 1).unwrap();
    assert_eq!(graph.edges(), 3);
    assert_eq!(graph.degree(0).unwrap(), 4);
    assert_eq!(graph.degree(1).unwrap(), 2);
}

#[test]
fn test_graph_handshake() {
    let mut graph = Graph::new(6, "handshake").unwrap();
    graph.add_edge(0, 1).unwrap();
    graph.add_edge(1, 2).unwrap();
    graph.add_edge(2, 2).unwrap();
    graph.add_edge(4, 5).unwrap();
    graph.add_edge(4, 5).unwrap();

    let total: usize = (0..graph.vertices())
        .map(|v| graph.degree(v).unwrap())
        .sum();
    assert_eq!(total, 2 * graph.edges());
}

#[test]
fn test_components_empty_graph() {
    let graph = Graph::new(0, "empty").unwrap();
    let result = graph.components();
    assert_eq!(result.count(), 0);
    assert!(result.ids().is_empty());
    assert!(result.sizes().is_empty());
}

#[test]
fn test_components_isolated_vertices() {
    let graph = Graph::new(5, "isolated").unwrap();
    for search in [&RecursiveDfs as &dyn ComponentSearch, &FrontierSearch] {
        let result = search.run(&graph);
        assert_eq!(result.count(), 5);
        assert_eq!(result.ids(), &[0, 1, 2, 3, 4]);
        assert_eq!(result.sizes(), &[1, 1, 1, 1, 1]);
    }
}

/// One DNA strand of six blocks: rotation edges plus standard blocks
/// close a single 12-cycle.
fn gene_a() -> Graph {
    let mut graph = Graph::new(12, "geneA").unwrap();
    for (v, w) in [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 0)] {
        graph.add_edge(v, w).unwrap();
    }
    // standard blocks
    for (v, w) in [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11)] {
        graph.add_edge(v, w).unwrap();
    }
    graph
}

/// Two strands of lengths 4 and 2 built as one graph.
fn gene_b() -> Graph {
    let mut graph = Graph::new(12, "geneB").unwrap();
    for (v, w) in [(1, 5), (4, 11), (10, 9), (8, 0), (3, 7), (6, 2)] {
        graph.add_edge(v, w).unwrap();
    }
    // standard blocks
    for (v, w) in [(0, 1), (2, 3), (5, 4), (7, 6), (9, 8), (11, 10)] {
        graph.add_edge(v, w).unwrap();
    }
    graph
}

/// Breakpoint overlay of geneA's and geneB's rotation edges.
fn gene_ab() -> Graph {
    let mut graph = Graph::new(12, "geneAB").unwrap();
    for (v, w) in [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 0)] {
        graph.add_edge(v, w).unwrap();
    }
    for (v, w) in [(1, 5), (4, 11), (10, 9), (8, 0), (3, 7), (6, 2)] {
        graph.add_edge(v, w).unwrap();
    }
    graph
}

#[test]
fn test_components_gene_a() {
    let graph = gene_a();
    assert_eq!(graph.edges(), 12);

    let result = graph.components();
    assert_eq!(result.count(), 1);
    assert_eq!(result.sizes(), &[12]);
}

#[test]
fn test_components_gene_b() {
    let graph = gene_b();

    let result = graph.components();
    assert_eq!(result.count(), 2);
    assert_eq!(result.sizes(), &[8, 4]);
    // 0 and 8 share a strand, 2 and 6 the other
    assert_eq!(result.component_of(0), result.component_of(8));
    assert_eq!(result.component_of(2), result.component_of(6));
    assert_ne!(result.component_of(0), result.component_of(2));
}

#[test]
fn test_components_gene_ab() {
    let graph = gene_ab();

    let result = graph.components();
    assert_eq!(result.count(), 3);
    assert_eq!(result.sizes(), &[6, 4, 2]);
}

#[test]
fn test_strategies_agree() {
    for graph in [gene_a(), gene_b(), gene_ab()] {
        let rec = RecursiveDfs.run(&graph);
        let iter = FrontierSearch.run(&graph);

        assert_eq!(rec.count(), iter.count());
        let mut rec_sizes = rec.sizes().to_vec();
        let mut iter_sizes = iter.sizes().to_vec();
        rec_sizes.sort_unstable();
        iter_sizes.sort_unstable();
        assert_eq!(rec_sizes, iter_sizes);
        assert_eq!(canonical(rec.ids()), canonical(iter.ids()));
    }
}

#[test]
fn test_components_idempotent() {
    let graph = gene_ab();

    let first = graph.components();
    let second = graph.components();
    assert_eq!(first, second);

    let rec_first = RecursiveDfs.run(&graph);
    let rec_second = RecursiveDfs.run(&graph);
    assert_eq!(rec_first, rec_second);
}
