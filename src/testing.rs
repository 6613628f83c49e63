/// Every graph should implement `GraphNodeOrder`, `GraphEdgeOrder` and `AdjacencyList`.
/// `$dir` is the `Direction` variant the generated tests build their graphs with.
macro_rules! test_graph_ops {
    ($env:ident, $dir:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{prelude::*, testing::test_graph_ops};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            const DIRECTION: Direction = Direction::$dir;

            /// Creates a list of `m` random weighted edges for nodes `0..n` (parallel edges and loops included)
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<(Node, Node, i64)> {
                (0..m).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    (u, v, rng.random_range(-5..20))
                }).collect_vec()
            }

            $(
                test_graph_ops!($dir: $trait);
            )*
        }
    };
    ($dir:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = Graph::<i64>::new(n, DIRECTION);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.direction(), DIRECTION);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert!(graph.degrees().all(|d| d == 0));
                assert_eq!(graph.max_degree(), 0);
                assert!(graph.is_singleton_graph());
            }
        }
    };
    ($dir:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m as NumEdges);

                        let mut naive: Vec<Vec<(Node, i64)>> = vec![Vec::new(); n as usize];
                        for &(u, v, w) in &edges {
                            naive[u as usize].push((v, w));
                            if DIRECTION == Direction::Undirected {
                                naive[v as usize].push((u, w));
                            }
                        }

                        let graph = Graph::<i64>::from_edges(n, DIRECTION, edges.iter());

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), m);

                        for u in 0..n {
                            assert_eq!(graph.weighted_neighbors_of(u).collect_vec(), naive[u as usize]);
                            assert_eq!(graph.degree_of(u) as usize, naive[u as usize].len());
                        }
                        assert_eq!(
                            graph.max_degree() as usize,
                            naive.iter().map(Vec::len).max().unwrap_or(0)
                        );
                        assert!(!graph.is_singleton_graph());

                        let in_degs = graph.in_degrees();
                        let rev = graph.reverse_adjacency();
                        for v in 0..n {
                            assert_eq!(in_degs[v as usize] as usize, rev[v as usize].len());
                        }

                        let edge_list = graph.edge_list();
                        assert_eq!(edge_list.len(), edges.len());
                        for (e, &(u, v, w)) in edge_list.iter().zip(&edges) {
                            assert_eq!(e.weight, w);
                            if DIRECTION == Direction::Undirected {
                                assert_eq!(e.edge(), Edge(u, v).normalized());
                            } else {
                                assert_eq!(e.edge(), Edge(u, v));
                            }
                        }

                        let has_negative = edges.iter().any(|&(_, _, w)| w < 0);
                        assert_eq!(graph.has_negative_weight(), has_negative);
                    }
                }
            }
        }
    };
    ($dir:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(4);

            for n in [1 as NumNodes, 10, 20] {
                let mut graph = Graph::<i64>::new(n, DIRECTION);
                let mut m = 0;

                for _ in 0..(n * 5) {
                    let u = rng.random_range(0..2 * n);
                    let v = rng.random_range(0..2 * n);

                    let res = graph.try_add_edge(u, v, 1);
                    if u < n && v < n {
                        assert_eq!(res, Ok(m));
                        assert_eq!(*graph.edge(m), WeightedEdge::new(u, v, 1));
                        m += 1;
                    } else {
                        assert!(res.is_err());
                    }

                    assert_eq!(graph.number_of_edges(), m);
                }

                let entries: NumNodes = graph.degrees().sum();
                if DIRECTION == Direction::Undirected {
                    assert_eq!(entries, 2 * m);
                } else {
                    assert_eq!(entries, m);
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
