use costar::graph::{EdgeLabel, GraphStore};
use costar::{DataSources, GraphError, RankBy, Universe};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// A - B - C with A - D, E isolated. A-B and B-C from M1, A-D from M2.
fn small_universe() -> Universe {
    let mut store = GraphStore::new();
    store.insert_undirected_edge("A", "B", EdgeLabel::single("M1"));
    store.insert_undirected_edge("B", "C", EdgeLabel::single("M1"));
    store.insert_undirected_edge("A", "D", EdgeLabel::single("M2"));
    store.insert_vertex("E");
    Universe::new(store)
}

fn names<'a>(vertices: impl IntoIterator<Item = &'a costar::Vertex>) -> Vec<&'a str> {
    vertices.into_iter().map(|v| v.as_str()).collect()
}

fn write_sources(dir: &Path, people: &str, works: &str, casts: &str) -> DataSources {
    let sources = DataSources::in_dir(dir);
    fs::write(&sources.people, people).unwrap();
    fs::write(&sources.works, works).unwrap();
    fs::write(&sources.casts, casts).unwrap();
    sources
}

#[test]
fn test_paths_from_tree() {
    let universe = small_universe();
    let tree = universe.build_tree("A").unwrap();

    assert_eq!(names(tree.path_to("C")), vec!["A", "B", "C"]);
    assert_eq!(names(tree.path_to("D")), vec!["A", "D"]);
    assert_eq!(names(tree.path_to("A")), vec!["A"]);
    assert!(tree.path_to("E").is_empty());
    assert!(tree.path_to("Nobody").is_empty());

    assert_eq!(tree.separation_of("C"), Some(2));
    assert_eq!(tree.separation_of("E"), None);
    assert_eq!(tree.average_separation(), 1.0);
}

#[test]
fn test_path_labels() {
    let universe = small_universe();
    let tree = universe.build_tree("A").unwrap();

    let links = tree.links_to("C");
    let hops: Vec<(&str, &str)> = links.iter().map(|l| (l.from.as_str(), l.to.as_str())).collect();
    assert_eq!(hops, vec![("C", "B"), ("B", "A")]);
    for link in &links {
        assert!(link.label.contains("M1"));
    }
}

#[test]
fn test_path_properties_hold_for_every_root() {
    let universe = small_universe();
    let store = universe.store();

    for root in store.vertices() {
        let tree = universe.build_tree(root.as_str()).unwrap();

        for target in store.vertices() {
            let path = tree.path_to(target.as_str());
            match tree.separation_of(target.as_str()) {
                None => assert!(path.is_empty()),
                Some(d) => {
                    // Starts at the root, ends at the target, one edge per hop
                    assert_eq!(path.len(), d + 1);
                    assert_eq!(path[0], root);
                    assert_eq!(path[path.len() - 1], target);
                    for pair in path.windows(2) {
                        assert!(store.has_edge(pair[0].as_str(), pair[1].as_str()));
                    }
                }
            }
        }

        // Reachable and missing partition the vertex set
        let reachable: BTreeSet<&str> = tree.vertices().map(|v| v.as_str()).collect();
        let missing: BTreeSet<&str> = tree.missing().into_iter().map(|v| v.as_str()).collect();
        assert!(reachable.is_disjoint(&missing));
        assert_eq!(reachable.len() + missing.len(), store.vertex_count());
    }
}

#[test]
fn test_separation_is_symmetric() {
    let universe = small_universe();
    let vertices: Vec<&str> = universe.store().vertices().map(|v| v.as_str()).collect();

    for &a in &vertices {
        let from_a = universe.build_tree(a).unwrap();
        for &b in &vertices {
            let from_b = universe.build_tree(b).unwrap();
            assert_eq!(from_a.separation_of(b), from_b.separation_of(a));
        }
    }
}

#[test]
fn test_unknown_root() {
    let universe = small_universe();
    assert_eq!(
        universe.build_tree("Nobody").unwrap_err(),
        GraphError::InvalidRoot("Nobody".to_string())
    );
}

#[test]
fn test_ranking_examples() {
    let universe = small_universe();

    let by_degree = universe.top_k_by_degree(1, "C").unwrap();
    assert_eq!(names(by_degree.iter().map(|s| s.key)), vec!["B"]);

    let by_separation = universe.top_k_by_average_separation(2, "C").unwrap();
    assert_eq!(names(by_separation.iter().map(|s| s.key)), vec!["B", "A"]);
    assert!((by_separation[0].score - 1.0).abs() < 1e-9);
    assert!((by_separation[1].score - 1.0).abs() < 1e-9);

    // Isolated vertices are never candidates for someone else
    let everyone = universe.rank(RankBy::Separation, 10, "C").unwrap();
    assert!(everyone.iter().all(|s| s.key.as_str() != "E"));
    assert_eq!(everyone.len(), 4);
}

#[test]
fn test_ranking_results_are_reachable_from_target() {
    let universe = small_universe();
    let store = universe.store();

    for target in store.vertices() {
        let tree = universe.build_tree(target.as_str()).unwrap();
        for by in [RankBy::Separation, RankBy::Degree] {
            let ranked = universe.rank(by, 3, target.as_str()).unwrap();
            assert!(ranked.len() <= 3);
            for entry in &ranked {
                assert!(tree.contains(entry.key.as_str()));
            }
        }
    }
}

#[test]
fn test_load_from_files() {
    let dir = tempdir().unwrap();
    let sources = write_sources(
        dir.path(),
        "p1|Alice\np2|Bob\np3|Carol\np4|Dave\n",
        "m1|Heat\nm2|Ronin\n",
        "m1|p1\nm1|p2\nm2|p2\nm2|p3\nm2|p1\n\nbroken line\n",
    );

    let universe = Universe::load(&sources).unwrap();
    let store = universe.store();

    assert_eq!(store.vertex_count(), 4);
    assert_eq!(store.edge_count(), 3);
    assert!(store.has_edge("Alice", "Bob"));
    assert!(store.has_edge("Bob", "Carol"));

    let label = store.label("Alice", "Bob").unwrap();
    assert!(label.contains("Heat"));
    assert!(label.contains("Ronin"));
    assert_eq!(label.len(), 2);

    let tree = universe.build_tree("Carol").unwrap();
    assert_eq!(names(tree.missing()), vec!["Dave"]);
    assert_eq!(tree.separation_of("Alice"), Some(1));
}

#[test]
fn test_load_missing_source_is_fatal() {
    let dir = tempdir().unwrap();
    let sources = DataSources::in_dir(dir.path());
    assert!(Universe::load(&sources).is_err());
}
