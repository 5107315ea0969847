use ahash::{HashMap, HashMapExt};
use label_paths::{
    graphs::{Distance, Graph},
    search::{
        batch::shortest_paths,
        dijkstra::{single_source, Dijkstra},
        path::{validate_path, ShortestPathRequest},
    },
    LabelGraph, Vertex, Weight, WeightedEdge,
};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

fn random_graph(
    rng: &mut StdRng,
    number_of_vertices: usize,
    number_of_edges: usize,
) -> LabelGraph {
    let vertices: Vec<Vertex> = (0..number_of_vertices)
        .map(|index| Vertex::new(format!("v{}", index)).unwrap())
        .collect();

    let mut weights: HashMap<(usize, usize), Weight> = HashMap::new();
    let mut edges = Vec::new();
    for _ in 0..number_of_edges {
        let tail = rng.gen_range(0..number_of_vertices);
        let head = rng.gen_range(0..number_of_vertices);
        // Repeated endpoints reuse the first weight so that construction
        // accepts them as equal parallel edges.
        let weight = *weights
            .entry((tail, head))
            .or_insert_with(|| rng.gen_range(0..20));
        edges.push(WeightedEdge::from_vertices(
            vertices[tail].clone(),
            vertices[head].clone(),
            weight,
        ));
    }

    LabelGraph::new(&vertices, &edges).unwrap()
}

/// Distances from `source` by relaxing every edge until nothing changes.
fn bellman_ford(graph: &LabelGraph, source: &str) -> HashMap<String, Distance> {
    let mut distances = HashMap::new();
    distances.insert(source.to_string(), 0);

    let edges = graph.edges();
    let mut changed = true;
    while changed {
        changed = false;
        for edge in edges.iter() {
            let Some(&distance_tail) = distances.get(edge.tail().label()) else {
                continue;
            };
            let alternative = distance_tail + Distance::from(edge.weight());
            let current = distances.get(edge.head().label()).copied();
            if current.map_or(true, |current| alternative < current) {
                distances.insert(edge.head().label().to_string(), alternative);
                changed = true;
            }
        }
    }

    distances
}

#[test]
fn dijkstra_matches_bellman_ford() {
    let mut rng = StdRng::seed_from_u64(42);

    for (number_of_vertices, number_of_edges) in [(1, 3), (5, 4), (12, 30), (40, 120), (60, 400)] {
        let graph = random_graph(&mut rng, number_of_vertices, number_of_edges);

        for source in graph.vertices() {
            let expected = bellman_ford(&graph, source.label());

            for target in graph.vertices() {
                let path = graph.shortest_path(source.label(), target.label()).unwrap();

                match (path, expected.get(target.label())) {
                    (Some(path), Some(&distance)) => {
                        assert_eq!(path.distance(), distance);
                        let request = ShortestPathRequest::new(source.label(), target.label());
                        validate_path(&graph, &request, &path).unwrap();
                    }
                    (None, None) => {}
                    (path, distance) => panic!(
                        "{} -> {}: dijkstra found {:?}, expected {:?}",
                        source, target, path, distance
                    ),
                }
            }
        }
    }
}

#[test]
fn single_source_matches_bellman_ford() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = random_graph(&mut rng, 30, 90);

    for source in graph.vertices() {
        let data = single_source(&graph, source.label()).unwrap();
        let distances: HashMap<String, Distance> = data
            .distances()
            .map(|(vertex, distance)| (vertex.to_string(), distance))
            .collect();

        assert_eq!(distances, bellman_ford(&graph, source.label()));
    }
}

#[test]
fn adjacency_matches_edges() {
    let mut rng = StdRng::seed_from_u64(3);
    let graph = random_graph(&mut rng, 20, 80);

    for edge in graph.edges() {
        let (tail, head) = (edge.tail().label(), edge.head().label());
        assert!(graph.adjacent_vertices(tail).unwrap().contains(edge.head()));
        assert_eq!(graph.edge_cost(tail, head), Ok(edge.weight()));
        assert_eq!(graph.get_weight(tail, head), Some(edge.weight()));
    }

    let number_of_out_edges: usize = graph
        .vertices()
        .iter()
        .map(|vertex| graph.adjacent_vertices(vertex.label()).unwrap().len())
        .sum();
    assert_eq!(number_of_out_edges, graph.number_of_edges() as usize);
}

#[test]
fn query_order_does_not_matter() {
    let mut rng = StdRng::seed_from_u64(11);
    let graph = random_graph(&mut rng, 25, 60);
    let vertices = graph.vertices();

    let mut requests: Vec<ShortestPathRequest> = (0..200)
        .map(|_| {
            let source = vertices.choose(&mut rng).unwrap();
            let target = vertices.choose(&mut rng).unwrap();
            ShortestPathRequest::new(source.label(), target.label())
        })
        .collect();

    let answer = |requests: &[ShortestPathRequest]| {
        requests
            .iter()
            .map(|request| {
                let path = graph.shortest_path(&request.source, &request.target);
                (request.clone(), path)
            })
            .collect::<HashMap<_, _>>()
    };

    let forward = answer(&requests);
    requests.reverse();
    let backward = answer(&requests);
    requests.shuffle(&mut rng);
    let shuffled = answer(&requests);

    assert_eq!(forward, backward);
    assert_eq!(forward, shuffled);

    let dijkstra = Dijkstra::new(&graph);
    for (request, result) in requests.iter().zip(shortest_paths(&dijkstra, &requests)) {
        assert_eq!(forward[request], result);
    }
}
