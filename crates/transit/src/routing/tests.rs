//! Unit tests for graph building and shortest-route search.

#[cfg(test)]
mod tests {
    use crate::lines::{Line, Section, Sections};
    use crate::routing::graph::NetworkGraph;
    use crate::routing::pathfinding::{shortest_route, RouteError};

    /// A line whose chain is built from `(up, down, distance)` triples.
    fn line(id: u32, surcharge: u32, sections: &[(u32, u32, u32)]) -> Line {
        let mut set = Sections::default();
        for &(up, down, distance) in sections {
            set.add(Section::new(up, down, distance)).unwrap();
        }
        Line {
            id,
            name: format!("Line {id}"),
            color: "bg-red-600".to_string(),
            surcharge,
            sections: set,
        }
    }

    #[test]
    fn test_graph_vertices_and_mirrored_edges() {
        let lines = vec![line(1, 0, &[(1, 2, 5), (2, 3, 5)])];
        let graph = NetworkGraph::from_lines(&lines);
        assert_eq!(graph.station_count(), 3);
        // one forward + one reverse edge per section
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_index_of_absent_station() {
        let graph = NetworkGraph::from_lines(&[line(1, 0, &[(1, 2, 5)])]);
        assert!(graph.index_of(9).is_none());
    }

    #[test]
    fn test_parallel_edges_are_retained() {
        let lines = vec![line(1, 0, &[(1, 2, 5)]), line(2, 0, &[(1, 2, 7)])];
        let graph = NetworkGraph::from_lines(&lines);
        assert_eq!(graph.station_count(), 2);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_cheapest_edge_picks_min_distance() {
        let lines = vec![line(1, 300, &[(1, 2, 7)]), line(2, 0, &[(1, 2, 5)])];
        let graph = NetworkGraph::from_lines(&lines);
        let from = graph.index_of(1).unwrap();
        let to = graph.index_of(2).unwrap();
        let edge = graph.cheapest_edge(from, to).unwrap();
        assert_eq!(edge.distance, 5);
        assert_eq!(edge.line, 2);
    }

    #[test]
    fn test_shortest_route_single_line() {
        let lines = vec![line(1, 0, &[(1, 2, 5), (2, 3, 7)])];
        let graph = NetworkGraph::from_lines(&lines);
        let route = shortest_route(&graph, 1, 3).unwrap();
        assert_eq!(route.stations, vec![1, 2, 3]);
        assert_eq!(route.total_distance, 12);
        assert_eq!(route.max_surcharge, 0);
    }

    #[test]
    fn test_routes_are_bidirectional() {
        let lines = vec![line(1, 0, &[(1, 2, 5), (2, 3, 7)])];
        let graph = NetworkGraph::from_lines(&lines);
        let route = shortest_route(&graph, 3, 1).unwrap();
        assert_eq!(route.stations, vec![3, 2, 1]);
        assert_eq!(route.total_distance, 12);
    }

    #[test]
    fn test_transfer_across_lines() {
        let lines = vec![line(1, 0, &[(1, 2, 5)]), line(2, 0, &[(2, 3, 5)])];
        let graph = NetworkGraph::from_lines(&lines);
        let route = shortest_route(&graph, 1, 3).unwrap();
        assert_eq!(route.stations, vec![1, 2, 3]);
        assert_eq!(route.total_distance, 10);
    }

    #[test]
    fn test_parallel_routes_choose_lower_distance() {
        // Direct 1→2 is 10 km on a surcharged line; the detour via 3 is
        // 8 km on a free line and must win, surcharge included.
        let lines = vec![
            line(1, 500, &[(1, 2, 10)]),
            line(2, 0, &[(1, 3, 5), (3, 2, 3)]),
        ];
        let graph = NetworkGraph::from_lines(&lines);
        let route = shortest_route(&graph, 1, 2).unwrap();
        assert_eq!(route.stations, vec![1, 3, 2]);
        assert_eq!(route.total_distance, 8);
        assert_eq!(route.max_surcharge, 0);
    }

    #[test]
    fn test_max_surcharge_over_used_lines() {
        let lines = vec![line(1, 300, &[(1, 2, 5)]), line(2, 900, &[(2, 3, 5)])];
        let graph = NetworkGraph::from_lines(&lines);
        let route = shortest_route(&graph, 1, 3).unwrap();
        assert_eq!(route.max_surcharge, 900);
    }

    #[test]
    fn test_surcharge_ignores_unused_parallel_line() {
        // The expensive line offers a slower parallel section; the route
        // never rides it, so its surcharge must not leak in.
        let lines = vec![
            line(1, 0, &[(1, 2, 5), (2, 3, 5)]),
            line(2, 900, &[(2, 3, 7)]),
        ];
        let graph = NetworkGraph::from_lines(&lines);
        let route = shortest_route(&graph, 1, 3).unwrap();
        assert_eq!(route.total_distance, 10);
        assert_eq!(route.max_surcharge, 0);
    }

    #[test]
    fn test_equal_distance_parallel_edges_resolve_first_built() {
        let lines = vec![line(1, 400, &[(1, 2, 5)]), line(2, 100, &[(1, 2, 5)])];
        let graph = NetworkGraph::from_lines(&lines);
        let route = shortest_route(&graph, 1, 2).unwrap();
        assert_eq!(route.total_distance, 5);
        assert_eq!(route.max_surcharge, 400);
    }

    #[test]
    fn test_same_station_rejected() {
        let graph = NetworkGraph::from_lines(&[line(1, 0, &[(1, 2, 5)])]);
        assert_eq!(
            shortest_route(&graph, 1, 1).unwrap_err(),
            RouteError::SameStation(1)
        );
    }

    #[test]
    fn test_station_outside_network_rejected() {
        let graph = NetworkGraph::from_lines(&[line(1, 0, &[(1, 2, 5)])]);
        assert_eq!(
            shortest_route(&graph, 1, 9).unwrap_err(),
            RouteError::StationNotInNetwork(9)
        );
        assert_eq!(
            shortest_route(&graph, 9, 1).unwrap_err(),
            RouteError::StationNotInNetwork(9)
        );
    }

    #[test]
    fn test_disconnected_stations_rejected() {
        let lines = vec![line(1, 0, &[(1, 2, 5)]), line(2, 0, &[(3, 4, 5)])];
        let graph = NetworkGraph::from_lines(&lines);
        assert_eq!(
            shortest_route(&graph, 1, 4).unwrap_err(),
            RouteError::NotConnected { from: 1, to: 4 }
        );
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let lines = vec![
            line(1, 500, &[(1, 2, 10)]),
            line(2, 0, &[(1, 3, 5), (3, 2, 3)]),
            line(3, 200, &[(2, 4, 6)]),
        ];
        let first = shortest_route(&NetworkGraph::from_lines(&lines), 1, 4).unwrap();
        let second = shortest_route(&NetworkGraph::from_lines(&lines), 1, 4).unwrap();
        assert_eq!(first, second);
    }
}
