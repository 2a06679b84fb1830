//! Dijkstra shortest-route search over a built `NetworkGraph`.

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::network::StationId;

use super::graph::NetworkGraph;

/// A computed shortest route. Ephemeral; exists for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Stations in travel order, source first.
    pub stations: Vec<StationId>,
    /// Accumulated distance in kilometres.
    pub total_distance: u32,
    /// Highest surcharge among the lines whose edges the route rides.
    pub max_surcharge: u32,
}

/// Rejected route queries. Variants carry the offending stations; rendering
/// them is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub enum RouteError {
    /// Source and destination are the same station.
    SameStation(StationId),
    /// The station is not part of any line's sections.
    StationNotInNetwork(StationId),
    /// No chain of sections links the two stations.
    NotConnected { from: StationId, to: StationId },
}

/// Shortest route between two stations by total distance.
///
/// Distances are strictly positive so Dijkstra applies directly. Ties in
/// total distance break by discovery order; the total distance and the
/// surcharge maximum are deterministic for a fixed graph either way.
pub fn shortest_route(
    graph: &NetworkGraph,
    source: StationId,
    destination: StationId,
) -> Result<Route, RouteError> {
    if source == destination {
        return Err(RouteError::SameStation(source));
    }
    let source_idx = graph
        .index_of(source)
        .ok_or(RouteError::StationNotInNetwork(source))?;
    let destination_idx = graph
        .index_of(destination)
        .ok_or(RouteError::StationNotInNetwork(destination))?;

    let (hops, total_distance) = pathfinding::prelude::dijkstra(
        &source_idx,
        |&idx| graph.neighbor_weights(idx),
        |&idx| idx == destination_idx,
    )
    .ok_or(RouteError::NotConnected {
        from: source,
        to: destination,
    })?;

    // The search only reports the vertex sequence; resolve each hop back to
    // the concrete edge it rode to aggregate the surcharge.
    let max_surcharge = hops
        .windows(2)
        .filter_map(|pair| graph.cheapest_edge(pair[0], pair[1]))
        .map(|edge| edge.surcharge)
        .max()
        .unwrap_or(0);

    let stations = hops.iter().map(|&idx| graph.station_at(idx)).collect();

    Ok(Route {
        stations,
        total_distance,
        max_surcharge,
    })
}
