//! Weighted multigraph assembled from all lines' sections.

use std::collections::{BTreeSet, HashMap};

use crate::lines::{Line, LineId};
use crate::network::StationId;

/// One directed edge of the routing graph. `target` is a dense vertex
/// index, not a station id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkEdge {
    /// Dense index of the reached vertex.
    pub target: u32,
    /// Section distance in kilometres.
    pub distance: u32,
    /// Owning line.
    pub line: LineId,
    /// Owning line's surcharge.
    pub surcharge: u32,
}

/// Adjacency-list multigraph over every station that appears in any line's
/// sections.
///
/// **Determinism**: vertices are interned in sorted station-id order and
/// edges are appended in line order, then section storage order within each
/// line, so identical input always yields an identical graph.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    /// Dense index -> station id, sorted ascending.
    stations: Vec<StationId>,
    /// Station id -> dense index.
    index: HashMap<StationId, u32>,
    /// `adjacency[i]` holds the edges leaving vertex `i`. Parallel edges
    /// from different lines are retained, not deduplicated.
    adjacency: Vec<Vec<NetworkEdge>>,
}

impl NetworkGraph {
    /// Build the graph from the current snapshot of all lines.
    ///
    /// Every section contributes a forward edge and a mirrored reverse edge
    /// with the same weight and surcharge: riders travel either direction
    /// along a track section.
    pub fn from_lines(lines: &[Line]) -> Self {
        let interned: BTreeSet<StationId> = lines
            .iter()
            .flat_map(|line| line.sections.iter().flat_map(|s| [s.up, s.down]))
            .collect();
        let stations: Vec<StationId> = interned.into_iter().collect();
        let index: HashMap<StationId, u32> = stations
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, i as u32))
            .collect();

        let mut adjacency = vec![Vec::new(); stations.len()];
        for line in lines {
            for section in line.sections.iter() {
                let up = index[&section.up];
                let down = index[&section.down];
                adjacency[up as usize].push(NetworkEdge {
                    target: down,
                    distance: section.distance,
                    line: line.id,
                    surcharge: line.surcharge,
                });
                adjacency[down as usize].push(NetworkEdge {
                    target: up,
                    distance: section.distance,
                    line: line.id,
                    surcharge: line.surcharge,
                });
            }
        }

        let graph = Self {
            stations,
            index,
            adjacency,
        };
        log::debug!(
            "built routing graph: {} stations, {} edges",
            graph.station_count(),
            graph.edge_count()
        );
        graph
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Dense index of a station, or `None` when the station is not part of
    /// any line's sections.
    pub fn index_of(&self, station: StationId) -> Option<u32> {
        self.index.get(&station).copied()
    }

    /// Station id at a dense index.
    pub fn station_at(&self, idx: u32) -> StationId {
        self.stations[idx as usize]
    }

    /// `(target, distance)` pairs for Dijkstra relaxation. Parallel edges
    /// yield one pair each.
    pub fn neighbor_weights(&self, idx: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.adjacency[idx as usize]
            .iter()
            .map(|e| (e.target, e.distance))
    }

    /// The edge the search actually rode between two adjacent vertices: the
    /// lowest-distance parallel edge, first-built winning ties. Keeps a
    /// route's surcharge deterministic.
    pub fn cheapest_edge(&self, from: u32, to: u32) -> Option<&NetworkEdge> {
        self.adjacency[from as usize]
            .iter()
            .filter(|e| e.target == to)
            .min_by_key(|e| e.distance)
    }
}
