//! Data structures for the station/line registry.

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Unique identifier for a station.
pub type StationId = u32;

/// A subway station: an opaque id with a display name. Immutable once
/// registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct Station {
    /// Unique station identifier.
    pub id: StationId,
    /// Human-readable station name.
    pub name: String,
}

/// The answer to a trip query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct TripPlan {
    /// Stations along the shortest route, source first.
    pub stations: Vec<StationId>,
    /// Total route distance in kilometres.
    pub total_distance: u32,
    /// Final fare in currency units, surcharge and age discount applied.
    pub fare: u32,
}

/// Network-wide aggregate statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct NetworkStats {
    /// Registered stations.
    pub stations: u32,
    /// Registered lines.
    pub lines: u32,
    /// Sections across all lines.
    pub sections: u32,
    /// Total track length across all lines, in kilometres.
    pub total_distance: u32,
}
