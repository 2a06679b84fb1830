//! Data structures for subway lines.

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::network::StationId;

use super::sections::Sections;

/// Unique identifier for a subway line.
pub type LineId = u32;

/// A single track section between two adjacent stations on one line.
///
/// Directed up-station → down-station with a strictly positive distance.
/// A section only means something inside its owning line's `Sections`; it is
/// never shared across lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct Section {
    /// Up-station endpoint.
    pub up: StationId,
    /// Down-station endpoint.
    pub down: StationId,
    /// Track length in kilometres.
    pub distance: u32,
}

impl Section {
    pub fn new(up: StationId, down: StationId, distance: u32) -> Self {
        Self { up, down, distance }
    }
}

/// A subway line connecting stations through a single section chain.
#[derive(Debug, Clone, Serialize, Deserialize, Encode, Decode)]
pub struct Line {
    /// Unique line identifier.
    pub id: LineId,
    /// Human-readable line name (e.g., "Line 2").
    pub name: String,
    /// Display color (e.g., "bg-green-600").
    pub color: String,
    /// Extra fare charged when a route rides this line. Only the maximum
    /// surcharge across a route's lines applies, never the sum.
    pub surcharge: u32,
    /// The line's track sections.
    pub sections: Sections,
}
