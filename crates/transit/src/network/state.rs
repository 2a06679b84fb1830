//! Transit network state and query entry points.
//!
//! `TransitNetwork` owns all stations and lines. Mutations validate before
//! touching state and reject invalid input instead of correcting it; queries
//! are read-only over the current snapshot. If the surrounding system shares
//! one network across threads, mutations of the same line must be serialized
//! externally — every method here is all-or-nothing, so a serialized reader
//! never observes a half-applied change.

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::decode_or_warn;
use crate::fare;
use crate::lines::{Line, LineId, Section, SectionError, Sections};
use crate::routing::{shortest_route, NetworkGraph, RouteError};

use super::types::{NetworkStats, Station, StationId, TripPlan};

/// The source of truth for the subway network.
///
/// Contains all stations and lines plus auto-incrementing id counters. The
/// registry is the only place ids are minted; sections and queries always
/// refer to stations by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Encode, Decode)]
pub struct TransitNetwork {
    /// All registered stations, keyed by id.
    pub stations: Vec<Station>,
    /// All lines.
    pub lines: Vec<Line>,
    /// Auto-incrementing station id counter.
    pub(crate) next_station_id: u32,
    /// Auto-incrementing line id counter.
    pub(crate) next_line_id: u32,
}

impl TransitNetwork {
    /// Key identifying this state in a snapshot store.
    pub const SNAPSHOT_KEY: &'static str = "transit_network";

    // -------------------------------------------------------------------------
    // Station management
    // -------------------------------------------------------------------------

    /// Register a new station. Returns the new station id, or `None` when
    /// the name is already taken.
    pub fn add_station(&mut self, name: String) -> Option<StationId> {
        if self.stations.iter().any(|s| s.name == name) {
            return None;
        }
        let id = self.next_station_id;
        self.next_station_id += 1;
        self.stations.push(Station { id, name });
        Some(id)
    }

    /// Remove a station by id. Refused while any line's sections still
    /// reference it, so sections can never dangle.
    pub fn remove_station(&mut self, station_id: StationId) -> bool {
        if self.lines.iter().any(|l| l.sections.contains(station_id)) {
            return false;
        }
        let before = self.stations.len();
        self.stations.retain(|s| s.id != station_id);
        self.stations.len() < before
    }

    /// Find a station by id.
    pub fn station_by_id(&self, id: StationId) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    // -------------------------------------------------------------------------
    // Line management
    // -------------------------------------------------------------------------

    /// Create a new line with its first section. A line is never empty: it
    /// is born with one section and `remove_section` refuses to delete the
    /// last one.
    pub fn add_line(
        &mut self,
        name: String,
        color: String,
        surcharge: u32,
        up: StationId,
        down: StationId,
        distance: u32,
    ) -> Result<LineId, SectionError> {
        self.resolve_station(up)?;
        self.resolve_station(down)?;
        let mut sections = Sections::default();
        sections.add(Section::new(up, down, distance))?;

        let id = self.next_line_id;
        self.next_line_id += 1;
        self.lines.push(Line {
            id,
            name,
            color,
            surcharge,
            sections,
        });
        Ok(id)
    }

    /// Remove a line by id, with all its sections.
    pub fn remove_line(&mut self, line_id: LineId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != line_id);
        self.lines.len() < before
    }

    /// Find a line by id.
    pub fn line_by_id(&self, id: LineId) -> Option<&Line> {
        self.lines.iter().find(|l| l.id == id)
    }

    // -------------------------------------------------------------------------
    // Section management
    // -------------------------------------------------------------------------

    /// Insert a section into a line's chain. Both stations must be
    /// registered; the chain invariants are enforced by `Sections::add`.
    pub fn add_section(
        &mut self,
        line_id: LineId,
        up: StationId,
        down: StationId,
        distance: u32,
    ) -> Result<(), SectionError> {
        self.resolve_station(up)?;
        self.resolve_station(down)?;
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.id == line_id)
            .ok_or(SectionError::UnknownLine(line_id))?;
        line.sections.add(Section::new(up, down, distance))
    }

    /// Remove a station from a line's chain, merging its neighbouring
    /// sections when the station is interior.
    pub fn remove_section(
        &mut self,
        line_id: LineId,
        station: StationId,
    ) -> Result<(), SectionError> {
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.id == line_id)
            .ok_or(SectionError::UnknownLine(line_id))?;
        line.sections.remove_station(station)
    }

    /// Stations of a line in terminal-to-terminal order, or `None` for an
    /// unknown line.
    pub fn sorted_stations(&self, line_id: LineId) -> Option<Vec<StationId>> {
        self.line_by_id(line_id).map(|l| l.sections.sorted_stations())
    }

    fn resolve_station(&self, id: StationId) -> Result<(), SectionError> {
        if self.stations.iter().any(|s| s.id == id) {
            Ok(())
        } else {
            Err(SectionError::UnknownStation(id))
        }
    }

    // -------------------------------------------------------------------------
    // Trip planning
    // -------------------------------------------------------------------------

    /// Find the shortest route between two stations and price it for the
    /// rider.
    ///
    /// The routing graph is rebuilt from the current line snapshot on every
    /// call; nothing is cached across queries. `rider_age` is `None` when
    /// the rider's age is unknown (full fare).
    pub fn plan_trip(
        &self,
        source: StationId,
        destination: StationId,
        rider_age: Option<u32>,
    ) -> Result<TripPlan, RouteError> {
        let graph = NetworkGraph::from_lines(&self.lines);
        let route = shortest_route(&graph, source, destination)?;
        let fare = fare::calculate(route.total_distance, route.max_surcharge, rider_age);
        Ok(TripPlan {
            stations: route.stations,
            total_distance: route.total_distance,
            fare,
        })
    }

    // -------------------------------------------------------------------------
    // Statistics
    // -------------------------------------------------------------------------

    /// Aggregate counts over the whole network.
    pub fn stats(&self) -> NetworkStats {
        NetworkStats {
            stations: self.stations.len() as u32,
            lines: self.lines.len() as u32,
            sections: self.lines.iter().map(|l| l.sections.len() as u32).sum(),
            total_distance: self.lines.iter().map(|l| l.sections.total_distance()).sum(),
        }
    }

    // -------------------------------------------------------------------------
    // Snapshot
    // -------------------------------------------------------------------------

    /// Serialize to bytes. Returns `None` for an empty network so callers
    /// can skip storing default state.
    pub fn save_to_bytes(&self) -> Option<Vec<u8>> {
        if self.stations.is_empty() && self.lines.is_empty() {
            return None;
        }
        Some(bitcode::encode(self))
    }

    /// Restore from bytes, falling back to an empty network when the bytes
    /// do not decode.
    pub fn load_from_bytes(bytes: &[u8]) -> Self {
        decode_or_warn(Self::SNAPSHOT_KEY, bytes)
    }
}
