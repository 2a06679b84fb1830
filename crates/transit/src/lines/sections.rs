//! The section chain of a single line.
//!
//! `Sections` keeps a line's sections connected, ordered, and
//! distance-consistent as sections are added or removed. Storage is an
//! unordered `Vec`; the terminal-to-terminal order is derived by
//! `sorted_stations`, never stored, so there is no ordering to corrupt.

use std::collections::HashMap;

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::network::StationId;

use super::types::{LineId, Section};

/// Rejected section mutations.
///
/// Variants carry the offending ids and distances so the caller can build a
/// message; the core itself never formats or logs on the error path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub enum SectionError {
    /// Up- and down-station are the same.
    DegenerateSection(StationId),
    /// Section distance must be strictly positive.
    ZeroDistance,
    /// Neither endpoint is on the chain; the section cannot attach.
    NoSharedStation { up: StationId, down: StationId },
    /// Both endpoints are already on the chain; inserting would fork the
    /// chain or close a cycle.
    AlreadyLinked { up: StationId, down: StationId },
    /// A split must leave a positive distance on both halves.
    SplitTooLong { distance: u32, existing: u32 },
    /// The station is not on the chain.
    StationNotFound(StationId),
    /// A line must always keep at least one section.
    LastSection,
    /// No line with this id is registered.
    UnknownLine(LineId),
    /// No station with this id is registered.
    UnknownStation(StationId),
}

/// The invariant-preserving section chain of one line.
///
/// Invariants, checked on every mutation:
/// - a station appears as at most one section's up-station and at most one
///   section's down-station (no forks);
/// - all sections form one connected chain with a single upstream and a
///   single downstream terminal;
/// - every distance is strictly positive.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Encode, Decode)]
pub struct Sections {
    sections: Vec<Section>,
}

impl Sections {
    /// Number of sections in the chain.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate the sections in storage order. The order is arbitrary; use
    /// `sorted_stations` for the travel order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Whether the station appears as any section's endpoint.
    pub fn contains(&self, station: StationId) -> bool {
        self.sections
            .iter()
            .any(|s| s.up == station || s.down == station)
    }

    /// Number of distinct stations on the chain.
    pub fn station_count(&self) -> usize {
        if self.sections.is_empty() {
            0
        } else {
            self.sections.len() + 1
        }
    }

    /// Total track length of the chain in kilometres.
    pub fn total_distance(&self) -> u32 {
        self.sections.iter().map(|s| s.distance).sum()
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Insert a section, preserving the single-chain invariants.
    ///
    /// An empty set accepts any valid section as the starter. Otherwise
    /// exactly one endpoint must already be on the chain, and the section
    /// either extends past a terminal or splits the section it overlaps.
    /// On rejection the set is left untouched.
    pub fn add(&mut self, section: Section) -> Result<(), SectionError> {
        if section.up == section.down {
            return Err(SectionError::DegenerateSection(section.up));
        }
        if section.distance == 0 {
            return Err(SectionError::ZeroDistance);
        }
        if self.sections.is_empty() {
            self.sections.push(section);
            return Ok(());
        }
        match (self.contains(section.up), self.contains(section.down)) {
            (true, true) => Err(SectionError::AlreadyLinked {
                up: section.up,
                down: section.down,
            }),
            (false, false) => Err(SectionError::NoSharedStation {
                up: section.up,
                down: section.down,
            }),
            (true, false) => self.attach_by_up(section),
            (false, true) => self.attach_by_down(section),
        }
    }

    /// The new section's up-station is already on the chain: split the
    /// section departing from it, or extend past the downstream terminal
    /// when no section departs there.
    fn attach_by_up(&mut self, section: Section) -> Result<(), SectionError> {
        if let Some(pos) = self.sections.iter().position(|s| s.up == section.up) {
            let split = self.sections[pos];
            if section.distance >= split.distance {
                return Err(SectionError::SplitTooLong {
                    distance: section.distance,
                    existing: split.distance,
                });
            }
            self.sections[pos] =
                Section::new(section.down, split.down, split.distance - section.distance);
        }
        self.sections.push(section);
        Ok(())
    }

    /// Mirror of `attach_by_up` for a shared down-station: split the section
    /// arriving at it, or extend past the upstream terminal.
    fn attach_by_down(&mut self, section: Section) -> Result<(), SectionError> {
        if let Some(pos) = self.sections.iter().position(|s| s.down == section.down) {
            let split = self.sections[pos];
            if section.distance >= split.distance {
                return Err(SectionError::SplitTooLong {
                    distance: section.distance,
                    existing: split.distance,
                });
            }
            self.sections[pos] =
                Section::new(split.up, section.up, split.distance - section.distance);
        }
        self.sections.push(section);
        Ok(())
    }

    /// Remove a station from the chain.
    ///
    /// A terminal drops its single adjoining section; an interior station
    /// drops both neighbours and re-links the outer endpoints with the
    /// summed distance, so the total chain length is unchanged. The last
    /// remaining section can never be removed.
    pub fn remove_station(&mut self, station: StationId) -> Result<(), SectionError> {
        let arriving = self.sections.iter().position(|s| s.down == station);
        let departing = self.sections.iter().position(|s| s.up == station);
        match (arriving, departing) {
            (None, None) => Err(SectionError::StationNotFound(station)),
            _ if self.sections.len() == 1 => Err(SectionError::LastSection),
            (Some(a), Some(d)) => {
                let merged = Section::new(
                    self.sections[a].up,
                    self.sections[d].down,
                    self.sections[a].distance + self.sections[d].distance,
                );
                // Drop the higher index first so the lower one stays valid.
                let (high, low) = if a > d { (a, d) } else { (d, a) };
                self.sections.swap_remove(high);
                self.sections.swap_remove(low);
                self.sections.push(merged);
                Ok(())
            }
            (Some(i), None) | (None, Some(i)) => {
                self.sections.swap_remove(i);
                Ok(())
            }
        }
    }

    // -------------------------------------------------------------------------
    // Derived queries
    // -------------------------------------------------------------------------

    /// Stations in terminal-to-terminal order, following up→down links from
    /// the unique station no section arrives at. For a valid chain the
    /// result length is always `len() + 1`.
    pub fn sorted_stations(&self) -> Vec<StationId> {
        let Some(head) = self.head_station() else {
            return Vec::new();
        };
        let next: HashMap<StationId, StationId> =
            self.sections.iter().map(|s| (s.up, s.down)).collect();
        let mut ordered = Vec::with_capacity(self.sections.len() + 1);
        let mut current = head;
        ordered.push(current);
        while let Some(&down) = next.get(&current) {
            ordered.push(down);
            current = down;
        }
        ordered
    }

    /// The upstream terminal: the one up-station that never appears as a
    /// down-station.
    fn head_station(&self) -> Option<StationId> {
        self.sections
            .iter()
            .map(|s| s.up)
            .find(|&up| !self.sections.iter().any(|s| s.down == up))
    }
}
