//! Station/line registry and trip planning.
//!
//! `TransitNetwork` is the source of truth for the subway network: it owns
//! all stations and lines, routes section mutations through each line's
//! `Sections`, and answers shortest-route/fare queries by rebuilding the
//! routing graph from the current snapshot on every call. State can be
//! round-tripped through a compact byte snapshot.

pub mod state;
pub mod types;

// Re-export all public items so external code can use `network::Foo`
// without needing to know the internal module structure.
pub use state::TransitNetwork;
pub use types::{NetworkStats, Station, StationId, TripPlan};
