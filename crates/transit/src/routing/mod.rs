//! Shortest-route search over the combined network.
//!
//! All lines' sections merge into one weighted multigraph per query: every
//! section is traversable in both directions, parallel sections from
//! different lines stay distinct edges, and the lowest total distance wins.
//! The graph is ephemeral — built, queried, dropped.

pub mod graph;
pub mod pathfinding;
mod tests;

pub use graph::{NetworkEdge, NetworkGraph};
pub use pathfinding::{shortest_route, Route, RouteError};
