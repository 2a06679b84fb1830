//! Fare calculation.
//!
//! A route's price is a distance-banded base fare, plus the highest
//! surcharge among the lines the route uses, with an age discount applied
//! last. Both band tables live in `calculator`; the tunable numbers live in
//! `constants`.

pub mod calculator;
pub mod constants;

pub use calculator::calculate;
pub use constants::*;
