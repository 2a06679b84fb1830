//! Fare computation as ordered band tables.
//!
//! The distance surcharge and the age discount are both guard conditions
//! over disjoint ranges. Keeping them as explicit tables makes every
//! boundary auditable and testable in isolation.

use super::constants::{
    AGE_DISCOUNT_DEDUCTION, BASE_DISTANCE_KM, BASE_FARE, DISTANCE_STEP_FARE, LONG_BAND_UNIT_KM,
    MIDDLE_BAND_END_KM, MIDDLE_BAND_UNIT_KM,
};

/// One distance band: distance above `threshold` km is billed one step per
/// started `unit` km.
struct DistanceBand {
    threshold: u32,
    unit: u32,
}

/// Distance bands, outermost first: each pass bills the distance above its
/// threshold and hands the remainder down to the next band.
const DISTANCE_BANDS: &[DistanceBand] = &[
    DistanceBand {
        threshold: MIDDLE_BAND_END_KM,
        unit: LONG_BAND_UNIT_KM,
    },
    DistanceBand {
        threshold: BASE_DISTANCE_KM,
        unit: MIDDLE_BAND_UNIT_KM,
    },
];

/// One age band: riders with `min <= age < max` pay the subtotal minus
/// `deduction`, reduced by `discount_percent`.
struct AgeBand {
    min: u32,
    max: u32,
    deduction: u32,
    discount_percent: u32,
}

/// Age bands, disjoint and ordered. Under 6 rides free (the infant band
/// covers newborns too); ages at or past the last band, and riders with no
/// known age, pay the full subtotal.
const AGE_BANDS: &[AgeBand] = &[
    AgeBand {
        min: 0,
        max: 6,
        deduction: 0,
        discount_percent: 100,
    },
    AgeBand {
        min: 6,
        max: 13,
        deduction: AGE_DISCOUNT_DEDUCTION,
        discount_percent: 50,
    },
    AgeBand {
        min: 13,
        max: 19,
        deduction: AGE_DISCOUNT_DEDUCTION,
        discount_percent: 20,
    },
];

/// Final fare for a route.
///
/// `distance` is the route's total distance in kilometres, `line_surcharge`
/// the highest surcharge among the lines the route uses (already resolved
/// by the path finder), `rider_age` `None` when unknown. The result is
/// truncated to whole currency units and never negative.
pub fn calculate(distance: u32, line_surcharge: u32, rider_age: Option<u32>) -> u32 {
    apply_age_discount(distance_fare(distance) + line_surcharge, rider_age)
}

/// Distance-banded base fare.
fn distance_fare(distance: u32) -> u32 {
    let mut fare = BASE_FARE;
    let mut remaining = distance;
    for band in DISTANCE_BANDS {
        if remaining > band.threshold {
            let over = remaining - band.threshold;
            fare += over.div_ceil(band.unit) * DISTANCE_STEP_FARE;
            remaining = band.threshold;
        }
    }
    fare
}

/// Apply the matching age band to a surcharge-inclusive subtotal. The
/// deduction saturates so the result cannot underflow.
fn apply_age_discount(subtotal: u32, rider_age: Option<u32>) -> u32 {
    let Some(age) = rider_age else {
        return subtotal;
    };
    match AGE_BANDS.iter().find(|b| b.min <= age && age < b.max) {
        Some(band) => {
            let reduced = subtotal.saturating_sub(band.deduction);
            reduced * (100 - band.discount_percent) / 100
        }
        None => subtotal,
    }
}
