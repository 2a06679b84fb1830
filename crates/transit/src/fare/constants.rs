//! Constants for fare calculation. All amounts are whole currency units.

/// Base fare covering the first 10 km.
pub const BASE_FARE: u32 = 1_250;

/// Fare added per started billing unit beyond a distance-band threshold.
pub const DISTANCE_STEP_FARE: u32 = 100;

/// Distance covered by the base fare alone, in kilometres.
pub const BASE_DISTANCE_KM: u32 = 10;

/// Upper edge of the middle distance band, in kilometres.
pub const MIDDLE_BAND_END_KM: u32 = 50;

/// Billing unit inside the 10–50 km band: one step per started 5 km.
pub const MIDDLE_BAND_UNIT_KM: u32 = 5;

/// Billing unit past 50 km: one step per started 8 km.
pub const LONG_BAND_UNIT_KM: u32 = 8;

/// Flat deduction applied before the percentage age discounts.
pub const AGE_DISCOUNT_DEDUCTION: u32 = 350;
