//! # Environmental Correction Factors
//!
//! Multipliers applied to the halocarbon mass requirement:
//!
//! ```text
//! W = V × factor × C_alt × C_temp
//!
//! C_alt  = P0 / P(h),   P(h) = P0 × (1 − 2.25577e-5 × h)^5.25588
//! C_temp = 1.0                          for T ≤ 20 °C
//!        = 1 + 0.013 × (T − 20)         for T > 20 °C
//! ```
//!
//! CO2 rooms never use these; their corrections are fixed at 1.0.

/// Standard sea-level atmospheric pressure (kPa)
pub const SEA_LEVEL_PRESSURE_KPA: f64 = 101.325;

/// Temperature above which the linear penalty applies (°C)
pub const REFERENCE_TEMPERATURE_C: f64 = 20.0;

/// Required-mass increase per °C above the reference temperature
pub const TEMPERATURE_PENALTY_PER_C: f64 = 0.013;

const LAPSE_COEFFICIENT: f64 = 2.25577e-5;
const PRESSURE_EXPONENT: f64 = 5.25588;

/// Barometric pressure at `altitude_m` above sea level (kPa)
pub fn pressure_at_altitude(altitude_m: f64) -> f64 {
    SEA_LEVEL_PRESSURE_KPA * (1.0 - LAPSE_COEFFICIENT * altitude_m).powf(PRESSURE_EXPONENT)
}

/// Altitude correction factor.
///
/// Exactly 1.0 at sea level and strictly increasing with altitude above it.
pub fn altitude_correction(altitude_m: f64) -> f64 {
    SEA_LEVEL_PRESSURE_KPA / pressure_at_altitude(altitude_m)
}

/// Temperature correction factor.
pub fn temperature_correction(temperature_c: f64) -> f64 {
    if temperature_c <= REFERENCE_TEMPERATURE_C {
        1.0
    } else {
        1.0 + TEMPERATURE_PENALTY_PER_C * (temperature_c - REFERENCE_TEMPERATURE_C)
    }
}
