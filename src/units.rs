//! Pure unit conversions applied on top of decoded readings.

const FEET_PER_METER: f32 = 3.28084;

/// Converts meters to feet.
pub fn meters_to_feet(meters: f32) -> f32 {
    meters * FEET_PER_METER
}

/// Converts degrees Celsius to degrees Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}
