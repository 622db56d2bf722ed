//! Fixed-point temperature codec.
//!
//! The device stores temperatures as tenths of a degree in a 16-bit word.
//! Raw values above 60000 denote negative temperatures: the true value is
//! `-(65536 - raw) / 10`. The threshold is a firmware quirk, not the usual
//! two's-complement split at 32768, and must be kept exactly as-is.

/// Decode a raw register word into degrees.
pub fn decode_temperature(raw: u16) -> f64 {
    if raw > 60000 {
        -f64::from(65536 - u32::from(raw)) / 10.0
    } else {
        f64::from(raw) / 10.0
    }
}

/// Encode degrees into the raw register word.
///
/// Exact inverse of [`decode_temperature`] on whole tenths.
pub fn encode_temperature(degrees: f64) -> u16 {
    let tenths = (degrees * 10.0).round() as i32;
    if tenths < 0 {
        (65536 + tenths) as u16
    } else {
        tenths as u16
    }
}
