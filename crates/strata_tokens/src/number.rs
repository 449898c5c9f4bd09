//! Number formatting shared by the emitters
//!
//! Downstream stylesheets were produced by a browser tool, so numbers are
//! printed the way JavaScript prints them: fixed decimals round ties away
//! from zero, and plain numbers drop a trailing `.0`.

use serde::Serializer;

/// Format `value` with exactly `decimals` fractional digits.
///
/// Matches `Number.prototype.toFixed`: digits come from the exact binary
/// value, an exact tie rounds away from zero, and a negative input keeps its
/// sign even when it rounds to zero.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    let magnitude = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    // std formatting breaks exact ties toward even
    let digits = if is_exact_tie(magnitude, decimals) {
        let half_step = 0.5 / 10f64.powi(decimals as i32);
        format!("{:.decimals$}", magnitude + half_step)
    } else {
        format!("{magnitude:.decimals$}")
    };
    format!("{sign}{digits}")
}

/// Whether `magnitude * 10^decimals` is exactly `n + 0.5`.
fn is_exact_tie(magnitude: f64, decimals: usize) -> bool {
    if !magnitude.is_finite() {
        return false;
    }
    let bits = magnitude.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    // magnitude == mantissa * 2^exponent
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    if mantissa == 0 || exponent >= 0 {
        return false;
    }
    let shift = exponent.unsigned_abs();
    let Some(scaled) = u32::try_from(decimals)
        .ok()
        .and_then(|d| 10u128.checked_pow(d))
        .and_then(|pow| u128::from(mantissa).checked_mul(2 * pow))
    else {
        return false;
    };
    // 2 * magnitude * 10^decimals must be an odd integer
    scaled.trailing_zeros() == shift
}

/// Format `value` the way a JS template literal would (`16`, `0.25`, `1.333`).
pub fn js_number(value: f64) -> String {
    if value == 0.0 {
        // -0 prints as "0"
        return "0".to_string();
    }
    value.to_string()
}

/// Serialize integral floats as integers so JSON output reads `16`, not `16.0`.
pub(crate) fn serialize_js_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed_pads_and_rounds() {
        assert_eq!(to_fixed(1.0, 3), "1.000");
        assert_eq!(to_fixed(1.333, 3), "1.333");
        assert_eq!(to_fixed(21.328, 1), "21.3");
        assert_eq!(to_fixed(0.0, 3), "0.000");
    }

    #[test]
    fn test_to_fixed_ties_round_away_from_zero() {
        // 19 / 16 is exactly representable, so this is a true tie
        assert_eq!(to_fixed(1.1875, 3), "1.188");
        assert_eq!(to_fixed(0.5625, 3), "0.563");
        assert_eq!(to_fixed(-0.0125, 3), "-0.013");
    }

    #[test]
    fn test_to_fixed_uses_exact_binary_value() {
        // stored just below the tie
        assert_eq!(to_fixed(0.6375, 3), "0.637");
        assert_eq!(to_fixed(10.2 / 16.0, 3), "0.637");
        assert_eq!(to_fixed(15.149999999999999, 1), "15.1");
        assert_eq!(to_fixed(10.1 * 1.5, 1), "15.1");
        // stored just above the tie
        assert_eq!(to_fixed(1.0005, 3), "1.000");
        assert_eq!(to_fixed(0.0125, 3), "0.013");
    }

    #[test]
    fn test_exact_ties() {
        assert!(is_exact_tie(0.5625, 3));
        assert!(is_exact_tie(0.4375, 3));
        assert!(is_exact_tie(2.5, 0));
        assert!(!is_exact_tie(0.6375, 3));
        assert!(!is_exact_tie(0.5625, 4));
        assert!(!is_exact_tie(16.0, 3));
        assert!(!is_exact_tie(0.0, 3));
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.4375, 3), "0.438");
    }

    #[test]
    fn test_to_fixed_negative() {
        assert_eq!(to_fixed(-0.01, 3), "-0.010");
        assert_eq!(to_fixed(-0.02, 3), "-0.020");
    }

    #[test]
    fn test_js_number() {
        assert_eq!(js_number(16.0), "16");
        assert_eq!(js_number(0.25), "0.25");
        assert_eq!(js_number(1.333), "1.333");
        assert_eq!(js_number(-0.0), "0");
        assert_eq!(js_number(96.0 / 16.0), "6");
    }
}
