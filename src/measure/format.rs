//! Compact number formatting for measurements.

/// Significant digits kept when displaying a measurement.
const SIGNIFICANT_DIGITS: usize = 6;

/// Format a measurement in its shortest form with up to six significant digits.
///
/// Mirrors C's `%g`: whole numbers drop the decimal point, trailing zeros
/// are trimmed, and very large or very small magnitudes switch to
/// exponent notation.
///
/// ```
/// use craftlogic::measure::format_measure;
///
/// assert_eq!(format_measure(50.0), "50");
/// assert_eq!(format_measure(2.5), "2.5");
/// assert_eq!(format_measure(50.0 / 2.54), "19.685");
/// ```
pub fn format_measure(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // Rounding to the target precision first decides the exponent, so
    // 999999.7 becomes 1e+06 rather than 1000000.
    let sci = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.abs()
        );
    }

    let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent).max(0) as usize;
    trim_fraction(&format!("{:.*}", decimals, value)).to_string()
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
