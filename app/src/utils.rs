//! Utility functions
//!
//! Formatting helpers used across the frontend.

/// Compact number for summaries: 1.2B, 331.0M, 4.5K, 812
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return "0".to_string();
    }
    let abs = n.abs();
    if abs >= 1_000_000_000.0 {
        format!("{:.1}B", n / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{:.1}M", n / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", n / 1_000.0)
    } else if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{:.2}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scales_large_values() {
        assert_eq!(format_number(331_000_000.0), "331.0M");
        assert_eq!(format_number(1_400_000_000.0), "1.4B");
        assert_eq!(format_number(4_500.0), "4.5K");
    }

    #[test]
    fn test_small_values_stay_readable() {
        assert_eq!(format_number(812.0), "812");
        assert_eq!(format_number(3.25), "3.25");
        assert_eq!(format_number(f64::NAN), "0");
    }
}
