/// Round a time in seconds to whole centiseconds.
///
/// The transcription service reports segment boundaries at two-decimal
/// precision; comparing rounded values keeps floating-point drift from
/// skipping or double-matching a segment.
pub fn to_centis(seconds: f64) -> i64 {
    (seconds * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, 0)]
    #[case(0.5, 50)]
    #[case(1.0, 100)]
    #[case(12.34, 1234)]
    #[case(0.01, 1)]
    fn test_to_centis_exact_values(#[case] seconds: f64, #[case] expected: i64) {
        assert_eq!(to_centis(seconds), expected);
    }

    #[test]
    fn test_to_centis_absorbs_float_drift() {
        // 4x-per-second playback clocks report values like 0.999999 for 1.0
        assert_eq!(to_centis(0.999_999), 100);
        assert_eq!(to_centis(1.000_001), 100);
    }

    #[test]
    fn test_to_centis_nearby_values_collapse_to_one_centisecond() {
        assert_eq!(to_centis(0.011), 1);
        assert_eq!(to_centis(0.014), 1);
    }
}
