use crate::card::structs::{CardRow, LocationCard, TTFF_PLACEHOLDER};
use crate::fix::LocationFix;

/// Formats a fix into its card rows.
///
/// Pure and total: every floating-point value, finite or not, formats to a
/// string, and absent optional values degrade to the empty string. The
/// capability flag is read once per call and gates the speed and bearing
/// accuracy rows together; when it is off both rows are omitted outright
/// and the presence of the underlying values is not consulted.
pub fn format_fix(fix: &LocationFix, accuracy_supported: bool) -> LocationCard {
    let mut column_a = vec![
        CardRow::new("Lat:", display_float(fix.latitude)),
        CardRow::new("Long:", display_float(fix.longitude)),
        CardRow::new("Alt:", display_float(fix.altitude)),
        CardRow::new("Speed:", display_float(fix.speed)),
    ];
    let mut column_b = vec![
        CardRow::new("Time:", fix.time.to_string()),
        CardRow::new("TTFF:", TTFF_PLACEHOLDER),
        CardRow::new("H/V Acc:", optional_float(fix.accuracy)),
        CardRow::new("Bearing:", display_float(fix.bearing)),
    ];

    if accuracy_supported {
        column_a.push(CardRow::new(
            "Speed Acc:",
            optional_float(fix.speed_accuracy),
        ));
        column_b.push(CardRow::new(
            "Bearing Acc:",
            optional_float(fix.bearing_accuracy),
        ));
    }

    LocationCard { column_a, column_b }
}

/// Absent values render as the empty string, never a sentinel.
fn optional_float(value: Option<f64>) -> String {
    value.map(display_float).unwrap_or_default()
}

/// The one stringify rule for every floating-point field on the card.
///
/// Finite values use the shortest decimal representation that round-trips,
/// with `.0` appended when no fractional part is produced, so `240.0`
/// renders as "240.0" rather than "240". Non-finite values pass through as
/// `Display` spells them ("NaN", "inf", "-inf").
fn display_float(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_fix() -> LocationFix {
        LocationFix::builder()
            .latitude(28.92973474)
            .longitude(-87.4345494)
            .altitude(13.5)
            .speed(21.5)
            .bearing(240.0)
            .time(1_633_375_741_711)
            .accuracy(123.0)
            .speed_accuracy(1.0)
            .bearing_accuracy(2.0)
            .build()
    }

    fn labels(rows: &[CardRow]) -> Vec<&str> {
        rows.iter().map(|row| row.label.as_str()).collect()
    }

    fn values(rows: &[CardRow]) -> Vec<&str> {
        rows.iter().map(|row| row.value.as_str()).collect()
    }

    #[test]
    fn test_full_fix_formats_both_columns() {
        let card = format_fix(&demo_fix(), true);

        assert_eq!(
            labels(&card.column_a),
            ["Lat:", "Long:", "Alt:", "Speed:", "Speed Acc:"]
        );
        assert_eq!(
            values(&card.column_a),
            ["28.92973474", "-87.4345494", "13.5", "21.5", "1.0"]
        );
        assert_eq!(
            labels(&card.column_b),
            ["Time:", "TTFF:", "H/V Acc:", "Bearing:", "Bearing Acc:"]
        );
        assert_eq!(
            values(&card.column_b),
            ["1633375741711", "3 sec", "123.0", "240.0", "2.0"]
        );
    }

    #[test]
    fn test_unsupported_capability_omits_accuracy_rows() {
        let card = format_fix(&demo_fix(), false);

        assert_eq!(labels(&card.column_a), ["Lat:", "Long:", "Alt:", "Speed:"]);
        assert_eq!(
            labels(&card.column_b),
            ["Time:", "TTFF:", "H/V Acc:", "Bearing:"]
        );

        // The remaining eight values are unchanged by the gate.
        assert_eq!(
            values(&card.column_a),
            ["28.92973474", "-87.4345494", "13.5", "21.5"]
        );
        assert_eq!(
            values(&card.column_b),
            ["1633375741711", "3 sec", "123.0", "240.0"]
        );
    }

    #[test]
    fn test_missing_speed_accuracy_renders_empty() {
        let mut fix = demo_fix();
        fix.speed_accuracy = None;

        let card = format_fix(&fix, true);
        let speed_acc = &card.column_a[4];
        assert_eq!(speed_acc.label, "Speed Acc:");
        assert_eq!(
            speed_acc.value, "",
            "an absent value should render as the empty string, not a sentinel"
        );
    }

    #[test]
    fn test_missing_accuracy_renders_empty() {
        let mut fix = demo_fix();
        fix.accuracy = None;

        let card = format_fix(&fix, true);
        let hv_acc = &card.column_b[2];
        assert_eq!(hv_acc.label, "H/V Acc:");
        assert_eq!(hv_acc.value, "");
    }

    #[test]
    fn test_zero_accuracy_is_present_not_absent() {
        let mut fix = demo_fix();
        fix.accuracy = Some(0.0);

        let card = format_fix(&fix, true);
        assert_eq!(
            card.column_b[2].value, "0.0",
            "zero is a valid accuracy and must not be treated as absent"
        );
    }

    #[test]
    fn test_ttff_is_a_fixed_placeholder() {
        let card = format_fix(&demo_fix(), true);
        assert_eq!(card.column_b[1].value, "3 sec");

        let mut other = demo_fix();
        other.time = 0;
        other.speed = 0.0;
        let card = format_fix(&other, false);
        assert_eq!(
            card.column_b[1].value, "3 sec",
            "TTFF is a placeholder and never derived from the fix"
        );
    }

    #[test]
    fn test_display_float_keeps_integral_values_fractional() {
        assert_eq!(display_float(240.0), "240.0");
        assert_eq!(display_float(2.0), "2.0");
        assert_eq!(display_float(-0.0), "-0.0");
        assert_eq!(display_float(21.5), "21.5");
        assert_eq!(display_float(28.92973474), "28.92973474");
        assert_eq!(display_float(-87.4345494), "-87.4345494");
    }

    #[test]
    fn test_display_float_is_total_over_non_finite_values() {
        assert_eq!(display_float(f64::NAN), "NaN");
        assert_eq!(display_float(f64::INFINITY), "inf");
        assert_eq!(display_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_non_finite_fields_format_without_error() {
        let mut fix = demo_fix();
        fix.speed = f64::NAN;
        fix.bearing = f64::INFINITY;

        let card = format_fix(&fix, true);
        assert_eq!(card.column_a[3].value, "NaN");
        assert_eq!(card.column_b[3].value, "inf");
    }
}
