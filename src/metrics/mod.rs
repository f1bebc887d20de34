// Metric formatting and health classification
//
// Turns raw golden metrics (success rate, request rate, latency) into the
// strings and health classes shown on resource cards.

/// Placeholder shown for absent metrics
pub const NO_VALUE: &str = "---";

/// Success rate below this is classified as poor
pub const POOR_THRESHOLD: f64 = 0.90;

/// Success rate below this (and at or above POOR_THRESHOLD) is a warning
pub const WARNING_THRESHOLD: f64 = 0.95;

/// Kind of metric being formatted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Unitless rate such as requests per second
    Rate,
    /// Latency in milliseconds
    Latency,
    /// Fraction in [0, 1] shown as a percentage
    SuccessRate,
}

/// Health class derived from a success rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuccessRateClass {
    /// No traffic, nothing to judge
    Neutral,
    Good,
    Warning,
    Poor,
}

/// Classify a success rate into a health class
///
/// Absent or NaN rates are `Neutral`.
pub fn classify_success_rate(rate: Option<f64>) -> SuccessRateClass {
    match rate {
        None => SuccessRateClass::Neutral,
        Some(r) if r.is_nan() => SuccessRateClass::Neutral,
        Some(r) if r < POOR_THRESHOLD => SuccessRateClass::Poor,
        Some(r) if r < WARNING_THRESHOLD => SuccessRateClass::Warning,
        Some(_) => SuccessRateClass::Good,
    }
}

/// Format a metric value for display
///
/// Absent or non-finite values render as `---`.
pub fn format_metric(kind: MetricKind, value: Option<f64>) -> String {
    let value = match value {
        Some(v) if v.is_finite() => v,
        _ => return NO_VALUE.to_string(),
    };

    match kind {
        MetricKind::Rate => format_rate(value),
        MetricKind::Latency => format_latency_ms(value),
        MetricKind::SuccessRate => format!("{:.2}%", value * 100.0),
    }
}

/// SI-suffixed rate; the unit is picked after rounding, so 999.96 is "1k"
fn format_rate(value: f64) -> String {
    const UNITS: [(f64, &str); 3] = [(1.0, ""), (1e3, "k"), (1e6, "M")];

    for (scale, suffix) in UNITS {
        let scaled = round_tenth(value / scale);
        if scaled.abs() < 1000.0 {
            return format!("{}{}", trim_decimal(scaled), suffix);
        }
    }
    format!("{}G", trim_decimal(round_tenth(value / 1e9)))
}

fn format_latency_ms(ms: f64) -> String {
    if ms < 1.0 && ms > 0.0 {
        return "< 1 ms".to_string();
    }

    let rounded = ms.round();
    if rounded < 1000.0 {
        format!("{} ms", rounded as i64)
    } else {
        format!("{:.2} s", ms / 1000.0)
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One decimal place, dropping a trailing ".0"
fn trim_decimal(value: f64) -> String {
    let s = format!("{:.1}", value);
    match s.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_success_rate_thresholds() {
        assert_eq!(classify_success_rate(None), SuccessRateClass::Neutral);
        assert_eq!(classify_success_rate(Some(f64::NAN)), SuccessRateClass::Neutral);
        assert_eq!(classify_success_rate(Some(0.0)), SuccessRateClass::Poor);
        assert_eq!(classify_success_rate(Some(0.899)), SuccessRateClass::Poor);
        assert_eq!(classify_success_rate(Some(0.90)), SuccessRateClass::Warning);
        assert_eq!(classify_success_rate(Some(0.949)), SuccessRateClass::Warning);
        assert_eq!(classify_success_rate(Some(0.95)), SuccessRateClass::Good);
        assert_eq!(classify_success_rate(Some(1.0)), SuccessRateClass::Good);
    }

    #[test]
    fn test_format_missing_values() {
        assert_eq!(format_metric(MetricKind::Rate, None), "---");
        assert_eq!(format_metric(MetricKind::Latency, None), "---");
        assert_eq!(format_metric(MetricKind::SuccessRate, Some(f64::NAN)), "---");
        assert_eq!(format_metric(MetricKind::Rate, Some(f64::INFINITY)), "---");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_metric(MetricKind::Rate, Some(0.0)), "0");
        assert_eq!(format_metric(MetricKind::Rate, Some(12.5)), "12.5");
        assert_eq!(format_metric(MetricKind::Rate, Some(12.0)), "12");
        assert_eq!(format_metric(MetricKind::Rate, Some(1500.0)), "1.5k");
        assert_eq!(format_metric(MetricKind::Rate, Some(2_000_000.0)), "2M");
        assert_eq!(format_metric(MetricKind::Rate, Some(3.26e9)), "3.3G");
    }

    #[test]
    fn test_format_rate_rounds_before_picking_unit() {
        assert_eq!(format_metric(MetricKind::Rate, Some(999.94)), "999.9");
        assert_eq!(format_metric(MetricKind::Rate, Some(999.96)), "1k");
        assert_eq!(format_metric(MetricKind::Rate, Some(999_960.0)), "1M");
        assert_eq!(format_metric(MetricKind::Rate, Some(5e12)), "5000G");
    }

    #[test]
    fn test_format_latency() {
        assert_eq!(format_metric(MetricKind::Latency, Some(0.0)), "0 ms");
        assert_eq!(format_metric(MetricKind::Latency, Some(0.4)), "< 1 ms");
        assert_eq!(format_metric(MetricKind::Latency, Some(41.0)), "41 ms");
        assert_eq!(format_metric(MetricKind::Latency, Some(999.4)), "999 ms");
        assert_eq!(format_metric(MetricKind::Latency, Some(1250.0)), "1.25 s");
    }

    #[test]
    fn test_format_latency_rounds_before_picking_unit() {
        assert_eq!(format_metric(MetricKind::Latency, Some(999.4)), "999 ms");
        assert_eq!(format_metric(MetricKind::Latency, Some(999.6)), "1.00 s");
    }

    #[test]
    fn test_format_success_rate() {
        assert_eq!(format_metric(MetricKind::SuccessRate, Some(0.9312)), "93.12%");
        assert_eq!(format_metric(MetricKind::SuccessRate, Some(1.0)), "100.00%");
    }
}
