use crate::model::state::{METRIC_MAX, METRIC_MIN};

/// Round half toward positive infinity (2.5 -> 3, -2.5 -> -2).
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Replace NaN and infinities with 0.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Round and clamp into the metric range. Non-finite input clamps to the minimum.
pub fn clamp_metric(value: f64) -> i32 {
    if !value.is_finite() {
        return METRIC_MIN;
    }
    let rounded = round_half_up(value);
    if rounded < METRIC_MIN as f64 {
        METRIC_MIN
    } else if rounded > METRIC_MAX as f64 {
        METRIC_MAX
    } else {
        rounded as i32
    }
}

/// Round an optional delta to an integer; missing or non-finite is 0.
pub fn round_delta(delta: Option<f64>) -> i32 {
    match delta {
        Some(d) if d.is_finite() => round_half_up(d).clamp(i32::MIN as f64, i32::MAX as f64) as i32,
        _ => 0,
    }
}
