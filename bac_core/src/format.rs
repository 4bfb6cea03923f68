//! Human-readable formatting for BAC values and durations.

use crate::tables::STANDARD_DRINK_ALCOHOL_OZ;

/// BAC as a percentage string, e.g. `0.0812` → `"8.12%"`
pub fn format_bac(bac: f64) -> String {
    format!("{:.2}%", bac * 100.0)
}

/// BAC as a 3-decimal string, e.g. `"0.081"`
pub fn format_bac_decimal(bac: f64) -> String {
    format!("{:.3}", bac)
}

/// Minutes as `"45 min"`, `"2h"` or `"2h 5m"`; `None` renders as `"N/A"`
pub fn format_duration(minutes: Option<i64>) -> String {
    let Some(minutes) = minutes else {
        return "N/A".to_string();
    };
    if minutes < 60 {
        return format!("{} min", minutes);
    }

    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, mins)
    }
}

/// Number of US standard drinks (0.6 oz pure alcohol each), 1 decimal
pub fn standard_drinks(size_oz: f64, alcohol_percent: f64) -> f64 {
    let pure_alcohol = size_oz * (alcohol_percent / 100.0);
    (pure_alcohol / STANDARD_DRINK_ALCOHOL_OZ * 10.0).round() / 10.0
}
