//! Display formatting for dashboard figures.

pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

pub fn format_distance(km: f64) -> String {
    format!("{} km", format_number(km, 1))
}

pub fn format_energy(kwh: f64) -> String {
    format!("{} kWh", format_number(kwh, 2))
}

pub fn format_percentage(value: f64) -> String {
    format!("{}%", format_number(value, 1))
}

/// `None` when `total` is zero.
pub fn calculate_percentage(value: f64, total: f64) -> Option<f64> {
    if total == 0.0 {
        return None;
    }
    Some(value / total * 100.0)
}
