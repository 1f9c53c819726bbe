use crate::system::sampler::Sample;

/// Shown before the first valid measurement, and on unavailable ticks when
/// the display is not holding the last good value.
pub const PLACEHOLDER: &str = "Calculating...";

const MAX_DECIMAL_PLACES: u8 = 6;

pub fn format_percent(value: f64, decimal_places: u8) -> String {
    let places = usize::from(decimal_places.min(MAX_DECIMAL_PLACES));
    format!("{value:.places$}%")
}

pub fn format_sample(sample: Sample, decimal_places: u8) -> String {
    match sample.usage() {
        Some(value) => format_percent(value, decimal_places),
        None => PLACEHOLDER.to_string(),
    }
}
