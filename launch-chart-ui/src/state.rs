//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use launch_data::{SiteChoice, SliderConfig};
use launch_db::Database;

/// Shared state for the launch records dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded launch table (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the table is still loading
    pub loading: Signal<bool>,
    /// Fatal load error
    pub error_msg: Signal<Option<String>>,
    /// Error for the current selection; no charts are drawn while set
    pub view_error: Signal<Option<String>>,
    /// Raw dropdown value (`ALL`, `OPT1`..`OPT4`)
    pub selected_site: Signal<String>,
    /// Lower payload bound (kg), exclusive
    pub payload_low: Signal<f64>,
    /// Upper payload bound (kg), exclusive
    pub payload_high: Signal<f64>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    ///
    /// The payload bounds start at the slider's full span and are narrowed to
    /// the table's min/max payload once the data is loaded.
    pub fn new() -> Self {
        let slider = SliderConfig::DEFAULT;
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            view_error: Signal::new(None),
            selected_site: Signal::new(SiteChoice::default().option_key().to_string()),
            payload_low: Signal::new(slider.min),
            payload_high: Signal::new(slider.max),
        }
    }
}

/// New lower bound after the low handle moves to `value`.
///
/// Clamped to the slider span and never above the current upper bound.
pub fn move_low_handle(value: f64, high: f64, slider: &SliderConfig) -> f64 {
    value.clamp(slider.min, slider.max).min(high)
}

/// New upper bound after the high handle moves to `value`.
///
/// Clamped to the slider span and never below the current lower bound.
pub fn move_high_handle(value: f64, low: f64, slider: &SliderConfig) -> f64 {
    value.clamp(slider.min, slider.max).max(low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_handle_cannot_cross_high() {
        let slider = SliderConfig::DEFAULT;
        assert_eq!(move_low_handle(3000.0, 5000.0, &slider), 3000.0);
        assert_eq!(move_low_handle(7000.0, 5000.0, &slider), 5000.0);
        assert_eq!(move_low_handle(-100.0, 5000.0, &slider), 0.0);
    }

    #[test]
    fn high_handle_cannot_cross_low() {
        let slider = SliderConfig::DEFAULT;
        assert_eq!(move_high_handle(8000.0, 2000.0, &slider), 8000.0);
        assert_eq!(move_high_handle(1000.0, 2000.0, &slider), 2000.0);
        assert_eq!(move_high_handle(20000.0, 2000.0, &slider), 10000.0);
    }
}
