//! Query result and chart view structs.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend, or printed by the CLI.

use launch_data::LaunchSite;
use serde::Serialize;

/// Launch and success totals for one site.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteSummary {
    pub launch_site: LaunchSite,
    pub launches: u32,
    /// Sum of the `class` flag over the site's launches
    pub successes: u32,
}

/// Success and failure counts within a single site.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub successes: u32,
    pub failures: u32,
}

impl OutcomeCounts {
    pub fn total(&self) -> u32 {
        self.successes + self.failures
    }
}

/// One launch as a scatter chart point.
///
/// `payload_mass` is the x coordinate, `class` the y coordinate and
/// `booster_version_category` the color group.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PayloadPoint {
    pub flight_number: Option<u32>,
    pub launch_site: LaunchSite,
    pub payload_mass: f64,
    pub class: u8,
    pub booster_version: Option<String>,
    pub booster_version_category: String,
}

/// A labeled pie slice.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: u32,
}

/// Aggregate view: the pie chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieView {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieView {
    /// Sum of all slice values.
    pub fn total(&self) -> u32 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// Detail view: the payload vs. outcome scatter chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterView {
    pub title: String,
    pub points: Vec<PayloadPoint>,
}

/// Both chart views for one filter selection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub pie: PieView,
    pub scatter: ScatterView,
}
