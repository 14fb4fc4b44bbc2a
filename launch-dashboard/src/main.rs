//! SpaceX Launch Records Dashboard
//!
//! A site dropdown and a payload range slider drive two D3.js charts: a pie
//! chart of successful launches and a payload vs. outcome scatter chart.
//!
//! Data flow:
//! 1. `build.rs` checks the header of `spacex_launch_dash.csv` and copies it
//!    into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is loaded into an in-memory SQLite database once and
//!    the slider is set to the table's min/max payload.
//! 4. Whenever the dropdown or slider changes, both views are recomputed from
//!    the database and redrawn.

use dioxus::prelude::*;
use launch_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, PayloadRangeSlider, SiteSelector,
};
use launch_chart_ui::js_bridge;
use launch_chart_ui::state::AppState;
use launch_data::SliderConfig;
use launch_db::Database;

/// Launch records, embedded at compile time.
const LAUNCH_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/spacex_launch_dash.csv"));

const PIE_CHART_ID: &str = "success-pie-chart";
const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("launch-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut launch_count = use_signal(|| 0u32);

    // ─── Effect 1: Load the launch table once on mount ───
    use_effect(move || {
        let db = match Database::load(LAUNCH_CSV) {
            Ok(db) => db,
            Err(e) => {
                log::error!("Failed to load launch records: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load launch records: {}", e)));
                state.loading.set(false);
                return;
            }
        };

        match db.count_launches() {
            Ok(count) => launch_count.set(count),
            Err(e) => log::warn!("Failed to count launches: {}", e),
        }

        // Slider starts at the dataset's payload extremes
        match db.initial_payload_range() {
            Ok(start) => {
                state.payload_low.set(start.low());
                state.payload_high.set(start.high());
            }
            Err(e) => {
                log::error!("No launch records to chart: {}", e);
                state
                    .error_msg
                    .set(Some(format!("No launch records to chart: {}", e)));
                state.loading.set(false);
                return;
            }
        }

        js_bridge::init_charts();
        state.db.set(Some(db));
        state.loading.set(false);
    });

    // ─── Effect 2: Recompute and redraw both charts on any input change ───
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };

        let site = (state.selected_site)();
        let low = (state.payload_low)();
        let high = (state.payload_high)();
        log::info!("Recomputing views for site={} payload=({}, {})", site, low, high);

        match db.dashboard_view_for(&site, low, high) {
            Ok(view) => {
                state.view_error.set(None);
                let slider = SliderConfig::DEFAULT;
                js_bridge::render_pie_chart(PIE_CHART_ID, &view.pie);
                js_bridge::render_scatter_chart(
                    SCATTER_CHART_ID,
                    &view.scatter,
                    slider.min,
                    slider.max,
                );
            }
            Err(e) => {
                log::warn!("No charts for site={}: {}", site, e);
                state.view_error.set(Some(e.to_string()));
                js_bridge::destroy_chart(PIE_CHART_ID);
                js_bridge::destroy_chart(SCATTER_CHART_ID);
            }
        }
    });

    // ─── Render ───
    let subtitle = match launch_count() {
        0 => String::new(),
        n => format!("{} launch records", n),
    };

    let placeholder = if state.view_error.read().is_some() {
        "No data for this selection".to_string()
    } else {
        String::new()
    };

    rsx! {
        div {
            style: "max-width: 1000px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            ChartHeader {
                title: "SpaceX Launch Records Dashboard".to_string(),
                subtitle: subtitle,
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay {
                    heading: "Failed to load data".to_string(),
                    message: err.clone(),
                }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else if state.db.read().is_some() {
                SiteSelector {}
                br {}

                if let Some(err) = state.view_error.read().as_ref() {
                    ErrorDisplay {
                        heading: "No chart for this selection".to_string(),
                        message: err.clone(),
                    }
                }

                ChartContainer {
                    id: PIE_CHART_ID.to_string(),
                    placeholder: placeholder.clone(),
                    min_height: 400,
                }
                br {}

                PayloadRangeSlider {}

                ChartContainer {
                    id: SCATTER_CHART_ID.to_string(),
                    placeholder: placeholder,
                    min_height: 400,
                }
            }
        }
    }
}
