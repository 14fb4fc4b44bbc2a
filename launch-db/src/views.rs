//! Chart view computation for the dashboard.
//!
//! Each view is a pure function of the loaded table and the current filter
//! selection; nothing is cached between calls.
//!
//! - Pie (aggregate) view: for [`SiteChoice::All`], successful launches per
//!   site; for one site, that site's success vs. failure counts.
//! - Scatter (detail) view: every launch with `low < payload < high`,
//!   restricted to the chosen site unless all sites are selected.

use crate::models::{DashboardView, PieSlice, PieView, ScatterView};
use crate::Database;
use launch_data::{LaunchDataError, PayloadRange, SiteChoice};

pub const SUCCESS_LABEL: &str = "Success";
pub const FAILURE_LABEL: &str = "Failure";

/// Pie chart title for a site choice.
pub fn pie_title(choice: SiteChoice) -> String {
    match choice {
        SiteChoice::All => "Total Success Launches By Site".to_string(),
        SiteChoice::Site(site) => format!("Total Success Launches of Site {}", site),
    }
}

/// Scatter chart title for a site choice.
pub fn scatter_title(choice: SiteChoice) -> String {
    match choice {
        SiteChoice::All => "Correlation between Payload and Success for all Sites".to_string(),
        SiteChoice::Site(site) => format!("Correlation between Payload and Success for {}", site),
    }
}

impl Database {
    /// Aggregate view for the pie chart.
    pub fn pie_view(&self, choice: SiteChoice) -> anyhow::Result<PieView> {
        let slices = match choice {
            SiteChoice::All => self
                .query_site_summaries()?
                .into_iter()
                .map(|s| PieSlice {
                    label: s.launch_site.name().to_string(),
                    value: s.successes,
                })
                .collect(),
            SiteChoice::Site(site) => {
                let outcomes = self.query_site_outcomes(site)?;
                vec![
                    PieSlice {
                        label: SUCCESS_LABEL.to_string(),
                        value: outcomes.successes,
                    },
                    PieSlice {
                        label: FAILURE_LABEL.to_string(),
                        value: outcomes.failures,
                    },
                ]
            }
        };
        Ok(PieView {
            title: pie_title(choice),
            slices,
        })
    }

    /// Detail view for the scatter chart.
    pub fn scatter_view(
        &self,
        choice: SiteChoice,
        range: PayloadRange,
    ) -> anyhow::Result<ScatterView> {
        let points = self.query_payload_points(choice.site(), range)?;
        Ok(ScatterView {
            title: scatter_title(choice),
            points,
        })
    }

    /// Both views for one selection.
    pub fn dashboard_view(
        &self,
        choice: SiteChoice,
        range: PayloadRange,
    ) -> anyhow::Result<DashboardView> {
        log::debug!(
            "views: computing dashboard for {} in ({}, {})",
            choice,
            range.low(),
            range.high()
        );
        Ok(DashboardView {
            pie: self.pie_view(choice)?,
            scatter: self.scatter_view(choice, range)?,
        })
    }

    /// Both views for raw UI input: a dropdown option key and slider bounds.
    ///
    /// An option key outside `ALL`/`OPT1`..`OPT4` (or a site name) fails with
    /// [`launch_data::LaunchDataError::UnknownSiteChoice`]; inverted or NaN
    /// bounds fail with `InvalidPayloadRange`. No chart is produced for
    /// either.
    pub fn dashboard_view_for(
        &self,
        option_key: &str,
        low: f64,
        high: f64,
    ) -> anyhow::Result<DashboardView> {
        let choice: SiteChoice = option_key.parse()?;
        let range = PayloadRange::new(low, high)?;
        self.dashboard_view(choice, range)
    }

    /// Starting slider position: the smallest and largest payload in the table.
    ///
    /// An empty table has no starting position and fails with
    /// [`LaunchDataError::EmptyTable`].
    pub fn initial_payload_range(&self) -> anyhow::Result<PayloadRange> {
        let (min_payload, max_payload) = self
            .query_payload_bounds()?
            .ok_or(LaunchDataError::EmptyTable)?;
        Ok(PayloadRange::new(min_payload, max_payload)?)
    }
}
