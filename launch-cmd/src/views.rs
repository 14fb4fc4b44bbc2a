//! Chart views rendered as JSON for the terminal.

use anyhow::Context;
use launch_data::{PayloadRange, SiteChoice};
use launch_db::Database;
use log::info;
use serde::Serialize;

/// Read a launch CSV from disk and load it.
pub fn load_database(path: &str) -> anyhow::Result<Database> {
    let csv_data =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
    let db = Database::load(&csv_data).with_context(|| format!("invalid launch data in {}", path))?;
    info!("Loaded {} launches from {}", db.count_launches()?, path);
    Ok(db)
}

/// Aggregate view for a site choice, pretty-printed.
pub fn pie_json(db: &Database, site: &str) -> anyhow::Result<String> {
    let choice: SiteChoice = site.parse()?;
    let view = db.pie_view(choice)?;
    Ok(serde_json::to_string_pretty(&view)?)
}

/// Detail view for a site choice and payload window, pretty-printed.
///
/// Missing bounds default to the table's smallest/largest payload, the same
/// starting position as the dashboard slider; an empty table then has no
/// default and is an error. Launches sitting exactly on a bound are excluded.
pub fn scatter_json(
    db: &Database,
    site: &str,
    low: Option<f64>,
    high: Option<f64>,
) -> anyhow::Result<String> {
    let choice: SiteChoice = site.parse()?;
    let range = match (low, high) {
        (Some(low), Some(high)) => PayloadRange::new(low, high)?,
        _ => {
            let start = db.initial_payload_range()?;
            PayloadRange::new(low.unwrap_or(start.low()), high.unwrap_or(start.high()))?
        }
    };
    let view = db.scatter_view(choice, range)?;
    Ok(serde_json::to_string_pretty(&view)?)
}

/// One dropdown entry with its totals.
#[derive(Debug, Serialize)]
struct SiteRow {
    option_key: &'static str,
    label: &'static str,
    launches: u32,
    successes: u32,
}

/// Every site choice (including `ALL`) with launch and success counts.
pub fn sites_json(db: &Database) -> anyhow::Result<String> {
    let summaries = db.query_site_summaries()?;
    let rows: Vec<SiteRow> = SiteChoice::options()
        .map(|choice| {
            let (launches, successes) = summaries
                .iter()
                .filter(|s| choice.site().map_or(true, |site| site == s.launch_site))
                .fold((0, 0), |(l, w), s| (l + s.launches, w + s.successes));
            SiteRow {
                option_key: choice.option_key(),
                label: choice.label(),
                launches,
                successes,
            }
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use launch_data::LaunchDataError;
    use serde_json::Value;

    const FIXTURE: &str = include_str!("../../fixtures/spacex_launch_dash.csv");

    fn fixture_db() -> Database {
        Database::load(FIXTURE).unwrap()
    }

    #[test]
    fn pie_for_all_sites_counts_every_success() {
        let db = fixture_db();
        let json: Value = serde_json::from_str(&pie_json(&db, "ALL").unwrap()).unwrap();
        let total: u64 = json["slices"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["value"].as_u64().unwrap())
            .sum();
        let expected = FIXTURE
            .lines()
            .skip(1)
            .filter(|line| line.split(',').nth(3) == Some("1"))
            .count() as u64;
        assert_eq!(total, expected);
    }

    #[test]
    fn pie_for_one_site_accepts_site_name() {
        let db = fixture_db();
        let by_key = pie_json(&db, "OPT3").unwrap();
        let by_name = pie_json(&db, "KSC LC-39A").unwrap();
        assert_eq!(by_key, by_name);
    }

    #[test]
    fn pie_rejects_unknown_site() {
        let db = fixture_db();
        let err = pie_json(&db, "Boca Chica").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LaunchDataError>(),
            Some(LaunchDataError::UnknownSiteChoice(_))
        ));
    }

    #[test]
    fn scatter_defaults_exclude_payload_extremes() {
        let db = fixture_db();
        let (min_payload, max_payload) = db.query_payload_bounds().unwrap().unwrap();
        let json: Value =
            serde_json::from_str(&scatter_json(&db, "ALL", None, None).unwrap()).unwrap();
        let points = json["points"].as_array().unwrap();
        assert!(!points.is_empty());
        for p in points {
            let mass = p["payload_mass"].as_f64().unwrap();
            assert!(mass > min_payload && mass < max_payload);
        }
    }

    #[test]
    fn scatter_with_explicit_bounds() {
        let db = fixture_db();
        let json: Value = serde_json::from_str(
            &scatter_json(&db, "OPT2", Some(-1.0), Some(10000.0)).unwrap(),
        )
        .unwrap();
        let points = json["points"].as_array().unwrap();
        assert!(points.iter().all(|p| p["launch_site"] == "VAFB SLC-4E"));
        assert_eq!(
            json["title"],
            "Correlation between Payload and Success for VAFB SLC-4E"
        );
    }

    #[test]
    fn scatter_rejects_inverted_bounds() {
        let db = fixture_db();
        assert!(scatter_json(&db, "ALL", Some(8000.0), Some(2000.0)).is_err());
    }

    #[test]
    fn scatter_defaults_need_launches() {
        let db = Database::load(
            "Launch Site,class,Payload Mass (kg),Booster Version Category\n",
        )
        .unwrap();
        let err = scatter_json(&db, "ALL", None, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LaunchDataError>(),
            Some(LaunchDataError::EmptyTable)
        ));
        assert!(scatter_json(&db, "ALL", Some(0.0), Some(10000.0)).is_ok());
    }

    #[test]
    fn sites_lists_all_choices_with_totals() {
        let db = fixture_db();
        let json: Value = serde_json::from_str(&sites_json(&db).unwrap()).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0]["option_key"], "ALL");

        let all_launches = rows[0]["launches"].as_u64().unwrap();
        let per_site: u64 = rows[1..]
            .iter()
            .map(|r| r["launches"].as_u64().unwrap())
            .sum();
        assert_eq!(all_launches, per_site);
        assert_eq!(all_launches, db.count_launches().unwrap() as u64);
    }

    #[test]
    fn load_database_reports_missing_file() {
        let err = load_database("/nonexistent/launches.csv").err().unwrap();
        assert!(err.to_string().contains("/nonexistent/launches.csv"));
    }
}
