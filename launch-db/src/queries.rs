//! Typed query methods over the `launches` table.
//!
//! All queries return typed structs from [`crate::models`] (or
//! [`LaunchRecord`]) that can be serialized to JSON.
//!
//! Payload filtering is strict on both bounds (`>` / `<`), matching
//! [`PayloadRange::contains`].

use crate::models::{OutcomeCounts, PayloadPoint, SiteSummary};
use crate::Database;
use launch_data::{LaunchDataError, LaunchRecord, LaunchSite, PayloadRange};
use rusqlite::types::Type;
use rusqlite::{params, Row};

/// Read a `launch_site` column back into the enum.
fn site_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<LaunchSite> {
    let name: String = row.get(idx)?;
    LaunchSite::from_name(&name).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            Box::new(LaunchDataError::UnknownSite { row: 0, value: name }),
        )
    })
}

impl Database {
    /// Number of launch records in the table.
    pub fn count_launches(&self) -> anyhow::Result<u32> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM launches", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Every launch record, in load order.
    pub fn query_launches(&self) -> anyhow::Result<Vec<LaunchRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT flight_number, launch_site, payload_mass, class, booster_version, booster_version_category
             FROM launches
             ORDER BY rowid",
        )?;
        let rows = stmt
            .query_map([], |row| {
                let class: i64 = row.get(3)?;
                Ok(LaunchRecord {
                    flight_number: row.get(0)?,
                    launch_site: site_column(row, 1)?,
                    payload_mass: row.get(2)?,
                    success: class == 1,
                    booster_version: row.get(4)?,
                    booster_version_category: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Launch and success totals per site, ordered by site name.
    ///
    /// Only sites with at least one launch appear.
    pub fn query_site_summaries(&self) -> anyhow::Result<Vec<SiteSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT launch_site, COUNT(*) AS launches, SUM(class) AS successes
             FROM launches
             GROUP BY launch_site
             ORDER BY launch_site",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SiteSummary {
                    launch_site: site_column(row, 0)?,
                    launches: row.get(1)?,
                    successes: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "query: query_site_summaries returned {} sites",
            rows.len()
        );
        Ok(rows)
    }

    /// Success and failure counts for one site.
    ///
    /// A site with no launches yields zero for both.
    pub fn query_site_outcomes(&self, site: LaunchSite) -> anyhow::Result<OutcomeCounts> {
        let (launches, successes): (u32, u32) = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(class), 0)
             FROM launches
             WHERE launch_site = ?1",
            params![site.name()],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(OutcomeCounts {
            successes,
            failures: launches - successes,
        })
    }

    /// Launches with a payload strictly inside `range`, optionally restricted
    /// to one site, in load order.
    pub fn query_payload_points(
        &self,
        site: Option<LaunchSite>,
        range: PayloadRange,
    ) -> anyhow::Result<Vec<PayloadPoint>> {
        let mut stmt = self.conn.prepare(
            "SELECT flight_number, launch_site, payload_mass, class, booster_version, booster_version_category
             FROM launches
             WHERE payload_mass > ?1 AND payload_mass < ?2
               AND (?3 IS NULL OR launch_site = ?3)
             ORDER BY rowid",
        )?;
        let rows = stmt
            .query_map(
                params![range.low(), range.high(), site.map(LaunchSite::name)],
                |row| {
                    Ok(PayloadPoint {
                        flight_number: row.get(0)?,
                        launch_site: site_column(row, 1)?,
                        payload_mass: row.get(2)?,
                        class: row.get(3)?,
                        booster_version: row.get(4)?,
                        booster_version_category: row.get(5)?,
                    })
                },
            )?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "query: query_payload_points returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Smallest and largest payload mass, or `None` for an empty table.
    pub fn query_payload_bounds(&self) -> anyhow::Result<Option<(f64, f64)>> {
        let (min, max): (Option<f64>, Option<f64>) = self.conn.query_row(
            "SELECT MIN(payload_mass), MAX(payload_mass) FROM launches",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(min.zip(max))
    }
}

#[cfg(test)]
mod tests {
    use crate::testdata::SAMPLE_CSV;
    use crate::Database;
    use launch_data::{LaunchSite, PayloadRange};

    fn sample_db() -> Database {
        Database::load(SAMPLE_CSV).unwrap()
    }

    fn everything() -> PayloadRange {
        PayloadRange::new(f64::NEG_INFINITY, f64::INFINITY).unwrap()
    }

    #[test]
    fn site_summaries_group_by_site() {
        let db = sample_db();
        let summaries = db.query_site_summaries().unwrap();

        let sites: Vec<LaunchSite> = summaries.iter().map(|s| s.launch_site).collect();
        // Ordered by site name
        assert_eq!(
            sites,
            vec![
                LaunchSite::CcafsLc40,
                LaunchSite::CcafsSlc40,
                LaunchSite::KscLc39a,
                LaunchSite::VafbSlc4e,
            ]
        );

        let counts: Vec<(u32, u32)> = summaries.iter().map(|s| (s.launches, s.successes)).collect();
        assert_eq!(counts, vec![(4, 1), (2, 1), (4, 3), (2, 1)]);
    }

    #[test]
    fn site_summaries_skip_sites_without_launches() {
        let db = Database::load(
            "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
             KSC LC-39A,1,2490,FT\n",
        )
        .unwrap();
        let summaries = db.query_site_summaries().unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].launch_site, LaunchSite::KscLc39a);
    }

    #[test]
    fn site_outcomes_split_successes_and_failures() {
        let db = sample_db();
        let ksc = db.query_site_outcomes(LaunchSite::KscLc39a).unwrap();
        assert_eq!(ksc.successes, 3);
        assert_eq!(ksc.failures, 1);
        assert_eq!(ksc.total(), 4);
    }

    #[test]
    fn site_outcomes_for_site_without_launches_are_zero() {
        let db = Database::load(
            "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
             KSC LC-39A,1,2490,FT\n",
        )
        .unwrap();
        let vafb = db.query_site_outcomes(LaunchSite::VafbSlc4e).unwrap();
        assert_eq!(vafb.total(), 0);
    }

    #[test]
    fn payload_points_exclude_bounds() {
        let db = sample_db();
        // 525.0 and 9600.0 are exact payloads in the sample
        let range = PayloadRange::new(525.0, 9600.0).unwrap();
        let points = db.query_payload_points(None, range).unwrap();

        assert!(points.iter().all(|p| p.payload_mass > 525.0 && p.payload_mass < 9600.0));
        // 0, 525, 500, 9600, 9600 excluded
        assert_eq!(points.len(), 7);
    }

    #[test]
    fn payload_points_restricted_to_site() {
        let db = sample_db();
        let points = db
            .query_payload_points(Some(LaunchSite::CcafsLc40), everything())
            .unwrap();
        assert_eq!(points.len(), 4);
        assert!(points.iter().all(|p| p.launch_site == LaunchSite::CcafsLc40));

        // Load order is preserved
        let flights: Vec<Option<u32>> = points.iter().map(|p| p.flight_number).collect();
        assert_eq!(flights, vec![Some(1), Some(2), Some(3), Some(4)]);
    }

    #[test]
    fn payload_points_carry_chart_fields() {
        let db = sample_db();
        let range = PayloadRange::new(9000.0, 9700.0).unwrap();
        let points = db
            .query_payload_points(Some(LaunchSite::VafbSlc4e), range)
            .unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].payload_mass, 9600.0);
        assert_eq!(points[0].class, 1);
        assert_eq!(points[0].booster_version_category, "FT");
        assert_eq!(points[0].booster_version.as_deref(), Some("F9 FT B1036.1"));
    }

    #[test]
    fn payload_bounds_span_table() {
        let db = sample_db();
        assert_eq!(db.query_payload_bounds().unwrap(), Some((0.0, 9600.0)));
    }

    #[test]
    fn payload_bounds_of_empty_table() {
        let db =
            Database::load("Launch Site,class,Payload Mass (kg),Booster Version Category\n")
                .unwrap();
        assert_eq!(db.query_payload_bounds().unwrap(), None);
    }
}
