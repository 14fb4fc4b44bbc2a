//! Inserting validated launch records into the in-memory table.

use crate::Database;
use launch_data::LaunchRecord;
use rusqlite::params;

impl Database {
    /// Insert records in a single transaction.
    ///
    /// Only called while the database is being constructed.
    pub(crate) fn insert_launches(&self, records: &[LaunchRecord]) -> anyhow::Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO launches
                 (flight_number, launch_site, payload_mass, class, booster_version, booster_version_category)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for r in records {
                stmt.execute(params![
                    r.flight_number,
                    r.launch_site.name(),
                    r.payload_mass,
                    r.outcome(),
                    r.booster_version,
                    r.booster_version_category,
                ])?;
            }
        }
        tx.commit()?;
        log::info!("loader: Loaded {} launch records", records.len());
        Ok(())
    }
}
