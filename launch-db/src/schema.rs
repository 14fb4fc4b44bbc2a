//! SQL schema for the in-memory launch table.

/// Returns the full SQL schema as a single batch string.
///
/// One table, `launches`, one row per launch record. `launch_site` stores the
/// site name exactly as it appears in the CSV; `class` is constrained to 0/1
/// so that `SUM(class)` is the success count.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS launches (
        flight_number INTEGER,
        launch_site TEXT NOT NULL,
        payload_mass REAL NOT NULL CHECK (payload_mass >= 0),
        class INTEGER NOT NULL CHECK (class IN (0, 1)),
        booster_version TEXT,
        booster_version_category TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_launches_site ON launches(launch_site);
    CREATE INDEX IF NOT EXISTS idx_launches_payload ON launches(payload_mass);
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_table_and_indexes() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for (kind, name) in [
            ("table", "launches"),
            ("index", "idx_launches_site"),
            ("index", "idx_launches_payload"),
        ] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = ?1 AND name = ?2",
                    [kind, name],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "{} '{}' should exist", kind, name);
        }
    }

    #[test]
    fn class_outside_zero_one_is_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        let result = conn.execute(
            "INSERT INTO launches (launch_site, payload_mass, class, booster_version_category)
             VALUES ('KSC LC-39A', 100.0, 2, 'FT')",
            [],
        );
        assert!(result.is_err(), "CHECK constraint should reject class = 2");
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
