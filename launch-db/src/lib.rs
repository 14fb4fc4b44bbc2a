//! In-memory SQLite layer for SpaceX launch records.
//!
//! The launch CSV is validated by [`launch_data::LaunchRecord::parse_csv`] and
//! loaded once into an in-memory SQLite table. Grouping and filtering are done
//! in SQL; [`views`] turns the query results into the two chart views the
//! dashboard draws.
//!
//! # Architecture
//!
//! - `Rc<Connection>` handle, cheap to clone across Dioxus components in
//!   single-threaded WASM
//! - Exactly one way to populate it: [`Database::load`] (or
//!   [`Database::from_records`]). No method mutates the table afterwards.
//! - Typed query methods returning serializable structs for D3.js and the CLI
//!
//! # Usage
//!
//! ```rust
//! use launch_data::{PayloadRange, SiteChoice};
//! use launch_db::Database;
//!
//! let db = Database::load(
//!     "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
//!      KSC LC-39A,1,2490,FT\n",
//! )
//! .unwrap();
//!
//! let pie = db.pie_view(SiteChoice::All).unwrap();
//! assert_eq!(pie.total(), 1);
//!
//! let range = PayloadRange::new(0.0, 10000.0).unwrap();
//! let scatter = db.scatter_view(SiteChoice::All, range).unwrap();
//! assert_eq!(scatter.points.len(), 1);
//! ```

pub mod schema;
mod loader;
mod queries;
pub mod models;
pub mod views;

#[cfg(test)]
mod testdata;

use launch_data::LaunchRecord;
use rusqlite::Connection;
use std::rc::Rc;

/// Read-only in-memory table of launch records.
///
/// Cloning shares the same underlying connection.
#[derive(Clone)]
pub struct Database {
    conn: Rc<Connection>,
}

impl Database {
    /// Parse a launch CSV and load it into a fresh in-memory database.
    ///
    /// This is the one-time initialization of the table. Any malformed row
    /// aborts the load; the error is a [`launch_data::LaunchDataError`]
    /// wrapped in `anyhow`.
    pub fn load(csv_data: &str) -> anyhow::Result<Self> {
        let records = LaunchRecord::parse_csv(csv_data)?;
        Self::from_records(&records)
    }

    /// Build the database from already validated records.
    pub fn from_records(records: &[LaunchRecord]) -> anyhow::Result<Self> {
        let db = Self::empty()?;
        db.insert_launches(records)?;
        Ok(db)
    }

    fn empty() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(conn),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launch_data::LaunchDataError;

    #[test]
    fn empty_database_creates_successfully() {
        let db = Database::empty();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::load(testdata::SAMPLE_CSV).unwrap();
        let db2 = db.clone();
        assert_eq!(
            db.count_launches().unwrap(),
            db2.count_launches().unwrap(),
            "Clone should see same data via shared Rc"
        );
        assert!(Rc::ptr_eq(&db.conn, &db2.conn));
    }

    #[test]
    fn load_rejects_malformed_csv() {
        let err = Database::load(
            "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
             KSC LC-39A,yes,2490,FT\n",
        )
        .err()
        .expect("invalid class should fail the load");
        let data_err = err
            .downcast_ref::<LaunchDataError>()
            .expect("load errors should be LaunchDataError");
        assert!(matches!(data_err, LaunchDataError::InvalidOutcome { row: 1, .. }));
    }

    #[test]
    fn load_header_only_gives_empty_table() {
        let db =
            Database::load("Launch Site,class,Payload Mass (kg),Booster Version Category\n")
                .unwrap();
        assert_eq!(db.count_launches().unwrap(), 0);
    }
}
