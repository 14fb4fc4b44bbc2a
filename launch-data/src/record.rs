//! The launch record and the CSV layout it is read from.
//!
//! # CSV Format
//!
//! Header row required. Columns are located by name, so order does not matter
//! and unrelated columns are ignored:
//!
//! ```text
//! ,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
//! 0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
//! ```
//!
//! `Launch Site`, `Payload Mass (kg)`, `class` and `Booster Version Category`
//! are required. `Flight Number` and `Booster Version` are picked up when
//! present; a blank value reads as `None`, a malformed flight number fails.

use crate::error::{LaunchDataError, Result};
use crate::site::LaunchSite;
use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;

pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";
pub const COL_FLIGHT_NUMBER: &str = "Flight Number";
pub const COL_BOOSTER_VERSION: &str = "Booster Version";

/// A single launch, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRecord {
    pub flight_number: Option<u32>,
    pub launch_site: LaunchSite,
    /// Payload mass in kilograms; finite and non-negative
    pub payload_mass: f64,
    /// `class` column: true for a successful landing
    pub success: bool,
    pub booster_version: Option<String>,
    pub booster_version_category: String,
}

impl LaunchRecord {
    /// The `class` flag as 0 or 1.
    pub fn outcome(&self) -> u8 {
        u8::from(self.success)
    }

    /// Parse every row of a launch CSV.
    ///
    /// Fails on the first malformed row; a partially valid table is never
    /// returned.
    pub fn parse_csv(csv_data: &str) -> Result<Vec<LaunchRecord>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_data.as_bytes());

        let columns = Columns::locate(rdr.headers()?)?;

        let mut records = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let row = idx + 1;
            let r = result?;
            records.push(columns.read(row, &r)?);
        }
        log::debug!("parsed {} launch records", records.len());
        Ok(records)
    }
}

/// Header positions of the columns we read.
struct Columns {
    launch_site: usize,
    payload_mass: usize,
    class: usize,
    booster_category: usize,
    flight_number: Option<usize>,
    booster_version: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require =
            |name: &'static str| find(name).ok_or(LaunchDataError::MissingColumn(name));

        Ok(Self {
            launch_site: require(COL_LAUNCH_SITE)?,
            payload_mass: require(COL_PAYLOAD_MASS)?,
            class: require(COL_CLASS)?,
            booster_category: require(COL_BOOSTER_CATEGORY)?,
            flight_number: find(COL_FLIGHT_NUMBER),
            booster_version: find(COL_BOOSTER_VERSION),
        })
    }

    fn read(&self, row: usize, r: &StringRecord) -> Result<LaunchRecord> {
        let site_str = required(r, row, self.launch_site, COL_LAUNCH_SITE)?;
        let launch_site =
            LaunchSite::from_name(site_str).ok_or_else(|| LaunchDataError::UnknownSite {
                row,
                value: site_str.to_string(),
            })?;

        let payload_str = required(r, row, self.payload_mass, COL_PAYLOAD_MASS)?;
        let payload_mass = payload_str
            .parse::<f64>()
            .ok()
            .filter(|mass| mass.is_finite() && *mass >= 0.0)
            .ok_or_else(|| LaunchDataError::InvalidPayload {
                row,
                value: payload_str.to_string(),
            })?;

        let class_str = required(r, row, self.class, COL_CLASS)?;
        let success = match class_str {
            "0" => false,
            "1" => true,
            _ => {
                return Err(LaunchDataError::InvalidOutcome {
                    row,
                    value: class_str.to_string(),
                })
            }
        };

        let booster_version_category =
            required(r, row, self.booster_category, COL_BOOSTER_CATEGORY)?.to_string();

        let flight_number = optional(r, self.flight_number)
            .map(|v| {
                v.parse::<u32>()
                    .map_err(|_| LaunchDataError::InvalidFlightNumber {
                        row,
                        value: v.to_string(),
                    })
            })
            .transpose()?;

        Ok(LaunchRecord {
            flight_number,
            launch_site,
            payload_mass,
            success,
            booster_version: optional(r, self.booster_version).map(str::to_string),
            booster_version_category,
        })
    }
}

fn required<'r>(
    r: &'r StringRecord,
    row: usize,
    pos: usize,
    column: &'static str,
) -> Result<&'r str> {
    match r.get(pos).map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(LaunchDataError::EmptyField { row, column }),
    }
}

fn optional(r: &StringRecord, pos: Option<usize>) -> Option<&str> {
    pos.and_then(|p| r.get(p))
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
