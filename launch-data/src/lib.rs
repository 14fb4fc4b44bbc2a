//! Core types for the SpaceX launch records dashboard.
//!
//! - [`site`]: the fixed launch site enumeration and dropdown choices
//! - [`payload`]: payload range filter and slider configuration
//! - [`record`]: the immutable launch record and its CSV contract
//! - [`error`]: typed errors for load-time and selection-time failures

pub mod error;
pub mod payload;
pub mod record;
pub mod site;

pub use error::{LaunchDataError, Result};
pub use payload::{PayloadRange, SliderConfig};
pub use record::LaunchRecord;
pub use site::{LaunchSite, SiteChoice};
