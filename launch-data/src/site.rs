//! Launch sites and the dropdown choices built over them.

use crate::error::LaunchDataError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the four SpaceX launch sites present in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LaunchSite {
    CcafsLc40,
    VafbSlc4e,
    KscLc39a,
    CcafsSlc40,
}

impl LaunchSite {
    /// Every site, in dropdown order.
    pub const ALL: [LaunchSite; 4] = [
        LaunchSite::CcafsLc40,
        LaunchSite::VafbSlc4e,
        LaunchSite::KscLc39a,
        LaunchSite::CcafsSlc40,
    ];

    /// Site name as it appears in the `Launch Site` column.
    pub fn name(self) -> &'static str {
        match self {
            LaunchSite::CcafsLc40 => "CCAFS LC-40",
            LaunchSite::VafbSlc4e => "VAFB SLC-4E",
            LaunchSite::KscLc39a => "KSC LC-39A",
            LaunchSite::CcafsSlc40 => "CCAFS SLC-40",
        }
    }

    /// Dropdown option value for this site.
    pub fn option_key(self) -> &'static str {
        match self {
            LaunchSite::CcafsLc40 => "OPT1",
            LaunchSite::VafbSlc4e => "OPT2",
            LaunchSite::KscLc39a => "OPT3",
            LaunchSite::CcafsSlc40 => "OPT4",
        }
    }

    /// Look up a site by its exact `Launch Site` column value.
    pub fn from_name(name: &str) -> Option<LaunchSite> {
        Self::ALL.into_iter().find(|site| site.name() == name)
    }
}

impl fmt::Display for LaunchSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for LaunchSite {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A dropdown selection: every site, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SiteChoice {
    #[default]
    All,
    Site(LaunchSite),
}

impl SiteChoice {
    /// Option key of the "All Sites" entry.
    pub const ALL_KEY: &'static str = "ALL";

    /// All choices in dropdown order, starting with `All`.
    pub fn options() -> impl Iterator<Item = SiteChoice> {
        std::iter::once(SiteChoice::All).chain(LaunchSite::ALL.into_iter().map(SiteChoice::Site))
    }

    pub fn option_key(self) -> &'static str {
        match self {
            SiteChoice::All => Self::ALL_KEY,
            SiteChoice::Site(site) => site.option_key(),
        }
    }

    /// Human-readable dropdown label.
    pub fn label(self) -> &'static str {
        match self {
            SiteChoice::All => "All Sites",
            SiteChoice::Site(site) => site.name(),
        }
    }

    /// The site this choice restricts to, or `None` for all sites.
    pub fn site(self) -> Option<LaunchSite> {
        match self {
            SiteChoice::All => None,
            SiteChoice::Site(site) => Some(site),
        }
    }
}

impl fmt::Display for SiteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.option_key())
    }
}

/// Accepts an option key (`ALL`, `OPT1`..`OPT4`) or an exact site name.
///
/// Matching is exact: no case folding, no whitespace trimming. Anything else
/// is an error; there is no default site.
impl FromStr for SiteChoice {
    type Err = LaunchDataError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == Self::ALL_KEY {
            return Ok(SiteChoice::All);
        }
        LaunchSite::ALL
            .into_iter()
            .find(|site| site.option_key() == value || site.name() == value)
            .map(SiteChoice::Site)
            .ok_or_else(|| LaunchDataError::UnknownSiteChoice(value.to_string()))
    }
}
