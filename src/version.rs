//! Schema versioning utilities
//!
//! API schema versions are UTC timestamps. Every catalog also contains the
//! [`SchemaVersion::Baseline`] sentinel, which orders before any timestamp and
//! stands for the schema served to clients that do not request a version.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::ApigenConfig;
use crate::error::{Result, SchemaError};

/// Schema versions published for the v2 API, in ascending order.
pub const GW2_V2_VERSIONS: &[&str] = &[
    "2019-02-21T00:00:00Z",
    "2019-03-22T00:00:00Z",
    "2019-05-16T00:00:00Z",
    "2019-05-21T00:00:00Z",
    "2019-05-22T00:00:00Z",
    "2019-12-19T00:00:00Z",
];

/// A schema version tag.
///
/// Variant order matters: the derived `Ord` puts `Baseline` before every
/// explicit timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SchemaVersion {
    /// The schema served when no version is requested
    Baseline,
    /// An explicit schema version
    At(DateTime<Utc>),
}

impl SchemaVersion {
    /// Create a version at midnight UTC of the given date
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| SchemaVersion::At(naive.and_utc()))
            .ok_or_else(|| SchemaError::InvalidVersion(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Parse a version tag (`baseline`, RFC 3339 timestamp or `YYYY-MM-DD`)
    pub fn parse(tag: &str) -> Result<Self> {
        tag.parse()
    }

    pub fn is_baseline(&self) -> bool {
        matches!(self, SchemaVersion::Baseline)
    }

    /// The timestamp of an explicit version
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            SchemaVersion::Baseline => None,
            SchemaVersion::At(at) => Some(*at),
        }
    }
}

impl FromStr for SchemaVersion {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim();
        if tag.eq_ignore_ascii_case("baseline") || tag.eq_ignore_ascii_case("classic") {
            return Ok(SchemaVersion::Baseline);
        }
        if let Ok(at) = DateTime::parse_from_rfc3339(tag) {
            return Ok(SchemaVersion::At(at.with_timezone(&Utc)));
        }
        if let Ok(date) = NaiveDate::parse_from_str(tag, "%Y-%m-%d") {
            if let Some(naive) = date.and_hms_opt(0, 0, 0) {
                return Ok(SchemaVersion::At(naive.and_utc()));
            }
        }
        Err(SchemaError::InvalidVersion(s.to_string()))
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaVersion::Baseline => write!(f, "baseline"),
            SchemaVersion::At(at) => write!(f, "{}", at.to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }
}

impl Serialize for SchemaVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SchemaVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

/// A half-open interval `[since, until)` of schema versions.
///
/// `until == None` leaves the interval unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRange {
    pub since: SchemaVersion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<SchemaVersion>,
}

impl VersionRange {
    /// Every version
    pub const ALL: VersionRange = VersionRange {
        since: SchemaVersion::Baseline,
        until: None,
    };

    pub fn new(since: SchemaVersion, until: Option<SchemaVersion>) -> Self {
        Self { since, until }
    }

    pub fn starting_at(since: SchemaVersion) -> Self {
        Self { since, until: None }
    }

    pub fn contains(&self, version: SchemaVersion) -> bool {
        self.since <= version && self.until.map_or(true, |until| version < until)
    }

    /// True if no version satisfies `since <= v < until`
    pub fn is_empty(&self) -> bool {
        self.until.is_some_and(|until| until <= self.since)
    }

    /// The overlap of two ranges (possibly empty)
    pub fn intersection(&self, other: &VersionRange) -> VersionRange {
        let until = match (self.until, other.until) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        VersionRange {
            since: self.since.max(other.since),
            until,
        }
    }

    pub fn intersects(&self, other: &VersionRange) -> bool {
        !self.intersection(other).is_empty()
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.until {
            Some(until) => write!(f, "[{}, {})", self.since, until),
            None => write!(f, "[{}, ..)", self.since),
        }
    }
}

/// The set of schema versions known to an API.
///
/// Passed explicitly to the registry builder. Always contains
/// [`SchemaVersion::Baseline`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionCatalog {
    versions: BTreeSet<SchemaVersion>,
}

impl VersionCatalog {
    /// Create a catalog from explicit versions
    pub fn new(versions: impl IntoIterator<Item = SchemaVersion>) -> Self {
        let mut versions: BTreeSet<_> = versions.into_iter().collect();
        versions.insert(SchemaVersion::Baseline);
        Self { versions }
    }

    /// Create a catalog by parsing version tags
    pub fn parse<I, S>(tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let versions = tags
            .into_iter()
            .map(|tag| SchemaVersion::parse(tag.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(versions))
    }

    /// The catalog of the v2 API
    pub fn gw2_v2() -> Result<Self> {
        Self::parse(GW2_V2_VERSIONS)
    }

    /// Build the catalog from the `[catalog]` configuration section
    pub fn from_config(config: &ApigenConfig) -> Result<Self> {
        Self::parse(&config.catalog.versions)
    }

    pub fn contains(&self, version: SchemaVersion) -> bool {
        self.versions.contains(&version)
    }

    /// The newest known version
    pub fn latest(&self) -> SchemaVersion {
        self.versions
            .last()
            .copied()
            .unwrap_or(SchemaVersion::Baseline)
    }

    /// All versions, ascending
    pub fn iter(&self) -> impl Iterator<Item = SchemaVersion> + '_ {
        self.versions.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parsing() {
        let v = SchemaVersion::parse("2019-05-22T00:00:00Z").unwrap();
        assert_eq!(v.to_string(), "2019-05-22T00:00:00Z");

        let millis = SchemaVersion::parse("2019-05-22T00:00:00.000Z").unwrap();
        assert_eq!(v, millis);

        let date = SchemaVersion::parse("2019-05-22").unwrap();
        assert_eq!(v, date);
    }

    #[test]
    fn test_baseline_aliases() {
        assert_eq!(SchemaVersion::parse("baseline").unwrap(), SchemaVersion::Baseline);
        assert_eq!(SchemaVersion::parse("CLASSIC").unwrap(), SchemaVersion::Baseline);
        assert_eq!(SchemaVersion::Baseline.to_string(), "baseline");
    }

    #[test]
    fn test_invalid_version() {
        assert!(matches!(
            SchemaVersion::parse("yesterday"),
            Err(SchemaError::InvalidVersion(_))
        ));
        assert!(SchemaVersion::from_ymd(2019, 2, 30).is_err());
    }

    #[test]
    fn test_baseline_orders_first() {
        let early = SchemaVersion::from_ymd(1970, 1, 1).unwrap();
        assert!(SchemaVersion::Baseline < early);
        assert!(early < SchemaVersion::from_ymd(2019, 2, 21).unwrap());
    }

    #[test]
    fn test_range_is_half_open() {
        let since = SchemaVersion::from_ymd(2019, 2, 21).unwrap();
        let until = SchemaVersion::from_ymd(2019, 12, 19).unwrap();
        let range = VersionRange::new(since, Some(until));

        assert!(!range.contains(SchemaVersion::Baseline));
        assert!(range.contains(since));
        assert!(range.contains(SchemaVersion::from_ymd(2019, 6, 1).unwrap()));
        assert!(!range.contains(until));
    }

    #[test]
    fn test_range_intersection() {
        let a = SchemaVersion::from_ymd(2019, 2, 21).unwrap();
        let b = SchemaVersion::from_ymd(2019, 5, 22).unwrap();

        let early = VersionRange::new(SchemaVersion::Baseline, Some(a));
        let late = VersionRange::starting_at(b);
        assert!(!early.intersects(&late));
        assert!(VersionRange::ALL.intersects(&late));
        assert_eq!(VersionRange::ALL.intersection(&early), early);
        assert!(VersionRange::new(b, Some(a)).is_empty());
    }

    #[test]
    fn test_catalog() {
        let catalog = VersionCatalog::gw2_v2().unwrap();
        assert!(catalog.contains(SchemaVersion::Baseline));
        assert_eq!(catalog.len(), GW2_V2_VERSIONS.len() + 1);
        assert_eq!(catalog.latest(), SchemaVersion::parse("2019-12-19").unwrap());
        assert!(!catalog.contains(SchemaVersion::parse("2019-01-01").unwrap()));
    }

    #[test]
    fn test_serde_as_string() {
        let v = SchemaVersion::from_ymd(2019, 5, 22).unwrap();
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"2019-05-22T00:00:00Z\"");
        let back: SchemaVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
