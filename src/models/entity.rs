use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;

/// The list screens reachable from the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Enterprises,
    Candidates,
    Positions,
    Interviews,
    Departments,
    Interviewers,
    Locations,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Enterprises => "enterprises",
            EntityKind::Candidates => "candidates",
            EntityKind::Positions => "positions",
            EntityKind::Interviews => "interviews",
            EntityKind::Departments => "departments",
            EntityKind::Interviewers => "interviewers",
            EntityKind::Locations => "locations",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::Enterprises => "Enterprises",
            EntityKind::Candidates => "Candidates",
            EntityKind::Positions => "Positions",
            EntityKind::Interviews => "Interviews",
            EntityKind::Departments => "Departments",
            EntityKind::Interviewers => "Interviewers",
            EntityKind::Locations => "Locations",
        }
    }
}

/// Closed set of status values with a stable lowercase code.
pub trait StatusCode: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn code(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn codes() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.code()).collect()
    }
}

/// A record that can be shown on a list screen.
pub trait Listable: Serialize {
    const KIND: EntityKind;

    /// Whether the list screen offers a position filter.
    const HAS_POSITION: bool = false;

    /// Whether the list screen offers a date filter.
    const HAS_DATE: bool = false;

    /// `needle` is already lower-cased and non-empty.
    fn matches_search(&self, needle: &str) -> bool;

    /// Status codes accepted by the status filter; empty when the entity
    /// has no status.
    fn statuses() -> Vec<&'static str> {
        Vec::new()
    }

    fn status_code(&self) -> Option<&'static str> {
        None
    }

    fn matches_position(&self, _position: &str) -> bool {
        false
    }

    fn occurs_on(&self, _date: NaiveDate) -> bool {
        false
    }

    fn headers() -> Vec<&'static str>;

    fn row(&self) -> Vec<String>;
}

/// Case-insensitive containment used by every search predicate.
pub(crate) fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
