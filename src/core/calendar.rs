//! Month grid construction for the schedule view.
//!
//! The grid is always 6 weeks × 7 days (Sunday first). Cells before the 1st
//! and after the last day of the month are blank padding; adjacent-month
//! dates are never shown.

use crate::errors::{AppError, AppResult};
use crate::utils::date::{days_in_month, month_name};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

pub const GRID_CELLS: usize = 42;
pub const DAYS_PER_WEEK: usize = 7;

/// Verbatim events shown in a day cell before collapsing into "+N more".
pub const DEFAULT_PREVIEW_LIMIT: usize = 2;

/// A validated (year, month) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
    days: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        let days = days_in_month(year, month)
            .ok_or_else(|| AppError::InvalidMonth(format!("{year}-{month:02}")))?;
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| AppError::InvalidMonth(format!("{year}-{month:02}")))?;
        Ok(Self { first, days })
    }

    /// Month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        let first = date.with_day(1).unwrap_or(date);
        let days = days_in_month(date.year(), date.month()).unwrap_or(31);
        Self { first, days }
    }

    /// Parse `YYYY-MM`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let (y, m) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| AppError::InvalidMonth(s.to_string()))?;
        let year: i32 = y.parse().map_err(|_| AppError::InvalidMonth(s.to_string()))?;
        let month: u32 = m.parse().map_err(|_| AppError::InvalidMonth(s.to_string()))?;
        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn days_in_month(&self) -> u32 {
        self.days
    }

    /// Weekday index of the 1st, 0 = Sunday.
    pub fn first_weekday(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Move `n` months forward (or backward when negative).
    pub fn shift(self, n: i32) -> AppResult<Self> {
        let index = i64::from(self.year()) * 12 + i64::from(self.month()) - 1 + i64::from(n);
        let year = i32::try_from(index.div_euclid(12))
            .map_err(|_| AppError::InvalidMonth(format!("{self} shifted by {n}")))?;
        let month = index.rem_euclid(12) as u32 + 1;
        Self::new(year, month)
    }

    pub fn next(self) -> AppResult<Self> {
        self.shift(1)
    }

    pub fn prev(self) -> AppResult<Self> {
        self.shift(-1)
    }

    /// "March 2024"
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month()), self.year())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A dated entry placed on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub date: NaiveDate,
    /// Display time, possibly a range such as `14:30-15:30`.
    pub time: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl CalendarEvent {
    /// Text before the first `-` of `time`.
    pub fn start_time(&self) -> &str {
        self.time.split('-').next().unwrap_or_default().trim()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    pub events: Vec<&'a CalendarEvent>,
    pub is_today: bool,
    pub is_selected: bool,
}

impl DayCell<'_> {
    /// Apply the truncation rule: at most `limit` events verbatim, the rest
    /// counted.
    pub fn preview(&self, limit: usize) -> DayPreview {
        let lines = self
            .events
            .iter()
            .take(limit)
            .map(|ev| PreviewLine {
                start: ev.start_time().to_string(),
                title: ev.title.clone(),
            })
            .collect::<Vec<_>>();

        DayPreview {
            more: self.events.len() - lines.len(),
            lines,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewLine {
    pub start: String,
    pub title: String,
}

impl fmt::Display for PreviewLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.start, self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayPreview {
    pub lines: Vec<PreviewLine>,
    pub more: usize,
}

impl DayPreview {
    pub fn more_label(&self) -> Option<String> {
        (self.more > 0).then(|| format!("+{} more", self.more))
    }
}

impl fmt::Display for DayPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self.lines.iter().map(ToString::to_string).collect();
        parts.extend(self.more_label());
        f.write_str(&parts.join("\n"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "cell", rename_all = "snake_case")]
pub enum Cell<'a> {
    Empty,
    Day(DayCell<'a>),
}

impl<'a> Cell<'a> {
    pub fn as_day(&self) -> Option<&DayCell<'a>> {
        match self {
            Cell::Day(d) => Some(d),
            Cell::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGrid<'a> {
    pub month: YearMonth,
    cells: Vec<Cell<'a>>,
}

impl<'a> MonthGrid<'a> {
    /// All 42 cells in display order.
    pub fn cells(&self) -> &[Cell<'a>] {
        &self.cells
    }

    /// The six display rows.
    pub fn weeks(&self) -> impl Iterator<Item = &[Cell<'a>]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn day_cells(&self) -> impl Iterator<Item = &DayCell<'a>> {
        self.cells.iter().filter_map(Cell::as_day)
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayCell<'a>> {
        self.day_cells().find(|d| d.date == date)
    }

    pub fn leading_empty(&self) -> usize {
        self.cells.iter().take_while(|c| c.is_empty()).count()
    }

    pub fn event_count(&self) -> usize {
        self.day_cells().map(|d| d.events.len()).sum()
    }
}

/// Build the 42-cell grid of `month`.
///
/// Events are assigned to the cell of their calendar date in input order;
/// events outside `month` are ignored. `today` and `selected` only mark a
/// cell when they fall inside `month`.
pub fn build_month_grid<'a>(
    month: YearMonth,
    events: &'a [CalendarEvent],
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> MonthGrid<'a> {
    let leading = month.first_weekday() as usize;
    let days = month.days_in_month() as usize;

    let mut buckets: Vec<Vec<&'a CalendarEvent>> = vec![Vec::new(); days];
    for ev in events.iter().filter(|ev| month.contains(ev.date)) {
        buckets[ev.date.day0() as usize].push(ev);
    }

    let mut cells = Vec::with_capacity(GRID_CELLS);
    cells.resize_with(leading, || Cell::Empty);

    let dates = (1..=month.days_in_month()).filter_map(|d| month.first_day().with_day(d));
    for (date, events) in dates.zip(buckets) {
        cells.push(Cell::Day(DayCell {
            date,
            events,
            is_today: date == today,
            is_selected: selected == Some(date),
        }));
    }

    cells.resize_with(GRID_CELLS, || Cell::Empty);

    tracing::debug!(
        month = %month,
        leading,
        days,
        events = events.len(),
        "built month grid"
    );

    MonthGrid { month, cells }
}
