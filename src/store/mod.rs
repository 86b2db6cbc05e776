//! In-memory mock dataset backing the list and schedule screens.

pub mod seed;

use crate::core::calendar::CalendarEvent;
use crate::errors::{AppError, AppResult};
use crate::models::candidate::Candidate;
use crate::models::department::{Department, tree_order};
use crate::models::enterprise::Enterprise;
use crate::models::interview::Interview;
use crate::models::interviewer::Interviewer;
use crate::models::location::MeetingLocation;
use crate::models::position::Position;
use chrono::NaiveDate;

pub struct MockStore {
    pub enterprises: Vec<Enterprise>,
    pub candidates: Vec<Candidate>,
    pub positions: Vec<Position>,
    pub interviews: Vec<Interview>,
    /// Kept in tree order: every parent is followed by its children.
    pub departments: Vec<Department>,
    pub interviewers: Vec<Interviewer>,
    pub locations: Vec<MeetingLocation>,
}

impl MockStore {
    /// Demo dataset with interview dates anchored on `today`.
    pub fn seeded(today: NaiveDate) -> Self {
        let departments = seed::departments();
        let departments = tree_order(&departments)
            .into_iter()
            .map(|(_, d)| d.clone())
            .collect();

        Self {
            enterprises: seed::enterprises(),
            candidates: seed::candidates(),
            positions: seed::positions(),
            interviews: seed::interviews(today),
            departments,
            interviewers: seed::interviewers(),
            locations: seed::locations(),
        }
    }

    pub fn candidate(&self, id: u32) -> AppResult<&Candidate> {
        self.candidates
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("candidate #{id}")))
    }

    pub fn position(&self, id: u32) -> AppResult<&Position> {
        self.positions
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("position #{id}")))
    }

    pub fn position_by_title(&self, title: &str) -> Option<&Position> {
        self.positions.iter().find(|p| p.title == title)
    }

    pub fn interview(&self, id: u32) -> AppResult<&Interview> {
        self.interviews
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| AppError::NotFound(format!("interview #{id}")))
    }

    /// Interviews as calendar entries, in store order.
    pub fn calendar_events(&self) -> Vec<CalendarEvent> {
        self.interviews.iter().map(Interview::to_calendar_event).collect()
    }
}
