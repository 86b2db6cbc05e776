//! Raw list filter state → pager predicates.

use crate::core::pager::Predicate;
use crate::errors::{AppError, AppResult};
use crate::models::Listable;
use chrono::NaiveDate;

/// Filter inputs of a list screen, exactly as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub search: Option<String>,
    /// Status code, or `all`.
    pub status: Option<String>,
    pub position: Option<String>,
    pub date: Option<NaiveDate>,
}

impl ListFilter {
    pub fn is_empty(&self) -> bool {
        self.search_needle().is_none()
            && self.status_code().is_none()
            && self.position.is_none()
            && self.date.is_none()
    }

    fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    fn status_code(&self) -> Option<&str> {
        self.status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("all"))
    }
}

/// Build the predicates for `T` from `filter`.
///
/// Unset inputs contribute no predicate. A status unknown to `T`, or a
/// position/date filter on an entity that has none, is rejected.
pub fn predicates_for<'a, T: Listable + 'a>(filter: &ListFilter) -> AppResult<Vec<Predicate<'a, T>>> {
    let mut out: Vec<Predicate<'a, T>> = Vec::new();
    let entity = T::KIND.as_str();

    if let Some(needle) = filter.search_needle() {
        out.push(Box::new(move |item: &T| item.matches_search(&needle)));
    }

    if let Some(status) = filter.status_code() {
        let known = T::statuses();
        let code = known
            .iter()
            .copied()
            .find(|c| c.eq_ignore_ascii_case(status))
            .ok_or_else(|| AppError::InvalidStatus {
                entity: entity.to_string(),
                status: status.to_string(),
            })?;
        out.push(Box::new(move |item: &T| item.status_code() == Some(code)));
    }

    if let Some(position) = &filter.position {
        if !T::HAS_POSITION {
            return Err(AppError::InvalidArgument(format!(
                "{entity} cannot be filtered by position"
            )));
        }
        let position = position.trim().to_string();
        out.push(Box::new(move |item: &T| item.matches_position(&position)));
    }

    if let Some(date) = filter.date {
        if !T::HAS_DATE {
            return Err(AppError::InvalidArgument(format!(
                "{entity} cannot be filtered by date"
            )));
        }
        out.push(Box::new(move |item: &T| item.occurs_on(date)));
    }

    Ok(out)
}
