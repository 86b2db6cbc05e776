use crate::core::calendar::{CalendarEvent, MonthGrid, YearMonth, build_month_grid};
use crate::core::filters::{ListFilter, predicates_for};
use crate::core::pager::{ListPage, ListQuery, paginate};
use crate::errors::AppResult;
use crate::models::Listable;
use crate::models::interview::Interview;
use chrono::NaiveDate;

/// Paging request as it comes from the command line or the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
    pub clamp: bool,
}

pub struct ListLogic;

impl ListLogic {
    /// Filter `items` with `filter` and cut out the requested page.
    pub fn page<'a, T: Listable + 'a>(
        items: &'a [T],
        filter: &ListFilter,
        request: PageRequest,
    ) -> AppResult<ListPage<'a, T>> {
        let predicates = predicates_for::<T>(filter)?;

        tracing::debug!(
            entity = T::KIND.as_str(),
            predicates = predicates.len(),
            page = request.page,
            page_size = request.page_size,
            "list query"
        );

        paginate(
            ListQuery::new(items)
                .filters(predicates)
                .page(request.page)
                .page_size(request.page_size)
                .clamped(request.clamp),
        )
    }

    /// Every item matching `filter`, across all pages, in input order.
    pub fn all_filtered<'a, T: Listable + 'a>(
        items: &'a [T],
        filter: &ListFilter,
    ) -> AppResult<Vec<&'a T>> {
        let predicates = predicates_for::<T>(filter)?;
        Ok(items
            .iter()
            .filter(|&item| predicates.iter().all(|p| p(item)))
            .collect())
    }
}

/// Month grid plus the interview page shown beneath it.
pub struct Schedule<'a> {
    pub grid: MonthGrid<'a>,
    pub selected: Option<NaiveDate>,
    /// All interviews matching the filter (and the selected date, if any),
    /// paged like any other list.
    pub interviews: ListPage<'a, Interview>,
}

pub struct ScheduleLogic;

impl ScheduleLogic {
    /// Resolve which month to show: `month` if given, else the month of
    /// `selected`, else the month of `today`; then move by `shift` months.
    pub fn resolve_month(
        month: Option<YearMonth>,
        selected: Option<NaiveDate>,
        today: NaiveDate,
        shift: i32,
    ) -> AppResult<YearMonth> {
        let base = month
            .or_else(|| selected.map(YearMonth::of))
            .unwrap_or_else(|| YearMonth::of(today));
        base.shift(shift)
    }

    /// The grid marks `filter.date` as selected; the list goes through the
    /// same filters and pager as `list interviews`.
    pub fn build<'a>(
        interviews: &'a [Interview],
        events: &'a [CalendarEvent],
        month: YearMonth,
        filter: &ListFilter,
        request: PageRequest,
        today: NaiveDate,
    ) -> AppResult<Schedule<'a>> {
        let selected = filter.date;
        let grid = build_month_grid(month, events, selected, today);
        let page = ListLogic::page(interviews, filter, request)?;

        Ok(Schedule {
            grid,
            selected,
            interviews: page,
        })
    }

    /// All interviews on `date`, by start time.
    pub fn day(interviews: &[Interview], date: NaiveDate) -> Vec<&Interview> {
        let mut out: Vec<&Interview> = interviews.iter().filter(|i| i.date == date).collect();
        out.sort_by(|a, b| a.time.cmp(&b.time));
        out
    }
}
