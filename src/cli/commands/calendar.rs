use crate::Context;
use crate::cli::parser::Commands;
use crate::core::calendar::YearMonth;
use crate::core::logic::{PageRequest, ScheduleLogic};
use crate::errors::AppResult;
use crate::ui::calendar::render_month;
use crate::ui::list::render_page;
use crate::ui::messages::{header, info};
use crate::utils::date::{parse_optional_date, short_label};
use crate::utils::formatting::plural;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Calendar {
        month,
        select,
        shift,
        limit,
        filter,
        page,
        page_size,
    } = cmd
    {
        let mut filter = filter.to_filter()?;
        filter.date = parse_optional_date(select.as_ref())?.or(filter.date);

        let month = month.as_deref().map(YearMonth::parse).transpose()?;
        let month = ScheduleLogic::resolve_month(month, filter.date, ctx.today, *shift)?;
        let limit = limit.unwrap_or(ctx.cfg.max_events_per_day);
        let request = PageRequest {
            page: *page,
            page_size: page_size.unwrap_or(ctx.cfg.page_size),
            clamp: ctx.cfg.clamp_page,
        };

        let store = ctx.store();
        let events = store.calendar_events();
        let schedule = ScheduleLogic::build(
            &store.interviews,
            &events,
            month,
            &filter,
            request,
            ctx.today,
        )?;

        header(format!("Interview calendar: {}", month.label()));
        print!("{}", render_month(&schedule.grid, limit, ctx.cfg.color));
        println!();

        let total = schedule.interviews.total_filtered;
        match schedule.selected {
            Some(date) if total == 0 => info(format!("No interviews on {}.", short_label(date))),
            Some(date) => info(format!(
                "{} on {}",
                plural(total, "interview"),
                short_label(date)
            )),
            None => info(format!("{} scheduled", plural(total, "interview"))),
        }
        print!(
            "{}",
            render_page(&schedule.interviews, ctx.cfg.window_delta, ctx.cfg.color)
        );
    }
    Ok(())
}
