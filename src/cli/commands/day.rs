use crate::Context;
use crate::cli::parser::Commands;
use crate::core::logic::ScheduleLogic;
use crate::errors::AppResult;
use crate::models::StatusCode;
use crate::ui::messages::{header, info};
use crate::utils::colors::paint_status;
use crate::utils::date::{parse_date, short_label};
use crate::utils::table::Table;
use crate::utils::time::{format_minutes, range_minutes};

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Day { date } = cmd {
        let date = parse_date(date)?;
        let store = ctx.store();
        let interviews = ScheduleLogic::day(&store.interviews, date);

        header(format!("Interviews on {}", short_label(date)));

        if interviews.is_empty() {
            info(format!("No interviews on {date}."));
            return Ok(());
        }

        let mut table = Table::with_headers(&[
            "Time",
            "Duration",
            "Candidate",
            "Position",
            "Interviewer",
            "Location",
            "Status",
        ]);

        for i in interviews {
            let duration = range_minutes(&i.time)?
                .map(format_minutes)
                .unwrap_or_else(|| "--".to_string());

            table.add_row(vec![
                i.time.clone(),
                duration,
                i.candidate.name.clone(),
                i.candidate.apply_position.name.clone(),
                i.interviewer.clone(),
                i.location.clone(),
                paint_status(i.status.label(), i.status.code(), ctx.cfg.color),
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
