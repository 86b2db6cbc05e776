use crate::Context;
use crate::cli::parser::Commands;
use crate::core::filters::ListFilter;
use crate::core::notify::NotificationCenter;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportTarget};
use crate::models::EntityKind;
use crate::ui::messages::terminal_center;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Export {
        entity,
        format,
        file,
        filter,
        force,
    } = cmd
    {
        let filter: ListFilter = filter.to_filter()?;
        let target = ExportTarget {
            format: *format,
            file: file.clone(),
            force: *force,
        };

        let store = ctx.store();
        let mut notices: NotificationCenter = terminal_center();
        let n = &mut notices;

        match entity {
            EntityKind::Enterprises => ExportLogic::export(&store.enterprises, &filter, &target, n),
            EntityKind::Candidates => ExportLogic::export(&store.candidates, &filter, &target, n),
            EntityKind::Positions => ExportLogic::export(&store.positions, &filter, &target, n),
            EntityKind::Interviews => ExportLogic::export(&store.interviews, &filter, &target, n),
            EntityKind::Departments => ExportLogic::export(&store.departments, &filter, &target, n),
            EntityKind::Interviewers => {
                ExportLogic::export(&store.interviewers, &filter, &target, n)
            }
            EntityKind::Locations => ExportLogic::export(&store.locations, &filter, &target, n),
        }?;
    }
    Ok(())
}
