use crate::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filters::ListFilter;
use crate::core::logic::{ListLogic, PageRequest};
use crate::errors::AppResult;
use crate::models::{EntityKind, Listable};
use crate::ui::list::render_page;
use crate::ui::messages::header;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::List {
        entity,
        filter,
        page,
        page_size,
    } = cmd
    {
        let filter = filter.to_filter()?;
        let request = PageRequest {
            page: *page,
            page_size: page_size.unwrap_or_else(|| default_page_size(&ctx.cfg, *entity)),
            clamp: ctx.cfg.clamp_page,
        };

        let store = ctx.store();
        match entity {
            EntityKind::Enterprises => show(&store.enterprises, &filter, request, &ctx.cfg),
            EntityKind::Candidates => show(&store.candidates, &filter, request, &ctx.cfg),
            EntityKind::Positions => show(&store.positions, &filter, request, &ctx.cfg),
            EntityKind::Interviews => show(&store.interviews, &filter, request, &ctx.cfg),
            EntityKind::Departments => show(&store.departments, &filter, request, &ctx.cfg),
            EntityKind::Interviewers => show(&store.interviewers, &filter, request, &ctx.cfg),
            EntityKind::Locations => show(&store.locations, &filter, request, &ctx.cfg),
        }?;
    }
    Ok(())
}

/// The enterprise screen pages by 15, every other list by 10.
pub fn default_page_size(cfg: &Config, entity: EntityKind) -> usize {
    match entity {
        EntityKind::Enterprises => cfg.enterprise_page_size,
        _ => cfg.page_size,
    }
}

fn show<T: Listable>(
    items: &[T],
    filter: &ListFilter,
    request: PageRequest,
    cfg: &Config,
) -> AppResult<()> {
    let page = ListLogic::page(items, filter, request)?;

    header(T::KIND.title());
    print!("{}", render_page(&page, cfg.window_delta, cfg.color));
    Ok(())
}
