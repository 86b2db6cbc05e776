use crate::core::filters::ListFilter;
use crate::core::suggest::SuggestionKind;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::models::EntityKind;
use crate::utils::date::parse_optional_date;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rHireDesk
#[derive(Parser)]
#[command(
    name = "rhiredesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "Interview front-desk in the terminal: paged lists, schedule calendar and interview suggestions",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.rhiredesk/rhiredesk.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Pin the reference date (defaults to the local date)
    #[arg(global = true, long = "today", value_name = "YYYY-MM-DD")]
    pub today: Option<String>,

    /// Print debug diagnostics on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// List filter flags shared by `list`, `calendar` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long, short = 's', help = "Case-insensitive search on the entity's search fields")]
    pub search: Option<String>,

    #[arg(long, help = "Status code, or 'all'")]
    pub status: Option<String>,

    #[arg(long, help = "Applied position name or id (candidates, interviews)")]
    pub position: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Exact date (interviews)")]
    pub date: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show one page of a filtered list
    List {
        #[arg(value_enum)]
        entity: EntityKind,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, short = 'p', default_value_t = 1, help = "1-based page number")]
        page: usize,

        #[arg(long = "page-size", help = "Rows per page (default from config)")]
        page_size: Option<usize>,
    },

    /// Show the interview calendar of a month
    Calendar {
        #[arg(long, value_name = "YYYY-MM", help = "Month to show (default: current)")]
        month: Option<String>,

        #[arg(
            long,
            value_name = "YYYY-MM-DD",
            help = "Select a date and list its interviews (same as --date)"
        )]
        select: Option<String>,

        #[arg(
            long,
            default_value_t = 0,
            allow_negative_numbers = true,
            help = "Move forward (or back, if negative) by this many months"
        )]
        shift: i32,

        #[arg(long, help = "Events per day shown before '+N more' (default from config)")]
        limit: Option<usize>,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, short = 'p', default_value_t = 1, help = "1-based page of the interview list")]
        page: usize,

        #[arg(long = "page-size", help = "Interviews per page (default from config)")]
        page_size: Option<usize>,
    },

    /// List every interview of one day
    Day {
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Generate interview assistance from templates
    Suggest {
        #[arg(value_enum)]
        kind: SuggestionKind,

        /// Interview id (interview-guide), candidate id (candidate-focus) or position id (competency)
        subject: u32,

        #[arg(long, help = "Print the suggestion as JSON")]
        json: bool,
    },

    /// Export a filtered list (all pages)
    Export {
        #[arg(value_enum)]
        entity: EntityKind,

        #[arg(long, value_enum)]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute output path")]
        file: String,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, help = "Overwrite an existing file without asking")]
        force: bool,
    },
}

impl FilterArgs {
    /// Parse the raw flags into the filter state used by list logic.
    pub fn to_filter(&self) -> AppResult<ListFilter> {
        Ok(ListFilter {
            search: self.search.clone(),
            status: self.status.clone(),
            position: self.position.clone(),
            date: parse_optional_date(self.date.as_ref())?,
        })
    }
}
