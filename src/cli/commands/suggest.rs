use crate::Context;
use crate::cli::parser::Commands;
use crate::core::suggest::{Suggestion, SuggestionGenerator, SuggestionRequest, TemplateSuggester};
use crate::errors::AppResult;
use crate::ui::messages::terminal_center;

/// Column width suggestion items are wrapped to.
const WRAP_WIDTH: usize = 88;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Suggest {
        kind,
        subject,
        json,
    } = cmd
    {
        let store = ctx.store();
        let request = SuggestionRequest::resolve(&store, *kind, *subject)?;

        let mut notices = terminal_center();
        let key = "suggest";
        notices.start_submit(key);
        let generated = TemplateSuggester.generate(&request);
        notices.stop_submit(key);

        let suggestion = match generated {
            Ok(s) => s,
            Err(e) => {
                notices.error("Could not generate a suggestion");
                return Err(e);
            }
        };

        if *json {
            println!("{}", serde_json::to_string_pretty(&suggestion)?);
        } else {
            print!("{}", render(&suggestion));
        }
    }
    Ok(())
}

/// Markdown with long items wrapped under their bullet.
fn render(suggestion: &Suggestion) -> String {
    suggestion
        .to_markdown()
        .lines()
        .map(|line| {
            let indent = line
                .find(|c: char| c == ' ')
                .filter(|_| line.starts_with('-') || line.starts_with(|c: char| c.is_ascii_digit()))
                .map(|i| " ".repeat(i + 1))
                .unwrap_or_default();
            let opts = textwrap::Options::new(WRAP_WIDTH).subsequent_indent(&indent);
            textwrap::fill(line, opts)
        })
        .collect::<Vec<_>>()
        .join("\n")
        + "\n"
}
