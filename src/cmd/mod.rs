//! Subcommand dispatch and execution.
//!
//! The [`dispatch`] function initializes logging and routes the parsed
//! CLI to the appropriate subcommand handler: [`parse`], [`matches`],
//! [`best`], or [`validate`]. Each handler lives in its own submodule.

pub mod best;
pub mod matches;
pub mod parse;
pub mod validate;

use crate::cli::{Cli, Commands};
use crate::error::UrlMaskError;
use crate::logging;
use crate::mask::{FieldKind, UrlRecord};

pub async fn dispatch(cli: Cli) -> Result<(), UrlMaskError> {
    let log_format = logging::resolve_format(cli.logging.pretty, cli.logging.json_logs);
    logging::init(&cli.logging.log_level, log_format);

    match cli.command {
        Some(Commands::Parse(ref args)) => parse::execute(args),
        Some(Commands::Match(ref args)) => matches::execute(args),
        Some(Commands::Best(ref args)) => best::execute(args).await,
        Some(Commands::Validate(ref args)) => validate::execute(args),
        None => {
            print_welcome();
            Ok(())
        }
    }
}

/// Render one line per field as `name  value`, with `-` for absent fields.
pub(crate) fn field_table<F>(record: &UrlRecord, mut render: F) -> String
where
    F: FnMut(FieldKind, Option<&str>) -> String,
{
    record
        .fields()
        .map(|(kind, value)| format!("  {:<10}{}", kind.name(), render(kind, value)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn print_welcome() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        "\n  urlmask v{version} \u{2014} URL decomposition and wildcard mask matching\n\n  \
         No command provided. To get started:\n\n    \
         urlmask parse <URL>               Show the eight fields of a URL\n    \
         urlmask match <MASK> <URL>        Score one mask against a URL\n    \
         urlmask best <URL> -c masks.yaml  Pick the best mask from a file\n    \
         urlmask --help                    See all commands and options\n"
    );
}
