//! `urlmask parse` — decompose a string into its eight fields.

use crate::cli::ParseArgs;
use crate::error::UrlMaskError;
use crate::mask::{parse, parse_with_default, serialize};

pub fn execute(args: &ParseArgs) -> Result<(), UrlMaskError> {
    let record = match args.default {
        Some(ref default) => parse_with_default(&args.input, default),
        None => parse(&args.input),
    };
    let canonical = serialize(&record, args.default.as_deref());

    if args.json {
        println!(
            "{}",
            serde_json::json!({
                "input": args.input,
                "fields": record,
                "canonical": canonical,
            })
        );
    } else {
        println!(
            "{}",
            super::field_table(&record, |_, value| value.map_or_else(
                || "-".to_string(),
                |v| format!("{v:?}")
            ))
        );
        println!("  {:<10}{canonical}", "canonical");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_with_and_without_default() {
        for (default, json) in [(None, false), (Some("*".to_string()), true)] {
            let args = ParseArgs {
                input: "https://example.com/a?b".into(),
                default,
                json,
            };
            assert!(execute(&args).is_ok());
        }
    }
}
