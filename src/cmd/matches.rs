//! `urlmask match` — score one mask against one URL.
//!
//! Prints the total specificity and the per-field scores. A URL the
//! mask does not match is reported, not treated as a failure.

use crate::cli::MatchArgs;
use crate::error::UrlMaskError;
use crate::mask::{match_score, match_scores, parse, AsMask, UrlRecord, WellKnownPorts};

pub(crate) fn resolve_url(input: &str, default_ports: bool) -> UrlRecord {
    let url = parse(input);
    if default_ports {
        url.with_default_port(&WellKnownPorts)
    } else {
        url
    }
}

pub fn execute(args: &MatchArgs) -> Result<(), UrlMaskError> {
    let mask = args.mask.to_mask();
    let url = resolve_url(&args.url, args.default_ports);

    let score = match_score(&*mask, &url);
    let scores = match_scores(&*mask, &url);
    tracing::debug!(mask = %mask, url = %url, score = ?score, "mask evaluated");

    if args.json {
        println!(
            "{}",
            serde_json::json!({
                "mask": *mask,
                "url": url,
                "matched": score.is_some(),
                "score": score,
                "fields": scores,
            })
        );
        return Ok(());
    }

    match score {
        Some(score) => println!("\u{2713} match, score {score}/8"),
        None => {
            let failed: Vec<&str> = scores.mismatched().map(|k| k.name()).collect();
            println!("\u{2717} no match ({})", failed.join(", "));
        }
    }
    println!(
        "{}",
        super::field_table(&mask, |kind, value| {
            let outcome = match scores.get(kind) {
                Some(1) => "exact",
                Some(_) => "wildcard",
                None => "mismatch",
            };
            format!("{:<24}{outcome}", value.unwrap_or("-"))
        })
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ports_fill_only_when_asked() {
        assert_eq!(resolve_url("https://example.com", true).port(), Some("443"));
        assert_eq!(resolve_url("https://example.com", false).port(), None);
        assert_eq!(resolve_url("https://example.com:8443", true).port(), Some("8443"));
    }

    #[test]
    fn default_port_makes_a_literal_port_mask_match() {
        let url = resolve_url("https://example.com/", true);
        assert_eq!(match_score("https://example.com:443/", &url), Some(4));
        let url = resolve_url("https://example.com/", false);
        assert_eq!(match_score("https://example.com:443/", &url), None);
    }

    #[test]
    fn execute_reports_match_and_miss() {
        for (mask, json) in [("*.example.com", false), ("http://*", true)] {
            let args = MatchArgs {
                mask: mask.into(),
                url: "https://a.example.com".into(),
                default_ports: false,
                json,
            };
            assert!(execute(&args).is_ok());
        }
    }
}
