//! `urlmask best` — select the best matching mask for a URL.
//!
//! Candidates come either from repeated `--mask` flags or from a mask
//! set file loaded through a [`ConfigSource`](crate::config::ConfigSource).
//! Explicit `--mask` flags take precedence over a configured file.
//! Earlier candidates win ties.

use crate::cli::BestArgs;
use crate::config::sources;
use crate::error::UrlMaskError;
use crate::mask::{MaskInput, MaskSet};

use super::matches::resolve_url;

pub async fn execute(args: &BestArgs) -> Result<(), UrlMaskError> {
    let set = load_masks(args).await?;
    let url = resolve_url(&args.url, args.default_ports);
    let selection = set.best(&url);

    if args.json {
        let body = selection.map_or_else(
            || serde_json::json!({ "matched": false, "url": url }),
            |s| {
                serde_json::json!({
                    "matched": true,
                    "url": url,
                    "index": s.index,
                    "name": s.name,
                    "mask": s.mask,
                    "score": s.score,
                })
            },
        );
        println!("{body}");
        return Ok(());
    }

    match selection {
        Some(s) => println!(
            "\u{2713} {} (#{}) score {}/8: {}",
            s.name, s.index, s.score, s.mask
        ),
        None => println!("\u{2717} no mask matched {url} ({} candidates)", set.len()),
    }
    Ok(())
}

async fn load_masks(args: &BestArgs) -> Result<MaskSet, UrlMaskError> {
    if !args.mask.is_empty() {
        if let Some(ref path) = args.config {
            tracing::debug!(
                config = %path.display(),
                masks = args.mask.len(),
                "--mask given, ignoring mask set file"
            );
        }
        return Ok(args
            .mask
            .iter()
            .enumerate()
            .map(|(i, mask)| (format!("mask[{i}]"), MaskInput::Text(mask.clone())))
            .collect());
    }

    if let Some(ref path) = args.config {
        let source = sources::for_path(path)?;
        let file = source.load().await?;
        return Ok(file.to_mask_set());
    }

    Err(UrlMaskError::NoMasks {
        hint: "Pass a mask set file with --config or candidates with --mask.".into(),
    })
}
