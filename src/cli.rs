//! Command-line interface definitions using clap derive macros.
//!
//! Contains the top-level [`Cli`] parser, the [`Commands`] enum for
//! subcommands (parse, match, best, validate), and their associated
//! argument structs. Logging flags are global and have environment
//! variable equivalents.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "urlmask",
    version,
    about = "Lenient URL decomposition and wildcard mask matching",
    propagate_version = true,
    after_help = "\x1b[1mQuick start:\x1b[0m\n  \
        urlmask parse https://user@api.example.com:8443/v1?x=1    Show the eight fields\n  \
        urlmask match '**.example.com/api/**' https://example.com/api\n  \
        urlmask best https://example.com/api -c masks.yaml      Pick the best mask"
)]
pub struct Cli {
    #[command(flatten)]
    pub logging: LoggingArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decompose a URL-like string into its eight fields
    Parse(ParseArgs),

    /// Match one mask against one URL
    Match(MatchArgs),

    /// Select the best matching mask for a URL
    Best(BestArgs),

    /// Validate a mask set file
    Validate(ValidateArgs),
}

#[derive(Args)]
pub struct LoggingArgs {
    /// Log level
    #[arg(short, long, global = true, env = "LOG_LEVEL", default_value = "warn")]
    pub log_level: LogLevel,

    /// Force pretty (human-readable) log output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Force JSON log output (overrides TTY detection)
    #[arg(long, global = true, conflicts_with = "pretty")]
    pub json_logs: bool,
}

#[derive(Args)]
pub struct ParseArgs {
    /// String to decompose
    pub input: String,

    /// Value given to every absent field (e.g. '*' to build a mask)
    #[arg(short, long)]
    pub default: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        urlmask match '*.example.com' https://a.example.com       Hostname wildcard\n  \
        urlmask match 'h/a/b/**' h/a/b                             Path boundary\n  \
        urlmask match 'https://h:443/' https://h/ --default-ports  Fill default port")]
pub struct MatchArgs {
    /// Mask; absent fields default to '*'
    pub mask: String,

    /// URL to test
    pub url: String,

    /// Fill the URL's absent port from its protocol
    #[arg(long)]
    pub default_ports: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        urlmask best https://example.com/api -c masks.yaml\n  \
        urlmask best /foo/bar -m '/foo/*' -m '/foo/bar' -m '*'")]
pub struct BestArgs {
    /// URL to test
    pub url: String,

    /// Mask set file (.yaml, .json, .toml)
    #[arg(short, long, env = "URLMASK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Candidate mask, in priority order (repeatable); overrides --config
    #[arg(short, long)]
    pub mask: Vec<String>,

    /// Fill the URL's absent port from its protocol
    #[arg(long)]
    pub default_ports: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Mask set file to validate
    #[arg(default_value = "masks.yaml")]
    pub config: PathBuf,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: ValidateFormat,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ValidateFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn best_takes_repeated_masks() {
        let cli = Cli::parse_from(["urlmask", "best", "/foo/bar", "-m", "/foo/*", "-m", "*"]);
        let Some(Commands::Best(args)) = cli.command else {
            panic!("expected best subcommand");
        };
        assert_eq!(args.mask, vec!["/foo/*", "*"]);
    }

    #[test]
    fn best_accepts_masks_alongside_config_from_env() {
        std::env::set_var("URLMASK_CONFIG", "masks.yaml");
        let result = Cli::try_parse_from(["urlmask", "best", "/x", "-m", "*"]);
        std::env::remove_var("URLMASK_CONFIG");

        let Some(Commands::Best(args)) = result.unwrap().command else {
            panic!("expected best subcommand");
        };
        assert_eq!(args.mask, vec!["*"]);
        assert_eq!(args.config, Some(PathBuf::from("masks.yaml")));
    }

    #[test]
    fn best_accepts_config_and_masks_together() {
        let result = Cli::try_parse_from(["urlmask", "best", "h", "-c", "m.yaml", "-m", "*"]);
        assert!(result.is_ok());
    }
}
