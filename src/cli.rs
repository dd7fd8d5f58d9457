// 🧭 CLI Arguments - clap definitions for the time-allocation binary

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for the distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary table (default)
    Text,
    /// JSON report with chart colors
    Json,
    /// CSV for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "time-allocation")]
#[command(version)]
#[command(about = "Categorized time-allocation summary from tagged task logs", long_about = None)]
pub struct Cli {
    /// Enable debug tracing on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a task log and print the distribution
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(long = "format", value_enum, default_value = "text")]
        format: OutputFormat,

        /// Also print how each entry was classified
        #[arg(long)]
        explain: bool,
    },

    /// Print the built-in classification tables as JSON
    Rules,

    /// Print the supported duration tag formats
    Formats,

    /// Browse the distribution in a terminal UI
    #[cfg(feature = "tui")]
    Tui {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Task log file, one entry per line ("-" or omitted reads stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Use the built-in demo log instead of reading input
    #[arg(long, conflicts_with = "file")]
    pub sample: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_defaults() {
        let cli = Cli::try_parse_from(["time-allocation", "analyze", "log.txt"]).unwrap();
        match cli.command {
            Command::Analyze { input, format, explain } => {
                assert_eq!(input.file, Some(PathBuf::from("log.txt")));
                assert!(!input.sample);
                assert_eq!(format, OutputFormat::Text);
                assert!(!explain);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(!cli.debug);
    }

    #[test]
    fn test_parse_analyze_sample_json() {
        let cli = Cli::try_parse_from([
            "time-allocation", "--debug", "analyze", "--sample", "--format", "json",
        ])
        .unwrap();
        assert!(cli.debug);
        match cli.command {
            Command::Analyze { input, format, .. } => {
                assert!(input.sample);
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_sample_conflicts_with_file() {
        assert!(Cli::try_parse_from(["time-allocation", "analyze", "--sample", "log.txt"]).is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["time-allocation", "analyze", "--format", "xml"]).is_err());
    }
}
