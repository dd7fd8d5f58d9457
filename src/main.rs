mod cli;

// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, InputArgs, OutputFormat};
use std::io::Read;
use std::path::Path;
use time_allocation::{
    analyze, init_tracing, render_csv, render_explain, render_json, render_text, Analysis,
    RuleEngine, SAMPLE_LOG, SUPPORTED_FORMATS,
};

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.debug);

    match args.command {
        Command::Analyze { input, format, explain } => run_analyze(&input, format, explain)?,
        Command::Rules => {
            println!("{}", serde_json::to_string_pretty(RuleEngine::global())?);
        }
        Command::Formats => {
            for line in SUPPORTED_FORMATS {
                println!("{}", line);
            }
        }
        #[cfg(feature = "tui")]
        Command::Tui { input } => run_ui_mode(&input)?,
    }

    Ok(())
}

/// Read the task log from the demo constant, a file, or stdin
fn read_input(input: &InputArgs) -> Result<String> {
    if input.sample {
        return Ok(SAMPLE_LOG.to_string());
    }

    match input.file.as_deref() {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read task log: {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read task log from stdin")?;
            Ok(text)
        }
    }
}

/// Run the pipeline; analysis errors end the process with status 1
fn analyze_or_exit(text: &str) -> Analysis {
    match analyze(text) {
        Ok(analysis) => analysis,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn run_analyze(input: &InputArgs, format: OutputFormat, explain: bool) -> Result<()> {
    let text = read_input(input)?;
    let analysis = analyze_or_exit(&text);

    match format {
        OutputFormat::Text => print!("{}", render_text(&analysis)),
        OutputFormat::Json => println!("{}", render_json(&analysis)?),
        OutputFormat::Csv => print!("{}", render_csv(&analysis.records)?),
    }

    if explain {
        // Keep machine-readable stdout clean
        if format == OutputFormat::Text {
            println!();
            print!("{}", render_explain(&analysis));
        } else {
            eprint!("{}", render_explain(&analysis));
        }
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(input: &InputArgs) -> Result<()> {
    let text = read_input(input)?;
    let analysis = analyze_or_exit(&text);

    let mut app = ui::App::new(analysis);
    ui::run_ui(&mut app)?;

    Ok(())
}
