//! Terminal note board.
//!
//! # Responsibility
//! - Read commands from stdin and forward them to a `NoteBoard`.
//! - Print the recomputed view after every state change.

mod command;

use clap::{Parser, ValueEnum};
use command::{parse_command, Command, CommandError, HELP_TEXT};
use log::info;
use quicknote_core::{
    default_log_level, init_logging, load_category_set, render_html, render_text, BoardOutcome,
    BoardView, CategorySet, Clock, NoteBoard,
};
use std::error::Error;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "quicknote")]
#[command(about = "Session-only note board")]
#[command(version)]
struct Cli {
    /// JSON file declaring `categories` and optional `default_category`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long)]
    log_level: Option<String>,

    /// How each board view is printed
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Note cards for the terminal
    Text,
    /// One JSON object per view
    Json,
    /// Markup fragments
    Html,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("quicknote: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let categories = match cli.config.as_deref() {
        Some(path) => load_category_set(path)?,
        None => CategorySet::default(),
    };
    let mut board = NoteBoard::new(categories);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut out = io::stdout().lock();

    print_view(&mut out, &board.view(), cli.format)?;
    prompt(&mut out, interactive)?;

    for line in stdin.lock().lines() {
        if !handle_line(&mut out, &mut board, &line?, cli.format)? {
            break;
        }
        prompt(&mut out, interactive)?;
    }

    info!(
        "event=session_end module=cli status=ok notes={}",
        board.store().len()
    );
    Ok(())
}

/// Applies one input line; returns `false` once the session should end.
fn handle_line<C: Clock>(
    out: &mut impl Write,
    board: &mut NoteBoard<C>,
    line: &str,
    format: OutputFormat,
) -> Result<bool, Box<dyn Error>> {
    match parse_command(line, board.categories()) {
        Ok(Command::Quit) => return Ok(false),
        Ok(Command::Help) => writeln!(out, "{HELP_TEXT}")?,
        Ok(Command::List) => print_view(out, &board.view(), format)?,
        Ok(Command::Categories) => {
            let names: Vec<&str> = board.categories().iter().map(|c| c.as_str()).collect();
            writeln!(
                out,
                "{} (default: {})",
                names.join(", "),
                board.categories().default_category()
            )?;
        }
        Ok(Command::Event(event)) => {
            let update = board.handle(event);
            match update.outcome {
                // Empty input is dropped without feedback.
                BoardOutcome::AddIgnored => {}
                BoardOutcome::DeleteMissed(id) => writeln!(out, "no note with id {id}")?,
                _ => print_view(out, &update.view, format)?,
            }
        }
        Err(CommandError::Empty) => {}
        Err(err) => writeln!(out, "error: {err}")?,
    }
    Ok(true)
}

fn print_view(
    out: &mut impl Write,
    view: &BoardView,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string(view)?)?;
            return Ok(());
        }
        OutputFormat::Html => {
            write!(out, "{}", render_html(&view.notes))?;
            return Ok(());
        }
        OutputFormat::Text => {}
    }

    let filters: Vec<String> = view
        .filters
        .iter()
        .map(|button| {
            if button.active {
                format!("[{}]", button.filter)
            } else {
                button.filter.to_string()
            }
        })
        .collect();
    writeln!(out, "-- filter: {}  search: \"{}\"", filters.join(" "), view.search_text)?;
    writeln!(out, "{}", render_text(&view.notes))?;
    Ok(())
}

fn prompt(out: &mut impl Write, interactive: bool) -> io::Result<()> {
    if interactive {
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}
