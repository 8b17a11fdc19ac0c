// algoviz: step-by-step algorithm visualizer

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use algoviz::algorithms::input::parse_sequence;
use algoviz::algorithms::{Input, Problem};
use algoviz::catalog;
use algoviz::highlight::Language;
use algoviz::playback::Speed;
use algoviz::session::Session;
use algoviz::ui::App;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "algoviz", version, about = "Replay array algorithms step by step")]
struct Args {
    /// Problem id: two-sum, max-min, kth-max-min, sort-012, reverse-array,
    /// cyclic-rotate, union, intersection, union-intersection, kadane, min-jumps
    problem: Problem,

    /// Primary array, e.g. "2,7,11,15" (defaults to the built-in sample)
    #[arg(long, allow_hyphen_values = true)]
    nums: Option<String>,

    /// Second sorted array for union/intersection
    #[arg(long, allow_hyphen_values = true)]
    second: Option<String>,

    /// Two Sum target
    #[arg(long, allow_hyphen_values = true, conflicts_with = "k")]
    target: Option<i64>,

    /// k for kth maximum/minimum
    #[arg(long, allow_hyphen_values = true)]
    k: Option<i64>,

    /// Listing language: cpp, java, python or javascript
    #[arg(long, short, default_value = "cpp")]
    language: Language,

    /// Playback speed multiplier, e.g. 0.5 or 2x
    #[arg(long, short, default_value = "1")]
    speed: Speed,

    /// Print the trace as text and exit instead of starting the TUI
    #[arg(long)]
    dump: bool,

    /// Write logs here instead of stderr (RUST_LOG selects the level)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&Path>) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match log_file {
        Some(path) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(File::create(path)?))
            .init(),
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

/// Build the input from the flags, falling back to the built-in sample for
/// anything not given
fn build_input(args: &Args) -> Result<Input, Box<dyn std::error::Error>> {
    let mut input = catalog::default_input(args.problem);
    if let Some(nums) = &args.nums {
        input.nums = parse_sequence(nums)?;
    }
    if let Some(second) = &args.second {
        input.second = if second.trim().is_empty() {
            Vec::new()
        } else {
            parse_sequence(second)?
        };
    }
    if let Some(scalar) = args.target.or(args.k) {
        input.scalar = Some(scalar);
    }
    Ok(input)
}

fn dump(session: &Session) {
    let problem = session.problem();
    println!("{} ({} steps)", problem.title(), session.trace().len());
    let source = session.source();
    for (idx, step) in session.trace().iter().enumerate() {
        let physical = algoviz::highlight::highlight(problem, step.line, session.language(), source)
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-".to_string());
        let flag = if step.is_solution {
            "*"
        } else if step.is_complete {
            "#"
        } else {
            " "
        };
        println!(
            "{:>4}{} line {:>2} -> {:>3}  {}",
            idx + 1,
            flag,
            step.line,
            physical,
            step.description
        );
        if !step.variables.is_empty() {
            let vars: Vec<String> = step
                .variables
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect();
            println!("            {}", vars.join(" "));
        }
    }
    if let Some(result) = session.trace().terminal().and_then(|s| s.result.as_ref()) {
        println!("result: {}", result);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let input = build_input(&args)?;
    let mut session = Session::new(args.problem, input);
    session.set_language(args.language);
    tracing::info!(
        problem = %args.problem,
        steps = session.trace().len(),
        language = args.language.id(),
        "session ready"
    );

    if args.dump {
        dump(&session);
        return Ok(());
    }

    session.set_speed(args.speed, std::time::Instant::now());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "terminal loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
