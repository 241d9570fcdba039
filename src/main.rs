// LineSmith - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. SIGINT registration for clean cancellation at the prompt
// 4. Running the interactive loop and reporting its outcome

use clap::Parser;
use linesmith::app::prompt::StdinSource;
use linesmith::app::run::{run_loop, Outcome};
use linesmith::platform;
use linesmith::util;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// LineSmith - interactive text file tidier.
///
/// Prompts for a text file, trims and collapses whitespace, uppercases the
/// content, numbers the lines, and writes the result to
/// `modified_<stem>.txt` next to the source.
#[derive(Parser, Debug)]
#[command(name = "LineSmith", version, about)]
struct Cli {
    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is loaded before logging init because the configured level
    // feeds the filter; its warnings are replayed once tracing is up.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "LineSmith starting"
    );

    // SIGINT only sets a flag; the prompt loop observes it and cancels
    // with the farewell instead of aborting mid-prompt.
    let interrupted = Arc::new(AtomicBool::new(false));
    if let Err(e) =
        signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&interrupted))
    {
        tracing::warn!(error = %e, "Could not register SIGINT handler");
    }

    println!(
        "=== {} v{} ===",
        util::constants::APP_NAME,
        util::constants::APP_VERSION
    );
    println!("Tip: Enter a path like 'input.txt' or 'docs/notes.txt'. Type 'q' to quit.\n");

    let mut input = StdinSource::new(interrupted);
    match run_loop(&mut input, &config) {
        Outcome::Completed(output) => {
            println!("\nSuccess! Wrote modified file to: {}\n", output.display());
        }
        Outcome::Cancelled => {
            println!("{}", util::constants::FAREWELL);
        }
    }

    // Recoverable errors never reach this point as failures; both terminal
    // outcomes exit with the default success code.
}
