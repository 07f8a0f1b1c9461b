use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use zcalc::calculator::copy_to_clipboard;
use zcalc::input::parse_keys;
use zcalc::{CalculatorState, Config, Display, Session, ui};

/// Columns reserved for the display lines.
const DISPLAY_WIDTH: usize = 21;

#[derive(Parser)]
#[command(name = "zcalc")]
#[command(about = "A keypad calculator for the terminal")]
#[command(version)]
struct Cli {
    /// Key sequence to apply, e.g. "12+3<Enter>". Starts an interactive
    /// session when omitted.
    #[arg(short, long)]
    keys: Option<String>,

    /// Print the resulting state and display as JSON.
    #[arg(long)]
    json: bool,

    /// Copy the resulting value to the clipboard.
    #[arg(long)]
    copy: bool,

    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not print the keypad.
    #[arg(long)]
    no_keypad: bool,

    /// Print the effective configuration and exit.
    #[arg(long)]
    print_config: bool,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    state: &'a CalculatorState,
    display: Display,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    if cli.print_config {
        print!("{}", toml::to_string(&config)?);
        return Ok(());
    }

    let show_keypad = config.keypad.show && !cli.no_keypad;

    match &cli.keys {
        Some(keys) => run_once(&cli, &config, keys, show_keypad),
        None => run_interactive(&config, show_keypad),
    }
}

fn run_once(cli: &Cli, config: &Config, keys: &str, show_keypad: bool) -> anyhow::Result<()> {
    let actions = parse_keys(keys).context("Failed to parse key sequence")?;
    let mut session = Session::new();
    session.apply_all(actions);

    let display = session.display(&config.display);

    if cli.json {
        let snapshot = Snapshot {
            state: session.state(),
            display: display.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", ui::render(&display, DISPLAY_WIDTH, show_keypad));
    }

    if cli.copy {
        copy_to_clipboard(&display.raw)?;
    }

    Ok(())
}

fn run_interactive(config: &Config, show_keypad: bool) -> anyhow::Result<()> {
    let mut session = Session::new();
    let mut stdout = io::stdout();

    print!(
        "{}",
        ui::render(&session.display(&config.display), DISPLAY_WIDTH, show_keypad)
    );
    stdout.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed == "q" || trimmed == "quit" {
            break;
        }

        match parse_keys(trimmed) {
            Ok(actions) => {
                session.apply_all(actions);
            }
            Err(e) => {
                tracing::debug!(line = trimmed, "rejected input");
                eprintln!("{}", e);
                continue;
            }
        }

        print!(
            "{}",
            ui::render(&session.display(&config.display), DISPLAY_WIDTH, show_keypad)
        );
        stdout.flush()?;
    }

    Ok(())
}
