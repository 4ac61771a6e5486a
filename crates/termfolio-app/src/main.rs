//! termfolio desktop entry point.
//!
//! Runs the portfolio shell in the current terminal. An optional config file
//! (TOML, or JSON when the name ends in `.json`) comes from the first
//! argument or `TERMFOLIO_CONFIG`. Press Esc or Ctrl+C to quit.

mod browser;
mod input;
mod screen;

use std::io::{self, Stdout};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::terminal;

use browser::SystemBrowser;
use input::InputResult;
use screen::TerminalScreen;
use termfolio_terminal::{Host, Session};
use termfolio_types::config::ShellConfig;

/// Longest wait for a key while no task is due.
const IDLE_POLL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config()?;
    log::info!("Starting termfolio at {}", config.current_path);

    let mut session = Session::new(config).context("invalid shell config")?;
    let mut screen = TerminalScreen::new(io::stdout());
    let mut browser = SystemBrowser;

    terminal::enable_raw_mode().context("enabling raw mode")?;
    let result = run(&mut session, &mut screen, &mut browser);
    let cancelled = session.shutdown();
    terminal::disable_raw_mode().context("restoring terminal")?;
    println!();

    log::info!(
        "termfolio shut down after {}ms ({cancelled} pending task(s) cancelled)",
        session.now_ms()
    );
    result
}

fn load_config() -> Result<ShellConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TERMFOLIO_CONFIG").ok());
    let Some(path) = path else {
        return Ok(ShellConfig::default());
    };

    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config = if Path::new(&path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    {
        ShellConfig::from_json(&text)
    } else {
        ShellConfig::from_toml(&text)
    }
    .with_context(|| format!("loading {path}"))?;
    log::info!("Loaded config from {path}");
    Ok(config)
}

fn run(
    session: &mut Session,
    screen: &mut TerminalScreen<Stdout>,
    browser: &mut SystemBrowser,
) -> Result<()> {
    session.mount(&mut Host::new(screen, browser));

    let mut last = Instant::now();
    loop {
        let timeout = session
            .time_to_next_tick()
            .map_or(IDLE_POLL, |ms| Duration::from_millis(ms).min(IDLE_POLL));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match input::translate(&key) {
                    InputResult::Key(ev) => {
                        session.handle_key(&ev, &mut Host::new(screen, browser));
                    },
                    InputResult::Skip => {},
                    InputResult::Quit => break,
                }
            }
        }

        // Carry sub-millisecond remainders into the next frame.
        let elapsed = last.elapsed().as_millis() as u64;
        if elapsed > 0 {
            last += Duration::from_millis(elapsed);
            session.advance(elapsed, &mut Host::new(screen, browser));
        }
    }
    Ok(())
}
