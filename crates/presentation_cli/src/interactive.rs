//! Interactive terminal session
//!
//! One loop owns the screen. It redraws on every input line and every
//! completed search, and refreshes only the header line once per second so
//! the clock keeps running while the user types.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use application::{WeatherSession, WeatherView};
use chrono::Utc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cli::Input;
use crate::render::{Palette, header_line, quick_cities_line, render};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const SAVE_CURSOR: &str = "\x1b7";
const RESTORE_CURSOR: &str = "\x1b8";
const HOME_AND_CLEAR_LINE: &str = "\x1b[1;1H\x1b[2K";

const HELP: &str = "\
Type a city name and press Enter to search.
  1-8        quick search (see list above)
  :u :units  switch between °C and °F
  :t :theme  switch between dark and light
  :h :help   show this help
  :q :quit   leave";

/// Options for the interactive loop
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Emit ANSI colours and cursor movement
    pub ansi: bool,
    /// Clock refresh period
    pub tick: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            ansi: true,
            tick: Duration::from_secs(1),
        }
    }
}

/// Full screen for `view`, with an optional notice and the help text
#[must_use]
pub fn compose(view: &WeatherView, notice: Option<&str>, show_help: bool, ansi: bool) -> String {
    let palette = if ansi {
        Palette::for_theme(view.theme)
    } else {
        Palette::plain()
    };

    let mut out = String::new();
    if ansi {
        out.push_str(CLEAR_SCREEN);
    }
    out.push_str(&render(view, &palette));
    out.push('\n');
    out.push_str(&quick_cities_line());
    out.push('\n');
    if let Some(notice) = notice {
        out.push_str(notice);
        out.push('\n');
    }
    if show_help {
        out.push_str(HELP);
        out.push('\n');
    }
    out.push_str("Search (:h for help) > ");
    out
}

/// Run the session against stdin and stdout until `:q` or end of input
///
/// At end of input, searches still in flight are awaited and drawn.
pub async fn run(session: Arc<WeatherSession>, options: Options) -> anyhow::Result<()> {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    run_with(session, stdin, std::io::stdout(), options).await
}

/// Run the session loop over arbitrary input and output
pub async fn run_with<R, W>(
    session: Arc<WeatherSession>,
    input: R,
    mut out: W,
    options: Options,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let (done_tx, mut done_rx) = mpsc::channel::<()>(8);
    let mut ticker = tokio::time::interval(options.tick);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let mut notice: Option<String> = None;
    let mut show_help = false;
    let mut input_closed = false;

    draw(&mut out, &session, notice.as_deref(), show_help, options.ansi)?;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                session.tick(Utc::now());
                if options.ansi {
                    draw_header(&mut out, &session)?;
                }
            },

            Some(()) = done_rx.recv() => {
                draw(&mut out, &session, notice.as_deref(), show_help, options.ansi)?;
            },

            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("Input closed");
                    input_closed = true;
                    break;
                };
                notice = None;
                show_help = false;

                match Input::parse(&line) {
                    Input::Quit => break,
                    Input::Help => show_help = true,
                    Input::ToggleUnits => {
                        session.toggle_units();
                    },
                    Input::ToggleTheme => {
                        session.toggle_theme();
                    },
                    Input::Unknown(command) => {
                        notice = Some(format!("Unknown command ':{command}'. Type :h for help."));
                    },
                    Input::Search(raw) => {
                        if let Some(pending) = session.begin_search(&raw) {
                            info!(city = %pending.city, request = pending.request.value(), "Search started");
                            let session = Arc::clone(&session);
                            let done = done_tx.clone();
                            tokio::spawn(async move {
                                session.run(pending).await;
                                let _ = done.send(()).await;
                            });
                        }
                    },
                }

                draw(&mut out, &session, notice.as_deref(), show_help, options.ansi)?;
            },
        }
    }

    // Piped input ends before its searches do; show their outcome.
    if input_closed {
        drop(done_tx);
        while session.snapshot().is_busy() && done_rx.recv().await.is_some() {}
        draw(&mut out, &session, notice.as_deref(), show_help, options.ansi)?;
    }

    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn draw<W: Write>(
    out: &mut W,
    session: &WeatherSession,
    notice: Option<&str>,
    show_help: bool,
    ansi: bool,
) -> std::io::Result<()> {
    let screen = compose(&session.view(), notice, show_help, ansi);
    out.write_all(screen.as_bytes())?;
    out.flush()
}

fn draw_header<W: Write>(out: &mut W, session: &WeatherSession) -> std::io::Result<()> {
    let view = session.view();
    let header = header_line(&view, &Palette::for_theme(view.theme));
    write!(out, "{SAVE_CURSOR}{HOME_AND_CLEAR_LINE}{header}{RESTORE_CURSOR}")?;
    out.flush()
}
