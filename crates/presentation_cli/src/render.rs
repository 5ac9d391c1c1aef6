//! Text rendering of the display model
//!
//! Everything printed comes from [`WeatherView`]; no conversion or
//! formatting of weather values happens here.

use std::fmt::Write;

use application::{QUICK_CITIES, ReportView, ViewBody, WeatherView};
use domain::Theme;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Terminal colours for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    accent: &'static str,
    muted: &'static str,
    error: &'static str,
}

impl Palette {
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                accent: "\x1b[96m",
                muted: "\x1b[90m",
                error: "\x1b[91m",
            },
            Theme::Light => Self {
                accent: "\x1b[34m",
                muted: "\x1b[37m",
                error: "\x1b[31m",
            },
        }
    }

    /// No escape codes at all
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            accent: "",
            muted: "",
            error: "",
        }
    }

    const fn reset(&self) -> &'static str {
        if self.accent.is_empty() { "" } else { RESET }
    }

    const fn bold(&self) -> &'static str {
        if self.accent.is_empty() { "" } else { BOLD }
    }
}

/// Header line: date, clock, theme and unit toggle
#[must_use]
pub fn header_line(view: &WeatherView, palette: &Palette) -> String {
    format!(
        "{muted}{date}{reset}  {bold}{clock}{reset}   {icon}  [{hint}]{busy}",
        muted = palette.muted,
        date = view.date,
        reset = palette.reset(),
        bold = palette.bold(),
        clock = view.clock,
        icon = view.theme_icon,
        hint = view.toggle_hint,
        busy = if view.busy { "  ⏳ loading..." } else { "" },
    )
}

/// Numbered quick-search list
#[must_use]
pub fn quick_cities_line() -> String {
    QUICK_CITIES
        .iter()
        .enumerate()
        .map(|(i, city)| format!("{} {city}", i + 1))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Render the complete screen
#[must_use]
pub fn render(view: &WeatherView, palette: &Palette) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", header_line(view, palette));
    let _ = writeln!(
        out,
        "{}{}⚡ Skycast{}",
        palette.bold(),
        palette.accent,
        palette.reset()
    );
    out.push('\n');

    match &view.body {
        ViewBody::Placeholder { title, text } => {
            let _ = writeln!(out, "🌍 {}{title}{}", palette.bold(), palette.reset());
            let _ = writeln!(out, "   {}{text}{}", palette.muted, palette.reset());
        },
        ViewBody::Error { message } => {
            let _ = writeln!(out, "{}⚠️  {message}{}", palette.error, palette.reset());
        },
        ViewBody::Report(report) => render_report(&mut out, report, palette),
    }

    out
}

fn render_report(out: &mut String, report: &ReportView, palette: &Palette) {
    let _ = writeln!(
        out,
        "📍 {}{}{}{}",
        palette.bold(),
        palette.accent,
        report.location,
        palette.reset()
    );
    let _ = writeln!(
        out,
        "   {}  {}{}{}",
        report.temperature,
        palette.muted,
        report.description,
        palette.reset()
    );
    let _ = writeln!(out, "   🌡️ Feels like {}", report.feels_like);
    let _ = writeln!(out, "   {}{}{}", palette.muted, report.icon_url, palette.reset());
    out.push('\n');

    for stat in &report.stats {
        let _ = writeln!(out, "   {:<11} {}", stat.label, stat.value);
    }
    out.push('\n');

    let _ = writeln!(
        out,
        "☀️ Sunrise {}   Sunset {}",
        report.sunrise, report.sunset
    );

    if !report.forecast.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "📅 {}-Day Forecast", report.forecast.len());
        for card in &report.forecast {
            let _ = writeln!(
                out,
                "   {:<4} {:>6}  {}",
                card.weekday, card.temperature, card.description
            );
        }
    }
}
