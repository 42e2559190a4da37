//! Colorful console output for tour construction.
//!
//! Provides a custom `tracing` layer that formats builder events with colors.
//! Enabled with the `console` feature.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. Honors
/// `RUST_LOG`; builder events at `info` are shown by default.
pub fn init() {
    INIT.get_or_init(|| {
        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "tourforge_solver=info".parse::<Directive>() {
            filter = filter.add_directive(directive);
        }

        // A subscriber installed by the host application wins.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(TourConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats tour builder events with colors.
pub struct TourConsoleLayer;

impl<S: Subscriber> Layer<S> for TourConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("tourforge_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_tour_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    rows: Option<i64>,
    cols: Option<i64>,
    cells: Option<u64>,
    depth: Option<u64>,
    duration_ms: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "event" {
            self.event = Some(format!("{:?}", value).trim_matches('"').to_string());
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "rows" => self.rows = i64::try_from(value).ok(),
            "cols" => self.cols = i64::try_from(value).ok(),
            "cells" => self.cells = Some(value),
            "depth" => self.depth = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "rows" => self.rows = Some(value),
            "cols" => self.cols = Some(value),
            _ => self.record_u64(field, value.max(0) as u64),
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "event" {
            self.event = Some(value.to_string());
        }
    }
}

fn format_tour_event(v: &EventVisitor) -> String {
    match v.event.as_deref() {
        Some("build_start") => format_build_start(v),
        Some("build_end") => format_build_end(v),
        Some("board_rejected") => format_board_rejected(v),
        _ => String::new(),
    }
}

fn format_build_start(v: &EventVisitor) -> String {
    let rows = v.rows.unwrap_or(0);
    let cols = v.cols.unwrap_or(0);

    format!(
        "{} {} {} board ({}), cells ({}), split depth ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Builder]".bright_cyan(),
        format!("{rows}x{cols}").white().bold(),
        rows.saturating_mul(cols).to_formatted_string(&Locale::en).bright_yellow(),
        v.depth.unwrap_or(0).to_string().yellow()
    )
}

fn format_build_end(v: &EventVisitor) -> String {
    let cells = v.cells.unwrap_or(0);
    let duration_ms = v.duration_ms.unwrap_or(0);
    let speed = if duration_ms > 0 {
        cells * 1000 / duration_ms
    } else {
        cells
    };

    format!(
        "{} {} {} tour of {} ready: time spent ({}), cells ({}), speed ({}/sec)",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Builder]".bright_cyan(),
        format!("{}x{}", v.rows.unwrap_or(0), v.cols.unwrap_or(0)).white().bold(),
        format_duration_ms(duration_ms).yellow(),
        cells.to_formatted_string(&Locale::en).bright_yellow(),
        speed.to_formatted_string(&Locale::en).bright_magenta().bold()
    )
}

fn format_board_rejected(v: &EventVisitor) -> String {
    format!(
        "{} {} {} board ({}) has no supported decomposition",
        timestamp().bright_black(),
        "WARN".bright_red(),
        "[Builder]".bright_cyan(),
        format!("{}x{}", v.rows.unwrap_or(0), v.cols.unwrap_or(0)).white().bold()
    )
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
