//! Terminal rendering of the leaderboard.

use std::fmt::Write;
use std::path::Path;
use tally_core::context::{Color, resolve};
use tally_core::{Leaderboard, LeaderboardRow, spec_color};

pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Per-ability breakdown under each row
    pub verbose: bool,
    /// 24-bit background colors; off for pipes and NO_COLOR
    pub color: bool,
}

/// Whole screen for one pass, without the clear sequence.
pub fn render(
    board: &Leaderboard,
    zone: Option<&str>,
    newest_log: Option<&Path>,
    opts: RenderOptions,
) -> String {
    let mut out = String::new();
    let Leaderboard::Ready {
        rows,
        elapsed_seconds,
    } = board
    else {
        out.push_str("No damage recorded yet. Waiting for combat logging to start.\n");
        let _ = writeln!(
            out,
            "Newest log file found: {}",
            newest_log.map_or_else(|| "none".to_string(), |p| p.display().to_string())
        );
        return out;
    };

    if let Some(header) = header(zone, *elapsed_seconds) {
        let _ = writeln!(out, "{header}\n");
    }

    let width = rows
        .iter()
        .map(|r| r.display_name().chars().count())
        .max()
        .unwrap_or(0);

    for row in rows {
        let _ = writeln!(out, "{}", format_row(row, width, opts.color));
        if opts.verbose {
            write_abilities(&mut out, row);
        }
    }
    out
}

fn header(zone: Option<&str>, elapsed: Option<f64>) -> Option<String> {
    let zone = zone.filter(|z| !z.is_empty());
    match (zone, elapsed) {
        (None, None) => None,
        (Some(z), None) => Some(z.to_string()),
        (None, Some(secs)) => Some(format_duration(secs)),
        (Some(z), Some(secs)) => Some(format!("{z}  {}", format_duration(secs))),
    }
}

fn format_duration(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// `name : bar X.XXM, Y.YYK DPS`
pub fn format_row(row: &LeaderboardRow, name_width: usize, color: bool) -> String {
    let name = row.display_name();
    let pad = name_width.saturating_sub(name.chars().count());
    let dps = row
        .dps
        .map_or_else(|| "--".to_string(), |dps| format!("{:.2}K", dps / 1000.0));
    format!(
        "{name}{}: {} {:.2}M, {dps} DPS",
        " ".repeat(pad),
        bar(row.percent_of_max, spec_color(row.spec_id), color),
        row.total_damage as f64 / 1_000_000.0,
    )
}

/// One cell per 5% of the top damage dealer.
pub fn bar_cells(percent_of_max: f64) -> usize {
    (percent_of_max / 5.0).floor().max(0.0) as usize
}

fn bar(percent_of_max: f64, class_color: Option<Color>, color: bool) -> String {
    let cells = bar_cells(percent_of_max);
    match class_color {
        Some([r, g, b, _]) if color => {
            format!("\x1b[48;2;{r};{g};{b}m{}{RESET}", " ".repeat(cells))
        }
        _ => "█".repeat(cells),
    }
}

fn write_abilities(out: &mut String, row: &LeaderboardRow) {
    for ability in &row.abilities {
        let share = if row.total_damage > 0 {
            ability.damage as f64 / row.total_damage as f64 * 100.0
        } else {
            0.0
        };
        let _ = writeln!(
            out,
            "    {}: {:.2}M ({share:.1}%)",
            resolve(ability.ability),
            ability.damage as f64 / 1_000_000.0,
        );
    }
}
