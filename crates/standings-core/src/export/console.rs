//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::standings::{DriverStanding, TeamStanding, TimeStanding};

const NAME_WIDTH: usize = 24;

fn border(width: usize) -> String {
    "━".repeat(width)
}

fn colored_position(position: usize) -> String {
    let label = format!("{:>3}", position);
    match position {
        1 => label.yellow().bold().to_string(),
        2 => label.white().bold().to_string(),
        3 => label.red().to_string(),
        _ => label.dimmed().to_string(),
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

/// Driver leaderboard as a boxed table
pub fn format_driver_table(rows: &[DriverStanding]) -> String {
    let mut output = String::new();
    let width = 3 + NAME_WIDTH * 2 + 12;

    let _ = writeln!(output, "{}", border(width).dimmed());
    let _ = writeln!(output, "  {}", "DRIVERS".bold());
    let _ = writeln!(output, "{}", border(width).dimmed());
    if rows.is_empty() {
        let _ = writeln!(output, "  {}", "No results yet".dimmed());
    }
    for row in rows {
        let _ = writeln!(
            output,
            "{}  {} {} {:>6}",
            colored_position(row.position),
            pad(&row.username, NAME_WIDTH).bold(),
            pad(&row.team, NAME_WIDTH).cyan(),
            row.points.green()
        );
    }
    let _ = write!(output, "{}", border(width).dimmed());

    output
}

/// Team leaderboard as a boxed table
pub fn format_team_table(rows: &[TeamStanding]) -> String {
    let mut output = String::new();
    let width = 3 + NAME_WIDTH + 12;

    let _ = writeln!(output, "{}", border(width).dimmed());
    let _ = writeln!(output, "  {}", "TEAMS".bold());
    let _ = writeln!(output, "{}", border(width).dimmed());
    if rows.is_empty() {
        let _ = writeln!(output, "  {}", "No team points yet".dimmed());
    }
    for row in rows {
        let _ = writeln!(
            output,
            "{}  {} {:>6}",
            colored_position(row.position),
            pad(&row.team, NAME_WIDTH).cyan().bold(),
            row.points.green()
        );
    }
    let _ = write!(output, "{}", border(width).dimmed());

    output
}

/// Best-time leaderboard as a boxed table
pub fn format_time_table(rows: &[TimeStanding]) -> String {
    let mut output = String::new();
    let width = 3 + NAME_WIDTH + 16;

    let _ = writeln!(output, "{}", border(width).dimmed());
    let _ = writeln!(output, "  {}", "BEST TIMES".bold());
    let _ = writeln!(output, "{}", border(width).dimmed());
    if rows.is_empty() {
        let _ = writeln!(output, "  {}", "No times yet".dimmed());
    }
    for row in rows {
        let _ = writeln!(
            output,
            "{}  {} {:>12}",
            colored_position(row.position),
            pad(&row.username, NAME_WIDTH).bold(),
            row.display_time.magenta()
        );
    }
    let _ = write!(output, "{}", border(width).dimmed());

    output
}
