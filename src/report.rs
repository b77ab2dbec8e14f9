use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};

use crate::domain::{AccountStats, GameResult, HistoryRow};
use crate::errors::report_context;

/// Render one account's history as a plain-text table
pub fn render_table(stats: &AccountStats) -> String {
    let mut lines = vec![format!(
        "{} ({}, x{}) rating {} after {} games",
        stats.name.bold(),
        stats.tier.as_str(),
        stats.multiplier,
        stats.rating.to_string().bold(),
        stats.games_count
    )];

    if stats.history.is_empty() {
        lines.push("  no games played".to_string());
    } else {
        lines.push(format!(
            "  {:>5}  {:<16} {:<10} {:>5}  {:<12} {:<6}",
            "game", "name", "variant", "stake", "opponent", "result"
        ));
        lines.extend(stats.history.iter().map(render_row));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Render all accounts as pretty-printed JSON
pub fn render_json(stats: &[AccountStats]) -> Result<String> {
    serde_json::to_string_pretty(stats).with_context(|| report_context("json"))
}

pub fn render_all(stats: &[AccountStats], json: bool) -> Result<String> {
    if json {
        return render_json(stats);
    }

    Ok(stats
        .iter()
        .map(render_table)
        .collect::<Vec<_>>()
        .join("\n"))
}

fn render_row(row: &HistoryRow) -> String {
    format!(
        "  {:>5}  {:<16} {:<10} {:>5}  {:<12} {}",
        row.game_id,
        truncate(&row.name, 16),
        row.variant.as_str(),
        row.stake,
        truncate(&row.opponent, 12),
        colorize_result(row.result)
    )
}

fn colorize_result(result: GameResult) -> ColoredString {
    let label = format!("{:<6}", result.as_str());
    match result {
        GameResult::Win => label.green(),
        GameResult::Lose => label.red(),
        GameResult::Draw => label.yellow(),
        GameResult::Undetermined => label.dimmed(),
    }
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
