use crate::models::Severity;
use crate::registry::MatchResult;

pub fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.1}s", ms as f64 / 1000.0)
    } else {
        format!("{}m {}s", ms / 60_000, (ms % 60_000) / 1000)
    }
}

pub fn severity_badge(severity: Severity) -> String {
    format!("[{}]", severity.as_str().to_uppercase())
}

/// One line per cross-reference hit, as printed by the CLI.
pub fn format_match(m: &MatchResult) -> String {
    format!("{} ({}) {}: {}", m.address, m.chain, m.name, m.match_reason)
}

/// Text gauge for a 0..=100 score, ten cells wide.
pub fn probability_bar(score: u8) -> String {
    let filled = (usize::from(score.min(100)) + 5) / 10;
    format!("{}{} {}%", "#".repeat(filled), ".".repeat(10 - filled), score)
}
