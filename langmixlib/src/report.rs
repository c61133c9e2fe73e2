//! Census reporting: plain text table and markdown badge fragment.
//!
//! Both renderings are projections of the census; nothing here mutates it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::census::Census;

/// Heading the badge fragment is meant to be spliced under.
pub const BADGE_HEADING: &str = "## Language Statistics";

/// Minimum share for a language to appear in the badge fragment.
const BADGE_CUTOFF_PERCENT: f64 = 1.0;

/// Badge color when the caller's color table has no entry for a language.
const FALLBACK_COLOR: &str = "666666";

/// One presentational row of the census report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub language: String,
    pub lines: u64,
    pub files: u64,
    /// Share of the grand total, in percent; 0 for an empty census
    pub percentage: f64,
}

/// Project a census into report rows, sorted by lines descending with ties
/// broken by language label ascending.
pub fn build_report(census: &Census) -> Vec<ReportRow> {
    let grand_total = census.grand_total();

    let mut rows: Vec<ReportRow> = census
        .languages
        .values()
        .map(|stat| ReportRow {
            language: stat.language.clone(),
            lines: stat.lines,
            files: stat.files,
            percentage: if grand_total == 0 {
                0.0
            } else {
                stat.lines as f64 / grand_total as f64 * 100.0
            },
        })
        .collect();

    rows.sort_by(|a, b| b.lines.cmp(&a.lines).then_with(|| a.language.cmp(&b.language)));
    rows
}

/// Render report rows as a fixed-width text table with a TOTAL footer.
pub fn render_table(rows: &[ReportRow]) -> String {
    let rule = "-".repeat(60);
    let mut out = String::new();

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "{:<20} {:>10} {:>10} {:>10}\n",
        "Language", "Lines", "Files", "Percent"
    ));
    out.push_str(&rule);
    out.push('\n');

    let mut total_lines = 0u64;
    for row in rows {
        total_lines += row.lines;
        out.push_str(&format!(
            "{:<20} {:>10} {:>10} {:>9.2}%\n",
            row.language, row.lines, row.files, row.percentage
        ));
    }

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("{:<20} {:>10}\n", "TOTAL", total_lines));
    out
}

/// Render a markdown fragment of shields.io-style percentage badges.
///
/// Only languages at or above 1% are included. `colors` maps language
/// labels to hex badge colors; missing entries fall back to gray.
pub fn render_badges(rows: &[ReportRow], colors: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    out.push_str(BADGE_HEADING);
    out.push_str("\n\n");

    for row in rows {
        if row.percentage < BADGE_CUTOFF_PERCENT {
            continue;
        }
        let color = colors
            .get(&row.language)
            .map(String::as_str)
            .unwrap_or(FALLBACK_COLOR);
        out.push_str(&format!(
            "![{lang}](https://img.shields.io/badge/{lang}-{pct:.1}%25-{color}?style=flat-square)\n",
            lang = row.language,
            pct = row.percentage,
        ));
    }

    out
}
