//! Markdown summary and inventory documents.

use super::summary::ScanSummary;
use crate::types::ScriptRecord;

const TALKING_POINTS: &[&str] = &[
    "- Review all **third-party analytics and tracking scripts** for data minimisation and consent.",
    "- Consider **Subresource Integrity (SRI)** for CDN-hosted libraries where feasible.",
    "- Tighten your **Content-Security-Policy (CSP)** `script-src` to only allow the domains listed here.",
    "- Audit embedded **payment, social, and widget scripts** for unnecessary permissions and data access.",
    "- Maintain this script inventory as part of your **vendor and supply-chain security** documentation.",
];

/// Render the statistical summary document.
pub fn render_summary(records: &[ScriptRecord], primary_domain: &str) -> String {
    let summary = ScanSummary::from_records(records);
    let mut lines: Vec<String> = Vec::new();

    lines.push("# Script Inventory Summary".to_string());
    lines.push(String::new());
    lines.push(format!("**Primary domain:** `{}`", primary_domain));
    lines.push(format!("**Total scripts detected:** {}", summary.total));
    lines.push(format!("- First-party: {}", summary.first_party));
    lines.push(format!("- Third-party: {}", summary.third_party));
    lines.push(String::new());

    lines.push("## Category Breakdown".to_string());
    lines.push(String::new());
    if summary.categories.is_empty() {
        lines.push("_No scripts detected._".to_string());
    } else {
        lines.push("| Category | Count |".to_string());
        lines.push("|----------|-------|".to_string());
        for entry in &summary.categories {
            lines.push(format!("| {} | {} |", entry.category, entry.count));
        }
    }
    lines.push(String::new());

    lines.push("## Top Third-Party Domains".to_string());
    lines.push(String::new());
    if summary.top_third_party_hosts.is_empty() {
        lines.push("_No third-party script domains detected._".to_string());
    } else {
        lines.push("| Domain | Count |".to_string());
        lines.push("|--------|-------|".to_string());
        for entry in &summary.top_third_party_hosts {
            lines.push(format!("| `{}` | {} |", escape_cell(&entry.host), entry.count));
        }
    }
    lines.push(String::new());

    lines.push("## Suggested Talking Points".to_string());
    lines.push(String::new());
    lines.extend(TALKING_POINTS.iter().map(|point| point.to_string()));
    lines.push(String::new());

    lines.join("\n")
}

/// Render the full inventory table, one row per record.
pub fn render_inventory(records: &[ScriptRecord]) -> String {
    let mut lines: Vec<String> = vec!["# Script Inventory".to_string(), String::new()];

    if records.is_empty() {
        lines.push("_No script URLs found in input._".to_string());
        return lines.join("\n");
    }

    lines.push("| URL | Host | Category | First/Third Party | Notes |".to_string());
    lines.push("|-----|------|----------|-------------------|-------|".to_string());

    for record in records {
        lines.push(format!(
            "| `{}` | `{}` | {} | {} | {} |",
            escape_cell(&record.url),
            escape_cell(&record.host),
            escape_cell(record.category.as_str()),
            record.party_label(),
            escape_cell(&record.notes.join("; ")),
        ));
    }

    lines.join("\n")
}

/// Escape pipes so a value stays inside its table cell.
pub fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
