//! Plain-text rendering of command results
//!
//! Kept free of printing so the output format can be tested directly.

use acf2g_babel::analysis::LayoutUsage;
use acf2g_babel::batch::BatchReport;
use acf2g_babel::ConverterRegistry;

/// One `kind: count` line per kind, each followed by its record ids when
/// `show_ids` is set.
pub fn format_usage(usage: &LayoutUsage, show_ids: bool) -> String {
    let mut out = String::new();
    for kind in &usage.kinds {
        out.push_str(&format!("{}: {}\n", kind.kind, kind.count()));
        if show_ids {
            let ids: Vec<String> = kind.record_ids.iter().map(|id| id.to_string()).collect();
            out.push_str(&ids.join(", "));
            out.push('\n');
        }
    }
    out
}

/// Summary of a conversion batch.
pub fn format_batch(report: &BatchReport) -> String {
    let mut out = format!("Converted {} record(s)\n", report.converted.len());
    if !report.skipped.is_empty() {
        out.push_str(&format!(
            "Skipped {} record(s) without layouts\n",
            report.skipped.len()
        ));
    }
    if !report.failures.is_empty() {
        out.push_str(&format!("Failed {} record(s):\n", report.failures.len()));
        for failure in &report.failures {
            out.push_str(&format!("  {}: {}\n", failure.id, failure.error));
        }
    }
    out
}

/// Layout kinds with the converter handling each.
pub fn format_kinds(registry: &ConverterRegistry) -> String {
    let mut out = String::from("Layout kinds:\n");
    for kind in registry.list_kinds() {
        if let Ok(converter) = registry.get(kind) {
            let marker = if converter.is_placeholder() { " (stub)" } else { "" };
            out.push_str(&format!(
                "  {:<24} {}{marker}\n",
                kind.name(),
                converter.description()
            ));
        }
    }
    out
}
