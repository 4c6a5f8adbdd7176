use std::io::Write;

use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

use crate::analyzer::AnalysisReport;
use crate::error::{PipelineError, Result};

/// Renders the analysis report into `sink` as terminal-friendly text.
pub fn render_report(report: &AnalysisReport, sink: &mut impl Write) -> Result<()> {
    write_report(report, sink).map_err(|err| PipelineError::Report { source: err })
}

fn write_report(report: &AnalysisReport, sink: &mut impl Write) -> std::io::Result<()> {
    writeln!(sink)?;
    writeln!(sink, "=== ANALYSIS RESULTS ===")?;
    writeln!(sink, "Average rating: {:.1}/10", report.mean_rating)?;
    writeln!(sink)?;
    writeln!(sink, "Top {} Movies:", report.top.len())?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Rank", "Title", "Rating"]);
    for (idx, entry) in report.top.iter().enumerate() {
        table.add_row(vec![
            (idx + 1).to_string(),
            entry.title.clone(),
            format!("{:.1}", entry.rating),
        ]);
    }
    writeln!(sink, "{table}")?;

    Ok(())
}
