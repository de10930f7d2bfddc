//! JSON output formatting

use graphic_core::error::Result;
use graphic_core::graph::GraphReport;

/// Pretty-printed report, newline terminated
pub fn report(report: &GraphReport) -> Result<String> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}
