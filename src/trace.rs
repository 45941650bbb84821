//! Trajectory export for an external renderer

use std::io::Write;

use crate::scenario::ScenarioReport;

/// Write `report` as JSON, pretty-printed when `pretty` is set
pub fn write_report<W: Write>(
    writer: W,
    report: &ScenarioReport,
    pretty: bool,
) -> serde_json::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, report)
    } else {
        serde_json::to_writer(writer, report)
    }
}

pub fn read_report(json: &str) -> serde_json::Result<ScenarioReport> {
    serde_json::from_str(json)
}
