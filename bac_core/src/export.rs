//! CSV export of sampled timelines.

use crate::{format::format_bac, tables::impairment_level, Result, TimelinePoint};
use std::io::Write;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    time: String,
    bac: String,
    percent: String,
    level: &'static str,
}

impl From<&TimelinePoint> for CsvRow {
    fn from(point: &TimelinePoint) -> Self {
        CsvRow {
            time: point.time.to_rfc3339(),
            bac: format!("{:.4}", point.bac),
            percent: format_bac(point.bac),
            level: impairment_level(point.bac).label,
        }
    }
}

/// Write a timeline as CSV with a header row; returns the rows written
pub fn write_timeline_csv<W: Write>(points: &[TimelinePoint], writer: W) -> Result<usize> {
    let mut writer = csv::Writer::from_writer(writer);
    for point in points {
        writer.serialize(CsvRow::from(point))?;
    }
    writer.flush()?;
    tracing::debug!("Wrote {} timeline rows to CSV", points.len());
    Ok(points.len())
}
