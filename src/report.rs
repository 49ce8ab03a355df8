//! Report sink: persist an evaluation table as a delimited text file

use crate::error::Result;
use crate::evaluation::{format_metric, MetricsTable};
use std::path::Path;

/// Write the comparison table to a CSV file.
///
/// Columns are `model,mase,mape,smape`, rows in table order (worst
/// MASE first), values rounded to 4 decimals. Undefined metrics are
/// written as an explicit `NaN` marker rather than a fabricated number.
pub fn write_metrics_csv<P: AsRef<Path>>(table: &MetricsTable, path: P) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["model", "mase", "mape", "smape"])?;
    for row in table.rows() {
        writer.write_record([
            row.model.clone(),
            format_metric(row.mase),
            format_metric(row.mape),
            format_metric(row.smape),
        ])?;
    }
    writer.flush()?;

    Ok(())
}
