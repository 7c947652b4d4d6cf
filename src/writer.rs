//! CSV export for generated inventory batches.

use crate::error::FixtureError;
use crate::record::InventoryRecord;
use csv::WriterBuilder;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from an export operation.
#[derive(Debug, Clone, Default)]
pub struct ExportMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl ExportMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writer that serializes inventory batches to CSV files.
pub struct CsvExporter {
    include_header: bool,
}

impl CsvExporter {
    /// Create a new exporter that writes a header row.
    pub fn new() -> Self {
        Self {
            include_header: true,
        }
    }

    /// Set whether to include a header row in the CSV output.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Write the batch to `output_path` as CSV.
    ///
    /// The header (when enabled) is
    /// `name,quantity,unit,category,orderDate,replenishmentTime` and order
    /// dates are formatted `YYYY-MM-DD`.
    pub fn export<P: AsRef<Path>>(
        &self,
        records: &[InventoryRecord],
        output_path: P,
    ) -> Result<ExportMetrics, FixtureError> {
        let start_time = Instant::now();
        let output_path = output_path.as_ref();

        info!(
            "Writing CSV file '{}' with {} rows",
            output_path.display(),
            records.len()
        );

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = WriterBuilder::new()
            .has_headers(self.include_header)
            .from_writer(buf_writer);

        let mut metrics = ExportMetrics::default();
        for record in records {
            writer.serialize(record)?;
            metrics.rows_written += 1;
        }

        writer.flush()?;
        drop(writer);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "CSV export complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_records() -> Vec<InventoryRecord> {
        vec![
            InventoryRecord {
                name: "Milk".to_string(),
                quantity: 12,
                unit: "liters".to_string(),
                category: "Dairy".to_string(),
                order_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
                replenishment_time: 4,
            },
            InventoryRecord {
                name: "Rice".to_string(),
                quantity: 0,
                unit: "kilograms".to_string(),
                category: "Grocery".to_string(),
                order_date: NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
                replenishment_time: 14,
            },
        ]
    }

    #[test]
    fn test_export_with_header() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("inventory.csv");

        let metrics = CsvExporter::new()
            .export(&sample_records(), &output_path)
            .unwrap();

        assert_eq!(metrics.rows_written, 2);
        assert!(metrics.file_size_bytes > 0);

        let content = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "name,quantity,unit,category,orderDate,replenishmentTime"
        );
        assert_eq!(lines[1], "Milk,12,liters,Dairy,2024-03-05,4");
        assert_eq!(lines[2], "Rice,0,kilograms,Grocery,2024-02-28,14");
    }

    #[test]
    fn test_export_without_header() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("inventory.csv");

        CsvExporter::new()
            .with_header(false)
            .export(&sample_records(), &output_path)
            .unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.starts_with("Milk,"));
    }

    #[test]
    fn test_export_empty_batch() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("empty.csv");

        let metrics = CsvExporter::new().export(&[], &output_path).unwrap();

        assert_eq!(metrics.rows_written, 0);
        assert!(output_path.exists());
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("no_such_dir").join("inventory.csv");

        let result = CsvExporter::new().export(&sample_records(), &output_path);
        assert!(matches!(result, Err(FixtureError::Io(_))));
    }
}
