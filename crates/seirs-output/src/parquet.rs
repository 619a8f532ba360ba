//! Parquet output backend (feature `parquet`).
//!
//! Rows are buffered in memory and written as a single record batch by
//! [`finish`](OutputWriter::finish).

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{UInt32Builder, UInt64Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{DailyRow, OutputResult};

fn daily_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("t", DataType::UInt32, false),
        Field::new("S", DataType::UInt64, false),
        Field::new("E", DataType::UInt64, false),
        Field::new("I", DataType::UInt64, false),
        Field::new("R", DataType::UInt64, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes daily counts to one Parquet file.
///
/// `finish()` **must** be called; it writes the buffered rows and the file
/// footer.  A file whose writer was dropped unfinished cannot be read.
pub struct ParquetWriter {
    writer: Option<ArrowWriter<File>>,
    schema: Arc<Schema>,
    rows:   Vec<DailyRow>,
}

impl ParquetWriter {
    /// Create the Parquet file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let schema = daily_schema();
        let file = File::create(path)?;
        let writer = ArrowWriter::try_new(file, Arc::clone(&schema), Some(snappy_props()))?;
        Ok(Self { writer: Some(writer), schema, rows: Vec::new() })
    }

    fn batch(&self) -> OutputResult<RecordBatch> {
        let mut t = UInt32Builder::with_capacity(self.rows.len());
        let mut s = UInt64Builder::with_capacity(self.rows.len());
        let mut e = UInt64Builder::with_capacity(self.rows.len());
        let mut i = UInt64Builder::with_capacity(self.rows.len());
        let mut r = UInt64Builder::with_capacity(self.rows.len());

        for row in &self.rows {
            t.append_value(row.t);
            s.append_value(row.s);
            e.append_value(row.e);
            i.append_value(row.i);
            r.append_value(row.r);
        }

        Ok(RecordBatch::try_new(
            Arc::clone(&self.schema),
            vec![
                Arc::new(t.finish()),
                Arc::new(s.finish()),
                Arc::new(e.finish()),
                Arc::new(i.finish()),
                Arc::new(r.finish()),
            ],
        )?)
    }
}

impl OutputWriter for ParquetWriter {
    fn write_daily(&mut self, row: &DailyRow) -> OutputResult<()> {
        self.rows.push(*row);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.writer.is_none() {
            return Ok(());
        }
        let batch = self.batch()?;
        if let Some(mut writer) = self.writer.take() {
            if batch.num_rows() > 0 {
                writer.write(&batch)?;
            }
            writer.close()?;
        }
        self.rows.clear();
        Ok(())
    }
}
