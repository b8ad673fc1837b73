use std::io::Write;

use vest_ledger::{PublishError, SnapshotSink};
use vest_types::BalanceAggregate;

use crate::cli::OutputFormat;

/// Writes snapshots to a terminal, or any other writer.
pub struct ConsoleSink<W> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }
}

impl<W: Write> SnapshotSink for ConsoleSink<W> {
    fn publish(&mut self, aggregates: &[BalanceAggregate]) -> Result<(), PublishError> {
        match self.format {
            OutputFormat::Text => {
                for aggregate in aggregates {
                    writeln!(self.writer, "{aggregate}")?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.writer, aggregates)
                    .map_err(|e| PublishError::Serialization(e.to_string()))?;
                writeln!(self.writer)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}
