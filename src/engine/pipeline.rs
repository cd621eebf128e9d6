use std::fs::File;
use std::io::{BufReader, Write};

use anyhow::Result;
use csv::{ReaderBuilder, StringRecord, Trim};
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::error;

use crate::engine::CommissionEngine;
use crate::ledger::Ledger;
use crate::models::{Operation, OperationError};

/// Streams operations from a CSV file through the commission engine.
///
/// A blocking reader task parses rows and a single consumer applies them in
/// order, writing one fee per line. The first bad row stops the run.
pub struct Pipeline<L: Ledger> {
    engine: CommissionEngine<L>,
    backpressure: usize
}

impl<L: Ledger> Pipeline<L> {
    pub fn new(engine: CommissionEngine<L>) -> Self {
        Self {
            engine,
            backpressure: 256
        }
    }

    pub fn engine(&self) -> &CommissionEngine<L> {
        &self.engine
    }

    /// Processes every row of `path`, writing fees to `output` as they are computed.
    ///
    /// # Errors
    /// Returns `OperationError` if the file cannot be opened or a row is malformed,
    /// `CommissionError` if a fee cannot be computed, and any I/O error raised while writing.
    pub async fn run<W: Write>(&mut self, path: &str, output: &mut W) -> Result<usize> {
        let (sender, receiver) = mpsc::channel::<Result<Operation, OperationError>>(self.backpressure);
        let csv_handle = Self::spawn_csv_reader(path.to_string(), sender);
        let processing_result = self.process_operations(receiver, output).await;

        if let Err(error) = csv_handle.await {
            error!("CSV ingestion failed: {error}");
        }

        processing_result
    }

    fn spawn_csv_reader(path: String, sender: mpsc::Sender<Result<Operation, OperationError>>) -> JoinHandle<()> {
        spawn_blocking(move || {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    let _ = sender.blocking_send(Err(OperationError::open(&path, error)));
                    return;
                }
            };

            let mut reader = ReaderBuilder::new()
                .has_headers(false)
                .trim(Trim::All)
                .flexible(true)
                .from_reader(BufReader::new(file));

            let mut record = StringRecord::new();

            loop {
                let parsed = match reader.read_record(&mut record) {
                    Ok(true) => Operation::from_record(&record),
                    Ok(false) => break,
                    Err(error) => {
                        let line = error.position().map(|position| position.line()).unwrap_or_default();
                        Err(OperationError::malformed(line, error))
                    }
                };

                let stop = parsed.is_err();

                if sender.blocking_send(parsed).is_err() || stop {
                    break;
                }
            }
        })
    }

    async fn process_operations<W: Write>(
        &mut self,
        mut receiver: mpsc::Receiver<Result<Operation, OperationError>>,
        output: &mut W
    ) -> Result<usize> {
        let mut processed = 0;

        while let Some(parsed) = receiver.recv().await {
            let operation = parsed?;
            let fee = self.engine.calculate(&operation)?;

            writeln!(output, "{fee}")?;
            processed += 1;
        }

        Ok(processed)
    }
}
