use std::fs::File;
use std::io::{BufWriter, Stdout, Write};
use std::path::Path;

use crate::record::QuoteRecord;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
}

/// Record sink interface. The extraction core makes no format commitment;
/// sinks decide how records get serialized.
pub trait Sink {
    fn write(&mut self, record: &QuoteRecord) -> Result<(), SinkError>;
    fn flush(&mut self) -> Result<(), SinkError>;
}

/// Writes one JSON object per line.
pub struct JsonLinesSink<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            out: BufWriter::new(writer),
        }
    }
}

impl JsonLinesSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl JsonLinesSink<File> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, SinkError> {
        let file = File::create(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> Sink for JsonLinesSink<W> {
    fn write(&mut self, record: &QuoteRecord) -> Result<(), SinkError> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.out.flush()?;
        Ok(())
    }
}
