//! JSON Lines output

use crate::error::Result;
use bugseed_domain::OutputRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends one compact JSON object per line, flushing after every record
pub struct JsonlSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonlSink<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Write one record and flush it
    pub fn append(&mut self, record: &OutputRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.written += 1;
        Ok(())
    }

    /// Number of records written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonlSink<BufWriter<File>> {
    /// Create or truncate the file at `path`
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        Ok(Self::new(BufWriter::new(file)))
    }
}
