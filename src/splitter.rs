//! Streaming split of one CSV file into size-bounded parts.
//!
//! Records are copied one at a time from the input to the current output
//! part. After every record the part is flushed and its on-disk size is
//! checked; once it reaches `max_size` the part is closed and the next one is
//! started with a copy of the header row. A part therefore never splits a
//! record and may exceed `max_size` by at most one record.
//!
//! The size is measured on disk rather than counted, because quoting makes the
//! serialized length of a record differ from its parsed length.

use crate::config::Config;
use crate::error::SplitError;
use csv::{ByteRecord, Reader, ReaderBuilder, Writer, WriterBuilder};
use log::{debug, info, warn};
use std::fs::File;
use std::path::{Path, PathBuf};

/// One output file written by a split run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    /// Data records in the file, header excluded.
    pub rows: u64,
    /// Size on disk when the file was closed.
    pub bytes: u64,
}

/// Outcome of a successful split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSummary {
    /// Output files in the order they were written.
    pub outputs: Vec<OutputFile>,
    /// Data records copied from the input, header excluded.
    pub total_rows: u64,
}

/// Splits `config.input_path` into parts named by `config.output_pattern`.
///
/// Fails on the first error. Parts written before the failure stay on disk.
pub fn run(config: &Config) -> Result<SplitSummary, SplitError> {
    let mut session = SplitSession::open(config)?;
    session.stream()?;
    session.finish()
}

/// An output part being written. Flushes on drop so an early return never
/// leaves buffered records behind.
struct OutputPart {
    path: PathBuf,
    writer: Writer<File>,
    rows: u64,
}

impl OutputPart {
    /// Creates (or truncates) the file at `path` and writes `header` to it.
    fn create(path: PathBuf, header: &ByteRecord) -> Result<Self, SplitError> {
        info!("creating new file: {}", path.display());

        let file = File::create(&path).map_err(|source| SplitError::CreateOutput {
            path: path.clone(),
            source,
        })?;
        let mut part = Self {
            writer: WriterBuilder::new().from_writer(file),
            path,
            rows: 0,
        };
        part.writer
            .write_byte_record(header)
            .map_err(|source| SplitError::WriteRecord {
                path: part.path.clone(),
                source,
            })?;

        Ok(part)
    }

    /// Appends `record` and returns the size of the file afterwards.
    fn write(&mut self, record: &ByteRecord) -> Result<u64, SplitError> {
        self.writer
            .write_byte_record(record)
            .map_err(|source| SplitError::WriteRecord {
                path: self.path.clone(),
                source,
            })?;
        self.rows += 1;
        self.size()
    }

    fn size(&mut self) -> Result<u64, SplitError> {
        self.writer.flush().map_err(|source| SplitError::Flush {
            path: self.path.clone(),
            source,
        })?;
        let metadata = self
            .writer
            .get_ref()
            .metadata()
            .map_err(|source| SplitError::Stat {
                path: self.path.clone(),
                source,
            })?;
        Ok(metadata.len())
    }

    fn close(mut self) -> Result<OutputFile, SplitError> {
        let bytes = self.size()?;
        Ok(OutputFile {
            path: self.path.clone(),
            rows: self.rows,
            bytes,
        })
    }
}

impl Drop for OutputPart {
    fn drop(&mut self) {
        if let Err(err) = self.writer.flush() {
            warn!(
                "could not close current output file stream {}: {}",
                self.path.display(),
                err
            );
        }
    }
}

/// State held for the duration of one run: the input reader, the header row
/// and the parts written so far. Dropping the session releases the input
/// whichever way the run ends; the part being written releases itself.
struct SplitSession<'a> {
    config: &'a Config,
    reader: Reader<File>,
    header: ByteRecord,
    counter: u64,
    outputs: Vec<OutputFile>,
    total_rows: u64,
}

impl<'a> SplitSession<'a> {
    /// Opens the input and captures its header row.
    fn open(config: &'a Config) -> Result<Self, SplitError> {
        let input = config.input_path.as_path();
        let file = File::open(input).map_err(|source| SplitError::OpenInput {
            path: input.to_path_buf(),
            source,
        })?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(false)
            .from_reader(file);

        let header = read_header(&mut reader, input)?;
        debug!(
            "captured header with {} fields from {}",
            header.len(),
            input.display()
        );

        Ok(Self {
            config,
            reader,
            header,
            counter: 1,
            outputs: Vec::new(),
            total_rows: 0,
        })
    }

    fn create_part(&self) -> Result<OutputPart, SplitError> {
        OutputPart::create(self.config.output_pattern.render(self.counter), &self.header)
    }

    /// Copies every remaining record, rotating parts as they fill up.
    fn stream(&mut self) -> Result<(), SplitError> {
        let mut part = self.create_part()?;
        let mut record = ByteRecord::new();

        loop {
            match self.reader.read_byte_record(&mut record) {
                Ok(true) => {}
                Ok(false) => break,
                Err(source) => {
                    return Err(SplitError::ReadRecord {
                        record: self.total_rows + 1,
                        source,
                    })
                }
            }

            let size = part.write(&record)?;
            self.total_rows += 1;

            if size >= self.config.max_size {
                debug!(
                    "{} reached {} bytes (limit {}), rotating",
                    part.path.display(),
                    size,
                    self.config.max_size
                );
                // The finished part is closed before the next one is created.
                self.outputs.push(part.close()?);
                self.counter += 1;
                part = self.create_part()?;
            }
        }

        self.outputs.push(part.close()?);
        Ok(())
    }

    fn finish(self) -> Result<SplitSummary, SplitError> {
        debug!(
            "split {} records into {} files",
            self.total_rows,
            self.outputs.len()
        );
        Ok(SplitSummary {
            outputs: self.outputs,
            total_rows: self.total_rows,
        })
    }
}

fn read_header(reader: &mut Reader<File>, input: &Path) -> Result<ByteRecord, SplitError> {
    let mut header = ByteRecord::new();
    let found = reader
        .read_byte_record(&mut header)
        .map_err(|source| SplitError::ReadHeader {
            path: input.to_path_buf(),
            source,
        })?;

    if found {
        Ok(header)
    } else {
        Err(SplitError::MissingHeader {
            path: input.to_path_buf(),
        })
    }
}
