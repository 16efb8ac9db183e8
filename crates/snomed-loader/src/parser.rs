//! Generic RF2 file parser.
//!
//! Provides a streaming parser for SNOMED CT RF2 tab-delimited files.
//! Each line is one record and fields are split on tabs only: quotes carry
//! no meaning, there is no limit on line length, and a blank line is a
//! record with no fields.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::marker::PhantomData;
use std::path::Path;

use csv::StringRecord;

use crate::types::{Rf2Error, Rf2Result};

/// Trait for types that can be parsed from RF2 records.
pub trait Rf2Record: Sized {
    /// Minimum number of fields a data row must have.
    const MIN_FIELDS: usize;

    /// Parse a record from a CSV StringRecord.
    fn from_record(record: &StringRecord) -> Rf2Result<Self>;

    /// Returns true if this record should be kept.
    fn passes_filter(&self) -> bool;
}

/// A streaming parser for RF2 files.
///
/// This parser reads RF2 files record-by-record to avoid loading
/// entire files into memory. The first line is treated as a header and
/// discarded without inspection.
pub struct Rf2Parser<R: BufRead, T: Rf2Record> {
    reader: R,
    line: Vec<u8>,
    line_number: u64,
    record: StringRecord,
    records_read: usize,
    records_skipped: usize,
    _marker: PhantomData<T>,
}

impl<T: Rf2Record> Rf2Parser<BufReader<File>, T> {
    /// Creates a new parser from a file path.
    ///
    /// # Errors
    /// Returns an error if the file does not exist or cannot be opened.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Rf2Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Rf2Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead, T: Rf2Record> Rf2Parser<R, T> {
    /// Creates a new parser from a buffered reader.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            line_number: 0,
            record: StringRecord::new(),
            records_read: 0,
            records_skipped: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of data records read so far (header excluded).
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Returns the number of records dropped by the filter so far.
    pub fn records_skipped(&self) -> usize {
        self.records_skipped
    }

    /// Parses records in batches, calling the callback for each batch.
    ///
    /// Full batches of `batch_size` records are handed over as soon as they
    /// fill up; the final partial batch follows once the input is
    /// exhausted. The first parse or callback error aborts the run.
    pub fn parse_batched<F>(&mut self, batch_size: usize, mut callback: F) -> Rf2Result<usize>
    where
        F: FnMut(Vec<T>) -> Rf2Result<()>,
    {
        let batch_size = batch_size.max(1);
        let mut batch = Vec::with_capacity(batch_size);
        let mut total = 0;

        for record in self.by_ref() {
            batch.push(record?);
            if batch.len() >= batch_size {
                total += batch.len();
                callback(std::mem::replace(
                    &mut batch,
                    Vec::with_capacity(batch_size),
                ))?;
            }
        }

        if !batch.is_empty() {
            total += batch.len();
            callback(batch)?;
        }

        Ok(total)
    }

    /// Reads the next line into `self.line` without its terminator.
    ///
    /// Returns `false` at end of input.
    fn read_line(&mut self) -> Rf2Result<bool> {
        self.line.clear();
        if self.reader.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(false);
        }
        self.line_number += 1;

        if self.line.last() == Some(&b'\n') {
            self.line.pop();
            if self.line.last() == Some(&b'\r') {
                self.line.pop();
            }
        }
        Ok(true)
    }

    /// Splits the current line into `self.record`.
    fn split_line(&mut self) -> Rf2Result<()> {
        self.record.clear();
        if self.line.is_empty() {
            return Ok(());
        }

        let text = std::str::from_utf8(&self.line).map_err(|_| Rf2Error::InvalidUtf8 {
            line: self.line_number,
        })?;
        for field in text.split('\t') {
            self.record.push_field(field);
        }
        Ok(())
    }

    fn next_record(&mut self) -> Rf2Result<Option<T>> {
        if self.line_number == 0 && !self.read_line()? {
            return Ok(None);
        }

        loop {
            if !self.read_line()? {
                return Ok(None);
            }
            self.records_read += 1;
            self.split_line()?;

            if self.record.len() < T::MIN_FIELDS {
                return Err(Rf2Error::MalformedRecord {
                    line: self.line_number,
                    expected: T::MIN_FIELDS,
                    found: self.record.len(),
                });
            }

            let parsed = T::from_record(&self.record)?;
            if parsed.passes_filter() {
                return Ok(Some(parsed));
            }
            self.records_skipped += 1;
        }
    }
}

impl<R: BufRead, T: Rf2Record> Iterator for Rf2Parser<R, T> {
    type Item = Rf2Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
