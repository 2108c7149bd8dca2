use anyhow::{bail, Context, Result};
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};
use tracing::debug;

/// A tab-delimited table held entirely in memory.
///
/// Column order and row order are significant and survive a load/save round
/// trip. Every cell is kept as the exact text read from the file: no type
/// inference, no trimming, no missing-value markers. An empty field is `""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column names, from the first line of the file.
    pub headers: Vec<String>,
    /// Each data line, as a Vec of Strings (one per field).
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Read `path` as a tab-delimited table whose first line names the columns.
    ///
    /// Quoting is disabled: a quote character is data like any other byte.
    /// Rows whose field count differs from the header are a hard error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let mut rdr = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quoting(false)
            .from_reader(BufReader::new(file));

        let mut headers: Option<Vec<String>> = None;
        let mut rows: Vec<Vec<String>> = Vec::new();

        for (idx, result) in rdr.records().enumerate() {
            let record = result.with_context(|| {
                format!("parse error in {} at record {}", path.display(), idx)
            })?;
            let fields: Vec<String> = record.iter().map(str::to_string).collect();
            match headers {
                None => headers = Some(fields),
                Some(_) => rows.push(fields),
            }
        }

        let headers = match headers {
            Some(h) => h,
            None => bail!("{} is empty, expected a header line", path.display()),
        };
        debug!(columns = headers.len(), rows = rows.len(), "loaded table");

        Ok(Table { headers, rows })
    }

    /// Write the table back out tab-delimited: header line first, then every
    /// row in order. Overwrites `path` unconditionally.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file =
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        let mut wtr = WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(QuoteStyle::Never)
            .from_writer(BufWriter::new(file));

        wtr.write_record(&self.headers)
            .with_context(|| format!("writing header to {}", path.display()))?;
        for (idx, row) in self.rows.iter().enumerate() {
            wtr.write_record(row)
                .with_context(|| format!("writing row {} to {}", idx, path.display()))?;
        }
        wtr.flush()
            .with_context(|| format!("flushing {}", path.display()))?;
        Ok(())
    }
}
