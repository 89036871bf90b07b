//! Text serialization of datasets.
//!
//! ```text
//! <feature-name-1>
//! ...
//! <feature-name-K>
//!
//! <error-name>
//! <candidate-name>\t<value-1>\t...\t<value-K>\t<0|1>
//!
//! <error-name>
//! ...
//! ```
//!
//! One feature name per line up to the first blank line, then error blocks
//! separated by blank lines. The final block may end at end of input.

pub mod reader;
pub mod writer;

use crate::error::{IoContext, RankResult, RankingError};
use crate::suggest::Dataset;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

impl Dataset {
    pub fn from_reader<R: BufRead>(reader: R) -> RankResult<Self> {
        let (registry, errors) = reader::parse(reader)?;
        Self::from_errors(registry, errors)
    }

    /// Read a dataset file
    pub fn read(path: impl AsRef<Path>) -> RankResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).io_context("opening dataset", Some(path.to_path_buf()))?;
        let dataset = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            errors = dataset.len(),
            features = dataset.registry().size(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    pub fn write_to<W: Write>(&self, out: W) -> RankResult<()> {
        writer::write(out, self.registry(), self.errors())
    }

    /// Write this view to `path`, replacing any existing file
    pub fn write(&self, path: impl AsRef<Path>) -> RankResult<()> {
        let path = path.as_ref();
        let file = File::create(path).io_context("creating dataset file", Some(path.to_path_buf()))?;
        self.write_to(BufWriter::new(file))
    }

    pub fn to_text(&self) -> RankResult<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
            .io_context("rendering dataset", None)
    }
}

impl FromStr for Dataset {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}
