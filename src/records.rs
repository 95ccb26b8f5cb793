// RRSIZE: Charts of DNSSEC Response Sizes per Signing Algorithm
// Copyright (C) 2026 The RRSIZE Authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//! Parsing of measurement logs, containing the response size per domain and signing algorithm.
//!
//! A measurement log starts with three lines of metadata, followed by one record per line:
//!
//! ```text
//! <name> <size> <algorithm>
//! ```
//!
//! Lines that do not consist of exactly three whitespace-separated tokens, or whose third token is
//! not an integer, are skipped. The size token is only parsed once a record is actually used, and
//! a malformed size is an error rather than a skipped line.
use std::{
    collections::BTreeMap,
    fs,
    num::ParseIntError,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::algorithm::Algorithm;

/// Number of lines at the start of each log that are never parsed as records.
pub const HEADER_LINES: usize = 3;

/// Response sizes (in bytes) of a single algorithm, in the order they appear in the log.
pub type SizeSeries = Vec<i64>;

/// Number of valid records per algorithm identifier.
pub type FrequencyMap = BTreeMap<i64, usize>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid response size {token:?} on line {line}: {source}")]
    InvalidSize {
        line: usize,
        token: String,
        source: ParseIntError,
    },
}

/// A single line of a measurement log. The size is kept as the raw token until it is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementRecord<'a> {
    /// 1-based line number in the log.
    pub line: usize,
    pub name: &'a str,
    pub size: &'a str,
    pub algorithm: i64,
}

impl<'a> MeasurementRecord<'a> {
    /// Parse a line of the log (without the header). Returns `None` for lines that should be
    /// skipped.
    pub fn parse(line: usize, text: &'a str) -> Option<Self> {
        let mut tokens = text.split_whitespace();
        let (Some(name), Some(size), Some(algorithm), None) =
            (tokens.next(), tokens.next(), tokens.next(), tokens.next())
        else {
            return None;
        };
        let algorithm = algorithm.parse().ok()?;
        Some(Self {
            line,
            name,
            size,
            algorithm,
        })
    }

    /// Parse the size field. Fails if the token is not an integer.
    pub fn size(&self) -> Result<i64, Error> {
        self.size.parse().map_err(|source| Error::InvalidSize {
            line: self.line,
            token: self.size.to_string(),
            source,
        })
    }
}

/// The contents of a measurement log, read into memory.
#[derive(Debug, Clone, Default)]
pub struct MeasurementLog {
    text: String,
}

impl MeasurementLog {
    /// Read the log stored at `path`. The file is closed again once it has been read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        log::info!("Loading: {path:?}");
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { text })
    }

    /// Iterate over all valid records after the header.
    pub fn records(&self) -> impl Iterator<Item = MeasurementRecord<'_>> {
        self.text
            .lines()
            .enumerate()
            .skip(HEADER_LINES)
            .filter_map(|(idx, line)| {
                let record = MeasurementRecord::parse(idx + 1, line);
                if record.is_none() {
                    log::trace!("Skipping line {}: {line:?}", idx + 1);
                }
                record
            })
    }

    /// Sizes of all records of `algorithm`, in file order. With `filter = Some(f)`, only sizes
    /// strictly smaller than `f` are kept.
    pub fn size_series(
        &self,
        algorithm: Algorithm,
        filter: Option<i64>,
    ) -> Result<SizeSeries, Error> {
        let mut series = SizeSeries::new();
        for record in self.records().filter(|r| r.algorithm == algorithm.id()) {
            let size = record.size()?;
            if filter.map_or(true, |f| size < f) {
                series.push(size);
            }
        }
        log::debug!(
            "Extracted {} records for algorithm {}",
            series.len(),
            algorithm.label()
        );
        Ok(series)
    }

    /// Count the valid records per algorithm identifier over the whole log.
    pub fn algorithm_frequencies(&self) -> FrequencyMap {
        let mut frequencies = FrequencyMap::new();
        for record in self.records() {
            *frequencies.entry(record.algorithm).or_default() += 1;
        }
        log::debug!("Algorithm frequencies: {frequencies:?}");
        frequencies
    }
}

impl FromStr for MeasurementLog {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            text: s.to_string(),
        })
    }
}

impl From<String> for MeasurementLog {
    fn from(text: String) -> Self {
        Self { text }
    }
}
