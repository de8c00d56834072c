// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Move databases, as produced by an engine's perft tool when asked to save its intermediate positions.
//!
//! A move database is a JSON array of records, each naming a position in FEN and the list of moves (in UCI
//! notation) that the engine under test believes are legal in that position:
//!
//! ```json
//! [
//!   { "fen": "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", "moves": ["a2a3", "a2a4", ...] }
//! ]
//! ```

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
    slice,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// A single position and the candidate move generator's legal moves for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub fen: String,
    pub moves: Vec<String>,
}

impl PositionRecord {
    pub fn new<S: Into<String>>(fen: S, moves: Vec<String>) -> PositionRecord {
        PositionRecord {
            fen: fen.into(),
            moves,
        }
    }
}

/// Errors that can arise when reading or writing a move database.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("failed to access move database {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed move database{}: {source}", describe_path(path))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },
}

fn describe_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" {}", path.display()),
        None => String::new(),
    }
}

/// An ordered, in-memory collection of position records. The whole database is loaded up front.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Database {
    records: Vec<PositionRecord>,
}

impl Database {
    pub fn new() -> Database {
        Database::default()
    }

    /// Loads the database stored at the given path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Database, DatabaseError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatabaseError::File {
            path: path.to_owned(),
            source,
        })?;

        let db = Database::from_reader(BufReader::new(file)).map_err(|err| match err {
            DatabaseError::Parse { source, .. } if source.is_io() => DatabaseError::File {
                path: path.to_owned(),
                source: source.into(),
            },
            DatabaseError::Parse { source, .. } => DatabaseError::Parse {
                path: Some(path.to_owned()),
                source,
            },
            other => other,
        })?;

        debug!(path = %path.display(), records = db.len(), "loaded move database");
        Ok(db)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Database, DatabaseError> {
        serde_json::from_reader(reader).map_err(|source| DatabaseError::Parse { path: None, source })
    }

    pub fn from_json_str(json: &str) -> Result<Database, DatabaseError> {
        serde_json::from_str(json).map_err(|source| DatabaseError::Parse { path: None, source })
    }

    /// Writes this database as pretty-printed JSON.
    pub fn write_json<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, self)
    }

    /// Saves this database to the given path, replacing anything already there.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DatabaseError> {
        let path = path.as_ref();
        let file_error = |source: io::Error| DatabaseError::File {
            path: path.to_owned(),
            source,
        };

        let file = File::create(path).map_err(file_error)?;
        let mut writer = BufWriter::new(file);
        self.write_json(&mut writer)
            .map_err(|err| file_error(err.into()))?;
        writer.flush().map_err(file_error)?;
        debug!(path = %path.display(), records = self.len(), "saved move database");
        Ok(())
    }

    pub fn push(&mut self, record: PositionRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, PositionRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[PositionRecord] {
        &self.records
    }
}

impl From<Vec<PositionRecord>> for Database {
    fn from(records: Vec<PositionRecord>) -> Database {
        Database { records }
    }
}

impl FromIterator<PositionRecord> for Database {
    fn from_iter<I: IntoIterator<Item = PositionRecord>>(iter: I) -> Database {
        Database {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Database {
    type Item = &'a PositionRecord;
    type IntoIter = slice::Iter<'a, PositionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Database {
    type Item = PositionRecord;
    type IntoIter = std::vec::IntoIter<PositionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
