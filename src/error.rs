use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("line {line}: expected three comma-separated coordinates, found {found}")]
    CoordinateCount { line: usize, found: usize },

    #[error("line {line}: cannot parse {text:?} as a coordinate")]
    Coordinate {
        line: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("input contains no voxels")]
    EmptyDroplet,

    #[error("no solution for day {0}")]
    UnknownDay(usize),

    #[error("cannot read input file {}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
