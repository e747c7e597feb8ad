// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

/// Errors associated with reading packaged measurement files.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Measurement file '{path}' does not exist in the dataset")]
    MissingArtifact { path: PathBuf },

    #[error("{path} line {line_num}: Could not parse '{text}' as a float")]
    ParseFloat {
        path: PathBuf,
        line_num: usize,
        text: String,
    },

    #[error("{path} line {line_num}: Expected {expected} columns, found {got}")]
    RaggedTable {
        path: PathBuf,
        line_num: usize,
        expected: usize,
        got: usize,
    },

    #[error("{path}: Expected {expected} values, found {got}")]
    BadShape {
        path: PathBuf,
        expected: usize,
        got: usize,
    },

    #[error("{path}: Requested rows {start}..{end}, but the table has only {num_rows} data rows")]
    RowRangeOutOfBounds {
        path: PathBuf,
        start: usize,
        end: usize,
        num_rows: usize,
    },

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}
