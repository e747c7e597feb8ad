// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

use crate::dataset::DatasetError;

/// Errors associated with constructing a published density model.
#[derive(Error, Debug)]
pub enum PhiError {
    #[error("Category '{got}' is not one of the published options [{available}]")]
    UnsupportedCategory { got: String, available: String },

    #[error("{path}: Expected a 3-column measurement table, found {got_rows}x{got_cols}")]
    BadTableShape {
        path: PathBuf,
        got_rows: usize,
        got_cols: usize,
    },

    #[error("Redshift {got} is outside the published range [{min}, {max})")]
    UnsupportedRedshift { got: f64, min: f64, max: f64 },

    #[error("{0}")]
    Dataset(#[from] DatasetError),
}
