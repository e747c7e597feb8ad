// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

use crate::dataset::DatasetError;

/// Errors associated with looking up a published wp measurement.
#[derive(Error, Debug)]
pub enum WpError {
    #[error("Sample '{got}' is not one of the options published by {survey} [{available}]")]
    UnsupportedCategory {
        survey: &'static str,
        got: String,
        available: String,
    },

    #[error("{survey}: Requested bin {requested} is not among the published bins [{available}]")]
    UnsupportedBin {
        survey: &'static str,
        requested: String,
        available: String,
    },

    #[error("{survey} does not publish the {sample} sample as a {selection} selection")]
    UnsupportedCombination {
        survey: &'static str,
        sample: String,
        selection: &'static str,
    },

    #[error(
        "{path}: Expected a {expected_rows}x{expected_cols} measurement table, found {got_rows}x{got_cols}"
    )]
    BadTableShape {
        path: PathBuf,
        expected_rows: usize,
        expected_cols: usize,
        got_rows: usize,
        got_cols: usize,
    },

    #[error("{0}")]
    Dataset(#[from] DatasetError),
}
