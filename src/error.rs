// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all galaxy_observables-related errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObservablesError {
    #[error("{0}")]
    Dataset(#[from] crate::dataset::DatasetError),

    #[error("{0}")]
    Wp(#[from] crate::wp::WpError),

    #[error("{0}")]
    Phi(#[from] crate::phi::PhiError),
}
