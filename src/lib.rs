// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Published galaxy clustering and abundance measurements from the astronomical
literature.

Two independent families live here: lookups of tabulated projected two-point
correlation functions ([`wp`]) and parametric Schechter-form density models
([`phi`]). Both read from a packaged, read-only [`Dataset`]. Everything is
returned in the little-h = 1 convention; sources published in h = 0.7 are
rescaled on the way out.
 */

pub mod constants;
pub mod dataset;
mod error;
pub mod phi;
pub mod wp;

// Re-exports.
pub use constants::*;
pub use dataset::{Dataset, DatasetError};
pub use error::ObservablesError;
pub use phi::{DensityModel, PhiError, Schechter, SchechterForm};
pub use wp::{WpError, WpMeasurement};
