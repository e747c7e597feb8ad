// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision; published coefficients are carried
at the precision the papers quote them.
 */

pub use std::f64::consts::LN_10;

/// The little-h value of measurements published in the WMAP-era h = 0.7
/// convention. Everything this crate returns is converted to h = 1.
pub const LITTLE_H_07: f64 = 0.7;

/// Tolerance used when matching a requested stellar-mass threshold against
/// published thresholds \[dex\]. Only surveys whose thresholds are quoted at
/// limited precision use this; the others require exact bin edges.
pub const MASS_THRESHOLD_ATOL: f64 = 0.01;
