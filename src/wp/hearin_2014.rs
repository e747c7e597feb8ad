// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! wp measurements from Hearin et al. 2014 (arXiv:1310.6747).
//!
//! Threshold samples above three stellar mass cuts. The tables are published
//! in the h = 0.7 convention; rp, wp and the errors each pick up one factor
//! of h on the way to h = 1 units. The published thresholds are quoted at
//! limited precision, so a requested threshold is matched to the nearest
//! available one within 0.01 dex rather than by exact equality.

use itertools::Itertools;
use log::debug;
use ndarray::Array1;

use super::{check_table_shape, GalaxyColor, WpError, WpMeasurement};
use crate::constants::{LITTLE_H_07, MASS_THRESHOLD_ATOL};
use crate::dataset::Dataset;

pub(crate) const SURVEY: &str = "Hearin et al. 2014";

/// The number of rp bins in every Hearin et al. 2014 measurement.
pub const NUM_RP_BINS: usize = 15;

/// Published stellar mass thresholds \[log10 h⁻²M☉, h = 0.7\]. Converted to
/// h = 1 by [mass_thresholds].
const MASS_THRESHOLDS_H07: [f64; 3] = [9.8, 10.2, 10.6];

pub(crate) const ARTIFACTS: [&str; 3] = [
    "hearin_2014/table_1.dat",
    "hearin_2014/table_2.dat",
    "hearin_2014/table_3.dat",
];

/// The published stellar mass thresholds in h = 1 units
/// \[log10 h⁻²M☉\] (approximately 9.49, 9.89, 10.29).
pub fn mass_thresholds() -> [f64; 3] {
    MASS_THRESHOLDS_H07.map(|t| t + 2.0 * LITTLE_H_07.log10())
}

/// Look up the wp measurement for a threshold sample, given as
/// `log10 M*_thresh` in h⁻²M☉ (h = 1), returning the 15-bin measurement and
/// the published per-bin errors. No covariances were published.
pub fn hearin_2014_wp(
    dataset: &Dataset,
    sample: GalaxyColor,
    mstar_thresh: f64,
) -> Result<(WpMeasurement, Array1<f64>), WpError> {
    let file = match sample {
        GalaxyColor::All => ARTIFACTS[0],
        GalaxyColor::Blue => ARTIFACTS[1],
        GalaxyColor::Red => ARTIFACTS[2],
    };

    let thresholds = mass_thresholds();
    let i_thresh = thresholds
        .iter()
        .position(|&t| (t - mstar_thresh).abs() <= MASS_THRESHOLD_ATOL)
        .ok_or_else(|| WpError::UnsupportedBin {
            survey: SURVEY,
            requested: format!("log10 M* > {mstar_thresh}"),
            available: thresholds.iter().map(|t| format!("{t:.2}")).join(", "),
        })?;
    let wp_col = 1 + 2 * i_thresh;
    debug!("{SURVEY}: {sample} threshold {mstar_thresh} resolved to {file} column {wp_col}");

    let table = dataset.read_table(file)?;
    check_table_shape(dataset, file, &table, NUM_RP_BINS, 7)?;

    // Convert to h = 1: each of rp, wp and sigma carries one factor of h.
    let rp = table.column(0).mapv(|v| v * LITTLE_H_07);
    let wp = table.column(wp_col).mapv(|v| v * LITTLE_H_07);
    let sigma = table.column(wp_col + 1).mapv(|v| v * LITTLE_H_07);

    Ok((WpMeasurement { rp, wp }, sigma))
}
