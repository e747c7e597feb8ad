// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! wp measurements from Zehavi et al. 2011 (arXiv:1005.2413).
//!
//! SDSS DR7 luminosity samples. The wp values for all bins of a sample share
//! one table file (rp in column 0, then wp/err column pairs per bin); each
//! bin has its own covariance file, published as a flat dump of 13x13
//! numbers. Covariance matrices from
//! <http://astroweb.cwru.edu/izehavi/dr7_covar/>. Natively h = 1.

use itertools::Itertools;
use log::debug;
use ndarray::Array2;

use super::{check_table_shape, find_bin, GalaxyColor, WpError, WpMeasurement};
use crate::dataset::Dataset;

pub(crate) const SURVEY: &str = "Zehavi et al. 2011";

/// The number of rp bins in every Zehavi et al. 2011 measurement.
pub const NUM_RP_BINS: usize = 13;

/// Published r-band absolute magnitude bins.
pub const MAG_BINS: [(f64, f64); 6] = [
    (-23.0, -22.0),
    (-22.0, -21.0),
    (-21.0, -20.0),
    (-20.0, -19.0),
    (-19.0, -18.0),
    (-18.0, -17.0),
];

/// Published r-band absolute magnitude thresholds (all galaxies brighter
/// than the threshold).
pub const MAG_THRESHOLDS: [f64; 9] = [
    -22.0, -21.5, -21.0, -20.5, -20.0, -19.5, -19.0, -18.5, -18.0,
];

struct FileGroup {
    wp_table: &'static str,
    cov_files: &'static [&'static str],
}

// Table 7: all galaxies, magnitude bins.
const TABLE7: FileGroup = FileGroup {
    wp_table: "zehavi_2011/table7/table7.dat",
    cov_files: &[
        "zehavi_2011/table7/wp_covar_23.0_22.0.dat",
        "zehavi_2011/table7/wp_covar_22.0_21.0.dat",
        "zehavi_2011/table7/wp_covar_21.0_20.0.dat",
        "zehavi_2011/table7/wp_covar_20.0_19.0.dat",
        "zehavi_2011/table7/wp_covar_19.0_18.0.dat",
        "zehavi_2011/table7/wp_covar_18.0_17.0.dat",
    ],
};

// Table 8: all galaxies, magnitude thresholds.
const TABLE8: FileGroup = FileGroup {
    wp_table: "zehavi_2011/table8/table8.dat",
    cov_files: &[
        "zehavi_2011/table8/wp_covar_22.0.dat",
        "zehavi_2011/table8/wp_covar_21.5.dat",
        "zehavi_2011/table8/wp_covar_21.0.dat",
        "zehavi_2011/table8/wp_covar_20.5.dat",
        "zehavi_2011/table8/wp_covar_20.0.dat",
        "zehavi_2011/table8/wp_covar_19.5.dat",
        "zehavi_2011/table8/wp_covar_19.0.dat",
        "zehavi_2011/table8/wp_covar_18.5.dat",
        "zehavi_2011/table8/wp_covar_18.0.dat",
    ],
};

// Table 9: blue galaxies, magnitude bins.
const TABLE9: FileGroup = FileGroup {
    wp_table: "zehavi_2011/table9/table9.dat",
    cov_files: &[
        "zehavi_2011/table9/wp_covar_23.0_22.0_mblue.dat",
        "zehavi_2011/table9/wp_covar_22.0_21.0_mblue.dat",
        "zehavi_2011/table9/wp_covar_21.0_20.0_mblue.dat",
        "zehavi_2011/table9/wp_covar_20.0_19.0_mblue.dat",
        "zehavi_2011/table9/wp_covar_19.0_18.0_mblue.dat",
        "zehavi_2011/table9/wp_covar_18.0_17.0_mblue.dat",
    ],
};

// Table 10: red galaxies, magnitude bins.
const TABLE10: FileGroup = FileGroup {
    wp_table: "zehavi_2011/table10/table10.dat",
    cov_files: &[
        "zehavi_2011/table10/wp_covar_23.0_22.0_mred.dat",
        "zehavi_2011/table10/wp_covar_22.0_21.0_mred.dat",
        "zehavi_2011/table10/wp_covar_21.0_20.0_mred.dat",
        "zehavi_2011/table10/wp_covar_20.0_19.0_mred.dat",
        "zehavi_2011/table10/wp_covar_19.0_18.0_mred.dat",
        "zehavi_2011/table10/wp_covar_18.0_17.0_mred.dat",
    ],
};

pub(crate) fn artifacts() -> impl Iterator<Item = &'static str> {
    [&TABLE7, &TABLE8, &TABLE9, &TABLE10]
        .into_iter()
        .flat_map(|g| std::iter::once(g.wp_table).chain(g.cov_files.iter().copied()))
}

/// A binned or threshold magnitude selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MagnitudeSelection {
    /// All galaxies with `min < Mr <= max`, given as `(min, max)`.
    Bin(f64, f64),

    /// All galaxies brighter than the given magnitude.
    Threshold(f64),
}

/// Look up the wp measurement for a magnitude bin or threshold, returning
/// the 13-bin measurement and its 13x13 covariance matrix.
///
/// Colour-selected samples are only published in magnitude bins; asking for
/// a red or blue threshold sample is an unsupported combination.
pub fn zehavi_2011_wp(
    dataset: &Dataset,
    sample: GalaxyColor,
    selection: MagnitudeSelection,
) -> Result<(WpMeasurement, Array2<f64>), WpError> {
    let group = match (sample, selection) {
        (GalaxyColor::All, MagnitudeSelection::Bin(..)) => &TABLE7,
        (GalaxyColor::All, MagnitudeSelection::Threshold(..)) => &TABLE8,
        (GalaxyColor::Blue, MagnitudeSelection::Bin(..)) => &TABLE9,
        (GalaxyColor::Red, MagnitudeSelection::Bin(..)) => &TABLE10,
        (sample, MagnitudeSelection::Threshold(..)) => {
            return Err(WpError::UnsupportedCombination {
                survey: SURVEY,
                sample: sample.to_string(),
                selection: "threshold",
            })
        }
    };

    let i_bin = match selection {
        MagnitudeSelection::Bin(min, max) => find_bin(&MAG_BINS, (min, max), SURVEY)?,
        MagnitudeSelection::Threshold(max) => MAG_THRESHOLDS
            .iter()
            .position(|&t| t == max)
            .ok_or_else(|| WpError::UnsupportedBin {
                survey: SURVEY,
                requested: format!("Mr < {max}"),
                available: MAG_THRESHOLDS.iter().map(|t| t.to_string()).join(", "),
            })?,
    };
    let wp_col = 1 + 2 * i_bin;
    debug!(
        "{SURVEY}: {sample} {selection:?} resolved to {} column {wp_col}",
        group.wp_table
    );

    let table = dataset.read_table(group.wp_table)?;
    check_table_shape(
        dataset,
        group.wp_table,
        &table,
        NUM_RP_BINS,
        1 + 2 * group.cov_files.len(),
    )?;
    let rp = table.column(0).to_owned();
    let wp = table.column(wp_col).to_owned();

    let cov = dataset.read_flat_matrix(group.cov_files[i_bin], NUM_RP_BINS)?;

    Ok((WpMeasurement { rp, wp }, cov))
}
