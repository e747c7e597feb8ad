// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! wp measurements from Yang et al. 2012 (arXiv:1110.1420).
//!
//! Each `xi??.dat` file stacks two blocks: 14 rows of `rp wp sigma`, then
//! the 14x14 dimensionless correlation matrix of the wp bins. The covariance
//! is reconstructed as `cov[i,j] = wp[i] * wp[j] * corr[i,j]`. These
//! measurements are natively h = 1.

use itertools::iproduct;
use log::debug;
use ndarray::Array2;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use super::{check_table_shape, find_bin, WpError, WpMeasurement};
use crate::dataset::Dataset;

pub(crate) const SURVEY: &str = "Yang et al. 2012";

/// The number of rp bins in every Yang et al. 2012 measurement.
pub const NUM_RP_BINS: usize = 14;

/// Published stellar mass bins \[log10 h⁻²M☉\].
pub const MASS_BINS: [(f64, f64); 5] = [
    (9.0, 9.5),
    (9.5, 10.0),
    (10.0, 10.5),
    (10.5, 11.0),
    (11.0, 11.5),
];

/// One file group per sample, one file per mass bin.
pub(crate) const ARTIFACTS: [[&str; 5]; 3] = [
    [
        "yang_2012/xi01.dat",
        "yang_2012/xi02.dat",
        "yang_2012/xi03.dat",
        "yang_2012/xi04.dat",
        "yang_2012/xi05.dat",
    ],
    [
        "yang_2012/xi06.dat",
        "yang_2012/xi07.dat",
        "yang_2012/xi08.dat",
        "yang_2012/xi09.dat",
        "yang_2012/xi10.dat",
    ],
    [
        "yang_2012/xi11.dat",
        "yang_2012/xi12.dat",
        "yang_2012/xi13.dat",
        "yang_2012/xi14.dat",
        "yang_2012/xi15.dat",
    ],
];

/// The sample used in the wp calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum YangSample {
    #[strum(serialize = "Volume1")]
    Volume1,

    #[strum(serialize = "Volume2")]
    Volume2,

    #[strum(serialize = "Mass-limit")]
    MassLimit,
}

/// Look up the wp measurement for a stellar mass bin (given as
/// `(log10 M*_min, log10 M*_max)` in h⁻²M☉), returning the 14-bin
/// measurement and its 14x14 covariance matrix.
pub fn yang_2012_wp(
    dataset: &Dataset,
    sample: YangSample,
    mass_bin: (f64, f64),
) -> Result<(WpMeasurement, Array2<f64>), WpError> {
    let group = match sample {
        YangSample::Volume1 => &ARTIFACTS[0],
        YangSample::Volume2 => &ARTIFACTS[1],
        YangSample::MassLimit => &ARTIFACTS[2],
    };
    let i_bin = find_bin(&MASS_BINS, mass_bin, SURVEY)?;
    let file = group[i_bin];
    debug!("{SURVEY}: {sample} {mass_bin:?} resolved to {file}");

    let table = dataset.read_table_rows(file, 0..NUM_RP_BINS)?;
    check_table_shape(dataset, file, &table, NUM_RP_BINS, 3)?;
    let corr = dataset.read_table_rows(file, NUM_RP_BINS..2 * NUM_RP_BINS)?;
    check_table_shape(dataset, file, &corr, NUM_RP_BINS, NUM_RP_BINS)?;

    let rp = table.column(0).to_owned();
    let wp = table.column(1).to_owned();

    // The published matrix is the dimensionless correlation; rescale it by
    // the wp amplitudes to get the covariance. The wp product is formed
    // first: `wp[i] * wp[j]` is invariant under i <-> j, so the result is
    // exactly symmetric, not merely symmetric to rounding.
    let mut cov = Array2::zeros((NUM_RP_BINS, NUM_RP_BINS));
    for (i, j) in iproduct!(0..NUM_RP_BINS, 0..NUM_RP_BINS) {
        cov[[i, j]] = wp[i] * wp[j] * corr[[i, j]];
    }

    Ok((WpMeasurement { rp, wp }, cov))
}
