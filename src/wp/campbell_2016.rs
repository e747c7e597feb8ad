// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! wp measurements from Campbell et al. 2016.
//!
//! SDSS stellar mass bins, measured with two different corrections for
//! fiber collisions. One file per (method, sample, mass bin); no
//! uncertainties were published. Natively h = 1.

use log::debug;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use super::{check_table_shape, find_bin, GalaxyColor, WpError, WpMeasurement};
use crate::dataset::Dataset;

pub(crate) const SURVEY: &str = "Campbell et al. 2016";

/// The number of rp bins in every Campbell et al. 2016 measurement.
pub const NUM_RP_BINS: usize = 14;

/// Published stellar mass bins \[log10 h⁻²M☉\].
pub const MASS_BINS: [(f64, f64); 4] = [(9.5, 10.0), (10.0, 10.5), (10.5, 11.0), (11.0, 11.5)];

/// One file per (method, sample, mass bin), ordered method-major, then
/// sample (all, blue, red), then ascending mass bin.
pub(crate) const ARTIFACTS: [&str; 24] = [
    "campbell_2016/wp_nearest_neighbor_all_9.5_10.0.dat",
    "campbell_2016/wp_nearest_neighbor_all_10.0_10.5.dat",
    "campbell_2016/wp_nearest_neighbor_all_10.5_11.0.dat",
    "campbell_2016/wp_nearest_neighbor_all_11.0_11.5.dat",
    "campbell_2016/wp_nearest_neighbor_blue_9.5_10.0.dat",
    "campbell_2016/wp_nearest_neighbor_blue_10.0_10.5.dat",
    "campbell_2016/wp_nearest_neighbor_blue_10.5_11.0.dat",
    "campbell_2016/wp_nearest_neighbor_blue_11.0_11.5.dat",
    "campbell_2016/wp_nearest_neighbor_red_9.5_10.0.dat",
    "campbell_2016/wp_nearest_neighbor_red_10.0_10.5.dat",
    "campbell_2016/wp_nearest_neighbor_red_10.5_11.0.dat",
    "campbell_2016/wp_nearest_neighbor_red_11.0_11.5.dat",
    "campbell_2016/wp_theta_weights_all_9.5_10.0.dat",
    "campbell_2016/wp_theta_weights_all_10.0_10.5.dat",
    "campbell_2016/wp_theta_weights_all_10.5_11.0.dat",
    "campbell_2016/wp_theta_weights_all_11.0_11.5.dat",
    "campbell_2016/wp_theta_weights_blue_9.5_10.0.dat",
    "campbell_2016/wp_theta_weights_blue_10.0_10.5.dat",
    "campbell_2016/wp_theta_weights_blue_10.5_11.0.dat",
    "campbell_2016/wp_theta_weights_blue_11.0_11.5.dat",
    "campbell_2016/wp_theta_weights_red_9.5_10.0.dat",
    "campbell_2016/wp_theta_weights_red_10.0_10.5.dat",
    "campbell_2016/wp_theta_weights_red_10.5_11.0.dat",
    "campbell_2016/wp_theta_weights_red_11.0_11.5.dat",
];

/// The method used to compensate for fiber collisions in the wp
/// calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum FiberCollisionMethod {
    #[strum(serialize = "nearest_neighbor")]
    NearestNeighbor,

    #[strum(serialize = "theta_weights")]
    ThetaWeights,
}

/// Look up the wp measurement for a stellar mass bin (given as
/// `(log10 M*_min, log10 M*_max)` in h⁻²M☉), returning the 14-bin
/// measurement.
pub fn campbell_2016_wp(
    dataset: &Dataset,
    method: FiberCollisionMethod,
    sample: GalaxyColor,
    mass_bin: (f64, f64),
) -> Result<WpMeasurement, WpError> {
    let i_bin = find_bin(&MASS_BINS, mass_bin, SURVEY)?;
    let i_method = match method {
        FiberCollisionMethod::NearestNeighbor => 0,
        FiberCollisionMethod::ThetaWeights => 1,
    };
    let i_sample = match sample {
        GalaxyColor::All => 0,
        GalaxyColor::Blue => 1,
        GalaxyColor::Red => 2,
    };
    let file = ARTIFACTS[i_method * 12 + i_sample * 4 + i_bin];
    debug!("{SURVEY}: {method} {sample} {mass_bin:?} resolved to {file}");

    let table = dataset.read_table(file)?;
    check_table_shape(dataset, file, &table, NUM_RP_BINS, 2)?;

    Ok(WpMeasurement {
        rp: table.column(0).to_owned(),
        wp: table.column(1).to_owned(),
    })
}
