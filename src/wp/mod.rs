// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Projected two-point correlation function measurements from the literature.

Each survey module maps a typed selector (sample, mass/magnitude bin) to one
packaged artifact through a static table of the published bin edges, reads
it, and returns an [`WpMeasurement`] in h = 1 units, paired with whatever
uncertainty the paper provides (a covariance matrix, an error vector, or
nothing). Selector resolution happens before any file access; an unsupported
selector never touches the disk.
 */

pub mod campbell_2016;
mod error;
pub mod hearin_2014;
pub mod yang_2012;
pub mod zehavi_2011;
#[cfg(test)]
mod tests;

pub use campbell_2016::{campbell_2016_wp, FiberCollisionMethod};
pub use error::WpError;
pub use hearin_2014::hearin_2014_wp;
pub use yang_2012::{yang_2012_wp, YangSample};
pub use zehavi_2011::{zehavi_2011_wp, MagnitudeSelection};

use itertools::Itertools;
use ndarray::{Array1, Array2};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// A projected correlation function: wp(rp) at M projected separations, both
/// in h⁻¹ Mpc.
#[derive(Debug, Clone, PartialEq)]
pub struct WpMeasurement {
    pub rp: Array1<f64>,
    pub wp: Array1<f64>,
}

impl WpMeasurement {
    /// The number of rp bins.
    pub fn len(&self) -> usize {
        self.rp.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rp.is_empty()
    }

    /// The measurement as a 2-row grid (first row rp, second row wp).
    pub fn as_grid(&self) -> Array2<f64> {
        let mut grid = Array2::zeros((2, self.rp.len()));
        grid.row_mut(0).assign(&self.rp);
        grid.row_mut(1).assign(&self.wp);
        grid
    }
}

/// A colour-selected galaxy sub-sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum GalaxyColor {
    #[strum(serialize = "all")]
    All,

    #[strum(serialize = "red")]
    Red,

    #[strum(serialize = "blue")]
    Blue,
}

impl GalaxyColor {
    /// Parse a sub-sample name as published ("all", "red", "blue").
    pub fn parse(s: &str, survey: &'static str) -> Result<GalaxyColor, WpError> {
        s.parse().map_err(|_| WpError::UnsupportedCategory {
            survey,
            got: s.to_string(),
            available: GalaxyColor::iter().map(<&'static str>::from).join(", "),
        })
    }
}

/// The published mass/magnitude bins are exact float literals; a requested
/// bin either is one of them or is unsupported.
fn find_bin(
    bins: &[(f64, f64)],
    requested: (f64, f64),
    survey: &'static str,
) -> Result<usize, WpError> {
    bins.iter()
        .position(|&b| b == requested)
        .ok_or_else(|| WpError::UnsupportedBin {
            survey,
            requested: format!("({}, {})", requested.0, requested.1),
            available: bins
                .iter()
                .map(|(lo, hi)| format!("({lo}, {hi})"))
                .join(", "),
        })
}

fn check_table_shape(
    dataset: &crate::Dataset,
    rel: &str,
    table: &Array2<f64>,
    expected_rows: usize,
    expected_cols: usize,
) -> Result<(), WpError> {
    if table.nrows() != expected_rows || table.ncols() != expected_cols {
        return Err(WpError::BadTableShape {
            path: dataset.artifact_path(rel),
            expected_rows,
            expected_cols,
            got_rows: table.nrows(),
            got_cols: table.ncols(),
        });
    }
    Ok(())
}
