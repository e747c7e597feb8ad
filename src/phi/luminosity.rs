// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Luminosity functions from the literature.
//!
//! Magnitude-form Schechter fits; magnitudes are absolute, M − 5 log10(h),
//! so no little-h conversion applies.

use ndarray::Array1;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use super::{DensityModel, PhiError};
use crate::dataset::Dataset;

/// An SDSS photometric band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum Band {
    #[strum(serialize = "u")]
    U,

    #[strum(serialize = "g")]
    G,

    #[strum(serialize = "r")]
    R,

    #[strum(serialize = "i")]
    I,

    #[strum(serialize = "z")]
    Z,
}

impl Band {
    /// Parse a band name ("u", "g", "r", "i", "z").
    pub fn parse(s: &str) -> Result<Band, PhiError> {
        s.parse().map_err(|_| PhiError::UnsupportedCategory {
            got: s.to_string(),
            available: Band::iter()
                .map(<&'static str>::from)
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

/// One tabulated measurement file per band, keyed by the band's SDSS sample
/// name.
pub(crate) const ARTIFACTS: [&str; 5] = [
    "blanton_2003/lumfunc-u.sample10ubright15.dat",
    "blanton_2003/lumfunc-g.sample10gbright15.dat",
    "blanton_2003/lumfunc-r.sample10bbright15.dat",
    "blanton_2003/lumfunc-i.sample10ibright15.dat",
    "blanton_2003/lumfunc-z.sample10zbright15.dat",
];

// Schechter parameters from table 2: (phi0, M0, alpha) per band.
const BLANTON_PARAMS: [(f64, f64, f64); 5] = [
    (3.05e-2, -17.93, -0.92),
    (2.18e-2, -19.39, -0.89),
    (1.49e-2, -20.44, -1.05),
    (1.47e-2, -20.82, -1.00),
    (1.35e-2, -21.18, -1.08),
];

/// The tabulated per-magnitude measurement published alongside a fit.
#[derive(Debug, Clone, PartialEq)]
pub struct LuminosityTable {
    /// Absolute magnitudes, M − 5 log10(h).
    pub magnitude: Array1<f64>,

    /// Number densities \[h³ Mpc⁻³ mag⁻¹\].
    pub phi: Array1<f64>,

    /// Errors on the number densities.
    pub sigma_phi: Array1<f64>,
}

/// Luminosity function from Blanton et al. 2003 (SDSS DR2), per band.
#[derive(Debug, Clone)]
pub struct Blanton2003Phi {
    band: Band,
    model: DensityModel,
    data: LuminosityTable,
}

impl Blanton2003Phi {
    /// Build the fit for `band` and read its tabulated measurement.
    pub fn new(dataset: &Dataset, band: Band) -> Result<Blanton2003Phi, PhiError> {
        let i = band as usize;
        let (phi0, m0, alpha) = BLANTON_PARAMS[i];
        let model = DensityModel::magnitude(phi0, m0, alpha);

        let table = dataset.read_table(ARTIFACTS[i])?;
        if table.ncols() != 3 || table.nrows() == 0 {
            return Err(PhiError::BadTableShape {
                path: dataset.artifact_path(ARTIFACTS[i]),
                got_rows: table.nrows(),
                got_cols: table.ncols(),
            });
        }
        let data = LuminosityTable {
            magnitude: table.column(0).to_owned(),
            phi: table.column(1).to_owned(),
            sigma_phi: table.column(2).to_owned(),
        };

        Ok(Blanton2003Phi { band, model, data })
    }

    /// Evaluate the fit at absolute magnitudes.
    pub fn phi(&self, mag: &[f64]) -> Vec<f64> {
        self.model.evaluate(mag)
    }

    pub fn band(&self) -> Band {
        self.band
    }

    pub fn model(&self) -> &DensityModel {
        &self.model
    }

    /// The tabulated per-magnitude measurement.
    pub fn data(&self) -> &LuminosityTable {
        &self.data
    }
}
