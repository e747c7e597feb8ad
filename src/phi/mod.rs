// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Parametric (Schechter-form) density models from the literature.

A published model is a small tree of Schechter components: a single
component, a sum of components, or a component restricted to a log-mass
window. The tree is built once from literal published coefficients and then
evaluated as a pure function of magnitude or log-mass; nothing is mutated
after construction, so models are freely shared across threads.
 */

mod error;
pub mod luminosity;
pub mod stellar_mass;
#[cfg(test)]
mod tests;

pub use error::PhiError;
pub use luminosity::{Band, Blanton2003Phi, LuminosityTable};
pub use stellar_mass::{
    Baldry2011Phi, BinnedPhi, GalaxyType, LiWhite2009Phi, Tomczak2014Phi, Yang2012Column,
    Yang2012Phi, Yang2012Table, TOMCZAK_Z_EDGES,
};

use vec1::Vec1;

use crate::constants::LN_10;

/// Which closed-form variant of the Schechter function a component uses.
/// The two are not interchangeable; which one applies is fixed by the
/// publication's unit convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchechterForm {
    /// The independent variable is a log10 stellar mass:
    /// `t = 10^(x - x0)`, normalisation `ln10 * phi0`.
    LogMass,

    /// The independent variable is an absolute magnitude:
    /// `t = 10^(0.4 * (x0 - x))`, normalisation `(2/5) * ln10 * phi0`.
    Magnitude,
}

/// A single Schechter component: `norm * t^(1+alpha) * exp(-t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schechter {
    /// Normalisation \[h³ Mpc⁻³ dex⁻¹\].
    pub phi0: f64,

    /// Characteristic log-mass or magnitude.
    pub x0: f64,

    /// Faint-end/low-mass slope.
    pub alpha: f64,

    pub form: SchechterForm,
}

impl Schechter {
    pub fn evaluate_one(&self, x: f64) -> f64 {
        let (norm, t) = match self.form {
            SchechterForm::LogMass => (LN_10 * self.phi0, 10_f64.powf(x - self.x0)),
            SchechterForm::Magnitude => (
                0.4 * LN_10 * self.phi0,
                10_f64.powf(0.4 * (self.x0 - x)),
            ),
        };
        norm * t.powf(1.0 + self.alpha) * (-t).exp()
    }
}

/// A Schechter-component tree. Composition is explicit (no callable
/// arithmetic): sums model two population regimes sharing a domain, windows
/// restrict a component to a log-space interval so that disjoint windows
/// yield a piecewise function.
#[derive(Debug, Clone, PartialEq)]
pub enum DensityModel {
    Single(Schechter),

    /// The sum of the component models evaluated at the same x.
    Sum(Vec1<DensityModel>),

    /// The inner model where `lo < x <= hi`, zero elsewhere.
    Window {
        model: Box<DensityModel>,
        lo: f64,
        hi: f64,
    },
}

impl DensityModel {
    /// A single log-mass-form component.
    pub fn log_mass(phi0: f64, x0: f64, alpha: f64) -> DensityModel {
        DensityModel::Single(Schechter {
            phi0,
            x0,
            alpha,
            form: SchechterForm::LogMass,
        })
    }

    /// A single magnitude-form component.
    pub fn magnitude(phi0: f64, x0: f64, alpha: f64) -> DensityModel {
        DensityModel::Single(Schechter {
            phi0,
            x0,
            alpha,
            form: SchechterForm::Magnitude,
        })
    }

    /// Restrict this model to the interval `(lo, hi]`.
    pub fn window(self, lo: f64, hi: f64) -> DensityModel {
        DensityModel::Window {
            model: Box::new(self),
            lo,
            hi,
        }
    }

    /// Evaluate at a single point.
    pub fn evaluate_one(&self, x: f64) -> f64 {
        match self {
            DensityModel::Single(s) => s.evaluate_one(x),
            DensityModel::Sum(models) => models.iter().map(|m| m.evaluate_one(x)).sum(),
            DensityModel::Window { model, lo, hi } => {
                if x > *lo && x <= *hi {
                    model.evaluate_one(x)
                } else {
                    0.0
                }
            }
        }
    }

    /// Evaluate element-wise over a slice; no cross-element dependency.
    pub fn evaluate(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate_one(x)).collect()
    }
}
