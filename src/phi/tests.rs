// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;
use vec1::vec1;

use super::stellar_mass::tomczak_bracket;
use super::*;
use crate::constants::{LITTLE_H_07, LN_10};
use crate::dataset::Dataset;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_models_are_send_sync() {
    assert_send_sync::<DensityModel>();
    assert_send_sync::<LiWhite2009Phi>();
    assert_send_sync::<Baldry2011Phi>();
    assert_send_sync::<Yang2012Phi>();
    assert_send_sync::<Tomczak2014Phi>();
    assert_send_sync::<Blanton2003Phi>();
}

#[test]
fn test_log_mass_schechter_at_x0() {
    // At x = x0, t = 1, so the value is ln10 * phi0 * exp(-1).
    let model = DensityModel::log_mass(0.01, 10.5, -1.0);
    assert_abs_diff_eq!(
        model.evaluate_one(10.5),
        LN_10 * 0.01 * (-1.0_f64).exp(),
        epsilon = 1e-15
    );
}

#[test]
fn test_magnitude_schechter_at_x0() {
    // Same identity, but with the 2/5 normalisation of the magnitude form.
    let model = DensityModel::magnitude(1.49e-2, -20.44, -1.05);
    assert_abs_diff_eq!(
        model.evaluate_one(-20.44),
        0.4 * LN_10 * 1.49e-2 * (-1.0_f64).exp(),
        epsilon = 1e-15
    );
}

#[test]
fn test_schechter_monotonic_beyond_peak() {
    // The component peaks at t = 1 + alpha, i.e. at x0 for non-positive
    // slopes but at x0 + log10(1 + alpha) for positive ones; exponential
    // suppression takes over from there.
    for alpha in [-1.9, -1.0, 0.0, 1.5] {
        let model = DensityModel::log_mass(0.01, 10.5, alpha);
        let peak = 10.5 + (1.0 + alpha).max(1.0).log10();
        let xs: Vec<f64> = (0..50).map(|i| peak + 0.05 * i as f64).collect();
        let values = model.evaluate(&xs);
        for pair in values.windows(2) {
            assert!(
                pair[1] < pair[0],
                "phi must decrease past the peak (alpha = {alpha})"
            );
        }
    }
}

#[test]
fn test_schechter_rises_to_peak_for_positive_alpha() {
    // For a positive slope, the function still rises just past x0; only
    // beyond the peak does it fall.
    let model = DensityModel::log_mass(0.01, 10.5, 1.5);
    let peak = 10.5 + 2.5_f64.log10();
    assert!(model.evaluate_one(10.55) > model.evaluate_one(10.5));
    assert!(model.evaluate_one(peak + 0.05) < model.evaluate_one(peak));
}

#[test]
fn test_sum_is_sum_of_components() {
    let s1 = DensityModel::log_mass(0.01, 10.5, -1.0);
    let s2 = DensityModel::log_mass(0.002, 10.5, -1.6);
    let sum = DensityModel::Sum(vec1![s1.clone(), s2.clone()]);
    for x in [8.0, 9.5, 10.5, 11.5] {
        assert_abs_diff_eq!(
            sum.evaluate_one(x),
            s1.evaluate_one(x) + s2.evaluate_one(x),
            epsilon = 1e-15
        );
    }
}

#[test]
fn test_window_indicator() {
    let single = DensityModel::log_mass(0.01, 10.5, -1.0);
    let windowed = single.clone().window(9.0, 10.0);

    // Strictly inside the window: equal to the unrestricted component.
    assert_abs_diff_eq!(
        windowed.evaluate_one(9.5),
        single.evaluate_one(9.5),
        epsilon = 1e-15
    );
    // The window is half-open (lo, hi]: lo is out, hi is in.
    assert_abs_diff_eq!(windowed.evaluate_one(9.0), 0.0);
    assert_abs_diff_eq!(
        windowed.evaluate_one(10.0),
        single.evaluate_one(10.0),
        epsilon = 1e-15
    );
    // Outside: zero.
    assert_abs_diff_eq!(windowed.evaluate_one(11.0), 0.0);
    assert_abs_diff_eq!(windowed.evaluate_one(8.0), 0.0);
}

#[test]
fn test_li_white_is_piecewise() {
    let model = LiWhite2009Phi::new();

    // Strictly inside the low-mass regime, only the first component is
    // active.
    let low = DensityModel::log_mass(0.01465, 9.6124, -1.1309);
    let mstar = 10_f64.powf(9.0);
    assert_abs_diff_eq!(
        model.phi(&[mstar])[0],
        low.evaluate_one(9.0),
        epsilon = 1e-15
    );

    // And inside the high-mass regime, only the third.
    let high = DensityModel::log_mass(0.0044, 10.7104, -1.9918);
    let mstar = 10_f64.powf(11.2);
    assert_abs_diff_eq!(
        model.phi(&[mstar])[0],
        high.evaluate_one(11.2),
        epsilon = 1e-12
    );
}

#[test]
fn test_baldry_h_conversion() {
    // h = 0.7 model: the mass goes in as m/h^2, the density comes out
    // divided by h^3.
    let model = Baldry2011Phi::new();
    let h = LITTLE_H_07;
    let raw = DensityModel::Sum(vec1![
        DensityModel::log_mass(3.96e-3, 10.66, -0.35),
        DensityModel::log_mass(0.79e-3, 10.66, -1.47),
    ]);

    let mstar = 10_f64.powf(10.0);
    let expected = raw.evaluate_one((mstar / (h * h)).log10()) / h.powi(3);
    assert_abs_diff_eq!(model.phi(&[mstar])[0], expected, epsilon = 1e-15);
}

#[test]
fn test_baldry_data_table() {
    let model = Baldry2011Phi::new();
    let data = model.data();
    assert_eq!(data.mass.len(), 27);
    let h = LITTLE_H_07;
    // First row of table 1: bin center 10^6.25, phi 31.1e-3, 9 galaxies,
    // h-converted.
    assert_abs_diff_eq!(data.mass[0], 10_f64.powf(6.25) * h * h, epsilon = 1e-6);
    assert_abs_diff_eq!(data.phi[0], 31.1e-3 / h.powi(3), epsilon = 1e-10);
    assert_abs_diff_eq!(data.count[0], 9.0);
}

#[test]
fn test_yang_phi_at_characteristic_mass() {
    let model = Yang2012Phi::new();
    let mstar = 10_f64.powf(10.673);
    assert_abs_diff_eq!(
        model.phi(&[mstar])[0],
        LN_10 * 0.0083635 * (-1.0_f64).exp(),
        epsilon = 1e-12
    );
}

#[test]
fn test_yang_data_table() {
    let model = Yang2012Phi::new();
    let data = model.data();
    assert_eq!(data.log_mass.len(), 36);
    assert_abs_diff_eq!(data.log_mass[0], 8.2);
    // Values are published in units of 10^-2.
    assert_abs_diff_eq!(
        data.column(Yang2012Column::All)[0],
        3.7705e-2,
        epsilon = 1e-10
    );
    assert_abs_diff_eq!(
        data.column(Yang2012Column::SatBlueErr)[35],
        0.0,
        epsilon = 1e-10
    );
}

#[test]
fn test_tomczak_bracket_selection() {
    // Lower edges are inclusive.
    assert_eq!(tomczak_bracket(0.2).unwrap(), 0);
    assert_eq!(tomczak_bracket(0.6).unwrap(), 1);
    assert_eq!(tomczak_bracket(1.0).unwrap(), 3);
    assert_eq!(tomczak_bracket(2.5).unwrap(), 7);
    assert_eq!(tomczak_bracket(2.9).unwrap(), 7);

    assert!(matches!(
        tomczak_bracket(0.1),
        Err(PhiError::UnsupportedRedshift { .. })
    ));
    assert!(matches!(
        tomczak_bracket(3.0),
        Err(PhiError::UnsupportedRedshift { .. })
    ));
}

#[test]
fn test_tomczak_same_bracket_same_model() {
    // Redshifts in the same bin share coefficients; a different bin gives a
    // different model.
    let mstar = [10_f64.powf(10.8)];
    let a = Tomczak2014Phi::new(GalaxyType::All, 1.0).unwrap();
    let b = Tomczak2014Phi::new(GalaxyType::All, 1.2).unwrap();
    let c = Tomczak2014Phi::new(GalaxyType::All, 1.3).unwrap();
    assert_abs_diff_eq!(a.phi(&mstar)[0], b.phi(&mstar)[0], epsilon = 1e-15);
    assert!((a.phi(&mstar)[0] - c.phi(&mstar)[0]).abs() > 1e-12);
}

#[test]
fn test_tomczak_h_conversion() {
    let h = LITTLE_H_07;
    let model = Tomczak2014Phi::new(GalaxyType::Quiescent, 0.3).unwrap();
    // First quiescent row of table 2.
    let raw = DensityModel::Sum(vec1![
        DensityModel::log_mass(10_f64.powf(-2.76), 10.75, 0.47),
        DensityModel::log_mass(10_f64.powf(-5.21), 10.75, -1.97),
    ]);
    let mstar = 10_f64.powf(10.5);
    let expected = raw.evaluate_one((mstar / (h * h)).log10()) / h.powi(3);
    assert_abs_diff_eq!(model.phi(&[mstar])[0], expected, epsilon = 1e-15);
}

#[test]
fn test_galaxy_type_parsing() {
    assert_eq!(GalaxyType::parse("all").unwrap(), GalaxyType::All);
    assert_eq!(
        GalaxyType::parse("star-forming").unwrap(),
        GalaxyType::StarForming
    );
    assert_eq!(
        GalaxyType::parse("quiescent").unwrap(),
        GalaxyType::Quiescent
    );
    assert!(matches!(
        GalaxyType::parse("green-valley"),
        Err(PhiError::UnsupportedCategory { .. })
    ));
}

#[test]
fn test_blanton_bands() {
    let dataset = Dataset::packaged().unwrap();
    for band in [Band::U, Band::G, Band::R, Band::I, Band::Z] {
        let model = Blanton2003Phi::new(&dataset, band).unwrap();
        assert_eq!(model.band(), band);
        let data = model.data();
        assert!(!data.magnitude.is_empty());
        assert_eq!(data.magnitude.len(), data.phi.len());
        assert_eq!(data.magnitude.len(), data.sigma_phi.len());
    }
}

#[test]
fn test_blanton_r_band_fit() {
    let dataset = Dataset::packaged().unwrap();
    let model = Blanton2003Phi::new(&dataset, Band::R).unwrap();

    // At M = M*, the magnitude-form identity holds for the r-band
    // parameters.
    assert_abs_diff_eq!(
        model.phi(&[-20.44])[0],
        0.4 * LN_10 * 1.49e-2 * (-1.0_f64).exp(),
        epsilon = 1e-15
    );

    // The tabulated measurement tracks the fit.
    let data = model.data();
    let mid = data.magnitude.len() / 2;
    let fit = model.phi(&[data.magnitude[mid]])[0];
    assert!((data.phi[mid] / fit - 1.0).abs() < 0.25);
}

#[test]
fn test_band_parsing() {
    assert_eq!(Band::parse("r").unwrap(), Band::R);
    assert!(matches!(
        Band::parse("y"),
        Err(PhiError::UnsupportedCategory { .. })
    ));
}
