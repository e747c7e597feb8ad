// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;
use itertools::iproduct;
use ndarray::Array2;
use strum::IntoEnumIterator;

use super::*;
use crate::dataset::Dataset;

// Bitwise equality, not approximate: the covariance construction and the
// published matrices are exactly symmetric, so any one-ULP drift is a bug.
fn assert_symmetric(cov: &Array2<f64>) {
    let n = cov.nrows();
    assert_eq!(cov.ncols(), n);
    for (i, j) in iproduct!(0..n, 0..n) {
        assert_eq!(cov[[i, j]], cov[[j, i]], "cov[{i},{j}] != cov[{j},{i}]");
    }
}

#[test]
fn test_yang_all_selectors() {
    let dataset = Dataset::packaged().unwrap();
    for sample in YangSample::iter() {
        for &bin in &yang_2012::MASS_BINS {
            let (measurement, cov) = yang_2012_wp(&dataset, sample, bin).unwrap();
            assert_eq!(measurement.len(), yang_2012::NUM_RP_BINS);
            assert_eq!(measurement.as_grid().dim(), (2, yang_2012::NUM_RP_BINS));
            assert_eq!(cov.dim(), (14, 14));
            assert_symmetric(&cov);
        }
    }
}

#[test]
fn test_yang_covariance_reconstruction() {
    let dataset = Dataset::packaged().unwrap();
    let (measurement, cov) =
        yang_2012_wp(&dataset, YangSample::Volume1, (9.0, 9.5)).unwrap();
    assert_eq!(measurement.as_grid().dim(), (2, 14));

    // cov[i,j] must equal wp[i] * wp[j] * corr[i,j], in that grouping; read
    // the correlation block back independently.
    let corr = dataset
        .read_table_rows(yang_2012::ARTIFACTS[0][0], 14..28)
        .unwrap();
    assert_eq!(
        cov[[0, 0]],
        measurement.wp[0] * measurement.wp[0] * corr[[0, 0]]
    );
    for (i, j) in iproduct!(0..14, 0..14) {
        assert_eq!(
            cov[[i, j]],
            measurement.wp[i] * measurement.wp[j] * corr[[i, j]]
        );
    }
    assert_symmetric(&cov);

    // Reconstruction is a pure function; doing it again gives identical
    // results.
    let (_, cov2) = yang_2012_wp(&dataset, YangSample::Volume1, (9.0, 9.5)).unwrap();
    assert_eq!(cov, cov2);
}

#[test]
fn test_unsupported_bin_reads_no_files() {
    // A dataset rooted at an empty directory: any file access would fail
    // with MissingArtifact, so getting UnsupportedBin proves resolution
    // happens first.
    let dir = tempfile::tempdir().unwrap();
    let dataset = Dataset::unvalidated(dir.path());

    let result = yang_2012_wp(&dataset, YangSample::Volume1, (8.0, 8.5));
    assert!(matches!(result, Err(WpError::UnsupportedBin { .. })));

    let result = campbell_2016_wp(
        &dataset,
        FiberCollisionMethod::ThetaWeights,
        GalaxyColor::All,
        (8.0, 8.5),
    );
    assert!(matches!(result, Err(WpError::UnsupportedBin { .. })));

    let result = zehavi_2011_wp(
        &dataset,
        GalaxyColor::All,
        MagnitudeSelection::Bin(-25.0, -24.0),
    );
    assert!(matches!(result, Err(WpError::UnsupportedBin { .. })));
}

#[test]
fn test_zehavi_binned_samples() {
    let dataset = Dataset::packaged().unwrap();
    for sample in GalaxyColor::iter() {
        for &(min, max) in &zehavi_2011::MAG_BINS {
            let (measurement, cov) =
                zehavi_2011_wp(&dataset, sample, MagnitudeSelection::Bin(min, max)).unwrap();
            assert_eq!(measurement.len(), zehavi_2011::NUM_RP_BINS);
            assert_eq!(cov.dim(), (13, 13));
            assert_symmetric(&cov);
        }
    }
}

#[test]
fn test_zehavi_threshold_samples() {
    let dataset = Dataset::packaged().unwrap();
    for &thresh in &zehavi_2011::MAG_THRESHOLDS {
        let (measurement, cov) =
            zehavi_2011_wp(&dataset, GalaxyColor::All, MagnitudeSelection::Threshold(thresh))
                .unwrap();
        assert_eq!(measurement.len(), 13);
        assert_eq!(cov.dim(), (13, 13));
        assert_symmetric(&cov);
    }
}

#[test]
fn test_zehavi_unsupported_combination() {
    let dataset = Dataset::packaged().unwrap();
    for sample in [GalaxyColor::Red, GalaxyColor::Blue] {
        let result = zehavi_2011_wp(&dataset, sample, MagnitudeSelection::Threshold(-20.0));
        assert!(matches!(result, Err(WpError::UnsupportedCombination { .. })));
    }
}

#[test]
fn test_zehavi_bin_column_selection() {
    // Different bins must come from different columns of the shared table.
    let dataset = Dataset::packaged().unwrap();
    let (bright, _) =
        zehavi_2011_wp(&dataset, GalaxyColor::All, MagnitudeSelection::Bin(-23.0, -22.0)).unwrap();
    let (faint, _) =
        zehavi_2011_wp(&dataset, GalaxyColor::All, MagnitudeSelection::Bin(-18.0, -17.0)).unwrap();
    assert_eq!(bright.rp, faint.rp);
    assert_ne!(bright.wp, faint.wp);
}

#[test]
fn test_hearin_all_selectors() {
    let dataset = Dataset::packaged().unwrap();
    for sample in GalaxyColor::iter() {
        for thresh in hearin_2014::mass_thresholds() {
            let (measurement, sigma) = hearin_2014_wp(&dataset, sample, thresh).unwrap();
            assert_eq!(measurement.len(), hearin_2014::NUM_RP_BINS);
            assert_eq!(sigma.len(), 15);
        }
    }
}

#[test]
fn test_hearin_threshold_tolerance() {
    let dataset = Dataset::packaged().unwrap();
    // The published threshold is ~9.4902; anything within 0.01 dex matches.
    let (a, _) = hearin_2014_wp(&dataset, GalaxyColor::All, 9.49).unwrap();
    let (b, _) = hearin_2014_wp(&dataset, GalaxyColor::All, 9.4902).unwrap();
    assert_eq!(a, b);

    let result = hearin_2014_wp(&dataset, GalaxyColor::All, 9.6);
    assert!(matches!(result, Err(WpError::UnsupportedBin { .. })));
}

#[test]
fn test_hearin_h_conversion() {
    // The table is natively h = 0.7; rp, wp and sigma each carry one factor
    // of h, independently.
    let dataset = Dataset::packaged().unwrap();
    let raw = dataset.read_table("hearin_2014/table_1.dat").unwrap();
    let thresh = hearin_2014::mass_thresholds()[0];
    let (measurement, sigma) = hearin_2014_wp(&dataset, GalaxyColor::All, thresh).unwrap();
    for i in 0..15 {
        assert_abs_diff_eq!(measurement.rp[i], raw[[i, 0]] * 0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(measurement.wp[i], raw[[i, 1]] * 0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(sigma[i], raw[[i, 2]] * 0.7, epsilon = 1e-12);
    }
}

#[test]
fn test_campbell_all_selectors() {
    let dataset = Dataset::packaged().unwrap();
    for (method, sample) in iproduct!(FiberCollisionMethod::iter(), GalaxyColor::iter()) {
        for &bin in &campbell_2016::MASS_BINS {
            let measurement = campbell_2016_wp(&dataset, method, sample, bin).unwrap();
            assert_eq!(measurement.len(), campbell_2016::NUM_RP_BINS);
        }
    }
}

#[test]
fn test_campbell_methods_differ() {
    let dataset = Dataset::packaged().unwrap();
    let nn = campbell_2016_wp(
        &dataset,
        FiberCollisionMethod::NearestNeighbor,
        GalaxyColor::All,
        (10.0, 10.5),
    )
    .unwrap();
    let tw = campbell_2016_wp(
        &dataset,
        FiberCollisionMethod::ThetaWeights,
        GalaxyColor::All,
        (10.0, 10.5),
    )
    .unwrap();
    assert_ne!(nn.wp, tw.wp);
}

#[test]
fn test_galaxy_color_parsing() {
    assert_eq!(GalaxyColor::parse("red", "test").unwrap(), GalaxyColor::Red);
    assert_eq!(GalaxyColor::parse("all", "test").unwrap(), GalaxyColor::All);
    let result = GalaxyColor::parse("green", "test");
    assert!(matches!(result, Err(WpError::UnsupportedCategory { .. })));
}

#[test]
fn test_selector_string_forms() {
    // The string forms are the published sample names.
    assert_eq!("Volume1".parse::<YangSample>().unwrap(), YangSample::Volume1);
    assert_eq!(
        "Mass-limit".parse::<YangSample>().unwrap(),
        YangSample::MassLimit
    );
    assert_eq!(
        "theta_weights".parse::<FiberCollisionMethod>().unwrap(),
        FiberCollisionMethod::ThetaWeights
    );
    assert!("volume1".parse::<YangSample>().is_err());
}
