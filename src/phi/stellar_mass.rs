// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Stellar mass functions from the literature.
//!
//! Each model takes linear stellar masses in h⁻²M☉ and returns number
//! densities in h³ Mpc⁻³ dex⁻¹; the log10 is taken internally. Models
//! published in the h = 0.7 convention convert the input mass to that
//! convention, evaluate, and rescale the output density by h³.

use ndarray::{Array1, Array2, ArrayView1};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use vec1::vec1;

use super::{DensityModel, PhiError};
use crate::constants::LITTLE_H_07;

/// A star-formation-selected galaxy sub-population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum GalaxyType {
    #[strum(serialize = "all")]
    All,

    #[strum(serialize = "star-forming")]
    StarForming,

    #[strum(serialize = "quiescent")]
    Quiescent,
}

impl GalaxyType {
    /// Parse a type name as published ("all", "star-forming", "quiescent").
    pub fn parse(s: &str) -> Result<GalaxyType, PhiError> {
        s.parse().map_err(|_| PhiError::UnsupportedCategory {
            got: s.to_string(),
            available: GalaxyType::iter()
                .map(<&'static str>::from)
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

/// A binned stellar mass function measurement published alongside a
/// parametric fit.
#[derive(Debug, Clone, PartialEq)]
pub struct BinnedPhi {
    /// Linear bin-center stellar masses \[h⁻²M☉\].
    pub mass: Array1<f64>,

    /// Bin widths \[dex\].
    pub bin_width: Array1<f64>,

    /// Number densities \[h³ Mpc⁻³ dex⁻¹\].
    pub phi: Array1<f64>,

    /// Errors on the number densities.
    pub err: Array1<f64>,

    /// Galaxy counts per bin.
    pub count: Array1<f64>,
}

/// Stellar mass function from Li & White 2009, arXiv:0901.0706.
///
/// A triple Schechter fit, each component restricted to its own log-mass
/// regime (table 1); the three disjoint windows make the model piecewise
/// over the full domain. Natively h = 1.
#[derive(Debug, Clone)]
pub struct LiWhite2009Phi {
    model: DensityModel,
}

impl Default for LiWhite2009Phi {
    fn default() -> Self {
        Self::new()
    }
}

impl LiWhite2009Phi {
    pub const PUBLICATION: &'static str = "arXiv:0901.0706";

    pub fn new() -> LiWhite2009Phi {
        // Parameters from table 1; the break points are the window edges.
        let model = DensityModel::Sum(vec1![
            DensityModel::log_mass(0.01465, 9.6124, -1.1309).window(f64::NEG_INFINITY, 9.33),
            DensityModel::log_mass(0.01327, 10.3702, -0.9004).window(9.33, 10.67),
            DensityModel::log_mass(0.0044, 10.7104, -1.9918).window(10.67, f64::INFINITY),
        ]);
        LiWhite2009Phi { model }
    }

    /// Evaluate at linear stellar masses \[h⁻²M☉\].
    pub fn phi(&self, mstar: &[f64]) -> Vec<f64> {
        mstar
            .iter()
            .map(|&m| self.model.evaluate_one(m.log10()))
            .collect()
    }

    pub fn model(&self) -> &DensityModel {
        &self.model
    }
}

/// Stellar mass function from Baldry et al. 2011, arXiv:1111.5707.
///
/// A double Schechter fit with a shared characteristic mass (figure 13),
/// plus the binned GAMA measurement from table 1. Natively h = 0.7; both
/// the fit evaluation and the stored table are converted to h = 1.
#[derive(Debug, Clone)]
pub struct Baldry2011Phi {
    model: DensityModel,
    data: BinnedPhi,
}

// Table 1: bin center [log10 M], bin width [dex], phi, err, N.
const BALDRY_TABLE1: [(f64, f64, f64, f64, f64); 27] = [
    (6.25, 0.50, 31.1e-3, 21.6e-3, 9.0),
    (6.75, 0.50, 18.1e-3, 6.6e-3, 19.0),
    (7.10, 0.20, 17.9e-3, 5.7e-3, 18.0),
    (7.30, 0.20, 43.1e-3, 8.7e-3, 46.0),
    (7.50, 0.20, 31.6e-3, 9.0e-3, 51.0),
    (7.70, 0.20, 34.8e-3, 8.4e-3, 88.0),
    (7.90, 0.20, 27.3e-3, 4.2e-3, 140.0),
    (8.10, 0.20, 28.3e-3, 2.8e-3, 243.0),
    (8.30, 0.20, 23.5e-3, 3.0e-3, 282.0),
    (8.50, 0.20, 19.2e-3, 1.2e-3, 399.0),
    (8.70, 0.20, 18.0e-3, 2.6e-3, 494.0),
    (8.90, 0.20, 14.3e-3, 1.7e-3, 505.0),
    (9.10, 0.20, 10.2e-3, 0.6e-3, 449.0),
    (9.30, 0.20, 9.59e-3, 0.55e-3, 423.0),
    (9.50, 0.20, 7.42e-3, 0.41e-3, 340.0),
    (9.70, 0.20, 6.21e-3, 0.37e-3, 290.0),
    (9.90, 0.20, 5.71e-3, 0.35e-3, 268.0),
    (10.10, 0.20, 5.51e-3, 0.34e-3, 260.0),
    (10.30, 0.20, 5.48e-3, 0.34e-3, 259.0),
    (10.50, 0.20, 5.12e-3, 0.33e-3, 242.0),
    (10.70, 0.20, 3.55e-3, 0.27e-3, 168.0),
    (10.90, 0.20, 2.41e-3, 0.23e-3, 114.0),
    (11.10, 0.20, 1.27e-3, 0.16e-3, 60.0),
    (11.30, 0.20, 0.338e-3, 0.085e-3, 16.0),
    (11.50, 0.20, 0.042e-3, 0.030e-3, 2.0),
    (11.70, 0.20, 0.021e-3, 0.021e-3, 1.0),
    (11.90, 0.20, 0.042e-3, 0.030e-3, 2.0),];

impl Default for Baldry2011Phi {
    fn default() -> Self {
        Self::new()
    }
}

impl Baldry2011Phi {
    pub const PUBLICATION: &'static str = "arXiv:1111.5707";

    const LITTLE_H: f64 = LITTLE_H_07;

    pub fn new() -> Baldry2011Phi {
        // Parameters from figure 13; both components share x0.
        let model = DensityModel::Sum(vec1![
            DensityModel::log_mass(3.96e-3, 10.66, -0.35),
            DensityModel::log_mass(0.79e-3, 10.66, -1.47),
        ]);

        let h = Self::LITTLE_H;
        let data = BinnedPhi {
            // Linear masses converted from h = 0.7 to h = 1.
            mass: BALDRY_TABLE1
                .iter()
                .map(|r| 10_f64.powf(r.0) * h * h)
                .collect(),
            bin_width: BALDRY_TABLE1.iter().map(|r| r.1).collect(),
            phi: BALDRY_TABLE1.iter().map(|r| r.2 / h.powi(3)).collect(),
            err: BALDRY_TABLE1.iter().map(|r| r.3 / h.powi(3)).collect(),
            count: BALDRY_TABLE1.iter().map(|r| r.4).collect(),
        };

        Baldry2011Phi { model, data }
    }

    /// Evaluate the fit at linear stellar masses \[h⁻²M☉, h = 1\].
    pub fn phi(&self, mstar: &[f64]) -> Vec<f64> {
        let h = Self::LITTLE_H;
        mstar
            .iter()
            .map(|&m| {
                // Convert the mass to h = 0.7, evaluate, and convert the
                // density back to h = 1.
                let x = (m / (h * h)).log10();
                self.model.evaluate_one(x) / h.powi(3)
            })
            .collect()
    }

    /// The published binned measurement, in h = 1 units.
    pub fn data(&self) -> &BinnedPhi {
        &self.data
    }
}

/// Stellar mass function from Yang et al. 2012, arXiv:1110.1420.
///
/// A single Schechter fit (appendix B) plus the binned measurement from
/// table 6, which splits the population by colour and by central/satellite
/// status. Natively h = 1.
#[derive(Debug, Clone)]
pub struct Yang2012Phi {
    model: DensityModel,
    data: Yang2012Table,
}

/// A column of Yang et al. 2012 table 6 (phi or its error, per
/// sub-population).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[allow(missing_docs)]
pub enum Yang2012Column {
    #[strum(serialize = "all")]
    All,
    #[strum(serialize = "all_err")]
    AllErr,
    #[strum(serialize = "red")]
    Red,
    #[strum(serialize = "red_err")]
    RedErr,
    #[strum(serialize = "blue")]
    Blue,
    #[strum(serialize = "blue_err")]
    BlueErr,
    #[strum(serialize = "cen_all")]
    CenAll,
    #[strum(serialize = "cen_all_err")]
    CenAllErr,
    #[strum(serialize = "cen_red")]
    CenRed,
    #[strum(serialize = "cen_red_err")]
    CenRedErr,
    #[strum(serialize = "cen_blue")]
    CenBlue,
    #[strum(serialize = "cen_blue_err")]
    CenBlueErr,
    #[strum(serialize = "sat_all")]
    SatAll,
    #[strum(serialize = "sat_all_err")]
    SatAllErr,
    #[strum(serialize = "sat_red")]
    SatRed,
    #[strum(serialize = "sat_red_err")]
    SatRedErr,
    #[strum(serialize = "sat_blue")]
    SatBlue,
    #[strum(serialize = "sat_blue_err")]
    SatBlueErr,
}

/// The binned measurement from Yang et al. 2012 table 6.
#[derive(Debug, Clone, PartialEq)]
pub struct Yang2012Table {
    /// Bin-center log10 stellar masses \[h⁻²M☉\].
    pub log_mass: Array1<f64>,

    values: Array2<f64>,
}

impl Yang2012Table {
    /// A phi or error column \[h³ Mpc⁻³ dex⁻¹\].
    pub fn column(&self, col: Yang2012Column) -> ArrayView1<f64> {
        self.values.column(col as usize)
    }
}

// Table 6: bin center, then (phi, err) for all/red/blue, cen_*, sat_*.
// Values are published in units of 10⁻² h³ Mpc⁻³ dex⁻¹.
const YANG_TABLE6: [[f64; 19]; 36] = [
    [8.2, 3.7705, 1.5258, 0.9436, 0.7870, 2.8269, 1.2665, 3.0870, 1.6328, 0.9436, 0.7870, 2.1434, 1.3832, 0.6835, 0.9345, 0.0000, 0.0000, 0.6835, 0.9345],
    [8.3, 3.4598, 0.7363, 1.2416, 0.4523, 2.2182, 0.5867, 2.1801, 0.5884, 0.6520, 0.3011, 1.5281, 0.4684, 1.2796, 0.5566, 0.5896, 0.3436, 0.6900, 0.4418],
    [8.4, 4.1293, 0.5891, 1.1804, 0.2965, 2.9489, 0.4627, 2.7961, 0.4415, 0.5128, 0.2023, 2.2833, 0.3748, 1.3332, 0.4736, 0.6676, 0.2879, 0.6656, 0.2905],
    [8.5, 3.6421, 0.5547, 0.9305, 0.2886, 2.7116, 0.3771, 2.4913, 0.3387, 0.4905, 0.1597, 2.0008, 0.2727, 1.1508, 0.3368, 0.4400, 0.1997, 0.7108, 0.2176],
    [8.6, 3.3055, 0.4245, 0.8003, 0.2345, 2.5052, 0.2674, 2.2182, 0.2612, 0.3709, 0.1511, 1.8474, 0.2058, 1.0873, 0.2604, 0.4294, 0.1365, 0.6578, 0.1831],
    [8.7, 3.1321, 0.3100, 0.8215, 0.1561, 2.3106, 0.2224, 2.1598, 0.2294, 0.3756, 0.1010, 1.7842, 0.1819, 0.9723, 0.1686, 0.4459, 0.1020, 0.5264, 0.1109],
    [8.8, 3.0391, 0.2499, 0.8716, 0.1181, 2.1675, 0.1865, 1.8100, 0.1428, 0.3005, 0.0669, 1.5095, 0.1253, 1.2291, 0.1729, 0.5711, 0.0936, 0.6580, 0.1253],
    [8.9, 2.7949, 0.2433, 0.8404, 0.1442, 1.9545, 0.1538, 1.7266, 0.1265, 0.2997, 0.0582, 1.4269, 0.1027, 1.0683, 0.1745, 0.5407, 0.1141, 0.5276, 0.0929],
    [9.0, 3.1430, 0.1822, 0.9815, 0.1210, 2.1614, 0.1161, 1.9179, 0.0875, 0.3476, 0.0524, 1.5702, 0.0968, 1.2251, 0.1483, 0.6339, 0.0941, 0.5912, 0.0871],
    [9.1, 3.1047, 0.2357, 1.0438, 0.1518, 2.0609, 0.1199, 1.8162, 0.1129, 0.3595, 0.0608, 1.4568, 0.0765, 1.2884, 0.1579, 0.6843, 0.1131, 0.6042, 0.0723],
    [9.2, 2.9365, 0.1816, 1.0557, 0.1398, 1.8808, 0.0760, 1.6895, 0.1021, 0.3411, 0.0622, 1.3484, 0.0606, 1.2470, 0.1151, 0.7146, 0.0969, 0.5324, 0.0409],
    [9.3, 2.8092, 0.1786, 1.0230, 0.1329, 1.7861, 0.0766, 1.5992, 0.0730, 0.3624, 0.0458, 1.2368, 0.0476, 1.2100, 0.1358, 0.6607, 0.1043, 0.5493, 0.0518],
    [9.4, 2.8013, 0.0925, 1.0764, 0.0703, 1.7249, 0.0477, 1.6116, 0.0621, 0.4012, 0.0381, 1.2104, 0.0420, 1.1897, 0.0549, 0.6753, 0.0479, 0.5145, 0.0292],
    [9.5, 2.5093, 0.1140, 1.0816, 0.0917, 1.4277, 0.0418, 1.4360, 0.0522, 0.4290, 0.0420, 1.0070, 0.0354, 1.0733, 0.0804, 0.6526, 0.0637, 0.4208, 0.0290],
    [9.6, 2.3481, 0.1002, 1.0112, 0.0787, 1.3369, 0.0362, 1.3756, 0.0508, 0.4339, 0.0302, 0.9416, 0.0307, 0.9725, 0.0653, 0.5772, 0.0598, 0.3953, 0.0173],
    [9.7, 2.0970, 0.0640, 1.0132, 0.0488, 1.0837, 0.0286, 1.2562, 0.0420, 0.4760, 0.0288, 0.7802, 0.0231, 0.8408, 0.0368, 0.5373, 0.0304, 0.3035, 0.0153],
    [9.8, 1.9927, 0.0653, 1.0453, 0.0526, 0.9473, 0.0239, 1.2189, 0.0254, 0.5060, 0.0210, 0.7129, 0.0171, 0.7738, 0.0509, 0.5393, 0.0407, 0.2345, 0.0168],
    [9.9, 1.8551, 0.0555, 1.0426, 0.0446, 0.8125, 0.0210, 1.1423, 0.0240, 0.5284, 0.0176, 0.6139, 0.0143, 0.7128, 0.0398, 0.5142, 0.0337, 0.1986, 0.0119],
    [10.0, 1.7485, 0.0555, 1.0329, 0.0448, 0.7156, 0.0184, 1.1068, 0.0241, 0.5713, 0.0197, 0.5355, 0.0110, 0.6417, 0.0393, 0.4616, 0.0320, 0.1801, 0.0119],
    [10.1, 1.6715, 0.0430, 1.0297, 0.0343, 0.6418, 0.0156, 1.0844, 0.0161, 0.5863, 0.0100, 0.4981, 0.0121, 0.5871, 0.0326, 0.4434, 0.0293, 0.1436, 0.0066],
    [10.2, 1.6340, 0.0417, 1.0560, 0.0331, 0.5780, 0.0142, 1.0963, 0.0122, 0.6465, 0.0088, 0.4498, 0.0082, 0.5377, 0.0346, 0.4095, 0.0289, 0.1282, 0.0087],
    [10.3, 1.5273, 0.0419, 1.0368, 0.0355, 0.4905, 0.0113, 1.0326, 0.0104, 0.6491, 0.0078, 0.3835, 0.0069, 0.4947, 0.0356, 0.3877, 0.0318, 0.1071, 0.0064],
    [10.4, 1.3308, 0.0339, 0.9331, 0.0266, 0.3978, 0.0105, 0.9275, 0.0104, 0.6129, 0.0081, 0.3146, 0.0067, 0.4033, 0.0273, 0.3202, 0.0232, 0.0831, 0.0057],
    [10.5, 1.0870, 0.0292, 0.7817, 0.0237, 0.3052, 0.0084, 0.7882, 0.0095, 0.5383, 0.0066, 0.2499, 0.0051, 0.2988, 0.0225, 0.2435, 0.0193, 0.0553, 0.0045],
    [10.6, 0.8692, 0.0265, 0.6337, 0.0210, 0.2354, 0.0077, 0.6445, 0.0097, 0.4523, 0.0069, 0.1922, 0.0047, 0.2247, 0.0194, 0.1814, 0.0164, 0.0432, 0.0040],
    [10.7, 0.6629, 0.0208, 0.4876, 0.0164, 0.1753, 0.0061, 0.5122, 0.0089, 0.3643, 0.0064, 0.1479, 0.0039, 0.1507, 0.0138, 0.1232, 0.0116, 0.0274, 0.0029],
    [10.8, 0.4749, 0.0168, 0.3555, 0.0133, 0.1194, 0.0045, 0.3796, 0.0078, 0.2776, 0.0056, 0.1020, 0.0031, 0.0953, 0.0101, 0.0779, 0.0088, 0.0173, 0.0019],
    [10.9, 0.3130, 0.0133, 0.2368, 0.0104, 0.0762, 0.0038, 0.2598, 0.0083, 0.1923, 0.0063, 0.0675, 0.0029, 0.0532, 0.0057, 0.0445, 0.0047, 0.0087, 0.0013],
    [11.0, 0.1913, 0.0086, 0.1491, 0.0066, 0.0422, 0.0026, 0.1636, 0.0059, 0.1260, 0.0044, 0.0376, 0.0021, 0.0277, 0.0032, 0.0231, 0.0027, 0.0046, 0.0007],
    [11.1, 0.1055, 0.0056, 0.0840, 0.0041, 0.0215, 0.0019, 0.0943, 0.0044, 0.0745, 0.0031, 0.0198, 0.0015, 0.0112, 0.0015, 0.0095, 0.0012, 0.0016, 0.0004],
    [11.2, 0.0540, 0.0028, 0.0447, 0.0021, 0.0092, 0.0009, 0.0495, 0.0023, 0.0408, 0.0017, 0.0087, 0.0008, 0.0045, 0.0006, 0.0039, 0.0006, 0.0006, 0.0001],
    [11.3, 0.0245, 0.0015, 0.0207, 0.0013, 0.0039, 0.0004, 0.0231, 0.0014, 0.0194, 0.0011, 0.0037, 0.0004, 0.0015, 0.0002, 0.0013, 0.0002, 0.0001, 0.0001],
    [11.4, 0.0104, 0.0007, 0.0086, 0.0006, 0.0019, 0.0002, 0.0101, 0.0006, 0.0083, 0.0005, 0.0018, 0.0002, 0.0003, 0.0001, 0.0003, 0.0001, 0.0000, 0.0000],
    [11.5, 0.0042, 0.0003, 0.0034, 0.0003, 0.0008, 0.0001, 0.0041, 0.0003, 0.0033, 0.0003, 0.0008, 0.0001, 0.0001, 0.0000, 0.0001, 0.0000, 0.0000, 0.0000],
    [11.6, 0.0013, 0.0001, 0.0010, 0.0001, 0.0003, 0.0001, 0.0013, 0.0001, 0.0010, 0.0001, 0.0003, 0.0001, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000],
    [11.7, 0.0003, 0.0001, 0.0002, 0.0001, 0.0001, 0.0000, 0.0003, 0.0001, 0.0002, 0.0001, 0.0001, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000],];

impl Default for Yang2012Phi {
    fn default() -> Self {
        Self::new()
    }
}

impl Yang2012Phi {
    pub const PUBLICATION: &'static str = "arXiv:1110.1420";

    pub fn new() -> Yang2012Phi {
        // Parameters from appendix B.
        let model = DensityModel::log_mass(0.0083635, 10.673, -1.117);

        let log_mass = YANG_TABLE6.iter().map(|r| r[0]).collect();
        let mut values = Array2::zeros((YANG_TABLE6.len(), 18));
        for (i, row) in YANG_TABLE6.iter().enumerate() {
            for (j, &v) in row[1..].iter().enumerate() {
                // The paper quotes these in units of 10^-2.
                values[[i, j]] = v * 0.01;
            }
        }

        Yang2012Phi {
            model,
            data: Yang2012Table { log_mass, values },
        }
    }

    /// Evaluate the fit at linear stellar masses \[h⁻²M☉\].
    pub fn phi(&self, mstar: &[f64]) -> Vec<f64> {
        mstar
            .iter()
            .map(|&m| self.model.evaluate_one(m.log10()))
            .collect()
    }

    /// The published binned measurement (table 6).
    pub fn data(&self) -> &Yang2012Table {
        &self.data
    }
}

/// Stellar mass function from Tomczak et al. 2014, arXiv:1309.5972.
///
/// Double Schechter fits in eight redshift bins (table 2), for all,
/// star-forming and quiescent galaxies. The applicable coefficient row is
/// resolved from the requested redshift at construction. Natively h = 0.7.
#[derive(Debug, Clone)]
pub struct Tomczak2014Phi {
    model: DensityModel,
    galaxy_type: GalaxyType,
    redshift: f64,
}

/// The redshift bin edges of Tomczak et al. 2014 table 2.
pub const TOMCZAK_Z_EDGES: [f64; 9] = [0.2, 0.5, 0.75, 1.0, 1.25, 1.5, 2.0, 2.5, 3.0];

// Table 2 coefficients, one entry per redshift bin. phi values are
// published as log10.
const TOMCZAK_LOG_PHI1_ALL: [f64; 8] = [-2.54, -2.55, -2.56, -2.72, -2.78, -3.05, -3.80, -4.54];
const TOMCZAK_X1_ALL: [f64; 8] = [10.78, 10.70, 10.66, 10.54, 10.61, 10.74, 10.69, 10.74];
const TOMCZAK_ALPHA1_ALL: [f64; 8] = [-0.98, -0.39, -0.37, 0.30, -0.12, 0.04, 1.03, 1.62];
const TOMCZAK_LOG_PHI2_ALL: [f64; 8] = [-4.29, -3.15, -3.39, -3.17, -3.43, -3.38, -3.26, -3.69];
const TOMCZAK_ALPHA2_ALL: [f64; 8] = [-1.90, -1.53, -1.61, -1.45, -1.56, -1.49, -1.33, -1.57];

const TOMCZAK_LOG_PHI1_SF: [f64; 8] = [-2.67, -2.97, -2.81, -2.98, -3.04, -3.37, -4.30, -4.95];
const TOMCZAK_X1_SF: [f64; 8] = [10.59, 10.65, 10.56, 10.44, 10.69, 10.59, 10.58, 10.61];
const TOMCZAK_ALPHA1_SF: [f64; 8] = [-1.08, -0.97, -0.46, 0.53, -0.55, 0.75, 2.06, 2.36];
const TOMCZAK_LOG_PHI2_SF: [f64; 8] = [-4.46, -3.34, -3.36, -3.11, -3.59, -3.28, -3.28, -3.71];
const TOMCZAK_ALPHA2_SF: [f64; 8] = [-2.00, -1.58, -1.61, -1.44, -1.62, -1.47, -1.38, -1.67];

const TOMCZAK_LOG_PHI1_Q: [f64; 8] = [-2.76, -2.67, -2.81, -3.03, -3.36, -3.41, -3.59, -4.22];
const TOMCZAK_X1_Q: [f64; 8] = [10.75, 10.68, 10.63, 10.63, 10.49, 10.77, 10.69, 9.95];
const TOMCZAK_ALPHA1_Q: [f64; 8] = [0.47, 0.10, 0.04, 0.11, 0.85, -0.19, 0.37, 0.62];
const TOMCZAK_LOG_PHI2_Q: [f64; 8] = [-5.21, -4.29, -4.40, -4.80, -3.72, -3.91, -6.95, -4.51];
const TOMCZAK_ALPHA2_Q: [f64; 8] = [-1.97, -1.69, -1.51, -1.57, -0.54, -0.18, -3.07, -2.51];

impl Tomczak2014Phi {
    pub const PUBLICATION: &'static str = "arXiv:1309.5972";

    const LITTLE_H: f64 = LITTLE_H_07;

    /// Build the double Schechter model for the redshift bin containing
    /// `redshift`. Redshifts outside the published bins are rejected.
    pub fn new(galaxy_type: GalaxyType, redshift: f64) -> Result<Tomczak2014Phi, PhiError> {
        let i = tomczak_bracket(redshift)?;

        let (log_phi1, x1, alpha1, log_phi2, alpha2) = match galaxy_type {
            GalaxyType::All => (
                TOMCZAK_LOG_PHI1_ALL[i],
                TOMCZAK_X1_ALL[i],
                TOMCZAK_ALPHA1_ALL[i],
                TOMCZAK_LOG_PHI2_ALL[i],
                TOMCZAK_ALPHA2_ALL[i],
            ),
            GalaxyType::StarForming => (
                TOMCZAK_LOG_PHI1_SF[i],
                TOMCZAK_X1_SF[i],
                TOMCZAK_ALPHA1_SF[i],
                TOMCZAK_LOG_PHI2_SF[i],
                TOMCZAK_ALPHA2_SF[i],
            ),
            GalaxyType::Quiescent => (
                TOMCZAK_LOG_PHI1_Q[i],
                TOMCZAK_X1_Q[i],
                TOMCZAK_ALPHA1_Q[i],
                TOMCZAK_LOG_PHI2_Q[i],
                TOMCZAK_ALPHA2_Q[i],
            ),
        };

        // Both components of the fit share the characteristic mass.
        let model = DensityModel::Sum(vec1![
            DensityModel::log_mass(10_f64.powf(log_phi1), x1, alpha1),
            DensityModel::log_mass(10_f64.powf(log_phi2), x1, alpha2),
        ]);

        Ok(Tomczak2014Phi {
            model,
            galaxy_type,
            redshift,
        })
    }

    /// Evaluate the fit at linear stellar masses \[h⁻²M☉, h = 1\].
    pub fn phi(&self, mstar: &[f64]) -> Vec<f64> {
        let h = Self::LITTLE_H;
        mstar
            .iter()
            .map(|&m| {
                let x = (m / (h * h)).log10();
                self.model.evaluate_one(x) / h.powi(3)
            })
            .collect()
    }

    pub fn galaxy_type(&self) -> GalaxyType {
        self.galaxy_type
    }

    pub fn redshift(&self) -> f64 {
        self.redshift
    }
}

/// The index of the redshift bin containing `z` (lower-edge inclusive).
pub(crate) fn tomczak_bracket(z: f64) -> Result<usize, PhiError> {
    let (min, max) = (TOMCZAK_Z_EDGES[0], TOMCZAK_Z_EDGES[TOMCZAK_Z_EDGES.len() - 1]);
    if !(min..max).contains(&z) {
        return Err(PhiError::UnsupportedRedshift { got: z, min, max });
    }
    Ok(TOMCZAK_Z_EDGES.partition_point(|&edge| edge <= z) - 1)
}
