//! # Spectral to tristimulus integration
//!
//! Riemann-sum integration of a sampled spectral power distribution against a standard
//! observer, yielding *CIE XYZ* tristimulus values.

use nalgebra::Vector3;

use crate::colorimetry::cmfs::Cmfs;
use crate::colorimetry::spectrum::SpectralDistribution;
use crate::constants::Tristimulus;

/// Integrate a spectral power distribution into *CIE XYZ* tristimulus values.
///
/// The distribution must be sampled over the observer's spectral shape; samples are paired
/// positionally. Values are normalized by `100 / Σȳ` so that an equal-energy radiator yields
/// `Y = 100`.
///
/// Arguments
/// ---------------
/// * `spd`: spectral power distribution sampled over `cmfs.shape`
/// * `cmfs`: standard observer colour matching functions
///
/// Return
/// ----------
/// * The *CIE XYZ* tristimulus values of the distribution.
pub fn spectral_to_xyz(spd: &SpectralDistribution, cmfs: &Cmfs) -> Tristimulus {
    let mut xyz = Vector3::zeros();
    let mut y_bar_sum = 0.0;

    for (value, bar) in spd.values.iter().zip(cmfs.values) {
        xyz.x += value * bar[0];
        xyz.y += value * bar[1];
        xyz.z += value * bar[2];
        y_bar_sum += bar[1];
    }

    xyz * (100.0 / y_bar_sum)
}
