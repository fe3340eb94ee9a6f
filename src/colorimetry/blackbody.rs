//! # Planckian radiator synthesis
//!
//! Spectral radiant exitance of a blackbody radiator via **Planck's law**, and its sampling
//! into a [`SpectralDistribution`] suitable for tristimulus integration.

use crate::colorimetry::spectrum::{SpectralDistribution, SpectralShape};
use crate::constants::{Kelvin, C1, C2, NM_TO_M};

/// Spectral radiant exitance of a planckian radiator in W·m⁻³.
///
/// Arguments
/// ---------------
/// * `wavelength`: wavelength in metres
/// * `temperature`: radiator temperature in kelvins
///
/// Return
/// ----------
/// * The spectral radiant exitance `c1·λ⁻⁵ / (exp(c2/(λT)) − 1)`.
pub fn planck_law(wavelength: f64, temperature: Kelvin) -> f64 {
    C1 / (wavelength.powi(5) * ((C2 / (wavelength * temperature)).exp() - 1.0))
}

/// Sample the planckian radiator at `temperature` over the given spectral shape.
///
/// Arguments
/// ---------------
/// * `temperature`: radiator temperature in kelvins
/// * `shape`: wavelength sampling in nanometres
///
/// Return
/// ----------
/// * A [`SpectralDistribution`] holding one exitance sample per wavelength of the shape.
pub fn blackbody_spd(temperature: Kelvin, shape: SpectralShape) -> SpectralDistribution {
    let values = shape
        .wavelengths()
        .map(|nm| planck_law(nm * NM_TO_M, temperature))
        .collect();

    SpectralDistribution { shape, values }
}

#[cfg(test)]
mod blackbody_test {
    use super::*;

    #[test]
    fn test_planck_law_magnitude() {
        // 560 nm at 5000 K sits around 4e13 W/m³.
        let exitance = planck_law(560.0 * NM_TO_M, 5000.0);
        assert!(exitance > 1e13 && exitance < 1e14);
    }

    #[test]
    fn test_planck_law_monotonic_in_temperature() {
        let wavelength = 560.0 * NM_TO_M;
        assert!(planck_law(wavelength, 3000.0) < planck_law(wavelength, 5000.0));
        assert!(planck_law(wavelength, 5000.0) < planck_law(wavelength, 6500.0));
        assert!(planck_law(wavelength, 6500.0) < planck_law(wavelength, 10000.0));
    }

    #[test]
    fn test_blackbody_spd_shape() {
        let shape = SpectralShape::new(380.0, 780.0, 5.0);
        let spd = blackbody_spd(6500.0, shape);

        assert_eq!(spd.values.len(), 81);
        assert!(spd.values.iter().all(|value| value.is_finite() && *value > 0.0));
    }
}
