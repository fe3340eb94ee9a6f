use crate::constants::{Kelvin, Xy};
use crate::planckian_errors::PlanckianError;

/// Validated temperature domain of the series, in kelvins.
const DOMAIN: (Kelvin, Kelvin) = (4000.0, 25_000.0);

/// `xy` chromaticity coordinates of the *CIE Illuminant D Series* at the given correlated
/// colour temperature.
///
/// `x` is a piecewise cubic in `1/CCT` split at 7000 K; `y` follows the daylight locus
/// quadratic `y = −3x² + 2.87x − 0.275`.
///
/// Arguments
/// ---------------
/// * `cct`: correlated colour temperature in kelvins, within `[4000, 25000]`
///
/// Return
/// ----------
/// * The `xy` chromaticity coordinates of that D series illuminant, or
///   [`PlanckianError::CctOutOfDomain`] when `cct` falls outside the series domain.
pub fn cct_to_xy(cct: Kelvin) -> Result<Xy, PlanckianError> {
    let x = if (4000.0..=7000.0).contains(&cct) {
        -4.607e9 / cct.powi(3) + 2.9678e6 / cct.powi(2) + 0.09911e3 / cct + 0.244063
    } else if cct > 7000.0 && cct <= 25_000.0 {
        -2.0064e9 / cct.powi(3) + 1.9018e6 / cct.powi(2) + 0.24748e3 / cct + 0.23704
    } else {
        return Err(PlanckianError::CctOutOfDomain(cct, DOMAIN.0, DOMAIN.1));
    };

    let y = -3.0 * x.powi(2) + 2.87 * x - 0.275;

    Ok(Xy::new(x, y))
}

#[cfg(test)]
mod illuminant_d_test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_cct_to_xy() {
        // D65 chromaticity, at the CIE recommended 6504 K.
        let xy = cct_to_xy(6504.38938305).unwrap();

        assert_relative_eq!(xy.x, 0.312708, epsilon = 1e-4);
        assert_relative_eq!(xy.y, 0.329113, epsilon = 1e-4);
    }

    #[test]
    fn test_high_temperature_piece() {
        let xy = cct_to_xy(9000.0).unwrap();

        // D90 sits on the blue side of the daylight locus.
        assert!(xy.x < 0.29);
        assert_relative_eq!(
            xy.y,
            -3.0 * xy.x.powi(2) + 2.87 * xy.x - 0.275,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_out_of_domain() {
        assert_eq!(
            cct_to_xy(1000.0),
            Err(PlanckianError::CctOutOfDomain(1000.0, 4000.0, 25_000.0))
        );
        assert_eq!(
            cct_to_xy(30_000.0),
            Err(PlanckianError::CctOutOfDomain(30_000.0, 4000.0, 25_000.0))
        );
    }
}
