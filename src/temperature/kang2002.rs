use crate::constants::{Kelvin, Xy};
use crate::planckian_errors::PlanckianError;

/// Validated temperature domain of the fit, in kelvins.
const DOMAIN: (Kelvin, Kelvin) = (1667.0, 25_000.0);

/// `xy` chromaticity coordinates of a planckian radiator using
/// *Kang, Moon, Hong, Lee, Cho and Kim (2002)*.
///
/// Piecewise cubic fits: `x` in `1/CCT` over two temperature ranges, then `y` as a cubic in
/// `x` over three temperature ranges.
///
/// Arguments
/// ---------------
/// * `cct`: correlated colour temperature in kelvins, within `[1667, 25000]`
///
/// Return
/// ----------
/// * The `xy` chromaticity coordinates, or
///   [`PlanckianError::CctOutOfDomain`] when `cct` falls outside the fit domain.
pub fn cct_to_xy(cct: Kelvin) -> Result<Xy, PlanckianError> {
    let x = if (1667.0..=4000.0).contains(&cct) {
        -0.2661239e9 / cct.powi(3) - 0.2343589e6 / cct.powi(2) + 0.8776956e3 / cct + 0.179910
    } else if (4000.0..=25_000.0).contains(&cct) {
        -3.0258469e9 / cct.powi(3) + 2.1070379e6 / cct.powi(2) + 0.2226347e3 / cct + 0.24039
    } else {
        return Err(PlanckianError::CctOutOfDomain(cct, DOMAIN.0, DOMAIN.1));
    };

    let y = if (1667.0..=2222.0).contains(&cct) {
        -1.1063814 * x.powi(3) - 1.34811020 * x.powi(2) + 2.18555832 * x - 0.20219683
    } else if (2222.0..=4000.0).contains(&cct) {
        -0.9549476 * x.powi(3) - 1.37418593 * x.powi(2) + 2.09137015 * x - 0.16748867
    } else {
        3.0817580 * x.powi(3) - 5.8733867 * x.powi(2) + 3.75112997 * x - 0.37001483
    };

    Ok(Xy::new(x, y))
}

#[cfg(test)]
mod kang2002_test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_cct_to_xy() {
        let xy = cct_to_xy(6500.0).unwrap();

        assert_relative_eq!(xy.x, 0.313494, epsilon = 1e-4);
        assert_relative_eq!(xy.y, 0.323663, epsilon = 1e-4);
    }

    #[test]
    fn test_out_of_domain() {
        assert_eq!(
            cct_to_xy(500.0),
            Err(PlanckianError::CctOutOfDomain(500.0, 1667.0, 25_000.0))
        );
        assert_eq!(
            cct_to_xy(30_000.0),
            Err(PlanckianError::CctOutOfDomain(30_000.0, 1667.0, 25_000.0))
        );
    }

    #[test]
    fn test_piece_boundaries() {
        // Both piece selections include their shared boundaries; the fit must be
        // defined and continuous enough to stay in the chromaticity diagram there.
        for cct in [1667.0, 2222.0, 4000.0, 25_000.0] {
            let xy = cct_to_xy(cct).unwrap();
            assert!(xy.x > 0.2 && xy.x < 0.6);
            assert!(xy.y > 0.2 && xy.y < 0.45);
        }
    }
}
