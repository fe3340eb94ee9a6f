use nalgebra::{Vector2, Vector3};

use crate::constants::{Tristimulus, Ucs, Uv};

/// Convert *CIE XYZ* tristimulus values to *CIE 1960 UCS* colourspace `(U, V, W)` values.
pub fn xyz_to_ucs(xyz: &Tristimulus) -> Ucs {
    Vector3::new(
        2.0 / 3.0 * xyz.x,
        xyz.y,
        0.5 * (-xyz.x + 3.0 * xyz.y + xyz.z),
    )
}

/// Convert *CIE 1960 UCS* colourspace values to `uv` chromaticity coordinates.
pub fn ucs_to_uv(ucs: &Ucs) -> Uv {
    let sum = ucs.x + ucs.y + ucs.z;

    Vector2::new(ucs.x / sum, ucs.y / sum)
}

#[cfg(test)]
mod ucs_test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_uv_against_closed_form() {
        // u = 4X/(X + 15Y + 3Z) and v = 6Y/(X + 15Y + 3Z) must agree with the
        // two-step conversion through (U, V, W).
        let xyz = Vector3::new(95.04, 100.0, 108.88);
        let uv = ucs_to_uv(&xyz_to_ucs(&xyz));

        let denominator = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
        assert_relative_eq!(uv.x, 4.0 * xyz.x / denominator, epsilon = 1e-12);
        assert_relative_eq!(uv.y, 6.0 * xyz.y / denominator, epsilon = 1e-12);
    }

    #[test]
    fn test_ucs_values() {
        let ucs = xyz_to_ucs(&Vector3::new(30.0, 60.0, 90.0));

        assert_relative_eq!(ucs.x, 20.0, epsilon = 1e-12);
        assert_relative_eq!(ucs.y, 60.0, epsilon = 1e-12);
        assert_relative_eq!(ucs.z, 120.0, epsilon = 1e-12);
    }
}
