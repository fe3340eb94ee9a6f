//! # Robertson (1968) isotemperature line CCT solver
//!
//! Table-driven computation of the correlated colour temperature and Δuv of *CIE UCS* `uv`
//! chromaticity coordinates, after *Robertson (1968)*.
//!
//! The method walks 31 precomputed isotemperature lines, locates the pair bracketing the
//! stimulus through a sign change of the projected distance, and linearly interpolates the
//! reciprocal temperature and the line geometry between them. It is only defined for the
//! *CIE 1931 2°* standard observer, for which the table was computed.
//!
//! ## References
//!
//! * Wyszecki & Stiles, *Color Science: Concepts and Methods, Quantitative Data and
//!   Formulae*, 2nd edition, pp. 224–229.

use crate::constants::{Kelvin, Mirek, Uv};

/// One isotemperature line: reciprocal temperature, locus chromaticity anchor and line slope.
#[derive(Debug, Clone, Copy, PartialEq)]
struct IsotemperatureLine {
    r: Mirek,
    u: f64,
    v: f64,
    t: f64,
}

const fn line(r: Mirek, u: f64, v: f64, t: f64) -> IsotemperatureLine {
    IsotemperatureLine { r, u, v, t }
}

/// Robertson's isotemperature lines, ordered by ascending reciprocal temperature.
///
/// The slope at 325 MK⁻¹ carries Bruce Lindbloom's correction of the originally published
/// value (0.24702 → 0.24792 for `u`).
static ISOTEMPERATURE_LINES: [IsotemperatureLine; 31] = [
    line(0.0, 0.18006, 0.26352, -0.24341),
    line(10.0, 0.18066, 0.26589, -0.25479),
    line(20.0, 0.18133, 0.26846, -0.26876),
    line(30.0, 0.18208, 0.27119, -0.28539),
    line(40.0, 0.18293, 0.27407, -0.30470),
    line(50.0, 0.18388, 0.27709, -0.32675),
    line(60.0, 0.18494, 0.28021, -0.35156),
    line(70.0, 0.18611, 0.28342, -0.37915),
    line(80.0, 0.18740, 0.28668, -0.40955),
    line(90.0, 0.18880, 0.28997, -0.44278),
    line(100.0, 0.19032, 0.29326, -0.47888),
    line(125.0, 0.19462, 0.30141, -0.58204),
    line(150.0, 0.19962, 0.30921, -0.70471),
    line(175.0, 0.20525, 0.31647, -0.84901),
    line(200.0, 0.21142, 0.32312, -1.0182),
    line(225.0, 0.21807, 0.32909, -1.2168),
    line(250.0, 0.22511, 0.33439, -1.4512),
    line(275.0, 0.23247, 0.33904, -1.7298),
    line(300.0, 0.24010, 0.34308, -2.0637),
    line(325.0, 0.24792, 0.34655, -2.4681),
    line(350.0, 0.25591, 0.34951, -2.9641),
    line(375.0, 0.26400, 0.35200, -3.5814),
    line(400.0, 0.27218, 0.35407, -4.3633),
    line(425.0, 0.28039, 0.35577, -5.3762),
    line(450.0, 0.28863, 0.35714, -6.7262),
    line(475.0, 0.29685, 0.35823, -8.5955),
    line(500.0, 0.30505, 0.35907, -11.324),
    line(525.0, 0.31320, 0.35968, -15.628),
    line(550.0, 0.32129, 0.36011, -23.325),
    line(575.0, 0.32931, 0.36038, -40.770),
    line(600.0, 0.33724, 0.36051, -116.45),
];

/// Correlated colour temperature and Δuv of `uv` chromaticity coordinates.
///
/// Walks the isotemperature lines until the signed perpendicular distance of the stimulus
/// changes sign (or the table ends), then interpolates reciprocal temperature and line
/// geometry between the bracketing pair.
///
/// Arguments
/// ---------------
/// * `uv`: *CIE UCS* `uv` chromaticity coordinates of the stimulus
///
/// Return
/// ----------
/// * `(CCT, Δuv)` in kelvins and signed `uv` distance (positive above the locus).
pub fn uv_to_cct(uv: Uv) -> (Kelvin, f64) {
    let (u, v) = (uv.x, uv.y);

    let mut last_dt = 0.0;
    let mut last_du = 0.0;
    let mut last_dv = 0.0;

    for i in 1..ISOTEMPERATURE_LINES.len() {
        let current = &ISOTEMPERATURE_LINES[i];
        let previous = &ISOTEMPERATURE_LINES[i - 1];

        // Unit tangent of the isotemperature line, from its slope.
        let norm = (1.0 + current.t * current.t).sqrt();
        let du = 1.0 / norm;
        let dv = current.t / norm;

        let uu = u - current.u;
        let vv = v - current.v;

        let mut dt = -uu * dv + vv * du;

        if dt <= 0.0 || i == ISOTEMPERATURE_LINES.len() - 1 {
            // The table end saturates: a positive residual there is treated as zero.
            if dt > 0.0 {
                dt = 0.0;
            }
            dt = -dt;

            let f = if i == 1 { 0.0 } else { dt / (last_dt + dt) };

            let cct = 1.0e6 / (previous.r * f + current.r * (1.0 - f));

            let uu = u - (previous.u * f + current.u * (1.0 - f));
            let vv = v - (previous.v * f + current.v * (1.0 - f));

            let mut du = du * (1.0 - f) + last_du * f;
            let mut dv = dv * (1.0 - f) + last_dv * f;

            let norm = du.hypot(dv);
            du /= norm;
            dv /= norm;

            let duv = uu * du + vv * dv;

            return (cct, -duv);
        }

        last_dt = dt;
        last_du = du;
        last_dv = dv;
    }

    unreachable!("isotemperature line scan terminates at the last table entry");
}

/// `uv` chromaticity coordinates of a `(CCT, Δuv)` pair.
///
/// Scans the table for the pair bracketing the reciprocal temperature, blends anchors and
/// tangents with the same fraction as the forward conversion, and offsets the blended anchor
/// by `−duv` along the blended unit tangent.
pub fn cct_to_uv(cct: Kelvin, duv: f64) -> Uv {
    let r = 1.0e6 / cct;

    for i in 0..ISOTEMPERATURE_LINES.len() - 1 {
        let current = &ISOTEMPERATURE_LINES[i];
        let next = &ISOTEMPERATURE_LINES[i + 1];

        if r < next.r || i == ISOTEMPERATURE_LINES.len() - 2 {
            let f = (next.r - r) / (next.r - current.r);

            let mut u = current.u * f + next.u * (1.0 - f);
            let mut v = current.v * f + next.v * (1.0 - f);

            let norm_current = (1.0 + current.t * current.t).sqrt();
            let uu_current = 1.0 / norm_current;
            let vv_current = current.t / norm_current;

            let norm_next = (1.0 + next.t * next.t).sqrt();
            let uu_next = 1.0 / norm_next;
            let vv_next = next.t / norm_next;

            let mut uu = uu_current * f + uu_next * (1.0 - f);
            let mut vv = vv_current * f + vv_next * (1.0 - f);

            let norm = uu.hypot(vv);
            uu /= norm;
            vv /= norm;

            u += uu * -duv;
            v += vv * -duv;

            return Uv::new(u, v);
        }
    }

    unreachable!("reciprocal temperature scan terminates at the last table pair");
}
