//! # Ohno (2013) planckian table CCT solver
//!
//! Iterative computation of the correlated colour temperature and Δuv of *CIE UCS* `uv`
//! chromaticity coordinates, after *Yoshi Ohno (2013)*.
//!
//! ## Algorithm outline
//!
//! 1. Sample the planckian locus over the current temperature range and measure each sample's
//!    `uv` distance to the stimulus ([`planckian_table`]).
//! 2. Locate the minimal-distance sample and narrow the range to its two neighbours
//!    (cascade expansion — each pass resamples the same number of points over a shrinking
//!    interval).
//! 3. After the last pass, interpolate the continuous solution from the three samples around
//!    the minimum: a triangular solution on the chord, refined by a parabolic fit through the
//!    three distances when the stimulus is close to the locus.
//!
//! The inverse conversion offsets the locus point at `CCT` along the perpendicular of a
//! finite-difference tangent.
//!
//! ## References
//!
//! * Yoshi Ohno, *Practical Use and Calculation of CCT and Duv*,
//!   LEUKOS 10:1, 47-55 (2014).

use itertools::Itertools;
use log::warn;

use crate::colorimetry::blackbody::blackbody_spd;
use crate::colorimetry::cmfs::Cmfs;
use crate::colorimetry::tristimulus::spectral_to_xyz;
use crate::colorimetry::ucs::{ucs_to_uv, xyz_to_ucs};
use crate::constants::{Kelvin, Uv};
use crate::temperature::OhnoParams;

/// One row of a planckian table: a sampled locus temperature, its `uv` coordinates and its
/// euclidean `uv` distance to the target stimulus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanckianTableRow {
    pub ti: Kelvin,
    pub ui: f64,
    pub vi: f64,
    pub di: f64,
}

/// `uv` chromaticity coordinates of the planckian radiator at `temperature`.
///
/// The tristimulus values are normalized by their maximum channel before conversion, so only
/// chromaticity is retained.
fn blackbody_uv(temperature: Kelvin, cmfs: &Cmfs) -> Uv {
    let spd = blackbody_spd(temperature, cmfs.shape);
    let mut xyz = spectral_to_xyz(&spd, cmfs);
    xyz /= xyz.max();

    ucs_to_uv(&xyz_to_ucs(&xyz))
}

/// Build a planckian table of `count` samples evenly spaced over `[start, end]` kelvins,
/// endpoints included.
///
/// Arguments
/// ---------------
/// * `uv`: target *CIE UCS* `uv` chromaticity coordinates
/// * `cmfs`: standard observer colour matching functions
/// * `start`: temperature range start in kelvins
/// * `end`: temperature range end in kelvins
/// * `count`: number of samples, at least 2
///
/// Return
/// ----------
/// * The table rows ordered by ascending temperature.
pub fn planckian_table(
    uv: Uv,
    cmfs: &Cmfs,
    start: Kelvin,
    end: Kelvin,
    count: usize,
) -> Vec<PlanckianTableRow> {
    (0..count)
        .map(|i| {
            let ti = start + (end - start) * i as f64 / (count - 1) as f64;
            let locus = blackbody_uv(ti, cmfs);
            let di = (uv.x - locus.x).hypot(uv.y - locus.y);

            PlanckianTableRow {
                ti,
                ui: locus.x,
                vi: locus.y,
                di,
            }
        })
        .collect()
}

/// Index of the row with the smallest distance to the target; ties resolve to the first
/// occurrence.
///
/// Panics if the table is empty.
pub fn minimal_distance_index(table: &[PlanckianTableRow]) -> usize {
    table
        .iter()
        .position_min_by(|a, b| a.di.total_cmp(&b.di))
        .expect("planckian table is empty")
}

/// Minimal-distance index nudged away from the table bounds, so a valid left and right
/// neighbour always exist.
///
/// Landing on a bound means the search range does not bracket the minimum; the index is
/// moved inward with a warning and the result should be treated as lower-confidence.
fn bracketed_minimal_index(table: &[PlanckianTableRow]) -> usize {
    let index = minimal_distance_index(table);

    if index == 0 {
        warn!("minimal distance index is on the lowest planckian table bound, unpredictable results may occur");
        index + 1
    } else if index == table.len() - 1 {
        warn!("minimal distance index is on the highest planckian table bound, unpredictable results may occur");
        index - 1
    } else {
        index
    }
}

/// Correlated colour temperature and Δuv of `uv` chromaticity coordinates.
///
/// Runs the cascade expansion for `params.iterations` passes (clamped to at least one), then
/// interpolates the continuous solution from the final table.
///
/// Arguments
/// ---------------
/// * `uv`: *CIE UCS* `uv` chromaticity coordinates of the stimulus
/// * `params`: observer, search range, sample count and iteration count
///
/// Return
/// ----------
/// * `(CCT, Δuv)` in kelvins and signed `uv` distance (positive above the locus).
pub fn uv_to_cct(uv: Uv, params: &OhnoParams) -> (Kelvin, f64) {
    let iterations = params.iterations.max(1);

    let mut table = planckian_table(uv, params.cmfs, params.start, params.end, params.count);
    let mut index = bracketed_minimal_index(&table);

    for _ in 1..iterations {
        let start = table[index - 1].ti;
        let end = table[index + 1].ti;

        table = planckian_table(uv, params.cmfs, start, end, params.count);
        index = bracketed_minimal_index(&table);
    }

    let previous = table[index - 1];
    let current = table[index];
    let next = table[index + 1];

    // Triangular solution: project the stimulus onto the chord between the two
    // neighbouring locus samples.
    let chord = (next.ui - previous.ui).hypot(next.vi - previous.vi);
    let x = (previous.di.powi(2) - next.di.powi(2) + chord.powi(2)) / (2.0 * chord);
    let mut cct = previous.ti + (next.ti - previous.ti) * (x / chord);

    let vtx = previous.vi + (next.vi - previous.vi) * (x / chord);
    let sign = if uv.y - vtx >= 0.0 { 1.0 } else { -1.0 };
    let mut duv = (previous.di.powi(2) - x.powi(2)).sqrt() * sign;

    // Parabolic solution: close to the locus the triangular estimate degrades, a
    // quadratic fit through the three distances is more accurate.
    if duv < 0.002 {
        let span = (next.ti - current.ti) * (previous.ti - next.ti) * (current.ti - previous.ti);
        let a = (previous.ti * (next.di - current.di)
            + current.ti * (previous.di - next.di)
            + next.ti * (current.di - previous.di))
            / span;
        let b = -(previous.ti.powi(2) * (next.di - current.di)
            + current.ti.powi(2) * (previous.di - next.di)
            + next.ti.powi(2) * (current.di - previous.di))
            / span;
        let c = -(previous.di * (next.ti - current.ti) * current.ti * next.ti
            + current.di * (previous.ti - next.ti) * previous.ti * next.ti
            + next.di * (current.ti - previous.ti) * previous.ti * current.ti)
            / span;

        cct = -b / (2.0 * a);
        duv = sign * (a * cct.powi(2) + b * cct + c);
    }

    (cct, duv)
}

/// `uv` chromaticity coordinates of a `(CCT, Δuv)` pair.
///
/// The locus point at `cct` is offset by `duv` along the perpendicular of the locus tangent,
/// estimated by finite difference over 0.01 K. A zero `duv` returns the locus point directly.
pub fn cct_to_uv(cct: Kelvin, duv: f64, cmfs: &Cmfs) -> Uv {
    const DELTA: Kelvin = 0.01;

    let locus = blackbody_uv(cct, cmfs);

    if duv == 0.0 {
        return locus;
    }

    let shifted = blackbody_uv(cct + DELTA, cmfs);
    let du = locus.x - shifted.x;
    let dv = locus.y - shifted.y;
    let norm = du.hypot(dv);

    Uv::new(locus.x - duv * (dv / norm), locus.y + duv * (du / norm))
}
