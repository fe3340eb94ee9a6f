//! # Correlated colour temperature computations
//!
//! This module gathers the supported chromaticity ↔ correlated colour temperature
//! conversions and dispatches them by method name:
//!
//! - `uv` ↔ `(CCT, Δuv)` — [`ohno2013`] (iterative planckian table cascade) and
//!   [`robertson1968`] (isotemperature line interpolation),
//! - `xy` → `CCT` — [`mccamy1992`] and [`hernandez1999`] closed-form approximations,
//! - `CCT` → `xy` — [`kang2002`] and [`illuminant_d`] piecewise polynomial fits.
//!
//! ## Dispatch
//!
//! Method names are matched case-sensitively against the published designations
//! (`"Ohno 2013"`, `"Robertson 1968"`, `"McCamy 1992"`, `"Hernandez 1999"`, `"Kang 2002"`,
//! `"CIE Illuminant D Series"`). An unrecognized name fails with
//! [`PlanckianError::UnknownMethod`] before any numeric work.
//!
//! The Robertson method is only defined for the *CIE 1931 2°* standard observer: requesting
//! it with any other colour matching functions fails with
//! [`PlanckianError::IncompatibleObserver`]. The Ohno method accepts arbitrary observers.
//!
//! ## Example
//!
//! ```rust
//! use nalgebra::Vector2;
//! use planckian::temperature::{uv_to_cct, OhnoParams};
//!
//! let (cct, _duv) = uv_to_cct(Vector2::new(0.1978, 0.3122), "Ohno 2013", &OhnoParams::default())?;
//! assert!((cct - 6507.0).abs() < 50.0);
//! # Ok::<(), planckian::planckian_errors::PlanckianError>(())
//! ```

use std::str::FromStr;

use crate::colorimetry::cmfs::{Cmfs, CIE_1931_2_DEGREE_NAME, CIE_1931_2_DEGREE_OBSERVER};
use crate::constants::{
    Kelvin, Uv, Xy, CCT_CALCULATION_ITERATIONS, CCT_MAXIMAL, CCT_MINIMAL, CCT_SAMPLES,
};
use crate::planckian_errors::PlanckianError;

pub mod hernandez1999;
pub mod illuminant_d;
pub mod kang2002;
pub mod mccamy1992;
pub mod ohno2013;
pub mod robertson1968;

/// Tunable parameters of the Ohno (2013) cascade solver.
///
/// The defaults are the published ones: ten samples per table over `[1000, 100000]` K,
/// refined over six cascade iterations with the *CIE 1931 2°* standard observer. When
/// dispatching by method name, the whole struct is forwarded to the Ohno implementation
/// while the Robertson branch only inspects `cmfs` for its observer compatibility check.
///
/// Fields
/// -----------------
/// * `cmfs`: standard observer colour matching functions.
/// * `start`: temperature range start in kelvins.
/// * `end`: temperature range end in kelvins.
/// * `count`: temperature samples per planckian table, at least 2.
/// * `iterations`: cascade expansion passes; values below 1 are clamped to 1.
#[derive(Debug, Clone, Copy)]
pub struct OhnoParams<'a> {
    pub cmfs: &'a Cmfs,
    pub start: Kelvin,
    pub end: Kelvin,
    pub count: usize,
    pub iterations: usize,
}

impl Default for OhnoParams<'static> {
    fn default() -> Self {
        Self {
            cmfs: &CIE_1931_2_DEGREE_OBSERVER,
            start: CCT_MINIMAL,
            end: CCT_MAXIMAL,
            count: CCT_SAMPLES,
            iterations: CCT_CALCULATION_ITERATIONS,
        }
    }
}

/// Supported `uv` ↔ `(CCT, Δuv)` conversion methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UvCctMethod {
    Ohno2013,
    Robertson1968,
}

impl FromStr for UvCctMethod {
    type Err = PlanckianError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "Ohno 2013" => Ok(Self::Ohno2013),
            "Robertson 1968" => Ok(Self::Robertson1968),
            _ => Err(PlanckianError::UnknownMethod(name.into())),
        }
    }
}

/// Supported `xy` → `CCT` approximation methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XyCctMethod {
    McCamy1992,
    Hernandez1999,
}

impl FromStr for XyCctMethod {
    type Err = PlanckianError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "McCamy 1992" => Ok(Self::McCamy1992),
            "Hernandez 1999" => Ok(Self::Hernandez1999),
            _ => Err(PlanckianError::UnknownMethod(name.into())),
        }
    }
}

/// Supported `CCT` → `xy` approximation methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CctXyMethod {
    Kang2002,
    CieIlluminantDSeries,
}

impl FromStr for CctXyMethod {
    type Err = PlanckianError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "Kang 2002" => Ok(Self::Kang2002),
            "CIE Illuminant D Series" => Ok(Self::CieIlluminantDSeries),
            _ => Err(PlanckianError::UnknownMethod(name.into())),
        }
    }
}

/// Reject colour matching functions the Robertson table was not computed for.
fn ensure_cie_1931_observer(method: &'static str, cmfs: &Cmfs) -> Result<(), PlanckianError> {
    if cmfs.name != CIE_1931_2_DEGREE_NAME {
        return Err(PlanckianError::IncompatibleObserver {
            method,
            expected: CIE_1931_2_DEGREE_NAME,
            found: cmfs.name.to_string(),
        });
    }

    Ok(())
}

/// Correlated colour temperature and Δuv of `uv` chromaticity coordinates using the named
/// method.
///
/// Arguments
/// ---------------
/// * `uv`: *CIE UCS* `uv` chromaticity coordinates of the stimulus
/// * `method`: `"Ohno 2013"` or `"Robertson 1968"`
/// * `params`: forwarded to the Ohno solver; the Robertson branch only checks `params.cmfs`
///
/// Return
/// ----------
/// * `(CCT, Δuv)`, or a configuration error for an unknown method or an observer the
///   requested method is not defined for.
pub fn uv_to_cct(
    uv: Uv,
    method: &str,
    params: &OhnoParams,
) -> Result<(Kelvin, f64), PlanckianError> {
    match method.parse::<UvCctMethod>()? {
        UvCctMethod::Ohno2013 => Ok(ohno2013::uv_to_cct(uv, params)),
        UvCctMethod::Robertson1968 => {
            ensure_cie_1931_observer("Robertson 1968", params.cmfs)?;
            Ok(robertson1968::uv_to_cct(uv))
        }
    }
}

/// `uv` chromaticity coordinates of a `(CCT, Δuv)` pair using the named method.
///
/// Arguments
/// ---------------
/// * `cct`: correlated colour temperature in kelvins
/// * `duv`: signed `uv` distance from the planckian locus
/// * `method`: `"Ohno 2013"` or `"Robertson 1968"`
/// * `params`: the Ohno branch uses `params.cmfs`; the Robertson branch only checks it
///
/// Return
/// ----------
/// * The `uv` chromaticity coordinates, or a configuration error as for [`uv_to_cct`].
pub fn cct_to_uv(
    cct: Kelvin,
    duv: f64,
    method: &str,
    params: &OhnoParams,
) -> Result<Uv, PlanckianError> {
    match method.parse::<UvCctMethod>()? {
        UvCctMethod::Ohno2013 => Ok(ohno2013::cct_to_uv(cct, duv, params.cmfs)),
        UvCctMethod::Robertson1968 => {
            ensure_cie_1931_observer("Robertson 1968", params.cmfs)?;
            Ok(robertson1968::cct_to_uv(cct, duv))
        }
    }
}

/// Correlated colour temperature of `xy` chromaticity coordinates using the named method
/// (`"McCamy 1992"` or `"Hernandez 1999"`).
pub fn xy_to_cct(xy: Xy, method: &str) -> Result<Kelvin, PlanckianError> {
    match method.parse::<XyCctMethod>()? {
        XyCctMethod::McCamy1992 => Ok(mccamy1992::xy_to_cct(xy)),
        XyCctMethod::Hernandez1999 => Ok(hernandez1999::xy_to_cct(xy)),
    }
}

/// `xy` chromaticity coordinates of a correlated colour temperature using the named method
/// (`"Kang 2002"` or `"CIE Illuminant D Series"`).
pub fn cct_to_xy(cct: Kelvin, method: &str) -> Result<Xy, PlanckianError> {
    match method.parse::<CctXyMethod>()? {
        CctXyMethod::Kang2002 => kang2002::cct_to_xy(cct),
        CctXyMethod::CieIlluminantDSeries => illuminant_d::cct_to_xy(cct),
    }
}

#[cfg(test)]
mod dispatch_test {
    use super::*;
    use crate::colorimetry::cmfs::CIE_1964_10_DEGREE_OBSERVER;

    #[test]
    fn test_unknown_method() {
        let params = OhnoParams::default();
        let uv = Uv::new(0.1978, 0.3122);

        assert!(matches!(
            uv_to_cct(uv, "Bogus 1900", &params),
            Err(PlanckianError::UnknownMethod(_))
        ));
        assert!(matches!(
            cct_to_uv(6500.0, 0.0, "Bogus 1900", &params),
            Err(PlanckianError::UnknownMethod(_))
        ));
        assert!(matches!(
            xy_to_cct(Xy::new(0.31271, 0.32902), "Bogus 1900"),
            Err(PlanckianError::UnknownMethod(_))
        ));
        assert!(matches!(
            cct_to_xy(6500.0, "Bogus 1900"),
            Err(PlanckianError::UnknownMethod(_))
        ));
    }

    #[test]
    fn test_method_names_are_case_sensitive() {
        assert!("ohno 2013".parse::<UvCctMethod>().is_err());
        assert!("Ohno 2013".parse::<UvCctMethod>().is_ok());
    }

    #[test]
    fn test_robertson_rejects_non_1931_observer() {
        let params = OhnoParams {
            cmfs: &CIE_1964_10_DEGREE_OBSERVER,
            ..OhnoParams::default()
        };

        let error = uv_to_cct(Uv::new(0.1978, 0.3122), "Robertson 1968", &params);
        assert!(matches!(
            error,
            Err(PlanckianError::IncompatibleObserver { .. })
        ));

        let error = cct_to_uv(6500.0, 0.0, "Robertson 1968", &params);
        assert!(matches!(
            error,
            Err(PlanckianError::IncompatibleObserver { .. })
        ));
    }

    #[test]
    fn test_ohno_accepts_any_observer() {
        let params = OhnoParams {
            cmfs: &CIE_1964_10_DEGREE_OBSERVER,
            ..OhnoParams::default()
        };

        let (cct, _) = uv_to_cct(Uv::new(0.1978, 0.3122), "Ohno 2013", &params).unwrap();
        assert!(cct.is_finite());
    }
}
