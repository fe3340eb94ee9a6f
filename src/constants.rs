//! # Constants and type definitions for Planckian
//!
//! This module centralizes the **physical constants**, **search-range defaults**, and **common
//! type definitions** used throughout the `planckian` library.
//!
//! ## Overview
//!
//! - Radiation constants for blackbody spectral synthesis
//! - Default search range and sampling for the iterative CCT solver
//! - Core type aliases used across the crate
//!
//! These definitions are used by all main modules, including the colorimetric primitives and
//! the colour temperature solvers.

use nalgebra::{Vector2, Vector3};

// -------------------------------------------------------------------------------------------------
// Physical constants
// -------------------------------------------------------------------------------------------------

/// First radiation constant `2π·h·c²` in W·m²
pub const C1: f64 = 3.741771e-16;

/// Second radiation constant `h·c/k` in m·K
pub const C2: f64 = 1.4388e-2;

/// Nanometres → metres
pub const NM_TO_M: f64 = 1e-9;

// -------------------------------------------------------------------------------------------------
// Iterative CCT solver defaults
// -------------------------------------------------------------------------------------------------

/// Lower bound of the default planckian search range in kelvins
pub const CCT_MINIMAL: f64 = 1000.0;

/// Upper bound of the default planckian search range in kelvins
pub const CCT_MAXIMAL: f64 = 100_000.0;

/// Default number of temperature samples per planckian table
pub const CCT_SAMPLES: usize = 10;

/// Default number of cascade expansion iterations
pub const CCT_CALCULATION_ITERATIONS: usize = 6;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Temperature in kelvins
pub type Kelvin = f64;

/// Reciprocal temperature in megakelvins⁻¹ (mired)
pub type Mirek = f64;

/// Wavelength in nanometres
pub type Nanometre = f64;

/// *CIE 1960 UCS* chromaticity coordinates `(u, v)`
pub type Uv = Vector2<f64>;

/// *CIE 1931* chromaticity coordinates `(x, y)`
pub type Xy = Vector2<f64>;

/// *CIE XYZ* tristimulus values
pub type Tristimulus = Vector3<f64>;

/// *CIE 1960 UCS* colourspace values `(U, V, W)`
pub type Ucs = Vector3<f64>;
