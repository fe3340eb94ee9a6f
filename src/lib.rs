pub mod colorimetry;
pub mod constants;
pub mod planckian_errors;
pub mod temperature;
