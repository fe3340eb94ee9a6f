use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanckianError {
    #[error("correlated colour temperature {0} K is outside the validated domain [{1}, {2}] K")]
    CctOutOfDomain(f64, f64, f64),

    #[error("unknown computation method: {0}")]
    UnknownMethod(String),

    #[error("'{method}' method is only defined for the '{expected}' colour matching functions, got '{found}'")]
    IncompatibleObserver {
        method: &'static str,
        expected: &'static str,
        found: String,
    },
}
