use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrbitError {
    #[error("Invalid orbit parameter `{name}`: {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error(
        "Kepler equation did not converge after {iterations} iterations \
         (mean anomaly = {mean_anomaly}, eccentricity = {eccentricity}, last step = {last_step:e})"
    )]
    NonConvergence {
        mean_anomaly: f64,
        eccentricity: f64,
        iterations: usize,
        last_step: f64,
    },

    #[error("Vis-viva speed undefined at distance {distance}: radicand {radicand} is not positive")]
    NumericDomainError { distance: f64, radicand: f64 },

    #[error("Invalid epoch: {0}")]
    InvalidEpoch(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ConfigParseError(#[from] ron::error::SpannedError),

    #[error("Failed to serialize config: {0}")]
    ConfigSerializeError(#[from] ron::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),
}

impl OrbitError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        OrbitError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

impl PartialEq for OrbitError {
    fn eq(&self, other: &Self) -> bool {
        use OrbitError::*;
        match (self, other) {
            (
                InvalidParameter {
                    name: a,
                    reason: ra,
                    ..
                },
                InvalidParameter {
                    name: b,
                    reason: rb,
                    ..
                },
            ) => a == b && ra == rb,
            (
                NonConvergence {
                    iterations: a,
                    eccentricity: ea,
                    ..
                },
                NonConvergence {
                    iterations: b,
                    eccentricity: eb,
                    ..
                },
            ) => a == b && ea == eb,
            (NumericDomainError { .. }, NumericDomainError { .. }) => true,
            (InvalidEpoch(a), InvalidEpoch(b)) => a == b,

            // Wrapped foreign errors are not comparable: same variant is enough
            (IoError(_), IoError(_)) => true,
            (ConfigParseError(_), ConfigParseError(_)) => true,
            (ConfigSerializeError(_), ConfigSerializeError(_)) => true,
            (CsvError(_), CsvError(_)) => true,

            _ => false,
        }
    }
}
