use thiserror::Error;

use crate::bodies::Body;

#[derive(Error, Debug, Clone)]
pub enum OrreryError {
    #[error("Invalid body for this operation: {0}")]
    InvalidBody(Body),

    #[error("The Earth is not allowed as the target body of this operation")]
    EarthNotAllowed,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("No ephemeris data covers the requested time (tt = {tt})")]
    OutOfRange { tt: f64 },

    #[error("Iterative solver did not converge: {0}")]
    NoConvergence(String),

    #[error("Vector is too small to define a direction")]
    BadVector,

    #[error("Unable to parse time string: {0}")]
    BadTime(String),

    #[error("Internal search failure: {0}")]
    InternalError(String),
}

impl PartialEq for OrreryError {
    fn eq(&self, other: &Self) -> bool {
        use OrreryError::*;
        match (self, other) {
            (InvalidBody(a), InvalidBody(b)) => a == b,
            (InvalidParameter(a), InvalidParameter(b)) => a == b,
            (NoConvergence(a), NoConvergence(b)) => a == b,
            (BadTime(a), BadTime(b)) => a == b,
            (InternalError(a), InternalError(b)) => a == b,

            // Range failures compare by variant: the reported tt is diagnostic only
            (OutOfRange { .. }, OutOfRange { .. }) => true,

            (EarthNotAllowed, EarthNotAllowed) => true,
            (BadVector, BadVector) => true,

            _ => false,
        }
    }
}
