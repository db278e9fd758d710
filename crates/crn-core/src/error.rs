//! Error taxonomy for the mixing pipeline.
//!
//! Two kinds of failure exist: an input outside its physical domain, and a
//! derived denominator that came out as zero.  Neither is recoverable.
use thiserror::Error;

pub type CrnResult<T> = Result<T, CrnError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CrnError {
    /// Input value outside the domain where the equations are defined.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A quantity used as a divisor evaluated to zero.
    #[error("division by zero while computing {quantity}")]
    DivisionByZero { quantity: &'static str },
}

impl CrnError {
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter { name, value, reason }
    }

    pub fn div_zero(quantity: &'static str) -> Self {
        Self::DivisionByZero { quantity }
    }
}
